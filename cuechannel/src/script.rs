//! Script-evaluation binding of the [`MediaChannel`] contract.
//!
//! The concrete vocabulary of a given player page (which element is the
//! media element, which button is the play control, which scripts strip
//! the page chrome) is configuration here, not logic: everything the
//! playback core relies on is expressed through [`MediaChannel`].

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::channel::MediaChannel;
use crate::error::{ChannelError, Result};
use crate::model::ReadyState;

/// Name of the patch registered by default on every [`ScriptChannel`].
///
/// It removes the host page's navigation chrome and margins so the
/// player fills the hosting surface.
pub const HIDE_CHROME_PATCH: &str = "hide-chrome";

const DEFAULT_PLAYER_SELECTOR: &str = "$(\"#player-embed-videoid_html5_api\")[0]";
const DEFAULT_PLAY_BUTTON_SELECTOR: &str = "$(\"#player-ctrl-play\")";

const HIDE_CHROME_SCRIPTS: [&str; 4] = [
    "$(\"nav\").remove()",
    "$(\"#contents\").css({\"cssText\": \"margin-left: 0 !important\"})",
    "$(\".movie-content-movie .video-js\").css({\"cssText\": \"margin: 0 !important\"})",
    "$(\"#player-ctrl-block\").css({\"cssText\": \"margin: 0 !important\"})",
];

/// Pull-only remote-execution primitive.
///
/// One call sends one script to the remote side and yields one decoded
/// JSON value (or a channel error). This is the entire contract the
/// remote player offers: no events, no subscriptions, no ordering
/// guarantee across concurrent evaluations.
#[async_trait]
pub trait ScriptEvaluator: Send + Sync {
    async fn evaluate(&self, script: &str) -> Result<Value>;
}

/// Element identifiers the command snippets are built from.
#[derive(Clone, Debug)]
pub struct PlayerSelectors {
    /// Expression resolving to the media element.
    pub player: String,
    /// Expression resolving to the player's own play control.
    pub play_button: String,
}

impl Default for PlayerSelectors {
    fn default() -> Self {
        Self {
            player: DEFAULT_PLAYER_SELECTOR.to_string(),
            play_button: DEFAULT_PLAY_BUTTON_SELECTOR.to_string(),
        }
    }
}

/// [`MediaChannel`] implementation over any [`ScriptEvaluator`].
///
/// Formats command snippets from the configured selectors, decodes the
/// JSON results, and normalizes odd player replies: an out-of-range
/// `readyState` is logged and treated as [`ReadyState::Unstarted`] (the
/// most conservative branch), never surfaced as an error.
pub struct ScriptChannel<E> {
    evaluator: E,
    selectors: PlayerSelectors,
    patches: HashMap<String, Vec<String>>,
}

impl<E> ScriptChannel<E> {
    /// Wraps an evaluator with the default selectors and the built-in
    /// [`HIDE_CHROME_PATCH`].
    pub fn new(evaluator: E) -> Self {
        Self::with_selectors(evaluator, PlayerSelectors::default())
    }

    /// Wraps an evaluator with custom element selectors.
    pub fn with_selectors(evaluator: E, selectors: PlayerSelectors) -> Self {
        let mut patches = HashMap::new();
        patches.insert(
            HIDE_CHROME_PATCH.to_string(),
            HIDE_CHROME_SCRIPTS.iter().map(|s| s.to_string()).collect(),
        );
        Self {
            evaluator,
            selectors,
            patches,
        }
    }

    /// Registers (or replaces) a named presentation patch.
    pub fn with_patch(mut self, name: impl Into<String>, scripts: Vec<String>) -> Self {
        self.patches.insert(name.into(), scripts);
        self
    }

    pub fn selectors(&self) -> &PlayerSelectors {
        &self.selectors
    }
}

impl<E: ScriptEvaluator> ScriptChannel<E> {
    /// Evaluates a snippet whose result value is irrelevant.
    async fn run(&self, script: String) -> Result<()> {
        self.evaluator.evaluate(&script).await.map(|_| ())
    }
}

#[async_trait]
impl<E: ScriptEvaluator> MediaChannel for ScriptChannel<E> {
    async fn ready_state(&self) -> Result<ReadyState> {
        let script = format!("{}.readyState", self.selectors.player);
        let value = self.evaluator.evaluate(&script).await?;
        let raw = value
            .as_i64()
            .or_else(|| value.as_f64().map(|f| f as i64))
            .ok_or_else(|| ChannelError::unexpected_value("numeric readyState", &value))?;
        match ReadyState::from_raw(raw) {
            Some(state) => Ok(state),
            None => {
                warn!(raw, "unknown readyState value, treating player as unstarted");
                Ok(ReadyState::Unstarted)
            }
        }
    }

    async fn current_time(&self) -> Result<f64> {
        let script = format!("{}.currentTime", self.selectors.player);
        let value = self.evaluator.evaluate(&script).await?;
        value
            .as_f64()
            .ok_or_else(|| ChannelError::unexpected_value("numeric currentTime", &value))
    }

    async fn play(&self) -> Result<()> {
        self.run(format!("{}.play()", self.selectors.player)).await
    }

    async fn click_play(&self) -> Result<()> {
        self.run(format!("{}.click()", self.selectors.play_button))
            .await
    }

    async fn seek(&self, seconds: f64) -> Result<()> {
        self.run(format!("{}.currentTime = {}", self.selectors.player, seconds))
            .await
    }

    async fn apply_presentation_patch(&self, patch: &str) -> Result<()> {
        let Some(scripts) = self.patches.get(patch) else {
            debug!(patch, "no such presentation patch registered, skipping");
            return Ok(());
        };
        for script in scripts {
            self.evaluator.evaluate(script).await?;
        }
        Ok(())
    }
}
