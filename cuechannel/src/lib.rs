//! # cuechannel
//!
//! Typed access to a remote, script-controllable media player.
//!
//! The remote player exposes no event notifications. The only primitive
//! available is a pull-only remote-execution call: send a command, get a
//! single value back after unknown and variable latency. This crate wraps
//! that primitive behind a typed contract so the higher layers never deal
//! with raw scripts or raw result payloads.
//!
//! - [`MediaChannel`]: the capability trait the playback core consumes
//!   (ready-state and current-time probes, play/priming commands, seek,
//!   presentation patches).
//! - [`ScriptEvaluator`] + [`ScriptChannel`]: the concrete binding that
//!   renders the typed contract onto JavaScript snippets built from
//!   configurable element selectors, and decodes the JSON results.
//!
//! Adapters for other players only need to implement [`MediaChannel`]
//! (or [`ScriptEvaluator`] when the player is driven through script
//! evaluation with a different transport).

mod channel;
mod error;
mod model;
mod script;

pub use channel::MediaChannel;
pub use error::{ChannelError, Result};
pub use model::ReadyState;
pub use script::{
    HIDE_CHROME_PATCH, PlayerSelectors, ScriptChannel, ScriptEvaluator,
};
