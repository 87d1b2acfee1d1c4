//! The session state machine.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use cuechannel::MediaChannel;
use cueplaylist::{PlaylistCursor, PlaylistItem};

use crate::config::ControllerConfig;
use crate::errors::{ControllerError, Result};
use crate::poll::{PollOutcome, poll_until};

/// Phases a playback session moves through.
///
/// `Completed` and `Aborted` are terminal. `Aborted` covers both a
/// channel failure and a session superseded by a newer cursor target;
/// the session result distinguishes the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Waiting for the player to buffer enough to seek.
    AwaitingReady,
    /// Simulating a user play gesture on an unprimed player.
    Priming,
    /// Direct play command issued.
    Playing,
    /// Cueing the clip start position.
    Seeking,
    /// Watching the playback position until it passes the clip end.
    AwaitingEnd,
    Completed,
    Aborted,
}

/// How a session ended when the channel stayed healthy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The full cue sequence ran; the caller typically advances the
    /// cursor and runs the next session.
    Completed,
    /// A newer cursor target staled this session out; nothing further
    /// was sent to the player. No action required.
    Superseded,
}

/// Drives one playlist item at a time through the remote player.
///
/// Each session is a single pass of ready → play → seek → wait-for-end.
/// The controller never loops over the playlist itself: completion
/// resolves the session future, and chaining is the caller's decision.
///
/// The cursor is the single source of truth for interruption. The
/// session captures the cursor's generation when it starts and compares
/// it against the live value at every resumption point; any target
/// change in between (user pick, advance, abort) makes the comparison
/// fail and the session resolve [`SessionOutcome::Superseded`] without
/// touching the player again.
pub struct PlaybackController {
    channel: Arc<dyn MediaChannel>,
    cursor: Arc<PlaylistCursor>,
    config: ControllerConfig,
    phase: watch::Sender<Phase>,
}

impl PlaybackController {
    pub fn new(channel: Arc<dyn MediaChannel>, cursor: Arc<PlaylistCursor>) -> Self {
        Self::with_config(channel, cursor, ControllerConfig::default())
    }

    pub fn with_config(
        channel: Arc<dyn MediaChannel>,
        cursor: Arc<PlaylistCursor>,
        config: ControllerConfig,
    ) -> Self {
        let (phase, _) = watch::channel(Phase::Idle);
        Self {
            channel,
            cursor,
            config,
            phase,
        }
    }

    /// The cursor this controller's staleness checks consult.
    pub fn cursor(&self) -> &Arc<PlaylistCursor> {
        &self.cursor
    }

    /// Subscribes to phase changes.
    ///
    /// A `watch` receiver only guarantees the latest value, which is all
    /// consumers need: the terminal phase, or the current phase for
    /// display.
    pub fn subscribe(&self) -> watch::Receiver<Phase> {
        self.phase.subscribe()
    }

    /// Stales out the in-flight session, if any, by clearing the cursor
    /// target. No channel call is interrupted; the session drops its
    /// next step and resolves [`SessionOutcome::Superseded`].
    pub fn abort_session(&self) {
        self.cursor.clear_current();
    }

    /// Spawned convenience wrapper around [`Self::run_session`]; returns
    /// immediately.
    pub fn start_session(
        self: &Arc<Self>,
        item: Arc<PlaylistItem>,
    ) -> JoinHandle<Result<SessionOutcome>> {
        // The generation belongs to the moment the session is requested,
        // not to the task's first poll: a target change in between must
        // stale the session out before it touches the player.
        let generation = self.cursor.generation();
        let controller = Arc::clone(self);
        tokio::spawn(async move { controller.session(item, generation).await })
    }

    /// Runs one full cue sequence for `item`.
    ///
    /// Resolves `Ok(Completed)` after the clip end passed (or right
    /// after cueing when the item has no end), `Ok(Superseded)` when a
    /// newer cursor target staled the session out, and `Err` on channel
    /// failure or an exhausted poll budget. Errors abort the session
    /// without retry; they never affect the cursor or later sessions.
    pub async fn run_session(&self, item: Arc<PlaylistItem>) -> Result<SessionOutcome> {
        let generation = self.cursor.generation();
        self.session(item, generation).await
    }

    async fn session(&self, item: Arc<PlaylistItem>, generation: u64) -> Result<SessionOutcome> {
        debug!(item = %item.id, generation, "session starting");
        self.set_phase(Phase::Idle, generation);

        match self.drive(&item, generation).await {
            Ok(SessionOutcome::Completed) => {
                self.set_phase(Phase::Completed, generation);
                debug!(item = %item.id, generation, "session completed");
                Ok(SessionOutcome::Completed)
            }
            Ok(SessionOutcome::Superseded) => {
                self.set_phase(Phase::Aborted, generation);
                debug!(item = %item.id, generation, "session superseded");
                Ok(SessionOutcome::Superseded)
            }
            Err(err) => {
                self.set_phase(Phase::Aborted, generation);
                warn!(item = %item.id, generation, error = %err, "session aborted");
                Err(err)
            }
        }
    }

    async fn drive(&self, item: &PlaylistItem, generation: u64) -> Result<SessionOutcome> {
        let channel = &self.channel;

        if self.is_stale(generation) {
            return Ok(SessionOutcome::Superseded);
        }

        // Unprimed players reject a scripted play(); everything else
        // takes the direct path. Out-of-range states were already
        // normalized to Unstarted by the adapter.
        let ready = channel.ready_state().await?;
        if self.is_stale(generation) {
            return Ok(SessionOutcome::Superseded);
        }
        if ready.accepts_play() {
            self.set_phase(Phase::Playing, generation);
            channel.play().await?;
        } else {
            self.set_phase(Phase::Priming, generation);
            channel.click_play().await?;
        }
        if self.is_stale(generation) {
            return Ok(SessionOutcome::Superseded);
        }

        if let Some(start) = item.start {
            self.set_phase(Phase::AwaitingReady, generation);
            let outcome = poll_until(
                || channel.ready_state(),
                |state| state.is_ready(),
                &self.config.ready_policy(),
                || self.is_stale(generation),
            )
            .await?;
            match outcome {
                PollOutcome::Satisfied => {}
                PollOutcome::Abandoned => return Ok(SessionOutcome::Superseded),
                PollOutcome::Exhausted { attempts } => {
                    return Err(ControllerError::PollBudgetExhausted {
                        phase: Phase::AwaitingReady,
                        attempts,
                    });
                }
            }
            if self.is_stale(generation) {
                return Ok(SessionOutcome::Superseded);
            }

            // Fire-and-forget: the command acknowledgement is awaited,
            // the landing position is not confirmed.
            self.set_phase(Phase::Seeking, generation);
            channel.seek(start).await?;
            if self.is_stale(generation) {
                return Ok(SessionOutcome::Superseded);
            }
        }

        if let Some(end) = item.end {
            self.set_phase(Phase::AwaitingEnd, generation);
            let outcome = poll_until(
                || channel.current_time(),
                |time| *time > end,
                &self.config.time_policy(),
                || self.is_stale(generation),
            )
            .await?;
            match outcome {
                PollOutcome::Satisfied => {}
                PollOutcome::Abandoned => return Ok(SessionOutcome::Superseded),
                PollOutcome::Exhausted { attempts } => {
                    return Err(ControllerError::PollBudgetExhausted {
                        phase: Phase::AwaitingEnd,
                        attempts,
                    });
                }
            }
            if self.is_stale(generation) {
                return Ok(SessionOutcome::Superseded);
            }
        }

        Ok(SessionOutcome::Completed)
    }

    fn is_stale(&self, generation: u64) -> bool {
        self.cursor.generation() != generation
    }

    fn set_phase(&self, phase: Phase, generation: u64) {
        debug!(?phase, generation, "phase transition");
        self.phase.send_replace(phase);
    }
}
