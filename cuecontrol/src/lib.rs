//! # cuecontrol
//!
//! Playback-synchronization core: turns the pull-only remote channel of
//! [`cuechannel`] into a reliable "play this clip from time A to time B,
//! then hand back" operation.
//!
//! The remote player never pushes events, so the controller drives every
//! session through probes: wait until the player is ready, cue the clip
//! start, then watch the playback position until it passes the clip end.
//! A session is one pass of that sequence for one playlist item; chaining
//! across items stays at the call site, which keeps "stop after N" or
//! "stop on user interrupt" trivial to express:
//!
//! ```rust,ignore
//! let controller = Arc::new(PlaybackController::new(channel, cursor));
//! while let Some(item) = controller.cursor().advance() {
//!     match controller.run_session(item).await? {
//!         SessionOutcome::Completed => continue,
//!         SessionOutcome::Superseded => break, // someone picked another item
//!     }
//! }
//! ```
//!
//! Interruption is never signalled to a session directly. Changing the
//! cursor's target bumps its generation counter, and the in-flight
//! session notices the mismatch at its next resumption point and drops
//! out silently ([`SessionOutcome::Superseded`]). Channel errors are
//! terminal for the session, never retried.

mod config;
mod controller;
mod errors;
pub mod poll;

pub use config::ControllerConfig;
pub use controller::{Phase, PlaybackController, SessionOutcome};
pub use errors::{ControllerError, Result};
