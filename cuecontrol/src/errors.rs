//! Error types for the playback core.

use thiserror::Error;

use crate::controller::Phase;

/// Errors that abort a playback session.
///
/// Being superseded by a newer session is not an error (it resolves as
/// [`crate::SessionOutcome::Superseded`]); only channel failures and an
/// exhausted poll budget land here.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// A probe or command failed at the channel layer.
    #[error(transparent)]
    Channel(#[from] cuechannel::ChannelError),

    /// A bounded poll chain ran out of attempts before its predicate
    /// held. Only raised when a maximum is configured; the default
    /// policy polls indefinitely.
    #[error("poll budget exhausted in phase {phase:?} after {attempts} attempts")]
    PollBudgetExhausted { phase: Phase, attempts: u64 },
}

/// Specialized Result type for controller operations.
pub type Result<T> = std::result::Result<T, ControllerError>;
