//! Error types for remote channel operations.

use thiserror::Error;

/// Errors surfaced by a [`crate::MediaChannel`] implementation.
///
/// Every variant is terminal for the command or probe that produced it:
/// the playback core never retries a failed channel call, it aborts the
/// in-flight session instead.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// The remote-execution transport itself failed (host gone, page
    /// unloaded, socket closed, ...).
    #[error("channel transport failure: {0}")]
    Transport(String),

    /// The remote side rejected or failed to run a script.
    #[error("script evaluation failed for `{script}`: {message}")]
    Script { script: String, message: String },

    /// A probe resolved, but its payload could not be decoded as the
    /// expected type.
    #[error("unexpected {expected} payload: {value}")]
    UnexpectedValue { expected: String, value: String },
}

impl ChannelError {
    pub fn transport(message: impl Into<String>) -> Self {
        ChannelError::Transport(message.into())
    }

    pub fn script(script: impl Into<String>, message: impl Into<String>) -> Self {
        ChannelError::Script {
            script: script.into(),
            message: message.into(),
        }
    }

    pub fn unexpected_value(expected: &str, value: &serde_json::Value) -> Self {
        ChannelError::UnexpectedValue {
            expected: expected.to_string(),
            value: value.to_string(),
        }
    }
}

/// Specialized Result type for channel operations.
pub type Result<T> = std::result::Result<T, ChannelError>;
