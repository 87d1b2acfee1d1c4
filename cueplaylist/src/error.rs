//! Error types for playlist operations.

/// Errors raised while building items or moving the cursor.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid clip window: start {start:?} / end {end:?}")]
    InvalidClipWindow {
        start: Option<f64>,
        end: Option<f64>,
    },

    #[error("unknown playlist item: {0}")]
    UnknownItem(String),
}

/// Specialized Result type for playlist operations.
pub type Result<T> = std::result::Result<T, Error>;
