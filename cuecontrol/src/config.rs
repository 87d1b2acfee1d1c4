//! Controller configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::poll::PollPolicy;

/// Default cadence of the ready-state poll, in milliseconds.
pub const DEFAULT_READY_POLL_INTERVAL_MS: u64 = 100;

/// Default cadence of the current-time poll, in milliseconds.
pub const DEFAULT_TIME_POLL_INTERVAL_MS: u64 = 500;

/// Tunable knobs of the playback controller.
///
/// The two intervals mirror the control loop of an interactively
/// supervised tool polling a slow external process: fixed delay, never
/// exponential backoff. `max_poll_attempts` bounds each poll chain; by
/// default (`None`) a chain polls until the session is superseded or
/// the channel fails.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Cadence of the ready-state poll while cueing, in milliseconds.
    pub ready_poll_interval_ms: u64,
    /// Cadence of the current-time poll while waiting for the clip end,
    /// in milliseconds.
    pub time_poll_interval_ms: u64,
    /// Upper bound on probes per poll chain, `None` for unbounded.
    pub max_poll_attempts: Option<u64>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            ready_poll_interval_ms: DEFAULT_READY_POLL_INTERVAL_MS,
            time_poll_interval_ms: DEFAULT_TIME_POLL_INTERVAL_MS,
            max_poll_attempts: None,
        }
    }
}

impl ControllerConfig {
    /// Policy of the ready-state chain.
    pub fn ready_policy(&self) -> PollPolicy {
        PollPolicy {
            interval: Duration::from_millis(self.ready_poll_interval_ms),
            max_attempts: self.max_poll_attempts,
        }
    }

    /// Policy of the current-time chain.
    pub fn time_policy(&self) -> PollPolicy {
        PollPolicy {
            interval: Duration::from_millis(self.time_poll_interval_ms),
            max_attempts: self.max_poll_attempts,
        }
    }
}
