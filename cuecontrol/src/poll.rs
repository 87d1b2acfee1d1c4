//! Generic fixed-delay polling primitive.
//!
//! One implementation serves both chains the controller runs (the 100 ms
//! ready-state wait and the 500 ms current-time wait), so both share one
//! test surface. Within one chain, a probe is only issued after the
//! previous one resolved; probes never overlap.

use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::trace;

/// Pacing of a poll chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollPolicy {
    /// Fixed delay between an unsatisfied probe and the next one.
    pub interval: Duration,
    /// Upper bound on probes, `None` for unbounded.
    pub max_attempts: Option<u64>,
}

impl PollPolicy {
    /// Unbounded chain at a fixed interval.
    pub fn every(interval: Duration) -> Self {
        Self {
            interval,
            max_attempts: None,
        }
    }

    /// Bounds the chain to at most `attempts` probes.
    pub fn with_max_attempts(mut self, attempts: u64) -> Self {
        self.max_attempts = Some(attempts);
        self
    }
}

/// How a poll chain ended, short of a probe error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    /// The predicate held.
    Satisfied,
    /// The staleness check tripped; the chain stopped without further
    /// probes. Expected and benign, not an error.
    Abandoned,
    /// The configured attempt budget ran out before the predicate held.
    Exhausted { attempts: u64 },
}

/// Probes until `satisfied` holds over a probe result.
///
/// After every unsatisfied probe the chain consults `is_stale`; a stale
/// chain resolves [`PollOutcome::Abandoned`] without rescheduling. A
/// probe error resolves the chain with that error immediately; only
/// predicate-not-yet-satisfied is retried.
pub async fn poll_until<T, E, F, Fut, P, S>(
    mut probe: F,
    satisfied: P,
    policy: &PollPolicy,
    is_stale: S,
) -> Result<PollOutcome, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: Fn(&T) -> bool,
    S: Fn() -> bool,
{
    let mut attempts: u64 = 0;
    loop {
        let value = probe().await?;
        attempts += 1;
        if satisfied(&value) {
            trace!(attempts, "poll predicate satisfied");
            return Ok(PollOutcome::Satisfied);
        }
        if is_stale() {
            trace!(attempts, "poll chain superseded, abandoning");
            return Ok(PollOutcome::Abandoned);
        }
        if let Some(max) = policy.max_attempts {
            if attempts >= max {
                return Ok(PollOutcome::Exhausted { attempts });
            }
        }
        sleep(policy.interval).await;
    }
}
