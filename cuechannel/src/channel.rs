//! The capability trait the playback core consumes.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::ReadyState;

/// Command and probe surface of a remote media player.
///
/// All calls are asynchronous and single-outstanding-per-call. There is
/// no ordering guarantee across distinct calls: a probe issued later may
/// resolve before one issued earlier. Consumers must never rely on FIFO
/// delivery across probes; the playback core orders its own chain by
/// awaiting each call before issuing the next.
#[async_trait]
pub trait MediaChannel: Send + Sync {
    /// Probes the player's buffering state.
    async fn ready_state(&self) -> Result<ReadyState>;

    /// Probes the current playback position, in seconds.
    async fn current_time(&self) -> Result<f64>;

    /// Starts playback on an already-primed player.
    async fn play(&self) -> Result<()>;

    /// Simulates a user-initiated play gesture.
    ///
    /// Required when the player has never been primed: browsers refuse a
    /// scripted `play()` on an element with no prior user activation, so
    /// the adapter clicks the player's own control instead.
    async fn click_play(&self) -> Result<()>;

    /// Moves the playback position, fire-and-forget.
    ///
    /// The call resolves when the command was delivered; whether the
    /// player actually landed on `seconds` is never confirmed. Callers
    /// that care observe the effect through [`Self::current_time`].
    async fn seek(&self, seconds: f64) -> Result<()>;

    /// Applies a named cosmetic patch to the hosting surface.
    ///
    /// Patches are outside the playback sequencing entirely; the
    /// embedding application invokes one once per navigation to strip
    /// the host page's chrome around the player.
    async fn apply_presentation_patch(&self, patch: &str) -> Result<()>;
}
