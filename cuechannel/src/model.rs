//! Typed results returned by channel probes.

/// Coarse classification of the remote player's buffering progress.
///
/// The remote player reports a numeric `readyState` in the HTML media
/// element range 0–4. The playback core only needs three distinctions:
/// a player that was never primed (`Unstarted`, needs a simulated play
/// gesture), a player that accepted media but has not buffered enough to
/// seek reliably (`Loading`), and a fully ready player (`Ready`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyState {
    /// `readyState == 0`: no media attached yet, playback must be
    /// primed through the play button.
    Unstarted,
    /// `readyState` 1–3: media attached, metadata or partial data
    /// available. `play()` is accepted but seeking is not reliable yet.
    Loading,
    /// `readyState == 4`: enough data buffered, safe to seek.
    Ready,
}

impl ReadyState {
    /// Classifies a raw numeric `readyState`.
    ///
    /// Returns `None` for values outside the known 0–4 range; callers
    /// decide the fallback (the script adapter logs and treats unknown
    /// values as [`ReadyState::Unstarted`]).
    pub fn from_raw(raw: i64) -> Option<ReadyState> {
        match raw {
            0 => Some(ReadyState::Unstarted),
            1..=3 => Some(ReadyState::Loading),
            4 => Some(ReadyState::Ready),
            _ => None,
        }
    }

    /// True when the player has buffered enough to seek.
    pub fn is_ready(self) -> bool {
        matches!(self, ReadyState::Ready)
    }

    /// True when a direct `play()` call is meaningful (the element has
    /// media attached). `Unstarted` players need the button-click path.
    pub fn accepts_play(self) -> bool {
        !matches!(self, ReadyState::Unstarted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_ready_states_classify_into_three_buckets() {
        assert_eq!(ReadyState::from_raw(0), Some(ReadyState::Unstarted));
        assert_eq!(ReadyState::from_raw(1), Some(ReadyState::Loading));
        assert_eq!(ReadyState::from_raw(2), Some(ReadyState::Loading));
        assert_eq!(ReadyState::from_raw(3), Some(ReadyState::Loading));
        assert_eq!(ReadyState::from_raw(4), Some(ReadyState::Ready));
    }

    #[test]
    fn out_of_range_values_are_unclassified() {
        assert_eq!(ReadyState::from_raw(5), None);
        assert_eq!(ReadyState::from_raw(-1), None);
        assert_eq!(ReadyState::from_raw(42), None);
    }

    #[test]
    fn only_ready_allows_seeking() {
        assert!(ReadyState::Ready.is_ready());
        assert!(!ReadyState::Loading.is_ready());
        assert!(!ReadyState::Unstarted.is_ready());
    }

    #[test]
    fn unstarted_needs_priming() {
        assert!(!ReadyState::Unstarted.accepts_play());
        assert!(ReadyState::Loading.accepts_play());
        assert!(ReadyState::Ready.accepts_play());
    }
}
