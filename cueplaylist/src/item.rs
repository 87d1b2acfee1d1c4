//! Immutable clip records.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Stable identity of a playlist item.
///
/// Data sources that expose real identifiers (catalog IRIs, database
/// keys) should use them directly; the cursor only compares and hashes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        ItemId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One cued performance: a clip window inside an externally hosted page.
///
/// Immutable once created. The playlist owns the items; consumers hold
/// `Arc` references and never mutate them.
///
/// `start`/`end` delimit the clip in seconds inside the hosted media.
/// Both are optional: with no `start` the player is left wherever it
/// begins, with no `end` the session completes as soon as the clip is
/// cued rather than waiting for a position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaylistItem {
    /// Stable identity within the playlist.
    pub id: ItemId,
    /// Grouping key: the episode this performance belongs to.
    pub episode: u32,
    /// Song title.
    pub title: String,
    /// Performer credit, when the data source provides one.
    pub performer: Option<String>,
    /// Page hosting the player for this clip.
    pub media_url: String,
    /// Clip start in seconds (>= 0).
    pub start: Option<f64>,
    /// Clip end in seconds (> start when both are present).
    pub end: Option<f64>,
}

impl PlaylistItem {
    /// Builds a validated item.
    ///
    /// # Errors
    /// Returns [`Error::InvalidClipWindow`] when `start` is negative or
    /// non-finite, `end` is non-finite, or `end <= start` with both
    /// present.
    pub fn new(
        id: impl Into<String>,
        episode: u32,
        title: impl Into<String>,
        media_url: impl Into<String>,
        start: Option<f64>,
        end: Option<f64>,
    ) -> Result<Self> {
        validate_window(start, end)?;
        Ok(Self {
            id: ItemId::new(id),
            episode,
            title: title.into(),
            performer: None,
            media_url: media_url.into(),
            start,
            end,
        })
    }

    /// Attaches a performer credit.
    pub fn with_performer(mut self, performer: impl Into<String>) -> Self {
        self.performer = Some(performer.into());
        self
    }

    /// True when the session for this item has a position to wait for.
    pub fn has_end(&self) -> bool {
        self.end.is_some()
    }
}

fn validate_window(start: Option<f64>, end: Option<f64>) -> Result<()> {
    let start_ok = start.is_none_or(|s| s.is_finite() && s >= 0.0);
    let end_ok = end.is_none_or(|e| e.is_finite() && e >= 0.0);
    let ordered = match (start, end) {
        (Some(s), Some(e)) => e > s,
        _ => true,
    };
    if start_ok && end_ok && ordered {
        Ok(())
    } else {
        Err(Error::InvalidClipWindow { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_full_window() {
        let item = PlaylistItem::new(
            "live-1",
            1,
            "レディー・アクション！",
            "https://example.test/episodes/13143",
            Some(1009.0),
            Some(1136.0),
        )
        .unwrap();
        assert_eq!(item.id.as_str(), "live-1");
        assert!(item.has_end());
    }

    #[test]
    fn window_may_be_partially_absent() {
        assert!(PlaylistItem::new("a", 1, "t", "u", None, None).is_ok());
        assert!(PlaylistItem::new("b", 1, "t", "u", Some(10.0), None).is_ok());
        assert!(PlaylistItem::new("c", 1, "t", "u", None, Some(10.0)).is_ok());
    }

    #[test]
    fn rejects_inverted_or_empty_window() {
        assert!(PlaylistItem::new("a", 1, "t", "u", Some(20.0), Some(10.0)).is_err());
        assert!(PlaylistItem::new("b", 1, "t", "u", Some(10.0), Some(10.0)).is_err());
    }

    #[test]
    fn rejects_negative_or_non_finite_times() {
        assert!(PlaylistItem::new("a", 1, "t", "u", Some(-1.0), None).is_err());
        assert!(PlaylistItem::new("b", 1, "t", "u", Some(f64::NAN), None).is_err());
        assert!(PlaylistItem::new("c", 1, "t", "u", Some(0.0), Some(f64::INFINITY)).is_err());
        // A lone end is a position too: a negative one would let the
        // end wait complete on its first probe.
        assert!(PlaylistItem::new("d", 1, "t", "u", None, Some(-5.0)).is_err());
    }
}
