//! Descriptive record for the grouping parent of playlist items.

use serde::{Deserialize, Serialize};

/// One episode: the parent grouping for the performances cued from it.
///
/// Purely descriptive. Items reference their episode by `number`; the
/// cursor's [`crate::PlaylistCursor::children_of`] does the grouping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Broadcast number, the grouping key items carry.
    pub number: u32,
    /// Display label.
    pub label: String,
    /// Episode subtitle, when the data source provides one.
    pub subtitle: Option<String>,
    /// Page hosting the episode's player, when available.
    pub media_url: Option<String>,
}

impl Episode {
    pub fn new(number: u32, label: impl Into<String>) -> Self {
        Self {
            number,
            label: label.into(),
            subtitle: None,
            media_url: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_media_url(mut self, url: impl Into<String>) -> Self {
        self.media_url = Some(url.into());
        self
    }
}
