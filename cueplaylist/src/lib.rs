//! # cueplaylist
//!
//! Playlist model for the cueing core: immutable clip records and the
//! cursor that tracks which one is currently targeted.
//!
//! - [`PlaylistItem`]: one cued performance, a media URL plus an
//!   optional start/end window inside it, grouped under an episode.
//! - [`Episode`]: descriptive record for the grouping parent.
//! - [`PlaylistCursor`]: the ordered playlist, the current item, and the
//!   generation counter that stales out superseded playback sessions.
//!
//! The crate is agnostic to where items come from (a static list, a
//! remote catalog query, ...); records carry serde derives so any data
//! source that can produce JSON rows can feed a cursor.

mod cursor;
mod episode;
mod error;
mod item;

pub use cursor::PlaylistCursor;
pub use episode::Episode;
pub use error::{Error, Result};
pub use item::{ItemId, PlaylistItem};
