//! The playlist cursor: ordered items, current target, generation.

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::error::{Error, Result};
use crate::item::{ItemId, PlaylistItem};

#[derive(Debug)]
struct CursorState {
    items: Vec<Arc<PlaylistItem>>,
    current: Option<usize>,
    generation: u64,
}

/// Ordered playlist plus the identity of the currently targeted item.
///
/// The cursor is the single source of truth for "which item is the
/// playback core working on right now". Every change of target bumps a
/// monotonically increasing generation counter; playback sessions
/// capture the generation when they start and compare it against
/// [`PlaylistCursor::generation`] at every resumption point. A mismatch
/// means the session was superseded and must drop its next step. That
/// comparison is the only cancellation mechanism in the system.
///
/// All state lives behind one mutex with short critical sections, so
/// generation reads are safe from any task or thread.
#[derive(Debug)]
pub struct PlaylistCursor {
    state: Mutex<CursorState>,
}

impl PlaylistCursor {
    /// Builds a cursor over the given items, in order, with no current
    /// target.
    pub fn new(items: Vec<PlaylistItem>) -> Self {
        Self {
            state: Mutex::new(CursorState {
                items: items.into_iter().map(Arc::new).collect(),
                current: None,
                generation: 0,
            }),
        }
    }

    /// The currently targeted item, if any.
    pub fn current(&self) -> Option<Arc<PlaylistItem>> {
        let state = self.lock();
        state.current.map(|i| Arc::clone(&state.items[i]))
    }

    /// Live generation counter.
    ///
    /// Sessions capture this at start; any later mismatch marks them
    /// stale.
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Targets the item with the given id and bumps the generation.
    ///
    /// # Errors
    /// Returns [`Error::UnknownItem`] and leaves the cursor untouched
    /// when no item carries the id.
    pub fn set_current(&self, id: &ItemId) -> Result<Arc<PlaylistItem>> {
        let mut state = self.lock();
        let index = state
            .items
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| Error::UnknownItem(id.to_string()))?;
        state.current = Some(index);
        state.generation += 1;
        debug!(id = %id, index, generation = state.generation, "cursor target changed");
        Ok(Arc::clone(&state.items[index]))
    }

    /// Drops the current target and bumps the generation.
    ///
    /// This is the abort path: any in-flight session stales out on its
    /// next resumption point without ever being signalled directly.
    pub fn clear_current(&self) {
        let mut state = self.lock();
        state.current = None;
        state.generation += 1;
        debug!(generation = state.generation, "cursor target cleared");
    }

    /// Moves to the cyclic successor of the current index and bumps the
    /// generation.
    ///
    /// Wraps to the first item past the end; with no current target the
    /// first item is selected. On an empty playlist this is a no-op:
    /// `None` is returned and the generation stays put.
    pub fn advance(&self) -> Option<Arc<PlaylistItem>> {
        let mut state = self.lock();
        if state.items.is_empty() {
            return None;
        }
        let next = match state.current {
            Some(i) => (i + 1) % state.items.len(),
            None => 0,
        };
        state.current = Some(next);
        state.generation += 1;
        debug!(index = next, generation = state.generation, "cursor advanced");
        Some(Arc::clone(&state.items[next]))
    }

    /// Items belonging to an episode, preserving playlist order.
    pub fn children_of(&self, episode: u32) -> Vec<Arc<PlaylistItem>> {
        self.lock()
            .items
            .iter()
            .filter(|item| item.episode == episode)
            .map(Arc::clone)
            .collect()
    }

    /// Read-only snapshot of the ordered items.
    pub fn items(&self) -> Vec<Arc<PlaylistItem>> {
        self.lock().items.iter().map(Arc::clone).collect()
    }

    /// Position of an item in the playlist, if present.
    pub fn position_of(&self, id: &ItemId) -> Option<usize> {
        self.lock().items.iter().position(|item| &item.id == id)
    }

    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().items.is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CursorState> {
        self.state.lock().expect("Cursor mutex poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, episode: u32) -> PlaylistItem {
        PlaylistItem::new(id, episode, format!("song {id}"), "https://example.test", None, None)
            .unwrap()
    }

    fn three_item_cursor() -> PlaylistCursor {
        PlaylistCursor::new(vec![item("a", 1), item("b", 1), item("c", 2)])
    }

    #[test]
    fn starts_with_no_target_and_generation_zero() {
        let cursor = three_item_cursor();
        assert!(cursor.current().is_none());
        assert_eq!(cursor.generation(), 0);
    }

    #[test]
    fn set_current_targets_and_bumps_generation() {
        let cursor = three_item_cursor();
        let picked = cursor.set_current(&ItemId::new("b")).unwrap();
        assert_eq!(picked.id.as_str(), "b");
        assert_eq!(cursor.generation(), 1);
        assert_eq!(cursor.current().unwrap().id.as_str(), "b");
    }

    #[test]
    fn set_current_unknown_id_leaves_cursor_untouched() {
        let cursor = three_item_cursor();
        cursor.set_current(&ItemId::new("a")).unwrap();
        let err = cursor.set_current(&ItemId::new("zzz")).unwrap_err();
        assert!(matches!(err, Error::UnknownItem(_)));
        assert_eq!(cursor.generation(), 1);
        assert_eq!(cursor.current().unwrap().id.as_str(), "a");
    }

    #[test]
    fn advance_wraps_past_the_end() {
        let cursor = three_item_cursor();
        cursor.set_current(&ItemId::new("c")).unwrap();
        let next = cursor.advance().unwrap();
        assert_eq!(next.id.as_str(), "a");
    }

    #[test]
    fn advance_from_no_target_selects_first() {
        let cursor = three_item_cursor();
        assert_eq!(cursor.advance().unwrap().id.as_str(), "a");
    }

    #[test]
    fn advance_on_empty_playlist_is_a_no_op() {
        let cursor = PlaylistCursor::new(Vec::new());
        assert!(cursor.advance().is_none());
        assert_eq!(cursor.generation(), 0);
        assert!(cursor.current().is_none());
    }

    #[test]
    fn every_target_change_bumps_generation() {
        let cursor = three_item_cursor();
        cursor.set_current(&ItemId::new("a")).unwrap();
        cursor.advance();
        cursor.clear_current();
        assert_eq!(cursor.generation(), 3);
        assert!(cursor.current().is_none());
    }

    #[test]
    fn children_of_preserves_playlist_order() {
        let cursor = PlaylistCursor::new(vec![
            item("a", 2),
            item("b", 1),
            item("c", 2),
            item("d", 1),
        ]);
        let ep1: Vec<_> = cursor
            .children_of(1)
            .iter()
            .map(|i| i.id.as_str().to_string())
            .collect();
        assert_eq!(ep1, vec!["b", "d"]);
        assert!(cursor.children_of(3).is_empty());
    }

    #[test]
    fn position_and_len_accessors() {
        let cursor = three_item_cursor();
        assert_eq!(cursor.len(), 3);
        assert!(!cursor.is_empty());
        assert_eq!(cursor.position_of(&ItemId::new("c")), Some(2));
        assert_eq!(cursor.position_of(&ItemId::new("x")), None);
    }
}
