#![forbid(unsafe_code)]

//! Drag-reorder coordinator.
//!
//! State machine `Idle → Dragging → Idle`. [`DragState::drag_over`] is purely
//! advisory and never mutates anything; only [`DragState::drop_on`] commits a
//! reorder. Keeping those separate means the visible order never flickers
//! mid-drag: no partial or speculative mutation happens during the gesture.
//!
//! # Invariants
//!
//! 1. `dragging` is non-`None` only between `begin_drag` and
//!    `drop_on`/`cancel`.
//! 2. Every `drop_on` transitions back to Idle, even when the drop itself is
//!    a no-op (self-drop, unknown target, no session).
//! 3. Overlapping `begin_drag` calls error rather than overwrite: a second
//!    drag start means the renderer missed a drag-end, and overwriting would
//!    hide that bug.
//!
//! The renderer must call [`DragState::cancel`] on drag-end when no drop
//! fired (for example, the pointer was released outside any valid target).

use crate::NavError;
use crate::store::TileStore;
use crate::tile::TileId;

/// Drag session state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct DragState {
    dragging: Option<TileId>,
}

impl DragState {
    /// Create in the Idle state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the tile being dragged, if a session is active.
    #[must_use]
    pub fn dragging(&self) -> Option<&TileId> {
        self.dragging.as_ref()
    }

    /// Whether a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    /// Start a drag session for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::AlreadyDragging`] when a session is active.
    pub fn begin_drag(&mut self, id: &TileId) -> Result<(), NavError> {
        if let Some(current) = &self.dragging {
            return Err(NavError::AlreadyDragging(current.clone()));
        }
        tracing::debug!(message = "drag.begin", id = %id);
        self.dragging = Some(id.clone());
        Ok(())
    }

    /// Advisory: whether `id` is a valid drop target right now.
    ///
    /// Performs no mutation. A `true` result tells the renderer to cancel
    /// native default handling so the drop event fires.
    #[must_use]
    pub fn drag_over(&self, store: &TileStore, id: &TileId) -> bool {
        self.is_dragging() && store.contains(id)
    }

    /// Drop the dragged tile onto `target`, reordering the store.
    ///
    /// Always transitions to Idle. Returns `true` when the order changed;
    /// self-drops, unknown targets, and drops without a session are no-ops.
    pub fn drop_on(&mut self, store: &mut TileStore, target: &TileId) -> bool {
        let Some(source) = self.dragging.take() else {
            return false;
        };
        let moved = store.move_tile(&source, target);
        if moved {
            tracing::debug!(message = "drag.drop", source = %source, target = %target);
        }
        moved
    }

    /// End the drag session without reordering.
    ///
    /// Returns `true` when a session was active.
    pub fn cancel(&mut self) -> bool {
        match self.dragging.take() {
            Some(id) => {
                tracing::debug!(message = "drag.cancel", id = %id);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TileStore;

    fn seeded() -> TileStore {
        TileStore::new(TileStore::default_seed()).unwrap()
    }

    fn ids(store: &TileStore) -> Vec<&str> {
        store.tiles().iter().map(|t| t.id().as_str()).collect()
    }

    #[test]
    fn begin_then_drop_reorders() {
        let mut store = seeded();
        let mut drag = DragState::new();
        drag.begin_drag(&"other".into()).unwrap();
        assert!(drag.is_dragging());
        assert!(drag.drop_on(&mut store, &"info".into()));
        assert_eq!(ids(&store), ["other", "info", "details", "ending"]);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn begin_while_dragging_errors_and_keeps_session() {
        let mut drag = DragState::new();
        drag.begin_drag(&"info".into()).unwrap();
        let err = drag.begin_drag(&"other".into()).unwrap_err();
        assert_eq!(err, NavError::AlreadyDragging(TileId::new("info")));
        assert_eq!(drag.dragging().map(TileId::as_str), Some("info"));
    }

    #[test]
    fn self_drop_is_noop_but_returns_to_idle() {
        let mut store = seeded();
        let mut drag = DragState::new();
        drag.begin_drag(&"info".into()).unwrap();
        assert!(!drag.drop_on(&mut store, &"info".into()));
        assert_eq!(ids(&store), ["info", "details", "other", "ending"]);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn drop_without_session_is_noop() {
        let mut store = seeded();
        let mut drag = DragState::new();
        assert!(!drag.drop_on(&mut store, &"info".into()));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn drop_on_stale_target_still_goes_idle() {
        let mut store = seeded();
        let mut drag = DragState::new();
        drag.begin_drag(&"info".into()).unwrap();
        store.remove(&"ending".into()).unwrap();
        assert!(!drag.drop_on(&mut store, &"ending".into()));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn drag_over_is_advisory_only() {
        let store = seeded();
        let mut drag = DragState::new();
        assert!(!drag.drag_over(&store, &"info".into()));
        drag.begin_drag(&"other".into()).unwrap();
        assert!(drag.drag_over(&store, &"info".into()));
        assert!(!drag.drag_over(&store, &"missing".into()));
        // No mutation happened.
        assert_eq!(ids(&store), ["info", "details", "other", "ending"]);
        assert!(drag.is_dragging());
    }

    #[test]
    fn cancel_ends_session_without_reorder() {
        let mut store = seeded();
        let mut drag = DragState::new();
        drag.begin_drag(&"other".into()).unwrap();
        assert!(drag.cancel());
        assert!(!drag.cancel());
        assert!(!drag.drop_on(&mut store, &"info".into()));
        assert_eq!(ids(&store), ["info", "details", "other", "ending"]);
    }
}
