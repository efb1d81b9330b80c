#![forbid(unsafe_code)]

//! Selection, focus, and hovered-gap tracking.
//!
//! [`SelectionState`] owns which tile is active, which is focused, and which
//! gap between tiles is hovered. Selection always references a live tile;
//! focus is purely presentational and mutually independent of selection (a
//! tile can be focused without being active).

use crate::store::TileStore;
use crate::tile::TileId;

/// Active tile, transient focus, and hovered gap.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct SelectionState {
    active: TileId,
    focused: Option<TileId>,
    hovered_gap: Option<usize>,
}

impl SelectionState {
    /// Create with an initial active tile.
    #[must_use]
    pub fn new(active: TileId) -> Self {
        Self {
            active,
            focused: None,
            hovered_gap: None,
        }
    }

    /// Currently active tile id.
    #[must_use]
    pub fn active(&self) -> &TileId {
        &self.active
    }

    /// Currently focused tile id, if any.
    #[must_use]
    pub fn focused(&self) -> Option<&TileId> {
        self.focused.as_ref()
    }

    /// Hovered gap index, if any. A gap index `i` is the space after the
    /// tile at position `i`.
    #[must_use]
    pub fn hovered_gap(&self) -> Option<usize> {
        self.hovered_gap
    }

    /// Make `id` the active tile.
    ///
    /// Silent no-op returning `false` when the id is not in the order (the
    /// click may reference a tile removed mid-gesture) or already active.
    pub fn select(&mut self, store: &TileStore, id: &TileId) -> bool {
        if self.active == *id || !store.contains(id) {
            return false;
        }
        tracing::debug!(message = "nav.select", from = %self.active, to = %id);
        self.active = id.clone();
        true
    }

    /// Mark `id` as focused. No validity enforcement; focus is presentational.
    pub fn focus(&mut self, id: &TileId) {
        self.focused = Some(id.clone());
    }

    /// Clear focus.
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Set or clear the hovered gap. The renderer clears it on pointer-leave
    /// of the corresponding region.
    pub fn set_hovered_gap(&mut self, gap: Option<usize>) {
        self.hovered_gap = gap;
    }

    /// Re-point selection at the first tile when the active id no longer
    /// exists. Returns `true` when selection changed.
    pub(crate) fn repair(&mut self, store: &TileStore) -> bool {
        if store.contains(&self.active) {
            return false;
        }
        let Some(first) = store.first_id() else {
            return false;
        };
        tracing::debug!(message = "nav.select", from = %self.active, to = %first, reason = "repair");
        self.active = first.clone();
        true
    }
}
