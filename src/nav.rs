#![forbid(unsafe_code)]

//! The [`TileNav`] facade: one owner for every piece of navigation state.
//!
//! The renderer dispatches primitive interaction events into the command
//! surface here, then re-reads [`NavSnapshot`] to redraw. All mutation is
//! synchronous and runs to completion inside the handling command; there is
//! no suspension and no shared mutable state.
//!
//! Cross-component invariant upheld here: every id referenced by selection
//! or panel state exists in the tile order. Commands that can remove ids
//! call [`TileNav::repair`], which falls back to the first remaining tile
//! when the active one disappears and closes a panel whose tile is gone.

use crate::NavError;
use crate::drag::DragState;
use crate::insert;
use crate::panel::{NoopObserver, PanelAction, PanelActions, PanelController, PointerObserver};
use crate::selection::SelectionState;
use crate::store::TileStore;
use crate::tile::{Tile, TileId};

/// Read-only view of all navigation state, handed to the renderer.
#[derive(Debug, Clone)]
pub struct NavSnapshot<'a> {
    /// Tiles in navigation/render order.
    pub tiles: &'a [Tile],
    /// Active tile id; always present in `tiles`.
    pub active: &'a TileId,
    /// Focused tile id, if any.
    pub focused: Option<&'a TileId>,
    /// Hovered gap index, if any.
    pub hovered_gap: Option<usize>,
    /// Tile being dragged, if a drag session is active.
    pub dragging: Option<&'a TileId>,
    /// Tile whose settings panel is open, if any.
    pub open_panel: Option<&'a TileId>,
}

/// Tile navigation widget core.
///
/// Owns the tile store, selection/focus tracking, the drag coordinator, and
/// the panel controller, and exposes the command surface the renderer feeds
/// events into.
#[derive(Debug)]
pub struct TileNav<O: PointerObserver = NoopObserver> {
    store: TileStore,
    selection: SelectionState,
    drag: DragState,
    panel: PanelController<O>,
}

impl TileNav<NoopObserver> {
    /// Create from a seed order with the no-op pointer observer.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidSeed`] when the seed has duplicate ids or
    /// is empty (selection always needs a live active tile).
    pub fn new(seed: Vec<Tile>) -> Result<Self, NavError> {
        Self::with_observer(seed, NoopObserver)
    }
}

impl Default for TileNav<NoopObserver> {
    /// Navigation over the default four-page seed, first tile active.
    fn default() -> Self {
        Self::new(TileStore::default_seed()).expect("default seed is non-empty with unique ids")
    }
}

impl<O: PointerObserver> TileNav<O> {
    /// Create from a seed order and a renderer-supplied pointer observer.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidSeed`] when the seed has duplicate ids or
    /// is empty.
    pub fn with_observer(seed: Vec<Tile>, observer: O) -> Result<Self, NavError> {
        let store = TileStore::new(seed)?;
        let Some(active) = store.first_id().cloned() else {
            return Err(NavError::InvalidSeed(
                "seed must contain at least one tile".into(),
            ));
        };
        Ok(Self {
            store,
            selection: SelectionState::new(active),
            drag: DragState::new(),
            panel: PanelController::with_observer(observer),
        })
    }

    /// Read-only snapshot of all state.
    #[must_use]
    pub fn snapshot(&self) -> NavSnapshot<'_> {
        NavSnapshot {
            tiles: self.store.tiles(),
            active: self.selection.active(),
            focused: self.selection.focused(),
            hovered_gap: self.selection.hovered_gap(),
            dragging: self.drag.dragging(),
            open_panel: self.panel.open_panel(),
        }
    }

    /// The tile store, read-only.
    #[must_use]
    pub fn store(&self) -> &TileStore {
        &self.store
    }

    // --- Selection & focus ---

    /// Make `id` the active tile. Silent no-op on unknown ids.
    pub fn select(&mut self, id: &TileId) -> bool {
        self.selection.select(&self.store, id)
    }

    /// Mark `id` as focused.
    pub fn focus(&mut self, id: &TileId) {
        self.selection.focus(id);
    }

    /// Clear focus.
    pub fn blur(&mut self) {
        self.selection.blur();
    }

    /// Set or clear the hovered gap.
    pub fn set_hovered_gap(&mut self, gap: Option<usize>) {
        self.selection.set_hovered_gap(gap);
    }

    // --- Drag reordering ---

    /// Start a drag session for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::AlreadyDragging`] when a session is active.
    pub fn begin_drag(&mut self, id: &TileId) -> Result<(), NavError> {
        self.drag.begin_drag(id)
    }

    /// Advisory: whether `id` is a valid drop target right now.
    #[must_use]
    pub fn drag_over(&self, id: &TileId) -> bool {
        self.drag.drag_over(&self.store, id)
    }

    /// Drop the dragged tile onto `target`. Always returns to Idle; `true`
    /// when the order changed.
    pub fn drop_on(&mut self, target: &TileId) -> bool {
        self.drag.drop_on(&mut self.store, target)
    }

    /// End the drag session without reordering.
    pub fn cancel_drag(&mut self) -> bool {
        self.drag.cancel()
    }

    // --- Settings panel ---

    /// Toggle the settings panel for `id`.
    pub fn toggle_panel(&mut self, id: &TileId) -> bool {
        let opened = self.panel.toggle(id);
        if opened && id != self.selection.active() {
            // The stock renderer only offers the menu on the active tile.
            tracing::debug!(message = "panel.open_inactive", id = %id, active = %self.selection.active());
        }
        opened
    }

    /// Close the panel when a pointer interaction landed outside it.
    pub fn close_if_outside(&mut self, pointer_inside: bool) -> bool {
        self.panel.close_if_outside(pointer_inside)
    }

    /// Close the open panel programmatically.
    pub fn close_panel(&mut self) -> bool {
        self.panel.close()
    }

    /// Dispatch a panel menu action to `hooks` with the owning tile id.
    pub fn panel_action(&mut self, action: PanelAction, hooks: &mut dyn PanelActions) -> bool {
        self.panel.invoke(action, hooks)
    }

    // --- Insertion ---

    /// Insert a new tile into the gap after position `gap`.
    ///
    /// The affordance is only actionable while its gap is the currently
    /// hovered one: a valid-range `gap` that is not hovered is a stale
    /// affordance click and returns `Ok(None)` without inserting.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::IndexOutOfRange`] when `gap` is not a gap between
    /// two tiles.
    pub fn insert_at_gap(&mut self, gap: usize) -> Result<Option<TileId>, NavError> {
        let len = self.store.len();
        if len < 2 || gap >= len - 1 {
            return Err(NavError::IndexOutOfRange {
                index: gap as isize,
                len,
            });
        }
        if self.selection.hovered_gap() != Some(gap) {
            tracing::debug!(message = "nav.insert_ungated", gap);
            return Ok(None);
        }
        insert::insert_at_gap(&mut self.store, gap).map(Some)
    }

    // --- Removal plumbing ---

    /// Remove a tile, repairing selection and panel state.
    ///
    /// This is the plumbing a delete hook's owner calls; the core never
    /// deletes on its own. Removing the last remaining tile is refused
    /// (returns `None`) so the active id always references a live tile.
    pub fn remove(&mut self, id: &TileId) -> Option<Tile> {
        if self.store.len() <= 1 {
            return None;
        }
        let removed = self.store.remove(id)?;
        self.repair();
        Some(removed)
    }

    /// Re-establish cross-component id invariants after tiles disappeared.
    fn repair(&mut self) {
        self.selection.repair(&self.store);
        self.panel.retain_valid(&self.store);
        if self
            .drag
            .dragging()
            .is_some_and(|id| !self.store.contains(id))
        {
            self.drag.cancel();
        }
        let gap_count = self.store.len().saturating_sub(1);
        if self
            .selection
            .hovered_gap()
            .is_some_and(|gap| gap >= gap_count)
        {
            self.selection.set_hovered_gap(None);
        }
    }
}
