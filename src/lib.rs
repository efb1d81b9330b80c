#![forbid(unsafe_code)]

//! Tile navigation core.
//!
//! An ordered set of page tiles with single-selection navigation, pointer
//! drag reordering, a per-tile settings panel with outside-click dismissal,
//! and hover-triggered insertion of new tiles between existing ones.
//!
//! This crate is the interaction state machine only. Rendering is an external
//! collaborator: it dispatches primitive events (click, drag, pointer, focus)
//! into the [`TileNav`] command surface, then re-reads [`NavSnapshot`] to
//! redraw. No component here calls back into the renderer.
//!
//! # Components
//!
//! - [`store::TileStore`]: ordered tile collection, id generation, reorder.
//! - [`selection::SelectionState`]: active tile, transient focus, hovered gap.
//! - [`drag::DragState`]: Idle → Dragging → Idle reorder coordinator.
//! - [`panel::PanelController`]: at-most-one open settings panel, scoped
//!   outside-pointer observer, named action hooks.
//! - [`insert`]: gap-validated insertion of new tiles.
//! - [`TileNav`]: facade owning all of the above.
//!
//! # Example
//!
//! ```
//! use tilenav::TileNav;
//!
//! let mut nav = TileNav::default();
//! nav.begin_drag(&"other".into()).unwrap();
//! assert!(nav.drop_on(&"info".into()));
//!
//! let snapshot = nav.snapshot();
//! assert_eq!(snapshot.tiles[0].id().as_str(), "other");
//! ```

use std::fmt;

pub mod drag;
pub mod insert;
mod nav;
pub mod panel;
pub mod selection;
pub mod store;
pub mod tile;

pub use drag::DragState;
pub use insert::{NEW_TILE_LABEL, insert_at_gap};
pub use nav::{NavSnapshot, TileNav};
pub use panel::{NoopObserver, PanelAction, PanelActions, PanelController, PointerObserver};
pub use selection::SelectionState;
pub use store::TileStore;
pub use tile::{Tile, TileId};

/// Errors that can occur in the navigation core.
///
/// Anything not covered here (selecting an unknown id, moving or dropping on
/// an absent tile) is a silent no-op so the widget stays robust against stale
/// event targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// Seed was rejected at initialization (duplicate id or empty).
    InvalidSeed(String),
    /// Tile id is already present in the order.
    DuplicateId(TileId),
    /// Gap or insertion index outside the valid range.
    IndexOutOfRange { index: isize, len: usize },
    /// `begin_drag` was called while a drag session is already active.
    AlreadyDragging(TileId),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSeed(msg) => write!(f, "invalid seed: {msg}"),
            Self::DuplicateId(id) => write!(f, "tile id `{id}` already present"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range (length {len})")
            }
            Self::AlreadyDragging(id) => {
                write!(f, "drag session already active for `{id}`")
            }
        }
    }
}

impl std::error::Error for NavError {}
