#![forbid(unsafe_code)]

//! Hover-gap insertion of new tiles.
//!
//! A gap index `i` identifies the space after the tile at position `i`. Only
//! gaps between two tiles are insertable: the valid range is `[0, len - 1)`,
//! so the gap after the last tile never activates (matching the rendering
//! rule that hides the affordance there).
//!
//! The affordance is only actionable for the currently hovered gap, keyed
//! off [`SelectionState::hovered_gap`](crate::selection::SelectionState::hovered_gap).
//! [`TileNav::insert_at_gap`](crate::TileNav::insert_at_gap) enforces that
//! gate; the function here enforces the range contract only.

use crate::NavError;
use crate::store::TileStore;
use crate::tile::{Tile, TileId};

/// Label assigned to freshly inserted tiles.
pub const NEW_TILE_LABEL: &str = "New Page";

/// Insert a new tile into the gap after position `gap`.
///
/// Generates a fresh id, assigns the default label, and places the tile at
/// position `gap + 1`. Returns the new tile's id.
///
/// # Errors
///
/// Returns [`NavError::IndexOutOfRange`] when `gap` is not in `[0, len - 1)`.
pub fn insert_at_gap(store: &mut TileStore, gap: usize) -> Result<TileId, NavError> {
    let len = store.len();
    if len < 2 || gap >= len - 1 {
        return Err(NavError::IndexOutOfRange {
            index: gap as isize,
            len,
        });
    }
    let id = store.generate_id();
    tracing::debug!(message = "nav.insert_gap", gap, id = %id);
    store.insert_after(gap as isize, Tile::new(id.clone(), NEW_TILE_LABEL))?;
    Ok(id)
}
