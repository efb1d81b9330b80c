#![forbid(unsafe_code)]

//! Ordered tile collection.
//!
//! [`TileStore`] owns the tile order and id generation. Insertion order is
//! navigation/render order.
//!
//! # Invariants
//!
//! 1. Ids are unique within the order. Seeds with duplicates are rejected,
//!    never silently deduped.
//! 2. [`TileStore::move_tile`] preserves the length and the id set; reorder
//!    never creates, loses, or duplicates a tile.
//! 3. [`TileStore::generate_id`] never returns an id already present, even
//!    under rapid repeated calls within the same logical instant.

use ahash::AHashSet;

use crate::NavError;
use crate::tile::{Tile, TileId};

/// Ordered collection of tiles with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct TileStore {
    tiles: Vec<Tile>,
    next_id: u64,
}

impl TileStore {
    /// Create a store from a seed order.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidSeed`] if the seed contains duplicate ids.
    pub fn new(seed: Vec<Tile>) -> Result<Self, NavError> {
        let mut seen = AHashSet::with_capacity(seed.len());
        for tile in &seed {
            if !seen.insert(tile.id().clone()) {
                return Err(NavError::InvalidSeed(format!(
                    "duplicate tile id `{}`",
                    tile.id()
                )));
            }
        }
        Ok(Self {
            tiles: seed,
            next_id: 0,
        })
    }

    /// The seed the original widget ships with: four pages.
    #[must_use]
    pub fn default_seed() -> Vec<Tile> {
        vec![
            Tile::new("info", "Info"),
            Tile::new("details", "Details"),
            Tile::new("other", "Other"),
            Tile::new("ending", "Ending"),
        ]
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the order is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in navigation order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Whether an id is present.
    #[must_use]
    pub fn contains(&self, id: &TileId) -> bool {
        self.position(id).is_some()
    }

    /// Position of an id in the order.
    #[must_use]
    pub fn position(&self, id: &TileId) -> Option<usize> {
        self.tiles.iter().position(|tile| tile.id() == id)
    }

    /// Tile by id.
    #[must_use]
    pub fn get(&self, id: &TileId) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.id() == id)
    }

    /// Id of the first tile, if any.
    #[must_use]
    pub fn first_id(&self) -> Option<&TileId> {
        self.tiles.first().map(Tile::id)
    }

    /// Insert `tile` immediately after position `index`.
    ///
    /// `index == -1` inserts at the front; the valid range is
    /// `[-1, len - 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::IndexOutOfRange`] for an index outside that range
    /// and [`NavError::DuplicateId`] if the tile's id is already present.
    pub fn insert_after(&mut self, index: isize, tile: Tile) -> Result<(), NavError> {
        let len = self.tiles.len();
        if index < -1 || index >= len as isize {
            return Err(NavError::IndexOutOfRange { index, len });
        }
        if self.contains(tile.id()) {
            return Err(NavError::DuplicateId(tile.id().clone()));
        }
        tracing::debug!(message = "store.insert", index, id = %tile.id());
        let at = (index + 1) as usize;
        self.tiles.insert(at, tile);
        Ok(())
    }

    /// Produce an id guaranteed unique within the current order.
    ///
    /// Monotonic counter with a collision skip, so externally seeded ids of
    /// the same shape can never be handed out twice.
    pub fn generate_id(&mut self) -> TileId {
        loop {
            let candidate = TileId::new(format!("new-{}", self.next_id));
            self.next_id = self.next_id.wrapping_add(1);
            if !self.contains(&candidate) {
                return candidate;
            }
        }
    }

    /// Move the tile with `source` immediately before the tile with `target`.
    ///
    /// The target position is resolved after removing the source, so the tile
    /// always lands directly before `target` in the resulting order and all
    /// other relative orderings are preserved.
    ///
    /// No-op returning `false` when `source == target` or either id is
    /// absent (a drop may reference a tile removed mid-gesture).
    pub fn move_tile(&mut self, source: &TileId, target: &TileId) -> bool {
        if source == target {
            return false;
        }
        let Some(from) = self.position(source) else {
            return false;
        };
        if !self.contains(target) {
            return false;
        }
        let moved = self.tiles.remove(from);
        let to = self.position(target).map_or(self.tiles.len(), |idx| idx);
        tracing::debug!(message = "store.reorder", source = %source, target = %target, from, to);
        self.tiles.insert(to, moved);
        true
    }

    /// Remove a tile by id.
    ///
    /// Plumbing for an external delete action; the core never calls this on
    /// its own. Returns the removed tile, or `None` if the id is absent.
    pub fn remove(&mut self, id: &TileId) -> Option<Tile> {
        let at = self.position(id)?;
        tracing::debug!(message = "store.remove", id = %id, at);
        Some(self.tiles.remove(at))
    }
}
