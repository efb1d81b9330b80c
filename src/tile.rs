#![forbid(unsafe_code)]

//! Tile record types.

use std::fmt;

/// Opaque stable identifier for a tile.
///
/// Ids are stable for the lifetime of a tile and unique within a
/// [`TileStore`](crate::store::TileStore).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct TileId(String);

impl TileId {
    /// Create an id from a string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TileId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TileId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single navigable page tile.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Tile {
    id: TileId,
    label: String,
}

impl Tile {
    /// Create a tile with an id and display label.
    #[must_use]
    pub fn new(id: impl Into<TileId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// The tile's id. Never changes after construction.
    #[must_use]
    pub fn id(&self) -> &TileId {
        &self.id
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the display label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_accessors() {
        let mut tile = Tile::new("info", "Info");
        assert_eq!(tile.id().as_str(), "info");
        assert_eq!(tile.label(), "Info");
        tile.set_label("Information");
        assert_eq!(tile.label(), "Information");
        assert_eq!(tile.id().as_str(), "info");
    }

    #[test]
    fn tile_id_display_and_conversions() {
        let id: TileId = "details".into();
        assert_eq!(id.to_string(), "details");
        assert_eq!(id, TileId::new(String::from("details")));
    }

    #[cfg(feature = "state-persistence")]
    #[test]
    fn tile_serde_round_trip() {
        let tile = Tile::new("info", "Info");
        let json = serde_json::to_string(&tile).unwrap();
        let back: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tile);
    }
}
