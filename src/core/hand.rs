//! A participant's private hand.
//!
//! Backed by a `SmallVec` sized to the hand capacity, so a hand never
//! allocates. Insertion order is preserved: strategies that break ties by
//! "first encountered" rely on it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{DominoError, Result};
use super::tile::Tile;

/// Maximum number of tiles a hand can hold.
pub const HAND_CAPACITY: usize = 7;

/// Bounded, unordered bag of tiles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tile>", into = "Vec<Tile>")]
pub struct Hand {
    tiles: SmallVec<[Tile; HAND_CAPACITY]>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from tiles, failing if there are more than 7.
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Result<Self> {
        let mut hand = Self::new();
        for tile in tiles {
            hand.add(tile)?;
        }
        Ok(hand)
    }

    /// Add a tile.
    ///
    /// At capacity this is a no-op that returns `DominoError::HandFull`.
    pub fn add(&mut self, tile: Tile) -> Result<()> {
        if self.is_full() {
            return Err(DominoError::HandFull {
                tile,
                capacity: HAND_CAPACITY,
            });
        }
        self.tiles.push(tile);
        Ok(())
    }

    /// Remove a tile equal to `tile` (in either orientation).
    ///
    /// Returns false if no such tile is held.
    pub fn remove(&mut self, tile: Tile) -> bool {
        match self.tiles.iter().position(|&t| t == tile) {
            Some(pos) => {
                self.tiles.remove(pos);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, tile: Tile) -> bool {
        self.tiles.contains(&tile)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.tiles.len() >= HAND_CAPACITY
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    /// Sum of the pips on every tile held (the hand's "count").
    #[must_use]
    pub fn pip_count(&self) -> u32 {
        self.tiles.iter().map(|t| t.sum()).sum()
    }

    /// Tiles in insertion order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn iter(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.iter().copied()
    }
}

impl TryFrom<Vec<Tile>> for Hand {
    type Error = DominoError;

    fn try_from(tiles: Vec<Tile>) -> Result<Self> {
        Hand::from_tiles(tiles)
    }
}

impl From<Hand> for Vec<Tile> {
    fn from(hand: Hand) -> Self {
        hand.tiles.into_vec()
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for tile in &self.tiles {
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}
