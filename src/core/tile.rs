//! Tiles and the double-six catalog.
//!
//! ## Tile
//!
//! An unordered pair of pips stored canonically (`low <= high`), so derived
//! equality and hashing are orientation independent: `Tile::new(3, 5)` and
//! `Tile::new(5, 3)` are the same tile.
//!
//! ## TileSet
//!
//! The immutable catalog of all 28 tiles. Rounds never draw from the catalog
//! directly; they take a fresh copy via `TileSet::pool()` so nothing a round
//! does can leak into the next one.
//!
//! ```
//! use domino_sim::core::{Tile, TileSet};
//!
//! assert_eq!(TileSet::tiles().len(), 28);
//! assert_eq!(Tile::new(6, 3), Tile::new(3, 6));
//! assert!(Tile::new(4, 4).is_double());
//! ```

use serde::{Deserialize, Serialize};

use super::error::{DominoError, Result};

/// Highest pip value on a double-six set.
pub const MAX_PIP: u8 = 6;

/// Number of distinct tiles in a double-six set.
pub const TILE_COUNT: usize = 28;

/// One physical domino.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[u8; 2]", into = "[u8; 2]")]
pub struct Tile {
    low: u8,
    high: u8,
}

impl Tile {
    /// Create a tile from two pip values in either order.
    ///
    /// Panics if either pip is above 6. Use `try_new` for untrusted input.
    #[must_use]
    pub fn new(a: u8, b: u8) -> Self {
        assert!(a <= MAX_PIP && b <= MAX_PIP, "pip values must be in 0..=6, got ({a}, {b})");
        Self::canonical(a, b)
    }

    /// Create a tile, rejecting pip values above 6.
    pub fn try_new(a: u8, b: u8) -> Result<Self> {
        if a > MAX_PIP {
            return Err(DominoError::PipOutOfRange(a));
        }
        if b > MAX_PIP {
            return Err(DominoError::PipOutOfRange(b));
        }
        Ok(Self::canonical(a, b))
    }

    const fn canonical(a: u8, b: u8) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    #[must_use]
    pub const fn low(self) -> u8 {
        self.low
    }

    #[must_use]
    pub const fn high(self) -> u8 {
        self.high
    }

    /// Both pips, low first.
    #[must_use]
    pub const fn pips(self) -> (u8, u8) {
        (self.low, self.high)
    }

    /// Pip total of the tile.
    #[must_use]
    pub const fn sum(self) -> u32 {
        self.low as u32 + self.high as u32
    }

    #[must_use]
    pub const fn is_double(self) -> bool {
        self.low == self.high
    }

    /// Whether either half shows `pip`.
    #[must_use]
    pub const fn has(self, pip: u8) -> bool {
        self.low == pip || self.high == pip
    }

    /// The pip on the opposite half from `pip`, if the tile shows `pip` at all.
    ///
    /// For a double this is `pip` itself.
    #[must_use]
    pub const fn other(self, pip: u8) -> Option<u8> {
        if self.low == pip {
            Some(self.high)
        } else if self.high == pip {
            Some(self.low)
        } else {
            None
        }
    }

    /// Dense catalog index in `0..28`.
    #[must_use]
    pub const fn id(self) -> usize {
        let high = self.high as usize;
        high * (high + 1) / 2 + self.low as usize
    }
}

impl TryFrom<[u8; 2]> for Tile {
    type Error = DominoError;

    fn try_from(pips: [u8; 2]) -> Result<Self> {
        Tile::try_new(pips[0], pips[1])
    }
}

impl From<Tile> for [u8; 2] {
    fn from(tile: Tile) -> Self {
        [tile.low, tile.high]
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.low, self.high)
    }
}

const fn build_catalog() -> [Tile; TILE_COUNT] {
    let mut tiles = [Tile { low: 0, high: 0 }; TILE_COUNT];
    let mut i = 0;
    let mut high = 0;
    while high <= MAX_PIP {
        let mut low = 0;
        while low <= high {
            tiles[i] = Tile { low, high };
            i += 1;
            low += 1;
        }
        high += 1;
    }
    tiles
}

static CATALOG: [Tile; TILE_COUNT] = build_catalog();

/// The fixed double-six catalog.
#[derive(Clone, Copy, Debug, Default)]
pub struct TileSet;

impl TileSet {
    /// All 28 tiles, ordered by catalog id.
    #[must_use]
    pub fn tiles() -> &'static [Tile; TILE_COUNT] {
        &CATALOG
    }

    /// A fresh drawable pool for one round.
    #[must_use]
    pub fn pool() -> Vec<Tile> {
        CATALOG.to_vec()
    }

    /// Pip total of the whole set (168 for double-six).
    #[must_use]
    pub fn total_pips() -> u32 {
        CATALOG.iter().map(|t| t.sum()).sum()
    }
}
