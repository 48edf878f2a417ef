//! Open ends and legal-move enumeration.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Hand, Tile, HAND_CAPACITY};

/// One extremity of the table line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum End {
    /// `end1`: the head of the line. Plays here are prepended.
    Left,
    /// `end2`: the tail of the line. Plays here are appended.
    Right,
}

/// The two pip values currently exposed on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpenEnds {
    pub left: u8,
    pub right: u8,
}

impl OpenEnds {
    #[must_use]
    pub const fn new(left: u8, right: u8) -> Self {
        Self { left, right }
    }

    /// Pip exposed at `end`.
    #[must_use]
    pub const fn at(self, end: End) -> u8 {
        match end {
            End::Left => self.left,
            End::Right => self.right,
        }
    }

    /// A tile that fits both ends at once: the capicua condition.
    #[must_use]
    pub fn spans(self, tile: Tile) -> bool {
        tile == Tile::new(self.left, self.right)
    }
}

/// A tile and the end it attaches to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Play {
    pub tile: Tile,
    pub end: End,
}

impl Play {
    #[must_use]
    pub const fn new(tile: Tile, end: End) -> Self {
        Self { tile, end }
    }
}

/// Legal plays for one hand: at most one per tile per end.
pub type Plays = SmallVec<[Play; 2 * HAND_CAPACITY]>;

/// Every (tile, end) pair from `hand` that matches the exposed pip.
///
/// A tile that fits both ends is listed twice, once per end. An empty
/// result means the holder must pass.
#[must_use]
pub fn possible_plays(hand: &Hand, ends: OpenEnds) -> Plays {
    let mut plays = Plays::new();
    for tile in hand.iter() {
        if tile.has(ends.left) {
            plays.push(Play::new(tile, End::Left));
        }
        if tile.has(ends.right) {
            plays.push(Play::new(tile, End::Right));
        }
    }
    plays
}
