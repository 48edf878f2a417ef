//! The line of tiles on the table.
//!
//! Placements are stored oriented (the pip facing left, the pip facing
//! right) so the open ends are simply the outer pips of the first and last
//! placement, and the line prints the way it lies on the table.

use im::Vector;

use super::moves::{End, OpenEnds, Play};
use crate::core::{DominoError, Result, Tile};

/// A tile as laid on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub tile: Tile,
    pub left: u8,
    pub right: u8,
}

/// Ordered chain of placed tiles.
#[derive(Clone, Debug, Default)]
pub struct Table {
    line: Vector<Placement>,
}

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the opening tile. Both pips become the open ends.
    pub fn open(&mut self, tile: Tile) -> Result<OpenEnds> {
        if !self.line.is_empty() {
            return Err(DominoError::invariant("opening tile placed on a non-empty table"));
        }
        let (left, right) = tile.pips();
        self.line.push_back(Placement { tile, left, right });
        Ok(OpenEnds::new(left, right))
    }

    /// Attach `play` at its end and return the new open ends.
    ///
    /// The extended end takes the tile's other pip (unchanged for a double).
    pub fn attach(&mut self, play: Play) -> Result<OpenEnds> {
        let ends = self
            .ends()
            .ok_or_else(|| DominoError::invariant("cannot attach to an empty table"))?;
        let exposed = ends.at(play.end);
        let outer = play.tile.other(exposed).ok_or_else(|| {
            DominoError::invariant(format!("{} does not fit open end {}", play.tile, exposed))
        })?;

        let tile = play.tile;
        match play.end {
            End::Left => self.line.push_front(Placement {
                tile,
                left: outer,
                right: exposed,
            }),
            End::Right => self.line.push_back(Placement {
                tile,
                left: exposed,
                right: outer,
            }),
        }

        self.ends()
            .ok_or_else(|| DominoError::invariant("table emptied while attaching"))
    }

    /// Open ends, or `None` before the opening tile.
    #[must_use]
    pub fn ends(&self) -> Option<OpenEnds> {
        let first = self.line.front()?;
        let last = self.line.back()?;
        Some(OpenEnds::new(first.left, last.right))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.line.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    /// Placements from the left end to the right end.
    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.line.iter()
    }

    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.line.iter().map(|p| p.tile)
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.line.is_empty() {
            return f.write_str("(empty)");
        }
        for p in &self.line {
            write!(f, "[{}|{}]", p.left, p.right)?;
        }
        Ok(())
    }
}
