//! Decision strategies for the opening move and for every later turn.
//!
//! Strategies are trait-based so new behaviour plugs in without touching
//! the round engine:
//! - `OpeningStrategy`: pick the first tile of a round (no ends exist yet)
//! - `PlayStrategy`: pick a legal (tile, end) pair, or `None` to pass
//!
//! Participants carry a serializable tag (`OpeningRule`, `PlayRule`) that
//! dispatches to the unit-struct implementations below.

use serde::{Deserialize, Serialize};

use super::moves::{possible_plays, OpenEnds, Play};
use crate::core::{GameRng, Hand, Tile};

// =============================================================================
// Opening
// =============================================================================

/// Chooses the tile that opens a round.
pub trait OpeningStrategy {
    /// Pick a tile from `hand`. Returns `None` only for an empty hand.
    fn choose_opening(&self, hand: &Hand, rng: &mut GameRng) -> Option<Tile>;
}

/// Any tile in hand, uniformly.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomOpening;

impl OpeningStrategy for RandomOpening {
    fn choose_opening(&self, hand: &Hand, rng: &mut GameRng) -> Option<Tile> {
        rng.choose(hand.tiles()).copied()
    }
}

/// The highest double, or failing that the heaviest tile.
///
/// Ties on pip sum go to the tile that was dealt first.
#[derive(Clone, Copy, Debug, Default)]
pub struct DoubleOrLargest;

impl OpeningStrategy for DoubleOrLargest {
    fn choose_opening(&self, hand: &Hand, _rng: &mut GameRng) -> Option<Tile> {
        let best_double = hand
            .iter()
            .filter(|t| t.is_double())
            .fold(None, |best: Option<Tile>, t| match best {
                Some(b) if b.high() >= t.high() => Some(b),
                _ => Some(t),
            });

        best_double.or_else(|| first_heaviest(hand.iter()))
    }
}

// =============================================================================
// Play
// =============================================================================

/// Chooses a move once the table has open ends.
pub trait PlayStrategy {
    /// Pick a legal play for `hand` against `ends`, or `None` if there is none.
    fn choose_play(&self, hand: &Hand, ends: OpenEnds, rng: &mut GameRng) -> Option<Play>;
}

/// Any legal (tile, end) pair, uniformly.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPlay;

impl PlayStrategy for RandomPlay {
    fn choose_play(&self, hand: &Hand, ends: OpenEnds, rng: &mut GameRng) -> Option<Play> {
        let plays = possible_plays(hand, ends);
        rng.choose(&plays).copied()
    }
}

/// Greedy: shed the heaviest legal tile first.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeaviestPlay;

impl PlayStrategy for HeaviestPlay {
    fn choose_play(&self, hand: &Hand, ends: OpenEnds, _rng: &mut GameRng) -> Option<Play> {
        let plays = possible_plays(hand, ends);
        let heaviest = first_heaviest(plays.iter().map(|p| p.tile))?;
        plays.into_iter().find(|p| p.tile == heaviest)
    }
}

/// Largest pip sum, earliest wins ties.
fn first_heaviest(tiles: impl Iterator<Item = Tile>) -> Option<Tile> {
    tiles.fold(None, |best: Option<Tile>, t| match best {
        Some(b) if b.sum() >= t.sum() => Some(b),
        _ => Some(t),
    })
}

// =============================================================================
// Tags
// =============================================================================

/// Opening strategy assigned to a participant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpeningRule {
    #[default]
    Random,
    DoubleOrLargest,
}

impl OpeningStrategy for OpeningRule {
    fn choose_opening(&self, hand: &Hand, rng: &mut GameRng) -> Option<Tile> {
        match self {
            OpeningRule::Random => RandomOpening.choose_opening(hand, rng),
            OpeningRule::DoubleOrLargest => DoubleOrLargest.choose_opening(hand, rng),
        }
    }
}

impl std::fmt::Display for OpeningRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpeningRule::Random => f.write_str("random"),
            OpeningRule::DoubleOrLargest => f.write_str("double_or_largest"),
        }
    }
}

/// Play strategy assigned to a participant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayRule {
    #[default]
    Random,
    Heaviest,
}

impl PlayStrategy for PlayRule {
    fn choose_play(&self, hand: &Hand, ends: OpenEnds, rng: &mut GameRng) -> Option<Play> {
        match self {
            PlayRule::Random => RandomPlay.choose_play(hand, ends, rng),
            PlayRule::Heaviest => HeaviestPlay.choose_play(hand, ends, rng),
        }
    }
}

impl std::fmt::Display for PlayRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayRule::Random => f.write_str("random"),
            PlayRule::Heaviest => f.write_str("heaviest"),
        }
    }
}
