//! Rules of play: legal moves, strategies, the table line and the round
//! state machine.
//!
//! The round engine only ever talks to strategies through the
//! `OpeningStrategy` / `PlayStrategy` traits; it never inspects which
//! strategy a participant uses.

pub mod moves;
pub mod round;
pub mod strategy;
pub mod table;

pub use moves::{possible_plays, End, OpenEnds, Play, Plays};
pub use round::{Resolution, Round, RoundEvent, RoundOutcome, RoundPhase, MAX_ROTATIONS};
pub use strategy::{
    DoubleOrLargest, HeaviestPlay, OpeningRule, OpeningStrategy, PlayRule, PlayStrategy,
    RandomOpening, RandomPlay,
};
pub use table::{Placement, Table};
