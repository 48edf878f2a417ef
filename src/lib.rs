//! # domino-sim
//!
//! A four-player double-six dominoes engine and a tournament simulator for
//! comparing playing strategies.
//!
//! ## Design Principles
//!
//! 1. **Strategies are pluggable**: the round engine asks an
//!    `OpeningStrategy` / `PlayStrategy` for decisions and never looks at
//!    which one it is talking to.
//!
//! 2. **Deterministic**: every random choice draws from an injected
//!    `GameRng`. A tournament seed reproduces the whole run, and each
//!    round's own seed is reported for replay.
//!
//! 3. **Tiles are never lost**: at every point
//!    `hands + pool + table = 28`.
//!
//! ## Modules
//!
//! - `core`: tiles, hands, player ids, participants, RNG, errors
//! - `rules`: legal moves, strategies, the table line, the round state machine
//! - `tournament`: configuration, the driver loop and the final report
//!
//! ## Example
//!
//! ```
//! use domino_sim::{OpeningRule, ParticipantConfig, PlayRule, Tournament, TournamentConfig};
//!
//! let config = TournamentConfig::new()
//!     .with_participants([
//!         ParticipantConfig::new("Sally", OpeningRule::DoubleOrLargest, PlayRule::Random),
//!         ParticipantConfig::new("Bob", OpeningRule::Random, PlayRule::Random),
//!         ParticipantConfig::new("Mike", OpeningRule::Random, PlayRule::Heaviest),
//!         ParticipantConfig::new("Sonia", OpeningRule::Random, PlayRule::Random),
//!     ])
//!     .with_max_games(200)
//!     .with_max_wins(25);
//!
//! let report = Tournament::new(config)?.run()?;
//! assert!(report.games_played <= 200);
//! # Ok::<(), domino_sim::DominoError>(())
//! ```

pub mod core;
pub mod rules;
pub mod tournament;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, DominoError, GameRng, Hand, Participant, ParticipantStats, PlayerId, PlayerMap,
    Result, Tile, TileSet,
};

pub use crate::rules::{
    possible_plays, End, OpenEnds, OpeningRule, OpeningStrategy, Play, PlayRule, PlayStrategy,
    Resolution, Round, RoundEvent, RoundOutcome, RoundPhase, Table,
};

pub use crate::tournament::{
    ParticipantConfig, ParticipantReport, RotationPolicy, StopReason, Tournament,
    TournamentConfig, TournamentReport,
};
