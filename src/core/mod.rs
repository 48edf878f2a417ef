//! Core types: tiles, hands, players, participants, RNG and errors.
//!
//! Nothing in here knows the order of play or how a round is scored; that
//! lives in `rules`.

pub mod error;
pub mod hand;
pub mod participant;
pub mod player;
pub mod rng;
pub mod tile;

pub use error::{ConfigError, DominoError, Result};
pub use hand::{Hand, HAND_CAPACITY};
pub use participant::{Participant, ParticipantStats};
pub use player::{PlayerId, PlayerMap, MAX_PLAYERS};
pub use rng::GameRng;
pub use tile::{Tile, TileSet, MAX_PIP, TILE_COUNT};
