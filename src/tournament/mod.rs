//! Tournament driver: repeated rounds between a fixed roster, with
//! early-stop thresholds and a seating policy between rounds.

pub mod config;
pub mod driver;
pub mod report;

pub use config::{ParticipantConfig, RotationPolicy, TournamentConfig};
pub use driver::Tournament;
pub use report::{ParticipantReport, StopReason, TournamentReport};
