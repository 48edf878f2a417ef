//! Tournament configuration.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, MAX_PLAYERS};
use crate::rules::{OpeningRule, PlayRule};

/// One entrant: a name and the two strategies it plays with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantConfig {
    pub name: String,
    #[serde(default)]
    pub opening: OpeningRule,
    #[serde(default)]
    pub play: PlayRule,
}

impl ParticipantConfig {
    pub fn new(name: impl Into<String>, opening: OpeningRule, play: PlayRule) -> Self {
        Self {
            name: name.into(),
            opening,
            play,
        }
    }
}

/// How the seating order changes between rounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationPolicy {
    /// Reshuffle the whole seating.
    #[default]
    Random,
    /// Rotate so the last winner opens, keeping relative order.
    WinnerFirst,
    /// Never change the seating.
    Fixed,
}

/// Configuration for a tournament run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Entrants in roster order. The first round seats them in this order.
    pub participants: Vec<ParticipantConfig>,

    /// Upper bound on rounds played.
    pub max_games: u32,

    /// Stop as soon as a round winner's total score reaches this.
    pub max_score: Option<u32>,

    /// Stop as soon as a round winner's win count reaches this.
    pub max_wins: Option<u32>,

    pub rotation: RotationPolicy,

    /// Seed for the tournament RNG. Same seed, same tournament.
    pub seed: u64,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            participants: (0..MAX_PLAYERS)
                .map(|i| {
                    let name = format!("Player {i}");
                    ParticipantConfig::new(name, OpeningRule::Random, PlayRule::Random)
                })
                .collect(),
            max_games: 1,
            max_score: None,
            max_wins: None,
            rotation: RotationPolicy::Random,
            seed: 42,
        }
    }
}

impl TournamentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the roster.
    pub fn with_participants(
        mut self,
        participants: impl IntoIterator<Item = ParticipantConfig>,
    ) -> Self {
        self.participants = participants.into_iter().collect();
        self
    }

    /// Add one entrant to the roster.
    pub fn with_participant(mut self, participant: ParticipantConfig) -> Self {
        self.participants.push(participant);
        self
    }

    pub fn with_max_games(mut self, games: u32) -> Self {
        self.max_games = games;
        self
    }

    pub fn with_max_score(mut self, score: u32) -> Self {
        self.max_score = Some(score);
        self
    }

    pub fn with_max_wins(mut self, wins: u32) -> Self {
        self.max_wins = Some(wins);
        self
    }

    pub fn with_rotation(mut self, rotation: RotationPolicy) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the config describes a playable tournament.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let found = self.participants.len();
        if !(2..=MAX_PLAYERS).contains(&found) {
            return Err(ConfigError::ParticipantCount { found });
        }

        let mut names = FxHashSet::default();
        for (index, p) in self.participants.iter().enumerate() {
            if p.name.trim().is_empty() {
                return Err(ConfigError::EmptyName { index });
            }
            if !names.insert(p.name.as_str()) {
                return Err(ConfigError::DuplicateName(p.name.clone()));
            }
        }

        if self.max_games == 0 {
            return Err(ConfigError::ZeroGames);
        }
        if self.max_score == Some(0) {
            return Err(ConfigError::ZeroThreshold { field: "max_score" });
        }
        if self.max_wins == Some(0) {
            return Err(ConfigError::ZeroThreshold { field: "max_wins" });
        }
        Ok(())
    }
}
