//! Participants: identity, hand, strategies and running totals.

use serde::{Deserialize, Serialize};

use super::hand::Hand;
use super::player::PlayerId;
use crate::rules::{OpeningRule, PlayRule};

/// Cumulative statistics for one participant across a tournament.
///
/// Counters only grow. The cumulative series get one entry per round
/// played (for every participant, winner or not) so they can be charted
/// against games played.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticipantStats {
    pub wins: u32,
    pub score: u32,
    pub capicua_wins: u32,
    pub cumulative_wins: Vec<u32>,
    pub cumulative_scores: Vec<u32>,
}

impl ParticipantStats {
    /// Credit a round win.
    pub fn record_win(&mut self, score: u32, capicua: bool) {
        self.wins += 1;
        self.score += score;
        if capicua {
            self.capicua_wins += 1;
        }
    }

    /// Append the current totals to the cumulative series.
    pub fn snapshot(&mut self) {
        self.cumulative_wins.push(self.wins);
        self.cumulative_scores.push(self.score);
    }

    /// Wins per game played; 0 before any game.
    #[must_use]
    pub fn win_rate(&self, games_played: u32) -> f64 {
        if games_played == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(games_played)
        }
    }

    /// Share of wins that were capicua; 0 without wins.
    #[must_use]
    pub fn capicua_rate(&self) -> f64 {
        if self.wins == 0 {
            0.0
        } else {
            f64::from(self.capicua_wins) / f64::from(self.wins)
        }
    }
}

/// A seat at the table.
#[derive(Clone, Debug)]
pub struct Participant {
    id: PlayerId,
    name: String,
    opening: OpeningRule,
    play: PlayRule,

    /// Tiles currently held. Cleared and redealt every round.
    pub hand: Hand,

    /// Totals that persist across rounds.
    pub stats: ParticipantStats,
}

impl Participant {
    /// Create a participant with an empty hand and zeroed statistics.
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        opening: OpeningRule,
        play: PlayRule,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            opening,
            play,
            hand: Hand::new(),
            stats: ParticipantStats::default(),
        }
    }

    /// Replace the hand (scenario setup and tests).
    #[must_use]
    pub fn with_hand(mut self, hand: Hand) -> Self {
        self.hand = hand;
        self
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn opening(&self) -> OpeningRule {
        self.opening
    }

    #[must_use]
    pub fn play(&self) -> PlayRule {
        self.play
    }
}
