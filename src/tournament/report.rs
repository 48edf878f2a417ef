//! Tournament results.

use serde::{Deserialize, Serialize};

use crate::core::Participant;
use crate::rules::{OpeningRule, PlayRule};

/// Why a tournament stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Played every allowed game.
    MaxGames,
    /// A winner reached the win threshold.
    MaxWins,
    /// A winner reached the score threshold.
    MaxScore,
}

/// Totals for one participant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticipantReport {
    pub name: String,
    pub opening: OpeningRule,
    pub play: PlayRule,
    pub wins: u32,
    /// Wins per game played.
    pub win_rate: f64,
    pub capicua_wins: u32,
    /// Capicua wins per win; 0 without wins.
    pub capicua_rate: f64,
    pub score: u32,
    /// Wins after each game.
    pub cumulative_wins: Vec<u32>,
    /// Score after each game.
    pub cumulative_scores: Vec<u32>,
}

impl ParticipantReport {
    pub(crate) fn from_participant(p: &Participant, games_played: u32) -> Self {
        Self {
            name: p.name().to_string(),
            opening: p.opening(),
            play: p.play(),
            wins: p.stats.wins,
            win_rate: p.stats.win_rate(games_played),
            capicua_wins: p.stats.capicua_wins,
            capicua_rate: p.stats.capicua_rate(),
            score: p.stats.score,
            cumulative_wins: p.stats.cumulative_wins.clone(),
            cumulative_scores: p.stats.cumulative_scores.clone(),
        }
    }
}

/// Snapshot of a tournament, participants in roster order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TournamentReport {
    pub participants: Vec<ParticipantReport>,
    pub games_played: u32,
    /// Rounds that ended with nobody able to move.
    pub blocked_rounds: u32,
    /// Blocked rounds per game played.
    pub blocked_rate: f64,
    pub max_games: u32,
    pub max_wins: Option<u32>,
    pub max_score: Option<u32>,
    /// `None` while the tournament can still continue.
    pub stop_reason: Option<StopReason>,
}

impl TournamentReport {
    /// Participant with the most wins, then the highest score. Earliest in
    /// roster order on a full tie.
    #[must_use]
    pub fn leader(&self) -> Option<&ParticipantReport> {
        self.participants.iter().fold(None, |best: Option<&ParticipantReport>, p| match best {
            Some(b) if (b.wins, b.score) >= (p.wins, p.score) => Some(b),
            _ => Some(p),
        })
    }

    #[must_use]
    pub fn participant(&self, name: &str) -> Option<&ParticipantReport> {
        self.participants.iter().find(|p| p.name == name)
    }

    /// Sum of every participant's wins. Equals `games_played`.
    #[must_use]
    pub fn total_wins(&self) -> u32 {
        self.participants.iter().map(|p| p.wins).sum()
    }
}

impl std::fmt::Display for TournamentReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} games, {} blocked ({:.1}%)",
            self.games_played,
            self.blocked_rounds,
            self.blocked_rate * 100.0
        )?;
        for p in &self.participants {
            writeln!(
                f,
                "  {:<12} {:>4} wins ({:>5.1}%)  {:>5} pts  {:>3} capicua  [{}/{}]",
                p.name,
                p.wins,
                p.win_rate * 100.0,
                p.score,
                p.capicua_wins,
                p.opening,
                p.play
            )?;
        }
        Ok(())
    }
}
