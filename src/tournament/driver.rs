//! Runs rounds back to back and keeps the score.
//!
//! A `Tournament` owns the participants and one `Round` that it resets
//! between games. Participants are stored in seating order, which changes
//! between rounds according to the `RotationPolicy`; reports are always in
//! roster order.
//!
//! ```
//! use domino_sim::tournament::{Tournament, TournamentConfig};
//!
//! let config = TournamentConfig::default().with_max_games(20).with_seed(7);
//! let mut tournament = Tournament::new(config).unwrap();
//! let report = tournament.run().unwrap();
//!
//! assert_eq!(report.games_played, 20);
//! assert_eq!(report.total_wins(), 20);
//! ```

use tracing::{debug, info};

use super::config::{RotationPolicy, TournamentConfig};
use super::report::{ParticipantReport, StopReason, TournamentReport};
use crate::core::{DominoError, GameRng, Participant, PlayerId, Result};
use crate::rules::{Round, RoundOutcome};

/// A series of rounds between a fixed roster.
#[derive(Clone, Debug)]
pub struct Tournament {
    config: TournamentConfig,
    /// Seating order for the next round; `participants[0]` opens.
    participants: Vec<Participant>,
    rng: GameRng,
    round: Round,
    games_played: u32,
    blocked_rounds: u32,
    stop_reason: Option<StopReason>,
}

impl Tournament {
    /// Validate `config` and seat the roster in the order given.
    pub fn new(config: TournamentConfig) -> Result<Self> {
        config.validate()?;

        let participants = config
            .participants
            .iter()
            .enumerate()
            .map(|(i, p)| {
                Participant::new(PlayerId::new(i as u8), p.name.clone(), p.opening, p.play)
            })
            .collect();

        Ok(Self {
            rng: GameRng::new(config.seed),
            config,
            participants,
            round: Round::new(),
            games_played: 0,
            blocked_rounds: 0,
            stop_reason: None,
        })
    }

    /// Play rounds until a stop condition is met and report the totals.
    pub fn run(&mut self) -> Result<TournamentReport> {
        info!(
            participants = self.participants.len(),
            max_games = self.config.max_games,
            max_wins = ?self.config.max_wins,
            max_score = ?self.config.max_score,
            seed = self.config.seed,
            "tournament starting"
        );

        while !self.is_finished() {
            self.play_game()?;
        }

        let report = self.report();
        info!(
            games = report.games_played,
            blocked = report.blocked_rounds,
            stop = ?report.stop_reason,
            leader = report.leader().map(|p| p.name.as_str()),
            "tournament finished"
        );
        Ok(report)
    }

    /// Play one round: reset, deal, play out, record, then either stop or
    /// reseat for the next round.
    pub fn play_game(&mut self) -> Result<RoundOutcome> {
        if let Some(reason) = self.stop_reason {
            return Err(DominoError::TournamentOver(reason));
        }

        let mut rng = self.rng.fork();
        self.round.reset(&mut self.participants);
        self.round.deal(&mut self.participants, &mut rng)?;
        let outcome = self.round.play_out(&mut self.participants, &mut rng)?;

        let winner = self
            .participants
            .iter_mut()
            .find(|p| p.id() == outcome.winner)
            .ok_or_else(|| {
                DominoError::invariant(format!("winner {} is not seated", outcome.winner))
            })?;
        winner.stats.record_win(outcome.score, outcome.is_capicua());
        let (wins, total) = (winner.stats.wins, winner.stats.score);

        for p in &mut self.participants {
            p.stats.snapshot();
        }
        self.games_played += 1;
        if outcome.is_blocked() {
            self.blocked_rounds += 1;
        }

        debug!(
            game = self.games_played,
            winner = %self.participants[outcome.winner_seat].name(),
            score = outcome.score,
            capicua = outcome.is_capicua(),
            blocked = outcome.is_blocked(),
            seed = outcome.seed,
            "game recorded"
        );

        self.stop_reason = self.check_stop(wins, total);
        if self.stop_reason.is_none() {
            self.reseat(outcome.winner_seat);
        }
        Ok(outcome)
    }

    fn check_stop(&self, winner_wins: u32, winner_score: u32) -> Option<StopReason> {
        if self.config.max_wins.is_some_and(|max| winner_wins >= max) {
            Some(StopReason::MaxWins)
        } else if self.config.max_score.is_some_and(|max| winner_score >= max) {
            Some(StopReason::MaxScore)
        } else if self.games_played >= self.config.max_games {
            Some(StopReason::MaxGames)
        } else {
            None
        }
    }

    fn reseat(&mut self, winner_seat: usize) {
        match self.config.rotation {
            RotationPolicy::Random => self.rng.shuffle(&mut self.participants),
            RotationPolicy::WinnerFirst => self.participants.rotate_left(winner_seat),
            RotationPolicy::Fixed => {}
        }
    }

    /// Totals so far, in roster order.
    #[must_use]
    pub fn report(&self) -> TournamentReport {
        let mut roster: Vec<&Participant> = self.participants.iter().collect();
        roster.sort_by_key(|p| p.id());

        let blocked_rate = if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.blocked_rounds) / f64::from(self.games_played)
        };

        TournamentReport {
            participants: roster
                .into_iter()
                .map(|p| ParticipantReport::from_participant(p, self.games_played))
                .collect(),
            games_played: self.games_played,
            blocked_rounds: self.blocked_rounds,
            blocked_rate,
            max_games: self.config.max_games,
            max_wins: self.config.max_wins,
            max_score: self.config.max_score,
            stop_reason: self.stop_reason,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    /// Participants in the current seating order.
    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// The most recent round, kept for inspection until the next game.
    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    #[must_use]
    pub fn blocked_rounds(&self) -> u32 {
        self.blocked_rounds
    }

    #[must_use]
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.stop_reason.is_some()
    }
}
