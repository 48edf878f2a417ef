//! One full game of dominoes: deal, open, take turns, resolve, score.
//!
//! ## Phases
//!
//! `AwaitingOpening` → `InPlay` → `WonByEmptyHand` | `Blocked`
//!
//! The round never owns the participants. Callers pass the seats in turn
//! order (`seats[0]` opens) to every call, and the round mutates their
//! hands. Seats must carry the roster ids `0..seats.len()` in some order.
//!
//! ## Termination
//!
//! A round is blocked once every seat has passed in succession, or after
//! `MAX_ROTATIONS` full trips around the table, whichever comes first.
//! Either way the lowest remaining count wins.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::moves::{OpenEnds, Play};
use super::strategy::{OpeningStrategy, PlayStrategy};
use super::table::Table;
use crate::core::{
    DominoError, GameRng, Participant, PlayerId, PlayerMap, Result, Tile, TileSet, HAND_CAPACITY,
    MAX_PLAYERS, TILE_COUNT,
};

/// Cap on full rotations of play, opening rotation included.
pub const MAX_ROTATIONS: u32 = 25;

/// Where a round is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    AwaitingOpening,
    InPlay,
    WonByEmptyHand,
    Blocked,
}

impl RoundPhase {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, RoundPhase::WonByEmptyHand | RoundPhase::Blocked)
    }
}

/// How a finished round was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// The winner played their last tile.
    EmptiedHand { capicua: bool },
    /// Nobody could move; the lowest count won.
    Blocked,
}

/// Result of a completed round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub winner: PlayerId,
    /// Seat (turn position) the winner occupied this round.
    pub winner_seat: usize,
    pub score: u32,
    pub resolution: Resolution,
    pub turns: u32,
    pub rotations: u32,
    /// Pips left in every hand when the round ended.
    pub pip_counts: PlayerMap<u32>,
    /// Seed of the RNG that drove the round; replays it exactly.
    pub seed: u64,
}

impl RoundOutcome {
    #[must_use]
    pub fn is_capicua(&self) -> bool {
        matches!(self.resolution, Resolution::EmptiedHand { capicua: true })
    }

    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.resolution == Resolution::Blocked
    }
}

/// Something that happened at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    Opened {
        seat: usize,
        player: PlayerId,
        tile: Tile,
    },
    Played {
        seat: usize,
        player: PlayerId,
        play: Play,
        ends_before: OpenEnds,
    },
    Passed {
        seat: usize,
        player: PlayerId,
        ends: OpenEnds,
    },
}

/// State of a single round.
#[derive(Clone, Debug)]
pub struct Round {
    table: Table,
    pool: Vec<Tile>,
    phase: RoundPhase,
    next_seat: usize,
    passes: usize,
    turns: u32,
    rotations: u32,
    history: Vec<RoundEvent>,
    outcome: Option<RoundOutcome>,
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}

impl Round {
    /// A fresh round with the full catalog in the draw pool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: Table::new(),
            pool: TileSet::pool(),
            phase: RoundPhase::AwaitingOpening,
            next_seat: 0,
            passes: 0,
            turns: 0,
            rotations: 0,
            history: Vec::new(),
            outcome: None,
        }
    }

    /// A round whose hands were set up by the caller.
    ///
    /// The pool holds whatever the hands do not. Fails if a tile appears in
    /// more than one hand.
    pub fn from_dealt(seats: &[Participant]) -> Result<Self> {
        check_seats(seats)?;

        let mut seen = [false; TILE_COUNT];
        for seat in seats {
            for tile in seat.hand.iter() {
                if std::mem::replace(&mut seen[tile.id()], true) {
                    return Err(DominoError::invariant(format!("{tile} is held twice")));
                }
            }
        }

        let mut round = Self::new();
        round.pool.retain(|t| !seen[t.id()]);
        Ok(round)
    }

    /// Clear every hand and start over with a full pool.
    pub fn reset(&mut self, seats: &mut [Participant]) {
        for seat in seats.iter_mut() {
            seat.hand.clear();
        }
        *self = Self::new();
    }

    /// Deal tiles one at a time, round-robin, each drawn uniformly from the pool.
    ///
    /// Stops once every seat holds a full hand or the pool runs dry.
    pub fn deal(&mut self, seats: &mut [Participant], rng: &mut GameRng) -> Result<()> {
        check_seats(seats)?;
        if self.phase != RoundPhase::AwaitingOpening || !self.table.is_empty() {
            return Err(DominoError::invariant("tiles can only be dealt before the opening"));
        }

        for _ in 0..HAND_CAPACITY {
            for seat in seats.iter_mut() {
                if self.pool.is_empty() {
                    return Ok(());
                }
                let tile = self.pool.swap_remove(rng.gen_index(self.pool.len()));
                if let Err(err) = seat.hand.add(tile) {
                    self.pool.push(tile);
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    /// Advance by exactly one turn (the opening counts as a turn).
    ///
    /// Returns the outcome when this turn ended the round.
    pub fn step(
        &mut self,
        seats: &mut [Participant],
        rng: &mut GameRng,
    ) -> Result<Option<RoundOutcome>> {
        check_seats(seats)?;
        match self.phase {
            RoundPhase::AwaitingOpening => self.open(seats, rng),
            RoundPhase::InPlay => self.take_turn(seats, rng),
            RoundPhase::WonByEmptyHand | RoundPhase::Blocked => Err(DominoError::RoundOver),
        }
    }

    /// Run turns until the round is decided.
    pub fn play_out(
        &mut self,
        seats: &mut [Participant],
        rng: &mut GameRng,
    ) -> Result<RoundOutcome> {
        loop {
            if let Some(outcome) = self.step(seats, rng)? {
                return Ok(outcome);
            }
        }
    }

    fn open(
        &mut self,
        seats: &mut [Participant],
        rng: &mut GameRng,
    ) -> Result<Option<RoundOutcome>> {
        let seat = 0;
        let opener = &mut seats[seat];
        if opener.hand.is_empty() {
            return Err(DominoError::EmptyHand {
                name: opener.name().to_string(),
            });
        }

        let tile = opener
            .opening()
            .choose_opening(&opener.hand, rng)
            .ok_or_else(|| DominoError::invariant("opening strategy chose nothing"))?;
        if !opener.hand.remove(tile) {
            return Err(DominoError::invariant(format!("opening tile {tile} is not in hand")));
        }
        self.table.open(tile)?;

        trace!(seat, player = %opener.name(), %tile, "opens");
        self.history.push(RoundEvent::Opened {
            seat,
            player: opener.id(),
            tile,
        });
        self.phase = RoundPhase::InPlay;
        self.advance(seats.len());

        if seats[seat].hand.is_empty() {
            return Ok(Some(self.finish_win(seats, seat, false, rng.seed())));
        }
        Ok(None)
    }

    fn take_turn(
        &mut self,
        seats: &mut [Participant],
        rng: &mut GameRng,
    ) -> Result<Option<RoundOutcome>> {
        if self.rotations >= MAX_ROTATIONS {
            debug!(rotations = self.rotations, "rotation cap reached");
            return self.finish_blocked(seats, rng.seed()).map(Some);
        }

        let seat_count = seats.len();
        let seat = self.next_seat;
        let ends = self
            .table
            .ends()
            .ok_or_else(|| DominoError::invariant("no open ends during play"))?;

        let actor = &mut seats[seat];
        if actor.hand.is_empty() {
            return Err(DominoError::EmptyHand {
                name: actor.name().to_string(),
            });
        }

        let Some(play) = actor.play().choose_play(&actor.hand, ends, rng) else {
            trace!(seat, player = %actor.name(), "passes");
            self.history.push(RoundEvent::Passed {
                seat,
                player: actor.id(),
                ends,
            });
            self.passes += 1;
            self.advance(seat_count);
            if self.passes >= seat_count {
                return self.finish_blocked(seats, rng.seed()).map(Some);
            }
            return Ok(None);
        };

        if !play.tile.has(ends.at(play.end)) {
            return Err(DominoError::invariant(format!(
                "{} chose {} which does not fit {:?}",
                actor.name(),
                play.tile,
                play.end
            )));
        }
        if !actor.hand.remove(play.tile) {
            return Err(DominoError::invariant(format!(
                "{} is not in {}'s hand",
                play.tile,
                actor.name()
            )));
        }
        self.table.attach(play)?;

        trace!(
            seat,
            player = %actor.name(),
            tile = %play.tile,
            end = ?play.end,
            table = %self.table,
            "plays"
        );
        self.history.push(RoundEvent::Played {
            seat,
            player: actor.id(),
            play,
            ends_before: ends,
        });
        self.passes = 0;
        self.advance(seat_count);

        if seats[seat].hand.is_empty() {
            let capicua = ends.spans(play.tile);
            return Ok(Some(self.finish_win(seats, seat, capicua, rng.seed())));
        }
        Ok(None)
    }

    fn advance(&mut self, seat_count: usize) {
        self.turns += 1;
        self.next_seat += 1;
        if self.next_seat == seat_count {
            self.next_seat = 0;
            self.rotations += 1;
        }
    }

    fn finish_win(
        &mut self,
        seats: &[Participant],
        seat: usize,
        capicua: bool,
        seed: u64,
    ) -> RoundOutcome {
        let score = score_for(seats, seat, capicua);
        self.phase = RoundPhase::WonByEmptyHand;
        self.record(seats, seat, score, Resolution::EmptiedHand { capicua }, seed)
    }

    fn finish_blocked(&mut self, seats: &[Participant], seed: u64) -> Result<RoundOutcome> {
        let seat = lowest_count_seat(seats).ok_or(DominoError::NoParticipants)?;
        let score = score_for(seats, seat, false);
        self.phase = RoundPhase::Blocked;
        Ok(self.record(seats, seat, score, Resolution::Blocked, seed))
    }

    fn record(
        &mut self,
        seats: &[Participant],
        seat: usize,
        score: u32,
        resolution: Resolution,
        seed: u64,
    ) -> RoundOutcome {
        let mut pip_counts = PlayerMap::with_value(seats.len(), 0);
        for p in seats {
            pip_counts[p.id()] = p.hand.pip_count();
        }

        let outcome = RoundOutcome {
            winner: seats[seat].id(),
            winner_seat: seat,
            score,
            resolution,
            turns: self.turns,
            rotations: self.rotations,
            pip_counts,
            seed,
        };
        debug!(
            winner = %seats[seat].name(),
            score,
            ?resolution,
            turns = self.turns,
            "round finished"
        );
        self.outcome = Some(outcome.clone());
        outcome
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Open ends, `None` until the opening tile is down.
    #[must_use]
    pub fn ends(&self) -> Option<OpenEnds> {
        self.table.ends()
    }

    /// Tiles not dealt to anyone.
    #[must_use]
    pub fn pool(&self) -> &[Tile] {
        &self.pool
    }

    /// Seat that acts on the next `step`.
    #[must_use]
    pub fn next_seat(&self) -> usize {
        self.next_seat
    }

    /// Passes since the last tile was placed.
    #[must_use]
    pub fn consecutive_passes(&self) -> usize {
        self.passes
    }

    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    #[must_use]
    pub fn rotations(&self) -> u32 {
        self.rotations
    }

    #[must_use]
    pub fn history(&self) -> &[RoundEvent] {
        &self.history
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&RoundOutcome> {
        self.outcome.as_ref()
    }

    /// Tiles in hands, pool and table together. Always 28.
    #[must_use]
    pub fn accounted_tiles(&self, seats: &[Participant]) -> usize {
        let in_hands: usize = seats.iter().map(|s| s.hand.len()).sum();
        in_hands + self.pool.len() + self.table.len()
    }
}

/// Sum of every other seat's count, doubled for capicua.
fn score_for(seats: &[Participant], winner_seat: usize, capicua: bool) -> u32 {
    let others: u32 = seats
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != winner_seat)
        .map(|(_, p)| p.hand.pip_count())
        .sum();
    if capicua {
        others * 2
    } else {
        others
    }
}

/// Seat with the strictly lowest count; earliest seat wins ties.
fn lowest_count_seat(seats: &[Participant]) -> Option<usize> {
    seats
        .iter()
        .enumerate()
        .min_by_key(|(_, p)| p.hand.pip_count())
        .map(|(i, _)| i)
}

fn check_seats(seats: &[Participant]) -> Result<()> {
    if seats.is_empty() {
        return Err(DominoError::NoParticipants);
    }
    if seats.len() > MAX_PLAYERS {
        return Err(DominoError::invariant(format!(
            "{} seats at a table for {MAX_PLAYERS}",
            seats.len()
        )));
    }

    let mut seen = [false; MAX_PLAYERS];
    for seat in seats {
        let i = seat.id().index();
        if i >= seats.len() || std::mem::replace(&mut seen[i], true) {
            return Err(DominoError::invariant(format!(
                "seat ids must be a permutation of 0..{}",
                seats.len()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Hand;
    use crate::rules::{OpeningRule, PlayRule};

    fn seat(id: u8, tiles: &[(u8, u8)]) -> Participant {
        let hand = Hand::from_tiles(tiles.iter().map(|&(a, b)| Tile::new(a, b))).unwrap();
        let name = format!("p{id}");
        Participant::new(PlayerId::new(id), name, OpeningRule::DoubleOrLargest, PlayRule::Random)
            .with_hand(hand)
    }

    fn four_seats() -> Vec<Participant> {
        (0..4)
            .map(|i| {
                let name = format!("p{i}");
                Participant::new(PlayerId::new(i), name, OpeningRule::Random, PlayRule::Random)
            })
            .collect()
    }

    #[test]
    fn test_deal_fills_four_hands() {
        let mut seats = four_seats();
        let mut round = Round::new();
        round.deal(&mut seats, &mut GameRng::new(42)).unwrap();

        for s in &seats {
            assert_eq!(s.hand.len(), HAND_CAPACITY);
        }
        assert!(round.pool().is_empty());
        assert_eq!(round.accounted_tiles(&seats), TILE_COUNT);
    }

    #[test]
    fn test_deal_two_seats_leaves_pool() {
        let mut seats = four_seats();
        seats.truncate(2);
        let mut round = Round::new();
        round.deal(&mut seats, &mut GameRng::new(1)).unwrap();

        assert_eq!(seats[0].hand.len(), 7);
        assert_eq!(seats[1].hand.len(), 7);
        assert_eq!(round.pool().len(), 14);
        assert_eq!(round.accounted_tiles(&seats), TILE_COUNT);
    }

    #[test]
    fn test_deal_into_full_hand_fails() {
        let mut seats = four_seats();
        let mut round = Round::new();
        round.deal(&mut seats, &mut GameRng::new(42)).unwrap();

        let mut again = Round::new();
        let err = again.deal(&mut seats, &mut GameRng::new(42)).unwrap_err();
        assert!(matches!(err, DominoError::HandFull { .. }));
        // The rejected tile went back to the pool
        assert_eq!(again.pool().len(), TILE_COUNT);
    }

    #[test]
    fn test_reset_clears_hands() {
        let mut seats = four_seats();
        let mut rng = GameRng::new(5);
        let mut round = Round::new();
        round.deal(&mut seats, &mut rng).unwrap();
        round.play_out(&mut seats, &mut rng).unwrap();

        round.reset(&mut seats);
        assert!(seats.iter().all(|s| s.hand.is_empty()));
        assert_eq!(round.pool().len(), TILE_COUNT);
        assert_eq!(round.phase(), RoundPhase::AwaitingOpening);
        assert!(round.history().is_empty());
    }

    #[test]
    fn test_opening_sets_ends() {
        let mut seats = vec![seat(0, &[(6, 6), (1, 2)]), seat(1, &[(6, 0)])];
        let mut round = Round::from_dealt(&seats).unwrap();
        let mut rng = GameRng::new(0);

        assert!(round.step(&mut seats, &mut rng).unwrap().is_none());
        assert_eq!(round.phase(), RoundPhase::InPlay);
        assert_eq!(round.ends(), Some(OpenEnds::new(6, 6)));
        assert_eq!(round.next_seat(), 1);
        assert_eq!(
            round.history(),
            &[RoundEvent::Opened {
                seat: 0,
                player: PlayerId::new(0),
                tile: Tile::new(6, 6)
            }]
        );
    }

    #[test]
    fn test_win_scores_opponents() {
        // p0 opens [6|6], p1..p3 cannot follow, p0 goes out with [5|6]
        let mut seats = vec![
            seat(0, &[(6, 6), (6, 5)]),
            seat(1, &[(0, 0)]),
            seat(2, &[(0, 1)]),
            seat(3, &[(0, 2)]),
        ];
        let mut round = Round::from_dealt(&seats).unwrap();
        let outcome = round.play_out(&mut seats, &mut GameRng::new(11)).unwrap();

        assert_eq!(outcome.winner, PlayerId::new(0));
        assert_eq!(outcome.resolution, Resolution::EmptiedHand { capicua: false });
        assert_eq!(outcome.score, 3);
        assert_eq!(outcome.turns, 5);
        assert_eq!(round.phase(), RoundPhase::WonByEmptyHand);
        assert_eq!(round.table().len(), 2);
    }

    #[test]
    fn test_capicua_doubles_score() {
        // [5|5] opens, p1 adds [2|5], p2 adds [2|4], p0 closes both ends with [4|5]
        let mut seats = vec![
            seat(0, &[(5, 5), (4, 5)]),
            seat(1, &[(5, 2), (3, 3)]),
            seat(2, &[(2, 4), (0, 0)]),
            seat(3, &[(1, 1)]),
        ];
        let mut round = Round::from_dealt(&seats).unwrap();
        let outcome = round.play_out(&mut seats, &mut GameRng::new(3)).unwrap();

        assert_eq!(outcome.winner, PlayerId::new(0));
        assert!(outcome.is_capicua());
        // (3+3) + 0 + (1+1) = 8, doubled
        assert_eq!(outcome.score, 16);
    }

    #[test]
    fn test_all_pass_blocks() {
        let mut seats = vec![
            seat(0, &[(6, 6), (0, 1), (0, 2)]),
            seat(1, &[(1, 1), (2, 3)]),
            seat(2, &[(0, 0), (4, 5)]),
            seat(3, &[(2, 2), (1, 3)]),
        ];
        let mut round = Round::from_dealt(&seats).unwrap();
        let outcome = round.play_out(&mut seats, &mut GameRng::new(0)).unwrap();

        assert_eq!(round.phase(), RoundPhase::Blocked);
        assert!(outcome.is_blocked());
        assert_eq!(round.consecutive_passes(), 4);
        assert_eq!(outcome.winner, PlayerId::new(0));
        assert_eq!(outcome.score, 7 + 9 + 8);
        assert_eq!(outcome.pip_counts[PlayerId::new(2)], 9);
    }

    #[test]
    fn test_block_tie_goes_to_earliest_seat() {
        // After [6|6] both p1 and p3 hold 3 pips; p0 holds more
        let mut seats = vec![
            seat(2, &[(6, 6), (4, 5)]),
            seat(0, &[(1, 2)]),
            seat(3, &[(2, 2), (5, 5)]),
            seat(1, &[(0, 3)]),
        ];
        let mut round = Round::from_dealt(&seats).unwrap();
        let outcome = round.play_out(&mut seats, &mut GameRng::new(0)).unwrap();

        assert!(outcome.is_blocked());
        assert_eq!(outcome.winner_seat, 1);
        assert_eq!(outcome.winner, PlayerId::new(0));
        assert_eq!(outcome.score, 9 + 14 + 3);
    }

    #[test]
    fn test_opener_going_out_wins_immediately() {
        let mut seats = vec![seat(0, &[(3, 4)]), seat(1, &[(6, 6)])];
        let mut round = Round::from_dealt(&seats).unwrap();
        let outcome = round.play_out(&mut seats, &mut GameRng::new(0)).unwrap();

        assert_eq!(outcome.winner, PlayerId::new(0));
        assert_eq!(outcome.score, 12);
        assert!(!outcome.is_capicua());
    }

    #[test]
    fn test_step_after_finish_errors() {
        let mut seats = vec![seat(0, &[(3, 4)]), seat(1, &[(6, 6)])];
        let mut round = Round::from_dealt(&seats).unwrap();
        let mut rng = GameRng::new(0);
        round.play_out(&mut seats, &mut rng).unwrap();

        assert_eq!(round.step(&mut seats, &mut rng), Err(DominoError::RoundOver));
    }

    #[test]
    fn test_empty_opener_is_an_error() {
        let mut seats = vec![seat(0, &[]), seat(1, &[(6, 6)])];
        let mut round = Round::from_dealt(&seats).unwrap();
        let err = round.step(&mut seats, &mut GameRng::new(0)).unwrap_err();
        assert_eq!(err, DominoError::EmptyHand { name: "p0".into() });
    }

    #[test]
    fn test_no_seats_is_an_error() {
        let mut round = Round::new();
        let err = round.step(&mut [], &mut GameRng::new(0)).unwrap_err();
        assert_eq!(err, DominoError::NoParticipants);
    }

    #[test]
    fn test_bad_seat_ids_rejected() {
        let seats = vec![seat(0, &[(1, 1)]), seat(0, &[(2, 2)])];
        assert!(matches!(Round::from_dealt(&seats), Err(DominoError::Invariant(_))));

        let seats = vec![seat(0, &[(1, 1)]), seat(5, &[(2, 2)])];
        assert!(matches!(Round::from_dealt(&seats), Err(DominoError::Invariant(_))));
    }

    #[test]
    fn test_from_dealt_rejects_duplicate_tiles() {
        let seats = vec![seat(0, &[(1, 2)]), seat(1, &[(2, 1)])];
        assert!(matches!(Round::from_dealt(&seats), Err(DominoError::Invariant(_))));
    }

    #[test]
    fn test_from_dealt_pool_excludes_hands() {
        let seats = vec![seat(0, &[(1, 2), (6, 6)]), seat(1, &[(0, 0)])];
        let round = Round::from_dealt(&seats).unwrap();
        assert_eq!(round.pool().len(), TILE_COUNT - 3);
        assert!(!round.pool().contains(&Tile::new(6, 6)));
        assert_eq!(round.accounted_tiles(&seats), TILE_COUNT);
    }

    #[test]
    fn test_random_rounds_terminate_and_account() {
        for seed in 0..50 {
            let mut seats = four_seats();
            let mut rng = GameRng::new(seed);
            let mut round = Round::new();
            round.deal(&mut seats, &mut rng).unwrap();
            let outcome = round.play_out(&mut seats, &mut rng).unwrap();

            assert!(round.phase().is_terminal());
            assert!(outcome.rotations <= MAX_ROTATIONS);
            assert_eq!(round.accounted_tiles(&seats), TILE_COUNT);
            assert_eq!(outcome.seed, seed);
        }
    }

    #[test]
    fn test_rotation_cap_resolves_blocked() {
        // p1 could still follow with [1|6]; the cap ends the round first
        let mut seats = vec![
            seat(0, &[(6, 6), (6, 5)]),
            seat(1, &[(6, 1)]),
            seat(2, &[(0, 2)]),
            seat(3, &[(3, 3)]),
        ];
        let mut round = Round::from_dealt(&seats).unwrap();
        let mut rng = GameRng::new(0);
        assert!(round.step(&mut seats, &mut rng).unwrap().is_none());

        round.rotations = MAX_ROTATIONS;
        let outcome = round.step(&mut seats, &mut rng).unwrap().unwrap();

        assert_eq!(round.phase(), RoundPhase::Blocked);
        assert_eq!(outcome.resolution, Resolution::Blocked);
        assert_eq!(round.consecutive_passes(), 0);
        assert_eq!(seats[1].hand.len(), 1);

        assert_eq!(lowest_count_seat(&seats), Some(2));
        assert_eq!(outcome.winner_seat, 2);
        assert_eq!(outcome.winner, PlayerId::new(2));
        assert_eq!(outcome.score, score_for(&seats, 2, false));
        assert_eq!(outcome.score, 11 + 7 + 6);
        assert_eq!(outcome.rotations, MAX_ROTATIONS);
    }
}
