// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game scoring policies.
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::round::Round;

/// A guess value for a player that passes on the round.
pub const GUESS_PASS: i32 = 100;

/// A guess value for a round whose time has expired.
pub const GUESS_EXPIRE: i32 = 101;

/// A guess distance that still scores partial points.
pub const NEAR_DISTANCE: i32 = 2;

/// The result of a round guess as seen by a scoring policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    /// The player guess.
    pub guess: i32,
    /// The guess distance from the number of outs.
    pub distance: i32,
    /// The maximum points for the round.
    pub points_possible: u32,
    /// The fraction of the allowed time left when the player guessed, 1.0 for
    /// untimed rounds.
    pub time_left: f64,
    /// The player ran out of time.
    pub expired: bool,
}

impl Outcome {
    fn is_exact(&self) -> bool {
        self.distance == 0
    }

    fn is_near(&self) -> bool {
        self.distance.abs() <= NEAR_DISTANCE
    }

    fn is_pass(&self) -> bool {
        self.guess == GUESS_PASS
    }

    fn points(&self, factor: f64) -> u32 {
        (self.points_possible as f64 * self.time_left * factor).round() as u32
    }
}

/// A rule to score rounds and pick the next round difficulty.
pub trait ScoringPolicy {
    /// The number of opponents for the next round.
    fn opponents(&self) -> usize;

    /// Scores a round updating the policy state and returns the round points.
    fn score(&mut self, outcome: &Outcome) -> u32;

    /// Checks if a dealt round should be replaced by a new deal.
    fn redeal<R: Rng + ?Sized>(&mut self, _round: &Round, _rng: &mut R) -> bool {
        false
    }

    /// Resets the redeal state before dealing a new round.
    fn start_round(&mut self) {}
}

/// Multiplies the points of a close guess by the number of consecutive close
/// guesses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakScoring {
    streak: u32,
}

impl StreakScoring {
    /// Streak for two opponents.
    pub const TWO_OPPONENTS_STREAK: u32 = 4;

    /// Streak for three opponents.
    pub const THREE_OPPONENTS_STREAK: u32 = 7;

    /// The current streak.
    pub fn streak(&self) -> u32 {
        self.streak
    }
}

impl ScoringPolicy for StreakScoring {
    fn opponents(&self) -> usize {
        if self.streak >= Self::THREE_OPPONENTS_STREAK {
            3
        } else if self.streak >= Self::TWO_OPPONENTS_STREAK {
            2
        } else {
            1
        }
    }

    fn score(&mut self, outcome: &Outcome) -> u32 {
        if outcome.expired {
            self.streak = 0;
            0
        } else if outcome.is_exact() {
            self.streak += 1;
            outcome.points(self.streak as f64)
        } else if outcome.is_near() {
            self.streak += 1;
            outcome.points(0.5 * self.streak as f64)
        } else {
            if !outcome.is_pass() {
                self.streak = 0;
            }
            0
        }
    }
}

/// Multiplies points by a multiplier raised by exact guesses, with some redeal
/// of rounds whose outs are easy to guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplierScoring {
    multiplier: u32,
    redeals: u32,
}

impl MultiplierScoring {
    /// The maximum multiplier.
    pub const MAX_MULTIPLIER: u32 = 5;

    /// The maximum redeals of a round.
    pub const MAX_REDEALS: u32 = 3;

    /// Outs counts of rounds that may be dealt again.
    pub const COMMON_OUTS: [usize; 3] = [0, 3, 6];

    /// The current multiplier.
    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }
}

impl Default for MultiplierScoring {
    fn default() -> Self {
        Self {
            multiplier: 1,
            redeals: 0,
        }
    }
}

impl ScoringPolicy for MultiplierScoring {
    fn opponents(&self) -> usize {
        match self.multiplier {
            0..=1 => 1,
            2..=3 => 2,
            _ => 3,
        }
    }

    fn score(&mut self, outcome: &Outcome) -> u32 {
        let multiplier = self.multiplier as f64;
        if outcome.expired {
            self.multiplier = 1;
            0
        } else if outcome.is_exact() {
            self.multiplier = (self.multiplier + 1).min(Self::MAX_MULTIPLIER);
            outcome.points(multiplier)
        } else if outcome.is_near() {
            outcome.points(0.5 * multiplier)
        } else {
            if !outcome.is_pass() {
                self.multiplier = 1;
            }
            0
        }
    }

    fn redeal<R: Rng + ?Sized>(&mut self, round: &Round, rng: &mut R) -> bool {
        if self.redeals < Self::MAX_REDEALS
            && Self::COMMON_OUTS.contains(&round.outs().len())
            && rng.random_bool(0.5)
        {
            self.redeals += 1;
            true
        } else {
            false
        }
    }

    fn start_round(&mut self) {
        self.redeals = 0;
    }
}

/// The scoring policy kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringKind {
    /// Uses [StreakScoring].
    #[default]
    Streak,
    /// Uses [MultiplierScoring].
    Multiplier,
}

/// A game scoring policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scoring {
    /// Streak scoring.
    Streak(StreakScoring),
    /// Multiplier scoring.
    Multiplier(MultiplierScoring),
}

impl From<ScoringKind> for Scoring {
    fn from(kind: ScoringKind) -> Self {
        match kind {
            ScoringKind::Streak => Scoring::Streak(StreakScoring::default()),
            ScoringKind::Multiplier => Scoring::Multiplier(MultiplierScoring::default()),
        }
    }
}

impl ScoringPolicy for Scoring {
    fn opponents(&self) -> usize {
        match self {
            Scoring::Streak(s) => s.opponents(),
            Scoring::Multiplier(s) => s.opponents(),
        }
    }

    fn score(&mut self, outcome: &Outcome) -> u32 {
        match self {
            Scoring::Streak(s) => s.score(outcome),
            Scoring::Multiplier(s) => s.score(outcome),
        }
    }

    fn redeal<R: Rng + ?Sized>(&mut self, round: &Round, rng: &mut R) -> bool {
        match self {
            Scoring::Streak(s) => s.redeal(round, rng),
            Scoring::Multiplier(s) => s.redeal(round, rng),
        }
    }

    fn start_round(&mut self) {
        match self {
            Scoring::Streak(s) => s.start_round(),
            Scoring::Multiplier(s) => s.start_round(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outs::OutsPolicy;
    use rand::{SeedableRng, rngs::StdRng};

    fn outcome(guess: i32, outs: i32) -> Outcome {
        Outcome {
            guess,
            distance: guess - outs,
            points_possible: 1000,
            time_left: 1.0,
            expired: false,
        }
    }

    #[test]
    fn streak_exact_and_near() {
        let mut scoring = StreakScoring::default();
        assert_eq!(scoring.score(&outcome(5, 5)), 1000);
        assert_eq!(scoring.streak(), 1);
        assert_eq!(scoring.score(&outcome(7, 5)), 1000);
        assert_eq!(scoring.streak(), 2);
        assert_eq!(scoring.score(&outcome(2, 4)), 1500);
        assert_eq!(scoring.streak(), 3);
    }

    #[test]
    fn streak_miss_resets() {
        let mut scoring = StreakScoring::default();
        scoring.score(&outcome(5, 5));
        scoring.score(&outcome(5, 5));
        assert_eq!(scoring.score(&outcome(8, 5)), 0);
        assert_eq!(scoring.streak(), 0);
    }

    #[test]
    fn streak_pass_keeps_streak() {
        let mut scoring = StreakScoring::default();
        scoring.score(&outcome(5, 5));
        assert_eq!(scoring.score(&outcome(GUESS_PASS, 5)), 0);
        assert_eq!(scoring.streak(), 1);
    }

    #[test]
    fn streak_expired() {
        let mut scoring = StreakScoring::default();
        scoring.score(&outcome(5, 5));
        let expired = Outcome {
            expired: true,
            time_left: 0.0,
            ..outcome(GUESS_EXPIRE, 5)
        };
        assert_eq!(scoring.score(&expired), 0);
        assert_eq!(scoring.streak(), 0);
    }

    #[test]
    fn streak_time_left() {
        let mut scoring = StreakScoring::default();
        let slow = Outcome {
            time_left: 0.25,
            ..outcome(3, 3)
        };
        assert_eq!(scoring.score(&slow), 250);
    }

    #[test]
    fn streak_opponents() {
        let mut scoring = StreakScoring::default();
        let mut opponents = Vec::new();
        for _ in 0..8 {
            opponents.push(scoring.opponents());
            scoring.score(&outcome(1, 1));
        }
        assert_eq!(opponents, [1, 1, 1, 1, 2, 2, 2, 3]);
    }

    #[test]
    fn multiplier_scoring() {
        let mut scoring = MultiplierScoring::default();
        assert_eq!(scoring.opponents(), 1);
        assert_eq!(scoring.score(&outcome(4, 4)), 1000);
        assert_eq!(scoring.multiplier(), 2);
        assert_eq!(scoring.opponents(), 2);

        // A near guess keeps the multiplier.
        assert_eq!(scoring.score(&outcome(6, 4)), 1000);
        assert_eq!(scoring.multiplier(), 2);

        // The multiplier is capped.
        for _ in 0..10 {
            scoring.score(&outcome(4, 4));
        }
        assert_eq!(scoring.multiplier(), MultiplierScoring::MAX_MULTIPLIER);
        assert_eq!(scoring.score(&outcome(4, 4)), 5000);
        assert_eq!(scoring.opponents(), 3);

        assert_eq!(scoring.score(&outcome(GUESS_PASS, 4)), 0);
        assert_eq!(scoring.multiplier(), MultiplierScoring::MAX_MULTIPLIER);

        assert_eq!(scoring.score(&outcome(0, 4)), 0);
        assert_eq!(scoring.multiplier(), 1);
    }

    #[test]
    fn multiplier_redeals() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut scoring = MultiplierScoring::default();

        // Find a round with no outs.
        let round = (1..)
            .map(|id| Round::deal(id, 1, OutsPolicy::WinOrTie, &mut rng).unwrap())
            .find(|r| r.outs().is_empty())
            .unwrap();

        let redeals = (0..100)
            .filter(|_| scoring.redeal(&round, &mut rng))
            .count();
        assert_eq!(redeals, MultiplierScoring::MAX_REDEALS as usize);

        scoring.start_round();
        assert!((0..100).any(|_| scoring.redeal(&round, &mut rng)));
    }

    #[test]
    fn streak_never_redeals() {
        let mut rng = StdRng::seed_from_u64(11);
        let round = Round::deal(1, 1, OutsPolicy::WinOrTie, &mut rng).unwrap();
        let mut scoring = Scoring::from(ScoringKind::Streak);
        assert!(!(0..100).any(|_| scoring.redeal(&round, &mut rng)));
    }
}
