// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The game state.
use anyhow::Result;
use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::{
    outs::OutsPolicy,
    round::Round,
    scoring::{GUESS_EXPIRE, Outcome, Scoring, ScoringKind, ScoringPolicy},
};

/// The game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The number of rounds in a game.
    pub rounds: usize,
    /// The outs counting policy.
    pub policy: OutsPolicy,
    /// The scoring policy.
    pub scoring: ScoringKind,
}

impl Config {
    /// The default number of rounds.
    pub const DEFAULT_ROUNDS: usize = 10;
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rounds: Self::DEFAULT_ROUNDS,
            policy: OutsPolicy::default(),
            scoring: ScoringKind::default(),
        }
    }
}

/// A game made of a sequence of rounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    id: u64,
    config: Config,
    scoring: Scoring,
    rounds: Vec<Round>,
    score: u64,
}

impl Game {
    /// The points possible in the first round.
    pub const START_POINTS: u32 = 1000;

    /// The points possible in the last round.
    pub const END_POINTS: u32 = 10000;

    /// The time allowed when the timer starts.
    pub const START_TIME: Duration = Duration::from_secs(60);

    /// The time allowed in the last round.
    pub const END_TIME: Duration = Duration::from_secs(20);

    /// Time forgiven to the player for network and input latency.
    pub const LATENCY: Duration = Duration::from_millis(500);

    /// Creates a new game with no rounds.
    pub fn new(id: u64, config: Config) -> Self {
        Self {
            id,
            scoring: Scoring::from(config.scoring),
            config,
            rounds: Vec::default(),
            score: 0,
        }
    }

    /// Deals a new round and returns it.
    ///
    /// Returns the current round if it has not been guessed yet and `None` if
    /// there are no rounds left.
    pub fn new_round<R>(&mut self, rng: &mut R) -> Result<Option<&Round>>
    where
        R: Rng + ?Sized,
    {
        if self.current_round().is_some() {
            return Ok(self.current_round());
        }

        if self.rounds_remaining() == 0 {
            return Ok(None);
        }

        let id = self.rounds.len() + 1;
        let opponents = self.scoring.opponents();

        self.scoring.start_round();
        let mut round = Round::deal(id, opponents, self.config.policy, rng)?;
        while self.scoring.redeal(&round, rng) {
            debug!("Dealing round {id} again with {} outs", round.outs().len());
            round = Round::deal(id, opponents, self.config.policy, rng)?;
        }

        info!(
            "Game {} round {id} with {opponents} opponents and {} outs",
            self.id,
            round.outs().len()
        );

        self.rounds.push(round);
        Ok(self.rounds.last())
    }

    /// Ends the current round with the player guess and the time the player took
    /// to guess, returns the scored round or `None` if there is no open round.
    pub fn end_round(&mut self, guess: i32, elapsed: Duration) -> Option<&Round> {
        let points_possible = self.points_possible();
        let (time_left, expired) = match self.time_allowed() {
            Some(allowed) => {
                let passed = elapsed.saturating_sub(Self::LATENCY).min(allowed);
                let left = 1.0 - passed.as_secs_f64() / allowed.as_secs_f64();
                (left, passed >= allowed)
            }
            None => (1.0, false),
        };

        let round = self.rounds.last_mut().filter(|r| !r.is_guessed())?;

        let guess = if expired { GUESS_EXPIRE } else { guess };
        let distance = round.record_guess(guess);
        let points = self.scoring.score(&Outcome {
            guess,
            distance,
            points_possible,
            time_left,
            expired,
        });

        round.set_points(points);
        self.score += points as u64;

        info!(
            "Game {} round {} scored {points} points, total {}",
            self.id,
            round.id(),
            self.score
        );

        Some(round)
    }

    /// The round waiting for a guess.
    pub fn current_round(&self) -> Option<&Round> {
        self.rounds.last().filter(|r| !r.is_guessed())
    }

    /// The rounds dealt so far.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// The number of rounds still to deal.
    pub fn rounds_remaining(&self) -> usize {
        self.config.rounds.saturating_sub(self.rounds.len())
    }

    /// Checks if all rounds have been dealt and guessed.
    pub fn is_finished(&self) -> bool {
        self.rounds_remaining() == 0 && self.current_round().is_none()
    }

    /// The maximum points for the last dealt round.
    pub fn points_possible(&self) -> u32 {
        let round = self.rounds.len().max(1) as u32;
        let rounds = self.config.rounds as u32;
        if rounds <= 1 {
            return Self::START_POINTS;
        }

        Self::START_POINTS + (round - 1) * (Self::END_POINTS - Self::START_POINTS) / (rounds - 1)
    }

    /// The time allowed to guess the last dealt round, the first round is
    /// untimed.
    pub fn time_allowed(&self) -> Option<Duration> {
        let round = self.rounds.len();
        let rounds = self.config.rounds;
        if round <= 1 || rounds <= 1 {
            return None;
        }

        let range = (Self::START_TIME - Self::END_TIME).as_secs_f64();
        let step = (round - 1) as f64 * range / (rounds - 1) as f64;
        Some(Duration::from_secs_f64(Self::START_TIME.as_secs_f64() - step))
    }

    /// This game id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The game configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The scoring policy state.
    pub fn scoring(&self) -> &Scoring {
        &self.scoring
    }

    /// The total score.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Serializes this game to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserializes a game from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
