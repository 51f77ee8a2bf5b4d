// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! How Many Outs game core.
//!
//! A [Round] deals the player and opponents hands with a four cards board and
//! computes the outs, the undealt cards that change the player standing:
//!
//! ```
//! # use outs_core::*;
//! let card = |s: &str| s.parse::<Card>().unwrap();
//! let round = Round::from_cards(
//!     1,
//!     OutsPolicy::WinOrTie,
//!     [card("Kh"), card("2c")],
//!     &[[card("9c"), card("2s")]],
//!     &[card("Ac"), card("Ah"), card("5c"), card("2d")],
//! )
//! .unwrap();
//!
//! assert_eq!(round.standing(), Standing::Ahead);
//! assert_eq!(round.outs().len(), 3);
//! assert_eq!(round.draws(), 44);
//! ```
//!
//! A [Game] plays a sequence of rounds scoring the player guesses:
//!
//! ```
//! # use outs_core::*;
//! # use std::time::Duration;
//! let mut game = Game::new(1, Config::default());
//! let mut rng = rand::rng();
//! while let Some(round) = game.new_round(&mut rng).unwrap() {
//!     let guess = round.outs().len() as i32;
//!     game.end_round(guess, Duration::from_secs(1));
//! }
//! assert!(game.is_finished());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod game;
pub use game::{Config, Game};

pub mod outs;
pub use outs::{Outs, OutsPolicy, Standing};

pub mod round;
pub use round::{Guess, Round};

pub mod scoring;
pub use scoring::{
    GUESS_EXPIRE, GUESS_PASS, MultiplierScoring, Outcome, Scoring, ScoringKind, ScoringPolicy,
    StreakScoring,
};

// Reexport evaluator types.
pub use outs_eval::{Card, Deck, Hand, HandRank, HandValue, Rank, Suit};
