// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! How Many Outs hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. The evaluator finds the best
//! five cards hand in the given cards and its rank, hands values are ordered
//! first by rank and then by the ranks of their cards:
//!
//! ```
//! # use outs_eval::*;
//! let cards = |s: &str| s.split(' ').map(|c| c.parse().unwrap()).collect::<Vec<Card>>();
//!
//! let wheel = HandValue::eval(&cards("Ah 2d 3s 4c 5h Kc")).unwrap();
//! assert_eq!(wheel.rank(), HandRank::Straight);
//! assert_eq!(wheel.hand()[0].rank(), Rank::Five);
//!
//! let flush = HandValue::eval(&cards("2h 7h 9h Jh Kh")).unwrap();
//! assert!(flush > wheel);
//! ```
//!
//! A [Hand] holds a player hole cards and the hand made with a board:
//!
//! ```
//! # use outs_eval::*;
//! let board = ["Qh", "Qs", "Js", "5h", "10s"].map(|c| c.parse::<Card>().unwrap());
//! let mut hand = Hand::new("As".parse().unwrap(), "Ks".parse().unwrap());
//! hand.make(&board).unwrap();
//! assert_eq!(hand.made().unwrap().rank(), HandRank::RoyalFlush);
//! assert_eq!(hand.to_string(), "As,Ks,Qs,Js,10s");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{EvalError, HandRank, HandValue};

pub mod hand;
pub use hand::Hand;

// Reexport cards types.
pub use outs_cards::{Card, Deck, ParseCardError, Rank, Suit};
