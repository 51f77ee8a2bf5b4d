// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! How Many Outs cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use outs_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td: Card = "10d".parse().unwrap();
//! assert_eq!(ah.to_string(), "Ah");
//! assert_eq!(td.rank(), Rank::Ten);
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards. A deck deals each card
//! once until it is shuffled again, dealing from an empty deck returns `None`:
//!
//! ```
//! # use outs_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let (c1, c2) = (deck.deal(), deck.deal());
//! assert_ne!(c1, c2);
//! assert_eq!(deck.remaining(), 50);
//!
//! // Deal the rest of the deck.
//! assert_eq!(deck.drain().count(), 50);
//! assert_eq!(deck.deal(), None);
//! ```
//!
//! To iterate all the 5 cards hands of the cards left in a deck:
//!
//! ```no_run
//! # use outs_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
