// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator sorts the candidate cards by rank and tries each hand category
//! from the strongest to the weakest, the first category found is the hand rank
//! and its five cards, ordered by significance, break ties between hands with
//! the same rank.
use serde::{Deserialize, Serialize};
use std::{
    cmp::{Ordering, Reverse},
    fmt,
};
use thiserror::Error;

use outs_cards::Card;

mod detect;
use detect::Detector;

/// Evaluation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The evaluator needs at least 5 cards.
    #[error("a hand needs at least 5 cards, got {count}")]
    InsufficientCards {
        /// The number of cards passed to the evaluator.
        count: usize,
    },
}

/// The hand rank category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Royal flush, an Ace high straight flush.
    RoyalFlush,
}

impl HandRank {
    /// The number of hand ranks.
    pub const COUNT: usize = 10;

    /// The rank category value, higher is stronger.
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        };

        f.write_str(name)
    }
}

/// Detectors in descending strength order.
const DETECTORS: [(HandRank, Detector); HandRank::COUNT] = [
    (HandRank::RoyalFlush, detect::royal_flush),
    (HandRank::StraightFlush, detect::straight_flush),
    (HandRank::FourOfAKind, detect::four_of_a_kind),
    (HandRank::FullHouse, detect::full_house),
    (HandRank::Flush, detect::flush),
    (HandRank::Straight, detect::straight),
    (HandRank::ThreeOfAKind, detect::three_of_a_kind),
    (HandRank::TwoPair, detect::two_pair),
    (HandRank::OnePair, detect::one_pair),
    (HandRank::HighCard, detect::high_card),
];

/// The value of a made hand.
///
/// Hand values compare by rank and then by the rank of each of the five cards
/// in order, suits are never compared.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    hand: [Card; 5],
}

impl HandValue {
    /// Evaluates 5 or more cards and returns the value of the best 5 cards hand.
    ///
    /// The result only depends on the set of cards, not on their order.
    pub fn eval(cards: &[Card]) -> Result<Self, EvalError> {
        let count = cards.len();
        if count < 5 {
            return Err(EvalError::InsufficientCards { count });
        }

        // Suits break ranks ties so that equal sets always sort the same way.
        let mut cards = cards.to_vec();
        cards.sort_by_key(|c| (Reverse(c.rank()), c.suit()));

        DETECTORS
            .iter()
            .find_map(|(rank, detect)| detect(&cards).map(|hand| Self { rank: *rank, hand }))
            .ok_or(EvalError::InsufficientCards { count })
    }

    /// The hand rank category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The best five cards, the most significant card first.
    pub fn hand(&self) -> &[Card; 5] {
        &self.hand
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandValue {}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank).then_with(|| {
            let ranks = self.hand.iter().map(Card::rank);
            ranks.cmp(other.hand.iter().map(Card::rank))
        })
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.hand.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}
