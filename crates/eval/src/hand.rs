// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A player hand.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use outs_cards::Card;

use crate::eval::{EvalError, HandValue};

/// A player hand with two hole cards and the best hand made with a board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hand {
    hole: [Card; 2],
    made: Option<HandValue>,
}

impl Hand {
    /// Creates an unevaluated hand with the given hole cards.
    pub fn new(c1: Card, c2: Card) -> Self {
        Self {
            hole: [c1, c2],
            made: None,
        }
    }

    /// The hole cards.
    pub fn hole(&self) -> &[Card; 2] {
        &self.hole
    }

    /// The made hand if the hand has been evaluated.
    pub fn made(&self) -> Option<&HandValue> {
        self.made.as_ref()
    }

    /// Evaluates the hole cards with the board without storing the result.
    pub fn evaluate(&self, board: &[Card]) -> Result<HandValue, EvalError> {
        let mut cards = Vec::with_capacity(self.hole.len() + board.len());
        cards.extend_from_slice(&self.hole);
        cards.extend_from_slice(board);
        HandValue::eval(&cards)
    }

    /// Makes the best hand with the board and stores it in this hand.
    pub fn make(&mut self, board: &[Card]) -> Result<&HandValue, EvalError> {
        let value = self.evaluate(board)?;
        Ok(self.made.insert(value))
    }

    /// Clears the made hand.
    pub fn reset(&mut self) {
        self.made = None;
    }

    /// Compares the made hands, an unevaluated hand is lower than any made hand.
    pub fn compare(&self, other: &Hand) -> Ordering {
        self.made.cmp(&other.made)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.made {
            Some(value) => write!(f, "{value}"),
            None => write!(f, "{},{}", self.hole[0], self.hole[1]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HandRank;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    fn board(s: &str) -> Vec<Card> {
        s.split_whitespace().map(card).collect()
    }

    #[test]
    fn make_and_reset() {
        let mut hand = Hand::new(card("As"), card("Ks"));
        assert!(hand.made().is_none());
        assert_eq!(hand.to_string(), "As,Ks");

        let value = hand.make(&board("Qh Qs Js 5h 10s")).unwrap();
        assert_eq!(value.rank(), HandRank::RoyalFlush);
        assert_eq!(hand.to_string(), "As,Ks,Qs,Js,10s");

        hand.reset();
        assert!(hand.made().is_none());
        assert_eq!(hand.hole(), &[card("As"), card("Ks")]);
    }

    #[test]
    fn make_needs_five_cards() {
        let mut hand = Hand::new(card("As"), card("Ks"));
        let err = hand.make(&board("Qh Qs")).unwrap_err();
        assert_eq!(err, EvalError::InsufficientCards { count: 4 });
        assert!(hand.made().is_none());
    }

    #[test]
    fn evaluate_does_not_store() {
        let hand = Hand::new(card("2d"), card("7c"));
        let value = hand.evaluate(&board("Ac Ah 5c 2s")).unwrap();
        assert_eq!(value.rank(), HandRank::TwoPair);
        assert!(hand.made().is_none());
    }

    #[test]
    fn compare_hands() {
        let b = board("Ac Ah 5c 2d");
        let mut h1 = Hand::new(card("Kh"), card("2c"));
        let mut h2 = Hand::new(card("9c"), card("2s"));

        // Unevaluated hands are the lowest hands.
        assert_eq!(h1.compare(&h2), Ordering::Equal);
        h1.make(&b).unwrap();
        assert_eq!(h1.compare(&h2), Ordering::Greater);
        assert_eq!(h2.compare(&h1), Ordering::Less);

        h2.make(&b).unwrap();
        assert_eq!(h1.made().unwrap().rank(), HandRank::TwoPair);
        assert_eq!(h2.made().unwrap().rank(), HandRank::TwoPair);
        assert_eq!(h1.compare(&h2), Ordering::Greater);
        assert_eq!(h2.compare(&h1), Ordering::Less);
        assert_eq!(h1.compare(&h1), Ordering::Equal);
    }

    #[test]
    fn compare_split_pot() {
        let b = board("Kh Kd 9s 9c 2h");
        let mut h1 = Hand::new(card("Ac"), card("3d"));
        let mut h2 = Hand::new(card("As"), card("4h"));
        h1.make(&b).unwrap();
        h2.make(&b).unwrap();
        assert_eq!(h1.compare(&h2), Ordering::Equal);
    }
}
