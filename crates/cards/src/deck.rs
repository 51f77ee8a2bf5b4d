// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards and deck definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, iter, str::FromStr};
use thiserror::Error;

/// A Poker card.
///
/// A card is an immutable pair of [Rank] and [Suit], its text form is the rank
/// followed by the suit:
///
/// ```
/// # use outs_cards::{Card, Rank, Suit};
/// let c = Card::new(Rank::Ten, Suit::Hearts);
/// assert_eq!(c.to_string(), "10h");
/// assert_eq!("10h".parse::<Card>().unwrap(), c);
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card rank.
    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Error returned when parsing a card from text fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid card {0:?}, expected rank (2-10, T, J, Q, K, A) followed by suit (h, d, s, c)")]
pub struct ParseCardError(String);

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCardError(s.to_string());

        let s = s.trim();
        let mut chars = s.chars();
        let suit = match chars.next_back().ok_or_else(err)?.to_ascii_lowercase() {
            'h' => Suit::Hearts,
            's' => Suit::Spades,
            'd' => Suit::Diamonds,
            'c' => Suit::Clubs,
            _ => return Err(err()),
        };

        let rank = match chars.as_str().to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(err()),
        };

        Ok(Card::new(rank, suit))
    }
}

/// Card rank, the discriminant is the rank value with Ace high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks from Deuce to Ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank value, 2 for a Deuce up to 14 for an Ace.
    #[inline]
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Jack => f.write_str("J"),
            Rank::Queen => f.write_str("Q"),
            Rank::King => f.write_str("K"),
            Rank::Ace => f.write_str("A"),
            rank => write!(f, "{}", rank.value()),
        }
    }
}

/// Card suit.
///
/// Suits have no strength, the order is only used to group and sort cards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    /// Hearts suit.
    Hearts = 0,
    /// Spades suit.
    Spades = 1,
    /// Diamonds suit.
    Diamonds = 2,
    /// Clubs suit.
    Clubs = 3,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Hearts => 'h',
            Suit::Spades => 's',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Hearts, Suit::Spades, Suit::Diamonds, Suit::Clubs].into_iter()
    }
}

/// A cards deck.
///
/// The deck keeps all its cards and a cursor to the next card to deal, a card
/// is dealt at most once until the deck is shuffled again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
    next: usize,
    last: Option<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles all the cards and resets the dealing cursor.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.next = 0;
        self.last = None;
    }

    /// Deals a card from the deck, returns `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        let card = self.cards.get(self.next).copied()?;
        self.next += 1;
        self.last = Some(card);
        Some(card)
    }

    /// The last dealt card.
    pub fn last(&self) -> Option<Card> {
        self.last
    }

    /// Number of cards left to deal.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.next
    }

    /// Checks if all cards have been dealt.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The cards that have not been dealt yet.
    pub fn undealt(&self) -> &[Card] {
        &self.cards[self.next..]
    }

    /// Deals the given card out of order, returns `None` if the card has
    /// already been dealt.
    pub fn take(&mut self, card: Card) -> Option<Card> {
        let pos = self.undealt().iter().position(|c| c == &card)?;
        self.cards.swap(self.next, self.next + pos);
        self.deal()
    }

    /// Deals all the remaining cards, the iterator stops when the deck is empty.
    pub fn drain(&mut self) -> impl Iterator<Item = Card> + '_ {
        iter::from_fn(move || self.deal())
    }

    /// Calls the `f` closure for each k-cards combination of the undealt cards.
    ///
    /// Panics if k is 0.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!(k > 0, "k must be positive");

        let cards = self.undealt();
        let n = cards.len();
        if k > n {
            return;
        }

        let mut idx = (0..k).collect::<Vec<_>>();
        let mut hand = Vec::with_capacity(k);
        loop {
            hand.clear();
            hand.extend(idx.iter().map(|&i| cards[i]));
            f(&hand);

            // Move to the next combination in lexicographic order.
            let Some(i) = (0..k).rev().find(|&i| idx[i] < i + n - k) else {
                return;
            };

            idx[i] += 1;
            for j in (i + 1)..k {
                idx[j] = idx[j - 1] + 1;
            }
        }
    }
}

impl Default for Deck {
    /// An unshuffled deck.
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self {
            cards,
            next: 0,
            last: None,
        }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    /// Iterates the undealt cards.
    fn into_iter(mut self) -> Self::IntoIter {
        self.cards.drain(..self.next);
        self.cards.into_iter()
    }
}
