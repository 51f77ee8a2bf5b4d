// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories detectors.
//!
//! Every detector takes the candidate cards sorted by descending rank and
//! returns the best five cards for its category ordered by significance, or
//! `None` if the cards don't make the category.
use std::cmp::Reverse;

use outs_cards::{Card, Rank};

/// The best five cards of a made hand.
pub type Five = [Card; 5];

/// A category detector.
pub type Detector = fn(&[Card]) -> Option<Five>;

pub fn royal_flush(cards: &[Card]) -> Option<Five> {
    straight_flush(cards).filter(|hand| hand[0].rank() == Rank::Ace)
}

pub fn straight_flush(cards: &[Card]) -> Option<Five> {
    run(cards, true)
}

pub fn four_of_a_kind(cards: &[Card]) -> Option<Five> {
    group(cards, 4, Card::rank).and_then(five)
}

pub fn full_house(cards: &[Card]) -> Option<Five> {
    two_groups(cards, 3)
}

pub fn flush(cards: &[Card]) -> Option<Five> {
    // Group suits together keeping the highest cards first in each suit.
    let mut by_suit = cards.to_vec();
    by_suit.sort_by_key(|c| (c.suit(), Reverse(c.rank())));
    group(&by_suit, 5, Card::suit).and_then(five)
}

pub fn straight(cards: &[Card]) -> Option<Five> {
    run(cards, false)
}

pub fn three_of_a_kind(cards: &[Card]) -> Option<Five> {
    group(cards, 3, Card::rank).and_then(five)
}

pub fn two_pair(cards: &[Card]) -> Option<Five> {
    two_groups(cards, 2)
}

pub fn one_pair(cards: &[Card]) -> Option<Five> {
    group(cards, 2, Card::rank).and_then(five)
}

pub fn high_card(cards: &[Card]) -> Option<Five> {
    five(cards.to_vec())
}

fn five(cards: impl IntoIterator<Item = Card>) -> Option<Five> {
    let cards = cards.into_iter().take(5).collect::<Vec<_>>();
    cards.try_into().ok()
}

/// Finds 5 cards of consecutive ranks, and of the same suit if `suited`.
///
/// Runs are tried from the highest starting card down so the first run found
/// is the highest one. An Ace can close a run after a Deuce (the wheel).
fn run(cards: &[Card], suited: bool) -> Option<Five> {
    let low_aces = cards
        .iter()
        .copied()
        .filter(|c| c.rank() == Rank::Ace)
        .collect::<Vec<_>>();

    for (i, &start) in cards.iter().enumerate() {
        let mut last = start;
        let mut hand = vec![start];

        for &card in cards[i + 1..].iter().chain(&low_aces) {
            if follows(last, card) && (!suited || last.suit() == card.suit()) {
                hand.push(card);
                last = card;

                if hand.len() == 5 {
                    return five(hand);
                }
            }
        }
    }

    None
}

/// Checks if `next` is one rank below `prev`, an Ace is also below a Deuce.
fn follows(prev: Card, next: Card) -> bool {
    let (prev, next) = (prev.rank(), next.rank());
    prev.value() == next.value() + 1 || (prev == Rank::Deuce && next == Rank::Ace)
}

/// Finds the first `count` adjacent cards with the same key.
///
/// Returns the group followed by all the other cards in their original order.
fn group<K, F>(cards: &[Card], count: usize, key: F) -> Option<Vec<Card>>
where
    K: PartialEq,
    F: Fn(&Card) -> K,
{
    let mut leftovers = Vec::with_capacity(cards.len());
    let mut matched = Vec::with_capacity(count);

    for (i, card) in cards.iter().enumerate() {
        if matched.first().is_some_and(|first| key(first) != key(card)) {
            leftovers.append(&mut matched);
        }

        matched.push(*card);

        if matched.len() == count {
            matched.extend(leftovers);
            matched.extend_from_slice(&cards[i + 1..]);
            return Some(matched);
        }
    }

    None
}

/// Finds a group of `first` cards with the same rank and a pair of another rank.
fn two_groups(cards: &[Card], first: usize) -> Option<Five> {
    let high = group(cards, first, Card::rank)?;

    // Drop all cards with the high group rank before looking for the pair.
    let high_rank = high[0].rank();
    let rest = cards
        .iter()
        .copied()
        .filter(|c| c.rank() != high_rank)
        .collect::<Vec<_>>();
    let low = group(&rest, 2, Card::rank)?;

    five(high[..first].iter().chain(low.iter().take(5 - first)).copied())
}
