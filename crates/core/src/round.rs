// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A game round.
use anyhow::{Result, anyhow, bail};
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use outs_eval::{Card, Deck, Hand};

use crate::outs::{Outs, OutsPolicy, Standing};

/// A player guess and its distance from the number of outs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    /// The guessed number of outs.
    pub value: i32,
    /// The guess minus the actual number of outs.
    pub distance: i32,
}

/// A round with the player and opponents hands, the board and its outs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    id: usize,
    policy: OutsPolicy,
    player: Hand,
    opponents: Vec<Hand>,
    board: Vec<Card>,
    outs: Outs,
    guess: Option<Guess>,
    points: Option<u32>,
}

impl Round {
    /// The maximum number of opponents.
    pub const MAX_OPPONENTS: usize = 3;

    /// The number of board cards dealt in a round.
    pub const BOARD_SIZE: usize = 4;

    /// Deals a round from a new shuffled deck.
    pub fn deal<R>(id: usize, opponents: usize, policy: OutsPolicy, rng: &mut R) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        Self::check_opponents(opponents)?;

        let mut deck = Deck::new_and_shuffled(rng);
        let mut deal = || deck.deal().ok_or_else(|| anyhow!("Deck is empty"));

        let player = Hand::new(deal()?, deal()?);
        let opponents = (0..opponents)
            .map(|_| -> Result<Hand> { Ok(Hand::new(deal()?, deal()?)) })
            .collect::<Result<Vec<_>>>()?;
        let board = (0..Self::BOARD_SIZE)
            .map(|_| deal())
            .collect::<Result<Vec<_>>>()?;

        Self::resolve(id, policy, player, opponents, board, deck)
    }

    /// Creates a round from known cards, the board must have three or four cards.
    pub fn from_cards(
        id: usize,
        policy: OutsPolicy,
        player: [Card; 2],
        opponents: &[[Card; 2]],
        board: &[Card],
    ) -> Result<Self> {
        Self::check_opponents(opponents.len())?;

        if !(3..=Self::BOARD_SIZE).contains(&board.len()) {
            bail!("Invalid board size {}", board.len());
        }

        // Known cards are dealt first, a card that can't be dealt is a duplicate.
        let known = player
            .iter()
            .chain(opponents.iter().flatten())
            .chain(board.iter());
        let mut deck = Deck::default();
        for &card in known {
            if deck.take(card).is_none() {
                bail!("Duplicate card {card}");
            }
        }

        let player = Hand::new(player[0], player[1]);
        let opponents = opponents
            .iter()
            .map(|[c1, c2]| Hand::new(*c1, *c2))
            .collect();

        Self::resolve(id, policy, player, opponents, board.to_vec(), deck)
    }

    fn check_opponents(count: usize) -> Result<()> {
        if !(1..=Self::MAX_OPPONENTS).contains(&count) {
            bail!("Invalid number of opponents {count}");
        }

        Ok(())
    }

    fn resolve(
        id: usize,
        policy: OutsPolicy,
        mut player: Hand,
        mut opponents: Vec<Hand>,
        board: Vec<Card>,
        mut deck: Deck,
    ) -> Result<Self> {
        let outs = Outs::resolve(&player, &opponents, &board, deck.drain(), policy)?;

        player.make(&board)?;
        for opponent in opponents.iter_mut() {
            opponent.make(&board)?;
        }

        debug!(
            "Round {id} player {} {} with {} outs out of {} draws",
            player,
            outs.standing(),
            outs.len(),
            outs.draws()
        );

        Ok(Self {
            id,
            policy,
            player,
            opponents,
            board,
            outs,
            guess: None,
            points: None,
        })
    }

    /// Records the player guess and returns the distance from the number of
    /// outs, a guess after the first one is ignored.
    pub fn record_guess(&mut self, guess: i32) -> i32 {
        if let Some(recorded) = self.guess {
            return recorded.distance;
        }

        let distance = guess - self.outs.len() as i32;
        self.guess = Some(Guess {
            value: guess,
            distance,
        });

        debug!("Round {} guess {guess} distance {distance}", self.id);

        distance
    }

    pub(crate) fn set_points(&mut self, points: u32) {
        self.points = Some(points);
    }

    /// This round id.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The policy used to count outs.
    pub fn policy(&self) -> OutsPolicy {
        self.policy
    }

    /// The player hand made with the board.
    pub fn player(&self) -> &Hand {
        &self.player
    }

    /// The opponents hands made with the board.
    pub fn opponents(&self) -> &[Hand] {
        &self.opponents
    }

    /// The board cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The player standing against all opponents.
    pub fn standing(&self) -> Standing {
        self.outs.standing()
    }

    /// The out cards.
    pub fn outs(&self) -> &[Card] {
        self.outs.cards()
    }

    /// The number of undealt cards.
    pub fn draws(&self) -> usize {
        self.outs.draws()
    }

    /// The recorded guess.
    pub fn guess(&self) -> Option<Guess> {
        self.guess
    }

    /// The distance of the recorded guess from the number of outs.
    pub fn distance(&self) -> Option<i32> {
        self.guess.map(|g| g.distance)
    }

    /// The points scored in this round.
    pub fn points(&self) -> Option<u32> {
        self.points
    }

    /// Checks if a guess has been recorded.
    pub fn is_guessed(&self) -> bool {
        self.guess.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashSet;
    use outs_eval::HandRank;
    use rand::{SeedableRng, rngs::StdRng};

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    fn cards<const N: usize>(s: &str) -> [Card; N] {
        s.split_whitespace()
            .map(card)
            .collect::<Vec<_>>()
            .try_into()
            .unwrap()
    }

    #[test]
    fn deal_round() {
        let mut rng = StdRng::seed_from_u64(101);
        for opponents in 1..=Round::MAX_OPPONENTS {
            let round = Round::deal(1, opponents, OutsPolicy::WinOrTie, &mut rng).unwrap();
            assert_eq!(round.opponents().len(), opponents);
            assert_eq!(round.board().len(), Round::BOARD_SIZE);
            assert_eq!(round.draws(), Deck::SIZE - 2 * (opponents + 1) - Round::BOARD_SIZE);
            assert!(round.outs().len() <= round.draws());
            assert!(round.player().made().is_some());
            assert!(round.opponents().iter().all(|h| h.made().is_some()));
            assert!(round.guess().is_none());

            // All dealt cards are distinct.
            let mut seen = AHashSet::default();
            let dealt = round
                .opponents()
                .iter()
                .chain(Some(round.player()))
                .flat_map(|h| h.hole().iter())
                .chain(round.board().iter())
                .chain(round.outs().iter());
            assert!(dealt.copied().all(|c| seen.insert(c)));
        }
    }

    #[test]
    fn deal_invalid_opponents() {
        let mut rng = StdRng::seed_from_u64(101);
        assert!(Round::deal(1, 0, OutsPolicy::Win, &mut rng).is_err());
        assert!(Round::deal(1, 4, OutsPolicy::Win, &mut rng).is_err());
    }

    #[test]
    fn deal_is_seeded() {
        let r1 = Round::deal(1, 2, OutsPolicy::Win, &mut StdRng::seed_from_u64(7)).unwrap();
        let r2 = Round::deal(1, 2, OutsPolicy::Win, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(r1.board(), r2.board());
        assert_eq!(r1.outs(), r2.outs());
    }

    #[test]
    fn straight_flush_draw_ahead() {
        // Player has a straight, the opponent has nothing.
        let round = Round::from_cards(
            1,
            OutsPolicy::WinOrTie,
            cards::<2>("5d 8d"),
            &[cards::<2>("Kc Qs")],
            &cards::<4>("Ad 4h 3d 2s"),
        )
        .unwrap();

        assert_eq!(round.player().made().unwrap().rank(), HandRank::Straight);
        assert_eq!(round.standing(), Standing::Ahead);
        assert_eq!(round.draws(), 44);

        // No card gives the opponent a better hand than a five high straight,
        // the opponent flush needs two clubs or spades.
        assert!(round.outs().is_empty());
    }

    #[test]
    fn two_pair_on_paired_board() {
        let mut round = Round::from_cards(
            1,
            OutsPolicy::WinOrTie,
            cards::<2>("Kh 2c"),
            &[cards::<2>("9c 2s")],
            &cards::<4>("Ac Ah 5c 2d"),
        )
        .unwrap();

        // Both players have aces and deuces, the king kicker wins.
        assert_eq!(round.player().made().unwrap().rank(), HandRank::TwoPair);
        assert_eq!(round.opponents()[0].made().unwrap().rank(), HandRank::TwoPair);
        assert_eq!(round.standing(), Standing::Ahead);

        // The opponent wins with a nine, aces full or deuces full is a tie.
        let outs = round.outs();
        assert_eq!(outs, &cards::<3>("9h 9s 9d"));

        let distance = round.record_guess(10);
        assert_eq!(distance, 7);
        assert_eq!(round.guess(), Some(Guess { value: 10, distance: 7 }));

        // Only the first guess counts.
        assert_eq!(round.record_guess(3), 7);
        assert_eq!(round.distance(), Some(7));
    }

    #[test]
    fn ties_are_outs_when_playing_to_win() {
        let round = Round::from_cards(
            1,
            OutsPolicy::Win,
            cards::<2>("Kh 2c"),
            &[cards::<2>("9c 2s")],
            &cards::<4>("Ac Ah 5c 2d"),
        )
        .unwrap();

        assert_eq!(round.standing(), Standing::Ahead);
        assert_eq!(round.outs(), &cards::<6>("As Ad 9h 9s 9d 2h"));
    }

    #[test]
    fn from_cards_rejects_duplicates() {
        let res = Round::from_cards(
            1,
            OutsPolicy::Win,
            cards::<2>("Kh 2c"),
            &[cards::<2>("9c 2c")],
            &cards::<4>("Ac Ah 5c 2d"),
        );
        assert!(res.is_err());
    }

    #[test]
    fn from_cards_board_size() {
        let player = cards::<2>("Kh 2c");
        let opponents = [cards::<2>("9c 2s")];

        let flop = Round::from_cards(1, OutsPolicy::Win, player, &opponents, &cards::<3>("Ac Ah 5c"));
        assert_eq!(flop.unwrap().draws(), 45);

        assert!(Round::from_cards(1, OutsPolicy::Win, player, &opponents, &cards::<2>("Ac Ah")).is_err());
        assert!(
            Round::from_cards(1, OutsPolicy::Win, player, &opponents, &cards::<5>("Ac Ah 5c 7d 8d"))
                .is_err()
        );
    }
}
