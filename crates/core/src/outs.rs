// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player standing and outs computation.
//!
//! The standing of a player is the worst result of the player hand against each
//! opponent hand, an out is an undealt card that changes the standing when it
//! is added to the board.
use serde::{Deserialize, Serialize};
use std::{
    cmp::{Ordering, Reverse},
    fmt,
};

use outs_eval::{Card, EvalError, Hand};

/// The player standing against all opponents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(i8)]
pub enum Standing {
    /// At least one opponent has a better hand.
    Behind = -1,
    /// No opponent has a better hand and at least one has an equal hand.
    Tied = 0,
    /// The player has a better hand than all opponents.
    Ahead = 1,
}

impl Standing {
    /// The signed standing value.
    pub fn value(self) -> i8 {
        self as i8
    }

    /// Computes the standing of the player against the opponents on a board.
    pub fn on_board(player: &Hand, opponents: &[Hand], board: &[Card]) -> Result<Self, EvalError> {
        let player = player.evaluate(board)?;
        opponents
            .iter()
            .try_fold(Standing::Ahead, |standing, opponent| {
                let opponent = opponent.evaluate(board)?;
                Ok(standing.min(player.cmp(&opponent).into()))
            })
    }
}

impl From<Ordering> for Standing {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => Standing::Behind,
            Ordering::Equal => Standing::Tied,
            Ordering::Greater => Standing::Ahead,
        }
    }
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Standing::Behind => "behind",
            Standing::Tied => "tied",
            Standing::Ahead => "ahead",
        };

        f.write_str(s)
    }
}

/// The rule that decides which standing changes make a card an out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutsPolicy {
    /// A tie is not a win, a card is an out if it changes whether the player is
    /// ahead of all opponents.
    Win,
    /// A tie is as good as a win, a card is an out if it moves the player from
    /// behind to tied or ahead or the other way around.
    #[default]
    WinOrTie,
}

impl OutsPolicy {
    /// Checks if a change of standing is significant for this policy.
    pub fn is_out(self, from: Standing, to: Standing) -> bool {
        match self {
            OutsPolicy::Win => (from == Standing::Ahead) != (to == Standing::Ahead),
            OutsPolicy::WinOrTie => (from == Standing::Behind) != (to == Standing::Behind),
        }
    }
}

/// The outs for a board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outs {
    standing: Standing,
    cards: Vec<Card>,
    draws: usize,
}

impl Outs {
    /// Computes the player standing on the board and the outs among the undealt
    /// cards.
    ///
    /// Each undealt card is added to the board in turn and the standing computed
    /// again, the cards for which the change is significant for the policy are
    /// the outs. The returned outs are sorted by descending rank and suit.
    pub fn resolve<I>(
        player: &Hand,
        opponents: &[Hand],
        board: &[Card],
        undealt: I,
        policy: OutsPolicy,
    ) -> Result<Self, EvalError>
    where
        I: IntoIterator<Item = Card>,
    {
        let standing = Standing::on_board(player, opponents, board)?;

        let undealt = undealt.into_iter().collect::<Vec<_>>();
        let draws = undealt.len();

        let mut candidate = Vec::with_capacity(board.len() + 1);
        candidate.extend_from_slice(board);

        let mut cards = Vec::new();
        for card in undealt {
            candidate.push(card);
            let next = Standing::on_board(player, opponents, &candidate);
            candidate.pop();

            if policy.is_out(standing, next?) {
                cards.push(card);
            }
        }

        cards.sort_by_key(|c| (Reverse(c.rank()), c.suit()));

        Ok(Self {
            standing,
            cards,
            draws,
        })
    }

    /// The player standing on the board before any card is added.
    pub fn standing(&self) -> Standing {
        self.standing
    }

    /// The out cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The number of outs.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if there are no outs.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The number of undealt cards that have been tried.
    pub fn draws(&self) -> usize {
        self.draws
    }
}
