// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Prints the best hand for a set of cards:
//
// ```bash
// $ cargo r --example eval_cards -- As Ks Qh Qs Js 5h 10s
// cards: As Ks Qh Qs Js 5h 10s
// rank:  Royal Flush
// hand:  As,Ks,Qs,Js,10s
// ```
use clap::Parser;

use outs_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The cards to evaluate, at least 5 (for example Ah 10d 2c).
    #[clap(required = true, num_args = 5..)]
    cards: Vec<Card>,
}

fn main() -> Result<(), EvalError> {
    let cli = Cli::parse();

    let value = HandValue::eval(&cli.cards)?;
    let cards = cli.cards.iter().map(Card::to_string).collect::<Vec<_>>();
    println!("cards: {}", cards.join(" "));
    println!("rank:  {}", value.rank());
    println!("hand:  {value}");

    Ok(())
}
