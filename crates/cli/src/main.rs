// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! How Many Outs console game.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::error;
use rand::{Rng, SeedableRng, rngs::StdRng};

use outs_core::{Card, Config, Game, OutsPolicy, Round, ScoringKind};

pub mod terminal;

#[derive(Debug, Parser)]
#[clap(args_conflicts_with_subcommands = true)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,
    /// Number of rounds.
    #[clap(long, short, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..=100))]
    rounds: u16,
    /// The outs counting policy.
    #[clap(long, short, value_enum, default_value_t = Policy::WinOrTie)]
    policy: Policy,
    /// The scoring policy.
    #[clap(long, short, value_enum, default_value_t = Scoring::Streak)]
    scoring: Scoring,
    /// Seed for the deck shuffles.
    #[clap(long)]
    seed: Option<u64>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Computes the outs for known cards.
    Outs {
        /// The player hole cards.
        #[clap(long, num_args = 2, required = true)]
        player: Vec<Card>,
        /// An opponent hole cards, can be repeated.
        #[clap(long, num_args = 2, required = true)]
        opponent: Vec<Card>,
        /// The board cards.
        #[clap(long, num_args = 3..=4, required = true)]
        board: Vec<Card>,
        /// The outs counting policy.
        #[clap(long, short, value_enum, default_value_t = Policy::WinOrTie)]
        policy: Policy,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Policy {
    /// Only wins count, a tie is a loss.
    Win,
    /// Ties count as wins.
    WinOrTie,
}

impl From<Policy> for OutsPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Win => OutsPolicy::Win,
            Policy::WinOrTie => OutsPolicy::WinOrTie,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Scoring {
    /// Points multiplied by the streak of close guesses.
    Streak,
    /// Points multiplied by a multiplier raised by exact guesses.
    Multiplier,
}

impl From<Scoring> for ScoringKind {
    fn from(scoring: Scoring) -> Self {
        match scoring {
            Scoring::Streak => ScoringKind::Streak,
            Scoring::Multiplier => ScoringKind::Multiplier,
        }
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Command::Outs {
            player,
            opponent,
            board,
            policy,
        }) => {
            let [c1, c2] = player[..] else {
                bail!("The player needs two cards");
            };

            let opponents = opponent
                .chunks_exact(2)
                .map(|c| [c[0], c[1]])
                .collect::<Vec<_>>();

            let round = Round::from_cards(1, policy.into(), [c1, c2], &opponents, &board)?;
            terminal::show(&round)
        }
        None => {
            let mut rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };

            let config = Config {
                rounds: cli.rounds as usize,
                policy: cli.policy.into(),
                scoring: cli.scoring.into(),
            };

            let mut game = Game::new(rng.random(), config);
            terminal::play(&mut game, &mut rng)
        }
    }
}
