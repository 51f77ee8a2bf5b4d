// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use crossterm::{
    queue,
    style::{self, Stylize},
};
use rand::Rng;
use std::{
    io::{self, BufRead, Write},
    time::Instant,
};

use outs_core::{Card, GUESS_PASS, Game, Hand, Round, Standing, Suit};

/// Runs the game loop reading the player guesses from stdin.
pub fn play<R: Rng + ?Sized>(game: &mut Game, rng: &mut R) -> Result<()> {
    let mut stdout = io::stdout();
    let mut lines = io::stdin().lock().lines();

    while game.new_round(rng)?.is_some() {
        let Some(round) = game.current_round() else {
            break;
        };

        print_header(&mut stdout, round, game)?;
        print_round(&mut stdout, round)?;

        let start = Instant::now();
        let Some(guess) = read_guess(&mut stdout, &mut lines)? else {
            break;
        };

        if let Some(round) = game.end_round(guess, start.elapsed()) {
            print_outs(&mut stdout, round)?;
            print_points(&mut stdout, round)?;
        }

        writeln!(stdout)?;
    }

    queue!(
        stdout,
        style::PrintStyledContent(format!("Final score {}\n", game.score()).bold())
    )?;
    stdout.flush()?;

    Ok(())
}

/// Prints a round with its outs.
pub fn show(round: &Round) -> Result<()> {
    let mut stdout = io::stdout();
    print_round(&mut stdout, round)?;
    print_outs(&mut stdout, round)?;
    stdout.flush()?;
    Ok(())
}

fn print_header<W: Write>(w: &mut W, round: &Round, game: &Game) -> Result<()> {
    let time = game
        .time_allowed()
        .map(|t| format!("{:.1} seconds", t.as_secs_f64()))
        .unwrap_or_else(|| "untimed".to_string());

    let text = format!(
        "Round {} of {}, {} points, {}\n",
        round.id(),
        game.config().rounds,
        game.points_possible(),
        time
    );

    queue!(w, style::PrintStyledContent(text.bold()))?;
    Ok(())
}

fn print_round<W: Write>(w: &mut W, round: &Round) -> Result<()> {
    print_hand(w, "Your hand", round.player(), None)?;

    for (idx, opponent) in round.opponents().iter().enumerate() {
        let label = format!("Opponent {}", idx + 1);
        let standing = Standing::from(round.player().compare(opponent));
        print_hand(w, &label, opponent, Some(standing))?;
    }

    queue!(w, style::Print(format!("{:<12}", "The board")))?;
    print_cards(w, round.board())?;
    writeln!(w)?;

    writeln!(w, "You are {}", round.standing())?;

    Ok(())
}

fn print_hand<W: Write>(
    w: &mut W,
    label: &str,
    hand: &Hand,
    standing: Option<Standing>,
) -> Result<()> {
    queue!(w, style::Print(format!("{label:<12}")))?;
    print_cards(w, hand.hole())?;

    if let Some(made) = hand.made() {
        queue!(w, style::Print(format!("  {:<16}", made.rank().to_string())))?;
    }

    // Marks opponents that beat or tie the player.
    match standing {
        Some(Standing::Behind) => queue!(w, style::PrintStyledContent("beats you".red()))?,
        Some(Standing::Tied) => queue!(w, style::PrintStyledContent("ties".yellow()))?,
        _ => {}
    }

    writeln!(w)?;
    Ok(())
}

fn print_cards<W: Write>(w: &mut W, cards: &[Card]) -> Result<()> {
    for card in cards {
        let text = format!("{:>3} ", card.to_string());
        match card.suit() {
            Suit::Hearts | Suit::Diamonds => queue!(w, style::PrintStyledContent(text.red()))?,
            Suit::Spades | Suit::Clubs => queue!(w, style::Print(text))?,
        }
    }

    Ok(())
}

fn print_outs<W: Write>(w: &mut W, round: &Round) -> Result<()> {
    queue!(
        w,
        style::PrintStyledContent(format!("{} outs ", round.outs().len()).dark_green())
    )?;
    print_cards(w, round.outs())?;
    writeln!(w, " out of {} cards", round.draws())?;
    Ok(())
}

fn print_points<W: Write>(w: &mut W, round: &Round) -> Result<()> {
    let Some(guess) = round.guess() else {
        return Ok(());
    };

    let text = match guess.distance {
        0 => "Exact!".to_string(),
        d if d.abs() <= 2 => format!("Close, off by {}", d.abs()),
        _ if guess.value == GUESS_PASS => "Passed".to_string(),
        d => format!("Missed by {}", d.abs()),
    };

    writeln!(w, "{text}, {} points", round.points().unwrap_or_default())?;
    Ok(())
}

fn read_guess<W, I>(w: &mut W, lines: &mut I) -> Result<Option<i32>>
where
    W: Write,
    I: Iterator<Item = io::Result<String>>,
{
    loop {
        queue!(w, style::Print("How many outs? (p to pass) "))?;
        w.flush()?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };

        match parse_guess(&line?) {
            Some(guess) => return Ok(Some(guess)),
            None => writeln!(w, "Invalid guess")?,
        }
    }
}

fn parse_guess(s: &str) -> Option<i32> {
    match s.trim() {
        "p" | "pass" => Some(GUESS_PASS),
        s => s.parse::<u8>().ok().map(i32::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outs_core::OutsPolicy;

    #[test]
    fn guesses() {
        assert_eq!(parse_guess("12\n"), Some(12));
        assert_eq!(parse_guess(" 0 "), Some(0));
        assert_eq!(parse_guess("p"), Some(GUESS_PASS));
        assert_eq!(parse_guess("pass"), Some(GUESS_PASS));
        assert_eq!(parse_guess("-1"), None);
        assert_eq!(parse_guess("many"), None);
    }

    #[test]
    fn read_guess_retries() {
        let mut out = Vec::new();
        let mut lines = ["x", "", "7"].into_iter().map(|s| Ok(s.to_string()));
        assert_eq!(read_guess(&mut out, &mut lines).unwrap(), Some(7));
        assert_eq!(read_guess(&mut out, &mut lines).unwrap(), None);

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("Invalid guess").count(), 2);
    }

    #[test]
    fn render_round() {
        let card = |s: &str| s.parse::<Card>().unwrap();
        let round = Round::from_cards(
            1,
            OutsPolicy::WinOrTie,
            [card("Kh"), card("2c")],
            &[[card("9c"), card("2s")]],
            &[card("Ac"), card("Ah"), card("5c"), card("2d")],
        )
        .unwrap();

        let mut out = Vec::new();
        print_round(&mut out, &round).unwrap();
        print_outs(&mut out, &round).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Two Pair"));
        assert!(out.contains("You are ahead"));
        assert!(out.contains("3 outs"));
        assert!(out.contains("out of 44 cards"));
    }
}
