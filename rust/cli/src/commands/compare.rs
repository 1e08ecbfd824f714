//! `compare`: several hole-card pairs against one board.

use crate::error::CliError;
use crate::formatters::{format_board, format_score};
use crate::io_utils::parse_cards;
use holdem_engine::cards::Card;
use holdem_engine::hand::{Hand, PokerScore};
use std::collections::HashSet;
use std::io::Write;

/// Scores every hole pair with the board and prints each score, then the
/// winner or winners. Equal scores split.
pub fn handle_compare_command(
    board: &[String],
    holes: &[String],
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let board = parse_cards(board)?;
    let holes = holes
        .iter()
        .map(|h| parse_hole(h))
        .collect::<Result<Vec<_>, _>>()?;
    if holes.len() < 2 {
        return Err(CliError::InvalidInput(
            "compare needs at least two hole-card pairs".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for card in board.iter().chain(holes.iter().flatten()) {
        if !seen.insert(*card) {
            return Err(CliError::InvalidInput(format!("card {} used twice", card)));
        }
    }

    writeln!(out, "Board: {}", format_board(&board))?;
    let mut scores: Vec<PokerScore> = Vec::with_capacity(holes.len());
    for (i, hole) in holes.iter().enumerate() {
        let mut cards = hole.to_vec();
        cards.extend_from_slice(&board);
        let score = Hand::new(cards).score()?;
        writeln!(
            out,
            "Hand {}: {} -> {}",
            i + 1,
            format_board(hole),
            format_score(&score)
        )?;
        scores.push(score);
    }

    let best = scores.iter().max().copied();
    let winners: Vec<String> = scores
        .iter()
        .enumerate()
        .filter(|(_, s)| Some(**s) == best)
        .map(|(i, _)| format!("Hand {}", i + 1))
        .collect();
    if winners.len() == 1 {
        writeln!(out, "Winner: {}", winners[0])?;
    } else {
        writeln!(out, "Split: {}", winners.join(", "))?;
    }
    Ok(())
}

/// `"AS 2C"`, `"AS,2C"` or `"AS2C"`.
fn parse_hole(text: &str) -> Result<[Card; 2], CliError> {
    let mut parts: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();
    if parts.len() == 1 && parts[0].len() == 4 && parts[0].is_ascii() {
        let joined = parts[0];
        parts = vec![&joined[..2], &joined[2..]];
    }
    match parse_cards(&parts)?.as_slice() {
        [a, b] => Ok([*a, *b]),
        _ => Err(CliError::InvalidInput(format!(
            "hole cards must be exactly two cards: {:?}",
            text
        ))),
    }
}
