//! `score`: best five-card hand out of 5 to 7 cards.

use crate::error::CliError;
use crate::formatters::format_score;
use crate::io_utils::parse_cards;
use holdem_engine::hand::Hand;
use std::io::Write;

/// Parses `cards`, scores them and prints the tier, tie-breaker, 1..=33
/// strength value and the five contributing cards.
pub fn handle_score_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(CliError::InvalidInput(format!(
            "score needs 5 to 7 cards, got {}",
            cards.len()
        )));
    }
    let parsed = parse_cards(cards)?;
    let mut unique = parsed.clone();
    unique.sort();
    unique.dedup();
    if unique.len() != parsed.len() {
        return Err(CliError::InvalidInput("duplicate card".to_string()));
    }

    let score = Hand::new(parsed).score()?;
    writeln!(out, "Hand: {}", format_score(&score))?;
    writeln!(out, "Strength: {}/33", score.tier.value())?;
    Ok(())
}
