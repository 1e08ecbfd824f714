//! `equity`: Monte Carlo win rate of a starting hand.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, format_rate};
use crate::io_utils::parse_cards;
use holdem_engine::equity::estimate_equity;
use std::io::Write;

/// Flags override the configured `players`, `trials` and `seed`.
pub fn handle_equity_command(
    hand: &[String],
    players: Option<usize>,
    trials: Option<u32>,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let players = players.unwrap_or(cfg.players);
    let trials = trials.unwrap_or(cfg.trials);
    let seed = seed.or(cfg.seed);

    let hand = match parse_cards(hand)?.as_slice() {
        [a, b] if a != b => [*a, *b],
        _ => {
            return Err(CliError::InvalidInput(
                "equity needs two distinct starting cards".to_string(),
            ));
        }
    };
    if trials == 0 {
        return Err(CliError::InvalidInput("trials must be >= 1".to_string()));
    }

    let est = estimate_equity(hand, players, trials, seed)?;
    writeln!(
        out,
        "equity: hand={} players={} trials={} seed={}",
        format_board(&est.hand),
        players,
        est.trials,
        est.seed
    )?;
    writeln!(out, "Win rate: {}", format_rate(est.hero()))?;
    for (seat, rate) in est.win_rates.iter().enumerate().skip(1) {
        writeln!(out, "  Seat {} (random): {}", seat, format_rate(*rate))?;
    }
    Ok(())
}
