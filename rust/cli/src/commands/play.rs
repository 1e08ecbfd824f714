//! # Play Command
//!
//! Console Hold'em against rule-based opponents.
//!
//! Seat 0 ("You") answers at the prompt with `fold`, `check`, `call` or
//! `raise` (any case); anything else is rejected and asked again. `q`, `quit`
//! or end of input folds the current hand and ends the session once that
//! hand is paid out. The other seats call whenever they can afford to.
//!
//! Every hand goes through each round transition: deal, preflop betting,
//! flop, flop betting, turn, turn betting, river, river betting, showdown
//! and payout. Standings are printed after each hand.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_action, format_board, format_score};
use crate::io_utils::{is_quit, read_stdin_line};
use crate::ui;
use holdem_engine::engine::{Game, MAX_SEATS};
use holdem_engine::game::Phase;
use holdem_engine::player::Player;
use holdem_engine::policy::{ActionSource, DecisionPolicy, DecisionView};
use std::io::{BufRead, Write};

const HUMAN: usize = 0;

/// Handle the play command.
///
/// `players`, `seed`, the starting stack and the big blind fall back to the
/// resolved configuration; without any seed one is drawn at random and
/// printed so the session can be replayed.
///
/// # Errors
///
/// `CliError::InvalidInput` for a seat count outside `2..=23` or zero hands,
/// `CliError::Engine` when the seats hold more chips than a pot can track.
pub fn handle_play_command(
    players: Option<usize>,
    hands: u32,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let seats = players.unwrap_or(cfg.players);
    if !(2..=MAX_SEATS).contains(&seats) {
        return Err(CliError::InvalidInput(format!(
            "players must be between 2 and {}",
            MAX_SEATS
        )));
    }
    if hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut table = vec![Player::new(
        "You",
        cfg.starting_stack,
        DecisionPolicy::Interactive,
    )];
    for i in 1..seats {
        table.push(Player::new(
            format!("Bot {}", i),
            cfg.starting_stack,
            DecisionPolicy::RuleBased,
        ));
    }
    let mut game = Game::with_seed(table, cfg.big_blind, seed)?;

    writeln!(
        out,
        "play: players={} hands={} seed={} big_blind={}",
        seats, hands, seed, cfg.big_blind
    )?;

    let mut console = Console {
        input: stdin,
        out,
        err,
        quit: false,
    };
    let mut played = 0u32;
    for i in 1..=hands {
        writeln!(console.out, "Hand {}", i)?;
        play_one_hand(&mut game, &mut console)?;
        played += 1;

        let standings: Vec<String> = game
            .standings()
            .iter()
            .map(|(name, stack)| format!("{} {}", name, stack))
            .collect();
        writeln!(console.out, "Standings: {}", standings.join(" | "))?;

        if console.quit {
            break;
        }
        if game.players()[HUMAN].stack() == 0 {
            writeln!(console.out, "You are out of chips.")?;
            break;
        }
        if game.players().iter().filter(|p| p.stack() > 0).count() < 2 {
            break;
        }
        if i < hands {
            game.start_next_hand()?;
        }
    }

    writeln!(console.out, "Hands played: {} (completed)", played)?;
    Ok(())
}

/// Drives one hand from `Init` to `PaidOut`, narrating each transition.
fn play_one_hand(game: &mut Game, console: &mut Console<'_>) -> Result<(), CliError> {
    let mut shown = 0;
    while game.phase() != Phase::Showdown {
        let phase = game.step(console)?;
        for a in &game.actions()[shown..] {
            writeln!(console.out, "  {}: {}", a.player, format_action(a.action, a.amount))?;
        }
        shown = game.actions().len();
        match phase {
            Phase::Dealt => writeln!(
                console.out,
                "Your cards: {}",
                format_board(game.players()[HUMAN].hole_cards())
            )?,
            Phase::FlopRevealed | Phase::TurnRevealed | Phase::RiverRevealed => writeln!(
                console.out,
                "{}: {}  Pot: {}",
                phase,
                format_board(game.board()),
                game.pot()
            )?,
            _ => {}
        }
    }

    for entry in game.showdown_results() {
        let hole = game.players()[entry.seat].hole_cards();
        writeln!(
            console.out,
            "  {} {}: {}",
            entry.name,
            format_board(hole),
            format_score(&entry.score)
        )?;
    }
    let pot = game.pot();
    let payout = game.distribute_winnings()?;
    if payout.winners.is_empty() {
        writeln!(
            console.out,
            "Everyone folded; the pot of {} carries over.",
            pot
        )?;
    } else {
        writeln!(
            console.out,
            "Winner: {} ({} each)",
            payout.winners.join(", "),
            payout.share
        )?;
        if payout.burned > 0 {
            writeln!(console.out, "Burned: {}", payout.burned)?;
        }
    }
    Ok(())
}

/// Stdin-backed action source for the human seat.
struct Console<'a> {
    input: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
    quit: bool,
}

impl ActionSource for Console<'_> {
    fn ask(&mut self, view: &DecisionView<'_>) -> Option<String> {
        if self.quit {
            return None;
        }
        let legal: Vec<String> = view
            .legal
            .iter()
            .map(|a| a.to_string().to_ascii_lowercase())
            .collect();
        let _ = writeln!(
            self.out,
            "{}: cards {} board {} pot {} stack {}",
            view.player,
            format_board(view.hole_cards),
            format_board(view.board),
            view.pot,
            view.stack
        );
        let _ = write!(self.out, "Enter action ({}/q): ", legal.join("/"));
        let _ = self.out.flush();

        match read_stdin_line(self.input) {
            Some(line) if !is_quit(&line) => Some(line),
            _ => {
                let _ = writeln!(self.out);
                self.quit = true;
                None
            }
        }
    }

    fn reject(&mut self, _input: &str, reason: &str) {
        let _ = ui::write_error(self.err, reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(
        players: usize,
        hands: u32,
        seed: u64,
        input: &str,
    ) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let res = handle_play_command(
            Some(players),
            hands,
            Some(seed),
            &mut out,
            &mut err,
            &mut stdin,
        );
        (
            res,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn quit_ends_the_session_after_the_current_hand() {
        let (res, out, _) = play(3, 5, 42, "q\n");
        assert!(res.is_ok());
        assert!(out.contains("play: players=3 hands=5 seed=42"));
        assert!(out.contains("Hand 1"));
        assert!(!out.contains("Hand 2"));
        assert!(out.contains("You: fold"));
        assert!(out.contains("Hands played: 1"));
    }

    #[test]
    fn end_of_input_counts_as_quit() {
        let (res, out, _) = play(2, 3, 1, "");
        assert!(res.is_ok());
        assert!(out.contains("Hands played: 1"));
    }

    #[test]
    fn calling_every_street_reaches_the_showdown() {
        let (res, out, err) = play(2, 1, 7, "call\nCALL\ncall\ncall\n");
        assert!(res.is_ok(), "{err}");
        for street in ["FlopRevealed", "TurnRevealed", "RiverRevealed"] {
            assert!(out.contains(street), "missing {street}");
        }
        assert!(out.contains("You: call 10"));
        assert!(out.contains("Bot 1: call 10"));
        assert!(out.contains("Winner:"));
        assert!(out.contains("Standings: You"));
        assert!(err.is_empty());
    }

    #[test]
    fn unrecognised_input_is_asked_again() {
        let (res, out, err) = play(2, 1, 3, "dance\ncall\nq\n");
        assert!(res.is_ok());
        assert!(err.contains("Unrecognized action"), "{err}");
        assert!(out.contains("You: call 10"));
    }

    #[test]
    fn check_is_accepted_and_moves_no_chips() {
        let (res, out, _) = play(2, 1, 3, "check\nq\n");
        assert!(res.is_ok());
        assert!(out.contains("You: check"));
    }

    #[test]
    fn seat_count_is_validated() {
        let (res, _, _) = play(1, 1, 3, "");
        match res {
            Err(CliError::InvalidInput(msg)) => {
                assert!(msg.contains("players must be between 2 and 23"))
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
        let (res, _, _) = play(MAX_SEATS + 1, 1, 3, "");
        assert!(matches!(res, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn same_seed_same_session() {
        let (_, a, _) = play(4, 2, 99, &"call\n".repeat(8));
        let (_, b, _) = play(4, 2, 99, &"call\n".repeat(8));
        assert_eq!(a, b);
    }
}
