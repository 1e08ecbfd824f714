//! # holdem CLI Library
//!
//! Command-line front end for the `holdem-engine` crate: hand scoring,
//! head-to-head comparison on a fixed board, Monte Carlo equity and console
//! play against rule-based opponents.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Available Subcommands
//!
//! - `score`: Best five-card hand out of 5 to 7 cards
//! - `compare`: Several hole-card pairs against one board
//! - `equity`: Win rate of a starting hand by simulation
//! - `play`: Interactive hands at the console
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{Commands, HoldemCli};
use commands::{
    handle_cfg_command, handle_compare_command, handle_equity_command, handle_play_command,
    handle_score_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["score", "compare", "equity", "play", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses `args` and dispatches to the subcommand handler. Normal output goes
/// to `out`, diagnostics to `err`. `play` reads the human seat's actions from
/// the process stdin.
///
/// # Returns
///
/// Exit code: [`exit_code::SUCCESS`] or [`exit_code::ERROR`]
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = holdem_cli::run(
///     ["holdem", "score", "AS", "KS", "QS", "JS", "TS"],
///     &mut out,
///     &mut err,
/// );
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Royal Flush"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Score { cards } => handle_score_command(&cards, out),
        Commands::Compare { board, holes } => handle_compare_command(&board, &holes, out),
        Commands::Equity {
            hand,
            players,
            trials,
            seed,
        } => handle_equity_command(&hand, players, trials, seed, out),
        Commands::Play {
            players,
            hands,
            seed,
        } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(players, hands, seed, out, err, &mut stdin_lock)
        }
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }
    let _ = writeln!(err, "{}", e);
    let _ = writeln!(err, "Usage: holdem <command> [options]\n");
    let _ = writeln!(err, "Commands:");
    for c in COMMANDS {
        let _ = writeln!(err, "  {}", c);
    }
    let _ = writeln!(err, "\nFor full help, run: holdem --help");
    exit_code::ERROR
}
