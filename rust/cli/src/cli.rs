//! Command-line definitions parsed with clap derive.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "holdem")]
#[command(about = "Texas Hold'em hand simulator: scoring, equity and interactive play")]
#[command(version)]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score 5 to 7 cards and show the best five-card hand
    Score {
        /// Cards such as AS KD TH 9C 2S
        #[arg(required = true)]
        cards: Vec<String>,
    },
    /// Score several hole-card pairs against one board
    Compare {
        /// Five board cards
        #[arg(long, num_args = 5, required = true)]
        board: Vec<String>,
        /// Hole cards, one pair per argument, e.g. "AS 2C" or AS2C
        #[arg(required = true)]
        holes: Vec<String>,
    },
    /// Estimate the win rate of a starting hand by Monte Carlo trials
    Equity {
        /// The two starting cards
        #[arg(long, num_args = 2, required = true)]
        hand: Vec<String>,
        /// Seats at the table, including this hand
        #[arg(long)]
        players: Option<usize>,
        /// Number of simulated hands
        #[arg(long)]
        trials: Option<u32>,
        /// RNG seed for a reproducible estimate
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play hands at the console against rule-based opponents
    Play {
        /// Seats at the table, including you
        #[arg(long)]
        players: Option<usize>,
        /// Number of hands to play
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        hands: u32,
        /// RNG seed for reproducible deals
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
