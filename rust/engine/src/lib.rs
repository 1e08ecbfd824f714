//! # holdem-engine: Texas Hold'em Hand Simulator Core
//!
//! Ranks 5-to-7 card combinations, drives a multi-player hand through its
//! betting rounds and board reveals to a showdown and payout, and estimates a
//! starting hand's win rate by repeated random trials.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and the two-character text form
//! - [`deck`] - Depletable deck with an injected ChaCha RNG
//! - [`hand`] - Hand evaluation: 33 strength tiers, tie-breakers, memoised [`hand::Hand`]
//! - [`player`] - Player state, actions, and stack management
//! - [`policy`] - Decision providers (interactive and rule-based)
//! - [`rules`] - Legal actions and betting validation
//! - [`pot`] - The shared pot and its even split
//! - [`game`] - Round phases and the read-only table view
//! - [`engine`] - The round engine ([`engine::Game`]): deal → flop → turn → river → showdown → payout
//! - [`equity`] - Monte Carlo equity estimation
//! - [`history`] - Per-street action history of the current hand
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::hand::Hand;
//!
//! let board = ["9D", "4H", "7S", "8C", "TD"];
//! let ace = Hand::from_strings(&[&["AS", "2C"][..], &board[..]].concat()).unwrap();
//! let king = Hand::from_strings(&[&["KS", "QC"][..], &board[..]].concat()).unwrap();
//! assert!(ace > king);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All deals are reproducible using seeded RNG:
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//!
//! let mut deck1 = Deck::new_with_seed(42);
//! let mut deck2 = Deck::new_with_seed(42);
//! deck1.shuffle();
//! deck2.shuffle();
//! assert_eq!(deck1.draw(), deck2.draw());
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod equity;
pub mod errors;
pub mod game;
pub mod hand;
pub mod history;
pub mod player;
pub mod policy;
pub mod pot;
pub mod rules;
