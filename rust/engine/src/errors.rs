use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck is empty")]
    EmptyDeck,
    #[error("Card {card} is not in the deck")]
    CardNotFound { card: Card },
    #[error("Insufficient chips: requested {requested}, available {available}")]
    InsufficientChips { requested: u32, available: u32 },
    #[error("Unrecognized action: {0:?}")]
    UnrecognizedAction(String),
    #[error("Player {0} already holds two hole cards")]
    HoleCardsFull(String),
    #[error("Invalid card string: {0:?}")]
    InvalidCardString(String),
    #[error("At least 5 cards are required to score a hand, got {got}")]
    InsufficientCards { got: usize },
    #[error("Cannot {action} while the hand is in phase {from}")]
    InvalidTransition { from: String, action: &'static str },
    #[error("Invalid seat count {count} (allowed: 1..={max})")]
    InvalidSeatCount { count: usize, max: usize },
    #[error("Duplicate player name: {0}")]
    DuplicatePlayer(String),
    #[error("Seat {0} does not exist")]
    SeatOutOfRange(usize),
    #[error("Table holds {total} chips, more than the {max} a hand can track")]
    ChipOverflow { total: u64, max: u32 },
    #[error("Trial count must be >= 1")]
    InvalidTrialCount,
}
