//! Card, score and action formatters for terminal display.
//!
//! Cards print in their two-character text form (`AS`, `TD`), the same form
//! the commands accept as input.
//!
//! ## Example
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_cli::formatters::format_board;
//!
//! let board = vec![Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Ten, Suit::Diamonds)];
//! assert_eq!(format_board(&board), "[AS TD]");
//! ```

use holdem_engine::cards::Card;
use holdem_engine::hand::PokerScore;
use holdem_engine::player::PlayerAction;

pub fn format_board(cards: &[Card]) -> String {
    let formatted_cards: Vec<String> = cards.iter().map(Card::to_string).collect();
    format!("[{}]", formatted_cards.join(" "))
}

/// `"Pair Of Twos (14) [2S 2D AD 8C 7S]"`
pub fn format_score(score: &PokerScore) -> String {
    format!("{} {}", score, format_board(&score.cards))
}

pub fn format_action(action: PlayerAction, amount: u32) -> String {
    match action {
        PlayerAction::Fold => "fold".to_string(),
        PlayerAction::Check => "check".to_string(),
        PlayerAction::Call => format!("call {}", amount),
        PlayerAction::Raise => format!("raise {}", amount),
    }
}

/// Win rate as a percentage with two decimals.
pub fn format_rate(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_board_empty() {
        assert_eq!(format_board(&[]), "[]");
    }

    #[test]
    fn test_format_score_lists_the_five_cards() {
        let cards = Card::from_strings(&["2S", "2D", "AD", "8C", "7S"]).unwrap();
        let score = holdem_engine::hand::score(&cards).unwrap();
        assert_eq!(format_score(&score), "Pair Of Twos (14) [2S 2D AD 8C 7S]");
    }

    #[test]
    fn test_format_action() {
        assert_eq!(format_action(PlayerAction::Fold, 0), "fold");
        assert_eq!(format_action(PlayerAction::Call, 10), "call 10");
        assert_eq!(format_action(PlayerAction::Raise, 20), "raise 20");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(0.5), "50.00%");
        assert_eq!(format_rate(0.63456), "63.46%");
    }
}
