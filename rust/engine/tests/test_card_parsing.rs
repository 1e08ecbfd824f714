use holdem_engine::cards::{full_deck, Card, Rank, Suit};
use holdem_engine::errors::GameError;

#[test]
fn every_card_survives_display_and_parse() {
    for card in full_deck() {
        let text = card.to_string();
        assert_eq!(text.len(), 2);
        assert_eq!(text.parse::<Card>(), Ok(card));
    }
}

#[test]
fn numeric_ten_is_accepted() {
    let ten = Card::new(Rank::Ten, Suit::Hearts);
    assert_eq!("TH".parse::<Card>(), Ok(ten));
    assert_eq!("10H".parse::<Card>(), Ok(ten));
}

#[test]
fn lowercase_letters_are_not_card_text() {
    for bad in ["th", "As", "kD", "10h"] {
        assert_eq!(
            bad.parse::<Card>(),
            Err(GameError::InvalidCardString(bad.to_string()))
        );
    }
}

#[test]
fn malformed_cards_are_rejected() {
    for bad in ["", "A", "1S", "AX", "ASS", "11H"] {
        assert!(
            matches!(bad.parse::<Card>(), Err(GameError::InvalidCardString(_))),
            "{bad:?} should not parse"
        );
    }
}

#[test]
fn from_strings_stops_at_the_first_bad_card() {
    let err = Card::from_strings(&["AS", "ZZ", "KD"]).unwrap_err();
    assert_eq!(err, GameError::InvalidCardString("ZZ".to_string()));
}
