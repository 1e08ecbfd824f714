use std::collections::HashSet;

use holdem_engine::cards::Card;
use holdem_engine::deck::Deck;
use holdem_engine::errors::GameError;

fn draw_all(deck: &mut Deck) -> Vec<Card> {
    let mut out = Vec::with_capacity(52);
    while let Ok(c) = deck.draw() {
        out.push(c);
    }
    out
}

#[test]
fn same_seed_same_order() {
    let mut a = Deck::new_with_seed(7);
    let mut b = Deck::new_with_seed(7);
    a.shuffle();
    b.shuffle();
    assert_eq!(draw_all(&mut a), draw_all(&mut b));
}

#[test]
fn different_seeds_differ() {
    let mut a = Deck::new_with_seed(1);
    let mut b = Deck::new_with_seed(2);
    a.shuffle();
    b.shuffle();
    assert_ne!(draw_all(&mut a), draw_all(&mut b));
}

#[test]
fn shuffled_deck_holds_52_distinct_cards() {
    let mut deck = Deck::new_full_shuffled();
    assert_eq!(deck.remaining(), 52);
    let cards = draw_all(&mut deck);
    let unique: HashSet<_> = cards.iter().copied().collect();
    assert_eq!(cards.len(), 52);
    assert_eq!(unique.len(), 52);
    assert_eq!(deck.draw(), Err(GameError::EmptyDeck));
}

#[test]
fn shuffle_restores_drawn_cards() {
    let mut deck = Deck::new_with_seed(3);
    deck.shuffle();
    for _ in 0..10 {
        deck.draw().unwrap();
    }
    assert_eq!(deck.remaining(), 42);
    deck.shuffle();
    assert_eq!(deck.remaining(), 52);
}

#[test]
fn specific_card_can_only_be_drawn_once() {
    let mut deck = Deck::new_with_seed(9);
    let ace: Card = "AS".parse().unwrap();
    assert_eq!(deck.draw_specific(ace), Ok(ace));
    assert!(!deck.contains(ace));
    assert_eq!(
        deck.draw_specific(ace),
        Err(GameError::CardNotFound { card: ace })
    );
}
