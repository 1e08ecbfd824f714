use holdem_engine::cards::{Card, Rank as R};
use holdem_engine::hand::{score, Category, Hand, Tier};

fn seven(hole: [&str; 2], board: [&str; 5]) -> Vec<Card> {
    let mut strs: Vec<&str> = hole.to_vec();
    strs.extend_from_slice(&board);
    Card::from_strings(&strs).expect("valid cards")
}

#[test]
fn ace_high_beats_king_high() {
    let board = ["9D", "4H", "7S", "8C", "TD"];
    let a = Hand::new(seven(["AS", "2C"], board));
    let b = Hand::new(seven(["KS", "QC"], board));
    assert!(a > b);
    assert_eq!(a.score().unwrap().tier, Tier::HighCard);
    assert_eq!(a.score().unwrap().tie_breaker, 14);
    assert_eq!(b.score().unwrap().tie_breaker, 13);
}

#[test]
fn pair_of_twos_uses_the_ace_kicker() {
    let s = score(&seven(["2S", "2D"], ["AD", "4H", "7S", "8C", "5D"])).unwrap();
    assert_eq!(s.tier, Tier::Pair(R::Two));
    assert_eq!(s.tier.value(), 2);
    assert_eq!(s.tie_breaker, 14);
    assert_eq!(s.to_string(), "Pair Of Twos (14)");
}

#[test]
fn two_pair_is_labelled_by_the_top_pair() {
    let s = score(&seven(["7C", "8D"], ["AD", "4H", "7S", "8C", "5D"])).unwrap();
    assert_eq!(s.tier, Tier::TwoPair(R::Eight));
    assert_eq!(s.tier.value(), 20);
    assert_eq!(s.tie_breaker, 14);
}

#[test]
fn four_of_a_kind_beats_flush() {
    let board = ["AC", "AD", "9H", "4H", "2H"];
    let quads = score(&seven(["AH", "AS"], board)).unwrap();
    let flush = score(&seven(["KH", "QH"], board)).unwrap();
    assert_eq!(quads.category(), Category::FourOfAKind);
    assert_eq!(flush.category(), Category::Flush);
    assert!(quads > flush);
}

#[test]
fn wheel_is_a_straight() {
    let s = score(&seven(["AS", "2D"], ["3C", "4H", "5S", "KD", "9C"])).unwrap();
    assert_eq!(s.tier, Tier::Straight);
    assert_eq!(s.tie_breaker, 5);
    let six_high = score(&seven(["6S", "2D"], ["3C", "4H", "5S", "KD", "9C"])).unwrap();
    assert!(six_high > s);
}

#[test]
fn suited_runs_are_never_reported_as_flush_or_straight() {
    let royal = score(&seven(["AH", "KH"], ["QH", "JH", "TH", "2C", "3D"])).unwrap();
    assert_eq!(royal.tier, Tier::RoyalFlush);
    assert_eq!(royal.tier.value(), 33);

    let sf = score(&seven(["9S", "8S"], ["7S", "6S", "5S", "AS", "KD"])).unwrap();
    assert_eq!(sf.tier, Tier::StraightFlush);
    assert_eq!(sf.tie_breaker, 9);
}

#[test]
fn best_subset_is_picked_from_seven_cards() {
    // board pair plus a set in hand: full house, not trips
    let s = score(&seven(["QS", "QD"], ["QC", "4H", "4S", "8C", "TD"])).unwrap();
    assert_eq!(s.tier, Tier::FullHouse);
    assert_eq!(s.tie_breaker, 12);
    assert_eq!(s.cards.len(), 5);
}

#[test]
fn identical_boards_tie() {
    let board = ["AH", "KH", "QH", "JH", "TH"];
    let a = score(&seven(["2C", "3D"], board)).unwrap();
    let b = score(&seven(["4C", "5D"], board)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn fewer_than_five_cards_cannot_be_scored() {
    let h = Hand::from_strings(&["AS", "KS", "QS", "JS"]).unwrap();
    assert!(h.score().is_err());
    assert!(!h.is_scored());
}
