use std::cell::OnceCell;
use std::cmp::Ordering;
use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::GameError;

/// The ten fundamental poker hand rankings, weakest first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

/// A category refined by pair rank: 33 strength levels in total.
///
/// Variant order is strength order, so the derived `Ord` compares the
/// variant first and the pair rank second.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Tier {
    HighCard,
    /// One pair of the given rank.
    Pair(Rank),
    /// Two pair, identified by the higher of the two pairs.
    TwoPair(Rank),
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl Tier {
    pub fn category(self) -> Category {
        match self {
            Tier::HighCard => Category::HighCard,
            Tier::Pair(_) => Category::OnePair,
            Tier::TwoPair(_) => Category::TwoPair,
            Tier::ThreeOfAKind => Category::ThreeOfAKind,
            Tier::Straight => Category::Straight,
            Tier::Flush => Category::Flush,
            Tier::FullHouse => Category::FullHouse,
            Tier::FourOfAKind => Category::FourOfAKind,
            Tier::StraightFlush => Category::StraightFlush,
            Tier::RoyalFlush => Category::RoyalFlush,
        }
    }

    /// Position on the 1..=33 strength scale (high card = 1, royal flush = 33).
    pub fn value(self) -> u8 {
        match self {
            Tier::HighCard => 1,
            Tier::Pair(r) => r.value(),
            // the higher pair of a two pair is at least Three
            Tier::TwoPair(r) => r.value() + 12,
            Tier::ThreeOfAKind => 27,
            Tier::Straight => 28,
            Tier::Flush => 29,
            Tier::FullHouse => 30,
            Tier::FourOfAKind => 31,
            Tier::StraightFlush => 32,
            Tier::RoyalFlush => 33,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::HighCard => write!(f, "High Card"),
            Tier::Pair(r) => write!(f, "Pair Of {}", r.plural()),
            Tier::TwoPair(r) => write!(f, "Two Pair, {} High", r.plural()),
            Tier::ThreeOfAKind => write!(f, "Three Of A Kind"),
            Tier::Straight => write!(f, "Straight"),
            Tier::Flush => write!(f, "Flush"),
            Tier::FullHouse => write!(f, "Full House"),
            Tier::FourOfAKind => write!(f, "Four Of A Kind"),
            Tier::StraightFlush => write!(f, "Straight Flush"),
            Tier::RoyalFlush => write!(f, "Royal Flush"),
        }
    }
}

/// Result of scoring a hand: the strength tier, a tie-breaker within that
/// tier, and the five cards that produced it.
///
/// Ordering and equality look at `(tier, tie_breaker)` only; two different
/// five-card subsets with the same pair are equal scores.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct PokerScore {
    pub tier: Tier,
    pub tie_breaker: u8,
    pub cards: [Card; 5],
}

impl PokerScore {
    pub fn category(&self) -> Category {
        self.tier.category()
    }
}

impl PartialEq for PokerScore {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PokerScore {}

impl PartialOrd for PokerScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PokerScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.tier
            .cmp(&other.tier)
            .then(self.tie_breaker.cmp(&other.tie_breaker))
    }
}

impl fmt::Display for PokerScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.tier, self.tie_breaker)
    }
}

/// Scores the best five-card hand among `cards`.
///
/// Every five-card subset is classified and the greatest
/// `(tier, tie_breaker)` is kept. With 7 cards that is 21 subsets.
///
/// # Errors
///
/// [`GameError::InsufficientCards`] when fewer than five cards are given.
///
/// # Examples
///
/// ```
/// use holdem_engine::cards::Card;
/// use holdem_engine::hand::{score, Tier};
/// use holdem_engine::cards::Rank;
///
/// let cards = Card::from_strings(&["2S", "2D", "AD", "4H", "7S", "8C", "5D"]).unwrap();
/// let s = score(&cards).unwrap();
/// assert_eq!(s.tier, Tier::Pair(Rank::Two));
/// assert_eq!(s.tie_breaker, 14);
/// ```
pub fn score(cards: &[Card]) -> Result<PokerScore, GameError> {
    five_card_subsets(cards)
        .map(classify)
        .max()
        .ok_or(GameError::InsufficientCards { got: cards.len() })
}

/// Classifies exactly five cards.
pub fn classify(cards: [Card; 5]) -> PokerScore {
    let profile = Profile::new(&cards);
    // high_card always matches, so the fallback is never reached
    let (tier, tie_breaker) = CLASSIFIERS
        .iter()
        .find_map(|check| check(&profile))
        .unwrap_or((Tier::HighCard, profile.high));
    PokerScore {
        tier,
        tie_breaker,
        cards,
    }
}

type Classifier = fn(&Profile) -> Option<(Tier, u8)>;

// Strongest first: a straight flush also satisfies flush and straight, so the
// first match wins.
const CLASSIFIERS: [Classifier; 10] = [
    royal_flush,
    straight_flush,
    four_of_a_kind,
    full_house,
    flush,
    straight,
    three_of_a_kind,
    two_pair,
    one_pair,
    high_card,
];

struct Profile {
    ranks: [u8; 5],
    // (count, rank) sorted by count then rank, both descending
    groups: Vec<(u8, Rank)>,
    high: u8,
    flush: bool,
    straight_high: Option<u8>,
}

impl Profile {
    fn new(cards: &[Card; 5]) -> Self {
        let mut ranks = cards.map(|c| c.rank.value());
        ranks.sort_unstable_by(|a, b| b.cmp(a));

        let mut counts = [0u8; 15];
        for &r in &ranks {
            counts[r as usize] += 1;
        }
        let mut groups: Vec<(u8, Rank)> = crate::cards::all_ranks()
            .into_iter()
            .filter(|r| counts[r.value() as usize] > 0)
            .map(|r| (counts[r.value() as usize], r))
            .collect();
        groups.sort_unstable_by(|a, b| b.cmp(a));

        let flush = cards.iter().all(|c| c.suit == cards[0].suit);
        let straight_high = if groups.len() < 5 {
            None
        } else if ranks[0] - ranks[4] == 4 {
            Some(ranks[0])
        } else if ranks == [14, 5, 4, 3, 2] {
            // the wheel plays the Ace low
            Some(5)
        } else {
            None
        };

        Self {
            ranks,
            groups,
            high: ranks[0],
            flush,
            straight_high,
        }
    }

    fn shape(&self) -> Vec<u8> {
        self.groups.iter().map(|&(count, _)| count).collect()
    }

    fn group_rank(&self, i: usize) -> Rank {
        self.groups[i].1
    }
}

fn royal_flush(p: &Profile) -> Option<(Tier, u8)> {
    (p.flush && p.straight_high == Some(14)).then_some((Tier::RoyalFlush, 14))
}

fn straight_flush(p: &Profile) -> Option<(Tier, u8)> {
    p.straight_high
        .filter(|_| p.flush)
        .map(|high| (Tier::StraightFlush, high))
}

fn four_of_a_kind(p: &Profile) -> Option<(Tier, u8)> {
    (p.shape()[0] == 4).then_some((Tier::FourOfAKind, p.high))
}

fn full_house(p: &Profile) -> Option<(Tier, u8)> {
    (p.shape() == [3, 2]).then_some((Tier::FullHouse, p.high))
}

fn flush(p: &Profile) -> Option<(Tier, u8)> {
    p.flush.then_some((Tier::Flush, p.high))
}

fn straight(p: &Profile) -> Option<(Tier, u8)> {
    p.straight_high.map(|high| (Tier::Straight, high))
}

fn three_of_a_kind(p: &Profile) -> Option<(Tier, u8)> {
    (p.shape()[0] == 3).then_some((Tier::ThreeOfAKind, p.high))
}

fn two_pair(p: &Profile) -> Option<(Tier, u8)> {
    (p.shape() == [2, 2, 1]).then(|| (Tier::TwoPair(p.group_rank(0)), p.high))
}

fn one_pair(p: &Profile) -> Option<(Tier, u8)> {
    if p.shape()[0] != 2 {
        return None;
    }
    let pair = p.group_rank(0).value();
    let kicker = p.ranks.iter().copied().find(|&r| r != pair).unwrap_or(0);
    Some((Tier::Pair(p.group_rank(0)), kicker))
}

fn high_card(p: &Profile) -> Option<(Tier, u8)> {
    Some((Tier::HighCard, p.high))
}

/// Every five-card subset of `cards`, in lexicographic index order.
fn five_card_subsets(cards: &[Card]) -> impl Iterator<Item = [Card; 5]> + '_ {
    cards
        .iter()
        .copied()
        .combinations(5)
        .filter_map(|subset| <[Card; 5]>::try_from(subset).ok())
}

/// An evaluatable bag of cards (hole cards plus the visible board).
///
/// The score is memoised and dropped on every `add_card`/`remove_card`, so a
/// comparison after a mutation always rescores. Comparison operators score
/// both sides; a hand with fewer than five cards is unordered against
/// anything.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
    score: OnceCell<PokerScore>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            score: OnceCell::new(),
        }
    }

    pub fn from_strings<S: AsRef<str>>(cards: &[S]) -> Result<Self, GameError> {
        Ok(Self::new(Card::from_strings(cards)?))
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn add_card(&mut self, card: Card) {
        self.score.take();
        self.cards.push(card);
    }

    /// Removes one copy of `card`; returns false when it was not held.
    pub fn remove_card(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|&c| c == card) {
            Some(i) => {
                self.score.take();
                self.cards.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn score(&self) -> Result<PokerScore, GameError> {
        if let Some(s) = self.score.get() {
            return Ok(*s);
        }
        let s = score(&self.cards)?;
        let _ = self.score.set(s);
        Ok(s)
    }

    pub fn is_scored(&self) -> bool {
        self.score.get().is_some()
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.score(), other.score()) {
            (Ok(a), Ok(b)) => Some(a.cmp(&b)),
            _ => None,
        }
    }
}
