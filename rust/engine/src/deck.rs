use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// A depletable 52-card source. Drawn cards leave the deck, so nothing dealt
/// during one hand can be drawn twice.
///
/// The random source is owned by the deck and injected at construction, which
/// keeps deals reproducible when a seed is supplied.
#[derive(Debug, Clone)]
pub struct Deck {
    // top of the deck is the end of the vec
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Full, unshuffled deck driven by a seeded ChaCha stream.
    pub fn new_with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha20Rng::seed_from_u64(seed))
    }

    pub fn from_rng(rng: ChaCha20Rng) -> Self {
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            rng,
        }
    }

    /// Full deck, already shuffled, seeded from the thread-local entropy source.
    pub fn new_full_shuffled() -> Self {
        let mut deck = Self::from_rng(ChaCha20Rng::from_rng(&mut rand::rng()));
        deck.shuffle();
        deck
    }

    /// Rebuilds all 52 cards and applies a uniform random permutation.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    /// Removes one named card from wherever it sits in the deck.
    pub fn draw_specific(&mut self, card: Card) -> Result<Card, GameError> {
        let idx = self
            .cards
            .iter()
            .position(|&c| c == card)
            .ok_or(GameError::CardNotFound { card })?;
        Ok(self.cards.remove(idx))
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
