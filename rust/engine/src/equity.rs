//! Monte Carlo win-rate estimation for a starting hand.
//!
//! Each trial seats `seat_count` rule-based players, gives seat 0 the
//! starting cards, deals the other seats, reveals the board with no betting
//! and runs the showdown. Every winner of a trial is credited
//! `1 / winners`. Trials are independent, so they run on the rayon pool; the
//! chunked summation keeps a seeded estimate bit-identical across runs and
//! thread counts.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::Card;
use crate::deck::Deck;
use crate::engine::{Game, MAX_SEATS};
use crate::errors::GameError;
use crate::player::{Player, STARTING_STACK};
use crate::policy::DecisionPolicy;

/// Trials summed sequentially inside one parallel task.
const CHUNK: u32 = 256;

/// Big blind of the throwaway trial games; no bets are placed.
const TRIAL_BIG_BLIND: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityEstimate {
    pub hand: [Card; 2],
    pub trials: u32,
    pub seed: u64,
    /// Share of trials won by each seat, seat 0 holding `hand`.
    pub win_rates: Vec<f64>,
}

impl EquityEstimate {
    /// Win rate of the starting hand.
    pub fn hero(&self) -> f64 {
        self.win_rates[0]
    }
}

/// Estimates how often `hand` wins against `seat_count - 1` random hands.
///
/// A `seed` makes the estimate reproducible; without one a seed is drawn
/// from the thread-local generator and reported back in the estimate.
///
/// # Errors
///
/// - [`GameError::InvalidTrialCount`] when `trials` is zero
/// - [`GameError::InvalidSeatCount`] when `seat_count` is outside `1..=MAX_SEATS`
/// - [`GameError::CardNotFound`] when the two starting cards are the same card
///
/// # Examples
///
/// ```
/// use holdem_engine::cards::Card;
/// use holdem_engine::equity::estimate_equity;
///
/// let aces = ["AS".parse::<Card>().unwrap(), "AH".parse::<Card>().unwrap()];
/// let est = estimate_equity(aces, 2, 200, Some(7)).unwrap();
/// assert!(est.hero() > 0.5);
/// ```
pub fn estimate_equity(
    hand: [Card; 2],
    seat_count: usize,
    trials: u32,
    seed: Option<u64>,
) -> Result<EquityEstimate, GameError> {
    if trials == 0 {
        return Err(GameError::InvalidTrialCount);
    }
    if seat_count == 0 || seat_count > MAX_SEATS {
        return Err(GameError::InvalidSeatCount {
            count: seat_count,
            max: MAX_SEATS,
        });
    }
    let seed = seed.unwrap_or_else(rand::random);
    debug!(hand = ?hand, seat_count, trials, seed, "estimating equity");

    let chunks = trials.div_ceil(CHUNK);
    let partials = (0..chunks)
        .into_par_iter()
        .map(|chunk| {
            let start = chunk * CHUNK;
            let end = (start + CHUNK).min(trials);
            let mut credit = vec![0.0f64; seat_count];
            for trial in start..end {
                let winners = play_trial(hand, seat_count, trial_seed(seed, trial))?;
                let each = 1.0 / winners.len() as f64;
                for seat in winners {
                    credit[seat] += each;
                }
            }
            Ok(credit)
        })
        .collect::<Result<Vec<Vec<f64>>, GameError>>()?;

    let mut totals = vec![0.0f64; seat_count];
    for partial in &partials {
        for (total, c) in totals.iter_mut().zip(partial) {
            *total += c;
        }
    }
    let win_rates: Vec<f64> = totals.iter().map(|t| t / f64::from(trials)).collect();
    info!(hand = ?hand, hero = win_rates[0], trials, "equity estimated");

    Ok(EquityEstimate {
        hand,
        trials,
        seed,
        win_rates,
    })
}

/// Plays one hand to the showdown and returns the winning seats.
fn play_trial(hand: [Card; 2], seat_count: usize, seed: u64) -> Result<Vec<usize>, GameError> {
    let players = (0..seat_count)
        .map(|i| Player::new(format!("Player {i}"), STARTING_STACK, DecisionPolicy::RuleBased))
        .collect();
    let mut game = Game::new(players, TRIAL_BIG_BLIND, Deck::new_with_seed(seed))?;
    game.seat_hole_cards(0, hand)?;
    game.deal()?;
    game.reveal_flop()?;
    game.reveal_turn()?;
    game.reveal_river()?;
    let winners = game.showdown()?.iter().map(|w| w.seat).collect();
    Ok(winners)
}

fn trial_seed(seed: u64, trial: u32) -> u64 {
    splitmix64(seed ^ splitmix64(u64::from(trial)))
}

/// splitmix64 mixing step, used to derive per-trial seeds.
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(a: &str, b: &str) -> [Card; 2] {
        [a.parse().unwrap(), b.parse().unwrap()]
    }

    #[test]
    fn rejects_zero_trials_and_bad_seat_counts() {
        let h = cards("AS", "KS");
        assert_eq!(
            estimate_equity(h, 4, 0, Some(1)),
            Err(GameError::InvalidTrialCount)
        );
        assert!(matches!(
            estimate_equity(h, 0, 10, Some(1)),
            Err(GameError::InvalidSeatCount { count: 0, .. })
        ));
        assert!(matches!(
            estimate_equity(h, MAX_SEATS + 1, 10, Some(1)),
            Err(GameError::InvalidSeatCount { .. })
        ));
    }

    #[test]
    fn duplicate_starting_cards_are_rejected() {
        let h = cards("AS", "AS");
        assert!(matches!(
            estimate_equity(h, 2, 3, Some(1)),
            Err(GameError::CardNotFound { .. })
        ));
    }

    #[test]
    fn lone_seat_always_wins() {
        let est = estimate_equity(cards("2C", "7D"), 1, 50, Some(5)).unwrap();
        assert_eq!(est.win_rates, vec![1.0]);
    }

    #[test]
    fn trial_seeds_differ() {
        assert_ne!(trial_seed(1, 0), trial_seed(1, 1));
        assert_ne!(trial_seed(1, 0), trial_seed(2, 0));
    }
}
