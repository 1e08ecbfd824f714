use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::{Phase, TableView};
use crate::hand::{Hand, PokerScore};
use crate::history::ActionRecord;
use crate::player::{Player, PlayerStatus};
use crate::policy::{ActionSource, DecisionPolicy};
use crate::pot::Pot;
use crate::rules::{self, ValidatedAction};

/// Most seats a 52-card deck can serve: two hole cards each plus a 5-card board.
pub const MAX_SEATS: usize = 23;

/// One contender's result at showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownEntry {
    pub seat: usize,
    pub name: String,
    pub score: PokerScore,
}

/// Outcome of [`Game::distribute_winnings`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    pub winners: Vec<String>,
    pub share: u32,
    pub burned: u32,
}

/// Round engine: owns the seats, the deck, the board and the pot of one
/// table, and drives a hand through
/// `Init → Dealt → … → Showdown → PaidOut`, one call per transition.
///
/// # Examples
///
/// ```
/// use holdem_engine::engine::Game;
/// use holdem_engine::game::Phase;
/// use holdem_engine::player::Player;
/// use holdem_engine::policy::{DecisionPolicy, Unattended};
///
/// let players = ["Alice", "Bob", "Carol"]
///     .iter()
///     .map(|n| Player::new(*n, 500, DecisionPolicy::RuleBased))
///     .collect();
/// let mut game = Game::with_seed(players, 10, 42).unwrap();
///
/// while game.phase() != Phase::PaidOut {
///     game.step(&mut Unattended).unwrap();
/// }
/// assert_eq!(game.board().len(), 5);
/// assert!(!game.winners().is_empty());
/// ```
#[derive(Debug)]
pub struct Game {
    players: Vec<Player>,
    deck: Deck,
    board: Vec<Card>,
    pot: Pot,
    big_blind: u32,
    phase: Phase,
    seed: Option<u64>,
    actions: Vec<ActionRecord>,
    /// Contenders sorted best first, filled at showdown
    results: Vec<ShowdownEntry>,
    winner_count: usize,
    payout: Option<Payout>,
    burned: u32,
}

impl Game {
    /// Seats `players` in the given order. The deck is rebuilt and shuffled
    /// with its own random source.
    pub fn new(players: Vec<Player>, big_blind: u32, mut deck: Deck) -> Result<Self, GameError> {
        if players.is_empty() || players.len() > MAX_SEATS {
            return Err(GameError::InvalidSeatCount {
                count: players.len(),
                max: MAX_SEATS,
            });
        }
        let total: u64 = players.iter().map(|p| u64::from(p.stack())).sum();
        if total > u64::from(u32::MAX) {
            return Err(GameError::ChipOverflow {
                total,
                max: u32::MAX,
            });
        }
        let mut names = HashSet::new();
        for p in &players {
            if !names.insert(p.name()) {
                return Err(GameError::DuplicatePlayer(p.name().to_string()));
            }
        }
        deck.shuffle();
        Ok(Self {
            players,
            deck,
            board: Vec::with_capacity(5),
            pot: Pot::new(),
            big_blind,
            phase: Phase::Init,
            seed: None,
            actions: Vec::new(),
            results: Vec::new(),
            winner_count: 0,
            payout: None,
            burned: 0,
        })
    }

    /// Like [`Game::new`] with a deck seeded from `seed`, for reproducible deals.
    pub fn with_seed(players: Vec<Player>, big_blind: u32, seed: u64) -> Result<Self, GameError> {
        let mut game = Self::new(players, big_blind, Deck::new_with_seed(seed))?;
        game.seed = Some(seed);
        Ok(game)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn pot(&self) -> u32 {
        self.pot.amount()
    }
    pub fn big_blind(&self) -> u32 {
        self.big_blind
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }
    pub fn actions(&self) -> &[ActionRecord] {
        &self.actions
    }
    /// The seed the deck was created from, when one was given.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
    /// Payout of the current hand once it reached `PaidOut`.
    pub fn last_payout(&self) -> Option<&Payout> {
        self.payout.as_ref()
    }

    /// Chips at the table: every stack plus the pot.
    pub fn total_chips(&self) -> u64 {
        self.players.iter().map(|p| u64::from(p.stack())).sum::<u64>() + u64::from(self.pot())
    }

    /// Chips lost to odd-chip remainders since this game was created.
    pub fn burned(&self) -> u32 {
        self.burned
    }

    /// Name and stack of every seat, in seating order.
    pub fn standings(&self) -> Vec<(&str, u32)> {
        self.players.iter().map(|p| (p.name(), p.stack())).collect()
    }

    /// Contenders sharing the best score, in seating order among equals.
    pub fn winners(&self) -> &[ShowdownEntry] {
        &self.results[..self.winner_count]
    }

    /// Every contender's score from the last showdown, best first.
    pub fn showdown_results(&self) -> &[ShowdownEntry] {
        &self.results
    }

    pub fn table_view(&self) -> TableView<'_> {
        TableView {
            phase: self.phase,
            board: &self.board,
            pot: self.pot.amount(),
            big_blind: self.big_blind,
        }
    }

    fn expect_phase(&self, allowed: &[Phase], action: &'static str) -> Result<(), GameError> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(GameError::InvalidTransition {
                from: self.phase.to_string(),
                action,
            })
        }
    }

    /// Gives `seat` two specific hole cards, taking them out of the deck.
    /// Only allowed before the deal.
    pub fn seat_hole_cards(&mut self, seat: usize, cards: [Card; 2]) -> Result<(), GameError> {
        self.expect_phase(&[Phase::Init], "seat hole cards")?;
        if seat >= self.players.len() {
            return Err(GameError::SeatOutOfRange(seat));
        }
        for card in cards {
            let c = self.deck.draw_specific(card)?;
            self.players[seat].give_card(c)?;
        }
        Ok(())
    }

    /// Init → Dealt: one card at a time, round-robin in seating order, until
    /// every seat still in the hand holds two.
    pub fn deal(&mut self) -> Result<(), GameError> {
        self.expect_phase(&[Phase::Init], "deal")?;
        while self
            .players
            .iter()
            .any(|p| p.in_hand() && p.hole_cards().len() < 2)
        {
            for p in self.players.iter_mut() {
                if p.in_hand() && p.hole_cards().len() < 2 {
                    let c = self.deck.draw()?;
                    p.give_card(c)?;
                }
            }
        }
        self.phase = Phase::Dealt;
        debug!(seats = self.players.len(), "hole cards dealt");
        Ok(())
    }

    /// Runs one betting round: every active seat acts once, in seating order.
    pub fn betting_round(&mut self, source: &mut dyn ActionSource) -> Result<(), GameError> {
        let next = self.phase.betting().ok_or_else(|| GameError::InvalidTransition {
            from: self.phase.to_string(),
            action: "bet",
        })?;
        for seat in 0..self.players.len() {
            if self.players[seat].status() == PlayerStatus::Active {
                self.act(seat, source)?;
            }
        }
        self.phase = next;
        Ok(())
    }

    fn act(&mut self, seat: usize, source: &mut dyn ActionSource) -> Result<(), GameError> {
        loop {
            let action = self.players[seat].decide(&self.table_view(), source);
            let stack = self.players[seat].stack();
            let validated = match rules::validate_action(stack, self.big_blind, action) {
                Ok(v) => v,
                Err(e @ GameError::InsufficientChips { .. }) => match self.players[seat].policy() {
                    DecisionPolicy::Interactive => {
                        source.reject(&action.to_string(), &e.to_string());
                        continue;
                    }
                    // unreachable through rule_based, which only picks affordable actions
                    DecisionPolicy::RuleBased => {
                        warn!(player = self.players[seat].name(), %e, "auto-folding");
                        ValidatedAction::Fold
                    }
                },
                Err(e) => return Err(e),
            };
            return self.apply(seat, validated);
        }
    }

    fn apply(&mut self, seat: usize, action: ValidatedAction) -> Result<(), GameError> {
        let player = &mut self.players[seat];
        match action {
            ValidatedAction::Fold => {
                player.fold();
            }
            ValidatedAction::Check => {}
            ValidatedAction::Call(amount) | ValidatedAction::Raise(amount) => {
                let chips = player.place_bet(amount)?;
                self.pot.add(chips)?;
            }
        }
        debug!(
            player = player.name(),
            action = %action.action(),
            amount = action.amount(),
            pot = self.pot.amount(),
            "action"
        );
        if let Some(street) = self.phase.street() {
            self.actions.push(ActionRecord {
                player: player.name().to_string(),
                street,
                action: action.action(),
                amount: action.amount(),
            });
        }
        Ok(())
    }

    fn reveal(&mut self, n: usize) -> Result<(), GameError> {
        for _ in 0..n {
            let c = self.deck.draw()?;
            self.board.push(c);
        }
        debug!(board = ?self.board, "board revealed");
        Ok(())
    }

    /// Dealt or PreflopBetting → FlopRevealed: three board cards.
    pub fn reveal_flop(&mut self) -> Result<(), GameError> {
        self.expect_phase(&[Phase::Dealt, Phase::PreflopBetting], "reveal the flop")?;
        self.reveal(3)?;
        self.phase = Phase::FlopRevealed;
        Ok(())
    }

    /// FlopRevealed or FlopBetting → TurnRevealed: one board card.
    pub fn reveal_turn(&mut self) -> Result<(), GameError> {
        self.expect_phase(&[Phase::FlopRevealed, Phase::FlopBetting], "reveal the turn")?;
        self.reveal(1)?;
        self.phase = Phase::TurnRevealed;
        Ok(())
    }

    /// TurnRevealed or TurnBetting → RiverRevealed: one board card.
    pub fn reveal_river(&mut self) -> Result<(), GameError> {
        self.expect_phase(&[Phase::TurnRevealed, Phase::TurnBetting], "reveal the river")?;
        self.reveal(1)?;
        self.phase = Phase::RiverRevealed;
        Ok(())
    }

    /// Scores every seat still in the hand and returns the winners.
    ///
    /// Scores are sorted best first (stable, so seating order breaks ties in
    /// the listing) and the winners are the leading run whose score equals the
    /// best exactly. No contenders means no winners.
    pub fn showdown(&mut self) -> Result<&[ShowdownEntry], GameError> {
        self.expect_phase(&[Phase::RiverRevealed, Phase::RiverBetting], "run the showdown")?;
        let mut results = Vec::new();
        for (seat, p) in self.players.iter().enumerate() {
            if !p.in_hand() {
                continue;
            }
            let mut cards = p.hole_cards().to_vec();
            cards.extend_from_slice(&self.board);
            let score = Hand::new(cards).score()?;
            results.push(ShowdownEntry {
                seat,
                name: p.name().to_string(),
                score,
            });
        }
        results.sort_by(|a, b| b.score.cmp(&a.score));

        self.winner_count = match results.first() {
            Some(best) => results
                .iter()
                .take_while(|e| e.score == best.score)
                .count(),
            None => 0,
        };
        self.results = results;
        self.phase = Phase::Showdown;
        for w in self.winners() {
            info!(winner = %w.name, score = %w.score, "showdown");
        }
        Ok(self.winners())
    }

    /// Showdown → PaidOut: splits the pot evenly between the winners.
    ///
    /// The odd-chip remainder is burned. With no winners (everybody folded)
    /// the pot stays where it is for the next hand.
    pub fn distribute_winnings(&mut self) -> Result<Payout, GameError> {
        self.expect_phase(&[Phase::Showdown], "distribute winnings")?;
        let payout = if self.winner_count == 0 {
            Payout {
                winners: Vec::new(),
                share: 0,
                burned: 0,
            }
        } else {
            let split = self.pot.split(self.winner_count);
            self.pot.take();
            let mut winners = Vec::with_capacity(self.winner_count);
            for i in 0..self.winner_count {
                let seat = self.results[i].seat;
                self.players[seat].add_chips(split.share)?;
                winners.push(self.players[seat].name().to_string());
            }
            self.burned += split.remainder;
            Payout {
                winners,
                share: split.share,
                burned: split.remainder,
            }
        };
        info!(
            winners = ?payout.winners,
            share = payout.share,
            burned = payout.burned,
            "pot distributed"
        );
        self.payout = Some(payout.clone());
        self.phase = Phase::PaidOut;
        Ok(payout)
    }

    /// PaidOut → Init: fresh shuffled deck, empty board, cleared hole cards.
    /// Seats with no chips left are marked busted and sit the hand out.
    pub fn start_next_hand(&mut self) -> Result<(), GameError> {
        self.expect_phase(&[Phase::PaidOut], "start the next hand")?;
        self.deck.shuffle();
        self.board.clear();
        self.actions.clear();
        self.results.clear();
        self.winner_count = 0;
        self.payout = None;
        for p in self.players.iter_mut() {
            p.reset_for_hand();
        }
        self.phase = Phase::Init;
        Ok(())
    }

    /// Performs whichever transition comes next, betting on every street,
    /// and returns the new phase.
    pub fn step(&mut self, source: &mut dyn ActionSource) -> Result<Phase, GameError> {
        match self.phase {
            Phase::Init => self.deal()?,
            Phase::Dealt | Phase::FlopRevealed | Phase::TurnRevealed | Phase::RiverRevealed => {
                self.betting_round(source)?
            }
            Phase::PreflopBetting => self.reveal_flop()?,
            Phase::FlopBetting => self.reveal_turn()?,
            Phase::TurnBetting => self.reveal_river()?,
            Phase::RiverBetting => {
                self.showdown()?;
            }
            Phase::Showdown => {
                self.distribute_winnings()?;
            }
            Phase::PaidOut => self.start_next_hand()?,
        }
        Ok(self.phase)
    }

    /// Plays the current hand from `Init` through `PaidOut`.
    pub fn play_hand(&mut self, source: &mut dyn ActionSource) -> Result<Payout, GameError> {
        self.expect_phase(&[Phase::Init], "play a hand")?;
        while self.phase != Phase::Showdown {
            self.step(source)?;
        }
        self.distribute_winnings()
    }
}
