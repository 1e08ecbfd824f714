use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::game::TableView;
use crate::policy::{self, ActionSource, DecisionPolicy, DecisionView};
use crate::rules;

/// Represents a player action during a betting round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Pass without betting
    Check,
    /// Put the big blind into the pot
    Call,
    /// Put twice the big blind into the pot
    Raise,
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayerAction::Fold => "Fold",
            PlayerAction::Check => "Check",
            PlayerAction::Call => "Call",
            PlayerAction::Raise => "Raise",
        };
        f.write_str(s)
    }
}

impl FromStr for PlayerAction {
    type Err = GameError;

    /// Case-insensitive: `"fold"`, `"CHECK"`, `" Call "` and so on.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fold" => Ok(PlayerAction::Fold),
            "check" => Ok(PlayerAction::Check),
            "call" => Ok(PlayerAction::Call),
            "raise" => Ok(PlayerAction::Raise),
            _ => Err(GameError::UnrecognizedAction(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerStatus {
    Active,
    Folded,
    AllIn,
    Busted,
}

/// Default starting stack size for each player in chips
pub const STARTING_STACK: u32 = 500;

/// A seat at the table: chip stack, hole cards, status and the policy that
/// chooses its actions. The name is the player's unique key within a game.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    stack: u32,
    status: PlayerStatus,
    /// Hole cards (0 or 2 during a hand)
    hole: Vec<Card>,
    policy: DecisionPolicy,
}

impl Player {
    pub fn new(name: impl Into<String>, stack: u32, policy: DecisionPolicy) -> Self {
        Self {
            name: name.into(),
            stack,
            status: PlayerStatus::Active,
            hole: Vec::with_capacity(2),
            policy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn status(&self) -> PlayerStatus {
        self.status
    }
    pub fn policy(&self) -> DecisionPolicy {
        self.policy
    }

    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }

    /// Still contesting the pot (active or all-in).
    pub fn in_hand(&self) -> bool {
        matches!(self.status, PlayerStatus::Active | PlayerStatus::AllIn)
    }

    pub fn give_card(&mut self, c: Card) -> Result<(), GameError> {
        if self.hole.len() >= 2 {
            return Err(GameError::HoleCardsFull(self.name.clone()));
        }
        self.hole.push(c);
        Ok(())
    }

    pub fn add_chips(&mut self, amount: u32) -> Result<(), GameError> {
        self.stack = self
            .stack
            .checked_add(amount)
            .ok_or(GameError::ChipOverflow {
                total: u64::from(self.stack) + u64::from(amount),
                max: u32::MAX,
            })?;
        Ok(())
    }

    /// Debits `amount` and returns it. A stack that reaches zero goes all-in.
    pub fn place_bet(&mut self, amount: u32) -> Result<u32, GameError> {
        if amount > self.stack {
            return Err(GameError::InsufficientChips {
                requested: amount,
                available: self.stack,
            });
        }
        self.stack -= amount;
        if amount > 0 && self.stack == 0 {
            self.status = PlayerStatus::AllIn;
        }
        Ok(amount)
    }

    /// Surrenders the hole cards and leaves the hand.
    pub fn fold(&mut self) -> Vec<Card> {
        self.status = PlayerStatus::Folded;
        std::mem::take(&mut self.hole)
    }

    /// Back to a fresh seat for the next hand; an empty stack busts.
    pub fn reset_for_hand(&mut self) {
        self.hole.clear();
        self.status = if self.stack == 0 {
            PlayerStatus::Busted
        } else {
            PlayerStatus::Active
        };
    }

    pub fn available_actions(&self, table: &TableView<'_>) -> Vec<PlayerAction> {
        rules::available_actions(self.stack, table.big_blind)
    }

    /// Chooses an action: rule-based seats decide locally, interactive seats
    /// ask `source` until it returns a recognised action.
    pub fn decide(&self, table: &TableView<'_>, source: &mut dyn ActionSource) -> PlayerAction {
        let legal = self.available_actions(table);
        match self.policy {
            DecisionPolicy::RuleBased => policy::rule_based(&legal),
            DecisionPolicy::Interactive => {
                let view = DecisionView {
                    player: &self.name,
                    stack: self.stack,
                    hole_cards: &self.hole,
                    board: table.board,
                    pot: table.pot,
                    legal: &legal,
                };
                policy::prompt(source, &view)
            }
        }
    }
}
