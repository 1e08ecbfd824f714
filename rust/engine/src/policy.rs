//! Decision providers for seats at the table.
//!
//! A seat is either [`DecisionPolicy::RuleBased`], decided locally with no
//! input, or [`DecisionPolicy::Interactive`], which asks an external
//! [`ActionSource`] (a console prompt, a test script) for free text. Only
//! the interactive path can block; the round engine itself never suspends.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::PlayerAction;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecisionPolicy {
    Interactive,
    RuleBased,
}

/// What an interactive player sees when asked to act.
#[derive(Debug, Clone)]
pub struct DecisionView<'a> {
    pub player: &'a str,
    pub stack: u32,
    pub hole_cards: &'a [Card],
    pub board: &'a [Card],
    pub pot: u32,
    pub legal: &'a [PlayerAction],
}

/// External collaborator that answers for interactive seats.
///
/// # Example Implementation
///
/// ```rust
/// use holdem_engine::policy::{ActionSource, DecisionView};
///
/// struct AlwaysCall;
///
/// impl ActionSource for AlwaysCall {
///     fn ask(&mut self, _view: &DecisionView<'_>) -> Option<String> {
///         Some("call".to_string())
///     }
/// }
/// ```
pub trait ActionSource {
    /// Returns the raw reply, or `None` when no more input will arrive.
    fn ask(&mut self, view: &DecisionView<'_>) -> Option<String>;

    /// Told when a reply was not usable, just before asking again.
    fn reject(&mut self, _input: &str, _reason: &str) {}
}

/// Source for tables with no interactive seats; any question gets no answer.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unattended;

impl ActionSource for Unattended {
    fn ask(&mut self, _view: &DecisionView<'_>) -> Option<String> {
        None
    }
}

/// Placeholder policy: Call if affordable, else Check if offered, else Fold.
pub fn rule_based(legal: &[PlayerAction]) -> PlayerAction {
    [PlayerAction::Call, PlayerAction::Check]
        .into_iter()
        .find(|a| legal.contains(a))
        .unwrap_or(PlayerAction::Fold)
}

/// Asks `source` until the reply parses as an action. Closed input folds.
pub fn prompt(source: &mut dyn ActionSource, view: &DecisionView<'_>) -> PlayerAction {
    loop {
        let Some(input) = source.ask(view) else {
            return PlayerAction::Fold;
        };
        match input.parse::<PlayerAction>() {
            Ok(action) => return action,
            Err(e) => source.reject(&input, &e.to_string()),
        }
    }
}
