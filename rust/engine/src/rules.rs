use crate::errors::GameError;
use crate::player::PlayerAction as A;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call(u32),
    Raise(u32),
}

impl ValidatedAction {
    /// Chips this action moves from the stack into the pot.
    pub fn amount(self) -> u32 {
        match self {
            ValidatedAction::Fold | ValidatedAction::Check => 0,
            ValidatedAction::Call(n) | ValidatedAction::Raise(n) => n,
        }
    }

    pub fn action(self) -> A {
        match self {
            ValidatedAction::Fold => A::Fold,
            ValidatedAction::Check => A::Check,
            ValidatedAction::Call(_) => A::Call,
            ValidatedAction::Raise(_) => A::Raise,
        }
    }
}

/// Fixed raise size: twice the big blind. There is no re-raise or
/// call-matching loop.
pub fn raise_amount(big_blind: u32) -> u32 {
    big_blind.saturating_mul(2)
}

/// Actions a stack can afford. Fold is always legal; Call needs the big
/// blind and Raise needs twice the big blind. Check is never offered.
///
/// # Examples
///
/// ```
/// use holdem_engine::player::PlayerAction;
/// use holdem_engine::rules::available_actions;
///
/// assert_eq!(
///     available_actions(15, 10),
///     vec![PlayerAction::Fold, PlayerAction::Call]
/// );
/// assert_eq!(available_actions(5, 10), vec![PlayerAction::Fold]);
/// ```
pub fn available_actions(stack: u32, big_blind: u32) -> Vec<A> {
    let mut actions = vec![A::Fold];
    if stack >= big_blind {
        actions.push(A::Call);
    }
    if stack >= raise_amount(big_blind) {
        actions.push(A::Raise);
    }
    actions
}

/// Validates a player action against the stack and the big blind.
///
/// Converts a [`crate::player::PlayerAction`] into a [`ValidatedAction`]
/// carrying the chip amount to debit.
///
/// # Errors
///
/// [`GameError::InsufficientChips`] when a Call or Raise costs more than the
/// stack holds. The round engine re-prompts interactive players and folds
/// rule-based ones.
///
/// # Examples
///
/// ```
/// use holdem_engine::errors::GameError;
/// use holdem_engine::player::PlayerAction;
/// use holdem_engine::rules::{validate_action, ValidatedAction};
///
/// assert_eq!(
///     validate_action(100, 10, PlayerAction::Raise),
///     Ok(ValidatedAction::Raise(20))
/// );
/// assert!(matches!(
///     validate_action(15, 10, PlayerAction::Raise),
///     Err(GameError::InsufficientChips { requested: 20, available: 15 })
/// ));
/// ```
pub fn validate_action(stack: u32, big_blind: u32, action: A) -> Result<ValidatedAction, GameError> {
    let affordable = |amount: u32| {
        if amount > stack {
            Err(GameError::InsufficientChips {
                requested: amount,
                available: stack,
            })
        } else {
            Ok(amount)
        }
    };
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => Ok(ValidatedAction::Check),
        A::Call => affordable(big_blind).map(ValidatedAction::Call),
        A::Raise => affordable(raise_amount(big_blind)).map(ValidatedAction::Raise),
    }
}
