use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::history::Street;

/// Where a hand stands in the round state machine. Transitions are strictly
/// sequential; a betting phase may be skipped (the equity estimator plays
/// hands out with no betting at all).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Init,
    Dealt,
    PreflopBetting,
    FlopRevealed,
    FlopBetting,
    TurnRevealed,
    TurnBetting,
    RiverRevealed,
    RiverBetting,
    Showdown,
    PaidOut,
}

impl Phase {
    /// The betting street this phase belongs to, if any.
    pub fn street(self) -> Option<Street> {
        match self {
            Phase::Dealt | Phase::PreflopBetting => Some(Street::Preflop),
            Phase::FlopRevealed | Phase::FlopBetting => Some(Street::Flop),
            Phase::TurnRevealed | Phase::TurnBetting => Some(Street::Turn),
            Phase::RiverRevealed | Phase::RiverBetting => Some(Street::River),
            Phase::Init | Phase::Showdown | Phase::PaidOut => None,
        }
    }

    /// The betting phase reachable from here.
    pub fn betting(self) -> Option<Phase> {
        match self {
            Phase::Dealt => Some(Phase::PreflopBetting),
            Phase::FlopRevealed => Some(Phase::FlopBetting),
            Phase::TurnRevealed => Some(Phase::TurnBetting),
            Phase::RiverRevealed => Some(Phase::RiverBetting),
            _ => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Read-only snapshot of the shared table handed to players when they act.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    pub phase: Phase,
    pub board: &'a [Card],
    pub pot: u32,
    pub big_blind: u32,
}
