use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// The shared pot of one hand. Single pot only: there are no side pots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    amount: u32,
}

/// An even division of the pot between winners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    /// Paid to each winner.
    pub share: u32,
    /// Left over by integer division; burned, never paid out.
    pub remainder: u32,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn add(&mut self, chips: u32) -> Result<(), GameError> {
        self.amount = self
            .amount
            .checked_add(chips)
            .ok_or(GameError::ChipOverflow {
                total: u64::from(self.amount) + u64::from(chips),
                max: u32::MAX,
            })?;
        Ok(())
    }

    /// How the current amount divides between `ways` winners.
    pub fn split(&self, ways: usize) -> Split {
        let ways = u32::try_from(ways).unwrap_or(u32::MAX);
        if ways == 0 {
            return Split {
                share: 0,
                remainder: self.amount,
            };
        }
        Split {
            share: self.amount / ways,
            remainder: self.amount % ways,
        }
    }

    /// Empties the pot, returning what it held.
    pub fn take(&mut self) -> u32 {
        std::mem::take(&mut self.amount)
    }
}
