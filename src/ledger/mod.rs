//! Per-round winnings accounting.
//!
//! A `Ledger` starts unset. The first successful row turns the stake into a
//! balance (`stake * multiplier`); every later row compounds it. Cashing out
//! hands back the balance and returns the ledger to the unset state.
//!
//! ```
//! use hazard_ladder::ledger::Ledger;
//!
//! let mut ledger = Ledger::new(100.0);
//! assert_eq!(ledger.apply_row(1.25).unwrap(), 125.0);
//! assert_eq!(ledger.apply_row(1.25).unwrap(), 156.25);
//! assert_eq!(ledger.finalize(), 156.25);
//! assert_eq!(ledger.finalize(), 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Result, SessionError};

/// Balance held for a single round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    stake: f64,
    /// `None` until the first row is applied.
    balance: Option<f64>,
}

impl Ledger {
    /// Create an unset ledger for a round played at `stake`.
    #[must_use]
    pub fn new(stake: f64) -> Self {
        Self { stake, balance: None }
    }

    /// The round's base stake.
    #[must_use]
    pub fn stake(&self) -> f64 {
        self.stake
    }

    /// Current balance; 0.0 while unset.
    #[must_use]
    pub fn balance(&self) -> f64 {
        self.balance.unwrap_or(0.0)
    }

    /// Check if no row has been applied since creation or the last cash-out.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.balance.is_none()
    }

    /// Apply one row's growth multiplier and return the new balance.
    ///
    /// Non-finite or non-positive multipliers are rejected and leave the
    /// balance unchanged.
    pub fn apply_row(&mut self, multiplier: f64) -> Result<f64> {
        if !(multiplier.is_finite() && multiplier > 0.0) {
            return Err(SessionError::InvalidMultiplier { multiplier });
        }

        let next = match self.balance {
            Some(current) if current != 0.0 => current * multiplier,
            _ => self.stake * multiplier,
        };
        self.balance = Some(next);
        Ok(next)
    }

    /// Cash out: return the balance as the payout and reset to unset.
    ///
    /// An unset ledger pays 0.0.
    pub fn finalize(&mut self) -> f64 {
        self.balance.take().unwrap_or(0.0)
    }
}
