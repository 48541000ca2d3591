//! Board and session configuration.
//!
//! - `BoardConfig`: Shape of the board (rows and columns)
//! - `SessionConfig`: How many rounds, how deep, at what stake
//!
//! Both are plain serde structs with builder methods. Nothing is checked at
//! construction time; [`SessionConfig::validate`] runs every check once,
//! before the first round starts.

use serde::{Deserialize, Serialize};

use super::error::{Result, SessionError};
use super::RowId;

/// Default number of rows on a board.
pub const DEFAULT_ROW_COUNT: u8 = 10;

/// Default number of positions per row.
pub const DEFAULT_COLUMN_COUNT: u8 = 5;

/// Default lower bound of the per-row growth multiplier.
pub const DEFAULT_MULTIPLIER_LOW: f64 = 1.2;

/// Default upper bound of the per-row growth multiplier.
pub const DEFAULT_MULTIPLIER_HIGH: f64 = 1.3;

/// Board shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows (`1..=row_count`).
    pub row_count: u8,

    /// Number of positions per row (`1..=column_count`).
    /// At least two, otherwise no row has a safe position.
    pub column_count: u8,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            row_count: DEFAULT_ROW_COUNT,
            column_count: DEFAULT_COLUMN_COUNT,
        }
    }
}

impl BoardConfig {
    /// Create a board with the given shape.
    #[must_use]
    pub const fn new(row_count: u8, column_count: u8) -> Self {
        Self { row_count, column_count }
    }

    /// Check if a row lies on this board.
    #[must_use]
    pub fn contains_row(&self, row: RowId) -> bool {
        (1..=self.row_count).contains(&row.raw())
    }

    /// Check the board shape.
    pub fn validate(&self) -> Result<()> {
        if self.row_count == 0 {
            return Err(SessionError::config("row_count must be at least 1"));
        }
        if self.column_count < 2 {
            return Err(SessionError::config(format!(
                "column_count must be at least 2, got {}",
                self.column_count
            )));
        }
        Ok(())
    }
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of rounds to play.
    pub round_count: u32,

    /// Deepest row played before cashing out (`1..=board.row_count`).
    pub target_row: u8,

    /// Stake placed at the start of every round.
    pub base_stake: f64,

    /// Board shape.
    pub board: BoardConfig,

    /// Lower bound of the uniform growth multiplier.
    pub multiplier_low: f64,

    /// Upper bound of the uniform growth multiplier.
    pub multiplier_high: f64,

    /// Seed for layouts and multipliers. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            round_count: 5,
            target_row: 5,
            base_stake: 50.0,
            board: BoardConfig::default(),
            multiplier_low: DEFAULT_MULTIPLIER_LOW,
            multiplier_high: DEFAULT_MULTIPLIER_HIGH,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Create a config with the three core values and defaults elsewhere.
    pub fn new(round_count: u32, target_row: u8, base_stake: f64) -> Self {
        Self {
            round_count,
            target_row,
            base_stake,
            ..Self::default()
        }
    }

    /// Set the board shape.
    #[must_use]
    pub fn with_board(mut self, board: BoardConfig) -> Self {
        self.board = board;
        self
    }

    /// Set the growth multiplier interval.
    #[must_use]
    pub fn with_multiplier_range(mut self, low: f64, high: f64) -> Self {
        self.multiplier_low = low;
        self.multiplier_high = high;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The deepest row as a [`RowId`].
    #[must_use]
    pub fn target(&self) -> RowId {
        RowId::new(self.target_row)
    }

    /// Reject anything that would make a round ill-defined.
    pub fn validate(&self) -> Result<()> {
        self.board.validate()?;

        if self.round_count == 0 {
            return Err(SessionError::config("round_count must be at least 1"));
        }
        if !self.board.contains_row(self.target()) {
            return Err(SessionError::config(format!(
                "target_row must be in 1..={}, got {}",
                self.board.row_count, self.target_row
            )));
        }
        if !(self.base_stake.is_finite() && self.base_stake > 0.0) {
            return Err(SessionError::config(format!(
                "base_stake must be a positive amount, got {}",
                self.base_stake
            )));
        }

        let (low, high) = (self.multiplier_low, self.multiplier_high);
        if !(low.is_finite() && high.is_finite() && low > 0.0 && low <= high) {
            return Err(SessionError::config(format!(
                "multiplier range must satisfy 0 < low <= high, got [{low}, {high}]"
            )));
        }
        Ok(())
    }
}
