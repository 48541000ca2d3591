//! Row growth multiplier sources.
//!
//! The multiplier is an economic parameter, independent of the hazard
//! layout and of the position chosen. Sources are trait objects so a
//! session can run on a random payout curve while tests pin it to exact
//! values.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, RowId, DEFAULT_MULTIPLIER_HIGH, DEFAULT_MULTIPLIER_LOW};

/// Supplies the growth multiplier for each successfully played row.
pub trait MultiplierSource {
    /// Multiplier for `row`. Called exactly once per played row.
    fn next_multiplier(&mut self, row: RowId, rng: &mut GameRng) -> f64;
}

/// Uniform multiplier drawn from `[low, high]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UniformMultiplier {
    pub low: f64,
    pub high: f64,
}

impl Default for UniformMultiplier {
    fn default() -> Self {
        Self {
            low: DEFAULT_MULTIPLIER_LOW,
            high: DEFAULT_MULTIPLIER_HIGH,
        }
    }
}

impl UniformMultiplier {
    /// Create a uniform source over `[low, high]`.
    #[must_use]
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }
}

impl MultiplierSource for UniformMultiplier {
    fn next_multiplier(&mut self, _row: RowId, rng: &mut GameRng) -> f64 {
        rng.gen_f64_range(self.low, self.high)
    }
}

/// Same multiplier for every row.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FixedMultiplier(pub f64);

impl MultiplierSource for FixedMultiplier {
    fn next_multiplier(&mut self, _row: RowId, _rng: &mut GameRng) -> f64 {
        self.0
    }
}

/// Replays a list of multipliers, wrapping around at the end.
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceMultiplier {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceMultiplier {
    /// Create a source replaying `values`. An empty list yields 1.0.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl MultiplierSource for SequenceMultiplier {
    fn next_multiplier(&mut self, _row: RowId, _rng: &mut GameRng) -> f64 {
        if self.values.is_empty() {
            return 1.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
