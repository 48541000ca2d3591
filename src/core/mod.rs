//! Core types: identifiers, configuration, RNG, errors.
//!
//! Everything the game stages share lives here; the stages themselves
//! (layout, resolver, ledger, round, session) only depend on this module
//! and on each other in pipeline order.

pub mod ids;
pub mod rng;
pub mod config;
pub mod error;

pub use ids::{Position, RoundId, RowId};
pub use rng::GameRng;
pub use config::{
    BoardConfig, SessionConfig, DEFAULT_COLUMN_COUNT, DEFAULT_MULTIPLIER_HIGH,
    DEFAULT_MULTIPLIER_LOW, DEFAULT_ROW_COUNT,
};
pub use error::{Result, SessionError};
