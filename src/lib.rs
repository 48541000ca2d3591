//! # hazard-ladder
//!
//! A simulator for row-by-row "pick the safe item" games.
//!
//! Each round hides one hazard in every row of a board, walks the rows up
//! to a target depth picking a safe position in each, compounds a stake by
//! a per-row growth multiplier, and cashes out. A session repeats this for
//! a number of rounds and totals the net profit.
//!
//! ## Design Principles
//!
//! 1. **Injected Randomness**: Layouts and multipliers come from swappable
//!    policies drawing on a seeded `GameRng`, so a round is a pure function
//!    of its inputs.
//!
//! 2. **Round-Scoped State**: The ledger lives inside one `RoundController`
//!    and is dropped at cash-out. Only the session total crosses rounds.
//!
//! 3. **Fail Early**: Configuration is validated before the first layout is
//!    generated; broken invariants abort the session with a `SessionError`.
//!
//! ## Modules
//!
//! - `core`: Identifiers, configuration, RNG, errors
//! - `layout`: Hazard layouts and their generators
//! - `resolver`: Safe-position resolution
//! - `ledger`: Per-round winnings accounting
//! - `payout`: Row growth multiplier sources
//! - `round`: The per-round state machine
//! - `events`: Progress events and sinks
//! - `session`: Multi-round runner, report and statistics

pub mod core;
pub mod layout;
pub mod resolver;
pub mod ledger;
pub mod payout;
pub mod round;
pub mod events;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, GameRng, Position, Result, RoundId, RowId, SessionConfig, SessionError,
};

pub use crate::layout::{generate_layout, FixedLayout, Layout, LayoutGenerator, UniformLayout};

pub use crate::resolver::{resolve_row, resolve_safe_position, Resolution};

pub use crate::ledger::Ledger;

pub use crate::payout::{FixedMultiplier, MultiplierSource, SequenceMultiplier, UniformMultiplier};

pub use crate::round::{RoundContext, RoundController, RoundPhase, RoundSummary, RowOutcome};

pub use crate::events::{EventSink, NullSink, SessionEvent, TracingSink};

pub use crate::session::{run_session, SessionReport, SessionRunner, SessionStats};
