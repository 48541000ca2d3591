//! Round controller.
//!
//! One round walks a small state machine:
//!
//! ```text
//! AwaitingLayout ──▶ PlayingRow(1) ──▶ … ──▶ PlayingRow(target) ──▶ CashingOut ──▶ CashedOut
//!        │                 │                                                │
//!   generate and      resolve row, draw multiplier,                  finalize ledger
//!   check layout      apply to ledger
//! ```
//!
//! `RoundController::step` performs one arrow; `RoundController::play` runs
//! to `CashedOut` and returns a `RoundSummary`.

mod controller;

pub use controller::{RoundContext, RoundController, RoundPhase, RoundSummary, RowOutcome};
