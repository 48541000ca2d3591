//! Session events.
//!
//! The round controller and session runner report progress as
//! `SessionEvent`s pushed into an `EventSink`. What a sink does with them
//! is up to the caller:
//!
//! - `TracingSink`: narrates through `tracing` (the default)
//! - `Vec<SessionEvent>`: collects everything, for tests and reports
//! - `NullSink`: drops everything

use serde::{Deserialize, Serialize};

use crate::core::{Position, RoundId, RowId};

/// Something that happened during a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A round placed its stake and received a fresh layout.
    RoundStarted {
        round: u32,
        round_id: RoundId,
        stake: f64,
    },

    /// A row was resolved and its multiplier applied.
    RowResolved {
        round: u32,
        row: RowId,
        hazard: Position,
        position: Position,
        multiplier: f64,
        balance: f64,
    },

    /// A round reached its target row and cashed out.
    RoundCashedOut {
        round: u32,
        round_id: RoundId,
        payout: f64,
        net_profit: f64,
    },

    /// Every round has been played.
    SessionComplete {
        rounds: u32,
        total_net_profit: f64,
    },
}

/// Receives session events in the order they happen.
pub trait EventSink {
    /// Handle one event.
    fn emit(&mut self, event: &SessionEvent);
}

impl EventSink for Vec<SessionEvent> {
    fn emit(&mut self, event: &SessionEvent) {
        self.push(event.clone());
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &SessionEvent) {}
}

/// Logs every event through `tracing`.
///
/// Round boundaries and the session total go to `info`, individual rows
/// to `debug`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::RoundStarted { round, round_id, stake } => {
                tracing::info!(round, round_id = %round_id, stake, "round started");
            }
            SessionEvent::RowResolved {
                round,
                row,
                hazard,
                position,
                multiplier,
                balance,
            } => {
                tracing::debug!(
                    round,
                    row = row.raw(),
                    hazard = hazard.raw(),
                    position = position.raw(),
                    multiplier,
                    balance,
                    "row resolved"
                );
            }
            SessionEvent::RoundCashedOut {
                round,
                round_id,
                payout,
                net_profit,
            } => {
                tracing::info!(round, round_id = %round_id, payout, net_profit, "round cashed out");
            }
            SessionEvent::SessionComplete { rounds, total_net_profit } => {
                tracing::info!(rounds, total_net_profit, "session complete");
            }
        }
    }
}
