//! The per-round state machine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{BoardConfig, GameRng, Position, Result, RoundId, RowId, SessionConfig, SessionError};
use crate::events::{EventSink, SessionEvent};
use crate::layout::{Layout, LayoutGenerator};
use crate::ledger::Ledger;
use crate::payout::MultiplierSource;
use crate::resolver::{resolve_row, Resolution};

/// Where a round currently is.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Stake placed, no layout yet.
    AwaitingLayout,
    /// About to play this row.
    PlayingRow(RowId),
    /// Target row played; the next step cashes out.
    CashingOut,
    /// Round over.
    CashedOut { payout: f64 },
}

/// Record of one played row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowOutcome {
    pub row: RowId,
    pub hazard: Position,
    pub position: Position,
    pub multiplier: f64,
    /// Balance after this row's multiplier was applied.
    pub balance: f64,
}

/// Everything a finished round produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// 1-based round number within the session.
    pub round: u32,
    pub round_id: RoundId,
    pub stake: f64,
    pub layout: Layout,
    pub rows: SmallVec<[RowOutcome; 10]>,
    pub payout: f64,
    /// `payout - stake`.
    pub net_profit: f64,
}

/// Collaborators a round borrows from its session.
///
/// Layouts and multipliers draw from separate RNG streams so swapping one
/// policy never shifts the other's sequence.
pub struct RoundContext<'a> {
    pub layouts: &'a mut dyn LayoutGenerator,
    pub multipliers: &'a mut dyn MultiplierSource,
    pub layout_rng: &'a mut GameRng,
    pub multiplier_rng: &'a mut GameRng,
    pub sink: &'a mut dyn EventSink,
}

/// Drives one round from stake to cash-out.
///
/// The controller owns the round's ledger and layout. Both are dropped with
/// it, so nothing from one round can reach the next.
pub struct RoundController<'a> {
    round: u32,
    round_id: RoundId,
    board: BoardConfig,
    target: RowId,
    ledger: Ledger,
    layout: Option<Layout>,
    phase: RoundPhase,
    rows: SmallVec<[RowOutcome; 10]>,
    ctx: RoundContext<'a>,
}

impl<'a> RoundController<'a> {
    /// Create a controller for round number `round`.
    ///
    /// The configuration is checked here, before any layout exists.
    pub fn new(round: u32, config: &SessionConfig, ctx: RoundContext<'a>) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            round,
            round_id: RoundId::generate(round),
            board: config.board,
            target: config.target(),
            ledger: Ledger::new(config.base_stake),
            layout: None,
            phase: RoundPhase::AwaitingLayout,
            rows: SmallVec::new(),
            ctx,
        })
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// The round's correlation token.
    #[must_use]
    pub fn round_id(&self) -> &RoundId {
        &self.round_id
    }

    /// Current ledger balance.
    #[must_use]
    pub fn balance(&self) -> f64 {
        self.ledger.balance()
    }

    /// Advance one transition and return the new phase.
    pub fn step(&mut self) -> Result<RoundPhase> {
        let phase = self.phase;
        self.phase = match phase {
            RoundPhase::AwaitingLayout => {
                let layout = self.ctx.layouts.generate(&self.board, self.ctx.layout_rng);
                layout.validate(&self.board)?;
                self.layout = Some(layout);
                self.ctx.sink.emit(&SessionEvent::RoundStarted {
                    round: self.round,
                    round_id: self.round_id.clone(),
                    stake: self.ledger.stake(),
                });
                RoundPhase::PlayingRow(RowId::new(1))
            }
            RoundPhase::PlayingRow(row) => {
                self.play_row(row)?;
                if row >= self.target {
                    RoundPhase::CashingOut
                } else {
                    RoundPhase::PlayingRow(row.next())
                }
            }
            RoundPhase::CashingOut => {
                let payout = self.ledger.finalize();
                self.ctx.sink.emit(&SessionEvent::RoundCashedOut {
                    round: self.round,
                    round_id: self.round_id.clone(),
                    payout,
                    net_profit: payout - self.ledger.stake(),
                });
                RoundPhase::CashedOut { payout }
            }
            RoundPhase::CashedOut { .. } => return Err(SessionError::RoundFinished),
        };
        Ok(self.phase)
    }

    fn play_row(&mut self, row: RowId) -> Result<()> {
        let layout = self.layout.as_ref().ok_or(SessionError::RoundNotStarted)?;
        let Resolution { hazard, position } = resolve_row(layout, row, &self.board)?;

        let multiplier = self.ctx.multipliers.next_multiplier(row, self.ctx.multiplier_rng);
        let balance = self.ledger.apply_row(multiplier)?;

        self.rows.push(RowOutcome {
            row,
            hazard,
            position,
            multiplier,
            balance,
        });
        self.ctx.sink.emit(&SessionEvent::RowResolved {
            round: self.round,
            row,
            hazard,
            position,
            multiplier,
            balance,
        });
        Ok(())
    }

    /// Run the round to cash-out.
    pub fn play(mut self) -> Result<RoundSummary> {
        let payout = loop {
            if let RoundPhase::CashedOut { payout } = self.step()? {
                break payout;
            }
        };

        let stake = self.ledger.stake();
        Ok(RoundSummary {
            round: self.round,
            round_id: self.round_id,
            stake,
            layout: self.layout.unwrap_or_default(),
            rows: self.rows,
            payout,
            net_profit: payout - stake,
        })
    }
}
