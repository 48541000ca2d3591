//! Session runner: plays rounds back to back and totals the net profit.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Result, SessionConfig};
use crate::events::{EventSink, SessionEvent, TracingSink};
use crate::layout::{LayoutGenerator, UniformLayout};
use crate::payout::{MultiplierSource, UniformMultiplier};
use crate::round::{RoundContext, RoundController, RoundSummary};

use super::stats::SessionStats;

/// Result of a completed session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionReport {
    /// Seed the session's RNG streams were derived from.
    pub seed: u64,

    /// Sum of `payout - stake` over every round.
    pub total_net_profit: f64,

    /// Rounds in the order they were played. Empty when the runner was
    /// told not to keep round summaries.
    pub rounds: Vec<RoundSummary>,

    /// Aggregate statistics.
    pub stats: SessionStats,
}

/// Runs a configured number of rounds sequentially.
///
/// Layout generation and the payout curve are injectable; by default both
/// are uniform random, seeded from `config.seed` or the OS.
pub struct SessionRunner {
    config: SessionConfig,
    layouts: Box<dyn LayoutGenerator>,
    multipliers: Box<dyn MultiplierSource>,
    keep_rounds: bool,
}

impl SessionRunner {
    /// Create a runner with uniform layouts and multipliers.
    pub fn new(config: SessionConfig) -> Self {
        let multipliers = UniformMultiplier::new(config.multiplier_low, config.multiplier_high);
        Self {
            config,
            layouts: Box::new(UniformLayout),
            multipliers: Box::new(multipliers),
            keep_rounds: true,
        }
    }

    /// Replace the layout generator.
    #[must_use]
    pub fn with_layout_generator(mut self, layouts: impl LayoutGenerator + 'static) -> Self {
        self.layouts = Box::new(layouts);
        self
    }

    /// Replace the multiplier source.
    #[must_use]
    pub fn with_multiplier(mut self, multipliers: impl MultiplierSource + 'static) -> Self {
        self.multipliers = Box::new(multipliers);
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Choose whether the report keeps every round's summary.
    ///
    /// With `false` only the totals and statistics survive each round, so a
    /// session's memory no longer grows with its round count.
    #[must_use]
    pub fn with_round_summaries(mut self, keep: bool) -> Self {
        self.keep_rounds = keep;
        self
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Run the session, narrating through `tracing`.
    pub fn run(&mut self) -> Result<SessionReport> {
        self.run_with_sink(&mut TracingSink)
    }

    /// Run the session, delivering events to `sink`.
    ///
    /// The configuration is validated before the first round. Any round
    /// error aborts the session and is returned as is.
    pub fn run_with_sink(&mut self, sink: &mut dyn EventSink) -> Result<SessionReport> {
        self.config.validate()?;

        let rng = self.config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let seed = rng.seed();
        let mut layout_rng = rng.for_context("layout");
        let mut multiplier_rng = rng.for_context("multiplier");

        tracing::debug!(
            seed,
            rounds = self.config.round_count,
            target_row = self.config.target_row,
            stake = self.config.base_stake,
            "session starting"
        );

        let mut total_net_profit = 0.0;
        let mut stats = SessionStats::new();
        let mut rounds = Vec::new();

        for round in 1..=self.config.round_count {
            let ctx = RoundContext {
                layouts: self.layouts.as_mut(),
                multipliers: self.multipliers.as_mut(),
                layout_rng: &mut layout_rng,
                multiplier_rng: &mut multiplier_rng,
                sink: &mut *sink,
            };
            let summary = RoundController::new(round, &self.config, ctx)?.play()?;

            total_net_profit += summary.net_profit;
            stats.record(&summary);
            if self.keep_rounds {
                rounds.push(summary);
            }
        }

        sink.emit(&SessionEvent::SessionComplete {
            rounds: self.config.round_count,
            total_net_profit,
        });

        Ok(SessionReport {
            seed,
            total_net_profit,
            rounds,
            stats,
        })
    }
}

/// Play `round_count` rounds to `target_row` at `base_stake` on the default
/// board and return the total net profit.
pub fn run_session(round_count: u32, target_row: u8, base_stake: f64) -> Result<f64> {
    SessionRunner::new(SessionConfig::new(round_count, target_row, base_stake))
        .with_round_summaries(false)
        .run()
        .map(|report| report.total_net_profit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SessionError;
    use crate::events::NullSink;
    use crate::payout::FixedMultiplier;

    #[test]
    fn test_fixed_multiplier_profit() {
        let mut runner = SessionRunner::new(SessionConfig::new(1, 3, 100.0))
            .with_multiplier(FixedMultiplier(1.25))
            .with_seed(42);

        let report = runner.run_with_sink(&mut NullSink).unwrap();
        assert!((report.total_net_profit - 95.3125).abs() < 1e-9);
        assert_eq!(report.seed, 42);
        assert_eq!(report.rounds.len(), 1);
    }

    #[test]
    fn test_seeded_sessions_repeat() {
        let config = SessionConfig::new(4, 6, 50.0).with_seed(7);
        let a = SessionRunner::new(config.clone()).run_with_sink(&mut NullSink).unwrap();
        let b = SessionRunner::new(config).run_with_sink(&mut NullSink).unwrap();

        assert_eq!(a.total_net_profit, b.total_net_profit);
        for (ra, rb) in a.rounds.iter().zip(&b.rounds) {
            assert_eq!(ra.layout, rb.layout);
            assert_eq!(ra.rows, rb.rows);
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(matches!(
            run_session(0, 3, 100.0),
            Err(SessionError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            run_session(1, 0, 100.0),
            Err(SessionError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_run_session_defaults() {
        // Every uniform multiplier is at least 1.2, so each round profits
        let profit = run_session(3, 2, 10.0).unwrap();
        assert!(profit >= 3.0 * (10.0 * 1.2 * 1.2 - 10.0) - 1e-9);
        assert!(profit <= 3.0 * (10.0 * 1.3 * 1.3 - 10.0) + 1e-9);
    }

    #[test]
    fn test_totals_without_round_summaries() {
        let config = SessionConfig::new(50, 4, 10.0).with_seed(3);
        let kept = SessionRunner::new(config.clone())
            .with_multiplier(FixedMultiplier(1.5))
            .run_with_sink(&mut NullSink)
            .unwrap();
        let dropped = SessionRunner::new(config)
            .with_multiplier(FixedMultiplier(1.5))
            .with_round_summaries(false)
            .run_with_sink(&mut NullSink)
            .unwrap();

        assert_eq!(kept.rounds.len(), 50);
        assert!(dropped.rounds.is_empty());
        assert_eq!(dropped.total_net_profit, kept.total_net_profit);
        assert_eq!(dropped.stats.rounds_played, 50);
        assert_eq!(dropped.stats.rows_played, 200);
    }
}
