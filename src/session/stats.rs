//! Aggregate statistics over a session's rounds.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::Position;
use crate::round::RoundSummary;

/// Statistics collected while a session runs.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionStats {
    /// Rounds cashed out.
    pub rounds_played: u64,

    /// Rows resolved across all rounds.
    pub rows_played: u64,

    /// Sum of all payouts.
    pub total_payout: f64,

    /// Sum of all stakes.
    pub total_staked: f64,

    /// Best single-round net profit.
    pub best_round_net: Option<f64>,

    /// Worst single-round net profit.
    pub worst_round_net: Option<f64>,

    /// How often each position was selected.
    pub position_counts: FxHashMap<Position, u64>,
}

impl SessionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished round into the totals.
    pub fn record(&mut self, summary: &RoundSummary) {
        self.rounds_played += 1;
        self.rows_played += summary.rows.len() as u64;
        self.total_payout += summary.payout;
        self.total_staked += summary.stake;

        let net = summary.net_profit;
        self.best_round_net = Some(self.best_round_net.map_or(net, |b| b.max(net)));
        self.worst_round_net = Some(self.worst_round_net.map_or(net, |w| w.min(net)));

        for outcome in &summary.rows {
            *self.position_counts.entry(outcome.position).or_insert(0) += 1;
        }
    }

    /// Net profit across all recorded rounds.
    #[must_use]
    pub fn net_profit(&self) -> f64 {
        self.total_payout - self.total_staked
    }

    /// Average net profit per round.
    #[must_use]
    pub fn avg_round_net(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.net_profit() / self.rounds_played as f64
        }
    }

    /// Payout returned per unit staked.
    #[must_use]
    pub fn return_on_stake(&self) -> f64 {
        if self.total_staked == 0.0 {
            0.0
        } else {
            self.total_payout / self.total_staked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RoundId, RowId};
    use crate::layout::Layout;
    use crate::round::RowOutcome;

    fn summary(stake: f64, payout: f64, positions: &[u8]) -> RoundSummary {
        RoundSummary {
            round: 1,
            round_id: RoundId::from_token("00000000"),
            stake,
            layout: Layout::default(),
            rows: positions
                .iter()
                .enumerate()
                .map(|(i, &p)| RowOutcome {
                    row: RowId::new(i as u8 + 1),
                    hazard: Position::new(if p == 1 { 2 } else { 1 }),
                    position: Position::new(p),
                    multiplier: 1.25,
                    balance: 0.0,
                })
                .collect(),
            payout,
            net_profit: payout - stake,
        }
    }

    #[test]
    fn test_stats_default() {
        let stats = SessionStats::new();
        assert_eq!(stats.rounds_played, 0);
        assert_eq!(stats.avg_round_net(), 0.0);
        assert_eq!(stats.return_on_stake(), 0.0);
        assert!(stats.best_round_net.is_none());
    }

    #[test]
    fn test_stats_record() {
        let mut stats = SessionStats::new();
        stats.record(&summary(100.0, 150.0, &[1, 2, 1]));
        stats.record(&summary(100.0, 120.0, &[1]));

        assert_eq!(stats.rounds_played, 2);
        assert_eq!(stats.rows_played, 4);
        assert_eq!(stats.net_profit(), 70.0);
        assert_eq!(stats.avg_round_net(), 35.0);
        assert_eq!(stats.best_round_net, Some(50.0));
        assert_eq!(stats.worst_round_net, Some(20.0));
        assert_eq!(stats.position_counts[&Position::new(1)], 3);
        assert_eq!(stats.position_counts[&Position::new(2)], 1);
        assert!((stats.return_on_stake() - 1.35).abs() < 1e-9);
    }
}
