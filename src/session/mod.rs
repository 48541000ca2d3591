//! Session runner.
//!
//! A session plays `round_count` independent rounds one after another and
//! sums `payout - stake` over them. Rounds never overlap: each round's
//! ledger is cashed out and dropped before the next round is created.
//!
//! ## Usage
//!
//! ```rust
//! use hazard_ladder::core::SessionConfig;
//! use hazard_ladder::events::SessionEvent;
//! use hazard_ladder::payout::FixedMultiplier;
//! use hazard_ladder::session::SessionRunner;
//!
//! let mut events: Vec<SessionEvent> = Vec::new();
//! let report = SessionRunner::new(SessionConfig::new(1, 3, 100.0))
//!     .with_multiplier(FixedMultiplier(1.25))
//!     .with_seed(42)
//!     .run_with_sink(&mut events)
//!     .unwrap();
//!
//! assert!((report.total_net_profit - 95.3125).abs() < 1e-9);
//! assert!(matches!(events.last(), Some(SessionEvent::SessionComplete { .. })));
//! ```

pub mod runner;
pub mod stats;

pub use runner::{run_session, SessionReport, SessionRunner};
pub use stats::SessionStats;
