//! Command-line entry point: play a session and print the total net profit.

use anyhow::Result;
use clap::Parser;

use hazard_ladder::core::SessionConfig;
use hazard_ladder::session::SessionRunner;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of rounds to play.
    #[arg(short, long, default_value_t = 5)]
    rounds: u32,

    /// Deepest row played before cashing out (1..=10).
    #[arg(short, long, default_value_t = 5)]
    target_row: u8,

    /// Stake placed at the start of every round.
    #[arg(short, long, default_value_t = 50.0)]
    stake: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();
    let config = SessionConfig::new(args.rounds, args.target_row, args.stake);
    let report = SessionRunner::new(config).with_round_summaries(false).run()?;

    tracing::info!(
        rounds = report.stats.rounds_played,
        avg_round_net = report.stats.avg_round_net(),
        return_on_stake = report.stats.return_on_stake(),
        "session finished"
    );
    println!("{:.2}", report.total_net_profit);
    Ok(())
}
