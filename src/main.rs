//! Terminal blackjack against the house.

use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use bjpot::{Session, StopReason, TableOptions};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Play blackjack against the dealer with a pot that carries over between
/// rounds.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Seed for shuffling (defaults to the current time).
    #[arg(long)]
    seed: Option<u64>,

    /// Starting pot; prompts when omitted.
    #[arg(long)]
    bankroll: Option<f64>,

    /// Payout ratio for a two-card blackjack.
    #[arg(long, default_value_t = 1.5, value_parser = parse_ratio)]
    natural_pays: f64,
}

fn parse_ratio(arg: &str) -> Result<f64, String> {
    let ratio: f64 = arg.parse().map_err(|err| format!("{err}"))?;
    TableOptions::default()
        .with_blackjack_pays(ratio)
        .validate()
        .map_err(|err| err.to_string())?;
    Ok(ratio)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let options = TableOptions::default().with_blackjack_pays(args.natural_pays);

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut session = Session::new(stdin, stdout, options, seed);
    if let Some(bankroll) = args.bankroll {
        session = session.with_bankroll(bankroll);
    }

    match session.run() {
        Ok(summary) => {
            if summary.reason == StopReason::OutOfMoney {
                println!("Game over after {} round(s).", summary.rounds_played);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "session aborted");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
