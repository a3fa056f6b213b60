//! Smoke runner: drive one simulated website user against a host.
//!
//! Real load (many users, ramp-up, statistics) belongs to a load engine; this
//! binary only checks that the behavior works end to end.

use anyhow::Context;
use clap::Parser;
use http_load_scenario::prelude::*;

#[derive(Parser)]
#[command(
    name = "website-user",
    about = "Run one simulated website user: weighted GET / and POST / with random pauses",
    version
)]
struct Cli {
    /// Base URL of the system under test
    #[arg(long, env = "LOAD_HOST")]
    host: String,

    /// Number of weighted iterations after the on-start request
    #[arg(long, short = 'n', env = "LOAD_ITERATIONS", default_value = "10")]
    iterations: usize,

    /// Seed for action selection and pauses
    #[arg(long, env = "LOAD_SEED")]
    seed: Option<u64>,

    /// Sample pauses but do not sleep
    #[arg(long)]
    no_wait: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .init();

    let behavior = website_user().context("invalid website user behavior")?;
    let mut user =
        SimulatedUser::new(behavior, Reqwest::new(&cli.host), DefaultRecorder::new())?;
    if let Some(seed) = cli.seed {
        user = user.with_seed(seed);
    }
    if cli.no_wait {
        user = user.without_sleeping();
    }

    tracing::info!(host = %cli.host, iterations = cli.iterations, "starting simulated user");
    user.run(cli.iterations).await?;

    let outcomes = user.into_output();
    for outcome in &outcomes {
        match (outcome.status, &outcome.error) {
            (Some(status), _) => println!(
                "{:<14} {:<4} {} {} {:?}",
                outcome.action, outcome.method, outcome.path, status, outcome.elapsed
            ),
            (None, Some(error)) => println!(
                "{:<14} {:<4} {} failed: {}",
                outcome.action, outcome.method, outcome.path, error
            ),
            (None, None) => {}
        }
    }

    let failed = outcomes.iter().filter(|o| !o.is_success()).count();
    tracing::info!(issued = outcomes.len(), failed, "simulated user finished");

    Ok(())
}
