//! Entry point for the order simulator.

use anyhow::Context as _;
use clap::Parser;
use order_sim::cli::{Shell, SimulatorArgs};
use order_sim::order::new_order_with_initial;
use std::io;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let args = SimulatorArgs::parse();
    init_tracing(&args.log_level);

    let order = new_order_with_initial(&args.initial).context("failed to set up the order")?;
    tracing::info!(order = %order.id(), initial = %args.initial, "order simulator started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(order, stdin.lock(), stdout.lock(), args.shell_config());
    shell.run().context("shell terminated unexpectedly")?;

    tracing::info!("order simulator stopped");
    Ok(())
}

/// Log to stderr so shell output on stdout stays clean.
fn init_tracing(default_directive: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}
