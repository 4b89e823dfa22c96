//! Command-line arguments for the simulator binary.

use super::shell::ShellConfig;
use clap::Parser;

/// Command-line arguments for the order simulator.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "order-sim", author, version, about, long_about = None)]
pub struct SimulatorArgs {
    /// State the order starts in
    #[arg(short, long, default_value = "create")]
    pub initial: String,

    /// Do not print the welcome banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,
}

impl SimulatorArgs {
    /// Shell settings derived from the flags.
    pub fn shell_config(&self) -> ShellConfig {
        ShellConfig {
            show_banner: !self.quiet,
            ..ShellConfig::default()
        }
    }
}
