//! The interactive shell around an order context.
//!
//! Everything here is thin I/O: parse a line, call the context, print the
//! result. The shell works over any `BufRead`/`Write` pair so sessions can
//! be driven from tests.

mod args;
mod command;
mod shell;
pub mod text;

pub use args::SimulatorArgs;
pub use command::Command;
pub use shell::{Shell, ShellConfig};
