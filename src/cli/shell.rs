//! Interactive line-oriented loop over an order context.

use super::command::Command;
use super::text;
use crate::core::Operation;
use crate::order::{OrderContext, OrderOperation};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Presentation settings for the shell.
#[derive(Clone, Debug, PartialEq)]
pub struct ShellConfig {
    /// Text printed before reading each command
    pub prompt: String,
    /// Text printed before reading a state name for `set`
    pub state_prompt: String,
    /// Print the welcome banner before the first prompt
    pub show_banner: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "Command: ".to_string(),
            state_prompt: "New state: ".to_string(),
            show_banner: true,
        }
    }
}

/// Reads commands from `input` and writes results to `output` until `exit`
/// or end of input.
///
/// # Example
///
/// ```rust
/// use order_sim::cli::{Shell, ShellConfig};
/// use order_sim::order::new_order;
/// use std::io::Cursor;
///
/// let config = ShellConfig {
///     show_banner: false,
///     ..ShellConfig::default()
/// };
/// let mut shell = Shell::new(new_order(), Cursor::new("pay\nexit\n"), Vec::new(), config);
/// shell.run().unwrap();
///
/// assert_eq!(shell.order().get_current_state().unwrap(), "pay");
/// ```
pub struct Shell<R, W> {
    order: OrderContext,
    input: R,
    output: W,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(order: OrderContext, input: R, output: W, config: ShellConfig) -> Self {
        Self {
            order,
            input,
            output,
            config,
        }
    }

    pub fn order(&self) -> &OrderContext {
        &self.order
    }

    /// Consume the shell, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `exit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        if self.config.show_banner {
            writeln!(self.output, "{}", text::banner())?;
            writeln!(self.output)?;
        }

        while let Some(line) = read_line(&mut self.input, &mut self.output, &self.config.prompt)? {
            let command = Command::parse(&line);
            debug!(order = %self.order.id(), ?command, "command received");

            if command == Command::Exit {
                break;
            }
            if !self.execute(command)? {
                break;
            }
        }

        self.output.flush()
    }

    /// Execute one command. Returns `false` when input ran out mid-command.
    fn execute(&mut self, command: Command) -> io::Result<bool> {
        match command {
            Command::Help => writeln!(self.output, "{}", text::HELP)?,
            Command::States => {
                writeln!(self.output, "All states: {}", self.order.get_all_states().join(","))?
            }
            Command::Current => match self.order.get_current_state() {
                Ok(name) => writeln!(self.output, "Current state: {name}")?,
                Err(err) => writeln!(self.output, "{err}")?,
            },
            Command::Set(name) => {
                let name = match name {
                    Some(name) => name,
                    None => {
                        let prompt = &self.config.state_prompt;
                        match read_line(&mut self.input, &mut self.output, prompt)? {
                            Some(name) => name,
                            None => return Ok(false),
                        }
                    }
                };
                if let Err(err) = self.order.set_state(&name) {
                    writeln!(self.output, "{err}")?;
                }
            }
            Command::Operation(op, args) => self.dispatch(op, &args)?,
            Command::History { json } => self.print_history(json)?,
            Command::Empty => {}
            Command::Unknown(_) => writeln!(self.output, "Undefined command")?,
            Command::Exit => return Ok(false),
        }
        Ok(true)
    }

    fn dispatch(&mut self, op: OrderOperation, args: &[String]) -> io::Result<()> {
        match self.order.dispatch(&op, args) {
            Ok(outcome) => writeln!(self.output, "{}", outcome.message),
            Err(err) => {
                debug!(operation = op.name(), error = %err, "dispatch failed");
                writeln!(self.output, "{err}")
            }
        }
    }

    fn print_history(&mut self, json: bool) -> io::Result<()> {
        let history = self.order.history();
        if json {
            let rendered = serde_json::to_string_pretty(history)?;
            return writeln!(self.output, "{rendered}");
        }
        if history.is_empty() {
            writeln!(self.output, "No transitions yet")
        } else {
            writeln!(self.output, "History: {}", history.get_path().join(" -> "))
        }
    }
}

/// Print `prompt` and read one trimmed line. `None` at end of input.
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
