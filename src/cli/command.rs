//! Parsing of shell input lines.

use crate::order::OrderOperation;

/// One parsed line of shell input.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Help,
    States,
    Current,
    /// `set` / `state`, optionally with the target name inline
    Set(Option<String>),
    /// An order operation plus any trailing words as arguments
    Operation(OrderOperation, Vec<String>),
    History { json: bool },
    Exit,
    Empty,
    Unknown(String),
}

impl Command {
    /// Parse a line. Never fails: unrecognized input becomes `Unknown`.
    pub fn parse(line: &str) -> Self {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Self::Empty;
        };
        let rest: Vec<String> = words.map(str::to_string).collect();

        // Fixed commands take no arguments; anything after them is a typo.
        match head {
            "help" if rest.is_empty() => Self::Help,
            "states" if rest.is_empty() => Self::States,
            "current" if rest.is_empty() => Self::Current,
            "set" | "state" => Self::Set(rest.into_iter().next()),
            "create" => Self::Operation(OrderOperation::Create, rest),
            "pay" => Self::Operation(OrderOperation::Pay, rest),
            "cancel" => Self::Operation(OrderOperation::Cancel, rest),
            "ship" => Self::Operation(OrderOperation::Ship, rest),
            "history" => Self::History {
                json: rest.first().is_some_and(|arg| arg == "json"),
            },
            "exit" if rest.is_empty() => Self::Exit,
            _ => Self::Unknown(line.trim().to_string()),
        }
    }
}
