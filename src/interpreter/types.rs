//! Interpreter Types

use std::time::Duration;

/// A tokenized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// First token as typed.
    pub name: String,
    pub args: Vec<String>,
    /// Everything after the command token, inner spacing intact.
    pub rest: String,
}

/// Whether the loop keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone)]
pub struct InterpreterOptions {
    /// Pause between the farewell message and the final clear.
    pub exit_delay: Duration,
}

impl Default for InterpreterOptions {
    fn default() -> Self {
        Self {
            exit_delay: Duration::from_secs(2),
        }
    }
}
