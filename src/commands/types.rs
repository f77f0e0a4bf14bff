// src/commands/types.rs
use crate::fs::GameFs;
use crate::render::Line;
use crate::session::Session;

/// What the interpreter does after rendering a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    Continue,
    /// Clear the display and replay the welcome banner.
    Clear,
    /// Say goodbye and stop reading input.
    Exit,
}

/// Command result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub lines: Vec<Line>,
    /// Render the lines with the character reveal effect.
    pub reveal: bool,
    pub action: Action,
}

impl CommandResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn lines(lines: Vec<Line>) -> Self {
        Self {
            lines,
            ..Self::default()
        }
    }

    pub fn line(line: Line) -> Self {
        Self::lines(vec![line])
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::line(Line::plain(text))
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::line(Line::error(text))
    }

    pub fn revealed(mut self) -> Self {
        self.reveal = true;
        self
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }

    /// Plain text of every line, joined by newlines.
    pub fn text(&self) -> String {
        self.lines.iter().map(Line::text).collect::<Vec<_>>().join("\n")
    }
}

/// Command context
pub struct CommandContext<'a> {
    pub args: Vec<String>,
    /// Raw text after the command name, for commands taking free text.
    pub rest: String,
    pub session: &'a mut Session,
    pub fs: &'a GameFs,
}

/// Command trait
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult;
}
