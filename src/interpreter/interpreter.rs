//! Interpreter - command loop
//!
//! One state, awaiting input. Each line is tokenized on whitespace, the first
//! token picks a command case-insensitively, and the command runs to
//! completion (including any paced rendering) before the next line is read.

use chrono::Local;
use tokio::io::{AsyncBufRead, Lines};
use tracing::{debug, info};

use crate::commands::{create_default_registry, Action, CommandContext, CommandRegistry, CommandResult};
use crate::fs::GameFs;
use crate::interpreter::errors::GameError;
use crate::interpreter::types::{Flow, InterpreterOptions, ParsedLine};
use crate::render::{prompt_line, welcome_banner, Line, Renderer, Tone};
use crate::session::Session;

/// Split a raw line into command name and arguments. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    let line = line.trim();
    let mut tokens = line.split_whitespace().map(str::to_string);
    let name = tokens.next()?;
    let rest = line[name.len()..].trim_start().to_string();
    Some(ParsedLine {
        name,
        args: tokens.collect(),
        rest,
    })
}

fn unknown_command(name: &str) -> CommandResult {
    CommandResult::line(
        Line::error(format!("Command not found: {}.", name))
            .push(" Type 'help' for a list of commands.", Tone::Plain),
    )
}

pub struct Interpreter<R> {
    session: Session,
    fs: GameFs,
    registry: CommandRegistry,
    renderer: R,
    options: InterpreterOptions,
}

impl<R: Renderer> Interpreter<R> {
    pub fn new(session: Session, fs: GameFs, renderer: R, options: InterpreterOptions) -> Self {
        Self {
            session,
            fs,
            registry: create_default_registry(),
            renderer,
            options,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Run one line against the session without rendering anything.
    pub fn dispatch(&mut self, line: &str) -> CommandResult {
        let Some(parsed) = parse_line(line) else {
            return CommandResult::empty();
        };

        match self.registry.get(&parsed.name) {
            Some(cmd) => {
                debug!(command = cmd.name(), args = ?parsed.args, "dispatch");
                cmd.execute(CommandContext {
                    args: parsed.args,
                    rest: parsed.rest,
                    session: &mut self.session,
                    fs: &self.fs,
                })
            }
            None => {
                debug!(command = %parsed.name, "unknown command");
                unknown_command(&parsed.name)
            }
        }
    }

    pub async fn render(&mut self, result: &CommandResult) -> Result<(), GameError> {
        for line in &result.lines {
            if result.reveal {
                self.renderer.reveal_line(line).await?;
            } else {
                self.renderer.write_line(line).await?;
            }
        }
        Ok(())
    }

    pub async fn show_banner(&mut self) -> Result<(), GameError> {
        let lines = welcome_banner(self.session.player_name(), Local::now().naive_local());
        self.renderer.write_lines(&lines).await?;
        Ok(())
    }

    /// Dispatch, render, and carry out the result's action.
    pub async fn step(&mut self, line: &str) -> Result<Flow, GameError> {
        let result = self.dispatch(line);
        self.render(&result).await?;

        match result.action {
            Action::Continue => Ok(Flow::Continue),
            Action::Clear => {
                self.renderer.clear().await?;
                self.show_banner().await?;
                Ok(Flow::Continue)
            }
            Action::Exit => {
                info!(player = %self.session.player_name(), "session ended");
                tokio::time::sleep(self.options.exit_delay).await;
                self.renderer.clear().await?;
                Ok(Flow::Exit)
            }
        }
    }

    /// Prompt and execute lines until `exit`. End of input counts as `exit`.
    pub async fn run<I>(&mut self, input: &mut Lines<I>) -> Result<(), GameError>
    where
        I: AsyncBufRead + Unpin,
    {
        loop {
            let prompt = prompt_line(&self.session);
            self.renderer.write_prompt(&prompt).await?;

            let line = match input.next_line().await? {
                Some(line) => line,
                None => "exit".to_string(),
            };

            if self.step(&line).await? == Flow::Exit {
                return Ok(());
            }
        }
    }
}
