//! Game Environment
//!
//! Main entry point for a play session.
//! Ties together the session, the file tree, the interpreter and a renderer.

use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::info;

use crate::fs::{default_world, GameFs};
use crate::interpreter::{GameError, Interpreter, InterpreterOptions};
use crate::render::{Line, Renderer, TerminalRenderer};
use crate::session::Session;

pub const NAME_PROMPT: &str = "Please enter a name: ";

/// Options for creating a game.
pub struct GameOptions {
    /// Skip the name prompt and use this name.
    pub player_name: Option<String>,
    /// Bypass every lock.
    pub dev_mode: bool,
    /// Reveal file contents one character at a time.
    pub animate: bool,
    /// Emit ANSI colors.
    pub color: bool,
    pub char_delay: Duration,
    pub exit_delay: Duration,
    /// File tree (defaults to the shipped world)
    pub world: Option<GameFs>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            player_name: None,
            dev_mode: false,
            animate: true,
            color: true,
            char_delay: Duration::from_millis(15),
            exit_delay: Duration::from_secs(2),
            world: None,
        }
    }
}

pub struct Game<R> {
    interpreter: Interpreter<R>,
    ask_name: bool,
}

impl Game<TerminalRenderer> {
    /// A game drawing to stdout.
    pub fn with_terminal(options: GameOptions) -> Self {
        let char_delay = if options.animate {
            options.char_delay
        } else {
            Duration::ZERO
        };
        let renderer = TerminalRenderer::stdout(options.color, char_delay);
        Self::new(options, renderer)
    }
}

impl<R: Renderer> Game<R> {
    pub fn new(options: GameOptions, renderer: R) -> Self {
        let mut session = Session::with_generated_name();
        session.dev_mode = options.dev_mode;

        let ask_name = match &options.player_name {
            Some(name) => !session.rename_once(name),
            None => true,
        };

        let fs = options.world.unwrap_or_else(default_world);
        let interpreter = Interpreter::new(
            session,
            fs,
            renderer,
            InterpreterOptions {
                exit_delay: options.exit_delay,
            },
        );

        Self {
            interpreter,
            ask_name,
        }
    }

    pub fn session(&self) -> &Session {
        self.interpreter.session()
    }

    pub fn interpreter(&self) -> &Interpreter<R> {
        &self.interpreter
    }

    pub fn into_renderer(self) -> R {
        self.interpreter.into_renderer()
    }

    /// Ask for a name, show the banner, and play until `exit` or end of input.
    pub async fn start<I>(&mut self, input: I) -> Result<(), GameError>
    where
        I: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        self.interpreter.renderer_mut().clear().await?;

        if self.ask_name {
            self.interpreter
                .renderer_mut()
                .write_prompt(&Line::plain(NAME_PROMPT))
                .await?;
            if let Some(name) = lines.next_line().await? {
                self.interpreter.session_mut().rename_once(&name);
            }
        }

        info!(
            player = %self.session().player_name(),
            dev_mode = self.session().dev_mode,
            "session started"
        );

        self.interpreter.show_banner().await?;
        self.interpreter.run(&mut lines).await
    }
}
