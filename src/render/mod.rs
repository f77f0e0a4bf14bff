//! Rendering
//!
//! Everything the player sees goes through a [`Renderer`]. The game core only
//! produces [`Line`] values; colors, pacing and screen clearing live here.

pub mod banner;
pub mod buffer;
pub mod terminal;
pub mod types;

use async_trait::async_trait;
use std::io;

pub use banner::{prompt_line, welcome_banner};
pub use buffer::BufferRenderer;
pub use terminal::TerminalRenderer;
pub use types::{Line, Span, Tone};

#[async_trait]
pub trait Renderer: Send {
    async fn write_line(&mut self, line: &Line) -> io::Result<()>;

    /// Write a line with a character-by-character reveal, where supported.
    async fn reveal_line(&mut self, line: &Line) -> io::Result<()> {
        self.write_line(line).await
    }

    /// Write without a trailing newline and flush.
    async fn write_prompt(&mut self, line: &Line) -> io::Result<()>;

    async fn clear(&mut self) -> io::Result<()>;

    async fn write_lines(&mut self, lines: &[Line]) -> io::Result<()> {
        for line in lines {
            self.write_line(line).await?;
        }
        Ok(())
    }
}
