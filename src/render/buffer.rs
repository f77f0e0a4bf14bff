use async_trait::async_trait;
use std::io;

use super::{Line, Renderer};

/// Marker recorded in place of a screen clear.
pub const CLEAR_MARKER: &str = "<clear>";

/// Collects rendered text in memory.
#[derive(Debug, Default)]
pub struct BufferRenderer {
    pub output: Vec<String>,
    pub revealed: usize,
}

impl BufferRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.output.join("\n")
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.output.iter().any(|l| l.contains(needle))
    }
}

#[async_trait]
impl Renderer for BufferRenderer {
    async fn write_line(&mut self, line: &Line) -> io::Result<()> {
        self.output.push(line.text());
        Ok(())
    }

    async fn reveal_line(&mut self, line: &Line) -> io::Result<()> {
        self.revealed += 1;
        self.write_line(line).await
    }

    async fn write_prompt(&mut self, line: &Line) -> io::Result<()> {
        self.output.push(line.text());
        Ok(())
    }

    async fn clear(&mut self) -> io::Result<()> {
        self.output.push(CLEAR_MARKER.to_string());
        Ok(())
    }
}
