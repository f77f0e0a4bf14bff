//! ANSI terminal renderer.

use async_trait::async_trait;
use owo_colors::{OwoColorize, Style};
use std::io;
use std::time::Duration;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::{Line, Renderer, Span, Tone};

/// Clear screen and move the cursor home.
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

pub struct TerminalRenderer<W = tokio::io::Stdout> {
    out: W,
    color: bool,
    /// Pause between revealed characters. Zero disables the effect.
    char_delay: Duration,
}

impl TerminalRenderer {
    pub fn stdout(color: bool, char_delay: Duration) -> Self {
        Self::new(tokio::io::stdout(), color, char_delay)
    }
}

impl<W> TerminalRenderer<W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(out: W, color: bool, char_delay: Duration) -> Self {
        Self {
            out,
            color,
            char_delay,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        match style_for(tone) {
            Some(style) if self.color => format!("{}", text.style(style)),
            _ => text.to_string(),
        }
    }

    fn paint_span(&self, span: &Span) -> String {
        self.paint(&span.text, span.tone)
    }
}

fn style_for(tone: Tone) -> Option<Style> {
    match tone {
        Tone::Plain => None,
        Tone::Error => Some(Style::new().red()),
        Tone::Warning => Some(Style::new().yellow()),
        Tone::Success => Some(Style::new().green()),
        Tone::Directory => Some(Style::new().blue()),
        Tone::Accent => Some(Style::new().cyan()),
    }
}

#[async_trait]
impl<W> Renderer for TerminalRenderer<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn write_line(&mut self, line: &Line) -> io::Result<()> {
        let mut rendered: String = line.spans.iter().map(|s| self.paint_span(s)).collect();
        rendered.push('\n');
        self.out.write_all(rendered.as_bytes()).await?;
        self.out.flush().await
    }

    async fn reveal_line(&mut self, line: &Line) -> io::Result<()> {
        if self.char_delay.is_zero() {
            return self.write_line(line).await;
        }
        for span in &line.spans {
            let mut buf = [0u8; 4];
            for ch in span.text.chars() {
                let painted = self.paint(ch.encode_utf8(&mut buf), span.tone);
                self.out.write_all(painted.as_bytes()).await?;
                self.out.flush().await?;
                tokio::time::sleep(self.char_delay).await;
            }
        }
        self.out.write_all(b"\n").await?;
        self.out.flush().await
    }

    async fn write_prompt(&mut self, line: &Line) -> io::Result<()> {
        let rendered: String = line.spans.iter().map(|s| self.paint_span(s)).collect();
        self.out.write_all(rendered.as_bytes()).await?;
        self.out.flush().await
    }

    async fn clear(&mut self) -> io::Result<()> {
        self.out.write_all(CLEAR_SCREEN.as_bytes()).await?;
        self.out.flush().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_plain_output_without_color() {
        let mut renderer = TerminalRenderer::new(Vec::new(), false, Duration::ZERO);
        let line = Line::error("boom").push(" tail", Tone::Plain);
        renderer.write_line(&line).await.unwrap();
        renderer.write_prompt(&Line::plain("p@:/$ ")).await.unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(out, "boom tail\np@:/$ ");
    }

    #[tokio::test]
    async fn test_colored_output() {
        let mut renderer = TerminalRenderer::new(Vec::new(), true, Duration::ZERO);
        renderer.write_line(&Line::error("boom")).await.unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(out.starts_with("\x1b[31m"));
        assert!(out.contains("boom"));
        assert!(out.ends_with("\x1b[0m\n"));
    }

    #[tokio::test]
    async fn test_reveal_writes_every_character() {
        let mut renderer = TerminalRenderer::new(Vec::new(), false, Duration::from_millis(1));
        renderer.reveal_line(&Line::plain("héllo")).await.unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(out, "héllo\n");
    }

    #[tokio::test]
    async fn test_clear_sequence() {
        let mut renderer = TerminalRenderer::new(Vec::new(), true, Duration::ZERO);
        renderer.clear().await.unwrap();
        assert_eq!(renderer.into_inner(), CLEAR_SCREEN.as_bytes());
    }
}
