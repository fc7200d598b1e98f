use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

const LINE_ENDING: &str = "\r\n";

/// Accumulates partial writes into `current_line` and finished lines into `lines`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderBuffer {
    current_line: String,
    lines: Vec<String>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the line being built
    pub fn print(&mut self, text: &str) {
        self.current_line.push_str(text);
    }

    /// Finish the line being built with `text` appended
    pub fn puts(&mut self, text: &str) {
        let mut line = std::mem::take(&mut self.current_line);
        line.push_str(text);
        self.lines.push(line);
    }

    pub fn current_line(&self) -> &str {
        &self.current_line
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Drop everything buffered without writing it
    pub fn reset(&mut self) {
        self.current_line.clear();
        self.lines.clear();
    }

    /// Discard pending content and queue a screen wipe ahead of the next frame
    pub fn clear(&mut self, out: &mut impl Write) -> io::Result<()> {
        self.reset();
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))
    }

    /// Write the buffered lines, joined with `\r\n`, and empty the buffer.
    pub fn flush(&mut self, out: &mut impl Write) -> io::Result<()> {
        if !self.current_line.is_empty() {
            self.puts("");
        }
        out.write_all(self.lines.join(LINE_ENDING).as_bytes())?;
        self.reset();
        out.flush()
    }
}
