use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub width: u16,
    pub height: u16,
}

impl TerminalSize {
    pub const FALLBACK: Self = Self {
        width: 80,
        height: 24,
    };

    /// Use the reported dimensions only when both are positive.
    pub fn from_reported(reported: io::Result<(u16, u16)>) -> Self {
        match reported {
            Ok((width, height)) if width > 0 && height > 0 => Self { width, height },
            Ok((width, height)) => {
                log::debug!("terminal reported {width}x{height}, using fallback size");
                Self::FALLBACK
            }
            Err(e) => {
                log::debug!("failed to query terminal size: {e}");
                Self::FALLBACK
            }
        }
    }
}

/// Current terminal size, or 80x24 if it cannot be determined
pub fn size() -> TerminalSize {
    TerminalSize::from_reported(terminal::size())
}

/// Holds raw mode for the lifetime of the interactive session.
///
/// Dropping the guard clears the screen, shows the cursor and leaves raw mode, so the
/// terminal is restored on every exit path including errors and panics that unwind.
pub struct RawModeGuard<W: Write> {
    out: W,
}

impl<W: Write> RawModeGuard<W> {
    pub fn enter(mut out: W) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(out, Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self { out })
    }
}

impl<W: Write> Drop for RawModeGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.out, Clear(ClearType::All), Show) {
            log::warn!("failed to restore cursor: {e}");
        }
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("failed to leave raw mode: {e}");
        }
    }
}
