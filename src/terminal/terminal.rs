#[cfg(unix)]
use crate::terminal::signals::{CANCEL_SIGNALS, SignalWatch};
use crate::terminal::surface::{Console, InputSource, Surface};
use crate::ui::style::Color;
use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::queue;
use crossterm::style::{
    Attribute, Color as CrosstermColor, Print, ResetColor, SetAttribute, SetForegroundColor,
};
use crossterm::terminal::{self, Clear, ClearType};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Read, Stderr, Write};
#[cfg(unix)]
use std::os::fd::AsRawFd;

/// Keyboard input always comes from the controlling terminal, since standard
/// input is the candidate pipe.
pub const TTY_PATH: &str = "/dev/tty";

const FALLBACK_WIDTH: u16 = 80;

/// Holds the terminal in raw mode; the previous mode comes back on drop.
#[derive(Debug)]
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        tracing::debug!("raw mode enabled");
        Ok(Self { active: true })
    }

    pub fn release(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        terminal::disable_raw_mode()?;
        tracing::debug!("raw mode disabled");
        Ok(())
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = self.release() {
            tracing::warn!(error = %err, "failed to restore terminal mode");
        }
    }
}

/// Draws on standard error and reads keys from the tty device.
///
/// SIGINT, SIGTERM and SIGHUP surface as an `Interrupted` read, so the
/// session unwinds and raw mode is released on the way out.
pub struct Terminal {
    out: BufWriter<Stderr>,
    tty: File,
    width: u16,
    // Declared before `signals` so raw mode is released first on drop.
    raw: RawModeGuard,
    #[cfg(unix)]
    signals: SignalWatch,
}

impl Terminal {
    pub fn open() -> io::Result<Self> {
        let tty = OpenOptions::new().read(true).open(TTY_PATH)?;
        #[cfg(unix)]
        let signals = SignalWatch::register(&CANCEL_SIGNALS)?;
        let raw = RawModeGuard::acquire()?;
        let width = terminal::size()
            .map(|(width, _)| width)
            .unwrap_or(FALLBACK_WIDTH);
        Ok(Self {
            out: BufWriter::new(io::stderr()),
            tty,
            width,
            raw,
            #[cfg(unix)]
            signals,
        })
    }
}

impl Surface for Terminal {
    fn width(&mut self) -> u16 {
        if let Ok((width, _)) = terminal::size() {
            self.width = width;
        }
        self.width
    }

    fn move_to_column(&mut self, col: u16) -> io::Result<()> {
        queue!(self.out, MoveToColumn(col))
    }

    fn move_up(&mut self, rows: u16) -> io::Result<()> {
        // CSI 0 A still moves one row on most terminals.
        if rows == 0 {
            return Ok(());
        }
        queue!(self.out, MoveUp(rows))
    }

    fn next_line(&mut self) -> io::Result<()> {
        // Raw mode turns off output processing, so the carriage return is explicit.
        self.out.write_all(b"\r\n")
    }

    fn clear_line(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::UntilNewLine))
    }

    fn set_foreground(&mut self, color: Color) -> io::Result<()> {
        queue!(self.out, SetForegroundColor(map_color(color)))
    }

    fn set_inverted(&mut self, inverted: bool) -> io::Result<()> {
        let attribute = if inverted {
            Attribute::Reverse
        } else {
            Attribute::NoReverse
        };
        queue!(self.out, SetAttribute(attribute))
    }

    fn reset_style(&mut self) -> io::Result<()> {
        queue!(self.out, SetAttribute(Attribute::Reset), ResetColor)
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl InputSource for Terminal {
    fn read_bytes(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        #[cfg(unix)]
        self.signals.wait_readable(self.tty.as_raw_fd())?;
        self.tty.read(buf)
    }
}

impl Console for Terminal {
    fn restore(&mut self) -> io::Result<()> {
        let flushed = self.out.flush();
        let released = self.raw.release();
        flushed.and(released)
    }
}

fn map_color(color: Color) -> CrosstermColor {
    match color {
        Color::Default => CrosstermColor::Reset,
        Color::Yellow => CrosstermColor::DarkYellow,
    }
}
