use crate::ui::style::Color;
use std::io;

/// Drawing capabilities the renderer needs. Escape codes stay behind this
/// trait; implementations decide how each operation is emitted.
pub trait Surface {
    fn width(&mut self) -> u16;
    fn move_to_column(&mut self, col: u16) -> io::Result<()>;
    fn move_up(&mut self, rows: u16) -> io::Result<()>;
    fn next_line(&mut self) -> io::Result<()>;
    /// Clears from the cursor to the end of the current line.
    fn clear_line(&mut self) -> io::Result<()>;
    fn set_foreground(&mut self, color: Color) -> io::Result<()>;
    fn set_inverted(&mut self, inverted: bool) -> io::Result<()>;
    fn reset_style(&mut self) -> io::Result<()>;
    fn print(&mut self, text: &str) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
}

pub trait InputSource {
    /// Blocks until at least one byte is available. `Ok(0)` means end of input.
    fn read_bytes(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

/// An interactive terminal: a drawing surface plus keyboard input, with a
/// way to hand the device back in its original mode.
pub trait Console: Surface + InputSource {
    fn restore(&mut self) -> io::Result<()>;
}
