use fzpick::terminal::{Console, InputSource, Surface};
use fzpick::ui::style::Color;
use std::cell::Cell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

/// Console that replays canned keyboard reads and records what was drawn.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    reads: VecDeque<io::Result<Vec<u8>>>,
    pub drawn: String,
    restored: Rc<Cell<bool>>,
}

impl ScriptedConsole {
    pub fn new(chunks: &[&[u8]]) -> Self {
        Self {
            reads: chunks.iter().map(|chunk| Ok(chunk.to_vec())).collect(),
            ..Self::default()
        }
    }

    /// Queues a failing read after the scripted chunks.
    pub fn then_fail(mut self, err: io::Error) -> Self {
        self.reads.push_back(Err(err));
        self
    }

    /// Flag that flips once `restore` has been called, readable after the
    /// console itself has been moved into a session.
    pub fn restored_flag(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.restored)
    }
}

impl Surface for ScriptedConsole {
    fn width(&mut self) -> u16 {
        80
    }
    fn move_to_column(&mut self, _col: u16) -> io::Result<()> {
        Ok(())
    }
    fn move_up(&mut self, _rows: u16) -> io::Result<()> {
        Ok(())
    }
    fn next_line(&mut self) -> io::Result<()> {
        self.drawn.push('\n');
        Ok(())
    }
    fn clear_line(&mut self) -> io::Result<()> {
        Ok(())
    }
    fn set_foreground(&mut self, _color: Color) -> io::Result<()> {
        Ok(())
    }
    fn set_inverted(&mut self, _inverted: bool) -> io::Result<()> {
        Ok(())
    }
    fn reset_style(&mut self) -> io::Result<()> {
        Ok(())
    }
    fn print(&mut self, text: &str) -> io::Result<()> {
        self.drawn.push_str(text);
        Ok(())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl InputSource for ScriptedConsole {
    fn read_bytes(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.reads.pop_front() {
            Some(Ok(chunk)) => {
                buf[..chunk.len()].copy_from_slice(&chunk);
                Ok(chunk.len())
            }
            Some(Err(err)) => Err(err),
            None => Ok(0),
        }
    }
}

impl Console for ScriptedConsole {
    fn restore(&mut self) -> io::Result<()> {
        self.restored.set(true);
        Ok(())
    }
}
