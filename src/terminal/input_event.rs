use std::ops::BitOr;

const ESC: u8 = 0x1b;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Unknown,
    Char(char),
    Enter,
    Tab,
    Esc,
    Backspace,
    Delete,
    Home,
    End,
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyModifiers(u8);

impl KeyModifiers {
    pub const NONE: Self = Self(0);
    pub const SHIFT: Self = Self(1 << 0);
    pub const CONTROL: Self = Self(1 << 1);
    pub const ALT: Self = Self(1 << 2);

    pub fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }
}

impl BitOr for KeyModifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(ch: char) -> Self {
        Self::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }
}

/// Turns raw terminal bytes into key events.
///
/// Reads may split an escape sequence anywhere; the unfinished tail is kept
/// until the next `feed` so `ESC [ A` is never mistaken for a lone escape
/// followed by printable `[` and `A`.
#[derive(Debug, Default, Clone)]
pub struct KeyDecoder {
    pending: Vec<u8>,
}

enum Decoded {
    Key(KeyEvent, usize),
    Incomplete,
}

impl KeyDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, bytes: &[u8]) -> Vec<KeyEvent> {
        self.pending.extend_from_slice(bytes);

        let mut events = Vec::new();
        let mut consumed = 0;
        while consumed < self.pending.len() {
            match decode_one(&self.pending[consumed..]) {
                Decoded::Key(event, used) => {
                    events.push(event);
                    consumed += used;
                }
                Decoded::Incomplete => break,
            }
        }
        self.pending.drain(..consumed);
        events
    }
}

fn decode_one(bytes: &[u8]) -> Decoded {
    let first = bytes[0];
    let event = match first {
        ESC => return decode_escape(bytes),
        b'\r' | b'\n' => KeyEvent::plain(KeyCode::Enter),
        b'\t' => KeyEvent::plain(KeyCode::Tab),
        0x7f | 0x08 => KeyEvent::plain(KeyCode::Backspace),
        0x01..=0x1a => KeyEvent::ctrl((b'a' + first - 1) as char),
        0x20..=0x7e => KeyEvent::plain(KeyCode::Char(first as char)),
        _ => KeyEvent::plain(KeyCode::Unknown),
    };
    Decoded::Key(event, 1)
}

fn decode_escape(bytes: &[u8]) -> Decoded {
    let Some(&second) = bytes.get(1) else {
        return Decoded::Incomplete;
    };
    match second {
        b'[' => decode_csi(bytes),
        b'O' => match bytes.get(2) {
            None => Decoded::Incomplete,
            Some(&last) => Decoded::Key(KeyEvent::plain(final_key(last)), 3),
        },
        _ => Decoded::Key(KeyEvent::plain(KeyCode::Esc), 1),
    }
}

// ESC [ <params 0x30-0x3f> <intermediates 0x20-0x2f> <final 0x40-0x7e>
fn decode_csi(bytes: &[u8]) -> Decoded {
    let mut idx = 2;
    while let Some(&byte) = bytes.get(idx) {
        match byte {
            0x20..=0x3f => idx += 1,
            0x40..=0x7e => {
                let params = &bytes[2..idx];
                let code = if byte == b'~' {
                    tilde_key(params)
                } else {
                    final_key(byte)
                };
                return Decoded::Key(KeyEvent::new(code, csi_modifiers(params)), idx + 1);
            }
            // Broken sequence: drop what was read so far and let the
            // offending byte decode on its own.
            _ => return Decoded::Key(KeyEvent::plain(KeyCode::Unknown), idx),
        }
    }
    Decoded::Incomplete
}

fn final_key(byte: u8) -> KeyCode {
    match byte {
        b'A' => KeyCode::Up,
        b'B' => KeyCode::Down,
        b'C' => KeyCode::Right,
        b'D' => KeyCode::Left,
        b'H' => KeyCode::Home,
        b'F' => KeyCode::End,
        _ => KeyCode::Unknown,
    }
}

fn tilde_key(params: &[u8]) -> KeyCode {
    match csi_param(params, 0) {
        Some(1 | 7) => KeyCode::Home,
        Some(3) => KeyCode::Delete,
        Some(4 | 8) => KeyCode::End,
        Some(5) => KeyCode::PageUp,
        Some(6) => KeyCode::PageDown,
        _ => KeyCode::Unknown,
    }
}

// xterm encodes modifiers as `1 + bitmask` in the second parameter.
fn csi_modifiers(params: &[u8]) -> KeyModifiers {
    let Some(mask) = csi_param(params, 1).and_then(|value| value.checked_sub(1)) else {
        return KeyModifiers::NONE;
    };
    let mut modifiers = KeyModifiers::NONE;
    if mask & 1 != 0 {
        modifiers = modifiers | KeyModifiers::SHIFT;
    }
    if mask & 2 != 0 {
        modifiers = modifiers | KeyModifiers::ALT;
    }
    if mask & 4 != 0 {
        modifiers = modifiers | KeyModifiers::CONTROL;
    }
    modifiers
}

fn csi_param(params: &[u8], position: usize) -> Option<u16> {
    let field = params.split(|&b| b == b';').nth(position)?;
    std::str::from_utf8(field).ok()?.parse().ok()
}
