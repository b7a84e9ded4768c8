use crate::runtime::command::Command;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeyBindings {
    bindings: HashMap<KeyBinding, Command>,
}

impl KeyBindings {
    pub fn new() -> Self {
        let mut manager = Self::default();
        manager.install_defaults();
        manager
    }

    pub fn bind(&mut self, key: KeyBinding, command: Command) {
        self.bindings.insert(key, command);
    }

    /// Explicit bindings win; otherwise printable ASCII inserts itself and
    /// anything else is ignored.
    pub fn resolve(&self, event: KeyEvent) -> Command {
        if let Some(command) = self.bindings.get(&KeyBinding::from_event(event)) {
            return *command;
        }
        match event.code {
            KeyCode::Char(ch)
                if is_printable(ch)
                    && !event
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Command::InsertChar(ch)
            }
            _ => Command::Noop,
        }
    }

    fn install_defaults(&mut self) {
        self.bind(KeyBinding::key(KeyCode::Enter), Command::Confirm);
        self.bind(KeyBinding::key(KeyCode::Backspace), Command::DeletePrevChar);
        self.bind(KeyBinding::key(KeyCode::Up), Command::SelectPrev);
        self.bind(KeyBinding::key(KeyCode::Down), Command::SelectNext);
        self.bind(KeyBinding::ctrl(KeyCode::Char('c')), Command::Cancel);
    }
}

fn is_printable(ch: char) -> bool {
    (' '..='~').contains(&ch)
}
