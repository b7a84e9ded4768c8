use crate::core::state::SelectionState;
use crate::runtime::effect::{Effect, Outcome};
use crate::runtime::key_bindings::KeyBindings;
use crate::runtime::reducer::Reducer;
use crate::terminal::{Console, KeyDecoder};
use crate::ui::renderer::Renderer;
use std::io;

const READ_CHUNK: usize = 0x100;

/// Blocking read → decode → reduce → redraw loop for one session.
pub struct Runtime<T> {
    state: SelectionState,
    terminal: T,
    key_bindings: KeyBindings,
    renderer: Renderer,
    decoder: KeyDecoder,
}

impl<T: Console> Runtime<T> {
    pub fn new(state: SelectionState, terminal: T, renderer: Renderer) -> Self {
        Self {
            state,
            terminal,
            key_bindings: KeyBindings::new(),
            renderer,
            decoder: KeyDecoder::new(),
        }
    }

    pub fn with_key_bindings(mut self, key_bindings: KeyBindings) -> Self {
        self.key_bindings = key_bindings;
        self
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }

    pub fn run(&mut self) -> io::Result<Outcome> {
        let run_result = (|| -> io::Result<Outcome> {
            self.render()?;
            self.next_outcome()
        })();

        // A failed clear must not replace how the session ended.
        if let Err(err) = self.renderer.clear(&mut self.terminal) {
            tracing::warn!(error = %err, "failed to clear prompt");
        }
        run_result
    }

    fn next_outcome(&mut self) -> io::Result<Outcome> {
        let mut buf = [0u8; READ_CHUNK];
        loop {
            let read = match self.terminal.read_bytes(&mut buf) {
                Ok(0) => {
                    tracing::debug!("terminal input closed");
                    return Ok(Outcome::Cancelled);
                }
                Ok(read) => read,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {
                    tracing::debug!("read interrupted");
                    return Ok(Outcome::Cancelled);
                }
                Err(err) => return Err(err),
            };

            let mut render_requested = false;
            for key in self.decoder.feed(&buf[..read]) {
                let command = self.key_bindings.resolve(key);
                tracing::trace!(?key, ?command, "key");
                for effect in Reducer::reduce(&mut self.state, command) {
                    match effect {
                        Effect::RequestRender => render_requested = true,
                        Effect::Exit(outcome) => return Ok(outcome),
                    }
                }
            }

            if render_requested {
                tracing::trace!(
                    query = self.state.query(),
                    matches = self.state.matches().len(),
                    selected = self.state.selected_index(),
                    "redraw"
                );
                self.render()?;
            }
        }
    }

    fn render(&mut self) -> io::Result<()> {
        self.renderer.render(&self.state, &mut self.terminal)
    }
}
