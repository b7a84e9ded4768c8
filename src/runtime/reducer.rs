use crate::core::state::SelectionState;
use crate::runtime::command::Command;
use crate::runtime::effect::{Effect, Outcome};

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut SelectionState, command: Command) -> Vec<Effect> {
        match command {
            Command::InsertChar(ch) => {
                state.insert_char(ch);
                vec![Effect::RequestRender]
            }
            Command::DeletePrevChar => {
                state.delete_char();
                vec![Effect::RequestRender]
            }
            Command::SelectPrev => {
                state.select_prev();
                vec![Effect::RequestRender]
            }
            Command::SelectNext => {
                state.select_next();
                vec![Effect::RequestRender]
            }
            // Nothing to confirm while the query matches nothing.
            Command::Confirm => match state.selected_text() {
                Some(text) => vec![Effect::Exit(Outcome::Selected(text.to_string()))],
                None => vec![],
            },
            Command::Cancel => vec![Effect::Exit(Outcome::Cancelled)],
            Command::Noop => vec![],
        }
    }
}
