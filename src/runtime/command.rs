#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    InsertChar(char),
    DeletePrevChar,
    SelectPrev,
    SelectNext,
    Confirm,
    Cancel,
    Noop,
}
