use std::process::ExitCode;

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Selected(String),
    Cancelled,
    /// Matches were printed without an interactive session.
    Listed,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    RequestRender,
    Exit(Outcome),
}
