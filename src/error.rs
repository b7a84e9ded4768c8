use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type PickResult<T> = Result<T, PickError>;

#[derive(Error, Debug)]
pub enum PickError {
    #[error("no input")]
    NoInput,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("logging: {0}")]
    Logging(String),
}
