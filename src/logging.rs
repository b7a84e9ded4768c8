use crate::error::{PickError, PickResult};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Installs a file-backed subscriber when a log file is given. Standard
/// error is the drawing surface, so logs never go there.
pub fn init(log_file: Option<&Path>, level: &str) -> PickResult<bool> {
    let Some(path) = log_file else {
        return Ok(false);
    };

    let filter = parse_filter(level)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| PickError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| PickError::Logging(err.to_string()))?;
    Ok(true)
}

fn parse_filter(level: &str) -> PickResult<EnvFilter> {
    let directives = level.trim();
    let directives = if directives.is_empty() {
        crate::config::DEFAULT_LOG_LEVEL
    } else {
        directives
    };
    EnvFilter::try_new(directives)
        .map_err(|err| PickError::Logging(format!("invalid log level `{directives}`: {err}")))
}
