//! Command-line options. Nothing is read from files or the environment.

use crate::core::state::DEFAULT_VISIBLE_ROWS;
use crate::ui::renderer::RendererConfig;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Parser, Clone, PartialEq, Eq)]
#[command(
    name = "fzpick",
    about = "Pick one line from standard input with fuzzy matching",
    version
)]
pub struct Config {
    /// Number of candidate rows shown below the prompt
    #[arg(short = 'l', long = "lines", value_name = "N", default_value_t = DEFAULT_VISIBLE_ROWS, value_parser = parse_visible_rows)]
    pub lines: usize,

    /// Query to start with
    #[arg(short = 'q', long = "query", value_name = "QUERY", default_value = "")]
    pub query: String,

    /// Print the ranked matches for QUERY and exit without prompting
    #[arg(short = 'e', long = "show-matches", value_name = "QUERY")]
    pub show_matches: Option<String>,

    /// Prefix each match with its score
    #[arg(short = 's', long = "show-scores", default_value_t = false)]
    pub show_scores: bool,

    /// Print --show-matches output as JSON
    #[arg(long = "json", default_value_t = false, requires = "show_matches")]
    pub json: bool,

    /// Write diagnostics to this file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `fzpick=trace`
    #[arg(long = "log-level", value_name = "LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lines: DEFAULT_VISIBLE_ROWS,
            query: String::new(),
            show_matches: None,
            show_scores: false,
            json: false,
            log_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    pub fn renderer_config(&self) -> RendererConfig {
        RendererConfig {
            visible_rows: self.lines,
            show_scores: self.show_scores,
            ..RendererConfig::default()
        }
    }
}

fn parse_visible_rows(raw: &str) -> Result<usize, String> {
    let rows: usize = raw
        .trim()
        .parse()
        .map_err(|_| format!("`{raw}` is not a row count"))?;
    if rows == 0 {
        return Err("must show at least one row".to_string());
    }
    if rows > u16::MAX as usize {
        return Err(format!("at most {} rows", u16::MAX));
    }
    Ok(rows)
}
