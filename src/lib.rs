pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod runtime;
pub mod source;
pub mod terminal;
pub mod ui;

pub use config::Config;
pub use crate::core::search::{fuzzy, rank};
pub use crate::core::state;
pub use error::{PickError, PickResult};
pub use runtime::Outcome;
