pub mod command;
pub mod effect;
pub mod key_bindings;
pub mod reducer;
pub mod runner;

pub use command::Command;
pub use effect::{Effect, Outcome};
pub use key_bindings::{KeyBinding, KeyBindings};
pub use runner::Runtime;
