pub mod input_event;
#[cfg(unix)]
pub mod signals;
pub mod surface;
pub mod terminal;

pub use input_event::{KeyCode, KeyDecoder, KeyEvent, KeyModifiers};
pub use surface::{Console, InputSource, Surface};
pub use terminal::{RawModeGuard, Terminal};
