//! Value types shared by every layer:
//! - event: terminal-agnostic key events
//! - command: semantic commands bound to keys
//! - codes: numeric error codes
//! - error: the sticky error record and its per-component slot
//! - geom: cursor positions and screen rectangles
//! - mode: editing modes and their transition function
//! - text_window: fitting text into fixed-width regions

pub mod codes;
pub mod command;
pub mod error;
pub mod event;
pub mod geom;
pub mod mode;
pub mod text_window;

pub use command::Command;
pub use error::{EditorError, ErrorReporter, ErrorSource, ErrorState};
pub use event::{Key, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
pub use geom::{CursorPosition, Rect};
pub use mode::{transition, Mode, ModeEvent};
