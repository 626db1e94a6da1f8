//! Console layer: the capability the core renders through, its crossterm
//! implementation, the terminal restore guard and an in-memory console.
//!
//! Kept apart from `kernel` and `views` so neither depends on terminal crates.

pub mod console;
pub mod crossterm;
pub mod headless;
pub mod terminal_guard;

pub use console::{shared, Colour, Console, ConsoleSettings, CursorShape, SharedConsole};
pub use self::crossterm::CrosstermConsole;
pub use headless::HeadlessConsole;
