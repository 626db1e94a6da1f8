//! The console capability the editor core renders through.
//!
//! Views write to it during setup and updates; the session reads keys from it.
//! Everything runs on one thread, so it is shared as `Rc<RefCell<_>>`.

use crate::core::event::KeyEvent;
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Colour {
    #[default]
    Reset,
    Black,
    DarkGrey,
    Grey,
    White,
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
    Magenta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    #[default]
    Block,
    Bar,
    Underline,
}

impl CursorShape {
    /// Insert mode uses a thin cursor, overwrite mode a block.
    pub fn for_mode(insert_mode: bool, cursor_size: u8) -> Self {
        match (insert_mode, cursor_size) {
            (false, _) => CursorShape::Block,
            (true, size) if size <= 25 => CursorShape::Bar,
            (true, _) => CursorShape::Underline,
        }
    }
}

/// Window geometry and appearance applied at setup and on refresh.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConsoleSettings {
    pub width: u16,
    pub height: u16,
    pub title: String,
    pub foreground: Colour,
    pub background: Colour,
}

pub trait Console {
    fn apply_settings(&mut self, settings: &ConsoleSettings) -> io::Result<()>;

    fn settings(&self) -> ConsoleSettings;

    /// Current window size in (columns, rows).
    fn window_size(&self) -> io::Result<(u16, u16)>;

    /// True when the window no longer measures `width` x `height`.
    fn is_window_size_changed(&self, width: u16, height: u16) -> bool {
        match self.window_size() {
            Ok((w, h)) => w != width || h != height,
            Err(_) => false,
        }
    }

    fn set_cursor_position(&mut self, row: u16, col: u16) -> io::Result<()>;

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;

    fn set_cursor_shape(&mut self, shape: CursorShape) -> io::Result<()>;

    fn set_colour(&mut self, fg: Colour, bg: Colour) -> io::Result<()>;

    /// Writes at the cursor and advances it.
    fn write(&mut self, text: &str) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;

    /// Never blocks.
    fn is_key_available(&mut self) -> io::Result<bool>;

    /// `blocking == false` returns `Ok(None)` when no key is waiting.
    fn read_key(&mut self, blocking: bool) -> io::Result<Option<KeyEvent>>;

    fn close(&mut self) -> io::Result<()>;
}

pub type SharedConsole = Rc<RefCell<dyn Console>>;

pub fn shared<C: Console + 'static>(console: C) -> (Rc<RefCell<C>>, SharedConsole) {
    let concrete = Rc::new(RefCell::new(console));
    let shared: SharedConsole = concrete.clone();
    (concrete, shared)
}
