//! crossterm-backed console.

use super::console::{Colour, Console, ConsoleSettings, CursorShape};
use super::terminal_guard::TerminalGuard;
use crate::core::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, event, queue, style, terminal};
use std::io::{self, BufWriter, Stdout, Write};
use std::time::Duration;

pub struct CrosstermConsole {
    out: BufWriter<Stdout>,
    guard: Option<TerminalGuard>,
    settings: ConsoleSettings,
    pending: Option<KeyEvent>,
}

impl CrosstermConsole {
    /// Enters raw mode and the alternate screen until [`Console::close`] or drop.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            out: BufWriter::new(io::stdout()),
            guard: Some(TerminalGuard::new()?),
            settings: ConsoleSettings::default(),
            pending: None,
        })
    }

    /// Next key press without waiting; other events are discarded.
    fn poll_key(&mut self) -> io::Result<Option<KeyEvent>> {
        while event::poll(Duration::ZERO)? {
            if let Some(key) = key_press(event::read()?) {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }
}

impl Console for CrosstermConsole {
    fn apply_settings(&mut self, settings: &ConsoleSettings) -> io::Result<()> {
        queue!(
            self.out,
            terminal::SetTitle(&settings.title),
            style::SetForegroundColor(into_color(settings.foreground)),
            style::SetBackgroundColor(into_color(settings.background)),
            terminal::Clear(terminal::ClearType::All),
        )?;
        self.settings = settings.clone();
        self.out.flush()
    }

    fn settings(&self) -> ConsoleSettings {
        self.settings.clone()
    }

    fn window_size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    fn set_cursor_position(&mut self, row: u16, col: u16) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(col, row))
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            queue!(self.out, cursor::Show)
        } else {
            queue!(self.out, cursor::Hide)
        }
    }

    fn set_cursor_shape(&mut self, shape: CursorShape) -> io::Result<()> {
        let style = match shape {
            CursorShape::Block => cursor::SetCursorStyle::SteadyBlock,
            CursorShape::Bar => cursor::SetCursorStyle::SteadyBar,
            CursorShape::Underline => cursor::SetCursorStyle::SteadyUnderScore,
        };
        queue!(self.out, style)
    }

    fn set_colour(&mut self, fg: Colour, bg: Colour) -> io::Result<()> {
        queue!(
            self.out,
            style::SetForegroundColor(into_color(fg)),
            style::SetBackgroundColor(into_color(bg)),
        )
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, style::Print(text))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn is_key_available(&mut self) -> io::Result<bool> {
        if self.pending.is_none() {
            self.pending = self.poll_key()?;
        }
        Ok(self.pending.is_some())
    }

    fn read_key(&mut self, blocking: bool) -> io::Result<Option<KeyEvent>> {
        if let Some(key) = self.pending.take() {
            return Ok(Some(key));
        }
        if !blocking {
            return self.poll_key();
        }
        loop {
            if let Some(key) = key_press(event::read()?) {
                return Ok(Some(key));
            }
        }
    }

    fn close(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            style::ResetColor,
            cursor::Show,
            cursor::SetCursorStyle::DefaultUserShape
        )?;
        self.out.flush()?;
        match self.guard.take() {
            Some(guard) => guard.restorer().restore(),
            None => Ok(()),
        }
    }
}

fn key_press(event: event::Event) -> Option<KeyEvent> {
    match event {
        event::Event::Key(key) => {
            let key = into_key_event(key);
            (key.kind != KeyEventKind::Release).then_some(key)
        }
        _ => None,
    }
}

fn into_color(colour: Colour) -> style::Color {
    match colour {
        Colour::Reset => style::Color::Reset,
        Colour::Black => style::Color::Black,
        Colour::DarkGrey => style::Color::DarkGrey,
        Colour::Grey => style::Color::Grey,
        Colour::White => style::Color::White,
        Colour::Red => style::Color::Red,
        Colour::Green => style::Color::Green,
        Colour::Yellow => style::Color::Yellow,
        Colour::Blue => style::Color::Blue,
        Colour::Cyan => style::Color::Cyan,
        Colour::Magenta => style::Color::Magenta,
    }
}

pub fn into_key_event(event: event::KeyEvent) -> KeyEvent {
    let mut modifiers = into_key_modifiers(event.modifiers);
    let code = into_key_code(event.code, &mut modifiers);
    KeyEvent {
        code,
        modifiers,
        kind: into_key_event_kind(event.kind),
    }
}

fn into_key_event_kind(kind: event::KeyEventKind) -> KeyEventKind {
    match kind {
        event::KeyEventKind::Press => KeyEventKind::Press,
        event::KeyEventKind::Release => KeyEventKind::Release,
        event::KeyEventKind::Repeat => KeyEventKind::Repeat,
    }
}

fn into_key_modifiers(mods: event::KeyModifiers) -> KeyModifiers {
    let mut out = KeyModifiers::NONE;
    if mods.contains(event::KeyModifiers::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    if mods.contains(event::KeyModifiers::CONTROL) {
        out |= KeyModifiers::CONTROL;
    }
    if mods.contains(event::KeyModifiers::ALT) {
        out |= KeyModifiers::ALT;
    }
    if mods.contains(event::KeyModifiers::SUPER) {
        out |= KeyModifiers::SUPER;
    }
    out
}

fn into_key_code(code: event::KeyCode, modifiers: &mut KeyModifiers) -> KeyCode {
    match code {
        event::KeyCode::Char(ch) => KeyCode::Char(ch),
        event::KeyCode::Enter => KeyCode::Enter,
        event::KeyCode::Tab => KeyCode::Tab,
        event::KeyCode::BackTab => KeyCode::BackTab,
        event::KeyCode::Esc => KeyCode::Esc,
        event::KeyCode::Backspace => KeyCode::Backspace,
        event::KeyCode::Delete => KeyCode::Delete,
        event::KeyCode::Insert => KeyCode::Insert,
        event::KeyCode::Up => KeyCode::Up,
        event::KeyCode::Down => KeyCode::Down,
        event::KeyCode::Left => KeyCode::Left,
        event::KeyCode::Right => KeyCode::Right,
        event::KeyCode::Home => KeyCode::Home,
        event::KeyCode::End => KeyCode::End,
        event::KeyCode::PageUp => KeyCode::PageUp,
        event::KeyCode::PageDown => KeyCode::PageDown,
        event::KeyCode::F(n) => KeyCode::F(n),
        event::KeyCode::Null => {
            *modifiers |= KeyModifiers::CONTROL;
            KeyCode::Char(' ')
        }
        _ => KeyCode::Unknown,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
