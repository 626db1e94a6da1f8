//! Semantic commands: what a key means, independent of which key produced it.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== universal ====================
    Quit,
    Help,
    Refresh,
    ToggleInsert,
    Save,
    NextMode,

    // ==================== cursor ====================
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorLineStart,
    CursorLineEnd,
    CursorFileStart,
    CursorFileEnd,
    PageUp,
    PageDown,

    // ==================== editing ====================
    InsertNewline,
    DeleteBackward,
    DeleteForward,

    // ==================== spelling ====================
    SpellNext,
    SpellIgnore,
    SpellReplace(u8),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Quit => "quit",
            Command::Help => "help",
            Command::Refresh => "refresh",
            Command::ToggleInsert => "toggleInsert",
            Command::Save => "save",
            Command::NextMode => "nextMode",
            Command::CursorLeft => "cursorLeft",
            Command::CursorRight => "cursorRight",
            Command::CursorUp => "cursorUp",
            Command::CursorDown => "cursorDown",
            Command::CursorLineStart => "cursorLineStart",
            Command::CursorLineEnd => "cursorLineEnd",
            Command::CursorFileStart => "cursorFileStart",
            Command::CursorFileEnd => "cursorFileEnd",
            Command::PageUp => "pageUp",
            Command::PageDown => "pageDown",
            Command::InsertNewline => "insertNewline",
            Command::DeleteBackward => "deleteBackward",
            Command::DeleteForward => "deleteForward",
            Command::SpellNext => "spellNext",
            Command::SpellIgnore => "spellIgnore",
            Command::SpellReplace(_) => "spellReplace",
        }
    }

    /// Parses a command name as written in settings. `spellReplace` takes its
    /// suggestion number after a colon (`spellReplace:3`).
    pub fn from_name(name: &str) -> Option<Self> {
        let cmd = match name.trim() {
            "quit" => Command::Quit,
            "help" => Command::Help,
            "refresh" => Command::Refresh,
            "toggleInsert" => Command::ToggleInsert,
            "save" => Command::Save,
            "nextMode" => Command::NextMode,
            "cursorLeft" => Command::CursorLeft,
            "cursorRight" => Command::CursorRight,
            "cursorUp" => Command::CursorUp,
            "cursorDown" => Command::CursorDown,
            "cursorLineStart" => Command::CursorLineStart,
            "cursorLineEnd" => Command::CursorLineEnd,
            "cursorFileStart" => Command::CursorFileStart,
            "cursorFileEnd" => Command::CursorFileEnd,
            "pageUp" => Command::PageUp,
            "pageDown" => Command::PageDown,
            "insertNewline" => Command::InsertNewline,
            "deleteBackward" => Command::DeleteBackward,
            "deleteForward" => Command::DeleteForward,
            "spellNext" => Command::SpellNext,
            "spellIgnore" => Command::SpellIgnore,
            other => {
                let n = other.strip_prefix("spellReplace:")?.parse::<u8>().ok()?;
                if !(1..=9).contains(&n) {
                    return None;
                }
                Command::SpellReplace(n)
            }
        };
        Some(cmd)
    }

    /// Commands every controller handles before its mode-specific logic runs.
    pub fn is_universal(&self) -> bool {
        matches!(
            self,
            Command::Quit
                | Command::Help
                | Command::Refresh
                | Command::ToggleInsert
                | Command::Save
                | Command::NextMode
        )
    }

    pub fn is_cursor_command(&self) -> bool {
        matches!(
            self,
            Command::CursorLeft
                | Command::CursorRight
                | Command::CursorUp
                | Command::CursorDown
                | Command::CursorLineStart
                | Command::CursorLineEnd
                | Command::CursorFileStart
                | Command::CursorFileEnd
                | Command::PageUp
                | Command::PageDown
        )
    }

    pub fn is_edit_command(&self) -> bool {
        matches!(
            self,
            Command::InsertNewline
                | Command::DeleteBackward
                | Command::DeleteForward
                | Command::SpellReplace(_)
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
