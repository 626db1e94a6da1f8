//! Editing modes and the transition function between them.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Text,
    Properties,
    Spelling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeEvent {
    /// The "next mode" key: Text → Properties → Spelling → Text.
    Next,
    Goto(Mode),
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Text, Mode::Properties, Mode::Spelling];

    pub fn name(self) -> &'static str {
        match self {
            Mode::Text => "text",
            Mode::Properties => "properties",
            Mode::Spelling => "spelling",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "text" | "textedit" | "text-editing" => Some(Mode::Text),
            "properties" | "props" | "propsedit" | "properties-editing" => Some(Mode::Properties),
            "spelling" | "spell" | "spelledit" | "spelling-correction" => Some(Mode::Spelling),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Mode::Text => 0,
            Mode::Properties => 1,
            Mode::Spelling => 2,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Total over every (mode, event) pair.
pub fn transition(mode: Mode, event: ModeEvent) -> Mode {
    match event {
        ModeEvent::Goto(target) => target,
        ModeEvent::Next => match mode {
            Mode::Text => Mode::Properties,
            Mode::Properties => Mode::Spelling,
            Mode::Spelling => Mode::Text,
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/mode.rs"]
mod tests;
