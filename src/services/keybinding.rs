//! Key bindings: key → command, per editing context.

use super::settings::{parse_keybinding, KeybindingRule};
use crate::core::event::{Key, KeyCode};
use crate::core::{Command, Mode};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    Global,
    Text,
    Properties,
    Spelling,
}

impl KeybindingContext {
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        match v.as_str() {
            "global" => Some(Self::Global),
            "text" | "editor" => Some(Self::Text),
            "properties" | "props" => Some(Self::Properties),
            "spelling" | "spell" => Some(Self::Spelling),
            _ => None,
        }
    }

    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Text => Self::Text,
            Mode::Properties => Self::Properties,
            Mode::Spelling => Self::Spelling,
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    text: FxHashMap<Key, Command>,
    properties: FxHashMap<Key, Command>,
    spelling: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            global: default_global_keybindings(),
            text: default_text_keybindings(),
            properties: default_properties_keybindings(),
            spelling: default_spelling_keybindings(),
        }
    }

    /// Mode bindings first, then the global ones.
    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<&Command> {
        match context {
            KeybindingContext::Global => self.global.get(key),
            other => self.map(other).get(key).or_else(|| self.global.get(key)),
        }
    }

    /// Only the universal (global) bindings.
    pub fn resolve_global(&self, key: &Key) -> Option<&Command> {
        self.global.get(key)
    }

    pub fn bindings(&self, context: KeybindingContext) -> &FxHashMap<Key, Command> {
        self.map(context)
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, command: Command) {
        self.map_mut(context).insert(key, command);
    }

    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Command> {
        self.map_mut(context).remove(key)
    }

    /// Applies user rules from settings. Returns one message per rule that could not be applied.
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) -> Vec<String> {
        let mut rejected = Vec::new();
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                rejected.push(format!("unknown key '{}'", rule.key));
                continue;
            };
            let context = match rule.context.as_deref() {
                None => KeybindingContext::Global,
                Some(name) => match KeybindingContext::parse(name) {
                    Some(ctx) => ctx,
                    None => {
                        rejected.push(format!("unknown context '{name}'"));
                        continue;
                    }
                },
            };
            let command = rule.command.trim();
            if command.is_empty() || command == "none" {
                self.unbind(context, &key);
                continue;
            }
            match Command::from_name(command) {
                Some(cmd) => self.bind(context, key, cmd),
                None => rejected.push(format!("unknown command '{command}'")),
            }
        }
        if !rejected.is_empty() {
            tracing::warn!(count = rejected.len(), "ignored keybinding rules");
        }
        rejected
    }

    fn map(&self, context: KeybindingContext) -> &FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &self.global,
            KeybindingContext::Text => &self.text,
            KeybindingContext::Properties => &self.properties,
            KeybindingContext::Spelling => &self.spelling,
        }
    }

    fn map_mut(&mut self, context: KeybindingContext) -> &mut FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &mut self.global,
            KeybindingContext::Text => &mut self.text,
            KeybindingContext::Properties => &mut self.properties,
            KeybindingContext::Spelling => &mut self.spelling,
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(8);

    bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);
    bindings.insert(Key::simple(KeyCode::F(1)), Command::Help);
    bindings.insert(Key::simple(KeyCode::Esc), Command::Refresh);
    bindings.insert(Key::simple(KeyCode::Insert), Command::ToggleInsert);
    bindings.insert(Key::ctrl(KeyCode::Char('s')), Command::Save);
    bindings.insert(Key::simple(KeyCode::F(2)), Command::NextMode);

    bindings
}

fn insert_cursor_keys(bindings: &mut FxHashMap<Key, Command>) {
    bindings.insert(Key::simple(KeyCode::Left), Command::CursorLeft);
    bindings.insert(Key::simple(KeyCode::Right), Command::CursorRight);
    bindings.insert(Key::simple(KeyCode::Up), Command::CursorUp);
    bindings.insert(Key::simple(KeyCode::Down), Command::CursorDown);
    bindings.insert(Key::simple(KeyCode::Home), Command::CursorLineStart);
    bindings.insert(Key::simple(KeyCode::End), Command::CursorLineEnd);
}

fn default_text_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(16);

    insert_cursor_keys(&mut bindings);
    bindings.insert(Key::ctrl(KeyCode::Home), Command::CursorFileStart);
    bindings.insert(Key::ctrl(KeyCode::End), Command::CursorFileEnd);
    bindings.insert(Key::simple(KeyCode::PageUp), Command::PageUp);
    bindings.insert(Key::simple(KeyCode::PageDown), Command::PageDown);

    bindings.insert(Key::simple(KeyCode::Enter), Command::InsertNewline);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);
    bindings.insert(Key::simple(KeyCode::Delete), Command::DeleteForward);

    bindings
}

fn default_properties_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(12);

    insert_cursor_keys(&mut bindings);
    bindings.insert(Key::simple(KeyCode::Tab), Command::CursorDown);
    bindings.insert(Key::simple(KeyCode::BackTab), Command::CursorUp);
    bindings.insert(Key::simple(KeyCode::Enter), Command::InsertNewline);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);
    bindings.insert(Key::simple(KeyCode::Delete), Command::DeleteForward);

    bindings
}

fn default_spelling_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(14);

    bindings.insert(Key::simple(KeyCode::Right), Command::SpellNext);
    bindings.insert(Key::simple(KeyCode::Enter), Command::SpellNext);
    bindings.insert(Key::simple(KeyCode::Char(' ')), Command::SpellNext);
    bindings.insert(Key::simple(KeyCode::Char('i')), Command::SpellIgnore);
    for n in 1..=9u8 {
        let digit = char::from(b'0' + n);
        bindings.insert(Key::simple(KeyCode::Char(digit)), Command::SpellReplace(n));
    }

    bindings
}

#[cfg(test)]
#[path = "../../tests/unit/services/keybinding.rs"]
mod tests;
