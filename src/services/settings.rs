//! Persisted JSON settings.
//!
//! Every field is optional; missing fields fall back to `EditorConfig::default()`.
//! The merged result is validated before the editor core ever sees it.

use super::config::{ColourScheme, ConfigError, EditorConfig};
use crate::core::event::{Key, KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

const SETTINGS_DIR: &str = ".quire";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub editor: EditorSettings,
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_area_rows: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_area_cols: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor_size: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_update_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autosave_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rulers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colour_scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dictionary: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_window: Option<[u16; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_window: Option<[u16; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl Settings {
    /// Settings file content written on first run: the defaults, spelled out.
    pub fn template() -> Self {
        let d = EditorConfig::default();
        Self {
            editor: EditorSettings {
                edit_area_rows: Some(d.edit_area_rows),
                edit_area_cols: Some(d.edit_area_cols),
                cursor_size: Some(d.cursor_size),
                status_update_ms: Some(d.status_update_ms),
                autosave_secs: Some(d.autosave_secs),
                pause_secs: Some(d.pause_secs),
                rulers: Some(d.rulers),
                colour_scheme: Some(d.colour_scheme.name().to_string()),
                help_url: None,
                dictionary: None,
                min_window: None,
                max_window: None,
            },
            keybindings: Vec::new(),
        }
    }

    /// Merges onto the defaults and validates.
    pub fn to_config(&self) -> Result<EditorConfig, ConfigError> {
        let mut config = EditorConfig::default();
        let e = &self.editor;
        if let Some(v) = e.edit_area_rows {
            config.edit_area_rows = v;
        }
        if let Some(v) = e.edit_area_cols {
            config.edit_area_cols = v;
        }
        if let Some(v) = e.cursor_size {
            config.cursor_size = v;
        }
        if let Some(v) = e.status_update_ms {
            config.status_update_ms = v;
        }
        if let Some(v) = e.autosave_secs {
            config.autosave_secs = v;
        }
        if let Some(v) = e.pause_secs {
            config.pause_secs = v;
        }
        if let Some(v) = e.rulers {
            config.rulers = v;
        }
        if let Some(name) = &e.colour_scheme {
            config.colour_scheme =
                ColourScheme::parse(name).ok_or_else(|| ConfigError::Invalid {
                    name: "colour_scheme",
                    reason: format!("unknown scheme '{name}'"),
                })?;
        }
        if let Some(url) = &e.help_url {
            config.help_url = url.clone();
        }
        if let Some(path) = &e.dictionary {
            config.dictionary = Some(path.clone());
        }
        if let Some([w, h]) = e.min_window {
            config.window.min_width = w;
            config.window.min_height = h;
        }
        if let Some([w, h]) = e.max_window {
            config.window.max_width = w;
            config.window.max_height = h;
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Config(ConfigError),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(err) => write!(f, "cannot read settings: {err}"),
            SettingsError::Parse(err) => write!(f, "invalid settings file: {err}"),
            SettingsError::Config(err) => write!(f, "invalid setting: {err}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(err) => Some(err),
            SettingsError::Parse(err) => Some(err),
            SettingsError::Config(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err)
    }
}

impl From<ConfigError> for SettingsError {
    fn from(err: ConfigError) -> Self {
        SettingsError::Config(err)
    }
}

pub fn get_settings_path() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

/// Creates the log directory next to the settings file.
pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_cache_dir()
        .map(|dir| dir.join(SETTINGS_DIR).join("logs"))
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Cannot determine log directory",
            )
        })?;
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Creates the settings file with the template content if it does not exist yet.
pub fn ensure_settings_file(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content = serde_json::to_string_pretty(&Settings::template())
            .unwrap_or_else(|_| "{}".to_string());
        std::fs::write(path, content)?;
    }
    Ok(())
}

pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

pub fn parse_keybinding(value: &str) -> Option<Key> {
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part: Option<&str> = None;
    for part in value.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" | "option" => modifiers |= KeyModifiers::ALT,
            "super" | "meta" | "cmd" | "command" => modifiers |= KeyModifiers::SUPER,
            _ => key_part = Some(part),
        }
    }
    let key_part = key_part?;
    let mut code = parse_key_code(key_part)?;
    if let KeyCode::Char(ch) = code {
        if ch.is_ascii_uppercase() {
            code = KeyCode::Char(ch.to_ascii_lowercase());
            modifiers |= KeyModifiers::SHIFT;
        }
    }
    Some(Key::new(code, modifiers))
}

fn parse_key_code(value: &str) -> Option<KeyCode> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    let v_lc = v.to_ascii_lowercase();
    let code = match v_lc.as_str() {
        "enter" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "insert" | "ins" => KeyCode::Insert,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        _ if v_lc.len() > 1 && v_lc.starts_with('f') => {
            let n = v_lc.strip_prefix('f')?.parse::<u8>().ok()?;
            KeyCode::F(n)
        }
        _ => {
            let mut chars = v.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };

    Some(code)
}

fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/settings.rs"]
mod tests;
