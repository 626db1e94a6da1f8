//! Editor configuration: the single immutable value handed to every component.
//!
//! Produced by the settings layer, validated once, never mutated afterwards.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const EDIT_ROWS_RANGE: (u16, u16) = (5, 200);
pub const EDIT_COLS_RANGE: (u16, u16) = (20, 250);
pub const CURSOR_SIZE_RANGE: (u8, u8) = (1, 100);
pub const STATUS_UPDATE_MS_RANGE: (u64, u64) = (100, 60_000);
pub const AUTOSAVE_SECS_RANGE: (u64, u64) = (0, 3_600);
pub const PAUSE_SECS_RANGE: (u64, u64) = (1, 3_600);

pub const DEFAULT_HELP_URL: &str = "https://github.com/quire-editor/quire#usage";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourScheme {
    #[default]
    Default,
    Mono,
    Light,
}

impl ColourScheme {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "default" => Some(Self::Default),
            "mono" | "monochrome" => Some(Self::Mono),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Mono => "mono",
            Self::Light => "light",
        }
    }
}

/// Terminal window size bounds, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowBounds {
    pub min_width: u16,
    pub min_height: u16,
    pub max_width: u16,
    pub max_height: u16,
}

impl Default for WindowBounds {
    fn default() -> Self {
        Self {
            min_width: 40,
            min_height: 12,
            max_width: 300,
            max_height: 250,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
    pub edit_area_rows: u16,
    pub edit_area_cols: u16,
    pub cursor_size: u8,
    pub status_update_ms: u64,
    /// 0 disables autosave.
    pub autosave_secs: u64,
    /// Idle time after which the writing session counts as paused.
    pub pause_secs: u64,
    pub rulers: bool,
    pub colour_scheme: ColourScheme,
    pub help_url: String,
    pub dictionary: Option<PathBuf>,
    pub window: WindowBounds,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            edit_area_rows: 20,
            edit_area_cols: 68,
            cursor_size: 20,
            status_update_ms: 1_000,
            autosave_secs: 60,
            pause_secs: 60,
            rulers: true,
            colour_scheme: ColourScheme::Default,
            help_url: DEFAULT_HELP_URL.to_string(),
            dictionary: None,
            window: WindowBounds::default(),
        }
    }
}

impl EditorConfig {
    pub fn autosave_period(&self) -> Duration {
        Duration::from_secs(self.autosave_secs)
    }

    pub fn status_period(&self) -> Duration {
        Duration::from_millis(self.status_update_ms)
    }

    pub fn pause_threshold(&self) -> Duration {
        Duration::from_secs(self.pause_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("edit_area_rows", self.edit_area_rows, EDIT_ROWS_RANGE)?;
        check_range("edit_area_cols", self.edit_area_cols, EDIT_COLS_RANGE)?;
        check_range("cursor_size", self.cursor_size, CURSOR_SIZE_RANGE)?;
        check_range(
            "status_update_ms",
            self.status_update_ms,
            STATUS_UPDATE_MS_RANGE,
        )?;
        check_range("autosave_secs", self.autosave_secs, AUTOSAVE_SECS_RANGE)?;
        check_range("pause_secs", self.pause_secs, PAUSE_SECS_RANGE)?;

        let w = self.window;
        if w.min_width == 0 || w.min_height == 0 {
            return Err(ConfigError::Invalid {
                name: "window",
                reason: "minimum window size must be non-zero".to_string(),
            });
        }
        if w.min_width > w.max_width || w.min_height > w.max_height {
            return Err(ConfigError::Invalid {
                name: "window",
                reason: format!(
                    "minimum {}x{} exceeds maximum {}x{}",
                    w.min_width, w.min_height, w.max_width, w.max_height
                ),
            });
        }
        if self.help_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                name: "help_url",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn check_range<T>(name: &'static str, value: T, (min, max): (T, T)) -> Result<(), ConfigError>
where
    T: PartialOrd + fmt::Display + Copy,
{
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            name,
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    OutOfRange {
        name: &'static str,
        value: String,
        min: String,
        max: String,
    },
    Invalid {
        name: &'static str,
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::OutOfRange {
                name,
                value,
                min,
                max,
            } => write!(f, "{name} = {value} is outside {min}..={max}"),
            ConfigError::Invalid { name, reason } => write!(f, "{name}: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
#[path = "../../tests/unit/services/config.rs"]
mod tests;
