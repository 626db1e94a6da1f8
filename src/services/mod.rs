//! Collaborators around the editor core: configuration, settings, key
//! bindings, spell checking and help.

pub mod config;
pub mod help;
pub mod keybinding;
pub mod settings;
pub mod spelling;

pub use config::{ColourScheme, ConfigError, EditorConfig, WindowBounds};
pub use help::{CmdLineHelp, HelpLauncher};
pub use keybinding::{KeybindingContext, KeybindingService};
pub use settings::{Settings, SettingsError};
pub use spelling::{AcceptAllSpeller, SpellChecker, WordListSpeller};
