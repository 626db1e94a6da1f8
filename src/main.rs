use std::path::PathBuf;
use std::process::ExitCode;

use quire::app::Session;
use quire::kernel::DocumentModel;
use quire::services::settings::{self, Settings, SettingsError};
use quire::services::{
    AcceptAllSpeller, EditorConfig, KeybindingService, SpellChecker, WordListSpeller,
};
use quire::tui::{self, CrosstermConsole};

mod logging;

fn main() -> ExitCode {
    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("usage: quire <file>");
        return ExitCode::from(2);
    };

    let logging = logging::init();

    let settings = match load_user_settings() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("quire: {err}");
            return ExitCode::from(2);
        }
    };
    let config = match settings.to_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("quire: invalid setting: {err}");
            return ExitCode::from(2);
        }
    };

    let mut keys = KeybindingService::with_defaults();
    for rejected in keys.apply_rules(&settings.keybindings) {
        tracing::warn!("keybinding: {rejected}");
    }

    let model = match DocumentModel::open(&path, &config) {
        Ok(model) => model.with_speller(speller(&config)),
        Err(err) => {
            eprintln!("quire: {}", err.user_message);
            tracing::error!(code = err.code, "{}", err.technical);
            return ExitCode::FAILURE;
        }
    };

    let console = match CrosstermConsole::new() {
        Ok(console) => console,
        Err(err) => {
            eprintln!("quire: cannot open the terminal: {err}");
            return ExitCode::FAILURE;
        }
    };
    let (_console, shared) = tui::shared(console);

    let mut session = Session::new(config, shared, model).with_keybindings(keys);
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("quire: {}", err.message_line());
            if let Some(guard) = &logging {
                eprintln!("quire: details are in {}", guard.log_dir().display());
            }
            ExitCode::FAILURE
        }
    }
}

/// Settings from the user file, created from the template on first run.
/// Without a settings location the defaults apply.
fn load_user_settings() -> Result<Settings, SettingsError> {
    let Some(path) = settings::get_settings_path() else {
        return Ok(Settings::default());
    };
    if let Err(err) = settings::ensure_settings_file(&path) {
        tracing::warn!(path = %path.display(), error = %err, "cannot create settings file");
        return Ok(Settings::default());
    }
    settings::load_settings(&path)
}

fn speller(config: &EditorConfig) -> Box<dyn SpellChecker> {
    let Some(path) = config.dictionary.as_deref() else {
        return Box::new(AcceptAllSpeller);
    };
    match WordListSpeller::load(path) {
        Ok(words) => {
            tracing::info!(path = %path.display(), words = words.len(), "dictionary loaded");
            Box::new(words)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "cannot load dictionary");
            Box::new(AcceptAllSpeller)
        }
    }
}
