//! Controllers: the active interpreter of keystrokes.
//!
//! Exactly one controller is current. Mode switches replace it with a fresh
//! one from [`Controller::create`]; the loop learns about switches, quits and
//! refreshes from the [`DispatchOutcome`] each dispatch returns.

mod base;
mod properties;
mod spelling;
mod text;

use super::document::DocumentModel;
use crate::core::codes;
use crate::core::error::{EditorError, ErrorReporter, ErrorState};
use crate::core::event::{Key, KeyEvent, KeyEventKind};
use crate::core::mode::Mode;
use crate::services::config::EditorConfig;
use crate::services::keybinding::{KeybindingContext, KeybindingService};

/// What the loop should do after a key has been dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Continue,
    /// Reapply console settings and redraw everything.
    Refresh,
    Quit,
    /// Launch the help viewer.
    Help,
    /// Replace the controller with one for this mode.
    Switch(Mode),
}

#[derive(Debug)]
pub struct Controller {
    mode: Mode,
    insert_mode: bool,
    page_rows: usize,
    error: ErrorState,
}

impl Controller {
    /// Builds the controller for `mode_name` and makes its mode the model's
    /// active one. Fails on an unknown name or a model that is not ready.
    pub fn create(
        mode_name: &str,
        model: &mut DocumentModel,
        config: &EditorConfig,
    ) -> Result<Self, EditorError> {
        let Some(mode) = Mode::parse(mode_name) else {
            return Err(EditorError::param(
                codes::UNKNOWN_MODE,
                format!("unknown editing mode '{mode_name}'"),
            ));
        };
        if !model.is_ready() {
            return Err(EditorError::program(
                codes::MODEL_NOT_READY,
                format!("document is not ready for {mode} mode"),
            ));
        }
        model.set_mode(mode);
        model.refresh();
        tracing::debug!(%mode, "controller created");
        Ok(Self {
            mode,
            insert_mode: true,
            page_rows: usize::from(config.edit_area_rows).saturating_sub(1).max(1),
            error: ErrorState::None,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn insert_mode(&self) -> bool {
        self.insert_mode
    }

    /// Universal keys first, then the mode's own handling. Errors from the
    /// mode handlers are latched on the controller.
    pub fn dispatch(
        &mut self,
        key: KeyEvent,
        model: &mut DocumentModel,
        keys: &KeybindingService,
    ) -> DispatchOutcome {
        if key.kind == KeyEventKind::Release {
            return DispatchOutcome::Continue;
        }
        let command = keys
            .resolve(KeybindingContext::for_mode(self.mode), &Key::from(key))
            .copied();
        if let Some(outcome) = command.and_then(|cmd| self.handle_universal(cmd, model)) {
            tracing::debug!(?outcome, "universal key");
            return outcome;
        }

        let result = match self.mode {
            Mode::Text => text::handle(self, command, key, model),
            Mode::Properties => properties::handle(self, command, key, model),
            Mode::Spelling => spelling::handle(command, model),
        };
        if let Err(err) = result {
            self.report(err);
        }
        DispatchOutcome::Continue
    }
}

impl ErrorReporter for Controller {
    fn error_state(&self) -> &ErrorState {
        &self.error
    }

    fn error_state_mut(&mut self) -> &mut ErrorState {
        &mut self.error
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/controller.rs"]
mod tests;
