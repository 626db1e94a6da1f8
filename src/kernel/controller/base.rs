use super::{Controller, DispatchOutcome};
use crate::core::command::Command;
use crate::core::mode::{transition, ModeEvent};
use crate::kernel::document::DocumentModel;

impl Controller {
    /// Keys every mode shares. `None` hands the command to the mode handler.
    pub(super) fn handle_universal(
        &mut self,
        command: Command,
        model: &mut DocumentModel,
    ) -> Option<DispatchOutcome> {
        let outcome = match command {
            Command::Quit => DispatchOutcome::Quit,
            Command::Help => DispatchOutcome::Help,
            Command::Refresh => DispatchOutcome::Refresh,
            Command::ToggleInsert => {
                self.insert_mode = !self.insert_mode;
                DispatchOutcome::Continue
            }
            Command::Save => {
                // Failures are latched on the model.
                if model.save().is_ok() {
                    let name = model
                        .path()
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    model.set_msg_line(format!("Saved {name}"));
                }
                DispatchOutcome::Continue
            }
            Command::NextMode => DispatchOutcome::Switch(transition(self.mode, ModeEvent::Next)),
            _ => return None,
        };
        Some(outcome)
    }
}
