//! The per-iteration error step of the session loop.
//!
//! Errors stay latched in their component's slot until the user acknowledges
//! them. The first active error found (controller, then model, then views in
//! subscription order) is copied onto the controller and shown on the message
//! line. Only `Exception`-class errors stop the loop.

use crate::core::error::{EditorError, ErrorReporter};
use crate::kernel::controller::Controller;
use crate::kernel::document::DocumentModel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorVerdict {
    Continue,
    Stop(EditorError),
}

#[derive(Debug, Default)]
pub struct ErrorProcessor {
    displayed: bool,
    ack_pending: bool,
}

impl ErrorProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while an error is on the message line and not yet acknowledged.
    pub fn is_displaying(&self) -> bool {
        self.displayed && !self.ack_pending
    }

    /// Called for every key read. Returns `true` when the key acknowledges a
    /// displayed error and must not be dispatched.
    pub fn acknowledge(&mut self) -> bool {
        if !self.is_displaying() {
            return false;
        }
        self.ack_pending = true;
        true
    }

    pub fn process(
        &mut self,
        controller: &mut Controller,
        model: &mut DocumentModel,
    ) -> ErrorVerdict {
        if self.ack_pending {
            reset_all(controller, model);
            model.clear_msg_line();
            self.ack_pending = false;
            self.displayed = false;
            return ErrorVerdict::Continue;
        }
        // Tracks its own display rather than an empty message line, so a
        // plain message such as "Saved ..." is overwritten by a new error.
        if self.displayed {
            return ErrorVerdict::Continue;
        }
        let Some(err) = first_error(controller, model) else {
            return ErrorVerdict::Continue;
        };
        controller.error_state_mut().set(err.clone());
        model.set_msg_line(err.message_line());
        self.displayed = true;
        if err.source.is_fatal() {
            tracing::error!(code = err.code, "{}", err.technical);
            return ErrorVerdict::Stop(err);
        }
        ErrorVerdict::Continue
    }
}

fn first_error(controller: &Controller, model: &DocumentModel) -> Option<EditorError> {
    if let Some(err) = controller.error_state().get() {
        return Some(err.clone());
    }
    if let Some(err) = model.error_state().get() {
        return Some(err.clone());
    }
    model
        .subscribers()
        .iter()
        .find_map(|view| view.borrow().error_state().get().cloned())
}

fn reset_all(controller: &mut Controller, model: &mut DocumentModel) {
    controller.error_state_mut().reset();
    model.error_state_mut().reset();
    for view in model.subscribers().iter() {
        view.borrow_mut().error_state_mut().reset();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/errors.rs"]
mod tests;
