//! Sticky error state shared by the model, the controller and every view.
//!
//! Each component owns one `ErrorState` slot and exposes it through
//! [`ErrorReporter`]. A slot holds at most one error; the first error set wins
//! until the slot is reset by the session's acknowledgement step.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorSource {
    /// Expected and recoverable: boundary conditions, bad manual input.
    User,
    Param,
    Program,
    Data,
    /// Unexpected native failure. Fatal.
    Exception,
}

impl ErrorSource {
    pub fn is_fatal(self) -> bool {
        matches!(self, ErrorSource::Exception)
    }

    /// Param/Program/Data/Exception; everything except `User`.
    pub fn is_critical(self) -> bool {
        !matches!(self, ErrorSource::User)
    }

    /// Prefix shown on the message line.
    pub fn class(self) -> &'static str {
        match self {
            ErrorSource::User => "Warning",
            ErrorSource::Param | ErrorSource::Program | ErrorSource::Data => "Error",
            ErrorSource::Exception => "Fatal",
        }
    }
}

impl fmt::Display for ErrorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorSource::User => "user",
            ErrorSource::Param => "param",
            ErrorSource::Program => "program",
            ErrorSource::Data => "data",
            ErrorSource::Exception => "exception",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorError {
    pub code: u32,
    pub source: ErrorSource,
    pub technical: String,
    pub user_message: String,
}

impl EditorError {
    pub fn new(
        code: u32,
        source: ErrorSource,
        technical: impl Into<String>,
        user_message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            source,
            technical: technical.into(),
            user_message: user_message.into(),
        }
    }

    pub fn user(code: u32, message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(code, ErrorSource::User, message.clone(), message)
    }

    pub fn param(code: u32, technical: impl Into<String>) -> Self {
        Self::new(code, ErrorSource::Param, technical, "invalid parameter")
    }

    pub fn program(code: u32, technical: impl Into<String>) -> Self {
        Self::new(code, ErrorSource::Program, technical, "program error")
    }

    pub fn data(code: u32, technical: impl Into<String>, user_message: impl Into<String>) -> Self {
        Self::new(code, ErrorSource::Data, technical, user_message)
    }

    pub fn exception(code: u32, technical: impl Into<String>) -> Self {
        Self::new(code, ErrorSource::Exception, technical, "unexpected failure")
    }

    /// Text for the message line: `{class} {code}: {text}`.
    pub fn message_line(&self) -> String {
        let text = if self.source == ErrorSource::User {
            &self.user_message
        } else {
            &self.technical
        };
        format!("{} {}: {}", self.source.class(), self.code, text)
    }
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error {}: {}", self.source, self.code, self.technical)
    }
}

impl std::error::Error for EditorError {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ErrorState {
    #[default]
    None,
    Active(EditorError),
}

impl ErrorState {
    pub fn is_active(&self) -> bool {
        matches!(self, ErrorState::Active(_))
    }

    /// `critical_only` ignores `User` errors.
    pub fn is_error(&self, critical_only: bool) -> bool {
        match self {
            ErrorState::None => false,
            ErrorState::Active(err) => !critical_only || err.source.is_critical(),
        }
    }

    pub fn get(&self) -> Option<&EditorError> {
        match self {
            ErrorState::None => None,
            ErrorState::Active(err) => Some(err),
        }
    }

    /// Latches `err` unless an error is already active. Returns whether it was latched.
    pub fn set(&mut self, err: EditorError) -> bool {
        if self.is_active() {
            return false;
        }
        *self = ErrorState::Active(err);
        true
    }

    pub fn reset(&mut self) {
        *self = ErrorState::None;
    }
}

/// Narrow accessor every component exposes for its error slot.
pub trait ErrorReporter {
    fn error_state(&self) -> &ErrorState;

    fn error_state_mut(&mut self) -> &mut ErrorState;

    fn report(&mut self, err: EditorError) -> bool {
        let latched = self.error_state_mut().set(err);
        if latched {
            if let Some(err) = self.error_state().get() {
                tracing::warn!(code = err.code, source = %err.source, "{}", err.technical);
            }
        }
        latched
    }

    fn has_error(&self) -> bool {
        self.error_state().is_active()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/error.rs"]
mod tests;
