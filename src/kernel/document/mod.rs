//! The document model: the subject every view observes.
//!
//! State is changed only through the named operations in this module and its
//! submodules. Each mutation that is visible on screen ends with exactly one
//! [`notify`](DocumentModel::notify) pass.

mod chrome;
mod edit;
mod properties;
mod session;
mod spelling;

pub use spelling::SpellTarget;

use super::notify::{ChangeKind, ChangeNotification, SharedView, SubscriberId, Subscribers};
use crate::core::codes;
use crate::core::error::{EditorError, ErrorReporter, ErrorState};
use crate::core::geom::CursorPosition;
use crate::core::mode::Mode;
use crate::models::{
    DocumentFile, DocumentProperties, PauseTracker, PropertyField, SessionRecord, TextBuffer,
    FORMAT_VERSION,
};
use crate::services::config::EditorConfig;
use crate::services::spelling::{AcceptAllSpeller, SpellChecker};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub struct DocumentModel {
    path: PathBuf,
    buffer: TextBuffer,
    cursor: CursorPosition,
    properties: DocumentProperties,
    selected_field: PropertyField,
    field_col: usize,
    sessions: Vec<SessionRecord>,
    pauses: PauseTracker,
    pause_threshold: Duration,
    mode: Mode,
    status_line: String,
    msg_line: String,
    help_line: String,
    cmd_line: String,
    spell: spelling::SpellState,
    speller: Box<dyn SpellChecker>,
    modified: bool,
    ready: bool,
    closed: bool,
    saves: usize,
    error: ErrorState,
    subscribers: Subscribers,
}

impl DocumentModel {
    /// An empty document that will be saved to `path`.
    pub fn new(path: impl Into<PathBuf>, config: &EditorConfig) -> Self {
        Self {
            path: path.into(),
            buffer: TextBuffer::new(),
            cursor: CursorPosition::default(),
            properties: DocumentProperties::default(),
            selected_field: PropertyField::Title,
            field_col: 0,
            sessions: Vec::new(),
            pauses: PauseTracker::default(),
            pause_threshold: config.pause_threshold(),
            mode: Mode::Text,
            status_line: String::new(),
            msg_line: String::new(),
            help_line: String::new(),
            cmd_line: String::new(),
            spell: spelling::SpellState::default(),
            speller: Box::new(AcceptAllSpeller),
            modified: false,
            ready: true,
            closed: false,
            saves: 0,
            error: ErrorState::None,
            subscribers: Subscribers::new(),
        }
    }

    /// Loads `path`, or starts an empty document when it does not exist yet.
    pub fn open(path: impl Into<PathBuf>, config: &EditorConfig) -> Result<Self, EditorError> {
        let mut model = Self::new(path, config);
        let loaded = DocumentFile::load(&model.path).map_err(|err| {
            EditorError::data(
                codes::LOAD_FAILED,
                err.to_string(),
                format!("cannot open {}", model.path.display()),
            )
        })?;
        if let Some(file) = loaded {
            model.buffer = TextBuffer::from_lines(&file.body);
            model.properties = file.properties;
            model.sessions = file.sessions;
        }
        tracing::info!(
            path = %model.path.display(),
            lines = model.buffer.len_lines(),
            sessions = model.sessions.len(),
            "document opened"
        );
        Ok(model)
    }

    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.buffer = TextBuffer::from_lines(lines);
        self.cursor = CursorPosition::default();
        self
    }

    pub fn with_speller(mut self, speller: Box<dyn SpellChecker>) -> Self {
        self.speller = speller;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_ready(&self) -> bool {
        self.ready && !self.closed
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Successful saves since the model was created.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    pub fn len_lines(&self) -> usize {
        self.buffer.len_lines()
    }

    pub fn line(&self, row: usize) -> Option<Cow<'_, str>> {
        self.buffer.line(row)
    }

    pub fn lines(&self) -> Vec<String> {
        self.buffer.lines()
    }

    pub fn word_count(&self) -> usize {
        self.buffer.word_count()
    }

    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    pub fn sessions(&self) -> &[SessionRecord] {
        &self.sessions
    }

    // -- notification ---------------------------------------------------

    pub fn subscribe(&mut self, view: SharedView) -> SubscriberId {
        self.subscribers.subscribe(view)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn subscribers(&self) -> &Subscribers {
        &self.subscribers
    }

    pub fn notify(&self, kind: ChangeKind) {
        self.subscribers
            .notify(&ChangeNotification::new(kind, self));
    }

    /// Forces a full redraw in every view.
    pub fn refresh(&self) {
        self.notify(ChangeKind::All);
    }

    /// Switches the active mode and its help text. Does not notify; the
    /// controller factory follows up with a full refresh.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.help_line = mode_help(mode).to_string();
        if mode == Mode::Spelling {
            self.spell_begin();
        }
    }

    // -- persistence ----------------------------------------------------

    /// Writes the document to its path. Failures are latched on the model
    /// as `Data` errors and returned.
    pub fn save(&mut self) -> Result<(), EditorError> {
        if self.closed {
            let err = EditorError::program(codes::MODEL_NOT_READY, "save after close");
            self.report(err.clone());
            return Err(err);
        }
        let file = DocumentFile {
            version: FORMAT_VERSION,
            properties: self.properties.clone(),
            sessions: self.sessions.clone(),
            body: self.buffer.lines(),
        };
        match file.save(&self.path) {
            Ok(()) => {
                self.modified = false;
                self.saves += 1;
                tracing::info!(path = %self.path.display(), "document saved");
                Ok(())
            }
            Err(err) => {
                let err = EditorError::data(
                    codes::SAVE_FAILED,
                    err.to_string(),
                    format!("cannot save {}", self.path.display()),
                );
                self.report(err.clone());
                Err(err)
            }
        }
    }

    /// Closes the model; `flush` saves first. The model is not ready afterwards.
    pub fn close(&mut self, flush: bool) -> Result<(), EditorError> {
        if self.closed {
            return Ok(());
        }
        let saved = if flush { self.save() } else { Ok(()) };
        self.closed = true;
        self.ready = false;
        tracing::info!(path = %self.path.display(), flush, "document closed");
        saved
    }
}

impl ErrorReporter for DocumentModel {
    fn error_state(&self) -> &ErrorState {
        &self.error
    }

    fn error_state_mut(&mut self) -> &mut ErrorState {
        &mut self.error
    }
}

fn mode_help(mode: Mode) -> &'static str {
    match mode {
        Mode::Text => "Text: type to write | Ins insert/overwrite | ^S save | F2 next mode | F1 help | ^Q quit",
        Mode::Properties => "Properties: Up/Down select field | Enter next field | F2 next mode | ^Q quit",
        Mode::Spelling => "Spelling: Right next | i ignore | 1-9 replace | F2 next mode | ^Q quit",
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/document.rs"]
mod tests;
