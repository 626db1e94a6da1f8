//! Writing-session bookkeeping: session records and idle pauses.

use super::DocumentModel;
use crate::core::codes;
use crate::core::error::EditorError;
use crate::kernel::notify::ChangeKind;
use crate::models::session_log::unix_now;
use crate::models::{PauseChange, SessionRecord};
use std::time::Instant;

impl DocumentModel {
    /// Opens a new session record at `now`.
    pub fn create_new_session(&mut self, now: Instant) -> Result<(), EditorError> {
        if !self.is_ready() {
            return Err(EditorError::program(
                codes::MODEL_NOT_READY,
                "cannot start a session on a closed document",
            ));
        }
        if self.sessions.last().is_some_and(SessionRecord::is_open) {
            return Err(EditorError::program(
                codes::SESSION_ALREADY_OPEN,
                "a writing session is already open",
            ));
        }
        self.sessions.push(SessionRecord {
            started_at: unix_now(),
            ended_at: None,
            start_words: self.buffer.word_count(),
            end_words: None,
            pauses: Vec::new(),
        });
        self.pauses.begin_session(now);
        tracing::info!(session = self.sessions.len(), "writing session started");
        Ok(())
    }

    pub fn is_paused(&self) -> bool {
        self.pauses.is_paused()
    }

    /// Opens or closes an idle pause. A change refreshes the status line.
    pub fn pause_processing(
        &mut self,
        now: Instant,
        last_key: Instant,
        key_just_pressed: bool,
    ) -> Result<(), EditorError> {
        let threshold = self.pause_threshold;
        let Some(record) = self.sessions.last_mut().filter(|r| r.is_open()) else {
            return Err(no_open_session());
        };
        let change = self
            .pauses
            .update(now, last_key, key_just_pressed, threshold, record);
        match change {
            PauseChange::None => return Ok(()),
            PauseChange::Started => tracing::debug!("writing paused"),
            PauseChange::Ended(length) => {
                tracing::debug!(secs = length.as_secs(), "writing resumed")
            }
        }
        self.status_line = self.format_status(now);
        self.notify(ChangeKind::StatusLine);
        Ok(())
    }

    /// Closes any open pause and stamps the end of the running session.
    pub fn process_session_done(
        &mut self,
        now: Instant,
        last_key: Instant,
    ) -> Result<(), EditorError> {
        let words = self.buffer.word_count();
        let threshold = self.pause_threshold;
        let Some(record) = self.sessions.last_mut().filter(|r| r.is_open()) else {
            return Err(no_open_session());
        };
        // Idle since the last key long enough to count as a pause.
        self.pauses.update(now, last_key, false, threshold, record);
        self.pauses.finish(now, record);
        record.ended_at = Some(unix_now());
        record.end_words = Some(words);
        tracing::info!(
            words,
            paused_secs = record.paused_secs(),
            "writing session finished"
        );
        Ok(())
    }
}

fn no_open_session() -> EditorError {
    EditorError::program(codes::NO_OPEN_SESSION, "no writing session is open")
}
