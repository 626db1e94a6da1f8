//! The single-line texts around the edit area.

use super::DocumentModel;
use crate::kernel::notify::ChangeKind;
use std::time::{Duration, Instant};

impl DocumentModel {
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    pub fn msg_line(&self) -> &str {
        &self.msg_line
    }

    pub fn help_line(&self) -> &str {
        &self.help_line
    }

    pub fn cmd_line(&self) -> &str {
        &self.cmd_line
    }

    /// Recomputes the status line for `now`.
    pub fn set_status_line(&mut self, now: Instant) {
        self.status_line = self.format_status(now);
        self.notify(ChangeKind::StatusLine);
    }

    pub fn set_msg_line(&mut self, text: impl Into<String>) {
        self.msg_line = text.into();
        self.notify(ChangeKind::MsgLine);
    }

    pub fn clear_msg_line(&mut self) {
        if self.msg_line.is_empty() {
            return;
        }
        self.set_msg_line(String::new());
    }

    pub fn set_cmd_line(&mut self, text: impl Into<String>) {
        self.cmd_line = text.into();
        self.notify(ChangeKind::Cmd);
    }

    pub(super) fn format_status(&self, now: Instant) -> String {
        let title = if self.properties.title.is_empty() {
            self.path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "untitled".to_string())
        } else {
            self.properties.title.clone()
        };
        let words = self.buffer.word_count();
        let (delta, active, state) = match self.sessions.last().filter(|s| s.is_open()) {
            Some(record) => (
                words as i64 - record.start_words as i64,
                self.pauses.active_time(now, record),
                if self.pauses.is_paused() {
                    "paused"
                } else {
                    "typing"
                },
            ),
            None => (0, Duration::ZERO, "typing"),
        };
        let secs = active.as_secs();
        format!(
            "{title} | Ln {}/{} Col {} | Words {words} ({delta:+}) | session {:02}:{:02} | {state}",
            self.cursor.row + 1,
            self.buffer.len_lines(),
            self.cursor.col + 1,
            secs / 60,
            secs % 60,
        )
    }
}
