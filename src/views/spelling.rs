//! Spelling correction view: the body with the unknown word highlighted,
//! and the word and its suggestions on the last two rows of the edit area.

use super::canvas::ViewBase;
use super::layout::ScreenLayout;
use super::palette::Palette;
use super::text_edit::{draw_body_row, draw_rulers, follow_cursor, park_body_cursor};
use super::viewport::Viewport;
use super::View;
use crate::core::error::{EditorError, ErrorReporter, ErrorState};
use crate::core::mode::Mode;
use crate::core::text_window::{cell_slice, cell_span};
use crate::kernel::document::DocumentModel;
use crate::kernel::notify::{ChangeKind, ChangeNotification};
use crate::services::config::EditorConfig;
use crate::tui::console::SharedConsole;

const PANEL_ROWS: usize = 2;

pub struct SpellingView {
    base: ViewBase,
    viewport: Viewport,
    text_offset: usize,
    rulers: bool,
    palette: Palette,
    active: bool,
}

impl SpellingView {
    pub fn new(console: SharedConsole) -> Self {
        Self {
            base: ViewBase::new("spelling", console),
            viewport: Viewport::default(),
            text_offset: 0,
            rulers: false,
            palette: Palette::default(),
            active: false,
        }
    }

    /// The "unknown word" row of the panel as last drawn.
    pub fn word_text(&self) -> &str {
        self.base.line_text(self.panel_row())
    }

    pub fn suggestions_text(&self) -> &str {
        self.base.line_text(self.panel_row() + 1)
    }

    fn panel_row(&self) -> usize {
        self.text_offset + self.viewport.height
    }

    fn update(&mut self, notification: &ChangeNotification<'_>) -> Result<(), EditorError> {
        let doc = notification.document;
        let scrolled = follow_cursor(&mut self.viewport, doc);
        match notification.kind {
            ChangeKind::All | ChangeKind::Spell => self.repaint(doc)?,
            _ if scrolled => self.repaint(doc)?,
            _ => {}
        }
        park_body_cursor(&mut self.base, &self.viewport, self.text_offset, doc)
    }

    fn repaint(&mut self, doc: &DocumentModel) -> Result<(), EditorError> {
        self.base.begin_repaint();
        if self.rulers {
            draw_rulers(&mut self.base, &self.viewport, &self.palette)?;
        }
        for row in self.viewport.rows() {
            draw_body_row(&mut self.base, &self.viewport, doc, self.text_offset, row)?;
        }
        self.highlight_target(doc)?;
        self.draw_panel(doc)
    }

    fn highlight_target(&mut self, doc: &DocumentModel) -> Result<(), EditorError> {
        let Some(target) = doc.spell_target() else {
            return Ok(());
        };
        if !self.viewport.rows().contains(&target.row) {
            return Ok(());
        }
        let Some(line) = doc.line(target.row) else {
            return Ok(());
        };
        let left = self.viewport.left_col;
        let right = left + self.viewport.width;
        let start = cell_span(&line, target.start).0.max(left);
        let end = cell_span(&line, target.end).0.min(right);
        if start >= end {
            return Ok(());
        }
        let word = cell_slice(&line, start, end - start);
        let row = self.text_offset + target.row - self.viewport.top_line;
        self.base
            .display_word(row, start - left, &word, self.palette.highlight)
    }

    fn draw_panel(&mut self, doc: &DocumentModel) -> Result<(), EditorError> {
        let row = self.panel_row();
        let (word, choices) = match doc.spell_target() {
            Some(target) => {
                let choices = if doc.spell_suggestions().is_empty() {
                    "(no suggestions)".to_string()
                } else {
                    doc.spell_suggestions()
                        .iter()
                        .enumerate()
                        .map(|(i, s)| format!("{} {s}", i + 1))
                        .collect::<Vec<_>>()
                        .join("  ")
                };
                (format!("Unknown word: {}", target.word), choices)
            }
            None => ("No unknown words".to_string(), String::new()),
        };
        self.base
            .display_styled(row, 0, &word, true, self.palette.message)?;
        self.base.display_line(row + 1, 0, &choices, true)
    }
}

impl View for SpellingView {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn setup(&mut self, config: &EditorConfig, layout: &ScreenLayout) -> Result<(), EditorError> {
        self.palette = Palette::for_scheme(config.colour_scheme);
        self.base.bind(layout.edit_block, self.palette.text);
        let rows = (layout.edit.height as usize).saturating_sub(PANEL_ROWS).max(1);
        self.viewport = Viewport::new(rows, layout.edit.width as usize);
        self.text_offset = layout.text_offset();
        self.rulers = layout.rulers;
        Ok(())
    }

    fn on_update(&mut self, notification: &ChangeNotification<'_>) {
        self.active = notification.document.mode() == Mode::Spelling;
        if !self.is_ready() {
            return;
        }
        if let Err(err) = self.update(notification) {
            self.report(err);
        }
    }

    fn is_ready(&self) -> bool {
        self.base.is_ready() && self.active
    }

    fn rendered_lines(&self) -> &[String] {
        self.base.rendered_lines()
    }

    fn repaint_count(&self) -> usize {
        self.base.repaint_count()
    }
}

impl ErrorReporter for SpellingView {
    fn error_state(&self) -> &ErrorState {
        &self.base.error
    }

    fn error_state_mut(&mut self) -> &mut ErrorState {
        &mut self.base.error
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/spelling.rs"]
mod tests;
