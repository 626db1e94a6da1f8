//! The body text editor view.
//!
//! Owns the edit block while the document is in text mode. `Line` and `End`
//! notifications redraw only the rows they touch; any scroll repaints the
//! whole block. The hardware cursor is parked last on every notification.

use super::canvas::{ruler, ViewBase};
use super::layout::ScreenLayout;
use super::palette::Palette;
use super::viewport::Viewport;
use super::View;
use crate::core::error::{EditorError, ErrorReporter, ErrorState};
use crate::core::mode::Mode;
use crate::core::geom::CursorPosition;
use crate::core::text_window::{cell_slice, cell_span};
use crate::kernel::document::DocumentModel;
use crate::kernel::notify::{ChangeKind, ChangeNotification};
use crate::services::config::EditorConfig;
use crate::tui::console::SharedConsole;

pub struct TextEditView {
    base: ViewBase,
    viewport: Viewport,
    text_offset: usize,
    rulers: bool,
    palette: Palette,
    active: bool,
}

impl TextEditView {
    pub fn new(console: SharedConsole) -> Self {
        Self {
            base: ViewBase::new("text", console),
            viewport: Viewport::default(),
            text_offset: 0,
            rulers: false,
            palette: Palette::default(),
            active: false,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Body row `row` of the viewport as last drawn.
    pub fn body_text(&self, row: usize) -> &str {
        self.base.line_text(self.text_offset + row)
    }

    fn update(&mut self, notification: &ChangeNotification<'_>) -> Result<(), EditorError> {
        let doc = notification.document;
        let cursor = doc.cursor();
        let scrolled = follow_cursor(&mut self.viewport, doc);
        match notification.kind {
            ChangeKind::All => self.repaint(doc)?,
            _ if scrolled => self.repaint(doc)?,
            ChangeKind::Line => {
                draw_body_row(&mut self.base, &self.viewport, doc, self.text_offset, cursor.row)?
            }
            ChangeKind::End => {
                for row in cursor.row.saturating_sub(1)..self.viewport.rows().end {
                    draw_body_row(&mut self.base, &self.viewport, doc, self.text_offset, row)?;
                }
            }
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
        Ok(())
    }
}

impl View for TextEditView {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn setup(&mut self, config: &EditorConfig, layout: &ScreenLayout) -> Result<(), EditorError> {
        self.palette = Palette::for_scheme(config.colour_scheme);
        self.base.bind(layout.edit_block, self.palette.text);
        self.viewport = Viewport::new(layout.edit.height as usize, layout.edit.width as usize);
        self.text_offset = layout.text_offset();
        self.rulers = layout.rulers;
        Ok(())
    }

    fn on_update(&mut self, notification: &ChangeNotification<'_>) {
        self.active = notification.document.mode() == Mode::Text;
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

impl ErrorReporter for TextEditView {
    fn error_state(&self) -> &ErrorState {
        &self.base.error
    }

    fn error_state_mut(&mut self) -> &mut ErrorState {
        &mut self.base.error
    }
}

/// Draws document row `doc_row` if it is visible; rows past the end of the
/// document are blanked.
pub(super) fn draw_body_row(
    base: &mut ViewBase,
    viewport: &Viewport,
    doc: &DocumentModel,
    text_offset: usize,
    doc_row: usize,
) -> Result<(), EditorError> {
    if !viewport.rows().contains(&doc_row) {
        return Ok(());
    }
    let line = doc.line(doc_row).unwrap_or_default();
    let visible = cell_slice(&line, viewport.left_col, viewport.width);
    base.display_line(text_offset + doc_row - viewport.top_line, 0, &visible, true)
}

pub(super) fn draw_rulers(
    base: &mut ViewBase,
    viewport: &Viewport,
    palette: &Palette,
) -> Result<(), EditorError> {
    let text = ruler(viewport.left_col, base.width());
    let bottom = base.height() - 1;
    base.display_styled(0, 0, &text, true, palette.ruler)?;
    base.display_styled(bottom, 0, &text, true, palette.ruler)
}

pub(super) fn park_body_cursor(
    base: &mut ViewBase,
    viewport: &Viewport,
    text_offset: usize,
    doc: &DocumentModel,
) -> Result<(), EditorError> {
    let (cell, _) = cursor_cells(doc);
    let at = viewport.to_viewport(cell)?;
    base.park_cursor(text_offset + at.row, at.col)
}

/// The document cursor with its column in display cells, and the width of
/// the glyph under it.
pub(super) fn cursor_cells(doc: &DocumentModel) -> (CursorPosition, usize) {
    let cursor = doc.cursor();
    let line = doc.line(cursor.row).unwrap_or_default();
    let (col, glyph) = cell_span(&line, cursor.col);
    (CursorPosition::new(cursor.row, col), glyph)
}

pub(super) fn follow_cursor(viewport: &mut Viewport, doc: &DocumentModel) -> bool {
    let (cell, glyph) = cursor_cells(doc);
    viewport.follow_span(cell, glyph, doc.len_lines())
}

#[cfg(test)]
#[path = "../../tests/unit/views/text_edit.rs"]
mod tests;
