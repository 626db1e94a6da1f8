//! Header field editor shown in properties mode.

use super::canvas::ViewBase;
use super::layout::ScreenLayout;
use super::palette::Palette;
use super::viewport::Viewport;
use super::View;
use crate::core::error::{EditorError, ErrorReporter, ErrorState};
use crate::core::geom::CursorPosition;
use crate::core::mode::Mode;
use crate::core::text_window::{cell_slice, cell_span};
use crate::kernel::document::DocumentModel;
use crate::kernel::notify::{ChangeKind, ChangeNotification};
use crate::models::PropertyField;
use crate::services::config::EditorConfig;
use crate::tui::console::SharedConsole;

/// `"Project : "`
const LABEL_WIDTH: usize = 10;

pub struct PropertiesView {
    base: ViewBase,
    text_offset: usize,
    spacing: usize,
    palette: Palette,
    /// Horizontal scroll of the selected field's value.
    field_view: Viewport,
    selected: PropertyField,
    active: bool,
}

impl PropertiesView {
    pub fn new(console: SharedConsole) -> Self {
        Self {
            base: ViewBase::new("properties", console),
            text_offset: 0,
            spacing: 1,
            palette: Palette::default(),
            field_view: Viewport::default(),
            selected: PropertyField::Title,
            active: false,
        }
    }

    pub fn field_text(&self, field: PropertyField) -> &str {
        self.base.line_text(self.field_row(field))
    }

    fn field_row(&self, field: PropertyField) -> usize {
        let idx = PropertyField::ALL
            .iter()
            .position(|f| *f == field)
            .unwrap_or(0);
        self.text_offset + idx * self.spacing
    }

    fn update(&mut self, notification: &ChangeNotification<'_>) -> Result<(), EditorError> {
        let doc = notification.document;
        if doc.selected_field() != self.selected {
            self.selected = doc.selected_field();
            self.field_view.left_col = 0;
        }
        let (col, glyph) = cell_span(doc.properties().get(self.selected), doc.field_col());
        let cursor = CursorPosition::new(0, col);
        let scrolled = self.field_view.follow_span(cursor, glyph, 1);
        match notification.kind {
            ChangeKind::All | ChangeKind::Props => self.repaint(doc)?,
            _ if scrolled => self.draw_field(doc, self.selected)?,
            _ => {}
        }
        let at = self.field_view.to_viewport(cursor)?;
        let row = self.field_row(self.selected);
        self.base.park_cursor(row, LABEL_WIDTH + at.col)
    }

    fn repaint(&mut self, doc: &DocumentModel) -> Result<(), EditorError> {
        self.base.begin_repaint();
        self.base.clear()?;
        for field in PropertyField::ALL {
            self.draw_field(doc, field)?;
        }
        Ok(())
    }

    fn draw_field(&mut self, doc: &DocumentModel, field: PropertyField) -> Result<(), EditorError> {
        let row = self.field_row(field);
        let label = format!("{:<8}: ", field.label());
        let colours = if field == self.selected {
            self.palette.highlight
        } else {
            self.palette.text
        };
        self.base.display_styled(row, 0, &label, false, colours)?;
        let left = if field == self.selected {
            self.field_view.left_col
        } else {
            0
        };
        let value = cell_slice(doc.properties().get(field), left, self.field_view.width);
        self.base.display_line(row, LABEL_WIDTH, &value, true)
    }
}

impl View for PropertiesView {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn setup(&mut self, config: &EditorConfig, layout: &ScreenLayout) -> Result<(), EditorError> {
        self.palette = Palette::for_scheme(config.colour_scheme);
        self.base.bind(layout.edit_block, self.palette.text);
        self.text_offset = layout.text_offset();
        let rows = layout.edit.height as usize;
        self.spacing = if rows >= 2 * PropertyField::ALL.len() - 1 {
            2
        } else {
            1
        };
        self.field_view = Viewport::new(1, (layout.edit.width as usize).saturating_sub(LABEL_WIDTH));
        Ok(())
    }

    fn on_update(&mut self, notification: &ChangeNotification<'_>) {
        self.active = notification.document.mode() == Mode::Properties;
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

impl ErrorReporter for PropertiesView {
    fn error_state(&self) -> &ErrorState {
        &self.base.error
    }

    fn error_state_mut(&mut self) -> &mut ErrorState {
        &mut self.base.error
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/properties.rs"]
mod tests;
