//! Editing the document's header fields.

use super::DocumentModel;
use crate::core::codes;
use crate::core::error::EditorError;
use crate::kernel::notify::ChangeKind;
use crate::models::PropertyField;

impl DocumentModel {
    pub fn selected_field(&self) -> PropertyField {
        self.selected_field
    }

    /// Cursor column inside the selected field's value.
    pub fn field_col(&self) -> usize {
        self.field_col
    }

    pub fn select_next_field(&mut self) -> Result<(), EditorError> {
        let idx = field_index(self.selected_field);
        let Some(next) = PropertyField::ALL.get(idx + 1) else {
            return Err(EditorError::user(
                codes::AT_LAST_FIELD,
                "already on the last field",
            ));
        };
        self.select_field(*next);
        Ok(())
    }

    pub fn select_prev_field(&mut self) -> Result<(), EditorError> {
        let idx = field_index(self.selected_field);
        let Some(prev) = idx.checked_sub(1).map(|i| PropertyField::ALL[i]) else {
            return Err(EditorError::user(
                codes::AT_FIRST_FIELD,
                "already on the first field",
            ));
        };
        self.select_field(prev);
        Ok(())
    }

    pub fn field_insert_char(&mut self, ch: char, insert_mode: bool) -> Result<(), EditorError> {
        let field = self.selected_field;
        let col = self.field_col;
        let value = self.properties.get_mut(field);
        let len = value.chars().count();
        let overwrite = !insert_mode && col < len;
        if !overwrite && len >= field.max_len() {
            return Err(EditorError::user(
                codes::FIELD_FULL,
                format!("{} is limited to {} characters", field.label(), field.max_len()),
            ));
        }
        let mut chars: Vec<char> = value.chars().collect();
        let ch = if ch.is_control() { ' ' } else { ch };
        if overwrite {
            chars[col] = ch;
        } else {
            chars.insert(col.min(len), ch);
        }
        *value = chars.into_iter().collect();
        self.field_col = col.min(len) + 1;
        self.modified = true;
        self.notify(ChangeKind::Props);
        Ok(())
    }

    pub fn field_delete_backward(&mut self) -> Result<(), EditorError> {
        if self.field_col == 0 {
            return Err(EditorError::user(
                codes::AT_LINE_START,
                "already at the start of the field",
            ));
        }
        self.field_col -= 1;
        self.remove_field_char(self.field_col);
        Ok(())
    }

    pub fn field_delete_forward(&mut self) -> Result<(), EditorError> {
        if self.field_col >= self.field_len() {
            return Err(EditorError::user(
                codes::AT_LINE_END,
                "already at the end of the field",
            ));
        }
        self.remove_field_char(self.field_col);
        Ok(())
    }

    pub fn field_cursor_left(&mut self) -> Result<(), EditorError> {
        if self.field_col == 0 {
            return Err(EditorError::user(
                codes::AT_LINE_START,
                "already at the start of the field",
            ));
        }
        self.field_col -= 1;
        self.notify(ChangeKind::Cursor);
        Ok(())
    }

    pub fn field_cursor_right(&mut self) -> Result<(), EditorError> {
        if self.field_col >= self.field_len() {
            return Err(EditorError::user(
                codes::AT_LINE_END,
                "already at the end of the field",
            ));
        }
        self.field_col += 1;
        self.notify(ChangeKind::Cursor);
        Ok(())
    }

    pub fn field_cursor_home(&mut self) -> Result<(), EditorError> {
        if self.field_col == 0 {
            return Err(EditorError::user(
                codes::AT_LINE_START,
                "already at the start of the field",
            ));
        }
        self.field_col = 0;
        self.notify(ChangeKind::Cursor);
        Ok(())
    }

    pub fn field_cursor_end(&mut self) -> Result<(), EditorError> {
        let len = self.field_len();
        if self.field_col >= len {
            return Err(EditorError::user(
                codes::AT_LINE_END,
                "already at the end of the field",
            ));
        }
        self.field_col = len;
        self.notify(ChangeKind::Cursor);
        Ok(())
    }

    fn field_len(&self) -> usize {
        self.properties.get(self.selected_field).chars().count()
    }

    fn select_field(&mut self, field: PropertyField) {
        self.selected_field = field;
        self.field_col = self.properties.get(field).chars().count();
        self.notify(ChangeKind::Props);
    }

    fn remove_field_char(&mut self, col: usize) {
        let value = self.properties.get_mut(self.selected_field);
        *value = value
            .chars()
            .enumerate()
            .filter_map(|(i, c)| (i != col).then_some(c))
            .collect();
        self.modified = true;
        self.notify(ChangeKind::Props);
    }
}

fn field_index(field: PropertyField) -> usize {
    PropertyField::ALL
        .iter()
        .position(|f| *f == field)
        .unwrap_or(0)
}
