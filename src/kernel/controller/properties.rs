use super::Controller;
use crate::core::command::Command;
use crate::core::error::EditorError;
use crate::core::event::KeyEvent;
use crate::kernel::document::DocumentModel;

pub(super) fn handle(
    ctl: &Controller,
    command: Option<Command>,
    key: KeyEvent,
    model: &mut DocumentModel,
) -> Result<(), EditorError> {
    let Some(command) = command else {
        return match key.text_char() {
            Some(ch) => model.field_insert_char(ch, ctl.insert_mode),
            None => Ok(()),
        };
    };
    match command {
        Command::CursorUp => model.select_prev_field(),
        Command::CursorDown | Command::InsertNewline => model.select_next_field(),
        Command::CursorLeft => model.field_cursor_left(),
        Command::CursorRight => model.field_cursor_right(),
        Command::CursorLineStart => model.field_cursor_home(),
        Command::CursorLineEnd => model.field_cursor_end(),
        Command::DeleteBackward => model.field_delete_backward(),
        Command::DeleteForward => model.field_delete_forward(),
        _ => Ok(()),
    }
}
