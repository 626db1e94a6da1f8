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
            Some(ch) => model.insert_char(ch, ctl.insert_mode),
            None => Ok(()),
        };
    };
    match command {
        Command::CursorLeft => model.cursor_left(),
        Command::CursorRight => model.cursor_right(),
        Command::CursorUp => model.cursor_up(),
        Command::CursorDown => model.cursor_down(),
        Command::CursorLineStart => model.cursor_line_start(),
        Command::CursorLineEnd => model.cursor_line_end(),
        Command::CursorFileStart => model.cursor_file_start(),
        Command::CursorFileEnd => model.cursor_file_end(),
        Command::PageUp => model.page_up(ctl.page_rows),
        Command::PageDown => model.page_down(ctl.page_rows),
        Command::InsertNewline => model.split_line(),
        Command::DeleteBackward => model.delete_backward(),
        Command::DeleteForward => model.delete_forward(),
        _ => Ok(()),
    }
}
