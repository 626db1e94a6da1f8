use crate::core::command::Command;
use crate::core::error::EditorError;
use crate::kernel::document::DocumentModel;

/// Spelling mode never types into the body; unbound keys are ignored.
pub(super) fn handle(
    command: Option<Command>,
    model: &mut DocumentModel,
) -> Result<(), EditorError> {
    match command {
        Some(Command::SpellNext) => model.spell_next(),
        Some(Command::SpellIgnore) => model.spell_ignore(),
        Some(Command::SpellReplace(n)) => model.spell_replace(usize::from(n)),
        _ => Ok(()),
    }
}
