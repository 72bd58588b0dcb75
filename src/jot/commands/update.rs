use crate::backend::NotesBackend;
use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{JotError, Result};
use crate::model::NoteUpdate;

/// Overwrite a note's content. When `attachment` is `None` the note keeps
/// whatever attachment it already had.
pub async fn run<B: NotesBackend>(
    backend: &B,
    id_or_prefix: &str,
    content: String,
    attachment: Option<String>,
) -> Result<CmdResult> {
    if content.is_empty() {
        return Err(JotError::Api("Note content cannot be empty".into()));
    }

    let mut note = helpers::resolve_note(backend, id_or_prefix).await?;
    let update = NoteUpdate {
        content,
        attachment: attachment.or_else(|| note.attachment.clone()),
    };
    backend.update_note(&note.note_id, &update).await?;

    note.content = update.content;
    note.attachment = update.attachment;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note updated ({}): {}",
        note.note_id,
        note.title()
    )));
    result.affected_notes.push(note);
    Ok(result)
}
