use crate::backend::NotesBackend;
use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;

pub async fn run<B: NotesBackend>(backend: &B, id_or_prefix: &str) -> Result<CmdResult> {
    let note = helpers::resolve_note(backend, id_or_prefix).await?;
    backend.delete_note(&note.note_id).await?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note deleted ({}): {}",
        note.note_id,
        note.title()
    )));
    result.affected_notes.push(note);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::memory::InMemoryBackend;
    use crate::error::JotError;
    use crate::model::fixtures;

    #[tokio::test]
    async fn deletes_note_by_prefix() {
        let backend = InMemoryBackend::with_notes(fixtures::notes(&[
            ("abc-123", "First Note"),
            ("def-456", "Second Note"),
        ]));
        run(&backend, "abc").await.unwrap();
        assert_eq!(backend.note_contents(), vec!["Second Note"]);
    }

    #[tokio::test]
    async fn deleting_unknown_note_fails() {
        let backend = InMemoryBackend::new();
        let err = run(&backend, "zzz").await.unwrap_err();
        assert!(matches!(err, JotError::NoteNotFound(_)));
    }
}
