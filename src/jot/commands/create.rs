use crate::backend::NotesBackend;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{JotError, Result};
use crate::model::NewNote;

pub async fn run<B: NotesBackend>(
    backend: &B,
    content: String,
    attachment: Option<String>,
) -> Result<CmdResult> {
    if content.is_empty() {
        return Err(JotError::Api("Note content cannot be empty".into()));
    }

    let note = backend.create_note(&NewNote { content, attachment }).await?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note created ({}): {}",
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

    #[tokio::test]
    async fn creates_note_with_content() {
        let backend = InMemoryBackend::new();
        let result = run(&backend, "A new note".into(), None).await.unwrap();
        assert_eq!(result.affected_notes.len(), 1);
        assert_eq!(backend.note_contents(), vec!["A new note"]);
    }

    #[tokio::test]
    async fn rejects_empty_content() {
        let backend = InMemoryBackend::new();
        let err = run(&backend, String::new(), None).await.unwrap_err();
        assert!(matches!(err, JotError::Api(_)));
    }

    #[tokio::test]
    async fn carries_attachment_key() {
        let backend = InMemoryBackend::new();
        let result = run(&backend, "With file".into(), Some("123-file.png".into()))
            .await
            .unwrap();
        assert_eq!(
            result.affected_notes[0].attachment.as_deref(),
            Some("123-file.png")
        );
    }
}
