use crate::backend::NotesBackend;
use crate::error::{JotError, Result};
use crate::model::Note;

/// Resolve a user-supplied id or unique id prefix against the server's note
/// list. Exact matches win over prefix matches.
pub async fn resolve_note<B: NotesBackend>(backend: &B, id_or_prefix: &str) -> Result<Note> {
    let notes = backend.list_notes().await?;

    if let Some(note) = notes.iter().find(|n| n.note_id == id_or_prefix) {
        return Ok(note.clone());
    }

    let mut matches = notes.iter().filter(|n| n.note_id.starts_with(id_or_prefix));
    match (matches.next(), matches.next()) {
        (Some(note), None) => Ok(note.clone()),
        (Some(_), Some(_)) => Err(JotError::AmbiguousNoteId(id_or_prefix.to_string())),
        (None, _) => Err(JotError::NoteNotFound(id_or_prefix.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::memory::InMemoryBackend;
    use crate::model::fixtures;

    #[tokio::test]
    async fn resolves_unique_prefix() {
        let backend = InMemoryBackend::with_notes(fixtures::notes(&[
            ("abc-123", "A"),
            ("def-456", "B"),
        ]));
        let note = resolve_note(&backend, "abc").await.unwrap();
        assert_eq!(note.note_id, "abc-123");
    }

    #[tokio::test]
    async fn ambiguous_prefix_is_an_error() {
        let backend = InMemoryBackend::with_notes(fixtures::notes(&[
            ("abc-123", "A"),
            ("abc-456", "B"),
        ]));
        let err = resolve_note(&backend, "abc").await.unwrap_err();
        assert!(matches!(err, JotError::AmbiguousNoteId(_)));
    }

    #[tokio::test]
    async fn exact_id_wins_over_prefix_matches() {
        let backend = InMemoryBackend::with_notes(fixtures::notes(&[
            ("abc", "A"),
            ("abc-456", "B"),
        ]));
        let note = resolve_note(&backend, "abc").await.unwrap();
        assert_eq!(note.content, "A");
    }

    #[tokio::test]
    async fn unknown_prefix_is_not_found() {
        let backend = InMemoryBackend::with_notes(fixtures::notes(&[("abc", "A")]));
        let err = resolve_note(&backend, "zzz").await.unwrap_err();
        assert!(matches!(err, JotError::NoteNotFound(_)));
    }
}
