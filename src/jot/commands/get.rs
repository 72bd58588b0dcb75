use crate::backend::NotesBackend;
use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;

/// Fetch one note. When it carries an attachment, also resolve a signed
/// download URL; a failed resolution degrades to a warning rather than
/// hiding the note.
pub async fn run<B: NotesBackend>(backend: &B, id_or_prefix: &str) -> Result<CmdResult> {
    let note = helpers::resolve_note(backend, id_or_prefix).await?;

    let mut result = CmdResult::default();
    if let Some(key) = &note.attachment {
        match backend.attachment_url(key).await {
            Ok(url) => result.attachment_url = Some(url),
            Err(e) => result.add_message(CmdMessage::warning(format!(
                "Could not resolve attachment URL: {}",
                e
            ))),
        }
    }
    result.affected_notes.push(note);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::memory::InMemoryBackend;
    use crate::model::fixtures;

    #[tokio::test]
    async fn fetches_note_without_attachment() {
        let backend = InMemoryBackend::with_notes(fixtures::notes(&[("n1", "First Note")]));
        let result = run(&backend, "n1").await.unwrap();
        assert_eq!(result.affected_notes[0].content, "First Note");
        assert!(result.attachment_url.is_none());
    }

    #[tokio::test]
    async fn resolves_signed_url_for_attachment() {
        let mut note = fixtures::note("n1", "First Note");
        note.attachment = Some("1614759711814-photo.jpg".to_string());
        let backend = InMemoryBackend::with_notes(vec![note]);

        let result = run(&backend, "n1").await.unwrap();
        assert_eq!(
            result.attachment_url.as_deref(),
            Some("https://storage.example.com/1614759711814-photo.jpg")
        );
    }
}
