use crate::backend::NotesBackend;
use crate::commands::CmdResult;
use crate::error::Result;

/// Fetch the full note list. The snapshot the caller holds should be
/// replaced wholesale with this result, never merged.
pub async fn run<B: NotesBackend>(backend: &B) -> Result<CmdResult> {
    let notes = backend.list_notes().await?;
    Ok(CmdResult::default().with_listed_notes(notes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::memory::InMemoryBackend;
    use crate::model::fixtures;

    #[tokio::test]
    async fn returns_notes_in_server_order() {
        let notes = fixtures::notes(&[("n2", "Second Note"), ("n1", "First Note")]);
        let backend = InMemoryBackend::with_notes(notes);

        let result = run(&backend).await.unwrap();
        let ids: Vec<_> = result.listed_notes.iter().map(|n| n.note_id.as_str()).collect();
        assert_eq!(ids, vec!["n2", "n1"]);
    }
}
