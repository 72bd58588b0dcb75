use crate::backend::NotesBackend;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Note, NoteUpdate};
use futures_util::future::join_all;

/// First-occurrence-only substitution, the semantics of a single,
/// non-global string replace.
pub fn replace_first(content: &str, find: &str, replace: &str) -> String {
    content.replacen(find, replace, 1)
}

/// Persist a find & replace across the given (already filtered) notes.
///
/// One update per note, all issued before any is awaited, joined together.
/// A failed update does not cancel the others and there is no rollback; the
/// caller is told something failed, not which note.
pub async fn run<B: NotesBackend>(
    backend: &B,
    notes: &[Note],
    find: &str,
    replace: &str,
) -> Result<CmdResult> {
    if notes.is_empty() {
        return Ok(CmdResult::default());
    }

    log::info!("find & replace across {} notes", notes.len());

    let updates: Vec<_> = notes
        .iter()
        .map(|note| {
            let body = NoteUpdate {
                content: replace_first(&note.content, find, replace),
                attachment: None,
            };
            async move { backend.update_note(&note.note_id, &body).await }
        })
        .collect();

    let outcomes = join_all(updates).await;
    let failed = outcomes.iter().filter(|o| o.is_err()).count();

    let mut result = CmdResult::default();
    if failed > 0 {
        log::warn!("{} of {} updates failed", failed, outcomes.len());
        result.add_message(CmdMessage::error(format!(
            "Find & replace failed for {} of {} notes.",
            failed,
            outcomes.len()
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Replaced '{}' with '{}' in {} notes.",
            find,
            replace,
            outcomes.len()
        )));
    }
    Ok(result)
}
