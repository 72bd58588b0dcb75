use crate::model::Note;

/// Keep the notes whose content contains `term` as a literal, case-sensitive
/// substring, preserving the original order. An empty term keeps everything.
pub fn run(notes: &[Note], term: &str) -> Vec<Note> {
    if term.is_empty() {
        return notes.to_vec();
    }
    notes
        .iter()
        .filter(|note| note.content.contains(term))
        .cloned()
        .collect()
}
