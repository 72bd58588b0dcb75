use super::NotesBackend;
use crate::error::{JotError, Result};
use crate::model::{NewNote, Note, NoteUpdate};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use uuid::Uuid;

/// A recorded `update_note` call: (note id, new content).
pub type UpdateCall = (String, String);

/// In-memory backend for testing and development.
/// Does NOT persist data. Records every update call so tests can assert on
/// exactly which requests the find & replace fan-out issued.
#[derive(Default)]
pub struct InMemoryBackend {
    notes: Mutex<Vec<Note>>,
    attachments: Mutex<Vec<String>>,
    update_calls: Mutex<Vec<UpdateCall>>,
    fail_updates: Mutex<Vec<String>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: Mutex::new(notes),
            ..Self::default()
        }
    }

    /// Every update call seen so far, in completion order.
    pub fn update_calls(&self) -> Vec<UpdateCall> {
        self.update_calls.lock().clone()
    }

    /// Make subsequent updates of the given note fail.
    pub fn fail_updates_for(&self, note_id: &str) {
        self.fail_updates.lock().push(note_id.to_string());
    }

    pub fn note_contents(&self) -> Vec<String> {
        self.notes.lock().iter().map(|n| n.content.clone()).collect()
    }
}

#[async_trait]
impl NotesBackend for InMemoryBackend {
    async fn list_notes(&self) -> Result<Vec<Note>> {
        Ok(self.notes.lock().clone())
    }

    async fn get_note(&self, note_id: &str) -> Result<Note> {
        self.notes
            .lock()
            .iter()
            .find(|n| n.note_id == note_id)
            .cloned()
            .ok_or_else(|| JotError::NoteNotFound(note_id.to_string()))
    }

    async fn create_note(&self, note: &NewNote) -> Result<Note> {
        let stored = Note {
            note_id: Uuid::new_v4().to_string(),
            user_id: "user-1".to_string(),
            content: note.content.clone(),
            attachment: note.attachment.clone(),
            created_at: Utc::now(),
        };
        self.notes.lock().push(stored.clone());
        Ok(stored)
    }

    async fn update_note(&self, note_id: &str, update: &NoteUpdate) -> Result<()> {
        self.update_calls
            .lock()
            .push((note_id.to_string(), update.content.clone()));

        if self.fail_updates.lock().iter().any(|id| id == note_id) {
            return Err(JotError::Http {
                status: 500,
                body: "injected failure".to_string(),
            });
        }

        let mut notes = self.notes.lock();
        let note = notes
            .iter_mut()
            .find(|n| n.note_id == note_id)
            .ok_or_else(|| JotError::NoteNotFound(note_id.to_string()))?;
        note.content = update.content.clone();
        if let Some(attachment) = &update.attachment {
            note.attachment = Some(attachment.clone());
        }
        Ok(())
    }

    async fn delete_note(&self, note_id: &str) -> Result<()> {
        let mut notes = self.notes.lock();
        let before = notes.len();
        notes.retain(|n| n.note_id != note_id);
        if notes.len() == before {
            return Err(JotError::NoteNotFound(note_id.to_string()));
        }
        Ok(())
    }

    async fn upload_attachment(&self, filename: &str, _bytes: Vec<u8>) -> Result<String> {
        self.attachments.lock().push(filename.to_string());
        Ok(filename.to_string())
    }

    async fn attachment_url(&self, key: &str) -> Result<String> {
        Ok(format!("https://storage.example.com/{}", key))
    }
}
