//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for one-shot operations, regardless of the UI driving
//! them. The home screen's stateful flows (filter, find & replace) live in
//! [`crate::screen`]; everything that doesn't need screen state dispatches
//! through here.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Terminal I/O**: No stdout, stderr, or output formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over NotesBackend
//!
//! `NotesApi<B: NotesBackend>` is generic over the backend:
//! - Production: `NotesApi<HttpBackend>`
//! - Testing: `NotesApi<InMemoryBackend>`
//!
//! This enables testing the API layer without touching the network.

use crate::backend::NotesBackend;
use crate::commands;
use crate::error::Result;
use std::path::Path;

/// The main API facade for jot operations.
///
/// Generic over `NotesBackend` to allow different transports.
/// All UI clients (CLI, TUI, etc.) should interact through this API.
pub struct NotesApi<B: NotesBackend> {
    backend: B,
}

impl<B: NotesBackend> NotesApi<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub async fn list_notes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.backend).await
    }

    pub async fn get_note(&self, id_or_prefix: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.backend, id_or_prefix).await
    }

    pub async fn create_note(
        &self,
        content: String,
        attachment: Option<String>,
    ) -> Result<commands::CmdResult> {
        commands::create::run(&self.backend, content, attachment).await
    }

    pub async fn update_note(
        &self,
        id_or_prefix: &str,
        content: String,
        attachment: Option<String>,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&self.backend, id_or_prefix, content, attachment).await
    }

    pub async fn delete_note(&self, id_or_prefix: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&self.backend, id_or_prefix).await
    }

    pub async fn upload_attachment(&self, path: &Path, max_size: u64) -> Result<String> {
        commands::attach::run(&self.backend, path, max_size).await
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::memory::InMemoryBackend;
    use crate::model::fixtures;

    #[tokio::test]
    async fn dispatches_list_to_the_backend() {
        let api = NotesApi::new(InMemoryBackend::with_notes(fixtures::notes(&[
            ("n1", "First Note"),
        ])));
        let result = api.list_notes().await.unwrap();
        assert_eq!(result.listed_notes.len(), 1);
    }

    #[tokio::test]
    async fn create_then_delete_roundtrip() {
        let api = NotesApi::new(InMemoryBackend::new());
        let created = api.create_note("Hello".into(), None).await.unwrap();
        let id = created.affected_notes[0].note_id.clone();

        api.delete_note(&id).await.unwrap();
        assert!(api.list_notes().await.unwrap().listed_notes.is_empty());
    }
}
