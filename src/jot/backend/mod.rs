//! # Backend Layer
//!
//! This module defines the remote-service abstraction for jot. The
//! [`NotesBackend`] trait lets the application work against different
//! backends without changing core logic.
//!
//! ## Design Rationale
//!
//! The backend is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryBackend` (no network needed)
//! - Keep business logic **decoupled** from transport details
//!
//! All methods take `&self`: find & replace fans out one update per note and
//! awaits them together, so the trait must be usable from concurrently
//! polled futures.
//!
//! ## Implementations
//!
//! - [`http::HttpBackend`]: Production client for the notes REST API and its
//!   attachment storage endpoints. Bearer-token authenticated.
//! - [`memory::InMemoryBackend`]: In-memory notes plus a record of every
//!   update call, for tests.
//!
//! Authentication, durability, and retry policy are owned by the remote
//! service; this layer only reports what the server said.

use crate::error::Result;
use crate::model::{NewNote, Note, NoteUpdate};
use async_trait::async_trait;

pub mod http;
pub mod memory;

/// Abstract interface to the notes service.
#[async_trait]
pub trait NotesBackend: Send + Sync {
    /// Fetch all notes, in server return order.
    async fn list_notes(&self) -> Result<Vec<Note>>;

    /// Fetch a single note by id.
    async fn get_note(&self, note_id: &str) -> Result<Note>;

    /// Create a note, returning it as the server stored it.
    async fn create_note(&self, note: &NewNote) -> Result<Note>;

    /// Overwrite a note's content (and optionally its attachment key).
    async fn update_note(&self, note_id: &str, update: &NoteUpdate) -> Result<()>;

    /// Delete a note permanently.
    async fn delete_note(&self, note_id: &str) -> Result<()>;

    /// Upload an attachment to object storage, returning its opaque key.
    async fn upload_attachment(&self, filename: &str, bytes: Vec<u8>) -> Result<String>;

    /// Resolve a signed download URL for a stored attachment.
    async fn attachment_url(&self, key: &str) -> Result<String>;
}
