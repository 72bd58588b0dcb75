//! Typed HTTP client for the notes service REST API.

use super::NotesBackend;
use crate::error::{JotError, Result};
use crate::model::{NewNote, Note, NoteUpdate};
use async_trait::async_trait;
use serde::Deserialize;

/// Production backend: the notes REST API plus its attachment storage
/// endpoints, authenticated with a bearer token.
pub struct HttpBackend {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct StoredAttachment {
    key: String,
}

#[derive(Debug, Deserialize)]
struct SignedUrl {
    url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-2xx response into a structured error, passing 2xx through.
    async fn check(resp: reqwest::Response) -> Result<reqwest::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(JotError::NoteNotFound(body));
        }
        Err(JotError::Http {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl NotesBackend for HttpBackend {
    async fn list_notes(&self) -> Result<Vec<Note>> {
        log::debug!("GET /notes");
        let resp = self
            .client
            .get(self.url("/notes"))
            .bearer_auth(&self.token)
            .send()
            .await?;
        Ok(Self::check(resp).await?.json::<Vec<Note>>().await?)
    }

    async fn get_note(&self, note_id: &str) -> Result<Note> {
        log::debug!("GET /notes/{}", note_id);
        let resp = self
            .client
            .get(self.url(&format!("/notes/{}", note_id)))
            .bearer_auth(&self.token)
            .send()
            .await?;
        Ok(Self::check(resp).await?.json::<Note>().await?)
    }

    async fn create_note(&self, note: &NewNote) -> Result<Note> {
        log::debug!("POST /notes");
        let resp = self
            .client
            .post(self.url("/notes"))
            .bearer_auth(&self.token)
            .json(note)
            .send()
            .await?;
        Ok(Self::check(resp).await?.json::<Note>().await?)
    }

    async fn update_note(&self, note_id: &str, update: &NoteUpdate) -> Result<()> {
        log::debug!("PUT /notes/{}", note_id);
        let resp = self
            .client
            .put(self.url(&format!("/notes/{}", note_id)))
            .bearer_auth(&self.token)
            .json(update)
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn delete_note(&self, note_id: &str) -> Result<()> {
        log::debug!("DELETE /notes/{}", note_id);
        let resp = self
            .client
            .delete(self.url(&format!("/notes/{}", note_id)))
            .bearer_auth(&self.token)
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn upload_attachment(&self, filename: &str, bytes: Vec<u8>) -> Result<String> {
        log::debug!("POST /attachments ({}, {} bytes)", filename, bytes.len());
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);
        let resp = self
            .client
            .post(self.url("/attachments"))
            .bearer_auth(&self.token)
            .multipart(form)
            .send()
            .await?;
        let stored: StoredAttachment = Self::check(resp).await?.json().await?;
        Ok(stored.key)
    }

    async fn attachment_url(&self, key: &str) -> Result<String> {
        log::debug!("GET /attachments/{}/url", key);
        let resp = self
            .client
            .get(self.url(&format!("/attachments/{}/url", key)))
            .bearer_auth(&self.token)
            .send()
            .await?;
        let signed: SignedUrl = Self::check(resp).await?.json().await?;
        Ok(signed.url)
    }
}
