use thiserror::Error;

#[derive(Error, Debug)]
pub enum JotError {
    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Note id '{0}' matches more than one note")]
    AmbiguousNoteId(String),

    #[error("Not signed in. Run `jot login` first.")]
    NotAuthenticated,

    #[error("Attachment is {size} bytes; the limit is {limit} bytes")]
    AttachmentTooLarge { size: u64, limit: u64 },

    #[error("Backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, JotError>;
