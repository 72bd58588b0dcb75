use chrono::{serde::ts_milliseconds, DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A note as the backend returns it.
///
/// `note_id` and `user_id` are opaque server-assigned strings. `created_at`
/// travels as epoch milliseconds on the wire. The client never owns notes;
/// it only holds a transient snapshot of what the server last returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub note_id: String,
    pub user_id: String,
    pub content: String,
    #[serde(default)]
    pub attachment: Option<String>,
    #[serde(with = "ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// First line of the content, used as a display title in listings.
    pub fn title(&self) -> &str {
        self.content.trim().lines().next().unwrap_or("")
    }
}

/// Body of a `PUT /notes/:id` request.
///
/// The find & replace path only sends `content`; the attachment field is
/// omitted from the JSON entirely so the server leaves it untouched.
#[derive(Debug, Clone, Serialize)]
pub struct NoteUpdate {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
}

/// Body of a `POST /notes` request.
#[derive(Debug, Clone, Serialize)]
pub struct NewNote {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
}

/// Attachment keys are stored as `{epoch_millis}-{original name}`.
/// Strip any leading alphanumeric run up to the first dash for display;
/// in practice that run is the upload timestamp.
pub fn format_filename(key: &str) -> &str {
    match key.split_once('-') {
        Some((prefix, rest))
            if !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            rest
        }
        _ => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_first_line_trimmed() {
        let note = fixtures::note("n1", "  First Note\nsecond line");
        assert_eq!(note.title(), "First Note");
    }

    #[test]
    fn title_of_empty_content_is_empty() {
        let note = fixtures::note("n1", "");
        assert_eq!(note.title(), "");
    }

    #[test]
    fn wire_format_is_camel_case_with_millis() {
        let json = r#"{
            "attachment": null,
            "content": "Test Item",
            "createdAt": 1614666729250,
            "noteId": "03c7b910-7b21-11eb-ab95-1b0f8fe7d354",
            "userId": "us-east-1:9b9d0624-33f8-4d15-90ec-efcc95f0a661"
        }"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.note_id, "03c7b910-7b21-11eb-ab95-1b0f8fe7d354");
        assert_eq!(note.content, "Test Item");
        assert_eq!(note.attachment, None);
        assert_eq!(note.created_at.timestamp_millis(), 1614666729250);
    }

    #[test]
    fn note_update_omits_missing_attachment() {
        let body = NoteUpdate {
            content: "hello".into(),
            attachment: None,
        };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"content":"hello"}"#);
    }

    #[test]
    fn format_filename_strips_timestamp_prefix() {
        assert_eq!(format_filename("1614759711814-s-l400.jpg"), "s-l400.jpg");
        assert_eq!(format_filename("plain.jpg"), "plain.jpg");
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::TimeZone;

    pub fn note(id: &str, content: &str) -> Note {
        Note {
            note_id: id.to_string(),
            user_id: "user-1".to_string(),
            content: content.to_string(),
            attachment: None,
            created_at: Utc.timestamp_millis_opt(1614666729250).unwrap(),
        }
    }

    pub fn notes(specs: &[(&str, &str)]) -> Vec<Note> {
        specs.iter().map(|(id, content)| note(id, content)).collect()
    }
}
