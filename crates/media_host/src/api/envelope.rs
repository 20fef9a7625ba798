//! JSON envelope handling shared by every transport.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::MediaApiError;
use crate::model::{DirectoryEntry, FileEntry};

/// Status code treated as success.
pub const HTTP_OK: u16 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
/// Severity of a server-provided message.
pub enum MessageKind {
    /// Operation succeeded.
    Success,
    /// Neutral information.
    Info,
    /// Something needs attention.
    Warning,
    /// Operation failed.
    Error,
}

impl From<String> for MessageKind {
    fn from(raw: String) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" | "danger" => Self::Error,
            _ => Self::Info,
        }
    }
}

impl MessageKind {
    /// Stable token used in the DOM contract.
    pub fn token(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Message attached to any response under `messages`.
pub struct FlashMessage {
    /// Severity.
    #[serde(rename = "type")]
    pub kind: MessageKind,
    /// Already-localized text.
    pub text: String,
}

/// Validates a read response and returns its `data` member.
///
/// # Errors
///
/// [`MediaApiError::Server`] for non-200 statuses, [`MediaApiError::Malformed`] when the body is
/// not JSON or lacks `data`.
pub fn extract_data(status: u16, body: &str) -> Result<Value, MediaApiError> {
    if status != HTTP_OK {
        return Err(MediaApiError::Server { status });
    }
    let mut envelope: Value = serde_json::from_str(body)?;
    envelope
        .get_mut("data")
        .map(Value::take)
        .ok_or_else(|| MediaApiError::Malformed("response envelope has no `data`".to_string()))
}

#[derive(Debug, Clone, PartialEq)]
/// Raw outcome of a form submission, for any HTTP status.
pub struct SubmitResponse {
    /// HTTP status code.
    pub status: u16,
    /// Parsed JSON body (`Null` when the body was empty).
    pub body: Value,
}

impl SubmitResponse {
    /// Builds a response from a status and raw body text.
    ///
    /// # Errors
    ///
    /// [`MediaApiError::Malformed`] when a non-empty body is not JSON.
    pub fn from_text(status: u16, body: &str) -> Result<Self, MediaApiError> {
        let body = if body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(body)?
        };
        Ok(Self { status, body })
    }

    /// Returns `true` for HTTP 200 without inline validation errors.
    pub fn is_success(&self) -> bool {
        self.status == HTTP_OK && self.validation_errors().is_empty()
    }

    /// Messages to surface as notifications; malformed items are skipped.
    pub fn messages(&self) -> Option<Vec<FlashMessage>> {
        let raw = self.body.get("messages")?.as_array()?;
        Some(
            raw.iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect(),
        )
    }

    /// Inline validation errors keyed by field name (`errors` member of a 200 body).
    pub fn validation_errors(&self) -> BTreeMap<String, Vec<String>> {
        let Some(Value::Object(errors)) = self.body.get("errors") else {
            return BTreeMap::new();
        };
        errors
            .iter()
            .filter_map(|(field, value)| {
                let texts: Vec<String> = match value {
                    Value::String(text) => vec![text.clone()],
                    Value::Array(items) => items
                        .iter()
                        .filter_map(|item| item.as_str().map(str::to_string))
                        .collect(),
                    _ => Vec::new(),
                };
                (!texts.is_empty()).then(|| (field.clone(), texts))
            })
            .collect()
    }

    /// File record returned by upload/edit/replace/move endpoints.
    pub fn file(&self) -> Option<FileEntry> {
        serde_json::from_value(self.body.get("file")?.clone()).ok()
    }

    /// Directory record returned by the create-directory endpoint.
    pub fn directory(&self) -> Option<DirectoryEntry> {
        serde_json::from_value(self.body.get("directory")?.clone()).ok()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::model::{DirectoryId, FileId};

    #[test]
    fn extract_data_distinguishes_status_and_shape_failures() {
        assert_eq!(
            extract_data(200, r#"{"data": [1, 2]}"#).expect("data"),
            json!([1, 2])
        );
        assert_eq!(
            extract_data(500, r#"{"data": []}"#),
            Err(MediaApiError::Server { status: 500 })
        );
        assert!(matches!(
            extract_data(200, r#"{"items": []}"#),
            Err(MediaApiError::Malformed(_))
        ));
        assert!(matches!(
            extract_data(200, "<html>"),
            Err(MediaApiError::Malformed(_))
        ));
    }

    #[test]
    fn submit_response_exposes_messages_file_and_directory() {
        let response = SubmitResponse::from_text(
            200,
            &json!({
                "messages": [
                    {"type": "success", "text": "Saved"},
                    {"type": "danger", "text": "Careful"},
                    {"type": "unknown", "text": "Plain"},
                    {"oops": true}
                ],
                "file": {"id": 9, "name": "a.png", "type": "image/png"},
                "directory": {"id": 42, "name": "Events"}
            })
            .to_string(),
        )
        .expect("parse");

        assert!(response.is_success());
        let messages = response.messages().expect("messages");
        assert_eq!(
            messages.iter().map(|m| m.kind).collect::<Vec<_>>(),
            vec![MessageKind::Success, MessageKind::Error, MessageKind::Info]
        );
        assert_eq!(response.file().map(|f| f.id), Some(FileId(9)));
        assert_eq!(response.directory().map(|d| d.id), Some(DirectoryId(42)));
    }

    #[test]
    fn validation_errors_turn_a_200_into_a_failure() {
        let response = SubmitResponse {
            status: 200,
            body: json!({"errors": {"name": ["Directory already exists"], "parent": "Bad"}}),
        };
        assert!(!response.is_success());
        let errors = response.validation_errors();
        assert_eq!(errors["name"], vec!["Directory already exists".to_string()]);
        assert_eq!(errors["parent"], vec!["Bad".to_string()]);
    }

    #[test]
    fn empty_body_parses_as_null() {
        let response = SubmitResponse::from_text(204, "  ").expect("parse");
        assert_eq!(response.body, Value::Null);
        assert!(response.messages().is_none());
        assert!(!response.is_success());
    }
}
