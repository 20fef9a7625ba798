//! Mutating form submissions.

use serde::{Deserialize, Serialize};

use crate::{
    config::ApiEndpoints,
    model::{DirectoryId, FileId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Handle of a browser `File` held by the host until its form is submitted.
pub struct UploadTicketId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Metadata of a file handed to the host for upload.
pub struct UploadTicket {
    /// Host handle of the file.
    pub id: UploadTicketId,
    /// Original file name.
    pub name: String,
    /// MIME type reported by the browser.
    pub mime_type: String,
    /// Size in bytes.
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Mutating operation performed by a [`MutationForm`].
pub enum FormKind {
    /// `createDirectory`.
    CreateDirectory,
    /// `editDirectory`.
    EditDirectory,
    /// `deleteDirectory`.
    DeleteDirectory,
    /// `uploadFile`.
    UploadFile,
    /// `editFile`.
    EditFile,
    /// `replaceFile`.
    ReplaceFile,
    /// `deleteFile`.
    DeleteFile,
    /// `moveFile`.
    MoveFile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Value of a single form field.
pub enum FormValue {
    /// Plain text field.
    Text(String),
    /// File part referencing a host-held upload.
    File(UploadTicketId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Serializable description of a mutating form: action URL plus ordered fields.
pub struct MutationForm {
    /// Operation kind, used to pick the success follow-up and the inline error slot.
    pub kind: FormKind,
    /// Endpoint URL the form posts to.
    pub action: String,
    /// Ordered multipart fields.
    pub fields: Vec<(String, FormValue)>,
}

fn optional_id(id: Option<impl ToString>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

fn bool_field(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        ""
    }
}

impl MutationForm {
    /// Creates an empty form.
    pub fn new(kind: FormKind, action: impl Into<String>) -> Self {
        Self {
            kind,
            action: action.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a text field.
    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields
            .push((name.to_string(), FormValue::Text(value.into())));
        self
    }

    /// Appends a file part.
    pub fn file(mut self, name: &str, ticket: UploadTicketId) -> Self {
        self.fields.push((name.to_string(), FormValue::File(ticket)));
        self
    }

    /// Returns the first text value stored under `name`.
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|(field, value)| match value {
            FormValue::Text(text) if field == name => Some(text.as_str()),
            _ => None,
        })
    }

    /// Returns the upload ticket stored under `name`.
    pub fn file_value(&self, name: &str) -> Option<UploadTicketId> {
        self.fields.iter().find_map(|(field, value)| match value {
            FormValue::File(ticket) if field == name => Some(*ticket),
            _ => None,
        })
    }

    /// `createDirectory` with `parent` (empty for the root) and `name`.
    pub fn create_directory(
        endpoints: &ApiEndpoints,
        parent: Option<DirectoryId>,
        name: &str,
    ) -> Self {
        Self::new(FormKind::CreateDirectory, &endpoints.create_directory)
            .text("parent", optional_id(parent))
            .text("name", name.trim())
    }

    /// `editDirectory`; `is_hidden` is only sent for global directories.
    pub fn edit_directory(
        endpoints: &ApiEndpoints,
        id: DirectoryId,
        name: &str,
        is_hidden: Option<bool>,
    ) -> Self {
        let form = Self::new(FormKind::EditDirectory, &endpoints.edit_directory)
            .text("id", id.to_string())
            .text("name", name.trim());
        match is_hidden {
            Some(hidden) => form.text("is_hidden", bool_field(hidden)),
            None => form,
        }
    }

    /// `deleteDirectory`.
    pub fn delete_directory(endpoints: &ApiEndpoints, id: DirectoryId) -> Self {
        Self::new(FormKind::DeleteDirectory, &endpoints.delete_directory).text("id", id.to_string())
    }

    /// `uploadFile` into `parent` (empty for the root).
    pub fn upload_file(
        endpoints: &ApiEndpoints,
        parent: Option<DirectoryId>,
        ticket: UploadTicketId,
    ) -> Self {
        Self::new(FormKind::UploadFile, &endpoints.upload_file)
            .text("parent_directory", optional_id(parent))
            .file("file", ticket)
    }

    /// `editFile`; `is_hidden` is only sent for global files.
    pub fn edit_file(
        endpoints: &ApiEndpoints,
        id: FileId,
        name: &str,
        alt_text: &str,
        is_hidden: Option<bool>,
    ) -> Self {
        let form = Self::new(FormKind::EditFile, &endpoints.edit_file)
            .text("id", id.to_string())
            .text("name", name.trim())
            .text("alt_text", alt_text);
        match is_hidden {
            Some(hidden) => form.text("is_hidden", bool_field(hidden)),
            None => form,
        }
    }

    /// `replaceFile` keeping the file id.
    pub fn replace_file(endpoints: &ApiEndpoints, id: FileId, ticket: UploadTicketId) -> Self {
        Self::new(FormKind::ReplaceFile, &endpoints.replace_file)
            .text("id", id.to_string())
            .file("file", ticket)
    }

    /// `deleteFile`.
    pub fn delete_file(endpoints: &ApiEndpoints, id: FileId) -> Self {
        Self::new(FormKind::DeleteFile, &endpoints.delete_file).text("id", id.to_string())
    }

    /// `moveFile`; the root is encoded as an empty `parent_directory`.
    pub fn move_file(endpoints: &ApiEndpoints, id: FileId, target: Option<DirectoryId>) -> Self {
        Self::new(FormKind::MoveFile, &endpoints.move_file)
            .text("mediafile_id", id.to_string())
            .text("parent_directory", optional_id(target))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::test_endpoints;

    #[test]
    fn move_form_encodes_root_as_empty_parent() {
        let endpoints = test_endpoints();
        let to_dir = MutationForm::move_file(&endpoints, FileId(7), Some(DirectoryId(3)));
        assert_eq!(to_dir.action, "/media/file/move");
        assert_eq!(to_dir.text_value("mediafile_id"), Some("7"));
        assert_eq!(to_dir.text_value("parent_directory"), Some("3"));

        let to_root = MutationForm::move_file(&endpoints, FileId(7), None);
        assert_eq!(to_root.text_value("parent_directory"), Some(""));
    }

    #[test]
    fn edit_forms_only_send_hidden_flag_when_requested() {
        let endpoints = test_endpoints();
        let local = MutationForm::edit_file(&endpoints, FileId(1), " a.png ", "alt", None);
        assert_eq!(local.text_value("name"), Some("a.png"));
        assert_eq!(local.text_value("is_hidden"), None);

        let global = MutationForm::edit_directory(&endpoints, DirectoryId(2), "Shared", Some(true));
        assert_eq!(global.text_value("is_hidden"), Some("on"));
    }

    #[test]
    fn upload_form_carries_ticket_and_parent() {
        let endpoints = test_endpoints();
        let form = MutationForm::upload_file(&endpoints, Some(DirectoryId(4)), UploadTicketId(11));
        assert_eq!(form.kind, FormKind::UploadFile);
        assert_eq!(form.text_value("parent_directory"), Some("4"));
        assert_eq!(form.file_value("file"), Some(UploadTicketId(11)));
        assert_eq!(form.text_value("file"), None);
    }
}
