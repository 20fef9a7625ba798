//! Directory/file records returned by the media library endpoints.

use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

const DIRECTORY_TYPE_TAG: &str = "directory";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Server-assigned directory id.
pub struct DirectoryId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Server-assigned file id.
pub struct FileId(pub u64);

impl std::fmt::Display for DirectoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Directory node of the media tree.
pub struct DirectoryEntry {
    /// Directory id.
    pub id: DirectoryId,
    /// Display name (at most 255 characters, enforced by the server).
    pub name: String,
    /// Parent directory, `None` for directories directly below the root.
    #[serde(default)]
    pub parent_id: Option<DirectoryId>,
    /// Number of directories and files contained in this directory.
    #[serde(default)]
    pub number_of_entries: u64,
    /// Human-readable creation timestamp.
    #[serde(default)]
    pub created_date: String,
    /// Whether the directory belongs to the shared (global) scope.
    #[serde(default)]
    pub is_global: bool,
    /// Whether a global directory is hidden for the local scope.
    #[serde(default)]
    pub is_hidden: bool,
}

impl DirectoryEntry {
    /// Returns `true` when the directory has no children and may be deleted.
    pub fn is_empty(&self) -> bool {
        self.number_of_entries == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// File node of the media tree.
pub struct FileEntry {
    /// File id.
    pub id: FileId,
    /// Display name.
    pub name: String,
    /// Public URL of the file content.
    #[serde(default)]
    pub url: Option<String>,
    /// Filesystem-style storage path (expert mode only).
    #[serde(default)]
    pub path: Option<String>,
    /// Alternative text for images.
    #[serde(default)]
    pub alt_text: String,
    /// MIME type, serialized under the `type` key.
    #[serde(rename = "type", default)]
    pub mime_type: String,
    /// Human-readable size.
    #[serde(default)]
    pub file_size: String,
    /// Human-readable type label.
    #[serde(default)]
    pub type_display: String,
    /// Thumbnail URL when the server generated one.
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// Human-readable upload timestamp.
    #[serde(default)]
    pub uploaded_date: String,
    /// Human-readable modification timestamp.
    #[serde(default)]
    pub last_modified: Option<String>,
    /// Whether the file belongs to the shared (global) scope.
    #[serde(default)]
    pub is_global: bool,
    /// Whether a global file is hidden for the local scope.
    #[serde(default)]
    pub is_hidden: bool,
}

impl FileEntry {
    /// Returns `true` for `image/*` MIME types.
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Entry of a content listing, discriminated on the wire by `type == "directory"`.
pub enum LibraryEntry {
    /// Directory entry.
    Directory(DirectoryEntry),
    /// File entry (any `type` other than `directory`).
    File(FileEntry),
}

impl LibraryEntry {
    /// Display name of the entry.
    pub fn name(&self) -> &str {
        match self {
            Self::Directory(directory) => &directory.name,
            Self::File(file) => &file.name,
        }
    }

    /// Returns the file record when this entry is a file.
    pub fn as_file(&self) -> Option<&FileEntry> {
        match self {
            Self::File(file) => Some(file),
            Self::Directory(_) => None,
        }
    }

    /// Returns the directory record when this entry is a directory.
    pub fn as_directory(&self) -> Option<&DirectoryEntry> {
        match self {
            Self::Directory(directory) => Some(directory),
            Self::File(_) => None,
        }
    }

    /// Whether the entry belongs to the global scope.
    pub fn is_global(&self) -> bool {
        match self {
            Self::Directory(directory) => directory.is_global,
            Self::File(file) => file.is_global,
        }
    }
}

impl Serialize for LibraryEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::File(file) => file.serialize(serializer),
            Self::Directory(directory) => {
                let mut value = serde_json::to_value(directory).map_err(serde::ser::Error::custom)?;
                if let Value::Object(map) = &mut value {
                    map.insert("type".to_string(), Value::from(DIRECTORY_TYPE_TAG));
                }
                value.serialize(serializer)
            }
        }
    }
}

impl<'de> Deserialize<'de> for LibraryEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let is_directory = value.get("type").and_then(Value::as_str) == Some(DIRECTORY_TYPE_TAG);
        if is_directory {
            serde_json::from_value(value)
                .map(Self::Directory)
                .map_err(D::Error::custom)
        } else {
            serde_json::from_value(value)
                .map(Self::File)
                .map_err(D::Error::custom)
        }
    }
}

/// Returns the position of `file_id` inside a content listing.
pub fn position_of_file(content: &[LibraryEntry], file_id: FileId) -> Option<usize> {
    content
        .iter()
        .position(|entry| entry.as_file().map(|file| file.id) == Some(file_id))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A single place where a file is embedded.
pub struct FileUsage {
    /// Title of the embedding object (page, event, location, ...).
    pub title: String,
    /// Backend URL of the embedding object.
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Result of the file usage lookup.
pub struct FileUsages {
    /// Whether the file is referenced anywhere.
    pub is_used: bool,
    /// Objects using the file as icon.
    #[serde(default)]
    pub icon_usages: Option<Vec<FileUsage>>,
    /// Objects embedding the file in their content.
    #[serde(default)]
    pub content_usages: Option<Vec<FileUsage>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum SuggestionItem {
    Text(String),
    Titled { title: String },
}

/// Decodes the suggestion list, accepting plain strings and `{title}` objects.
pub fn decode_suggestions(value: Value) -> Result<Vec<String>, serde_json::Error> {
    let items: Vec<SuggestionItem> = serde_json::from_value(value)?;
    Ok(items
        .into_iter()
        .map(|item| match item {
            SuggestionItem::Text(text) => text,
            SuggestionItem::Titled { title } => title,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn content_listing_discriminates_on_type_tag() {
        let content: Vec<LibraryEntry> = serde_json::from_value(json!([
            {"id": 3, "name": "Events", "type": "directory", "parentId": null, "numberOfEntries": 2,
             "createdDate": "01.02.2024", "isGlobal": false, "isHidden": false},
            {"id": 7, "name": "logo.png", "type": "image/png", "url": "/media/logo.png",
             "altText": "Logo", "fileSize": "12 KB", "typeDisplay": "PNG image",
             "uploadedDate": "01.02.2024", "isGlobal": true},
            {"id": 8, "name": "readme.pdf"}
        ]))
        .expect("decode");

        assert_eq!(content.len(), 3);
        let directory = content[0].as_directory().expect("directory");
        assert_eq!(directory.id, DirectoryId(3));
        assert!(!directory.is_empty());
        let logo = content[1].as_file().expect("file");
        assert_eq!(logo.mime_type, "image/png");
        assert!(logo.is_image());
        assert!(logo.is_global);
        assert_eq!(content[2].as_file().map(|file| file.id), Some(FileId(8)));
    }

    #[test]
    fn directory_entries_serialize_with_type_tag() {
        let entry = LibraryEntry::Directory(DirectoryEntry {
            id: DirectoryId(1),
            name: "Root child".to_string(),
            parent_id: None,
            number_of_entries: 0,
            created_date: String::new(),
            is_global: false,
            is_hidden: false,
        });
        let value = serde_json::to_value(&entry).expect("serialize");
        assert_eq!(value["type"], json!("directory"));
        assert_eq!(value["numberOfEntries"], json!(0));
    }

    #[test]
    fn position_of_file_ignores_directories_with_same_numeric_id() {
        let content: Vec<LibraryEntry> = serde_json::from_value(json!([
            {"id": 5, "name": "five", "type": "directory"},
            {"id": 5, "name": "five.txt", "type": "text/plain"}
        ]))
        .expect("decode");
        assert_eq!(position_of_file(&content, FileId(5)), Some(1));
        assert_eq!(position_of_file(&content, FileId(6)), None);
    }

    #[test]
    fn suggestions_accept_strings_and_titled_objects() {
        let suggestions =
            decode_suggestions(json!(["alpha", {"title": "beta", "id": 2}])).expect("decode");
        assert_eq!(suggestions, vec!["alpha".to_string(), "beta".to_string()]);
    }
}
