//! Configuration blob injected by the server-rendered page.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default name of the cookie carrying the anti-CSRF token.
pub const DEFAULT_CSRF_COOKIE_NAME: &str = "csrftoken";
/// Default request header used to echo the anti-CSRF token.
pub const DEFAULT_CSRF_HEADER_NAME: &str = "X-CSRFToken";

#[derive(Debug, Error)]
/// Errors raised while reading the page configuration.
pub enum ConfigError {
    /// The configuration element was not present in the document.
    #[error("configuration element `{0}` not found")]
    MissingElement(String),
    /// The configuration blob was not valid JSON for [`MediaLibraryConfig`].
    #[error("invalid media library configuration: {0}")]
    Invalid(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Named endpoint URLs. Values are opaque to the client.
pub struct ApiEndpoints {
    /// GET `?directory=<id>` listing.
    pub get_directory_content: String,
    /// GET `?directory=<id>` breadcrumb chain.
    pub get_directory_path: String,
    /// GET `?query=<text>` search listing.
    pub get_search_result: String,
    /// POST JSON suggestions for the search field.
    pub get_search_suggestions: String,
    /// GET listing of files without usages.
    pub filter_unused_media_files: String,
    /// POST form creating a directory.
    pub create_directory: String,
    /// POST form renaming/hiding a directory.
    pub edit_directory: String,
    /// POST form deleting an empty directory.
    pub delete_directory: String,
    /// POST multipart upload.
    pub upload_file: String,
    /// POST form editing file metadata.
    pub edit_file: String,
    /// POST multipart content replacement.
    pub replace_file: String,
    /// POST form deleting a file.
    pub delete_file: String,
    /// POST form moving a file to another directory.
    pub move_file: String,
    /// GET `?file=<id>` usage lookup.
    pub get_file_usages: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Upload MIME allowlist.
pub struct MediaTypes {
    /// Accepted MIME types; `type/*` wildcards are supported. Empty accepts everything.
    #[serde(default)]
    pub allowed_mime_types: Vec<String>,
}

impl MediaTypes {
    /// Returns `true` when `mime_type` may be uploaded.
    pub fn accepts(&self, mime_type: &str) -> bool {
        if self.allowed_mime_types.is_empty() {
            return true;
        }
        let mime_type = mime_type.trim().to_ascii_lowercase();
        self.allowed_mime_types.iter().any(|allowed| {
            let allowed = allowed.trim().to_ascii_lowercase();
            match allowed.strip_suffix("/*") {
                Some(family) => mime_type
                    .split_once('/')
                    .is_some_and(|(prefix, _)| prefix == family),
                None => allowed == mime_type,
            }
        })
    }

    /// Value for the `accept` attribute of file inputs.
    pub fn accept_attribute(&self) -> String {
        self.allowed_mime_types.join(",")
    }
}

fn default_true() -> bool {
    true
}

fn default_csrf_cookie_name() -> String {
    DEFAULT_CSRF_COOKIE_NAME.to_string()
}

fn default_csrf_header_name() -> String {
    DEFAULT_CSRF_HEADER_NAME.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Full configuration of one media library instance.
pub struct MediaLibraryConfig {
    /// Endpoint table.
    pub api_endpoints: ApiEndpoints,
    /// Upload allowlist.
    #[serde(default)]
    pub media_types: MediaTypes,
    /// Whether the user may edit files and directories of the global scope.
    #[serde(default)]
    pub allow_global_edit: bool,
    /// Whether the user may create directories.
    #[serde(default = "default_true")]
    pub can_create_directory: bool,
    /// Whether the user may rename/hide directories.
    #[serde(default = "default_true")]
    pub can_edit_directory: bool,
    /// Whether the user may delete directories.
    #[serde(default = "default_true")]
    pub can_delete_directory: bool,
    /// Whether the user may upload files.
    #[serde(default = "default_true")]
    pub can_upload_file: bool,
    /// Whether the user may edit file metadata.
    #[serde(default = "default_true")]
    pub can_edit_file: bool,
    /// Whether the user may replace file content.
    #[serde(default = "default_true")]
    pub can_replace_file: bool,
    /// Whether the user may delete files.
    #[serde(default = "default_true")]
    pub can_delete_file: bool,
    /// Shows storage paths and ids in the sidebar.
    #[serde(default)]
    pub expert_mode: bool,
    /// Cookie holding the anti-CSRF token.
    #[serde(default = "default_csrf_cookie_name")]
    pub csrf_cookie_name: String,
    /// Header carrying the anti-CSRF token on mutating requests.
    #[serde(default = "default_csrf_header_name")]
    pub csrf_header_name: String,
}

impl MediaLibraryConfig {
    /// Parses the JSON configuration blob.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the blob is not valid JSON or misses endpoints.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
pub(crate) fn test_endpoints() -> ApiEndpoints {
    ApiEndpoints {
        get_directory_content: "/media/directory/content".to_string(),
        get_directory_path: "/media/directory/path".to_string(),
        get_search_result: "/media/search".to_string(),
        get_search_suggestions: "/search/suggest".to_string(),
        filter_unused_media_files: "/media/filter/unused".to_string(),
        create_directory: "/media/directory/create".to_string(),
        edit_directory: "/media/directory/edit".to_string(),
        delete_directory: "/media/directory/delete".to_string(),
        upload_file: "/media/file/upload".to_string(),
        edit_file: "/media/file/edit".to_string(),
        replace_file: "/media/file/replace".to_string(),
        delete_file: "/media/file/delete".to_string(),
        move_file: "/media/file/move".to_string(),
        get_file_usages: "/media/file/usages".to_string(),
    }
}
