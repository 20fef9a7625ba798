//! Page configuration lookup.

use media_host::{ConfigError, MediaLibraryConfig};

use crate::bridge;

/// Default id of the `<script type="application/json">` element holding the configuration.
pub const DEFAULT_CONFIG_ELEMENT_ID: &str = "media_library_config";

/// Reads and parses the configuration blob embedded in element `element_id`.
///
/// # Errors
///
/// [`ConfigError::MissingElement`] when the element does not exist (always the case natively),
/// [`ConfigError::Invalid`] when its text is not a valid configuration.
pub fn read_page_config(element_id: &str) -> Result<MediaLibraryConfig, ConfigError> {
    let raw = bridge::element_text(element_id)
        .ok_or_else(|| ConfigError::MissingElement(element_id.to_string()))?;
    MediaLibraryConfig::from_json(&raw)
}
