//! Browser transport interop.
//!
//! Routes calls to the `wasm32` implementation or to a native shim that reports the browser
//! APIs as unsupported, so adapters keep one signature on every target.

use media_host::{MediaApiError, MutationForm};

use crate::uploads::UploadRegistry;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

/// Body of an outgoing request.
pub enum RequestBody<'a> {
    /// No body (GET).
    Empty,
    /// Serialized JSON.
    Json(&'a str),
    /// Multipart form with files resolved through the registry.
    Form(&'a MutationForm, &'a UploadRegistry),
}

/// Raw HTTP outcome: status and body text.
pub struct RawResponse {
    pub status: u16,
    pub text: String,
}

pub async fn fetch(
    method: &str,
    url: &str,
    body: RequestBody<'_>,
    headers: &[(&str, String)],
) -> Result<RawResponse, MediaApiError> {
    imp::fetch(method, url, body, headers).await
}

pub fn document_cookies() -> String {
    imp::document_cookies()
}

pub fn location_hash() -> String {
    imp::location_hash()
}

pub fn set_location_hash(hash: &str) {
    imp::set_location_hash(hash)
}

pub async fn sleep_ms(ms: u32) {
    imp::sleep_ms(ms).await
}

pub fn element_text(id: &str) -> Option<String> {
    imp::element_text(id)
}
