use super::*;

pub async fn fetch(
    _method: &str,
    _url: &str,
    _body: RequestBody<'_>,
    _headers: &[(&str, String)],
) -> Result<RawResponse, MediaApiError> {
    Err(MediaApiError::Unsupported(
        "fetch is only available when compiled for wasm32",
    ))
}

pub fn document_cookies() -> String {
    String::new()
}

pub fn location_hash() -> String {
    String::new()
}

pub fn set_location_hash(_hash: &str) {}

pub async fn sleep_ms(_ms: u32) {}

pub fn element_text(_id: &str) -> Option<String> {
    None
}
