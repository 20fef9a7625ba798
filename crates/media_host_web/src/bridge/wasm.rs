use js_sys::Promise;
use media_host::FormValue;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestCredentials, RequestInit, Response};

use super::*;

fn js_message(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{err:?}"))
}

fn window() -> Result<web_sys::Window, MediaApiError> {
    web_sys::window().ok_or(MediaApiError::Unsupported("window is unavailable"))
}

fn form_data(form: &MutationForm, uploads: &UploadRegistry) -> Result<FormData, MediaApiError> {
    let data = FormData::new().map_err(|err| MediaApiError::Malformed(js_message(&err)))?;
    for (name, value) in &form.fields {
        let appended = match value {
            FormValue::Text(text) => data.append_with_str(name, text),
            FormValue::File(ticket) => {
                let file = uploads.get(*ticket).ok_or_else(|| {
                    MediaApiError::Malformed(format!("upload ticket {} is gone", ticket.0))
                })?;
                data.append_with_blob_and_filename(name, &file, &file.name())
            }
        };
        appended.map_err(|err| MediaApiError::Malformed(js_message(&err)))?;
    }
    Ok(data)
}

pub async fn fetch(
    method: &str,
    url: &str,
    body: RequestBody<'_>,
    headers: &[(&str, String)],
) -> Result<RawResponse, MediaApiError> {
    let init = RequestInit::new();
    init.set_method(method);
    init.set_credentials(RequestCredentials::SameOrigin);
    match body {
        RequestBody::Empty => {}
        RequestBody::Json(json) => init.set_body(&JsValue::from_str(json)),
        RequestBody::Form(form, uploads) => init.set_body(&form_data(form, uploads)?),
    }

    let request = Request::new_with_str_and_init(url, &init)
        .map_err(|err| MediaApiError::Malformed(js_message(&err)))?;
    let request_headers = request.headers();
    request_headers
        .set("X-Requested-With", "XMLHttpRequest")
        .map_err(|err| MediaApiError::Malformed(js_message(&err)))?;
    for (name, value) in headers {
        request_headers
            .set(name, value)
            .map_err(|err| MediaApiError::Malformed(js_message(&err)))?;
    }

    let response = JsFuture::from(window()?.fetch_with_request(&request))
        .await
        .map_err(|err| MediaApiError::Network(js_message(&err)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|err| MediaApiError::Malformed(js_message(&err)))?;
    let status = response.status();
    let text_promise = response
        .text()
        .map_err(|err| MediaApiError::Malformed(js_message(&err)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|err| MediaApiError::Network(js_message(&err)))?
        .as_string()
        .unwrap_or_default();

    Ok(RawResponse { status, text })
}

pub fn document_cookies() -> String {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.dyn_into::<web_sys::HtmlDocument>().ok())
        .and_then(|document| document.cookie().ok())
        .unwrap_or_default()
}

pub fn location_hash() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

pub fn set_location_hash(hash: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(hash);
    }
}

pub async fn sleep_ms(ms: u32) {
    let promise = Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                &resolve,
                ms.min(i32::MAX as u32) as i32,
            );
        }
    });
    let _ = JsFuture::from(promise).await;
}

pub fn element_text(id: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .text_content()
}
