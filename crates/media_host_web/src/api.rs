//! Browser media API adapter backed by `fetch`.

use std::rc::Rc;

use media_host::{
    extract_data, MediaApiError, MediaApiFuture, MediaApiService, MediaLibraryConfig,
    MutationForm, SubmitResponse,
};
use serde_json::Value;

use crate::{
    bridge::{self, RequestBody},
    request::{append_query, cookie_value},
    uploads::UploadRegistry,
};

#[derive(Debug, Clone)]
/// Media API adapter issuing same-origin `fetch` requests with the anti-CSRF header.
pub struct WebMediaApiService {
    csrf_cookie_name: String,
    csrf_header_name: String,
    uploads: Rc<UploadRegistry>,
}

impl WebMediaApiService {
    /// Creates an adapter using the CSRF settings of `config`.
    pub fn new(config: &MediaLibraryConfig, uploads: Rc<UploadRegistry>) -> Self {
        Self {
            csrf_cookie_name: config.csrf_cookie_name.clone(),
            csrf_header_name: config.csrf_header_name.clone(),
            uploads,
        }
    }

    fn csrf_headers(&self) -> Vec<(&str, String)> {
        cookie_value(&bridge::document_cookies(), &self.csrf_cookie_name)
            .map(|token| vec![(self.csrf_header_name.as_str(), token)])
            .unwrap_or_default()
    }
}

impl MediaApiService for WebMediaApiService {
    fn get<'a>(
        &'a self,
        url: &'a str,
        query: &'a [(&'static str, String)],
    ) -> MediaApiFuture<'a, Result<Value, MediaApiError>> {
        Box::pin(async move {
            let url = append_query(url, query);
            let response = bridge::fetch("GET", &url, RequestBody::Empty, &[]).await?;
            extract_data(response.status, &response.text)
        })
    }

    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: &'a Value,
    ) -> MediaApiFuture<'a, Result<Value, MediaApiError>> {
        Box::pin(async move {
            let json = body.to_string();
            let mut headers = self.csrf_headers();
            headers.push(("Content-Type", "application/json".to_string()));
            let response = bridge::fetch("POST", url, RequestBody::Json(&json), &headers).await?;
            extract_data(response.status, &response.text)
        })
    }

    fn submit<'a>(
        &'a self,
        form: &'a MutationForm,
    ) -> MediaApiFuture<'a, Result<SubmitResponse, MediaApiError>> {
        Box::pin(async move {
            let headers = self.csrf_headers();
            let response = bridge::fetch(
                "POST",
                &form.action,
                RequestBody::Form(form, &self.uploads),
                &headers,
            )
            .await;
            for (_, value) in &form.fields {
                if let media_host::FormValue::File(ticket) = value {
                    self.uploads.release(*ticket);
                }
            }
            let response = response?;
            SubmitResponse::from_text(response.status, &response.text)
        })
    }
}
