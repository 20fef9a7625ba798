//! Scripted in-memory transport for native tests and headless drivers.

use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
};

use serde_json::Value;

use super::{
    envelope::SubmitResponse,
    error::MediaApiError,
    form::MutationForm,
    service::{MediaApiFuture, MediaApiService},
};

#[derive(Debug, Clone, PartialEq)]
/// Request observed by [`MemoryMediaApi`].
pub enum RecordedRequest {
    /// GET with its query parameters.
    Get {
        /// Endpoint URL.
        url: String,
        /// Query parameters in order.
        query: Vec<(String, String)>,
    },
    /// JSON POST.
    PostJson {
        /// Endpoint URL.
        url: String,
        /// JSON body.
        body: Value,
    },
    /// Form submission.
    Submit(MutationForm),
}

fn get_key(url: &str, query: &[(&str, String)]) -> String {
    let query = query
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");
    format!("{url}?{query}")
}

#[derive(Debug, Default)]
/// Transport answering from scripted responses and recording every request.
///
/// GET and JSON POST responses are sticky per request key; submit responses are consumed in
/// order per action URL. Unscripted requests fail with [`MediaApiError::Server`] 404.
pub struct MemoryMediaApi {
    gets: RefCell<HashMap<String, Result<Value, MediaApiError>>>,
    posts: RefCell<HashMap<String, Result<Value, MediaApiError>>>,
    submits: RefCell<HashMap<String, VecDeque<Result<SubmitResponse, MediaApiError>>>>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl MemoryMediaApi {
    /// Scripts the answer for a GET of `url` with exactly `query`.
    pub fn respond_get(
        &self,
        url: &str,
        query: &[(&str, String)],
        response: Result<Value, MediaApiError>,
    ) {
        self.gets.borrow_mut().insert(get_key(url, query), response);
    }

    /// Scripts the answer for JSON POSTs to `url`.
    pub fn respond_post_json(&self, url: &str, response: Result<Value, MediaApiError>) {
        self.posts.borrow_mut().insert(url.to_string(), response);
    }

    /// Queues the answer for the next submission to `action`.
    pub fn respond_submit(&self, action: &str, response: Result<SubmitResponse, MediaApiError>) {
        self.submits
            .borrow_mut()
            .entry(action.to_string())
            .or_default()
            .push_back(response);
    }

    /// Returns every recorded request in issue order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    /// Returns the recorded form submissions.
    pub fn submitted_forms(&self) -> Vec<MutationForm> {
        self.requests
            .borrow()
            .iter()
            .filter_map(|request| match request {
                RecordedRequest::Submit(form) => Some(form.clone()),
                _ => None,
            })
            .collect()
    }

    /// Forgets recorded requests, keeping scripted responses.
    pub fn clear_requests(&self) {
        self.requests.borrow_mut().clear();
    }
}

impl MediaApiService for MemoryMediaApi {
    fn get<'a>(
        &'a self,
        url: &'a str,
        query: &'a [(&'static str, String)],
    ) -> MediaApiFuture<'a, Result<Value, MediaApiError>> {
        Box::pin(async move {
            self.requests.borrow_mut().push(RecordedRequest::Get {
                url: url.to_string(),
                query: query
                    .iter()
                    .map(|(key, value)| (key.to_string(), value.clone()))
                    .collect(),
            });
            self.gets
                .borrow()
                .get(&get_key(url, query))
                .cloned()
                .unwrap_or(Err(MediaApiError::Server { status: 404 }))
        })
    }

    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: &'a Value,
    ) -> MediaApiFuture<'a, Result<Value, MediaApiError>> {
        Box::pin(async move {
            self.requests.borrow_mut().push(RecordedRequest::PostJson {
                url: url.to_string(),
                body: body.clone(),
            });
            self.posts
                .borrow()
                .get(url)
                .cloned()
                .unwrap_or(Err(MediaApiError::Server { status: 404 }))
        })
    }

    fn submit<'a>(
        &'a self,
        form: &'a MutationForm,
    ) -> MediaApiFuture<'a, Result<SubmitResponse, MediaApiError>> {
        Box::pin(async move {
            self.requests
                .borrow_mut()
                .push(RecordedRequest::Submit(form.clone()));
            self.submits
                .borrow_mut()
                .get_mut(&form.action)
                .and_then(VecDeque::pop_front)
                .unwrap_or(Err(MediaApiError::Server { status: 404 }))
        })
    }
}
