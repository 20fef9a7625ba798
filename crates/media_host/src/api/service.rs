//! Transport contract for the media library endpoints.

use std::{future::Future, pin::Pin};

use serde_json::Value;

use super::{envelope::SubmitResponse, error::MediaApiError, form::MutationForm};

/// Object-safe boxed future used by [`MediaApiService`] methods.
pub type MediaApiFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Query parameters appended to a GET request, in order.
pub type QueryParams = Vec<(&'static str, String)>;

/// Host service issuing authenticated requests against the configured endpoints.
pub trait MediaApiService {
    /// Issues a GET with `query` appended and returns the envelope's `data` member.
    fn get<'a>(
        &'a self,
        url: &'a str,
        query: &'a [(&'static str, String)],
    ) -> MediaApiFuture<'a, Result<Value, MediaApiError>>;

    /// POSTs a JSON body and returns the envelope's `data` member.
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: &'a Value,
    ) -> MediaApiFuture<'a, Result<Value, MediaApiError>>;

    /// Submits a mutating form as multipart data with the anti-CSRF header.
    ///
    /// Any HTTP status is returned as [`SubmitResponse`]; only transport failures are errors.
    fn submit<'a>(
        &'a self,
        form: &'a MutationForm,
    ) -> MediaApiFuture<'a, Result<SubmitResponse, MediaApiError>>;
}
