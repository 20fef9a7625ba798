//! Typed read operations on top of [`MediaApiService`].

use serde_json::json;

use super::{
    error::MediaApiError,
    service::{MediaApiService, QueryParams},
};
use crate::{
    config::ApiEndpoints,
    model::{decode_suggestions, DirectoryEntry, DirectoryId, FileId, FileUsages, LibraryEntry},
};

/// Object types requested from the suggestion endpoint.
pub const SUGGESTION_OBJECT_TYPES: [&str; 1] = ["mediafile"];

fn directory_query(directory: Option<DirectoryId>) -> QueryParams {
    directory
        .map(|id| vec![("directory", id.to_string())])
        .unwrap_or_default()
}

/// Borrowing client binding a transport to an endpoint table.
pub struct MediaApi<'a> {
    service: &'a dyn MediaApiService,
    endpoints: &'a ApiEndpoints,
}

impl<'a> MediaApi<'a> {
    /// Binds `service` to `endpoints`.
    pub fn new(service: &'a dyn MediaApiService, endpoints: &'a ApiEndpoints) -> Self {
        Self { service, endpoints }
    }

    /// Lists a directory; `None` lists the root.
    pub async fn directory_content(
        &self,
        directory: Option<DirectoryId>,
    ) -> Result<Vec<LibraryEntry>, MediaApiError> {
        let query = directory_query(directory);
        let data = self
            .service
            .get(&self.endpoints.get_directory_content, &query)
            .await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Returns the root→`directory` chain. The root itself has an empty path.
    pub async fn directory_path(
        &self,
        directory: Option<DirectoryId>,
    ) -> Result<Vec<DirectoryEntry>, MediaApiError> {
        if directory.is_none() {
            return Ok(Vec::new());
        }
        let query = directory_query(directory);
        let data = self
            .service
            .get(&self.endpoints.get_directory_path, &query)
            .await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Runs a full-text search over names.
    pub async fn search(&self, query: &str) -> Result<Vec<LibraryEntry>, MediaApiError> {
        let params = vec![("query", query.to_string())];
        let data = self
            .service
            .get(&self.endpoints.get_search_result, &params)
            .await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Lists files that are not used anywhere.
    pub async fn unused_files(&self) -> Result<Vec<LibraryEntry>, MediaApiError> {
        let data = self
            .service
            .get(&self.endpoints.filter_unused_media_files, &[])
            .await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Returns name suggestions for the search field.
    pub async fn search_suggestions(&self, query: &str) -> Result<Vec<String>, MediaApiError> {
        let body = json!({
            "query_string": query,
            "object_types": SUGGESTION_OBJECT_TYPES,
            "archived": false,
        });
        let data = self
            .service
            .post_json(&self.endpoints.get_search_suggestions, &body)
            .await?;
        Ok(decode_suggestions(data)?)
    }

    /// Looks up where a file is embedded.
    pub async fn file_usages(&self, file: FileId) -> Result<FileUsages, MediaApiError> {
        let query = vec![("file", file.to_string())];
        let data = self
            .service
            .get(&self.endpoints.get_file_usages, &query)
            .await?;
        Ok(serde_json::from_value(data)?)
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::{
        api::memory::{MemoryMediaApi, RecordedRequest},
        config::test_endpoints,
    };

    #[test]
    fn root_listing_omits_directory_parameter_and_skips_path_request() {
        let endpoints = test_endpoints();
        let backend = MemoryMediaApi::default();
        backend.respond_get(
            &endpoints.get_directory_content,
            &[],
            Ok(json!([{"id": 1, "name": "a", "type": "directory"}])),
        );
        let api = MediaApi::new(&backend, &endpoints);

        let content = block_on(api.directory_content(None)).expect("content");
        let path = block_on(api.directory_path(None)).expect("path");

        assert_eq!(content.len(), 1);
        assert!(path.is_empty());
        assert_eq!(
            backend.requests(),
            vec![RecordedRequest::Get {
                url: endpoints.get_directory_content.clone(),
                query: Vec::new(),
            }]
        );
    }

    #[test]
    fn suggestions_post_query_string_and_object_types() {
        let endpoints = test_endpoints();
        let backend = MemoryMediaApi::default();
        backend.respond_post_json(&endpoints.get_search_suggestions, Ok(json!(["logo"])));
        let api = MediaApi::new(&backend, &endpoints);

        let suggestions = block_on(api.search_suggestions("lo")).expect("suggestions");

        assert_eq!(suggestions, vec!["logo".to_string()]);
        assert_eq!(
            backend.requests(),
            vec![RecordedRequest::PostJson {
                url: endpoints.get_search_suggestions.clone(),
                body: json!({"query_string": "lo", "object_types": ["mediafile"], "archived": false}),
            }]
        );
    }

    #[test]
    fn undecodable_data_is_reported_as_malformed() {
        let endpoints = test_endpoints();
        let backend = MemoryMediaApi::default();
        backend.respond_get(
            &endpoints.get_file_usages,
            &[("file", "3".to_string())],
            Ok(json!("not an object")),
        );
        let api = MediaApi::new(&backend, &endpoints);

        let err = block_on(api.file_usages(FileId(3))).expect_err("malformed");
        assert!(matches!(err, MediaApiError::Malformed(_)));
    }
}
