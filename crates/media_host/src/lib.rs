//! Typed host-domain contracts and shared models for the media library.
//!
//! This crate is the API-first boundary between the library controller and its environment. It
//! exposes the directory/file records, the endpoint configuration, request/response envelopes,
//! hash routes, and the service traits the browser adapters in `media_host_web` implement.
//! In-memory adapters are included so the controller can be driven natively in tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod api;
pub mod config;
pub mod model;
pub mod permissions;
pub mod route;
pub mod sequence;
pub mod timer;

pub use api::client::{MediaApi, SUGGESTION_OBJECT_TYPES};
pub use api::envelope::{extract_data, FlashMessage, MessageKind, SubmitResponse, HTTP_OK};
pub use api::error::MediaApiError;
pub use api::form::{FormKind, FormValue, MutationForm, UploadTicket, UploadTicketId};
pub use api::memory::{MemoryMediaApi, RecordedRequest};
pub use api::service::{MediaApiFuture, MediaApiService, QueryParams};
pub use config::{
    ApiEndpoints, ConfigError, MediaLibraryConfig, MediaTypes, DEFAULT_CSRF_COOKIE_NAME,
    DEFAULT_CSRF_HEADER_NAME,
};
pub use model::{
    decode_suggestions, position_of_file, DirectoryEntry, DirectoryId, FileEntry, FileId,
    FileUsage, FileUsages, LibraryEntry,
};
pub use permissions::{
    Capabilities, DirectoryControls, FileControls, LOCKED_HINT, NON_EMPTY_DELETE_HINT,
};
pub use route::{FilterName, LibraryRoute, MemoryRouteService, RouteService};
pub use sequence::{RequestSeq, RequestSequence};
pub use timer::{ImmediateTimer, TimerFuture, TimerService};
