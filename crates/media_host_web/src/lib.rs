//! Browser (`wasm32`) implementations of the [`media_host`] service contracts.
//!
//! `fetch` transport with anti-CSRF headers, `setTimeout` timers, `location.hash` routing,
//! the upload file registry, and page configuration lookup. Native builds compile against a
//! shim that reports the browser APIs as unsupported.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod api;
mod bridge;
pub mod config;
pub mod request;
pub mod route;
pub mod timer;
pub mod uploads;

pub use api::WebMediaApiService;
pub use config::{read_page_config, DEFAULT_CONFIG_ELEMENT_ID};
pub use route::HashRouteService;
pub use timer::WebTimerService;
pub use uploads::UploadRegistry;
