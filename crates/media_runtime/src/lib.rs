//! Controller of the media library.
//!
//! [`reduce_library`] is the authoritative state transition engine; it never performs I/O and
//! instead returns [`LibraryEffect`] intents. [`execute_effect`] runs those intents against the
//! injected host services and turns their outcome into follow-up [`LibraryAction`] values.
//! [`MediaLibraryProvider`] ties both into one Leptos-owned instance.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod effect_executor;
pub mod effects;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod sidebar;

pub use effects::{execute_effect, LibraryHost, SelectMediaHandler};
pub use model::*;
pub use reducer::{reduce_library, LibraryAction, LibraryEffect, ReducerError};
pub use runtime_context::{use_media_library, MediaLibraryContext, MediaLibraryProvider};
pub use sidebar::{DirectoryDraft, FileDraft};
