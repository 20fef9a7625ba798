//! Media library views: management shell and selection-mode picker.
//!
//! Components read and mutate the nearest [`media_runtime::MediaLibraryContext`]; all network
//! and routing work happens in the runtime's effect executor.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod breadcrumbs;
mod create_directory;
mod directory_sidebar;
mod file_sidebar;
mod grid;
mod presentation;
mod search;
mod selection;
mod shell;
mod upload;

pub use selection::MediaSelectionModal;
pub use shell::{LibraryView, MediaLibraryApp};
