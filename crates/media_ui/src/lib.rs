//! Leptos primitive set of the media library.
//!
//! Views compose these primitives instead of emitting ad hoc control markup. Every primitive
//! renders the stable `data-ui-*` DOM contract (`data-ui-primitive`, `data-ui-kind`, and
//! state tokens) that the library stylesheet targets.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Badge, Button, ButtonVariant, CheckboxField, ConfirmDialog, EmptyState, FieldErrors, Modal,
    Spinner, TextField, Tone, ToastItem, ToastStack,
};

/// Convenience imports for view crates.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonVariant, CheckboxField, ConfirmDialog, EmptyState, FieldErrors,
        Modal, Spinner, TextField, Tone, ToastItem, ToastStack,
    };
}
