//! Shared control, feedback and overlay primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

mod controls;
mod feedback;
mod overlays;

pub use controls::{Button, CheckboxField, FieldErrors, TextField};
pub use feedback::{Badge, EmptyState, Spinner, ToastItem, ToastStack};
pub use overlays::{ConfirmDialog, Modal};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard action button.
    #[default]
    Standard,
    /// Primary emphasized action button.
    Primary,
    /// Quiet/toolbar style button.
    Quiet,
    /// Danger/destructive button.
    Danger,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Semantic tone of badges and notifications.
pub enum Tone {
    /// Neutral information.
    #[default]
    Info,
    /// Completed operation.
    Success,
    /// Recoverable problem.
    Warning,
    /// Failed operation.
    Danger,
}

impl Tone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    pub(crate) fn live_region(self) -> &'static str {
        match self {
            Self::Warning | Self::Danger => "assertive",
            Self::Info | Self::Success => "polite",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn is_escape(ev: &KeyboardEvent) -> bool {
    ev.key() == "Escape"
}

pub(crate) fn call_mouse(callback: Option<Callback<MouseEvent>>, ev: MouseEvent) {
    if let Some(callback) = callback {
        callback.call(ev);
    }
}
