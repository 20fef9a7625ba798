use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Notification rendered by [`ToastStack`].
pub struct ToastItem {
    /// Stable id used for keyed rendering and dismissal.
    pub id: u64,
    /// Severity.
    pub tone: Tone,
    /// Text shown to the user.
    pub text: String,
}

#[component]
/// Stack of dismissible notifications, newest last.
pub fn ToastStack(
    #[prop(into)] toasts: Signal<Vec<ToastItem>>,
    on_dismiss: Callback<u64>,
) -> impl IntoView {
    view! {
        <div class="ui-toast-stack" data-ui-primitive="true" data-ui-kind="toast-stack">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class="ui-toast"
                            role="status"
                            aria-live=toast.tone.live_region()
                            data-ui-kind="toast"
                            data-ui-tone=toast.tone.token()
                        >
                            <span class="ui-toast__text">{toast.text}</span>
                            <button
                                type="button"
                                class="ui-toast__dismiss"
                                aria-label="Dismiss notification"
                                on:click=move |_| on_dismiss.call(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
/// Busy indicator shown while `active` is true.
pub fn Spinner(
    #[prop(into)] active: Signal<bool>,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Loading".to_string());
    view! {
        <span
            class="ui-spinner"
            role="progressbar"
            aria-label=label
            aria-busy=move || bool_token(active.get())
            hidden=move || !active.get()
            data-ui-primitive="true"
            data-ui-kind="spinner"
            data-ui-state=move || {
                if active.get() {
                    "active"
                } else {
                    "idle"
                }
            }
        ></span>
    }
}

#[component]
/// Small status label.
pub fn Badge(
    #[prop(default = Tone::Info)] tone: Tone,
    #[prop(optional, into)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class="ui-badge"
            title=title
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Empty state content block.
pub fn EmptyState(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            {children()}
        </div>
    }
}
