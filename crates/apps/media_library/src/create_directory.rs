use leptos::*;
use media_host::{FormKind, MutationForm};
use media_runtime::use_media_library;
use media_ui::{Button, ButtonVariant, FieldErrors, TextField};

use crate::file_sidebar::form_messages;

#[component]
/// Inline form creating a directory inside the one being viewed.
pub fn CreateDirectoryForm() -> impl IntoView {
    let runtime = use_media_library();
    let name = create_rw_signal(String::new());
    let allowed = create_memo(move |_| {
        runtime.state.with(|state| {
            state.route.is_directory()
                && (state.route.directory().is_none() || state.current_directory().is_some())
                && state
                    .capabilities
                    .can_create_directory_in(state.current_directory())
        })
    });
    // A successful create navigates into the new directory.
    let route = create_memo(move |_| runtime.state.with(|state| state.route.clone()));
    create_effect(move |previous: Option<()>| {
        route.track();
        if previous.is_some() {
            name.set(String::new());
        }
    });
    let errors = Signal::derive(move || {
        runtime
            .state
            .with(|state| form_messages(state, FormKind::CreateDirectory))
    });
    let create = move || {
        let value = name.get_untracked();
        if value.trim().is_empty() {
            return;
        }
        let form = runtime.state.with_untracked(|state| {
            MutationForm::create_directory(&state.endpoints, state.route.directory(), &value)
        });
        runtime.submit(form);
    };

    view! {
        <Show when=move || allowed.get()>
            <form
                class="media-create-directory"
                on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    create();
                }
            >
                <TextField
                    placeholder="New directory"
                    aria_label="Directory name"
                    value=name
                    invalid=Signal::derive(move || errors.with(|errors| !errors.is_empty()))
                    on_input=Callback::new(move |value: String| name.set(value))
                />
                <Button
                    variant=ButtonVariant::Primary
                    submit=true
                    disabled=Signal::derive(move || name.with(|name| name.trim().is_empty()))
                >
                    "Create"
                </Button>
                <FieldErrors errors=errors />
            </form>
        </Show>
    }
}
