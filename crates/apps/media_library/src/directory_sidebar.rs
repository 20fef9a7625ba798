use leptos::*;
use media_host::{DirectoryEntry, FormKind, LOCKED_HINT};
use media_runtime::{use_media_library, DirectoryDraft};
use media_ui::{Badge, Button, ButtonVariant, CheckboxField, ConfirmDialog, FieldErrors, TextField, Tone};

use crate::{file_sidebar::form_messages, presentation::entry_count_label};

fn update_draft(draft: RwSignal<Option<DirectoryDraft>>, change: impl FnOnce(&mut DirectoryDraft)) {
    draft.update(|draft| {
        if let Some(draft) = draft {
            change(draft);
        }
    });
}

#[component]
/// Properties panel of the directory being viewed.
pub fn DirectorySidebar(#[prop(into)] directory: Signal<Option<DirectoryEntry>>) -> impl IntoView {
    let runtime = use_media_library();
    let draft = create_rw_signal(
        directory
            .get_untracked()
            .map(|entry| DirectoryDraft::new(&entry)),
    );
    create_effect(move |_| {
        if let Some(entry) = directory.get() {
            draft.update(|draft| match draft {
                Some(draft) => draft.sync(&entry),
                None => *draft = Some(DirectoryDraft::new(&entry)),
            });
        }
    });

    let controls = create_memo(move |_| {
        let capabilities = runtime.state.with(|state| state.capabilities);
        directory.with(|entry| {
            entry
                .as_ref()
                .map(|entry| capabilities.directory_controls(entry))
                .unwrap_or_default()
        })
    });
    let name = move || draft.with(|draft| draft.as_ref().map(|d| d.changed.name.clone()).unwrap_or_default());
    let editing = move || draft.with(|draft| draft.as_ref().is_some_and(|d| d.editing_name));
    let hidden = move || draft.with(|draft| draft.as_ref().is_some_and(|d| d.changed.is_hidden));
    let confirming = move || draft.with(|draft| draft.as_ref().is_some_and(|d| d.confirm_delete));
    let dirty = move || {
        let controls = controls.get();
        draft.with(|draft| draft.as_ref().is_some_and(|d| d.is_dirty(&controls)))
    };
    let errors = move |kind: FormKind| {
        Signal::derive(move || runtime.state.with(|state| form_messages(state, kind)))
    };
    let lock_title = Signal::derive(move || {
        if controls.get().locked {
            LOCKED_HINT.to_string()
        } else {
            String::new()
        }
    });

    let save = move || {
        let endpoints = runtime.state.with_untracked(|state| state.endpoints.clone());
        let controls = controls.get_untracked();
        let form = draft.with_untracked(|draft| {
            draft
                .as_ref()
                .and_then(|draft| draft.to_form(&endpoints, &controls))
        });
        if let Some(form) = form {
            update_draft(draft, DirectoryDraft::mark_submitted);
            runtime.submit(form);
        }
    };
    let confirm_delete = move || {
        let endpoints = runtime.state.with_untracked(|state| state.endpoints.clone());
        let mut form = None;
        update_draft(draft, |draft| form = draft.confirm_delete(&endpoints));
        if let Some(form) = form {
            runtime.submit(form);
        }
    };

    view! {
        <aside class="media-sidebar media-sidebar--directory" aria-label="Directory properties">
            <header class="media-sidebar__header">
                <h2 class="media-sidebar__title">
                    {move || directory.with(|entry| entry.as_ref().map(|entry| entry.name.clone()))}
                </h2>
            </header>

            <Show when=move || controls.get().locked>
                <Badge tone=Tone::Warning title=LOCKED_HINT>
                    "Locked"
                </Badge>
            </Show>

            <section class="media-sidebar__section">
                <h3>"Name"</h3>
                <Show
                    when=editing
                    fallback=move || {
                        view! {
                            <p class="media-sidebar__value">{name}</p>
                            <Show when=move || controls.get().show_edit>
                                <Button
                                    variant=ButtonVariant::Quiet
                                    ui_slot="edit-name"
                                    title=lock_title
                                    disabled=Signal::derive(move || !controls.get().rename)
                                    on_click=Callback::new(move |_| update_draft(draft, |draft| draft.editing_name = true))
                                >
                                    "Edit"
                                </Button>
                            </Show>
                        }
                    }
                >
                    <TextField
                        aria_label="Directory name"
                        value=Signal::derive(name)
                        on_input=Callback::new(move |value: String| {
                            update_draft(draft, move |draft| draft.changed.name = value)
                        })
                    />
                </Show>
            </section>

            <Show when=move || controls.get().show_hidden_toggle>
                <CheckboxField
                    label="Hidden"
                    disabled=Signal::derive(move || !controls.get().toggle_hidden)
                    checked=Signal::derive(hidden)
                    on_change=Callback::new(move |value: bool| {
                        update_draft(draft, move |draft| draft.changed.is_hidden = value)
                    })
                />
            </Show>

            <FieldErrors errors=errors(FormKind::EditDirectory) />

            <Show when=dirty>
                <Button variant=ButtonVariant::Primary ui_slot="save" on_click=Callback::new(move |_| save())>
                    "Save"
                </Button>
            </Show>

            <dl class="media-sidebar__facts">
                <dt>"Created"</dt>
                <dd>{move || directory.with(|entry| entry.as_ref().map(|entry| entry.created_date.clone()))}</dd>
                <dt>"Contents"</dt>
                <dd>
                    {move || {
                        directory
                            .with(|entry| entry.as_ref().map(|entry| entry_count_label(entry.number_of_entries)))
                    }}
                </dd>
            </dl>

            <Show when=move || controls.get().show_delete>
                <Button
                    variant=ButtonVariant::Danger
                    ui_slot="delete"
                    disabled=Signal::derive(move || !controls.get().delete)
                    title=Signal::derive(move || controls.get().delete_hint().unwrap_or_default().to_string())
                    on_click=Callback::new(move |_| update_draft(draft, DirectoryDraft::request_delete))
                >
                    "Delete directory"
                </Button>
            </Show>
            <ConfirmDialog
                open=Signal::derive(confirming)
                title="Delete directory"
                message="The directory will be removed. This cannot be undone."
                on_confirm=Callback::new(move |_| confirm_delete())
                on_cancel=Callback::new(move |_| update_draft(draft, DirectoryDraft::cancel_delete))
            />
            <FieldErrors errors=errors(FormKind::DeleteDirectory) />
        </aside>
    }
}
