use leptos::*;
use media_host::{FileEntry, FileUsage, FormKind, LOCKED_HINT};
use media_runtime::{use_media_library, FileDraft, LibraryAction, LibraryState};
use media_ui::{
    Badge, Button, ButtonVariant, CheckboxField, ConfirmDialog, FieldErrors, TextField, Tone,
};
use web_sys::HtmlInputElement;

pub(crate) fn form_messages(state: &LibraryState, kind: FormKind) -> Vec<String> {
    state
        .errors_for(kind)
        .map(|fields| fields.values().flatten().cloned().collect())
        .unwrap_or_default()
}

fn update_draft(draft: RwSignal<Option<FileDraft>>, change: impl FnOnce(&mut FileDraft)) {
    draft.update(|draft| {
        if let Some(draft) = draft {
            change(draft);
        }
    });
}

#[component]
/// Properties panel of the open file.
pub fn FileSidebar(#[prop(into)] file: Signal<Option<FileEntry>>) -> impl IntoView {
    let runtime = use_media_library();
    let draft = create_rw_signal(file.get_untracked().map(|entry| FileDraft::new(&entry)));
    create_effect(move |_| {
        if let Some(entry) = file.get() {
            draft.update(|draft| match draft {
                Some(draft) => draft.sync(&entry),
                None => *draft = Some(FileDraft::new(&entry)),
            });
        }
    });

    let controls = create_memo(move |_| {
        let capabilities = runtime.state.with(|state| state.capabilities);
        file.with(|entry| {
            entry
                .as_ref()
                .map(|entry| capabilities.file_controls(entry))
                .unwrap_or_default()
        })
    });
    let expert = move || runtime.state.with(|state| state.expert_mode);
    let field = move |read: fn(&FileDraft) -> String| {
        move || draft.with(|draft| draft.as_ref().map(read).unwrap_or_default())
    };
    let flag = move |read: fn(&FileDraft) -> bool| {
        move || draft.with(|draft| draft.as_ref().map(read).unwrap_or(false))
    };
    let info = move |read: fn(&FileEntry) -> String| {
        move || file.with(|entry| entry.as_ref().map(read).unwrap_or_default())
    };
    let is_image = move || file.with(|entry| entry.as_ref().is_some_and(FileEntry::is_image));
    let dirty = move || {
        let controls = controls.get();
        draft.with(|draft| draft.as_ref().is_some_and(|draft| draft.is_dirty(&controls)))
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
            update_draft(draft, FileDraft::mark_submitted);
            runtime.submit(form);
        }
    };
    let confirm_delete = move || {
        let endpoints = runtime.state.with_untracked(|state| state.endpoints.clone());
        let mut form = None;
        draft.update(|draft| {
            if let Some(draft) = draft {
                form = draft.confirm_delete(&endpoints);
            }
        });
        if let Some(form) = form {
            runtime.submit(form);
        }
    };
    let replace = move |ev: ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let picked = input.files().and_then(|files| files.get(0));
        if let (Some(picked), Some(entry)) = (picked, file.get_untracked()) {
            runtime.replace_file(entry.id, picked);
        }
        input.set_value("");
    };

    view! {
        <aside class="media-sidebar media-sidebar--file" aria-label="File properties">
            <header class="media-sidebar__header">
                <h2 class="media-sidebar__title">{info(|entry| entry.name.clone())}</h2>
                <Button
                    variant=ButtonVariant::Quiet
                    aria_label="Close details"
                    on_click=Callback::new(move |_| runtime.dispatch_action(LibraryAction::CloseSidebar))
                >
                    "×"
                </Button>
            </header>

            <Show when=is_image>
                <img
                    class="media-sidebar__preview"
                    src=info(|entry| entry.thumbnail_url.clone().or_else(|| entry.url.clone()).unwrap_or_default())
                    alt=info(|entry| entry.alt_text.clone())
                />
            </Show>

            <Show when=move || controls.get().locked>
                <Badge tone=Tone::Warning title=LOCKED_HINT>
                    "Locked"
                </Badge>
            </Show>

            <section class="media-sidebar__section">
                <h3>"Name"</h3>
                <Show
                    when=flag(|draft| draft.editing_name)
                    fallback=move || {
                        view! {
                            <p class="media-sidebar__value">{field(|draft| draft.changed.name.clone())}</p>
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
                        aria_label="File name"
                        value=Signal::derive(field(|draft| draft.changed.name.clone()))
                        on_input=Callback::new(move |value: String| {
                            update_draft(draft, move |draft| draft.changed.name = value)
                        })
                    />
                </Show>
            </section>

            <Show when=is_image>
                <section class="media-sidebar__section">
                    <h3>"Alternative text"</h3>
                    <Show
                        when=flag(|draft| draft.editing_alt_text)
                        fallback=move || {
                            view! {
                                <p class="media-sidebar__value">{field(|draft| draft.changed.alt_text.clone())}</p>
                                <Show when=move || controls.get().show_edit>
                                    <Button
                                        variant=ButtonVariant::Quiet
                                        ui_slot="edit-alt-text"
                                        title=lock_title
                                        disabled=Signal::derive(move || !controls.get().edit_alt_text)
                                        on_click=Callback::new(move |_| {
                                            update_draft(draft, |draft| draft.editing_alt_text = true)
                                        })
                                    >
                                        "Edit"
                                    </Button>
                                </Show>
                            }
                        }
                    >
                        <TextField
                            aria_label="Alternative text"
                            value=Signal::derive(field(|draft| draft.changed.alt_text.clone()))
                            on_input=Callback::new(move |value: String| {
                                update_draft(draft, move |draft| draft.changed.alt_text = value)
                            })
                        />
                    </Show>
                </section>
            </Show>

            <Show when=move || controls.get().show_hidden_toggle>
                <CheckboxField
                    label="Hidden"
                    disabled=Signal::derive(move || !controls.get().toggle_hidden)
                    checked=Signal::derive(flag(|draft| draft.changed.is_hidden))
                    on_change=Callback::new(move |hidden: bool| {
                        update_draft(draft, move |draft| draft.changed.is_hidden = hidden)
                    })
                />
            </Show>

            <FieldErrors errors=errors(FormKind::EditFile) />

            <Show when=dirty>
                <Button variant=ButtonVariant::Primary ui_slot="save" on_click=Callback::new(move |_| save())>
                    "Save"
                </Button>
            </Show>

            <dl class="media-sidebar__facts">
                <dt>"Type"</dt>
                <dd>{info(|entry| entry.type_display.clone())}</dd>
                <dt>"Size"</dt>
                <dd>{info(|entry| entry.file_size.clone())}</dd>
                <dt>"Uploaded"</dt>
                <dd>{info(|entry| entry.uploaded_date.clone())}</dd>
                <dt>"Modified"</dt>
                <dd>{info(|entry| entry.last_modified.clone().unwrap_or_else(|| "-".to_string()))}</dd>
                <Show when=expert>
                    <dt>"Path"</dt>
                    <dd>{info(|entry| entry.path.clone().unwrap_or_default())}</dd>
                    <dt>"Id"</dt>
                    <dd>{info(|entry| entry.id.0.to_string())}</dd>
                </Show>
            </dl>

            <Show when=move || file.with(|entry| entry.as_ref().is_some_and(|entry| entry.url.is_some()))>
                <a
                    class="media-sidebar__link"
                    href=info(|entry| entry.url.clone().unwrap_or_default())
                    target="_blank"
                    rel="noopener"
                >
                    "Open file"
                </a>
            </Show>

            <Show when=move || controls.get().show_replace>
                <label class="media-sidebar__replace" title=move || lock_title.get()>
                    <span>"Replace file"</span>
                    <input
                        type="file"
                        disabled=move || !controls.get().replace
                        on:change=replace
                    />
                </label>
            </Show>
            <FieldErrors errors=errors(FormKind::ReplaceFile) />

            <FileUsagesPanel file=file />

            <Show when=move || controls.get().show_delete>
                <Button
                    variant=ButtonVariant::Danger
                    ui_slot="delete"
                    title=lock_title
                    disabled=Signal::derive(move || !controls.get().delete)
                    on_click=Callback::new(move |_| update_draft(draft, FileDraft::request_delete))
                >
                    "Delete file"
                </Button>
            </Show>
            <ConfirmDialog
                open=Signal::derive(flag(|draft| draft.confirm_delete))
                title="Delete file"
                message="The file will be removed everywhere it is used. This cannot be undone."
                on_confirm=Callback::new(move |_| confirm_delete())
                on_cancel=Callback::new(move |_| update_draft(draft, FileDraft::cancel_delete))
            />
            <FieldErrors errors=errors(FormKind::DeleteFile) />
        </aside>
    }
}

#[component]
fn FileUsagesPanel(file: Signal<Option<FileEntry>>) -> impl IntoView {
    let runtime = use_media_library();
    let usages = create_memo(move |_| {
        let id = file.with(|entry| entry.as_ref().map(|entry| entry.id));
        runtime
            .state
            .with(|state| id.and_then(|id| state.usages_of(id).cloned()))
    });
    let lookup = move |_: ev::MouseEvent| {
        if let Some(entry) = file.get_untracked() {
            runtime.dispatch_action(LibraryAction::RequestFileUsages(entry.id));
        }
    };
    let usage_list = |heading: &'static str, items: Vec<FileUsage>| {
        (!items.is_empty()).then(|| {
            view! {
                <h4>{heading}</h4>
                <ul>
                    {items
                        .into_iter()
                        .map(|usage| match usage.url {
                            Some(url) => view! { <li><a href=url>{usage.title}</a></li> }.into_view(),
                            None => view! { <li>{usage.title}</li> }.into_view(),
                        })
                        .collect_view()}
                </ul>
            }
        })
    };

    view! {
        <section class="media-sidebar__section media-sidebar__usages">
            <h3>"Usage"</h3>
            {move || match usages.get() {
                None => {
                    view! {
                        <Button variant=ButtonVariant::Quiet ui_slot="usages" on_click=Callback::new(lookup)>
                            "Show where this file is used"
                        </Button>
                    }
                        .into_view()
                }
                Some(usages) if !usages.is_used => view! { <p>"This file is not used anywhere."</p> }.into_view(),
                Some(usages) => {
                    view! {
                        {usage_list("Icon", usages.icon_usages.unwrap_or_default())}
                        {usage_list("Content", usages.content_usages.unwrap_or_default())}
                    }
                        .into_view()
                }
            }}
        </section>
    }
}
