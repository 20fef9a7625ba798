use leptos::*;
use media_host::{DirectoryEntry, FileEntry, LibraryEntry};
use media_runtime::{use_media_library, LibraryAction, ONLY_IMAGE_TEXT};
use media_ui::{Badge, EmptyState, Tone};
use web_sys::DragEvent;

use crate::presentation::{drag_payload, entry_count_label, entry_key, DRAG_FILE_TYPE};

#[component]
/// Grid of the directories and files of the current view.
pub fn EntryGrid() -> impl IntoView {
    let runtime = use_media_library();
    let entries = create_memo(move |_| {
        runtime
            .state
            .with(|state| state.content.iter().cloned().enumerate().collect::<Vec<_>>())
    });
    let is_empty = move || entries.with(Vec::is_empty) && !runtime.state.with(|s| s.loading());

    view! {
        <Show
            when=move || !is_empty()
            fallback=|| {
                view! { <EmptyState layout_class="media-grid__empty">"Nothing to show here."</EmptyState> }
            }
        >
            <ul class="media-grid" role="list">
                <For
                    each=move || entries.get()
                    key=|(idx, entry)| entry_key(*idx, entry)
                    let:item
                >
                    {
                        let (idx, entry) = item;
                        match entry {
                            LibraryEntry::Directory(dir) => {
                                view! { <DirectoryCell index=idx directory=dir /> }.into_view()
                            }
                            LibraryEntry::File(file) => {
                                view! { <FileCell index=idx file=file /> }.into_view()
                            }
                        }
                    }
                </For>
            </ul>
        </Show>
    }
}

#[component]
fn DirectoryCell(index: usize, directory: DirectoryEntry) -> impl IntoView {
    let runtime = use_media_library();
    view! {
        <li class="media-grid__cell" data-entry-kind="directory" data-hidden=directory.is_hidden>
            <button
                type="button"
                class="media-grid__entry"
                title=directory.name.clone()
                on:click=move |_| runtime.dispatch_action(LibraryAction::OpenEntry { index })
            >
                <span class="media-grid__icon media-grid__icon--directory" aria-hidden="true"></span>
                <span class="media-grid__name">{directory.name.clone()}</span>
                <span class="media-grid__meta">{entry_count_label(directory.number_of_entries)}</span>
            </button>
            {directory.is_global.then(|| view! { <Badge title="Global directory">"Global"</Badge> })}
        </li>
    }
}

#[component]
fn FileCell(index: usize, file: FileEntry) -> impl IntoView {
    let runtime = use_media_library();
    let (selection_mode, selectable, draggable) = runtime.state.with_untracked(|state| {
        let caps = &state.capabilities;
        (caps.selection_mode, caps.can_select(&file), caps.can_move(&file))
    });
    let is_open = move || runtime.state.with(|state| state.open_file_index == Some(index));
    let disabled = selection_mode && !selectable;
    let title = if disabled {
        ONLY_IMAGE_TEXT.to_string()
    } else {
        file.name.clone()
    };
    let file_id = file.id;

    let preview = match (file.is_image(), file.thumbnail_url.clone()) {
        (true, Some(src)) => {
            view! { <img class="media-grid__thumb" src=src alt=file.alt_text.clone() loading="lazy"/> }
                .into_view()
        }
        _ => view! { <span class="media-grid__icon media-grid__icon--file" aria-hidden="true"></span> }
            .into_view(),
    };

    view! {
        <li
            class="media-grid__cell"
            class=("media-grid__cell--open", is_open)
            data-entry-kind="file"
            data-hidden=file.is_hidden
            draggable=if draggable { "true" } else { "false" }
            on:dragstart=move |ev: DragEvent| {
                if !draggable {
                    ev.prevent_default();
                    return;
                }
                if let Some(transfer) = ev.data_transfer() {
                    if transfer.set_data(DRAG_FILE_TYPE, &drag_payload(file_id)).is_err() {
                        logging::warn!("could not start dragging file {}", file_id.0);
                    }
                    transfer.set_effect_allowed("move");
                }
            }
        >
            <button
                type="button"
                class="media-grid__entry"
                title=title
                disabled=disabled
                aria-pressed=move || is_open().to_string()
                on:click=move |_| runtime.dispatch_action(LibraryAction::OpenEntry { index })
            >
                {preview}
                <span class="media-grid__name">{file.name.clone()}</span>
                <span class="media-grid__meta">{file.type_display.clone()}</span>
            </button>
            {file.is_global.then(|| view! { <Badge title="Global file">"Global"</Badge> })}
            {file
                .is_hidden
                .then(|| view! { <Badge tone=Tone::Warning title="Hidden from visitors">"Hidden"</Badge> })}
            {selection_mode
                .then(|| {
                    view! {
                        <button
                            type="button"
                            class="media-grid__details"
                            aria-label="Show details"
                            on:click=move |_| {
                                runtime.dispatch_action(LibraryAction::ShowFileDetails { index })
                            }
                        >
                            "i"
                        </button>
                    }
                })}
        </li>
    }
}
