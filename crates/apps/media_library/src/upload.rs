use leptos::*;
use media_runtime::use_media_library;
use media_ui::Badge;
use web_sys::{DragEvent, HtmlInputElement};

use crate::presentation::{upload_status_label, DRAG_FILE_TYPE};

fn carries_files(ev: &DragEvent) -> bool {
    let Some(transfer) = ev.data_transfer() else {
        return false;
    };
    let types = transfer.types();
    let has = |wanted: &str| types.iter().any(|value| value.as_string().as_deref() == Some(wanted));
    has("Files") && !has(DRAG_FILE_TYPE)
}

#[component]
/// Drop zone and file picker feeding the upload queue, plus the queue status list.
pub fn UploadZone() -> impl IntoView {
    let runtime = use_media_library();
    let accepts = create_memo(move |_| runtime.state.with(|state| state.accepts_uploads()));
    let accept_attribute = move || runtime.state.with(|state| state.media_types.accept_attribute());
    let hover = create_rw_signal(false);
    let items = create_memo(move |_| runtime.state.with(|state| state.uploads.clone()));

    let on_pick = move |ev: ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            runtime.queue_uploads(&files);
        }
        input.set_value("");
    };
    let on_drop = move |ev: DragEvent| {
        hover.set(false);
        if !carries_files(&ev) {
            return;
        }
        ev.prevent_default();
        if let Some(files) = ev.data_transfer().and_then(|transfer| transfer.files()) {
            runtime.queue_uploads(&files);
        }
    };

    view! {
        <Show when=move || accepts.get()>
            <section
                class="media-upload"
                class=("media-upload--hover", move || hover.get())
                aria-label="Upload files"
                on:dragover=move |ev: DragEvent| {
                    if carries_files(&ev) {
                        ev.prevent_default();
                        hover.set(true);
                    }
                }
                on:dragleave=move |_| hover.set(false)
                on:drop=on_drop
            >
                <label class="media-upload__picker">
                    <span>"Drop files here or choose files"</span>
                    <input type="file" multiple=true accept=accept_attribute on:change=on_pick />
                </label>
            </section>
        </Show>
        <Show when=move || items.with(|items| !items.is_empty())>
            <ul class="media-upload__queue" aria-live="polite">
                <For
                    each=move || items.get()
                    key=|item| (item.ticket.id.0, format!("{:?}", item.status))
                    let:item
                >
                    {
                        let (tone, label) = upload_status_label(&item.status);
                        view! {
                            <li class="media-upload__item">
                                <span class="media-upload__name">{item.ticket.name.clone()}</span>
                                <Badge tone=tone>{label}</Badge>
                            </li>
                        }
                    }
                </For>
            </ul>
        </Show>
    }
}
