use leptos::*;
use media_runtime::{use_media_library, LibraryAction};
use web_sys::DragEvent;

use crate::presentation::{crumbs, parse_drag_payload, DRAG_FILE_TYPE};

fn dragged_file(ev: &DragEvent) -> Option<media_host::FileId> {
    let raw = ev.data_transfer()?.get_data(DRAG_FILE_TYPE).ok()?;
    parse_drag_payload(&raw)
}

#[component]
/// Path from the root to the current view. Directory crumbs accept dragged files.
pub fn Breadcrumbs() -> impl IntoView {
    let runtime = use_media_library();
    let items = create_memo(move |_| {
        runtime
            .state
            .with(|state| crumbs(&state.route, &state.directory_path))
    });
    let can_move = create_memo(move |_| runtime.state.with(|state| state.capabilities.can_move_files()));
    let hover = create_rw_signal(None::<usize>);

    view! {
        <nav class="media-breadcrumbs" aria-label="Directory path">
            <ol>
                <For
                    each=move || items.get().into_iter().enumerate()
                    key=|(idx, crumb)| (*idx, crumb.label.clone())
                    let:item
                >
                    {
                        let (idx, crumb) = item;
                        let accepts_drop = crumb.route.is_directory();
                        let route = crumb.route.clone();
                        let target = crumb.target;
                        view! {
                            <li
                                class="media-breadcrumbs__item"
                                class=("media-breadcrumbs__item--drop", move || hover.get() == Some(idx))
                                on:dragover=move |ev: DragEvent| {
                                    if accepts_drop && can_move.get_untracked() {
                                        ev.prevent_default();
                                        hover.set(Some(idx));
                                    }
                                }
                                on:dragleave=move |_| hover.set(None)
                                on:drop=move |ev: DragEvent| {
                                    hover.set(None);
                                    if !accepts_drop {
                                        return;
                                    }
                                    ev.prevent_default();
                                    if let Some(file_id) = dragged_file(&ev) {
                                        runtime
                                            .dispatch_action(LibraryAction::DropFileOnDirectory {
                                                file_id,
                                                target,
                                            });
                                    }
                                }
                            >
                                <button
                                    type="button"
                                    class="media-breadcrumbs__link"
                                    on:click=move |_| {
                                        runtime.dispatch_action(LibraryAction::OpenRoute(route.clone()))
                                    }
                                >
                                    {crumb.label}
                                </button>
                            </li>
                        }
                    }
                </For>
            </ol>
        </nav>
    }
}
