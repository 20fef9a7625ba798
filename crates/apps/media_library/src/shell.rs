use leptos::*;
use media_host::MediaLibraryConfig;
use media_runtime::{use_media_library, LibraryAction, MediaLibraryProvider, ToastId};
use media_ui::{Spinner, ToastStack};

use crate::{
    breadcrumbs::Breadcrumbs, create_directory::CreateDirectoryForm,
    directory_sidebar::DirectorySidebar, file_sidebar::FileSidebar, grid::EntryGrid,
    presentation::toast_items, search::SearchBar, upload::UploadZone,
};

#[component]
/// Full-page media library bound to the page hash.
pub fn MediaLibraryApp(
    /// Page configuration.
    config: MediaLibraryConfig,
) -> impl IntoView {
    view! {
        <MediaLibraryProvider config=config>
            <LibraryView />
        </MediaLibraryProvider>
    }
}

#[component]
/// Toolbar, breadcrumbs, grid, sidebar and notifications of the nearest library instance.
pub fn LibraryView() -> impl IntoView {
    let runtime = use_media_library();
    let loading = Signal::derive(move || runtime.state.with(|state| state.loading()));
    let selection_mode = move || runtime.state.with(|state| state.capabilities.selection_mode);
    let open_file = create_memo(move |_| runtime.state.with(|state| state.open_file().cloned()));
    let current_directory =
        create_memo(move |_| runtime.state.with(|state| state.current_directory().cloned()));
    let toasts = Signal::derive(move || runtime.state.with(|state| toast_items(&state.toasts)));

    view! {
        <div
            class="media-library"
            data-selection-mode=move || selection_mode().to_string()
            aria-busy=move || loading.get().to_string()
        >
            <header class="media-library__toolbar">
                <SearchBar />
                <Spinner active=loading />
            </header>
            <Breadcrumbs />
            <div class="media-library__body">
                <main class="media-library__content">
                    <CreateDirectoryForm />
                    <UploadZone />
                    <EntryGrid />
                </main>
                <Show
                    when=move || open_file.with(Option::is_some)
                    fallback=move || {
                        view! {
                            <Show when=move || {
                                !selection_mode() && current_directory.with(Option::is_some)
                            }>
                                <DirectorySidebar directory=current_directory />
                            </Show>
                        }
                    }
                >
                    <FileSidebar file=open_file />
                </Show>
            </div>
            <ToastStack
                toasts=toasts
                on_dismiss=Callback::new(move |id: u64| {
                    runtime.dispatch_action(LibraryAction::DismissToast(ToastId(id)))
                })
            />
        </div>
    }
}
