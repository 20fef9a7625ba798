use leptos::*;
use media_host::{Capabilities, FileEntry, LibraryRoute, MediaLibraryConfig};
use media_runtime::MediaLibraryProvider;
use media_ui::Modal;

use crate::shell::LibraryView;

#[component]
/// Library rendered as a modal file picker.
///
/// The picker owns its own controller and keeps navigation out of the page hash, so it can be
/// opened while the full-page library is mounted. Picking a file calls `on_select` and then
/// `on_close`.
pub fn MediaSelectionModal(
    /// Page configuration.
    config: MediaLibraryConfig,
    /// Restricts picks to images.
    #[prop(optional)]
    only_image: bool,
    /// Dialog title.
    #[prop(optional, into)]
    title: Option<String>,
    /// Receives the picked file.
    on_select: Callback<FileEntry>,
    /// Closes the dialog.
    on_close: Callback<()>,
) -> impl IntoView {
    let capabilities = Capabilities::from_config(&config).for_selection(only_image);
    let title = title.unwrap_or_else(|| "Select media".to_string());
    let picked = Callback::new(move |file: FileEntry| {
        on_select.call(file);
        on_close.call(());
    });

    view! {
        <Modal title=title layout_class="media-selection" on_close=on_close>
            <MediaLibraryProvider
                config=config
                capabilities=capabilities
                on_select=picked
                embedded_route=LibraryRoute::root()
            >
                <LibraryView />
            </MediaLibraryProvider>
        </Modal>
    }
}
