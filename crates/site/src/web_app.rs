use leptos::*;
use leptos_meta::*;
use media_host::{FileEntry, MediaLibraryConfig};
use media_library_app::{MediaLibraryApp, MediaSelectionModal};

#[component]
pub fn SiteApp(config: Result<MediaLibraryConfig, String>) -> impl IntoView {
    provide_meta_context();

    let body = match config {
        Ok(config) => view! { <LibraryPage config=config /> }.into_view(),
        Err(err) => {
            logging::warn!("media library configuration unavailable: {err}");
            view! { <ConfigErrorNotice message=err /> }.into_view()
        }
    };

    view! {
        <Title text="Media library" />
        <Meta name="description" content="Browse, upload and organize media files." />
        <main class="site-root">{body}</main>
    }
}

#[component]
fn LibraryPage(config: MediaLibraryConfig) -> impl IntoView {
    let picker_open = create_rw_signal(false);
    let picked = create_rw_signal(None::<FileEntry>);
    let picker_config = store_value(config.clone());

    view! {
        <MediaLibraryApp config=config />
        <section class="site-picker" aria-label="Image picker">
            <button type="button" class="site-picker__open" on:click=move |_| picker_open.set(true)>
                "Insert image"
            </button>
            {move || {
                picked
                    .get()
                    .map(|file| {
                        view! {
                            <p class="site-picker__result">
                                "Selected: " <a href=file.url.unwrap_or_default()>{file.name}</a>
                            </p>
                        }
                    })
            }}
            <Show when=move || picker_open.get()>
                <MediaSelectionModal
                    config=picker_config.get_value()
                    only_image=true
                    title="Insert image"
                    on_select=Callback::new(move |file: FileEntry| picked.set(Some(file)))
                    on_close=Callback::new(move |_| picker_open.set(false))
                />
            </Show>
        </section>
    }
}

#[component]
pub fn ConfigErrorNotice(message: String) -> impl IntoView {
    view! {
        <section class="site-config-error" role="alert">
            <h1>"Media library unavailable"</h1>
            <p>{message}</p>
        </section>
    }
}
