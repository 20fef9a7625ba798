mod web_app;

pub use web_app::{ConfigErrorNotice, SiteApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    let config = media_host_web::read_page_config(media_host_web::DEFAULT_CONFIG_ELEMENT_ID)
        .map_err(|err| err.to_string());
    leptos::mount_to_body(move || leptos::view! { <SiteApp config=config.clone() /> })
}
