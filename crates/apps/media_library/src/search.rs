use leptos::*;
use media_host::{FilterName, LibraryRoute};
use media_runtime::{use_media_library, LibraryAction};
use media_ui::{Button, ButtonVariant, TextField};

#[component]
/// Search field with debounced suggestions and the unused-files filter.
pub fn SearchBar() -> impl IntoView {
    let runtime = use_media_library();
    let query = Signal::derive(move || runtime.state.with(|state| state.search.query.clone()));
    let suggestions = create_memo(move |_| runtime.state.with(|state| state.search.suggestions.clone()));
    let filter_active = move || {
        runtime
            .state
            .with(|state| matches!(state.route, LibraryRoute::Filter(FilterName::Unused)))
    };

    let submit = move |text: String| {
        let text = text.trim().to_string();
        if !text.is_empty() {
            runtime.dispatch_action(LibraryAction::SubmitSearch(text));
        }
    };

    view! {
        <div class="media-search" role="search">
            <form
                class="media-search__form"
                on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    submit(query.get_untracked());
                }
            >
                <TextField
                    input_type="search"
                    placeholder="Search media"
                    aria_label="Search media"
                    value=query
                    on_input=Callback::new(move |value: String| {
                        runtime.dispatch_action(LibraryAction::SearchInputChanged(value))
                    })
                />
                <Button submit=true aria_label="Search">"Search"</Button>
            </form>
            <Show when=move || suggestions.with(|items| !items.is_empty())>
                <ul class="media-search__suggestions" role="listbox">
                    <For each=move || suggestions.get() key=|item| item.clone() let:item>
                        {
                            let text = item.clone();
                            view! {
                                <li role="option">
                                    <button type="button" on:click=move |_| submit(text.clone())>
                                        {item}
                                    </button>
                                </li>
                            }
                        }
                    </For>
                </ul>
            </Show>
            <Button
                variant=ButtonVariant::Quiet
                ui_slot="filter-unused"
                selected=Signal::derive(filter_active)
                on_click=Callback::new(move |_| {
                    runtime
                        .dispatch_action(LibraryAction::OpenRoute(LibraryRoute::Filter(FilterName::Unused)))
                })
            >
                "Unused files"
            </Button>
        </div>
    }
}
