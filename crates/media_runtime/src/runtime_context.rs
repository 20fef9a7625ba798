//! Provider and context wiring of one media library controller instance.
//!
//! Every [`MediaLibraryProvider`] owns its own state signal, effect queue, upload registry and
//! host services, so a selection-mode picker can be mounted next to the main library without
//! sharing anything with it.
#![allow(clippy::clone_on_copy)]

use std::rc::Rc;

use leptos::*;
use media_host::{
    Capabilities, FileEntry, FileId, LibraryRoute, MediaLibraryConfig, MemoryRouteService,
    MutationForm, RouteService, UploadTicketId,
};
use media_host_web::{HashRouteService, UploadRegistry, WebMediaApiService, WebTimerService};

use crate::{
    effect_executor,
    effects::LibraryHost,
    model::{LibraryState, UploadStatus},
    reducer::{reduce_library, LibraryAction, LibraryEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading library state and dispatching [`LibraryAction`] values.
pub struct MediaLibraryContext {
    /// Host services executing the effects of this instance.
    pub host: StoredValue<LibraryHost>,
    /// Browser files waiting to be uploaded.
    pub uploads: StoredValue<Rc<UploadRegistry>>,
    /// Reactive controller state.
    pub state: RwSignal<LibraryState>,
    /// Queue of effects emitted by the reducer.
    pub effects: RwSignal<Vec<LibraryEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<LibraryAction>,
}

impl MediaLibraryContext {
    /// Dispatches an action, unless the provider was already unmounted.
    pub fn dispatch_action(&self, action: LibraryAction) {
        if self.state.try_with_untracked(|_| ()).is_none() {
            logging::log!("media library unmounted, dropping {action:?}");
            return;
        }
        self.dispatch.call(action);
    }

    /// Registers picked or dropped browser files and queues them for upload.
    pub fn queue_uploads(&self, files: &web_sys::FileList) {
        let tickets = self.uploads.with_value(|registry| registry.register_list(files));
        if tickets.is_empty() {
            return;
        }
        self.dispatch_action(LibraryAction::UploadsQueued(tickets));

        let rejected: Vec<UploadTicketId> = self.state.with_untracked(|state| {
            state
                .uploads
                .iter()
                .filter(|item| item.status == UploadStatus::Rejected)
                .map(|item| item.ticket.id)
                .collect()
        });
        self.uploads.with_value(|registry| {
            for id in rejected {
                registry.release(id);
            }
        });
    }

    /// Replaces the content of `file_id` with a browser file.
    pub fn replace_file(&self, file_id: FileId, file: web_sys::File) {
        let ticket = self.uploads.with_value(|registry| registry.register(file));
        let form = self
            .state
            .with_untracked(|state| MutationForm::replace_file(&state.endpoints, file_id, ticket.id));
        self.dispatch_action(LibraryAction::Submit(form));
    }

    /// Submits a mutating form built by a view.
    pub fn submit(&self, form: MutationForm) {
        self.dispatch_action(LibraryAction::Submit(form));
    }
}

fn install_hash_listener(runtime: MediaLibraryContext) {
    let handle = window_event_listener(ev::hashchange, move |_| {
        runtime.dispatch_action(LibraryAction::Navigate(HashRouteService.current()));
    });
    on_cleanup(move || handle.remove());
}

#[component]
/// Provides [`MediaLibraryContext`] to descendant components and loads the initial route.
pub fn MediaLibraryProvider(
    /// Page configuration of the instance.
    config: MediaLibraryConfig,
    /// Control gating; derived from `config` when omitted.
    #[prop(optional)]
    capabilities: Option<Capabilities>,
    /// Receives the picked file in selection mode.
    #[prop(optional, into)]
    on_select: Option<Callback<FileEntry>>,
    /// Keeps navigation inside the instance, starting at the given route, instead of using the
    /// page hash. Pickers use this.
    #[prop(optional)]
    embedded_route: Option<LibraryRoute>,
    children: Children,
) -> impl IntoView {
    let router: Rc<dyn RouteService> = match embedded_route {
        Some(route) => Rc::new(MemoryRouteService::starting_at(route)),
        None => Rc::new(HashRouteService),
    };
    let registry = Rc::new(UploadRegistry::default());
    let mut host = LibraryHost::new(
        config.api_endpoints.clone(),
        Rc::new(WebMediaApiService::new(&config, registry.clone())),
        Rc::new(WebTimerService),
        router.clone(),
    );
    if let Some(on_select) = on_select {
        host = host.with_on_select(Rc::new(move |file: FileEntry| on_select.call(file)));
    }

    let initial_route = router.current();
    let mut initial = LibraryState::from_config(&config, initial_route.clone());
    if let Some(capabilities) = capabilities {
        initial.capabilities = capabilities;
    }

    let state = create_rw_signal(initial);
    let effects = create_rw_signal(Vec::<LibraryEffect>::new());

    let dispatch = Callback::new(move |action: LibraryAction| {
        let mut library = state.get_untracked();
        let previous = library.clone();

        match reduce_library(&mut library, action) {
            Ok(new_effects) => {
                if library != previous {
                    state.set(library);
                }
                if !new_effects.is_empty() {
                    effects.update(|queue| queue.extend(new_effects));
                }
            }
            Err(err) => logging::warn!("media library reducer error: {err}"),
        }
    });

    let runtime = MediaLibraryContext {
        host: store_value(host),
        uploads: store_value(registry),
        state,
        effects,
        dispatch,
    };

    provide_context(runtime.clone());

    effect_executor::install(runtime);
    if router.notifies_changes() {
        install_hash_listener(runtime);
    }
    runtime.dispatch_action(LibraryAction::Navigate(initial_route));

    children().into_view()
}

/// Returns the nearest [`MediaLibraryContext`].
///
/// # Panics
///
/// Panics if called outside [`MediaLibraryProvider`].
pub fn use_media_library() -> MediaLibraryContext {
    use_context::<MediaLibraryContext>().expect("MediaLibraryContext not provided")
}
