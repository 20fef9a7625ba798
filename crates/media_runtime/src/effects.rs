//! Host side of the controller: executes [`LibraryEffect`] values against injected services.

use std::rc::Rc;

use futures::future::try_join;
use leptos::logging;
use media_host::{
    ApiEndpoints, FileEntry, LibraryRoute, MediaApi, MediaApiService, RouteService,
    TimerService,
};

use crate::reducer::{LibraryAction, LibraryEffect};

/// Callback receiving the file picked in selection mode.
pub type SelectMediaHandler = Rc<dyn Fn(FileEntry)>;

#[derive(Clone)]
/// Service bundle one controller instance executes its effects with.
pub struct LibraryHost {
    /// Endpoint table.
    pub endpoints: ApiEndpoints,
    /// HTTP transport.
    pub api: Rc<dyn MediaApiService>,
    /// Delay source for debounce and expiry timers.
    pub timer: Rc<dyn TimerService>,
    /// Location owner.
    pub router: Rc<dyn RouteService>,
    /// Selection-mode callback supplied by the embedding caller.
    pub on_select: Option<SelectMediaHandler>,
}

impl LibraryHost {
    /// Bundles the given services.
    pub fn new(
        endpoints: ApiEndpoints,
        api: Rc<dyn MediaApiService>,
        timer: Rc<dyn TimerService>,
        router: Rc<dyn RouteService>,
    ) -> Self {
        Self {
            endpoints,
            api,
            timer,
            router,
            on_select: None,
        }
    }

    /// Installs the selection-mode callback.
    pub fn with_on_select(mut self, on_select: SelectMediaHandler) -> Self {
        self.on_select = Some(on_select);
        self
    }
}

async fn load_content(host: &LibraryHost, route: &LibraryRoute) -> LoadResult {
    let api = MediaApi::new(host.api.as_ref(), &host.endpoints);
    match route {
        LibraryRoute::Directory(directory) => {
            try_join(api.directory_path(*directory), api.directory_content(*directory)).await
        }
        LibraryRoute::Search(query) => api.search(query).await.map(|content| (Vec::new(), content)),
        LibraryRoute::Filter(_) => api.unused_files().await.map(|content| (Vec::new(), content)),
    }
}

type LoadResult = Result<
    (
        Vec<media_host::DirectoryEntry>,
        Vec<media_host::LibraryEntry>,
    ),
    media_host::MediaApiError,
>;

/// Executes one effect and returns the actions to dispatch with its outcome.
///
/// Failures are returned as actions, never as errors; the reducer turns them into notifications.
pub async fn execute_effect(host: &LibraryHost, effect: LibraryEffect) -> Vec<LibraryAction> {
    match effect {
        LibraryEffect::LoadContent { seq, route } => match load_content(host, &route).await {
            Ok((directory_path, content)) => vec![LibraryAction::ContentLoaded {
                seq,
                directory_path,
                content,
            }],
            Err(error) => {
                logging::warn!("media library read of {route} failed: {error}");
                vec![LibraryAction::ContentLoadFailed { seq, error }]
            }
        },
        LibraryEffect::PushRoute(route) => {
            logging::log!("media library navigating to {route}");
            // Re-pushing the current location raises no change event.
            let unchanged = host.router.current() == route;
            host.router.push(&route);
            if host.router.notifies_changes() && !unchanged {
                Vec::new()
            } else {
                vec![LibraryAction::Navigate(route)]
            }
        }
        LibraryEffect::SubmitForm(form) => {
            logging::log!("media library submitting {:?} to {}", form.kind, form.action);
            let outcome = host.api.submit(&form).await;
            if let Err(error) = &outcome {
                logging::warn!("media library submission to {} failed: {error}", form.action);
            }
            vec![LibraryAction::SubmitCompleted { form, outcome }]
        }
        LibraryEffect::SelectMedia(file) => {
            match &host.on_select {
                Some(on_select) => on_select(file),
                None => logging::warn!("media library selection without a select handler"),
            }
            Vec::new()
        }
        LibraryEffect::ScheduleSuggestions { generation, delay } => {
            host.timer.sleep(delay).await;
            vec![LibraryAction::SuggestionTimerElapsed { generation }]
        }
        LibraryEffect::LoadSuggestions { seq, query } => {
            let api = MediaApi::new(host.api.as_ref(), &host.endpoints);
            let result = api.search_suggestions(&query).await;
            if let Err(error) = &result {
                logging::warn!("media library suggestions failed: {error}");
            }
            vec![LibraryAction::SuggestionsLoaded { seq, result }]
        }
        LibraryEffect::LoadFileUsages(file_id) => {
            let api = MediaApi::new(host.api.as_ref(), &host.endpoints);
            let result = api.file_usages(file_id).await;
            if let Err(error) = &result {
                logging::warn!("media library usage lookup for file {file_id} failed: {error}");
            }
            vec![LibraryAction::FileUsagesLoaded { file_id, result }]
        }
        LibraryEffect::ExpireToast { id, after } => {
            host.timer.sleep(after).await;
            vec![LibraryAction::DismissToast(id)]
        }
        LibraryEffect::ClearUploadsAfter(delay) => {
            host.timer.sleep(delay).await;
            vec![LibraryAction::ClearFinishedUploads]
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, time::Duration};

    use futures::executor::block_on;
    use media_host::{
        FileId, ImmediateTimer, MediaApiError, MemoryMediaApi, MemoryRouteService, RequestSeq,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::model::ToastId;

    struct Fixture {
        api: Rc<MemoryMediaApi>,
        timer: Rc<ImmediateTimer>,
        router: Rc<MemoryRouteService>,
        host: LibraryHost,
    }

    fn fixture() -> Fixture {
        let endpoints: ApiEndpoints = serde_json::from_value(json!({
            "getDirectoryContent": "/c", "getDirectoryPath": "/p", "getSearchResult": "/s",
            "getSearchSuggestions": "/sg", "filterUnusedMediaFiles": "/u",
            "createDirectory": "/cd", "editDirectory": "/ed", "deleteDirectory": "/dd",
            "uploadFile": "/uf", "editFile": "/ef", "replaceFile": "/rf", "deleteFile": "/df",
            "moveFile": "/mf", "getFileUsages": "/fu"
        }))
        .expect("endpoints");
        let api = Rc::new(MemoryMediaApi::default());
        let timer = Rc::new(ImmediateTimer::default());
        let router = Rc::new(MemoryRouteService::default());
        let host = LibraryHost::new(endpoints, api.clone(), timer.clone(), router.clone());
        Fixture {
            api,
            timer,
            router,
            host,
        }
    }

    #[test]
    fn root_load_skips_path_request() {
        let fx = fixture();
        fx.api.respond_get("/c", &[], Ok(json!([])));

        let actions = block_on(execute_effect(
            &fx.host,
            LibraryEffect::LoadContent {
                seq: RequestSeq(3),
                route: LibraryRoute::root(),
            },
        ));

        assert_eq!(
            actions,
            vec![LibraryAction::ContentLoaded {
                seq: RequestSeq(3),
                directory_path: Vec::new(),
                content: Vec::new(),
            }]
        );
        assert_eq!(fx.api.requests().len(), 1);
    }

    #[test]
    fn failed_read_is_reported_with_its_sequence() {
        let fx = fixture();
        let actions = block_on(execute_effect(
            &fx.host,
            LibraryEffect::LoadContent {
                seq: RequestSeq(1),
                route: LibraryRoute::Filter(media_host::FilterName::Unused),
            },
        ));
        assert_eq!(
            actions,
            vec![LibraryAction::ContentLoadFailed {
                seq: RequestSeq(1),
                error: MediaApiError::Server { status: 404 },
            }]
        );
    }

    #[test]
    fn embedded_router_applies_pushed_route_immediately() {
        let fx = fixture();
        let route = LibraryRoute::Search("logo".to_string());
        let actions = block_on(execute_effect(&fx.host, LibraryEffect::PushRoute(route.clone())));
        assert_eq!(actions, vec![LibraryAction::Navigate(route.clone())]);
        assert_eq!(fx.router.current(), route);
    }

    /// Router that reports location changes itself, like the hash router.
    #[derive(Default)]
    struct NotifyingRouter(MemoryRouteService);

    impl RouteService for NotifyingRouter {
        fn current(&self) -> LibraryRoute {
            self.0.current()
        }

        fn push(&self, route: &LibraryRoute) {
            self.0.push(route);
        }

        fn notifies_changes(&self) -> bool {
            true
        }
    }

    #[test]
    fn notifying_router_reports_new_routes_itself() {
        let fx = fixture();
        let router = Rc::new(NotifyingRouter::default());
        let host = LibraryHost::new(
            fx.host.endpoints.clone(),
            fx.api.clone(),
            fx.timer.clone(),
            router.clone(),
        );
        let route = LibraryRoute::Search("logo".to_string());

        let actions = block_on(execute_effect(&host, LibraryEffect::PushRoute(route.clone())));
        assert!(actions.is_empty());
        assert_eq!(router.current(), route);
    }

    #[test]
    fn pushing_the_current_route_reloads_it() {
        let fx = fixture();
        let router = Rc::new(NotifyingRouter::default());
        let host = LibraryHost::new(
            fx.host.endpoints.clone(),
            fx.api.clone(),
            fx.timer.clone(),
            router.clone(),
        );
        let route = LibraryRoute::Search("logo".to_string());
        router.push(&route);

        let actions = block_on(execute_effect(&host, LibraryEffect::PushRoute(route.clone())));
        assert_eq!(actions, vec![LibraryAction::Navigate(route)]);
    }

    #[test]
    fn timers_wait_before_reporting() {
        let fx = fixture();
        let actions = block_on(execute_effect(
            &fx.host,
            LibraryEffect::ExpireToast {
                id: ToastId(2),
                after: Duration::from_secs(10),
            },
        ));
        assert_eq!(actions, vec![LibraryAction::DismissToast(ToastId(2))]);
        assert_eq!(fx.timer.delays(), vec![Duration::from_secs(10)]);
    }

    #[test]
    fn selection_is_forwarded_to_the_caller() {
        let fx = fixture();
        let picked = Rc::new(RefCell::new(Vec::new()));
        let sink = picked.clone();
        let host = fx
            .host
            .clone()
            .with_on_select(Rc::new(move |file: FileEntry| sink.borrow_mut().push(file.id)));
        let file: FileEntry =
            serde_json::from_value(json!({"type": "image/png", "id": 12, "name": "a.png"}))
                .expect("file");

        let actions = block_on(execute_effect(&host, LibraryEffect::SelectMedia(file)));

        assert!(actions.is_empty());
        assert_eq!(*picked.borrow(), vec![FileId(12)]);
    }
}
