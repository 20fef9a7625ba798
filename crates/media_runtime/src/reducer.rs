//! Reducer actions, side-effect intents, and transition logic for the library controller.

use std::time::Duration;

use media_host::{
    DirectoryId, FileEntry, FileId, FileUsages, FormKind, LibraryEntry, LibraryRoute,
    MediaApiError, MessageKind, MutationForm, RequestSeq, SubmitResponse, UploadTicket,
    UploadTicketId,
};
use thiserror::Error;

use crate::model::{
    LibraryState, Toast, ToastId, UploadItem, UploadStatus, INLINE_ERROR_FORMS, NETWORK_ERROR_TEXT,
    ONLY_IMAGE_TEXT, SEARCH_DEBOUNCE, SERVER_ERROR_TEXT, SUGGESTION_MIN_LEN, TOAST_LIFETIME, UPLOAD_RESET_DELAY,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_library`].
pub enum LibraryAction {
    /// The location now points at `route` (initial mount, `hashchange`, embedded navigation).
    Navigate(LibraryRoute),
    /// Ask the router to show `route` (breadcrumbs, filter buttons).
    OpenRoute(LibraryRoute),
    /// Reload the current route, keeping the open file by id.
    Refresh,
    /// A content read finished.
    ContentLoaded {
        /// Sequence the read was issued with.
        seq: RequestSeq,
        /// Breadcrumbs of the loaded directory.
        directory_path: Vec<media_host::DirectoryEntry>,
        /// Loaded entries.
        content: Vec<LibraryEntry>,
    },
    /// A content read failed.
    ContentLoadFailed {
        /// Sequence the read was issued with.
        seq: RequestSeq,
        /// Failure reported by the transport.
        error: MediaApiError,
    },
    /// The user activated the entry at `index` of the grid.
    OpenEntry {
        /// Position in `content`.
        index: usize,
    },
    /// Open the file sidebar for the entry at `index`, also in selection mode.
    ShowFileDetails {
        /// Position in `content`.
        index: usize,
    },
    /// Close the file sidebar.
    CloseSidebar,
    /// Submit a mutating form.
    Submit(MutationForm),
    /// A submission finished.
    SubmitCompleted {
        /// The submitted form.
        form: MutationForm,
        /// Response or transport failure.
        outcome: Result<SubmitResponse, MediaApiError>,
    },
    /// A file was dropped on a breadcrumb segment (`None` is the root).
    DropFileOnDirectory {
        /// Dragged file.
        file_id: FileId,
        /// Drop target.
        target: Option<DirectoryId>,
    },
    /// Files were picked or dropped for upload.
    UploadsQueued(Vec<UploadTicket>),
    /// Remove finished items from the upload queue.
    ClearFinishedUploads,
    /// The search field changed.
    SearchInputChanged(String),
    /// A debounce timer fired.
    SuggestionTimerElapsed {
        /// Keystroke generation that scheduled the timer.
        generation: RequestSeq,
    },
    /// A suggestion request finished.
    SuggestionsLoaded {
        /// Sequence the request was issued with.
        seq: RequestSeq,
        /// Suggestions or failure.
        result: Result<Vec<String>, MediaApiError>,
    },
    /// Run a search for the given text (field submit or picked suggestion).
    SubmitSearch(String),
    /// Look up where a file is used.
    RequestFileUsages(FileId),
    /// A usage lookup finished.
    FileUsagesLoaded {
        /// File looked up.
        file_id: FileId,
        /// Usages or failure.
        result: Result<FileUsages, MediaApiError>,
    },
    /// Show a notification.
    Notify {
        /// Severity.
        kind: MessageKind,
        /// Text.
        text: String,
    },
    /// Hide a notification.
    DismissToast(ToastId),
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_library`] for the host to execute.
pub enum LibraryEffect {
    /// Read path and content for `route`.
    LoadContent {
        /// Sequence to echo back.
        seq: RequestSeq,
        /// Route to load.
        route: LibraryRoute,
    },
    /// Change the location.
    PushRoute(LibraryRoute),
    /// Post a mutating form.
    SubmitForm(MutationForm),
    /// Hand the picked file to the embedding caller.
    SelectMedia(FileEntry),
    /// Fire [`LibraryAction::SuggestionTimerElapsed`] after `delay`.
    ScheduleSuggestions {
        /// Keystroke generation.
        generation: RequestSeq,
        /// Debounce delay.
        delay: Duration,
    },
    /// Request suggestions for `query`.
    LoadSuggestions {
        /// Sequence to echo back.
        seq: RequestSeq,
        /// Query text.
        query: String,
    },
    /// Look up usages of a file.
    LoadFileUsages(FileId),
    /// Dismiss a notification after `after`.
    ExpireToast {
        /// Notification to dismiss.
        id: ToastId,
        /// Lifetime.
        after: Duration,
    },
    /// Fire [`LibraryAction::ClearFinishedUploads`] after a delay.
    ClearUploadsAfter(Duration),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that reference entries which do not exist.
pub enum ReducerError {
    /// No entry at the given grid position.
    #[error("no entry at index {0}")]
    EntryNotFound(usize),
    /// The entry at the given grid position is a directory.
    #[error("entry at index {0} is not a file")]
    NotAFile(usize),
}

/// Applies a [`LibraryAction`] to the controller state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError`] when an action references a grid position that holds no matching
/// entry. The state is left untouched in that case.
pub fn reduce_library(
    state: &mut LibraryState,
    action: LibraryAction,
) -> Result<Vec<LibraryEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        LibraryAction::Navigate(route) => {
            state.route = route;
            state.open_file_index = None;
            state.sidebar_file = None;
            state.file_usages = None;
            state.form_errors.clear();
            if let LibraryRoute::Search(query) = &state.route {
                state.search.query = query.clone();
            }
            issue_read(state, &mut effects);
        }
        LibraryAction::OpenRoute(route) => effects.push(LibraryEffect::PushRoute(route)),
        LibraryAction::Refresh => refresh(state, &mut effects),
        LibraryAction::ContentLoaded {
            seq,
            directory_path,
            content,
        } => {
            finish_request(state);
            if state.reads.is_current(seq) {
                // A file opened while the read was in flight is followed by id.
                if state.sidebar_file.is_none() {
                    state.sidebar_file = state.open_file().map(|file| file.id);
                }
                state.directory_path = directory_path;
                state.content = content;
                state.reattach_sidebar();
            } else {
                leptos::logging::warn!("discarding stale content read {seq:?}");
            }
        }
        LibraryAction::ContentLoadFailed { seq, error } => {
            finish_request(state);
            if state.reads.is_current(seq) {
                state.sidebar_file = None;
                notify(state, &mut effects, MessageKind::Error, failure_text(&error));
                if !error.is_network() && state.route != LibraryRoute::root() {
                    effects.push(LibraryEffect::PushRoute(LibraryRoute::root()));
                }
            } else {
                leptos::logging::warn!("discarding stale read failure {seq:?}: {error}");
            }
        }
        LibraryAction::OpenEntry { index } => {
            let entry = state
                .content
                .get(index)
                .cloned()
                .ok_or(ReducerError::EntryNotFound(index))?;
            match entry {
                LibraryEntry::Directory(dir) => {
                    effects.push(LibraryEffect::PushRoute(LibraryRoute::Directory(Some(
                        dir.id,
                    ))));
                }
                LibraryEntry::File(file) if state.capabilities.selection_mode => {
                    if state.capabilities.can_select(&file) {
                        effects.push(LibraryEffect::SelectMedia(file));
                    } else {
                        notify(state, &mut effects, MessageKind::Info, ONLY_IMAGE_TEXT);
                    }
                }
                LibraryEntry::File(_) => open_file(state, index),
            }
        }
        LibraryAction::ShowFileDetails { index } => {
            let is_file = state
                .content
                .get(index)
                .ok_or(ReducerError::EntryNotFound(index))?
                .as_file()
                .is_some();
            if !is_file {
                return Err(ReducerError::NotAFile(index));
            }
            open_file(state, index);
        }
        LibraryAction::CloseSidebar => {
            state.open_file_index = None;
            state.sidebar_file = None;
            state.file_usages = None;
        }
        LibraryAction::Submit(form) => submit(state, &mut effects, form),
        LibraryAction::SubmitCompleted { form, outcome } => {
            finish_request(state);
            complete_submission(state, &mut effects, form, outcome);
        }
        LibraryAction::DropFileOnDirectory { file_id, target } => {
            let movable = state
                .content
                .iter()
                .filter_map(LibraryEntry::as_file)
                .find(|file| file.id == file_id)
                .map_or(state.capabilities.can_move_files(), |file| {
                    state.capabilities.can_move(file)
                });
            if movable {
                let form = MutationForm::move_file(&state.endpoints, file_id, target);
                submit(state, &mut effects, form);
            }
        }
        LibraryAction::UploadsQueued(tickets) => {
            let parent = state.route.directory();
            for ticket in tickets {
                let status = if state.media_types.accepts(&ticket.mime_type) {
                    UploadStatus::Queued
                } else {
                    let text = format!(
                        "{}: files of type {} cannot be uploaded.",
                        ticket.name,
                        if ticket.mime_type.is_empty() {
                            "unknown"
                        } else {
                            ticket.mime_type.as_str()
                        }
                    );
                    notify(state, &mut effects, MessageKind::Error, &text);
                    UploadStatus::Rejected
                };
                state.uploads.push(UploadItem {
                    ticket,
                    parent,
                    status,
                });
            }
            advance_uploads(state, &mut effects);
        }
        LibraryAction::ClearFinishedUploads => {
            state.uploads.retain(|item| !item.status.is_finished());
        }
        LibraryAction::SearchInputChanged(query) => {
            let generation = state.search.debounce.issue();
            if query.trim().chars().count() < SUGGESTION_MIN_LEN {
                state.search.suggestions.clear();
            } else {
                effects.push(LibraryEffect::ScheduleSuggestions {
                    generation,
                    delay: SEARCH_DEBOUNCE,
                });
            }
            state.search.query = query;
        }
        LibraryAction::SuggestionTimerElapsed { generation } => {
            if state.search.debounce.is_current(generation) {
                let seq = state.search.requests.issue();
                effects.push(LibraryEffect::LoadSuggestions {
                    seq,
                    query: state.search.query.trim().to_string(),
                });
            }
        }
        LibraryAction::SuggestionsLoaded { seq, result } => {
            if state.search.requests.is_current(seq) {
                match result {
                    Ok(suggestions) => state.search.suggestions = suggestions,
                    Err(error) => {
                        state.search.suggestions.clear();
                        notify(state, &mut effects, MessageKind::Error, failure_text(&error));
                    }
                }
            }
        }
        LibraryAction::SubmitSearch(query) => {
            let query = query.trim().to_string();
            // Invalidate pending debounce timers and in-flight suggestion requests.
            state.search.debounce.issue();
            state.search.requests.issue();
            state.search.suggestions.clear();
            if !query.is_empty() {
                state.search.query = query.clone();
                effects.push(LibraryEffect::PushRoute(LibraryRoute::Search(query)));
            }
        }
        LibraryAction::RequestFileUsages(file_id) => {
            effects.push(LibraryEffect::LoadFileUsages(file_id));
        }
        LibraryAction::FileUsagesLoaded { file_id, result } => match result {
            Ok(usages) => {
                if state.open_file().map(|file| file.id) == Some(file_id) {
                    state.file_usages = Some((file_id, usages));
                }
            }
            Err(error) => notify(state, &mut effects, MessageKind::Error, failure_text(&error)),
        },
        LibraryAction::Notify { kind, text } => notify(state, &mut effects, kind, &text),
        LibraryAction::DismissToast(id) => state.toasts.retain(|toast| toast.id != id),
    }
    Ok(effects)
}

fn issue_read(state: &mut LibraryState, effects: &mut Vec<LibraryEffect>) {
    let seq = state.reads.issue();
    state.in_flight += 1;
    effects.push(LibraryEffect::LoadContent {
        seq,
        route: state.route.clone(),
    });
}

fn refresh(state: &mut LibraryState, effects: &mut Vec<LibraryEffect>) {
    state.refresh_generation += 1;
    if state.sidebar_file.is_none() {
        state.sidebar_file = state.open_file().map(|file| file.id);
    }
    issue_read(state, effects);
}

fn finish_request(state: &mut LibraryState) {
    state.in_flight = state.in_flight.saturating_sub(1);
}

fn open_file(state: &mut LibraryState, index: usize) {
    if state.open_file_index != Some(index) {
        state.file_usages = None;
    }
    state.open_file_index = Some(index);
    state.sidebar_file = None;
}

fn submit(state: &mut LibraryState, effects: &mut Vec<LibraryEffect>, form: MutationForm) {
    state.form_errors.remove(&form.kind);
    state.in_flight += 1;
    effects.push(LibraryEffect::SubmitForm(form));
}

fn failure_text(error: &MediaApiError) -> &'static str {
    if error.is_network() {
        NETWORK_ERROR_TEXT
    } else {
        SERVER_ERROR_TEXT
    }
}

fn notify(state: &mut LibraryState, effects: &mut Vec<LibraryEffect>, kind: MessageKind, text: &str) {
    let id = state.next_toast_id();
    state.toasts.push(Toast {
        id,
        kind,
        text: text.to_string(),
    });
    effects.push(LibraryEffect::ExpireToast {
        id,
        after: TOAST_LIFETIME,
    });
}

fn complete_submission(
    state: &mut LibraryState,
    effects: &mut Vec<LibraryEffect>,
    form: MutationForm,
    outcome: Result<SubmitResponse, MediaApiError>,
) {
    let upload = (form.kind == FormKind::UploadFile)
        .then(|| form.file_value("file"))
        .flatten();

    let response = match outcome {
        Ok(response) => response,
        Err(error) => {
            let text = failure_text(&error);
            notify(state, effects, MessageKind::Error, text);
            if let Some(ticket) = upload {
                finish_upload(state, effects, ticket, UploadStatus::Failed(text.to_string()));
            }
            return;
        }
    };

    let messages = response.messages().unwrap_or_default();
    for message in &messages {
        notify(state, effects, message.kind, &message.text);
    }

    if response.is_success() {
        if let Some(file) = response.file() {
            state.sidebar_file = Some(file.id);
        }
        match upload {
            Some(ticket) => finish_upload(state, effects, ticket, UploadStatus::Done),
            None => follow_up(state, effects, &form, &response),
        }
        return;
    }

    let errors = response.validation_errors();
    let first_error = errors
        .values()
        .flatten()
        .next()
        .or_else(|| messages.first().map(|message| &message.text))
        .cloned()
        .unwrap_or_else(|| SERVER_ERROR_TEXT.to_string());
    if errors.is_empty() {
        if messages.is_empty() {
            notify(state, effects, MessageKind::Error, SERVER_ERROR_TEXT);
        }
    } else if INLINE_ERROR_FORMS.contains(&form.kind) {
        state.form_errors.insert(form.kind, errors);
    } else {
        // Drag-move and uploads have no form to show field errors in.
        for text in errors.into_values().flatten() {
            notify(state, effects, MessageKind::Error, &text);
        }
    }
    if let Some(ticket) = upload {
        finish_upload(state, effects, ticket, UploadStatus::Failed(first_error));
    }
}

fn follow_up(
    state: &mut LibraryState,
    effects: &mut Vec<LibraryEffect>,
    form: &MutationForm,
    response: &SubmitResponse,
) {
    match form.kind {
        FormKind::CreateDirectory => {
            if let Some(directory) = response.directory() {
                effects.push(LibraryEffect::PushRoute(LibraryRoute::Directory(Some(
                    directory.id,
                ))));
                return;
            }
        }
        FormKind::DeleteDirectory => {
            let deleted = form.text_value("id").and_then(|id| id.parse().ok());
            if let Some(current) = state.current_directory() {
                if Some(current.id.0) == deleted {
                    let parent = current.parent_id;
                    effects.push(LibraryEffect::PushRoute(LibraryRoute::Directory(parent)));
                    return;
                }
            }
        }
        _ => {}
    }
    refresh(state, effects);
}

fn finish_upload(
    state: &mut LibraryState,
    effects: &mut Vec<LibraryEffect>,
    ticket: UploadTicketId,
    status: UploadStatus,
) {
    if let Some(item) = state
        .uploads
        .iter_mut()
        .find(|item| item.ticket.id == ticket)
    {
        item.status = status;
    }
    advance_uploads(state, effects);
}

fn advance_uploads(state: &mut LibraryState, effects: &mut Vec<LibraryEffect>) {
    if state
        .uploads
        .iter()
        .any(|item| item.status == UploadStatus::Uploading)
    {
        return;
    }

    let next = state
        .uploads
        .iter_mut()
        .find(|item| item.status == UploadStatus::Queued);
    if let Some(item) = next {
        item.status = UploadStatus::Uploading;
        let form = MutationForm::upload_file(&state.endpoints, item.parent, item.ticket.id);
        submit(state, effects, form);
        return;
    }

    if state.uploads.is_empty() {
        return;
    }
    if state
        .uploads
        .iter()
        .any(|item| item.status == UploadStatus::Done)
    {
        refresh(state, effects);
    }
    effects.push(LibraryEffect::ClearUploadsAfter(UPLOAD_RESET_DELAY));
}

#[cfg(test)]
mod tests {
    use media_host::{ApiEndpoints, Capabilities, DirectoryEntry, MediaTypes, HTTP_OK};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn endpoints() -> ApiEndpoints {
        serde_json::from_value(json!({
            "getDirectoryContent": "/c", "getDirectoryPath": "/p", "getSearchResult": "/s",
            "getSearchSuggestions": "/sg", "filterUnusedMediaFiles": "/u",
            "createDirectory": "/cd", "editDirectory": "/ed", "deleteDirectory": "/dd",
            "uploadFile": "/uf", "editFile": "/ef", "replaceFile": "/rf", "deleteFile": "/df",
            "moveFile": "/mf", "getFileUsages": "/fu"
        }))
        .expect("endpoints")
    }

    fn state(route: LibraryRoute) -> LibraryState {
        LibraryState::new(
            endpoints(),
            MediaTypes::default(),
            Capabilities::default(),
            route,
        )
    }

    fn file(id: u64, mime: &str) -> LibraryEntry {
        serde_json::from_value(json!({
            "type": mime, "id": id, "name": format!("f{id}"), "isGlobal": false
        }))
        .expect("file")
    }

    fn directory(id: u64, parent: Option<u64>) -> DirectoryEntry {
        serde_json::from_value(json!({
            "id": id, "name": format!("d{id}"), "parentId": parent, "numberOfEntries": 0
        }))
        .expect("directory")
    }

    fn last_read(effects: &[LibraryEffect]) -> RequestSeq {
        effects
            .iter()
            .find_map(|effect| match effect {
                LibraryEffect::LoadContent { seq, .. } => Some(*seq),
                _ => None,
            })
            .expect("read issued")
    }

    fn ok(body: serde_json::Value) -> Result<SubmitResponse, MediaApiError> {
        Ok(SubmitResponse {
            status: HTTP_OK,
            body,
        })
    }

    #[test]
    fn navigate_clears_sidebar_and_issues_tagged_read() {
        let mut state = state(LibraryRoute::root());
        state.content = vec![file(1, "image/png")];
        state.open_file_index = Some(0);
        state.sidebar_file = Some(FileId(1));

        let route = LibraryRoute::Directory(Some(DirectoryId(4)));
        let effects =
            reduce_library(&mut state, LibraryAction::Navigate(route.clone())).expect("navigate");

        assert_eq!(state.open_file_index, None);
        assert_eq!(state.sidebar_file, None);
        assert!(state.loading());
        assert_eq!(
            effects,
            vec![LibraryEffect::LoadContent {
                seq: RequestSeq(1),
                route
            }]
        );
    }

    #[test]
    fn stale_content_is_discarded_after_navigation() {
        let mut state = state(LibraryRoute::root());
        let first = last_read(
            &reduce_library(&mut state, LibraryAction::Navigate(LibraryRoute::root()))
                .expect("first"),
        );
        let second = last_read(
            &reduce_library(
                &mut state,
                LibraryAction::Navigate(LibraryRoute::Directory(Some(DirectoryId(2)))),
            )
            .expect("second"),
        );

        reduce_library(
            &mut state,
            LibraryAction::ContentLoaded {
                seq: second,
                directory_path: vec![directory(2, None)],
                content: vec![file(8, "image/png")],
            },
        )
        .expect("fresh");
        reduce_library(
            &mut state,
            LibraryAction::ContentLoaded {
                seq: first,
                directory_path: Vec::new(),
                content: vec![file(1, "image/png"), file(2, "image/png")],
            },
        )
        .expect("stale");

        assert_eq!(state.content, vec![file(8, "image/png")]);
        assert_eq!(state.directory_path, vec![directory(2, None)]);
        assert!(!state.loading());
    }

    #[test]
    fn open_entry_routes_directories_and_opens_files() {
        let mut state = state(LibraryRoute::root());
        state.content = vec![
            LibraryEntry::Directory(directory(3, None)),
            file(7, "application/pdf"),
        ];

        let effects =
            reduce_library(&mut state, LibraryAction::OpenEntry { index: 0 }).expect("dir");
        assert_eq!(
            effects,
            vec![LibraryEffect::PushRoute(LibraryRoute::Directory(Some(
                DirectoryId(3)
            )))]
        );

        let effects =
            reduce_library(&mut state, LibraryAction::OpenEntry { index: 1 }).expect("file");
        assert!(effects.is_empty());
        assert_eq!(state.open_file_index, Some(1));

        let err = reduce_library(&mut state, LibraryAction::OpenEntry { index: 9 })
            .expect_err("missing");
        assert_eq!(err, ReducerError::EntryNotFound(9));

        let route = LibraryRoute::Filter(media_host::FilterName::Unused);
        let effects =
            reduce_library(&mut state, LibraryAction::OpenRoute(route.clone())).expect("open");
        assert_eq!(effects, vec![LibraryEffect::PushRoute(route)]);
        assert_eq!(state.open_file_index, Some(1));
    }

    #[test]
    fn selection_mode_picks_images_and_explains_rejections() {
        let mut state = state(LibraryRoute::root());
        state.capabilities = Capabilities::default().for_selection(true);
        state.content = vec![file(1, "image/jpeg"), file(2, "application/pdf")];

        let effects =
            reduce_library(&mut state, LibraryAction::OpenEntry { index: 0 }).expect("image");
        assert!(matches!(
            effects.as_slice(),
            [LibraryEffect::SelectMedia(picked)] if picked.id == FileId(1)
        ));
        assert_eq!(state.open_file_index, None);

        reduce_library(&mut state, LibraryAction::OpenEntry { index: 1 }).expect("pdf");
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].text, ONLY_IMAGE_TEXT);
        assert_eq!(state.toasts[0].kind, MessageKind::Info);

        reduce_library(&mut state, LibraryAction::ShowFileDetails { index: 1 }).expect("details");
        assert_eq!(state.open_file_index, Some(1));
    }

    #[test]
    fn keystrokes_collapse_to_the_last_generation() {
        let mut state = state(LibraryRoute::root());
        let mut generations = Vec::new();
        for text in ["l", "lo", "log"] {
            let effects = reduce_library(
                &mut state,
                LibraryAction::SearchInputChanged(text.to_string()),
            )
            .expect("input");
            for effect in effects {
                if let LibraryEffect::ScheduleSuggestions { generation, delay } = effect {
                    assert_eq!(delay, SEARCH_DEBOUNCE);
                    generations.push(generation);
                }
            }
        }
        assert_eq!(generations.len(), 3);

        let mut requests = Vec::new();
        for generation in generations {
            requests.extend(
                reduce_library(&mut state, LibraryAction::SuggestionTimerElapsed { generation })
                    .expect("timer"),
            );
        }
        assert_eq!(
            requests,
            vec![LibraryEffect::LoadSuggestions {
                seq: RequestSeq(1),
                query: "log".to_string()
            }]
        );
    }

    #[test]
    fn clearing_the_query_cancels_pending_suggestions() {
        let mut state = state(LibraryRoute::root());
        state.search.suggestions = vec!["logo".to_string()];
        let effects = reduce_library(&mut state, LibraryAction::SearchInputChanged("l".into()))
            .expect("input");
        let generation = match effects.as_slice() {
            [LibraryEffect::ScheduleSuggestions { generation, .. }] => *generation,
            other => panic!("unexpected effects: {other:?}"),
        };
        let effects = reduce_library(&mut state, LibraryAction::SearchInputChanged(" ".into()))
            .expect("clear");
        assert!(effects.is_empty());
        assert!(state.search.suggestions.is_empty());
        assert!(reduce_library(&mut state, LibraryAction::SuggestionTimerElapsed { generation })
            .expect("timer")
            .is_empty());
    }

    #[test]
    fn validation_errors_stay_inline_without_refresh() {
        let mut state = state(LibraryRoute::root());
        let form = MutationForm::create_directory(&state.endpoints, None, "Events");
        reduce_library(&mut state, LibraryAction::Submit(form.clone())).expect("submit");

        let effects = reduce_library(
            &mut state,
            LibraryAction::SubmitCompleted {
                form,
                outcome: ok(json!({"errors": {"name": ["Directory already exists."]}})),
            },
        )
        .expect("completed");

        assert!(effects.is_empty());
        assert!(state.toasts.is_empty());
        assert_eq!(state.refresh_generation, 0);
        assert_eq!(
            state.errors_for(FormKind::CreateDirectory).and_then(|e| e.get("name")),
            Some(&vec!["Directory already exists.".to_string()])
        );
        assert!(!state.loading());
    }

    #[test]
    fn server_failure_without_messages_shows_generic_error() {
        let mut state = state(LibraryRoute::root());
        let form = MutationForm::delete_file(&state.endpoints, FileId(3));
        let effects = reduce_library(
            &mut state,
            LibraryAction::SubmitCompleted {
                form,
                outcome: Ok(SubmitResponse {
                    status: 500,
                    body: serde_json::Value::Null,
                }),
            },
        )
        .expect("completed");

        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].text, SERVER_ERROR_TEXT);
        assert_eq!(state.refresh_generation, 0);
        assert!(matches!(effects.as_slice(), [LibraryEffect::ExpireToast { .. }]));
    }

    #[test]
    fn move_errors_without_a_form_become_error_toasts() {
        let mut state = state(LibraryRoute::root());
        let form = MutationForm::move_file(&state.endpoints, FileId(3), Some(DirectoryId(4)));
        let effects = reduce_library(
            &mut state,
            LibraryAction::SubmitCompleted {
                form,
                outcome: ok(json!({"errors": {"parent_directory": ["Name already taken."]}})),
            },
        )
        .expect("completed");

        assert!(state.form_errors.is_empty());
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].kind, MessageKind::Error);
        assert_eq!(state.toasts[0].text, "Name already taken.");
        assert!(matches!(effects.as_slice(), [LibraryEffect::ExpireToast { .. }]));
    }

    #[test]
    fn replace_and_delete_errors_are_kept_for_the_sidebar() {
        let mut state = state(LibraryRoute::root());
        for form in [
            MutationForm::replace_file(&state.endpoints, FileId(3), UploadTicketId(1)),
            MutationForm::delete_file(&state.endpoints, FileId(3)),
            MutationForm::delete_directory(&state.endpoints, DirectoryId(4)),
        ] {
            let kind = form.kind;
            reduce_library(
                &mut state,
                LibraryAction::SubmitCompleted {
                    form,
                    outcome: ok(json!({"errors": {"id": ["Not allowed."]}})),
                },
            )
            .expect("completed");
            assert_eq!(
                state.errors_for(kind).and_then(|e| e.get("id")),
                Some(&vec!["Not allowed.".to_string()])
            );
        }
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn suggestions_for_a_superseded_request_are_dropped() {
        let mut state = state(LibraryRoute::root());
        let mut issued = Vec::new();
        for text in ["lo", "log"] {
            let effects = reduce_library(&mut state, LibraryAction::SearchInputChanged(text.into()))
                .expect("input");
            let generation = match effects.as_slice() {
                [LibraryEffect::ScheduleSuggestions { generation, .. }] => *generation,
                other => panic!("unexpected effects: {other:?}"),
            };
            let effects =
                reduce_library(&mut state, LibraryAction::SuggestionTimerElapsed { generation })
                    .expect("timer");
            issued.push(match effects.as_slice() {
                [LibraryEffect::LoadSuggestions { seq, .. }] => *seq,
                other => panic!("unexpected effects: {other:?}"),
            });
        }

        reduce_library(
            &mut state,
            LibraryAction::SuggestionsLoaded {
                seq: issued[1],
                result: Ok(vec!["logo.png".to_string()]),
            },
        )
        .expect("newer");
        reduce_library(
            &mut state,
            LibraryAction::SuggestionsLoaded {
                seq: issued[0],
                result: Ok(vec!["lorem.jpg".to_string()]),
            },
        )
        .expect("older");

        assert_eq!(state.search.suggestions, vec!["logo.png".to_string()]);
    }

    #[test]
    fn success_messages_become_toasts_and_refresh_keeps_returned_file() {
        let mut state = state(LibraryRoute::root());
        let form = MutationForm::edit_file(&state.endpoints, FileId(5), "new.png", "", None);
        let effects = reduce_library(
            &mut state,
            LibraryAction::SubmitCompleted {
                form,
                outcome: ok(json!({
                    "messages": [{"type": "success", "text": "Saved"}],
                    "file": {"type": "image/png", "id": 5, "name": "new.png"}
                })),
            },
        )
        .expect("completed");

        assert_eq!(
            state.toasts.iter().map(|t| t.text.as_str()).collect::<Vec<_>>(),
            vec!["Saved"]
        );
        assert_eq!(state.sidebar_file, Some(FileId(5)));
        assert_eq!(state.refresh_generation, 1);
        assert!(effects
            .iter()
            .any(|effect| matches!(effect, LibraryEffect::LoadContent { .. })));
    }

    #[test]
    fn deleting_the_viewed_directory_returns_to_its_parent() {
        let mut state = state(LibraryRoute::Directory(Some(DirectoryId(6))));
        state.directory_path = vec![directory(2, None), directory(6, Some(2))];
        let form = MutationForm::delete_directory(&state.endpoints, DirectoryId(6));

        let effects = reduce_library(
            &mut state,
            LibraryAction::SubmitCompleted {
                form,
                outcome: ok(json!({})),
            },
        )
        .expect("completed");

        assert_eq!(
            effects,
            vec![LibraryEffect::PushRoute(LibraryRoute::Directory(Some(
                DirectoryId(2)
            )))]
        );
    }

    #[test]
    fn uploads_run_one_at_a_time_and_reject_disallowed_types() {
        let mut state = state(LibraryRoute::root());
        state.media_types = MediaTypes {
            allowed_mime_types: vec!["image/*".to_string()],
        };
        let ticket = |id: u64, mime: &str| UploadTicket {
            id: UploadTicketId(id),
            name: format!("u{id}"),
            mime_type: mime.to_string(),
            size_bytes: 10,
        };

        let effects = reduce_library(
            &mut state,
            LibraryAction::UploadsQueued(vec![
                ticket(1, "image/png"),
                ticket(2, "application/x-msdownload"),
                ticket(3, "image/gif"),
            ]),
        )
        .expect("queued");

        let submitted: Vec<_> = effects
            .iter()
            .filter_map(|effect| match effect {
                LibraryEffect::SubmitForm(form) => form.file_value("file"),
                _ => None,
            })
            .collect();
        assert_eq!(submitted, vec![UploadTicketId(1)]);
        assert_eq!(state.uploads[1].status, UploadStatus::Rejected);
        assert_eq!(state.toasts.len(), 1);

        let first = MutationForm::upload_file(&state.endpoints, None, UploadTicketId(1));
        let effects = reduce_library(
            &mut state,
            LibraryAction::SubmitCompleted {
                form: first,
                outcome: ok(json!({"file": {"type": "image/png", "id": 40, "name": "u1"}})),
            },
        )
        .expect("first done");
        assert!(matches!(
            effects.as_slice(),
            [LibraryEffect::SubmitForm(form)] if form.file_value("file") == Some(UploadTicketId(3))
        ));
        assert_eq!(state.refresh_generation, 0);

        let last = MutationForm::upload_file(&state.endpoints, None, UploadTicketId(3));
        let effects = reduce_library(
            &mut state,
            LibraryAction::SubmitCompleted {
                form: last,
                outcome: Err(MediaApiError::Network("offline".to_string())),
            },
        )
        .expect("last failed");
        assert_eq!(state.refresh_generation, 1);
        assert!(effects.contains(&LibraryEffect::ClearUploadsAfter(UPLOAD_RESET_DELAY)));

        reduce_library(&mut state, LibraryAction::ClearFinishedUploads).expect("clear");
        assert!(state.uploads.is_empty());
    }

    #[test]
    fn read_failures_redirect_to_root_unless_offline() {
        let mut state = state(LibraryRoute::Directory(Some(DirectoryId(9))));
        let seq = last_read(&reduce_library(&mut state, LibraryAction::Refresh).expect("refresh"));
        let effects = reduce_library(
            &mut state,
            LibraryAction::ContentLoadFailed {
                seq,
                error: MediaApiError::Network("offline".to_string()),
            },
        )
        .expect("failed");
        assert!(!effects.contains(&LibraryEffect::PushRoute(LibraryRoute::root())));
        assert_eq!(state.toasts[0].text, NETWORK_ERROR_TEXT);

        let seq = last_read(&reduce_library(&mut state, LibraryAction::Refresh).expect("refresh"));
        let effects = reduce_library(
            &mut state,
            LibraryAction::ContentLoadFailed {
                seq,
                error: MediaApiError::Server { status: 404 },
            },
        )
        .expect("failed");
        assert!(effects.contains(&LibraryEffect::PushRoute(LibraryRoute::root())));
        assert_eq!(state.toasts[1].text, SERVER_ERROR_TEXT);
    }

    #[test]
    fn toasts_expire_by_id() {
        let mut state = state(LibraryRoute::root());
        let effects = reduce_library(
            &mut state,
            LibraryAction::Notify {
                kind: MessageKind::Warning,
                text: "Careful".to_string(),
            },
        )
        .expect("notify");
        let id = state.toasts[0].id;
        assert_eq!(
            effects,
            vec![LibraryEffect::ExpireToast {
                id,
                after: TOAST_LIFETIME
            }]
        );
        reduce_library(&mut state, LibraryAction::DismissToast(id)).expect("dismiss");
        assert!(state.toasts.is_empty());
    }
}
