//! Controller state of one media library instance.

use std::{collections::BTreeMap, time::Duration};

use media_host::{
    position_of_file, ApiEndpoints, Capabilities, DirectoryEntry, FileEntry, FileId, FileUsages,
    FormKind, LibraryEntry, LibraryRoute, MediaLibraryConfig, MediaTypes, MessageKind,
    RequestSequence, UploadTicket,
};

/// Quiet period after the last keystroke before suggestions are requested.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);
/// How long a notification stays visible.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(10);
/// Delay before finished uploads are removed from the queue widget.
pub const UPLOAD_RESET_DELAY: Duration = Duration::from_secs(2);
/// Shortest query that requests suggestions.
pub const SUGGESTION_MIN_LEN: usize = 1;

/// Notification text for HTTP/application failures.
pub const SERVER_ERROR_TEXT: &str = "An error occurred on the server. Please try again later.";
/// Notification text for transport failures.
pub const NETWORK_ERROR_TEXT: &str =
    "The server could not be reached. Please check your connection and try again.";
/// Notification text for non-image picks under `only_image`.
pub const ONLY_IMAGE_TEXT: &str = "Only images can be selected here.";

/// Forms whose validation errors are shown next to their fields; other forms report them as
/// notifications.
pub const INLINE_ERROR_FORMS: [FormKind; 6] = [
    FormKind::CreateDirectory,
    FormKind::EditDirectory,
    FormKind::DeleteDirectory,
    FormKind::EditFile,
    FormKind::ReplaceFile,
    FormKind::DeleteFile,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Id of a notification, unique per controller.
pub struct ToastId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
/// A visible notification.
pub struct Toast {
    /// Notification id.
    pub id: ToastId,
    /// Severity.
    pub kind: MessageKind,
    /// Text shown to the user.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Lifecycle of one queued upload.
pub enum UploadStatus {
    /// Waiting for the running upload to finish.
    Queued,
    /// Submitted, response pending.
    Uploading,
    /// Accepted by the server.
    Done,
    /// Refused by the server or lost in transit.
    Failed(String),
    /// Refused locally by the MIME allowlist.
    Rejected,
}

impl UploadStatus {
    /// Returns `true` once the item will not change any more.
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Done | Self::Failed(_) | Self::Rejected)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One entry of the upload queue.
pub struct UploadItem {
    /// Host-held file metadata.
    pub ticket: UploadTicket,
    /// Target directory captured when the file was queued.
    pub parent: Option<media_host::DirectoryId>,
    /// Current status.
    pub status: UploadStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Search field and suggestion dropdown.
pub struct SearchState {
    /// Text currently in the field.
    pub query: String,
    /// Generation of the latest keystroke; pending debounce timers compare against it.
    pub debounce: RequestSequence,
    /// Sequence of the latest suggestion request.
    pub requests: RequestSequence,
    /// Suggestions for the latest request.
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Panel currently rendered beside the grid.
pub enum SidebarPanel<'a> {
    /// File properties of the open file.
    File(&'a FileEntry),
    /// Properties of the directory being viewed.
    Directory(&'a DirectoryEntry),
}

#[derive(Debug, Clone, PartialEq)]
/// State owned by one library controller instance.
pub struct LibraryState {
    /// Endpoint table used to build mutation forms.
    pub endpoints: ApiEndpoints,
    /// Upload allowlist.
    pub media_types: MediaTypes,
    /// Control gating of this instance.
    pub capabilities: Capabilities,
    /// Route being displayed.
    pub route: LibraryRoute,
    /// Requests (reads and writes) in flight.
    pub in_flight: u32,
    /// Breadcrumbs root→current; empty at the root and on search/filter routes.
    pub directory_path: Vec<DirectoryEntry>,
    /// Entries of the current view in server order.
    pub content: Vec<LibraryEntry>,
    /// Index into `content` of the file shown in the sidebar.
    pub open_file_index: Option<usize>,
    /// File to reopen after the next content load.
    pub sidebar_file: Option<FileId>,
    /// Bumped on every refresh.
    pub refresh_generation: u64,
    /// Sequence of the latest content read.
    pub reads: RequestSequence,
    /// Visible notifications, oldest first.
    pub toasts: Vec<Toast>,
    /// Last id handed to a toast.
    pub last_toast_id: u64,
    /// Inline validation errors per form, keyed by field.
    pub form_errors: BTreeMap<FormKind, BTreeMap<String, Vec<String>>>,
    /// Search field state.
    pub search: SearchState,
    /// Usage lookup result for the open file.
    pub file_usages: Option<(FileId, FileUsages)>,
    /// Upload queue in submission order.
    pub uploads: Vec<UploadItem>,
    /// Shows storage paths and ids in the sidebar.
    pub expert_mode: bool,
}

impl LibraryState {
    /// Creates an empty controller state for `route`.
    pub fn new(
        endpoints: ApiEndpoints,
        media_types: MediaTypes,
        capabilities: Capabilities,
        route: LibraryRoute,
    ) -> Self {
        Self {
            endpoints,
            media_types,
            capabilities,
            route,
            in_flight: 0,
            directory_path: Vec::new(),
            content: Vec::new(),
            open_file_index: None,
            sidebar_file: None,
            refresh_generation: 0,
            reads: RequestSequence::default(),
            toasts: Vec::new(),
            last_toast_id: 0,
            form_errors: BTreeMap::new(),
            search: SearchState::default(),
            file_usages: None,
            uploads: Vec::new(),
            expert_mode: false,
        }
    }

    /// Builds the state of a management instance from the page configuration.
    pub fn from_config(config: &MediaLibraryConfig, route: LibraryRoute) -> Self {
        Self {
            expert_mode: config.expert_mode,
            ..Self::new(
                config.api_endpoints.clone(),
                config.media_types.clone(),
                Capabilities::from_config(config),
                route,
            )
        }
    }

    /// Whether any request is in flight.
    pub fn loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Directory being viewed; `None` at the root and on search/filter routes.
    pub fn current_directory(&self) -> Option<&DirectoryEntry> {
        let id = self.route.directory()?;
        self.directory_path.last().filter(|dir| dir.id == id)
    }

    /// File shown in the sidebar.
    pub fn open_file(&self) -> Option<&FileEntry> {
        self.content.get(self.open_file_index?)?.as_file()
    }

    /// Resolves the sidebar panel to render.
    pub fn sidebar(&self) -> Option<SidebarPanel<'_>> {
        match self.open_file() {
            Some(file) => Some(SidebarPanel::File(file)),
            None => self.current_directory().map(SidebarPanel::Directory),
        }
    }

    /// Inline errors recorded for `kind`.
    pub fn errors_for(&self, kind: FormKind) -> Option<&BTreeMap<String, Vec<String>>> {
        self.form_errors.get(&kind)
    }

    /// Usage result for `file`, if it was looked up while open.
    pub fn usages_of(&self, file: FileId) -> Option<&FileUsages> {
        self.file_usages
            .as_ref()
            .filter(|(id, _)| *id == file)
            .map(|(_, usages)| usages)
    }

    /// Whether uploads are accepted on the current route.
    pub fn accepts_uploads(&self) -> bool {
        self.route.is_directory() && self.capabilities.can_upload_into(self.current_directory())
    }

    pub(crate) fn reattach_sidebar(&mut self) {
        self.open_file_index = self
            .sidebar_file
            .take()
            .and_then(|id| position_of_file(&self.content, id));
        let open_id = self.open_file().map(|file| file.id);
        if self.file_usages.as_ref().map(|(id, _)| Some(*id)) != Some(open_id) {
            self.file_usages = None;
        }
    }

    pub(crate) fn next_toast_id(&mut self) -> ToastId {
        self.last_toast_id = self.last_toast_id.saturating_add(1);
        ToastId(self.last_toast_id)
    }
}
