//! View-independent helpers shared by the library components.

use media_host::{DirectoryEntry, FileId, LibraryEntry, LibraryRoute, MessageKind};
use media_runtime::{Toast, UploadStatus};
use media_ui::{ToastItem, Tone};

/// Data-transfer type carrying the id of a dragged file.
pub(crate) const DRAG_FILE_TYPE: &str = "application/x-media-file-id";

pub(crate) fn drag_payload(file_id: FileId) -> String {
    file_id.0.to_string()
}

pub(crate) fn parse_drag_payload(raw: &str) -> Option<FileId> {
    raw.trim().parse().ok().map(FileId)
}

pub(crate) fn tone_for(kind: MessageKind) -> Tone {
    match kind {
        MessageKind::Success => Tone::Success,
        MessageKind::Info => Tone::Info,
        MessageKind::Warning => Tone::Warning,
        MessageKind::Error => Tone::Danger,
    }
}

pub(crate) fn toast_items(toasts: &[Toast]) -> Vec<ToastItem> {
    toasts
        .iter()
        .map(|toast| ToastItem {
            id: toast.id.0,
            tone: tone_for(toast.kind),
            text: toast.text.clone(),
        })
        .collect()
}

/// Key of a grid cell; includes the position so cells re-render when entries shift.
pub(crate) fn entry_key(index: usize, entry: &LibraryEntry) -> String {
    match entry {
        LibraryEntry::Directory(dir) => format!("{index}:d{}", dir.id.0),
        LibraryEntry::File(file) => format!("{index}:f{}", file.id.0),
    }
}

pub(crate) fn entry_count_label(count: u64) -> String {
    match count {
        1 => "1 item".to_string(),
        n => format!("{n} items"),
    }
}

pub(crate) fn upload_status_label(status: &UploadStatus) -> (Tone, String) {
    match status {
        UploadStatus::Queued => (Tone::Info, "Waiting".to_string()),
        UploadStatus::Uploading => (Tone::Info, "Uploading".to_string()),
        UploadStatus::Done => (Tone::Success, "Uploaded".to_string()),
        UploadStatus::Failed(reason) => (Tone::Danger, reason.clone()),
        UploadStatus::Rejected => (Tone::Warning, "File type not allowed".to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One breadcrumb: label, route it opens, and the directory a file dropped on it moves into.
pub(crate) struct Crumb {
    pub label: String,
    pub route: LibraryRoute,
    pub target: Option<media_host::DirectoryId>,
}

/// Breadcrumbs for the current view; the root crumb is always first.
pub(crate) fn crumbs(route: &LibraryRoute, path: &[DirectoryEntry]) -> Vec<Crumb> {
    let mut crumbs = vec![Crumb {
        label: "Media".to_string(),
        route: LibraryRoute::root(),
        target: None,
    }];
    crumbs.extend(path.iter().map(|dir| Crumb {
        label: dir.name.clone(),
        route: LibraryRoute::Directory(Some(dir.id)),
        target: Some(dir.id),
    }));
    match route {
        LibraryRoute::Search(query) => crumbs.push(Crumb {
            label: format!("Search: {query}"),
            route: route.clone(),
            target: None,
        }),
        LibraryRoute::Filter(_) => crumbs.push(Crumb {
            label: "Unused files".to_string(),
            route: route.clone(),
            target: None,
        }),
        LibraryRoute::Directory(_) => {}
    }
    crumbs
}

#[cfg(test)]
mod tests {
    use media_host::{DirectoryId, FilterName};
    use media_runtime::ToastId;
    use pretty_assertions::assert_eq;

    use super::*;

    fn directory(id: u64, name: &str) -> DirectoryEntry {
        DirectoryEntry {
            id: DirectoryId(id),
            name: name.to_string(),
            parent_id: None,
            number_of_entries: 0,
            created_date: String::new(),
            is_global: false,
            is_hidden: false,
        }
    }

    #[test]
    fn drag_payload_carries_the_file_id() {
        assert_eq!(parse_drag_payload(&drag_payload(FileId(17))), Some(FileId(17)));
        assert_eq!(parse_drag_payload(" 4 "), Some(FileId(4)));
        assert_eq!(parse_drag_payload("https://example.test/a.png"), None);
    }

    #[test]
    fn toasts_map_errors_to_danger_tone() {
        let toasts = vec![
            Toast {
                id: ToastId(3),
                kind: MessageKind::Error,
                text: "Nope".to_string(),
            },
            Toast {
                id: ToastId(4),
                kind: MessageKind::Success,
                text: "Saved".to_string(),
            },
        ];
        let items: Vec<_> = toast_items(&toasts)
            .into_iter()
            .map(|item| (item.id, item.tone))
            .collect();
        assert_eq!(items, vec![(3, Tone::Danger), (4, Tone::Success)]);
    }

    #[test]
    fn breadcrumbs_drop_into_their_directory_and_root_is_none() {
        let path = vec![directory(1, "Photos"), directory(5, "2024")];
        let crumbs = crumbs(&LibraryRoute::Directory(Some(DirectoryId(5))), &path);
        let targets: Vec<_> = crumbs
            .iter()
            .map(|crumb| (crumb.label.as_str(), crumb.target))
            .collect();
        assert_eq!(
            targets,
            vec![
                ("Media", None),
                ("Photos", Some(DirectoryId(1))),
                ("2024", Some(DirectoryId(5))),
            ]
        );
    }

    #[test]
    fn search_and_filter_views_get_a_trailing_crumb() {
        let search = crumbs(&LibraryRoute::Search("cat".to_string()), &[]);
        assert_eq!(search.last().map(|crumb| crumb.label.as_str()), Some("Search: cat"));

        let filter = crumbs(&LibraryRoute::Filter(FilterName::Unused), &[]);
        assert_eq!(filter.len(), 2);
        assert_eq!(filter[1].target, None);
    }

    #[test]
    fn labels_read_naturally() {
        assert_eq!(entry_count_label(1), "1 item");
        assert_eq!(entry_count_label(0), "0 items");
        assert_eq!(
            upload_status_label(&UploadStatus::Failed("File too large".to_string())),
            (Tone::Danger, "File too large".to_string())
        );
        assert_eq!(
            entry_key(2, &LibraryEntry::Directory(directory(9, "x"))),
            "2:d9"
        );
    }
}
