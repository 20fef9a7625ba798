//! Client-side control gating.
//!
//! These rules only decide which controls render enabled. The server stays authoritative and
//! rejects forbidden mutations on its own.

use serde::{Deserialize, Serialize};

use crate::{
    config::MediaLibraryConfig,
    model::{DirectoryEntry, FileEntry},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Capability flags of one library instance.
pub struct Capabilities {
    /// The library acts as a picker; management controls are suppressed.
    pub selection_mode: bool,
    /// Only image files may be picked in selection mode.
    pub only_image: bool,
    /// Entries of the global scope may be edited.
    pub allow_global_edit: bool,
    /// Directories may be created.
    pub can_create_directory: bool,
    /// Directories may be renamed/hidden.
    pub can_edit_directory: bool,
    /// Directories may be deleted.
    pub can_delete_directory: bool,
    /// Files may be uploaded.
    pub can_upload_file: bool,
    /// File metadata may be edited.
    pub can_edit_file: bool,
    /// File content may be replaced.
    pub can_replace_file: bool,
    /// Files may be deleted.
    pub can_delete_file: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            selection_mode: false,
            only_image: false,
            allow_global_edit: false,
            can_create_directory: true,
            can_edit_directory: true,
            can_delete_directory: true,
            can_upload_file: true,
            can_edit_file: true,
            can_replace_file: true,
            can_delete_file: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Enabled state of the file sidebar controls.
pub struct FileControls {
    /// Name field.
    pub rename: bool,
    /// Alt-text field.
    pub edit_alt_text: bool,
    /// Hidden toggle (global files only).
    pub toggle_hidden: bool,
    /// Replace-content upload.
    pub replace: bool,
    /// Delete button.
    pub delete: bool,
    /// Lock indicator explaining why global controls are disabled.
    pub locked: bool,
    /// Name and alt-text fields are rendered (enabled or not).
    pub show_edit: bool,
    /// Hidden toggle is rendered.
    pub show_hidden_toggle: bool,
    /// Replace upload is rendered.
    pub show_replace: bool,
    /// Delete button is rendered.
    pub show_delete: bool,
}

impl FileControls {
    /// Returns `true` when any metadata field may be saved.
    pub fn any_editable(&self) -> bool {
        self.rename || self.edit_alt_text || self.toggle_hidden
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Enabled state of the directory sidebar controls.
pub struct DirectoryControls {
    /// Name field.
    pub rename: bool,
    /// Hidden toggle (global directories only).
    pub toggle_hidden: bool,
    /// Delete button; requires the directory to be empty.
    pub delete: bool,
    /// Lock indicator explaining why global controls are disabled.
    pub locked: bool,
    /// The directory still has entries, which blocks delete.
    pub has_entries: bool,
    /// Name field is rendered (enabled or not).
    pub show_edit: bool,
    /// Hidden toggle is rendered.
    pub show_hidden_toggle: bool,
    /// Delete button is rendered.
    pub show_delete: bool,
}

/// Title of a directory delete button blocked by its contents.
pub const NON_EMPTY_DELETE_HINT: &str = "Only empty directories can be deleted.";
/// Title of controls blocked by the global edit permission.
pub const LOCKED_HINT: &str = "Global entries can only be changed with the global edit permission.";

impl DirectoryControls {
    /// Explains why a rendered delete button is disabled.
    pub fn delete_hint(&self) -> Option<&'static str> {
        if !self.show_delete || self.delete {
            None
        } else if self.locked {
            Some(LOCKED_HINT)
        } else if self.has_entries {
            Some(NON_EMPTY_DELETE_HINT)
        } else {
            None
        }
    }
}

impl Capabilities {
    /// Derives the management-mode capabilities from the page configuration.
    pub fn from_config(config: &MediaLibraryConfig) -> Self {
        Self {
            selection_mode: false,
            only_image: false,
            allow_global_edit: config.allow_global_edit,
            can_create_directory: config.can_create_directory,
            can_edit_directory: config.can_edit_directory,
            can_delete_directory: config.can_delete_directory,
            can_upload_file: config.can_upload_file,
            can_edit_file: config.can_edit_file,
            can_replace_file: config.can_replace_file,
            can_delete_file: config.can_delete_file,
        }
    }

    /// Switches to selection mode, optionally restricted to images.
    pub fn for_selection(self, only_image: bool) -> Self {
        Self {
            selection_mode: true,
            only_image,
            ..self
        }
    }

    /// Whether an entry of the given scope may be mutated at all.
    pub fn may_mutate(&self, is_global: bool) -> bool {
        !is_global || self.allow_global_edit
    }

    /// Control state for a file sidebar.
    pub fn file_controls(&self, file: &FileEntry) -> FileControls {
        let mutable = self.may_mutate(file.is_global);
        let manage = mutable && !self.selection_mode;
        let show_edit = !self.selection_mode && self.can_edit_file;
        FileControls {
            rename: manage && self.can_edit_file,
            edit_alt_text: manage && self.can_edit_file,
            toggle_hidden: manage && self.can_edit_file && file.is_global,
            replace: mutable && self.can_replace_file,
            delete: manage && self.can_delete_file,
            locked: !mutable,
            show_edit,
            show_hidden_toggle: show_edit && file.is_global,
            show_replace: self.can_replace_file,
            show_delete: !self.selection_mode && self.can_delete_file,
        }
    }

    /// Control state for a directory sidebar.
    pub fn directory_controls(&self, directory: &DirectoryEntry) -> DirectoryControls {
        let mutable = self.may_mutate(directory.is_global);
        let manage = mutable && !self.selection_mode;
        let show_edit = !self.selection_mode && self.can_edit_directory;
        DirectoryControls {
            rename: manage && self.can_edit_directory,
            toggle_hidden: manage && self.can_edit_directory && directory.is_global,
            delete: manage && self.can_delete_directory && directory.is_empty(),
            locked: !mutable,
            has_entries: !directory.is_empty(),
            show_edit,
            show_hidden_toggle: show_edit && directory.is_global,
            show_delete: !self.selection_mode && self.can_delete_directory,
        }
    }

    /// Whether a directory may be created inside `parent` (`None` is the root).
    pub fn can_create_directory_in(&self, parent: Option<&DirectoryEntry>) -> bool {
        !self.selection_mode
            && self.can_create_directory
            && parent.map_or(true, |dir| self.may_mutate(dir.is_global))
    }

    /// Whether files may be uploaded into `parent` (`None` is the root).
    pub fn can_upload_into(&self, parent: Option<&DirectoryEntry>) -> bool {
        self.can_upload_file && parent.map_or(true, |dir| self.may_mutate(dir.is_global))
    }

    /// Whether files may be dragged onto breadcrumbs to move them.
    pub fn can_move_files(&self) -> bool {
        !self.selection_mode && self.can_edit_file
    }

    /// Whether `file` may be moved by drag.
    pub fn can_move(&self, file: &FileEntry) -> bool {
        self.can_move_files() && self.may_mutate(file.is_global)
    }

    /// Whether `file` may be picked in selection mode.
    pub fn can_select(&self, file: &FileEntry) -> bool {
        self.selection_mode && (!self.only_image || file.is_image())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{DirectoryId, FileId};

    fn file(is_global: bool, mime: &str) -> FileEntry {
        FileEntry {
            id: FileId(1),
            name: "f".to_string(),
            url: None,
            path: None,
            alt_text: String::new(),
            mime_type: mime.to_string(),
            file_size: String::new(),
            type_display: String::new(),
            thumbnail_url: None,
            uploaded_date: String::new(),
            last_modified: None,
            is_global,
            is_hidden: false,
        }
    }

    fn directory(number_of_entries: u64, is_global: bool) -> DirectoryEntry {
        DirectoryEntry {
            id: DirectoryId(1),
            name: "d".to_string(),
            parent_id: None,
            number_of_entries,
            created_date: String::new(),
            is_global,
            is_hidden: false,
        }
    }

    #[test]
    fn global_file_controls_follow_global_edit_capability() {
        let without = Capabilities::default();
        let controls = without.file_controls(&file(true, "image/png"));
        assert_eq!(
            controls,
            FileControls {
                rename: false,
                edit_alt_text: false,
                toggle_hidden: false,
                replace: false,
                delete: false,
                locked: true,
                show_edit: true,
                show_hidden_toggle: true,
                show_replace: true,
                show_delete: true,
            }
        );

        let with = Capabilities {
            allow_global_edit: true,
            ..Capabilities::default()
        };
        let controls = with.file_controls(&file(true, "image/png"));
        assert!(controls.rename && controls.edit_alt_text && controls.delete && controls.replace);
        assert!(controls.toggle_hidden);
        assert!(!controls.locked);
    }

    #[test]
    fn directory_delete_requires_empty_directory() {
        let caps = Capabilities::default();
        for entries in [1, 2, 50] {
            assert!(!caps.directory_controls(&directory(entries, false)).delete);
        }
        assert!(caps.directory_controls(&directory(0, false)).delete);
        assert!(!caps.directory_controls(&directory(0, true)).delete);
    }

    #[test]
    fn blocked_controls_stay_rendered_with_an_explanation() {
        let caps = Capabilities::default();

        let full = caps.directory_controls(&directory(3, false));
        assert!(full.show_delete && !full.delete);
        assert_eq!(full.delete_hint(), Some(NON_EMPTY_DELETE_HINT));

        let locked = caps.directory_controls(&directory(0, true));
        assert!(locked.show_delete && locked.show_edit && !locked.rename);
        assert_eq!(locked.delete_hint(), Some(LOCKED_HINT));

        assert_eq!(caps.directory_controls(&directory(0, false)).delete_hint(), None);

        let picker = caps.for_selection(false);
        let controls = picker.file_controls(&file(false, "image/png"));
        assert!(!controls.show_edit && !controls.show_delete && controls.show_replace);
        assert_eq!(picker.directory_controls(&directory(3, false)).delete_hint(), None);
    }

    #[test]
    fn selection_mode_keeps_replace_and_upload_only() {
        let caps = Capabilities::default().for_selection(true);
        let controls = caps.file_controls(&file(false, "application/pdf"));
        assert!(!controls.rename && !controls.delete && !controls.edit_alt_text);
        assert!(controls.replace);
        assert!(caps.can_upload_into(None));
        assert!(!caps.can_create_directory_in(None));
        assert!(!caps.can_move_files());
        assert!(!caps.can_select(&file(false, "application/pdf")));
        assert!(caps.can_select(&file(false, "image/jpeg")));
    }

    #[test]
    fn creation_inside_global_directory_needs_global_edit() {
        let caps = Capabilities::default();
        assert!(caps.can_create_directory_in(None));
        assert!(caps.can_create_directory_in(Some(&directory(0, false))));
        assert!(!caps.can_create_directory_in(Some(&directory(0, true))));
        assert!(!caps.can_upload_into(Some(&directory(0, true))));
    }
}
