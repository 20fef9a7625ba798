//! Local edit buffers of the file and directory sidebars.
//!
//! A draft keeps the user's in-progress edits apart from the authoritative entry so unrelated
//! re-renders do not clobber them. Opening a different entry resets the draft and closes the
//! per-field edit toggles.

use media_host::{
    ApiEndpoints, DirectoryControls, DirectoryEntry, FileControls, FileEntry, MutationForm,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Edit buffer of the file sidebar.
pub struct FileDraft {
    base: FileEntry,
    /// Draft copy of the entry.
    pub changed: FileEntry,
    /// Name field is in edit mode.
    pub editing_name: bool,
    /// Alt-text field is in edit mode.
    pub editing_alt_text: bool,
    /// Delete confirmation is showing.
    pub confirm_delete: bool,
}

impl FileDraft {
    /// Starts a draft for `entry`.
    pub fn new(entry: &FileEntry) -> Self {
        Self {
            base: entry.clone(),
            changed: entry.clone(),
            editing_name: false,
            editing_alt_text: false,
            confirm_delete: false,
        }
    }

    /// Follows the authoritative entry.
    ///
    /// A different id resets everything. A new version of the same entry replaces the draft only
    /// while the user has not changed anything.
    pub fn sync(&mut self, entry: &FileEntry) {
        if entry.id != self.base.id {
            *self = Self::new(entry);
            return;
        }
        if *entry == self.base {
            return;
        }
        if self.changed == self.base {
            self.changed = entry.clone();
        }
        self.base = entry.clone();
    }

    /// Entry the draft was started from.
    pub fn base(&self) -> &FileEntry {
        &self.base
    }

    /// Whether a field the user may change differs from the authoritative entry.
    pub fn is_dirty(&self, controls: &FileControls) -> bool {
        (controls.rename && self.changed.name.trim() != self.base.name)
            || (controls.edit_alt_text && self.changed.alt_text != self.base.alt_text)
            || (controls.toggle_hidden && self.changed.is_hidden != self.base.is_hidden)
    }

    /// Builds the `editFile` form, or `None` when there is nothing to save.
    pub fn to_form(&self, endpoints: &ApiEndpoints, controls: &FileControls) -> Option<MutationForm> {
        if !self.is_dirty(controls) || self.changed.name.trim().is_empty() {
            return None;
        }
        let hidden = controls.toggle_hidden.then_some(self.changed.is_hidden);
        Some(MutationForm::edit_file(
            endpoints,
            self.base.id,
            &self.changed.name,
            &self.changed.alt_text,
            hidden,
        ))
    }

    /// Closes the edit toggles after a save was sent.
    pub fn mark_submitted(&mut self) {
        self.editing_name = false;
        self.editing_alt_text = false;
    }

    /// Opens the delete confirmation.
    pub fn request_delete(&mut self) {
        self.confirm_delete = true;
    }

    /// Dismisses the delete confirmation.
    pub fn cancel_delete(&mut self) {
        self.confirm_delete = false;
    }

    /// Confirms a pending delete and returns the `deleteFile` form.
    pub fn confirm_delete(&mut self, endpoints: &ApiEndpoints) -> Option<MutationForm> {
        std::mem::take(&mut self.confirm_delete)
            .then(|| MutationForm::delete_file(endpoints, self.base.id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Edit buffer of the directory sidebar.
pub struct DirectoryDraft {
    base: DirectoryEntry,
    /// Draft copy of the entry.
    pub changed: DirectoryEntry,
    /// Name field is in edit mode.
    pub editing_name: bool,
    /// Delete confirmation is showing.
    pub confirm_delete: bool,
}

impl DirectoryDraft {
    /// Starts a draft for `entry`.
    pub fn new(entry: &DirectoryEntry) -> Self {
        Self {
            base: entry.clone(),
            changed: entry.clone(),
            editing_name: false,
            confirm_delete: false,
        }
    }

    /// Follows the authoritative entry, see [`FileDraft::sync`].
    pub fn sync(&mut self, entry: &DirectoryEntry) {
        if entry.id != self.base.id {
            *self = Self::new(entry);
            return;
        }
        if *entry == self.base {
            return;
        }
        if self.changed == self.base {
            self.changed = entry.clone();
        }
        self.base = entry.clone();
    }

    /// Entry the draft was started from.
    pub fn base(&self) -> &DirectoryEntry {
        &self.base
    }

    /// Whether a field the user may change differs from the authoritative entry.
    pub fn is_dirty(&self, controls: &DirectoryControls) -> bool {
        (controls.rename && self.changed.name.trim() != self.base.name)
            || (controls.toggle_hidden && self.changed.is_hidden != self.base.is_hidden)
    }

    /// Builds the `editDirectory` form, or `None` when there is nothing to save.
    pub fn to_form(
        &self,
        endpoints: &ApiEndpoints,
        controls: &DirectoryControls,
    ) -> Option<MutationForm> {
        if !self.is_dirty(controls) || self.changed.name.trim().is_empty() {
            return None;
        }
        let hidden = controls.toggle_hidden.then_some(self.changed.is_hidden);
        Some(MutationForm::edit_directory(
            endpoints,
            self.base.id,
            &self.changed.name,
            hidden,
        ))
    }

    /// Closes the name toggle after a save was sent.
    pub fn mark_submitted(&mut self) {
        self.editing_name = false;
    }

    /// Opens the delete confirmation.
    pub fn request_delete(&mut self) {
        self.confirm_delete = true;
    }

    /// Dismisses the delete confirmation.
    pub fn cancel_delete(&mut self) {
        self.confirm_delete = false;
    }

    /// Confirms a pending delete and returns the `deleteDirectory` form.
    pub fn confirm_delete(&mut self, endpoints: &ApiEndpoints) -> Option<MutationForm> {
        std::mem::take(&mut self.confirm_delete)
            .then(|| MutationForm::delete_directory(endpoints, self.base.id))
    }
}
