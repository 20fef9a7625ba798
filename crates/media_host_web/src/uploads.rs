//! Registry of browser `File` handles waiting for upload.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

use media_host::{UploadTicket, UploadTicketId};

#[derive(Debug, Default)]
/// Keeps `web_sys::File` objects out of the reducer state; forms reference them by ticket.
pub struct UploadRegistry {
    next_id: Cell<u64>,
    files: RefCell<HashMap<UploadTicketId, web_sys::File>>,
}

impl UploadRegistry {
    /// Stores `file` and returns its ticket metadata.
    pub fn register(&self, file: web_sys::File) -> UploadTicket {
        let id = UploadTicketId(self.next_id.get().saturating_add(1));
        self.next_id.set(id.0);
        let ticket = UploadTicket {
            id,
            name: file.name(),
            mime_type: file.type_(),
            size_bytes: file.size().max(0.0) as u64,
        };
        self.files.borrow_mut().insert(id, file);
        ticket
    }

    /// Stores every file of a `FileList` (input change or drop event).
    pub fn register_list(&self, list: &web_sys::FileList) -> Vec<UploadTicket> {
        (0..list.length())
            .filter_map(|index| list.get(index))
            .map(|file| self.register(file))
            .collect()
    }

    /// Returns the file behind `id`.
    pub fn get(&self, id: UploadTicketId) -> Option<web_sys::File> {
        self.files.borrow().get(&id).cloned()
    }

    /// Drops the file behind `id` once its submission finished.
    pub fn release(&self, id: UploadTicketId) {
        self.files.borrow_mut().remove(&id);
    }
}
