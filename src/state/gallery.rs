//! Loaded gallery state and content URL resolution.
//!
//! DESIGN
//! ======
//! `GalleryState` is a plain value; reactivity lives in
//! [`GalleryStore`](super::store::GalleryStore), which owns the only writable
//! handle and hands out read-only signals.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::net::api::local_asset_path;
use crate::net::types::{ContentData, GalleryData, GalleryDocument, Room};

/// Everything the viewer knows about the current gallery.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryState {
    pub metadata: Option<GalleryData>,
    pub room: Option<Room>,
    /// Content items with display URLs already resolved.
    pub all_contents: Vec<ContentData>,
    pub gallery_is_ready: bool,
    /// Base URL of the storage endpoint; empty means same origin.
    pub server_url: String,
}

/// A placement whose reference does not resolve within the loaded gallery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DanglingReference {
    MissingContent { wall_id: i64, content_id: String },
    MissingFrame { wall_id: i64, content_id: String, frame_index: i64 },
}

impl GalleryState {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self { server_url: server_url.into(), ..Self::default() }
    }

    /// Replace the gallery sections with a freshly loaded document and mark
    /// the gallery ready.
    pub(crate) fn apply_document(&mut self, doc: GalleryDocument) {
        let GalleryDocument { gallery_data, room, all_contents } = doc;
        self.all_contents = resolve_content_urls(&gallery_data, all_contents);
        self.metadata = Some(gallery_data);
        self.room = Some(room);
        self.gallery_is_ready = true;
    }

    /// Look up a content item by id.
    pub fn content(&self, id: &str) -> Option<&ContentData> {
        self.all_contents.iter().find(|c| c.id == id)
    }

    /// Placements referencing content or frames that do not exist.
    ///
    /// The viewer does not reject such documents; this only feeds a warning.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let Some(room) = &self.room else {
            return Vec::new();
        };
        let mut dangling = Vec::new();
        for (wall, placement) in room.placements() {
            if self.content(&placement.content_id).is_none() {
                dangling.push(DanglingReference::MissingContent {
                    wall_id: wall.id,
                    content_id: placement.content_id.clone(),
                });
            }
            // Negative indexes mean "no frame".
            if let Some(frame_index) = placement.frame_index.filter(|i| *i >= 0) {
                if room.frame_for(placement).is_none() {
                    dangling.push(DanglingReference::MissingFrame {
                        wall_id: wall.id,
                        content_id: placement.content_id.clone(),
                        frame_index,
                    });
                }
            }
        }
        dangling
    }
}

/// Point file-backed content at local storage when the gallery asks for it.
///
/// With `local_storage` set, every item carrying a file reference gets
/// `/storage/{alias}/{file name}` as its URL, whatever URL the document held.
/// Otherwise the list is returned untouched. Order is preserved.
pub fn resolve_content_urls(metadata: &GalleryData, contents: Vec<ContentData>) -> Vec<ContentData> {
    if !metadata.local_storage {
        return contents;
    }
    contents
        .into_iter()
        .map(|mut content| {
            if let Some(file) = content.file.as_mut() {
                file.url = local_asset_path(&metadata.alias, &file.name);
            }
            content
        })
        .collect()
}
