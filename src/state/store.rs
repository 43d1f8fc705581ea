//! Gallery store: the single writer of [`GalleryState`].
//!
//! ARCHITECTURE
//! ============
//! The store owns the writable signal and exposes only read-only handles.
//! [`GalleryStore::load_gallery`] is the one mutation entry point: fetch the
//! document, resolve content URLs, assign, mark ready.
//!
//! ERROR HANDLING
//! ==============
//! Every load failure ends the same way: a full-page redirect to the
//! application root. Nothing is returned to the caller and state is left
//! as it was.
//!
//! TRADE-OFFS
//! ==========
//! Loads are not cancelled. With [`StaleResponsePolicy::Apply`] whichever
//! response lands last wins, even if it belongs to an older navigation.
//! [`StaleResponsePolicy::Discard`] uses a per-call generation number to drop
//! superseded responses instead.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;

use super::gallery::GalleryState;
use crate::config::{AppConfig, StaleResponsePolicy};
use crate::net::api::{GallerySource, HttpGallerySource};
use crate::util::redirect::{BrowserRedirect, ROOT_PATH, Redirect};

/// Owner of the shared gallery state. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct GalleryStore {
    state: ArcRwSignal<GalleryState>,
    source: Arc<dyn GallerySource>,
    redirect: Arc<dyn Redirect>,
    stale_responses: StaleResponsePolicy,
    generation: Arc<AtomicU64>,
}

impl GalleryStore {
    pub fn new(config: &AppConfig, source: Arc<dyn GallerySource>, redirect: Arc<dyn Redirect>) -> Self {
        Self {
            state: ArcRwSignal::new(GalleryState::new(config.server_url.clone())),
            source,
            redirect,
            stale_responses: config.stale_responses,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Store backed by the HTTP storage endpoint and browser navigation.
    pub fn for_browser(config: &AppConfig) -> Self {
        Self::new(config, Arc::new(HttpGallerySource), Arc::new(BrowserRedirect))
    }

    /// Read-only handle to the gallery state.
    pub fn state(&self) -> ArcReadSignal<GalleryState> {
        self.state.read_only()
    }

    /// Load the gallery `gallery_id` into shared state.
    ///
    /// On failure redirects to the application root instead of returning an
    /// error.
    pub async fn load_gallery(&self, gallery_id: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let server_url = self.state.with_untracked(|s| s.server_url.clone());

        let result = self.source.fetch_document(&server_url, gallery_id).await;

        if self.is_superseded(generation) {
            log::debug!("gallery {gallery_id}: dropping superseded response (load #{generation})");
            return;
        }

        match result {
            Ok(doc) => {
                self.state.update(|s| s.apply_document(doc));
                let dangling = self.state.with_untracked(GalleryState::dangling_references);
                if !dangling.is_empty() {
                    log::warn!("gallery {gallery_id}: {} unresolved references: {dangling:?}", dangling.len());
                }
                log::info!("gallery {gallery_id} loaded");
            }
            Err(e) => {
                log::warn!("gallery {gallery_id} failed to load: {e}");
                self.redirect.redirect(ROOT_PATH);
            }
        }
    }

    fn is_superseded(&self, generation: u64) -> bool {
        self.stale_responses == StaleResponsePolicy::Discard && self.generation.load(Ordering::SeqCst) != generation
    }
}
