//! Storage endpoint access for gallery documents.
//!
//! Client-side (csr): a real HTTP GET via `gloo-net`.
//! Native builds and tests: [`HttpGallerySource`] reports
//! [`LoadError::Unavailable`], and the store is driven through mock
//! [`GallerySource`] implementations instead.
//!
//! ERROR HANDLING
//! ==============
//! Transport failure, non-OK status and malformed bodies are kept apart in
//! [`LoadError`] for logging, but the store treats them as one outcome.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::GalleryDocument;

/// Reasons a gallery document could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// The storage endpoint answered with a non-OK status.
    #[error("storage responded with status {0}")]
    Status(u16),

    /// The response body is not a gallery document.
    #[error("gallery document decode failed: {0}")]
    Decode(String),

    /// HTTP is only wired up in the browser build.
    #[error("gallery storage is not available outside the browser")]
    Unavailable,
}

impl LoadError {
    /// Whether the storage endpoint reported the gallery as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status(404))
    }
}

/// Build the document URL for a gallery: `{server_url}/storage/{id}/data.json`.
pub fn gallery_data_url(server_url: &str, gallery_id: &str) -> String {
    let base = server_url.trim_end_matches('/');
    format!("{base}/storage/{gallery_id}/data.json")
}

/// Path under which a local-storage gallery serves its asset files.
pub fn local_asset_path(alias: &str, file_name: &str) -> String {
    format!("/storage/{alias}/{file_name}")
}

/// Decode a response body into a [`GalleryDocument`].
///
/// # Errors
///
/// Returns [`LoadError::Decode`] if the body is not valid JSON or lacks one of
/// the top-level sections.
pub fn decode_document(body: &str) -> Result<GalleryDocument, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::Decode(e.to_string()))
}

/// Source of gallery documents. Enables mocking in tests.
#[async_trait::async_trait(?Send)]
pub trait GallerySource: Send + Sync {
    /// Fetch and decode the document for `gallery_id`.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the request fails, the endpoint answers with
    /// a non-OK status, or the body cannot be decoded.
    async fn fetch_document(&self, server_url: &str, gallery_id: &str) -> Result<GalleryDocument, LoadError>;
}

/// Fetches gallery documents over HTTP from the storage endpoint.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpGallerySource;

#[async_trait::async_trait(?Send)]
impl GallerySource for HttpGallerySource {
    async fn fetch_document(&self, server_url: &str, gallery_id: &str) -> Result<GalleryDocument, LoadError> {
        #[cfg(feature = "csr")]
        {
            let url = gallery_data_url(server_url, gallery_id);
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| LoadError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(LoadError::Status(resp.status()));
            }
            let body = resp.text().await.map_err(|e| LoadError::Network(e.to_string()))?;
            decode_document(&body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (server_url, gallery_id);
            Err(LoadError::Unavailable)
        }
    }
}
