use super::*;
use crate::net::api::LoadError;
use crate::net::types::{ContentData, FileRef, GalleryData, GalleryDocument, Room, Wall};
use futures::channel::oneshot;
use futures::executor::block_on;
use std::collections::HashMap;
use std::sync::Mutex;

// =========================================================================
// MockSource / RecordingRedirect
// =========================================================================

struct MockSource {
    responses: Mutex<HashMap<String, Result<GalleryDocument, LoadError>>>,
    requests: Mutex<Vec<(String, String)>>,
    gate: Mutex<Option<oneshot::Receiver<()>>>,
}

impl MockSource {
    fn new(responses: Vec<(&str, Result<GalleryDocument, LoadError>)>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().map(|(id, r)| (id.to_owned(), r)).collect()),
            requests: Mutex::new(Vec::new()),
            gate: Mutex::new(None),
        }
    }

    /// Hold the next request until the returned sender fires.
    fn gate_next(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gate.lock().unwrap() = Some(rx);
        tx
    }
}

#[async_trait::async_trait(?Send)]
impl GallerySource for MockSource {
    async fn fetch_document(&self, server_url: &str, gallery_id: &str) -> Result<GalleryDocument, LoadError> {
        self.requests
            .lock()
            .unwrap()
            .push((server_url.to_owned(), gallery_id.to_owned()));
        let gate = self.gate.lock().unwrap().take();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
        self.responses
            .lock()
            .unwrap()
            .get(gallery_id)
            .cloned()
            .unwrap_or(Err(LoadError::Status(404)))
    }
}

#[derive(Default)]
struct RecordingRedirect {
    paths: Mutex<Vec<String>>,
}

impl Redirect for RecordingRedirect {
    fn redirect(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_owned());
    }
}

impl RecordingRedirect {
    fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

// =========================================================================
// Helpers
// =========================================================================

fn document(alias: &str, local_storage: bool) -> GalleryDocument {
    GalleryDocument {
        gallery_data: GalleryData {
            uid: alias.to_owned(),
            alias: alias.to_owned(),
            name: format!("{alias} gallery"),
            local_storage,
            ..GalleryData::default()
        },
        room: Room {
            walls: vec![Wall { id: 1, ..Wall::default() }],
            ..Room::default()
        },
        all_contents: vec![ContentData {
            id: "1".to_owned(),
            kind: "image".to_owned(),
            file: Some(FileRef { name: "pic.jpg".to_owned(), size: 1000, url: "ignored".to_owned() }),
            ..ContentData::default()
        }],
    }
}

fn setup(
    config: AppConfig,
    responses: Vec<(&str, Result<GalleryDocument, LoadError>)>,
) -> (GalleryStore, Arc<MockSource>, Arc<RecordingRedirect>) {
    let source = Arc::new(MockSource::new(responses));
    let redirect = Arc::new(RecordingRedirect::default());
    let store = GalleryStore::new(&config, source.clone(), redirect.clone());
    (store, source, redirect)
}

fn first_file_url(store: &GalleryStore) -> String {
    store
        .state()
        .with_untracked(|s| s.all_contents[0].file.as_ref().unwrap().url.clone())
}

// =========================================================================
// Successful loads
// =========================================================================

#[test]
fn load_rewrites_local_storage_urls() {
    let (store, _, redirect) = setup(AppConfig::default(), vec![("abc123", Ok(document("abc123", true)))]);

    block_on(store.load_gallery("abc123"));

    assert!(store.state().with_untracked(|s| s.gallery_is_ready));
    assert_eq!(first_file_url(&store), "/storage/abc123/pic.jpg");
    assert!(redirect.paths().is_empty());
}

#[test]
fn load_with_null_fields_renders_instead_of_redirecting() {
    let doc = crate::net::api::decode_document(
        r#"{"galleryData":{"alias":"a","synopsis":null,"localStorage":true},"room":{"walls":[]},"allContents":[{"id":"1","file":{"name":"p.jpg","size":1,"url":null}}]}"#,
    )
    .unwrap();
    let (store, _, redirect) = setup(AppConfig::default(), vec![("a", Ok(doc))]);

    block_on(store.load_gallery("a"));

    assert!(store.state().with_untracked(|s| s.gallery_is_ready));
    assert_eq!(first_file_url(&store), "/storage/a/p.jpg");
    assert!(redirect.paths().is_empty());
}

#[test]
fn load_assigns_all_sections_from_response() {
    let doc = document("remote", false);
    let (store, _, _) = setup(AppConfig::default(), vec![("remote", Ok(doc.clone()))]);

    block_on(store.load_gallery("remote"));

    let state = store.state().get_untracked();
    assert!(state.gallery_is_ready);
    assert_eq!(state.metadata, Some(doc.gallery_data));
    assert_eq!(state.room, Some(doc.room));
    assert_eq!(state.all_contents, doc.all_contents);
    assert_eq!(first_file_url(&store), "ignored");
}

#[test]
fn load_requests_configured_server_url() {
    let config = AppConfig::from_values(Some("https://galleries.example/"), None).unwrap();
    let (store, source, _) = setup(config, vec![("abc123", Ok(document("abc123", true)))]);

    block_on(store.load_gallery("abc123"));

    assert_eq!(
        *source.requests.lock().unwrap(),
        vec![("https://galleries.example".to_owned(), "abc123".to_owned())]
    );
}

#[test]
fn repeated_load_is_idempotent() {
    let (store, _, _) = setup(AppConfig::default(), vec![("abc123", Ok(document("abc123", true)))]);

    block_on(store.load_gallery("abc123"));
    let first = store.state().get_untracked();
    block_on(store.load_gallery("abc123"));

    assert_eq!(store.state().get_untracked(), first);
}

#[test]
fn clones_share_state() {
    let (store, _, _) = setup(AppConfig::default(), vec![("abc123", Ok(document("abc123", true)))]);
    let view = store.clone();

    block_on(store.load_gallery("abc123"));

    assert!(view.state().with_untracked(|s| s.gallery_is_ready));
}

// =========================================================================
// Failures
// =========================================================================

fn assert_failure_redirects(err: LoadError) {
    let (store, _, redirect) = setup(AppConfig::default(), vec![("broken", Err(err))]);

    block_on(store.load_gallery("broken"));

    assert_eq!(redirect.paths(), vec!["/".to_owned()]);
    let state = store.state().get_untracked();
    assert!(!state.gallery_is_ready);
    assert!(state.metadata.is_none());
    assert!(state.all_contents.is_empty());
}

#[test]
fn network_error_redirects_to_root() {
    assert_failure_redirects(LoadError::Network("connection refused".to_owned()));
}

#[test]
fn not_found_redirects_to_root() {
    assert_failure_redirects(LoadError::Status(404));
}

#[test]
fn server_error_redirects_to_root() {
    assert_failure_redirects(LoadError::Status(500));
}

#[test]
fn malformed_body_redirects_to_root() {
    let err = crate::net::api::decode_document("{\"galleryData\":").unwrap_err();
    assert_failure_redirects(err);
}

#[test]
fn failure_after_success_keeps_previous_state() {
    let (store, _, redirect) = setup(AppConfig::default(), vec![("good", Ok(document("good", true)))]);

    block_on(store.load_gallery("good"));
    block_on(store.load_gallery("missing"));

    assert_eq!(redirect.paths(), vec!["/".to_owned()]);
    let state = store.state().get_untracked();
    assert!(state.gallery_is_ready);
    assert_eq!(state.metadata.unwrap().alias, "good");
}

// =========================================================================
// Overlapping loads
// =========================================================================

fn overlapping_loads(policy: &str) -> GalleryState {
    let config = AppConfig::from_values(None, Some(policy)).unwrap();
    let (store, source, _) = setup(
        config,
        vec![("older", Ok(document("older", false))), ("newer", Ok(document("newer", false)))],
    );
    let release = source.gate_next();

    block_on(async {
        futures::join!(store.load_gallery("older"), async {
            store.load_gallery("newer").await;
            release.send(()).unwrap();
        });
    });

    store.state().get_untracked()
}

#[test]
fn late_stale_response_wins_by_default() {
    let state = overlapping_loads("apply");
    assert_eq!(state.metadata.unwrap().alias, "older");
}

#[test]
fn late_stale_response_is_dropped_with_discard_policy() {
    let state = overlapping_loads("discard");
    assert_eq!(state.metadata.unwrap().alias, "newer");
}

#[test]
fn discard_policy_does_not_redirect_for_superseded_failure() {
    let config = AppConfig::from_values(None, Some("discard")).unwrap();
    let (store, source, redirect) = setup(config, vec![("newer", Ok(document("newer", false)))]);
    let release = source.gate_next();

    block_on(async {
        futures::join!(store.load_gallery("missing"), async {
            store.load_gallery("newer").await;
            release.send(()).unwrap();
        });
    });

    assert!(redirect.paths().is_empty());
    assert!(store.state().with_untracked(|s| s.gallery_is_ready));
}
