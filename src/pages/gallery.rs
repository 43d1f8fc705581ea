//! Gallery page: the route-level loader for `/g/:uid`.
//!
//! ARCHITECTURE
//! ============
//! Translates the route parameter into a store load. The store decides what
//! happens on failure (full-page redirect), so the page only has two visual
//! states: loading and ready.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::content_list::ContentList;
use crate::components::gallery_header::GalleryHeader;
use crate::i18n::I18n;
use crate::state::gallery::GalleryState;
use crate::state::store::GalleryStore;

/// Route segment preceding the gallery identifier.
pub const GALLERY_SEGMENT: &str = "g";
/// Route parameter carrying the gallery identifier.
pub const GALLERY_PARAM: &str = "uid";

/// Link target for a gallery.
pub fn gallery_path(uid: &str) -> String {
    format!("/{GALLERY_SEGMENT}/{uid}")
}

/// Gallery page: loads the gallery named by the route and renders its
/// summary once the store reports it ready.
#[component]
pub fn GalleryPage() -> impl IntoView {
    let store = expect_context::<GalleryStore>();
    let i18n = expect_context::<I18n>();
    let params = use_params_map();
    let state: ReadSignal<GalleryState> = store.state().into();
    let last_uid = RwSignal::new(None::<String>);

    // Load whenever the route parameter changes.
    Effect::new(move || {
        let Some(uid) = params.read().get(GALLERY_PARAM) else {
            return;
        };
        if last_uid.get_untracked().as_deref() == Some(uid.as_str()) {
            return;
        }
        last_uid.set(Some(uid.clone()));

        #[cfg(feature = "csr")]
        {
            let store = store.clone();
            leptos::task::spawn_local(async move {
                store.load_gallery(&uid).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&store, uid);
        }
    });

    let loading = i18n.tr("gallery-loading");

    view! {
        <div class="gallery-page">
            <Show
                when=move || state.with(|s| s.gallery_is_ready)
                fallback=move || view! { <p class="gallery-page__loading">{loading.clone()}</p> }
            >
                <GalleryHeader state=state/>
                <ContentList state=state/>
            </Show>
        </div>
    }
}
