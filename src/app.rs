//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::AppConfig;
use crate::i18n::{I18n, Locale};
use crate::pages::gallery::{GALLERY_PARAM, GALLERY_SEGMENT, GalleryPage};
use crate::pages::not_found::NotFoundPage;
use crate::state::store::GalleryStore;

/// Root application component.
///
/// Builds config, translator and gallery store, provides them as context and
/// sets up client-side routing. Every path other than `/g/:uid` renders the
/// not-found page, the application root included.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env().unwrap_or_else(|e| {
        log::error!("invalid build configuration, using defaults: {e}");
        AppConfig::default()
    });
    let i18n = I18n::new(Locale::from_browser());
    let title = i18n.tr("app-title");
    log::debug!("gallery viewer starting: locale={} server_url={:?}", i18n.locale().code(), config.server_url);

    provide_context(GalleryStore::for_browser(&config));
    provide_context(i18n);

    view! {
        <Title text=title/>

        <Router>
            <main class="app">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=(StaticSegment(GALLERY_SEGMENT), ParamSegment(GALLERY_PARAM)) view=GalleryPage/>
                </Routes>
            </main>
        </Router>
    }
}
