//! Fallback page for unmatched routes.

use leptos::prelude::*;

use crate::i18n::I18n;
use crate::util::redirect::ROOT_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let i18n = expect_context::<I18n>();

    view! {
        <div class="not-found-page">
            <h1>{i18n.tr("not-found-title")}</h1>
            <p>{i18n.tr("not-found-body")}</p>
            <a class="not-found-page__home" href=ROOT_PATH>
                {i18n.tr("not-found-home")}
            </a>
        </div>
    }
}
