//! Gallery title block: name, synopsis, tags and size summary.

#[cfg(test)]
#[path = "gallery_header_test.rs"]
mod gallery_header_test;

use fluent_bundle::FluentArgs;
use leptos::prelude::*;

use crate::i18n::I18n;
use crate::state::gallery::GalleryState;

/// One-line size summary, e.g. "4 walls · 12 works".
pub fn summary_line(i18n: &I18n, state: &GalleryState) -> String {
    let walls = state.room.as_ref().map_or(0, |room| room.walls.len());
    let works = state.all_contents.len();

    let mut wall_args = FluentArgs::new();
    wall_args.set("count", walls);
    let mut work_args = FluentArgs::new();
    work_args.set("count", works);

    format!(
        "{} · {}",
        i18n.tr_args("gallery-walls", &wall_args),
        i18n.tr_args("gallery-contents", &work_args)
    )
}

/// "Updated …" line, or `None` when the document carries no update date.
pub fn updated_line(i18n: &I18n, state: &GalleryState) -> Option<String> {
    let date = state.metadata.as_ref()?.date_updated.as_str();
    if date.is_empty() {
        return None;
    }
    let mut args = FluentArgs::new();
    args.set("date", date);
    Some(i18n.tr_args("gallery-updated", &args))
}

#[component]
pub fn GalleryHeader(state: ReadSignal<GalleryState>) -> impl IntoView {
    let i18n = expect_context::<I18n>();

    let name = move || state.with(|s| s.metadata.as_ref().map(|m| m.name.clone()).unwrap_or_default());
    let synopsis = move || state.with(|s| s.metadata.as_ref().map(|m| m.synopsis.clone()).unwrap_or_default());
    let tags = move || state.with(|s| s.metadata.as_ref().map(|m| m.gallery_tags.clone()).unwrap_or_default());
    let summary = {
        let i18n = i18n.clone();
        move || state.with(|s| summary_line(&i18n, s))
    };
    let updated = move || state.with(|s| updated_line(&i18n, s));

    view! {
        <header class="gallery-header">
            <h1 class="gallery-header__name">{name}</h1>
            <p class="gallery-header__synopsis">{synopsis}</p>
            <ul class="gallery-header__tags">
                {move || tags().into_iter().map(|tag| view! { <li>{tag}</li> }).collect_view()}
            </ul>
            <p class="gallery-header__summary">{summary}</p>
            {move || updated().map(|line| view! { <p class="gallery-header__updated">{line}</p> })}
        </header>
    }
}
