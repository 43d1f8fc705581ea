//! Flat list of the gallery's content items with their resolved media.

#[cfg(test)]
#[path = "content_list_test.rs"]
mod content_list_test;

use fluent_bundle::FluentArgs;
use leptos::prelude::*;

use crate::i18n::I18n;
use crate::net::types::{ContentData, ContentMedia, VideoRef};
use crate::state::gallery::GalleryState;

/// Caption for a video item, naming its hosting provider.
pub fn video_label(i18n: &I18n, video: &VideoRef) -> String {
    let mut args = FluentArgs::new();
    args.set("source", video.source.as_str());
    i18n.tr_args("content-video", &args)
}

fn content_item(i18n: &I18n, content: &ContentData) -> AnyView {
    let name = content.name.clone();
    match content.media() {
        Some(ContentMedia::File(file)) => view! {
            <li class="content-list__item">
                <img class="content-list__thumb" src=file.url.clone() alt=name.clone() loading="lazy"/>
                <span class="content-list__name">{name}</span>
            </li>
        }
        .into_any(),
        Some(ContentMedia::Video(video)) => {
            let label = video_label(i18n, video);
            view! {
                <li class="content-list__item">
                    <span class="content-list__name">{name}</span>
                    <span class="content-list__media">{label}</span>
                </li>
            }
            .into_any()
        }
        None => {
            let label = i18n.tr("content-no-media");
            view! {
                <li class="content-list__item content-list__item--empty">
                    <span class="content-list__name">{name}</span>
                    <span class="content-list__media">{label}</span>
                </li>
            }
            .into_any()
        }
    }
}

#[component]
pub fn ContentList(state: ReadSignal<GalleryState>) -> impl IntoView {
    let i18n = expect_context::<I18n>();

    view! {
        <ul class="content-list">
            {move || {
                state.with(|s| {
                    s.all_contents
                        .iter()
                        .map(|content| content_item(&i18n, content))
                        .collect_view()
                })
            }}
        </ul>
    }
}
