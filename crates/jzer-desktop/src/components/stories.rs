use dioxus::prelude::*;

use super::status::{EmptyState, LoadingState, MessageBanner};
use crate::loader::refresh_library;
use crate::state::AppState;
use crate::theme::palette;

/// Horizontally scrolling strip of the bucket's clips.
#[component]
pub fn StoriesStrip() -> Element {
    let state = use_context::<AppState>();
    let colors = palette();
    let library = (state.library)();
    let storage_error = (state.storage_error)();

    if let Some(message) = storage_error {
        return rsx! { MessageBanner { message } };
    }
    if library.is_loading() {
        return rsx! { LoadingState {} };
    }
    if let Some(message) = library.error() {
        return rsx! {
            MessageBanner {
                message: message.to_string(),
                on_retry: move |()| refresh_library(state),
            }
        };
    }
    if library.videos().is_empty() {
        return rsx! {
            EmptyState {
                title: "No stories yet",
                hint: "New clips from the salon will appear here.",
            }
        };
    }

    rsx! {
        div {
            class: "stories-strip",
            style: "
                display: flex;
                gap: 16px;
                overflow-x: auto;
                padding-bottom: 12px;
                scroll-snap-type: x mandatory;
            ",
            for video in library.videos().iter().cloned() {
                div {
                    key: "{video.id}",
                    style: "
                        flex: 0 0 220px;
                        scroll-snap-align: start;
                        border-radius: 12px;
                        overflow: hidden;
                        border: 2px solid {colors.gold};
                        background: {colors.bg_inverse};
                    ",
                    video {
                        src: "{video.video_url}",
                        autoplay: true,
                        muted: true,
                        r#loop: true,
                        playsinline: true,
                        preload: "metadata",
                        style: "display: block; width: 100%; aspect-ratio: 9 / 16; object-fit: cover;",
                    }
                    div {
                        style: "
                            padding: 8px 12px;
                            color: {colors.text_inverse};
                            font-size: 13px;
                            overflow: hidden;
                            text-overflow: ellipsis;
                            white-space: nowrap;
                        ",
                        "{video.title}"
                    }
                }
            }
        }
    }
}
