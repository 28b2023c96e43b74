//! Video card component

use dioxus::prelude::*;

use jzer_core::VideoAsset;

use super::button::{Button, ButtonVariant};
use crate::theme::palette;

/// One clip in the admin grid.
#[component]
pub fn VideoCard(video: VideoAsset, disabled: bool, on_delete: EventHandler<String>) -> Element {
    let colors = palette();
    let uploaded = video.created_at.format("%b %-d, %Y").to_string();
    let id = video.id.clone();

    rsx! {
        div {
            class: "video-card",
            style: "
                display: flex;
                flex-direction: column;
                border: 1px solid {colors.border};
                border-radius: 8px;
                overflow: hidden;
                background: {colors.bg_primary};
            ",

            video {
                src: "{video.video_url}",
                controls: true,
                preload: "metadata",
                style: "width: 100%; aspect-ratio: 9 / 16; object-fit: cover; background: {colors.bg_inverse};",
            }

            div {
                style: "display: flex; align-items: center; gap: 12px; padding: 12px 14px;",
                div {
                    style: "flex: 1; min-width: 0;",
                    div {
                        class: "video-title",
                        style: "
                            font-weight: 600;
                            overflow: hidden;
                            text-overflow: ellipsis;
                            white-space: nowrap;
                        ",
                        title: "{video.name}",
                        "{video.title}"
                    }
                    div {
                        style: "font-size: 12px; color: {colors.text_secondary};",
                        "{uploaded}"
                    }
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    disabled,
                    style: "padding: 6px 12px; font-size: 12px;",
                    onclick: move |_| on_delete.call(id.clone()),
                    "Delete"
                }
            }
        }
    }
}
