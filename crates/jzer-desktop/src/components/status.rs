//! Loading, empty and error placeholders

use dioxus::prelude::*;

use super::button::{Button, ButtonVariant};
use crate::theme::palette;

#[component]
pub fn LoadingState(#[props(default = "Loading videos...".to_string())] label: String) -> Element {
    let colors = palette();

    rsx! {
        div {
            class: "loading-state",
            style: "
                padding: 48px 20px;
                text-align: center;
                color: {colors.text_secondary};
                letter-spacing: 0.05em;
            ",
            "{label}"
        }
    }
}

#[component]
pub fn EmptyState(title: String, hint: String) -> Element {
    let colors = palette();

    rsx! {
        div {
            class: "empty-state",
            style: "
                padding: 48px 20px;
                text-align: center;
                border: 1px dashed {colors.border};
                border-radius: 8px;
            ",
            div { style: "font-weight: 600; margin-bottom: 6px;", "{title}" }
            div { style: "color: {colors.text_secondary}; font-size: 14px;", "{hint}" }
        }
    }
}

/// Inline message with an optional retry action.
#[component]
pub fn MessageBanner(
    message: String,
    #[props(default)] success: bool,
    #[props(default)] on_retry: Option<EventHandler<()>>,
) -> Element {
    let colors = palette();
    let (background, foreground) = if success {
        (colors.success_bg, colors.success)
    } else {
        (colors.error_bg, colors.error)
    };

    rsx! {
        div {
            class: if success { "banner success" } else { "banner error" },
            style: "
                display: flex;
                align-items: center;
                gap: 16px;
                padding: 12px 16px;
                margin-bottom: 20px;
                border-left: 4px solid {foreground};
                border-radius: 4px;
                background: {background};
                color: {foreground};
            ",
            span { style: "flex: 1;", "{message}" }
            if let Some(on_retry) = on_retry {
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
            }
        }
    }
}
