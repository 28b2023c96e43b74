//! Site header with the section nav

use dioxus::html::ScrollBehavior;
use dioxus::prelude::*;

use crate::state::{AppState, View};
use crate::theme::{palette, HEADING_FONT};

/// Fixed header: brand, section links and the admin entry point.
#[component]
pub fn SiteHeader() -> Element {
    let mut state = use_context::<AppState>();
    let colors = palette();
    let nav = (state.nav)();

    let mut scroll_to_section = move |label: String| {
        let Some(id) = state.nav.write().select(&label) else {
            return;
        };
        let target = state.sections.read().get(&id).cloned();
        let Some(target) = target else {
            tracing::debug!("Section '{id}' is not mounted");
            return;
        };
        spawn(async move {
            if let Err(error) = target.scroll_to(ScrollBehavior::Smooth).await {
                tracing::warn!("Failed to scroll to section '{id}': {error:?}");
            }
        });
    };

    rsx! {
        header {
            class: "site-header",
            style: "
                position: sticky;
                top: 0;
                z-index: 10;
                display: flex;
                align-items: center;
                gap: 32px;
                padding: 16px 48px;
                background: {colors.bg_inverse};
                color: {colors.text_inverse};
            ",

            div {
                style: "
                    font-family: {HEADING_FONT};
                    font-size: 22px;
                    letter-spacing: 0.12em;
                ",
                "SALON "
                span { style: "color: {colors.gold};", "JZER" }
            }

            nav {
                style: "display: flex; gap: 24px; flex: 1;",
                for section in nav.sections().iter().cloned() {
                    {
                        let is_active = nav.is_active(&section.label);
                        let color = if is_active { colors.gold } else { colors.text_inverse };
                        let underline = if is_active { colors.gold } else { "transparent" };
                        let label = section.label.clone();

                        rsx! {
                            a {
                                key: "{section.id}",
                                href: "#{section.id}",
                                style: "
                                    color: {color};
                                    text-decoration: none;
                                    padding-bottom: 4px;
                                    border-bottom: 2px solid {underline};
                                    font-size: 14px;
                                    letter-spacing: 0.08em;
                                    text-transform: uppercase;
                                ",
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    scroll_to_section(label.clone());
                                },
                                "{section.label}"
                            }
                        }
                    }
                }
            }

            a {
                href: "#",
                style: "color: {colors.text_inverse}; font-size: 13px; opacity: 0.7; text-decoration: none;",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    state.view.set(View::AdminDashboard);
                },
                "Admin"
            }
        }
    }
}
