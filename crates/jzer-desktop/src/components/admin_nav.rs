use dioxus::prelude::*;

use crate::state::{AppState, View};
use crate::theme::{palette, HEADING_FONT};

/// Admin panel header with links between the admin views and back to the site.
#[component]
pub fn AdminNav() -> Element {
    let mut state = use_context::<AppState>();
    let colors = palette();
    let current = (state.view)();
    let storage_label = (state.storage_label)();

    let links = [
        (View::AdminDashboard, "Dashboard"),
        (View::AdminUpload, "Upload"),
        (View::Home, "View site"),
    ];

    rsx! {
        header {
            class: "admin-nav",
            style: "
                display: flex;
                align-items: center;
                gap: 24px;
                padding: 16px 40px;
                background: {colors.bg_inverse};
                color: {colors.text_inverse};
            ",
            div {
                style: "font-family: {HEADING_FONT}; font-size: 20px; flex: 1;",
                "JZER "
                span { style: "color: {colors.gold};", "Admin" }
                if let Some(label) = storage_label {
                    span {
                        style: "margin-left: 12px; font-family: monospace; font-size: 12px; opacity: 0.6;",
                        "{label}"
                    }
                }
            }
            for (target, label) in links {
                {
                    let color = if target == current { colors.gold } else { colors.text_inverse };
                    rsx! {
                        a {
                            key: "{label}",
                            href: "#",
                            style: "color: {color}; text-decoration: none; font-size: 14px;",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                state.view.set(target);
                            },
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
