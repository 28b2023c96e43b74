//! Confirmation modal

use dioxus::prelude::*;

use super::button::{Button, ButtonVariant};
use crate::theme::{palette, HEADING_FONT};

/// Blocking yes/no dialog over the current view.
///
/// While `busy` both buttons are disabled and the backdrop ignores clicks.
#[component]
pub fn ConfirmModal(
    title: String,
    message: String,
    confirm_label: String,
    busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let colors = palette();
    let label = if busy {
        "Deleting...".to_string()
    } else {
        confirm_label
    };

    rsx! {
        div {
            class: "modal-backdrop",
            style: "
                position: fixed;
                inset: 0;
                display: flex;
                align-items: center;
                justify-content: center;
                background: {colors.overlay};
                z-index: 100;
            ",
            onclick: move |_| {
                if !busy {
                    on_cancel.call(());
                }
            },

            div {
                class: "modal",
                role: "dialog",
                style: "
                    width: 420px;
                    max-width: calc(100vw - 48px);
                    padding: 28px;
                    border-radius: 8px;
                    background: {colors.bg_primary};
                    box-shadow: 0 12px 40px rgba(0, 0, 0, 0.35);
                ",
                onclick: move |evt| evt.stop_propagation(),

                h2 {
                    style: "margin: 0 0 12px; font-family: {HEADING_FONT};",
                    "{title}"
                }
                p {
                    style: "margin: 0 0 24px; color: {colors.text_secondary}; line-height: 1.5;",
                    "{message}"
                }

                div {
                    style: "display: flex; justify-content: flex-end; gap: 12px;",
                    Button {
                        variant: ButtonVariant::Ghost,
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        "{label}"
                    }
                }
            }
        }
    }
}
