//! Admin upload - pick one video and send it to the bucket

use dioxus::prelude::*;

use jzer_core::upload::{UploadController, ADVERTISED_MAX_UPLOAD_BYTES, SUCCESS_DISPLAY_DELAY};
use jzer_core::util::format_file_size;

use crate::components::{AdminNav, Button, ButtonVariant, MessageBanner};
use crate::files::pick_video_file;
use crate::loader::{refresh_library, update_if_mounted};
use crate::state::AppState;
use crate::theme::{palette, HEADING_FONT};

#[component]
pub fn AdminUpload() -> Element {
    let state = use_context::<AppState>();
    let mut upload = use_signal(UploadController::new);
    let mut picking = use_signal(|| false);
    let colors = palette();

    let (uploading, progress, status, selected) = {
        let controller = upload.read();
        (
            controller.is_uploading(),
            controller.progress(),
            controller.status().clone(),
            controller
                .selected()
                .map(|file| (file.name.clone(), format_file_size(file.size()))),
        )
    };
    let has_selection = selected.is_some();
    let max_size = format_file_size(ADVERTISED_MAX_UPLOAD_BYTES);

    let on_pick = move |_| {
        if upload.read().is_uploading() || picking() {
            return;
        }
        picking.set(true);
        spawn(async move {
            if let Some(file) = pick_video_file().await {
                // Rejections are recorded on the controller's status
                let _ = upload.write().select_file(file);
            }
            picking.set(false);
        });
    };

    let on_upload = move |_| {
        let storage = match state.storage_or_error() {
            Ok(storage) => storage,
            Err(message) => {
                tracing::warn!("Upload unavailable: {message}");
                return;
            }
        };
        let pending = match upload.write().begin_upload() {
            Ok(pending) => pending,
            Err(error) => {
                tracing::debug!("Upload not started: {error}");
                return;
            }
        };

        spawn_forever(async move {
            let result = pending
                .run(storage.as_ref(), |value| {
                    update_if_mounted(upload, |controller| controller.report_progress(value));
                })
                .await;
            update_if_mounted(upload, |controller| controller.finish(&result));

            if result.is_ok() {
                refresh_library(state);
                tokio::time::sleep(SUCCESS_DISPLAY_DELAY).await;
                update_if_mounted(upload, UploadController::acknowledge_success);
            }
        });
    };

    let storage_error = (state.storage_error)();
    let status_message = status.message();
    let is_success = !status.is_error();

    rsx! {
        div {
            style: "height: 100vh; overflow-y: auto; background: {colors.bg_secondary};",
            AdminNav {}

            main {
                style: "padding: 32px 40px; max-width: 720px; margin: 0 auto;",

                h1 {
                    style: "margin: 0 0 8px; font-family: {HEADING_FONT};",
                    "Upload a video"
                }
                p {
                    style: "margin: 0 0 24px; color: {colors.text_secondary};",
                    "Video files up to {max_size}. The clip appears in the stories strip once uploaded."
                }

                if let Some(message) = storage_error.clone() {
                    MessageBanner { message }
                }

                if let Some(message) = status_message {
                    MessageBanner { message, success: is_success }
                }

                div {
                    class: "upload-panel",
                    style: "
                        padding: 28px;
                        border: 2px dashed {colors.border};
                        border-radius: 8px;
                        background: {colors.bg_primary};
                    ",

                    if let Some((name, size)) = selected {
                        div {
                            style: "display: flex; align-items: center; gap: 16px; margin-bottom: 20px;",
                            div {
                                style: "flex: 1; min-width: 0;",
                                div {
                                    style: "font-weight: 600; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                                    "{name}"
                                }
                                div { style: "font-size: 13px; color: {colors.text_secondary};", "{size}" }
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                disabled: uploading,
                                onclick: move |_| upload.write().remove_file(),
                                "Remove"
                            }
                        }
                    } else {
                        div {
                            style: "margin-bottom: 20px; color: {colors.text_secondary};",
                            "No file selected"
                        }
                    }

                    if uploading {
                        div {
                            class: "progress",
                            style: "
                                height: 8px;
                                margin-bottom: 8px;
                                border-radius: 4px;
                                overflow: hidden;
                                background: {colors.bg_secondary};
                            ",
                            div {
                                style: "
                                    width: {progress}%;
                                    height: 100%;
                                    background: {colors.gold};
                                    transition: width 0.2s;
                                ",
                            }
                        }
                        div {
                            style: "margin-bottom: 20px; font-size: 13px; color: {colors.text_secondary};",
                            "Uploading... {progress}%"
                        }
                    }

                    div {
                        style: "display: flex; gap: 12px;",
                        Button {
                            variant: ButtonVariant::Secondary,
                            disabled: uploading || picking(),
                            onclick: on_pick,
                            if has_selection { "Choose another" } else { "Choose video" }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: uploading || !has_selection || storage_error.is_some(),
                            onclick: on_upload,
                            if uploading { "Uploading..." } else { "Upload" }
                        }
                    }
                }
            }
        }
    }
}
