//! Admin dashboard - the bucket's clips with delete

use dioxus::prelude::*;

use jzer_core::delete::{remove_video, DeleteController, DeleteOutcome, DeleteState};

use crate::components::{
    AdminNav, Button, ButtonVariant, ConfirmModal, EmptyState, LoadingState, MessageBanner,
    VideoCard,
};
use crate::loader::{refresh_library, update_if_mounted};
use crate::state::{AppState, View};
use crate::theme::{palette, HEADING_FONT};

#[component]
pub fn AdminDashboard() -> Element {
    let mut state = use_context::<AppState>();
    let mut delete = use_signal(DeleteController::new);
    let mut delete_error = use_signal(|| None::<String>);
    let colors = palette();

    let library = (state.library)();
    let storage_error = (state.storage_error)();
    let (confirming, deleting, target_title) = {
        let controller = delete.read();
        (
            controller.is_confirming(),
            matches!(controller.state(), DeleteState::Deleting(_)),
            controller.target().map(|asset| asset.title.clone()),
        )
    };

    let on_request_delete = move |id: String| {
        delete_error.set(None);
        let videos = state.library.read().videos().to_vec();
        delete.write().request_delete(&id, &videos);
    };

    let on_confirm = move |()| {
        let storage = match state.storage_or_error() {
            Ok(storage) => storage,
            Err(message) => {
                delete.write().cancel();
                delete_error.set(Some(message));
                return;
            }
        };
        let Some(asset) = delete.write().begin_confirm() else {
            return;
        };

        spawn_forever(async move {
            let result = remove_video(storage.as_ref(), &asset).await;
            let outcome = DeleteOutcome::from_result(asset, result);
            update_if_mounted(delete, DeleteController::settle);
            match outcome {
                DeleteOutcome::Deleted(asset) => {
                    state.library.write().remove(&asset.name);
                    refresh_library(state);
                }
                DeleteOutcome::Failed { message, .. } => {
                    update_if_mounted(delete_error, |error| *error = Some(message));
                }
            }
        });
    };

    let confirm_message = target_title
        .map(|title| format!("\"{title}\" will be removed from the site. This cannot be undone."))
        .unwrap_or_default();

    rsx! {
        div {
            style: "height: 100vh; overflow-y: auto; background: {colors.bg_secondary};",
            AdminNav {}

            main {
                style: "padding: 32px 40px; max-width: 1200px; margin: 0 auto;",

                div {
                    style: "display: flex; align-items: center; margin-bottom: 24px;",
                    h1 {
                        style: "flex: 1; margin: 0; font-family: {HEADING_FONT};",
                        "Videos"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| state.view.set(View::AdminUpload),
                        "+ Upload video"
                    }
                }

                if let Some(message) = delete_error() {
                    MessageBanner { message }
                }

                if let Some(message) = storage_error {
                    MessageBanner { message }
                } else if library.is_loading() {
                    LoadingState {}
                } else if let Some(message) = library.error() {
                    MessageBanner {
                        message: message.to_string(),
                        on_retry: move |()| refresh_library(state),
                    }
                } else if library.videos().is_empty() {
                    EmptyState {
                        title: "No videos uploaded",
                        hint: "Upload a clip to show it in the stories strip.",
                    }
                } else {
                    div {
                        class: "video-grid",
                        style: "
                            display: grid;
                            grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
                            gap: 20px;
                        ",
                        for video in library.videos().iter().cloned() {
                            VideoCard {
                                key: "{video.id}",
                                video,
                                disabled: confirming,
                                on_delete: on_request_delete,
                            }
                        }
                    }
                }
            }

            if confirming {
                ConfirmModal {
                    title: "Delete video?",
                    message: confirm_message,
                    confirm_label: "Delete",
                    busy: deleting,
                    on_confirm,
                    on_cancel: move |()| delete.write().cancel(),
                }
            }
        }
    }
}
