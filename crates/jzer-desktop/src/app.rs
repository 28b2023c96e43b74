//! Main application component

use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::desktop::window;
use dioxus::prelude::*;

use jzer_core::config::{open_storage, StorageSettings};
use jzer_core::library::VideoLibrary;
use jzer_core::nav::{default_sections, page_title, NavTracker};
use jzer_core::VideoStorage;

use crate::loader::refresh_library;
use crate::state::{AppState, View};
use crate::theme::{palette, BODY_FONT};
use crate::views::{AdminDashboard, AdminUpload, Home};

/// Initial threshold until the window reports its real height.
const DEFAULT_VIEWPORT_HEIGHT: f64 = 860.0;

struct OpenedStorage {
    storage: Option<Arc<dyn VideoStorage>>,
    label: Option<String>,
    error: Option<String>,
}

fn open_configured_storage() -> OpenedStorage {
    let settings = match StorageSettings::from_env() {
        Ok(Some(settings)) => settings,
        Ok(None) => {
            tracing::warn!("No video storage configured; set SUPABASE_* or R2_* variables");
            return OpenedStorage {
                storage: None,
                label: None,
                error: Some(
                    "Video storage is not configured. Set SUPABASE_URL and SUPABASE_ANON_KEY, or the R2_* variables."
                        .to_string(),
                ),
            };
        }
        Err(error) => {
            tracing::error!("Invalid storage configuration: {error}");
            return OpenedStorage {
                storage: None,
                label: None,
                error: Some(error.user_message()),
            };
        }
    };

    let label = format!("{} · {}", settings.backend_name(), settings.bucket());
    match open_storage(settings) {
        Ok(storage) => OpenedStorage {
            storage: Some(storage),
            label: Some(label),
            error: None,
        },
        Err(error) => {
            tracing::error!("Failed to open video storage: {error}");
            OpenedStorage {
                storage: None,
                label: Some(label),
                error: Some(error.user_message()),
            }
        }
    }
}

/// Root application component
#[component]
pub fn App() -> Element {
    let opened = use_hook(|| Rc::new(open_configured_storage()));

    let view = use_signal(View::default);
    let storage = use_signal(|| opened.storage.clone());
    let storage_label = use_signal(|| opened.label.clone());
    let storage_error = use_signal(|| opened.error.clone());
    let library = use_signal(VideoLibrary::new);
    let nav = use_signal(|| NavTracker::for_viewport(default_sections(), DEFAULT_VIEWPORT_HEIGHT));
    let sections = use_signal(HashMap::new);
    let mut library_requested = use_signal(|| false);

    let state = use_context_provider(|| AppState {
        view,
        storage,
        storage_label,
        storage_error,
        library,
        nav,
        sections,
    });

    // Load the bucket once on mount
    use_effect(move || {
        if library_requested() {
            return;
        }
        library_requested.set(true);
        refresh_library(state);
    });

    use_effect(move || {
        let title = page_title(view().path());
        window().set_title(&title);
    });

    let colors = palette();

    rsx! {
        div {
            class: "app-container",
            style: "
                height: 100vh;
                margin: 0;
                font-family: {BODY_FONT};
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",
            match view() {
                View::Home => rsx! { Home {} },
                View::AdminDashboard => rsx! { AdminDashboard {} },
                View::AdminUpload => rsx! { AdminUpload {} },
            }
        }
    }
}
