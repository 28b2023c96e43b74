//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;

use jzer_core::library::VideoLibrary;
use jzer_core::nav::NavTracker;
use jzer_core::VideoStorage;

/// Screen shown in the main window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    AdminDashboard,
    AdminUpload,
}

impl View {
    /// Route path the view would have on the web site.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::AdminDashboard => "/admin",
            Self::AdminUpload => "/admin/upload",
        }
    }
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Current screen
    pub view: Signal<View>,
    /// Video bucket, when storage is configured
    pub storage: Signal<Option<Arc<dyn VideoStorage>>>,
    /// Backend label and bucket, for the admin header
    pub storage_label: Signal<Option<String>>,
    /// Why storage could not be opened
    pub storage_error: Signal<Option<String>>,
    /// Bucket contents shared by the stories strip and the dashboard
    pub library: Signal<VideoLibrary>,
    /// Active header entry
    pub nav: Signal<NavTracker>,
    /// Mounted home sections by element id, for scroll tracking
    pub sections: Signal<HashMap<String, Rc<MountedData>>>,
}

impl AppState {
    /// Storage handle, or the message to show instead.
    pub fn storage_or_error(&self) -> Result<Arc<dyn VideoStorage>, String> {
        if let Some(storage) = self.storage.read().clone() {
            return Ok(storage);
        }
        Err(self
            .storage_error
            .read()
            .clone()
            .unwrap_or_else(|| "Video storage is not configured.".to_string()))
    }
}
