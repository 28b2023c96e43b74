//! Video asset model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A raw entry returned by the object-storage list operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredObject {
    /// Identifier assigned by the storage service, when it reports one.
    pub id: Option<String>,
    /// Object key within the bucket.
    pub name: String,
    /// Creation timestamp reported by the storage service.
    pub created_at: Option<DateTime<Utc>>,
}

impl StoredObject {
    #[must_use]
    pub fn new(name: impl Into<String>, created_at: Option<DateTime<Utc>>) -> Self {
        Self {
            id: None,
            name: name.into(),
            created_at,
        }
    }

    /// Hidden/system entries such as `.DS_Store` or `.emptyFolderPlaceholder`.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// One stored video as shown by the site and the admin panel.
///
/// Derived from a [`StoredObject`] at read time; never persisted by this app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoAsset {
    /// Opaque identifier (storage id, or the object name when none is reported).
    pub id: String,
    /// Raw object key, extension included.
    pub name: String,
    /// `name` without its trailing extension.
    pub title: String,
    /// Public URL resolved from `name`.
    pub video_url: String,
    /// Always `None`: no thumbnails are generated.
    pub thumbnail_url: Option<String>,
    /// Storage creation time, or the read time when the service reports none.
    pub created_at: DateTime<Utc>,
}

impl VideoAsset {
    /// Build an asset from a list entry, its public URL and a fallback timestamp.
    #[must_use]
    pub fn from_stored(object: StoredObject, video_url: String, now: DateTime<Utc>) -> Self {
        let title = video_title(&object.name);
        Self {
            id: object.id.unwrap_or_else(|| object.name.clone()),
            title,
            video_url,
            thumbnail_url: None,
            created_at: object.created_at.unwrap_or(now),
            name: object.name,
        }
    }
}

/// Strip the trailing `.ext` from an object name.
///
/// The extension is the last non-empty run after a `.` that contains no `/`.
/// Names without such a suffix are returned unchanged.
///
/// # Examples
///
/// ```
/// use jzer_core::models::video_title;
///
/// assert_eq!(video_title("clip.mp4"), "clip");
/// assert_eq!(video_title("a.b.mov"), "a.b");
/// assert_eq!(video_title("intro"), "intro");
/// ```
#[must_use]
pub fn video_title(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() && !ext.contains('/') => stem.to_string(),
        _ => name.to_string(),
    }
}
