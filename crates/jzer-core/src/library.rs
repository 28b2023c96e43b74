//! Video library reader.
//!
//! Lists the bucket, hides system entries, derives titles and public URLs and
//! orders the result newest first. [`VideoLibrary`] keeps the last result
//! together with the loading/error flags the views render.

use chrono::{DateTime, Utc};

use crate::models::{StoredObject, VideoAsset};
use crate::storage::VideoStorage;
use crate::Result;

/// Shown when a failed list call carries no message of its own.
pub const FETCH_ERROR_FALLBACK: &str = "Failed to fetch videos from storage";

/// List the bucket and build the ordered asset sequence.
pub async fn fetch_videos<S>(storage: &S) -> Result<Vec<VideoAsset>>
where
    S: VideoStorage + ?Sized,
{
    let entries = storage.list().await?;
    Ok(build_video_assets(entries, storage, Utc::now()))
}

/// Filter hidden entries, map to assets and sort by `created_at` descending.
///
/// The sort is stable: entries with equal timestamps keep their list order.
pub fn build_video_assets<S>(
    entries: Vec<StoredObject>,
    storage: &S,
    now: DateTime<Utc>,
) -> Vec<VideoAsset>
where
    S: VideoStorage + ?Sized,
{
    let mut videos: Vec<VideoAsset> = entries
        .into_iter()
        .filter(|entry| !entry.is_hidden())
        .map(|entry| {
            let video_url = storage.public_url(&entry.name);
            VideoAsset::from_stored(entry, video_url, now)
        })
        .collect();

    videos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    videos
}

/// Ticket for one in-flight load, issued by [`VideoLibrary::begin_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest(u64);

/// Observable video list state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoLibrary {
    videos: Vec<VideoAsset>,
    loading: bool,
    error: Option<String>,
    latest_request: u64,
}

impl VideoLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current assets, newest first.
    #[must_use]
    pub fn videos(&self) -> &[VideoAsset] {
        &self.videos
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Look up an asset by id in the current list.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&VideoAsset> {
        self.videos.iter().find(|video| video.id == id)
    }

    /// Drop an asset locally after its object was removed from the bucket.
    ///
    /// Returns `true` when an asset with that name was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.videos.len();
        self.videos.retain(|video| video.name != name);
        self.videos.len() != before
    }

    /// Mark a load as started and return its ticket.
    ///
    /// Issuing a new ticket supersedes every earlier one.
    pub fn begin_load(&mut self) -> LoadRequest {
        self.latest_request += 1;
        self.loading = true;
        self.error = None;
        LoadRequest(self.latest_request)
    }

    /// Apply a finished load. Results for superseded tickets are discarded.
    ///
    /// Returns `true` when the result was applied.
    pub fn apply(&mut self, request: LoadRequest, result: Result<Vec<VideoAsset>>) -> bool {
        if request.0 != self.latest_request {
            tracing::debug!(
                "Discarding stale video list (request {}, latest {})",
                request.0,
                self.latest_request
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(videos) => {
                tracing::info!("Loaded {} videos from storage", videos.len());
                self.videos = videos;
                self.error = None;
            }
            Err(error) => {
                tracing::error!("Error fetching videos: {error}");
                let message = error.user_message();
                self.videos.clear();
                self.error = Some(if message.trim().is_empty() {
                    FETCH_ERROR_FALLBACK.to_string()
                } else {
                    message
                });
            }
        }
        true
    }

    /// Load the bucket contents into this library.
    pub async fn load<S>(&mut self, storage: &S) -> &[VideoAsset]
    where
        S: VideoStorage + ?Sized,
    {
        let request = self.begin_load();
        let result = fetch_videos(storage).await;
        self.apply(request, result);
        &self.videos
    }

    /// Reload the bucket contents; same contract as [`Self::load`].
    pub async fn refetch<S>(&mut self, storage: &S) -> &[VideoAsset]
    where
        S: VideoStorage + ?Sized,
    {
        self.load(storage).await
    }
}
