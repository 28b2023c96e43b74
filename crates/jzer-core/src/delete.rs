//! Confirm-then-delete flow for the admin dashboard.

use crate::models::VideoAsset;
use crate::storage::VideoStorage;
use crate::Result;

/// Message shown when the storage delete call fails.
pub const DELETE_ERROR_MESSAGE: &str = "Failed to delete video from storage";

/// Where the delete flow currently stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeleteState {
    #[default]
    Idle,
    /// The confirmation modal is open for this asset.
    PendingConfirm(VideoAsset),
    /// The storage call for this asset is in flight.
    Deleting(VideoAsset),
}

/// Result of a confirmed delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The object is gone; drop it from the list or refetch.
    Deleted(VideoAsset),
    /// The object is still there.
    Failed { asset: VideoAsset, message: String },
}

impl DeleteOutcome {
    /// Classify a storage result for `asset`.
    ///
    /// Does not depend on the controller, so the outcome can still be applied
    /// to the library after the dashboard that started the delete is gone.
    pub fn from_result(asset: VideoAsset, result: Result<()>) -> Self {
        match result {
            Ok(()) => {
                tracing::info!("Deleted video '{}'", asset.name);
                Self::Deleted(asset)
            }
            Err(error) => {
                tracing::error!("Error deleting video '{}': {error}", asset.name);
                Self::Failed {
                    asset,
                    message: DELETE_ERROR_MESSAGE.to_string(),
                }
            }
        }
    }
}

/// State machine `Idle → PendingConfirm → Deleting → Idle`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteController {
    state: DeleteState,
}

impl DeleteController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &DeleteState {
        &self.state
    }

    /// Whether the confirmation modal should be shown.
    #[must_use]
    pub const fn is_confirming(&self) -> bool {
        matches!(
            self.state,
            DeleteState::PendingConfirm(_) | DeleteState::Deleting(_)
        )
    }

    /// Asset awaiting confirmation or being deleted.
    #[must_use]
    pub const fn target(&self) -> Option<&VideoAsset> {
        match &self.state {
            DeleteState::Idle => None,
            DeleteState::PendingConfirm(asset) | DeleteState::Deleting(asset) => Some(asset),
        }
    }

    /// Open the confirmation for the asset with `id`.
    ///
    /// Unknown ids (a stale list) and requests outside `Idle` are ignored.
    /// Returns `true` when the confirmation opened.
    pub fn request_delete(&mut self, id: &str, videos: &[VideoAsset]) -> bool {
        if self.state != DeleteState::Idle {
            return false;
        }
        let Some(asset) = videos.iter().find(|video| video.id == id) else {
            tracing::debug!("Ignoring delete request for unknown video id {id}");
            return false;
        };
        self.state = DeleteState::PendingConfirm(asset.clone());
        true
    }

    /// Close the confirmation without touching storage.
    pub fn cancel(&mut self) {
        if matches!(self.state, DeleteState::PendingConfirm(_)) {
            self.state = DeleteState::Idle;
        }
    }

    /// Move `PendingConfirm → Deleting` and hand out the asset to delete.
    ///
    /// Returns `None` from any other state.
    pub fn begin_confirm(&mut self) -> Option<VideoAsset> {
        let DeleteState::PendingConfirm(asset) = &self.state else {
            return None;
        };
        let asset = asset.clone();
        self.state = DeleteState::Deleting(asset.clone());
        Some(asset)
    }

    /// Record the storage result and return to `Idle`.
    pub fn finish(&mut self, asset: VideoAsset, result: Result<()>) -> DeleteOutcome {
        self.settle();
        DeleteOutcome::from_result(asset, result)
    }

    /// Return to `Idle` once the storage call is over, whatever its result.
    pub fn settle(&mut self) {
        self.state = DeleteState::Idle;
    }

    /// Confirm the pending delete, removing the object by its name.
    ///
    /// Returns `None` when no confirmation is pending.
    pub async fn confirm<S>(&mut self, storage: &S) -> Option<DeleteOutcome>
    where
        S: VideoStorage + ?Sized,
    {
        let asset = self.begin_confirm()?;
        let result = remove_video(storage, &asset).await;
        Some(self.finish(asset, result))
    }
}

/// Remove one asset's object from the bucket. Objects are addressed by name.
pub async fn remove_video<S>(storage: &S, asset: &VideoAsset) -> Result<()>
where
    S: VideoStorage + ?Sized,
{
    storage.remove(std::slice::from_ref(&asset.name)).await
}
