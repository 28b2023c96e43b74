//! Upload controller for the admin panel.
//!
//! One file at a time: the operator selects a video, the controller validates
//! its media type, uploads it under a timestamp key and reports a synthetic
//! progress value while the storage call is in flight. The progress is
//! cosmetic; it does not track transferred bytes.

use std::time::Duration;

use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::models::SelectedFile;
use crate::storage::VideoStorage;
use crate::util::unix_millis_now;
use crate::{Error, Result};

/// Interval between synthetic progress steps.
pub const PROGRESS_TICK: Duration = Duration::from_millis(200);
/// Amount added per step.
pub const PROGRESS_STEP: u8 = 10;
/// Highest value reached while the call is still in flight.
pub const PROGRESS_CEILING: u8 = 90;
/// Value reported once the call settles.
pub const PROGRESS_COMPLETE: u8 = 100;
/// How long a successful upload stays on screen before the selection clears.
pub const SUCCESS_DISPLAY_DELAY: Duration = Duration::from_secs(3);
/// Size limit shown to the operator. The storage service enforces it.
pub const ADVERTISED_MAX_UPLOAD_BYTES: u64 = 500 * 1024 * 1024;
/// Extension used when the picked file has none.
pub const DEFAULT_EXTENSION: &str = "mp4";

pub const INVALID_FILE_MESSAGE: &str = "Please select a valid video file";
pub const NO_FILE_MESSAGE: &str = "No file selected";

/// Build a collision-resistant object key: `{millis}.{ext}`.
#[must_use]
pub fn build_upload_key(file: &SelectedFile, now_millis: i64) -> String {
    let ext = file
        .extension()
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
    format!("{now_millis}.{ext}")
}

/// Synthetic progress counter: `0 → 90` in fixed steps, then `100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadProgress {
    value: u8,
}

impl UploadProgress {
    #[must_use]
    pub const fn value(self) -> u8 {
        self.value
    }

    /// Advance one step, never past the ceiling.
    pub fn advance(&mut self) -> u8 {
        self.value = self
            .value
            .saturating_add(PROGRESS_STEP)
            .min(PROGRESS_CEILING)
            .max(self.value);
        self.value
    }

    /// Jump to 100 once the call has settled.
    pub fn complete(&mut self) -> u8 {
        self.value = PROGRESS_COMPLETE;
        self.value
    }
}

/// What the upload panel shows next to the picker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    /// The picked file was refused before reaching storage.
    Rejected(String),
    Uploading,
    Succeeded {
        key: String,
        file_name: String,
    },
    /// The storage call failed; the message is the service's, verbatim.
    Failed(String),
}

impl UploadStatus {
    /// Text for the status banner, if any.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Idle | Self::Uploading => None,
            Self::Rejected(message) | Self::Failed(message) => Some(message.clone()),
            Self::Succeeded { file_name, .. } => {
                Some(format!("Video \"{file_name}\" successfully uploaded!"))
            }
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Rejected(_) | Self::Failed(_))
    }
}

/// Selection, status and progress of the single-file upload flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadController {
    selected: Option<SelectedFile>,
    status: UploadStatus,
    progress: u8,
}

impl UploadController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    #[must_use]
    pub const fn status(&self) -> &UploadStatus {
        &self.status
    }

    #[must_use]
    pub const fn progress(&self) -> u8 {
        self.progress
    }

    #[must_use]
    pub const fn is_uploading(&self) -> bool {
        matches!(self.status, UploadStatus::Uploading)
    }

    /// Accept `file` when its media type is `video/*`.
    ///
    /// A rejected file also clears any earlier selection.
    pub fn select_file(&mut self, file: SelectedFile) -> Result<()> {
        if !file.is_video() {
            tracing::warn!(
                "Rejected upload selection '{}' with type '{}'",
                file.name,
                file.content_type
            );
            self.selected = None;
            self.status = UploadStatus::Rejected(INVALID_FILE_MESSAGE.to_string());
            return Err(Error::InvalidInput(INVALID_FILE_MESSAGE.to_string()));
        }

        tracing::debug!("Selected '{}' ({} bytes)", file.name, file.size());
        self.selected = Some(file);
        self.status = UploadStatus::Idle;
        Ok(())
    }

    /// Clear the selection and any status message. Idempotent.
    pub fn remove_file(&mut self) {
        self.selected = None;
        self.status = UploadStatus::Idle;
        self.progress = 0;
    }

    /// Clear the selection after a success has been shown.
    ///
    /// Does nothing unless the last upload succeeded.
    pub fn acknowledge_success(&mut self) {
        if matches!(self.status, UploadStatus::Succeeded { .. }) {
            self.remove_file();
        }
    }

    /// Start an upload of the current selection.
    ///
    /// Without a selection this only sets a failure status; storage is never
    /// touched.
    pub fn begin_upload(&mut self) -> Result<PendingUpload> {
        if self.is_uploading() {
            return Err(Error::InvalidInput(
                "An upload is already in progress".to_string(),
            ));
        }

        let Some(file) = self.selected.clone() else {
            self.status = UploadStatus::Failed(NO_FILE_MESSAGE.to_string());
            return Err(Error::InvalidInput(NO_FILE_MESSAGE.to_string()));
        };

        let key = build_upload_key(&file, unix_millis_now());
        self.status = UploadStatus::Uploading;
        self.progress = 0;
        Ok(PendingUpload { key, file })
    }

    /// Mirror a value reported by [`PendingUpload::run`] while uploading.
    ///
    /// Ignored outside an upload; never moves backwards.
    pub fn report_progress(&mut self, value: u8) {
        if self.is_uploading() {
            self.progress = self.progress.max(value.min(PROGRESS_COMPLETE));
        }
    }

    /// Record the outcome of a [`PendingUpload::run`].
    ///
    /// Progress is reset to 0. On failure the selection is kept so the
    /// operator can retry without picking the file again.
    pub fn finish(&mut self, result: &Result<String>) {
        self.progress = 0;
        self.status = match result {
            Ok(key) => UploadStatus::Succeeded {
                key: key.clone(),
                file_name: self
                    .selected
                    .as_ref()
                    .map(|file| file.name.clone())
                    .unwrap_or_default(),
            },
            Err(error) => UploadStatus::Failed(error.user_message()),
        };
    }

    /// Upload the current selection, reporting progress through `on_progress`.
    ///
    /// Returns the object key on success.
    pub async fn upload<S>(&mut self, storage: &S, mut on_progress: impl FnMut(u8)) -> Result<String>
    where
        S: VideoStorage + ?Sized,
    {
        let pending = self.begin_upload()?;
        let progress = &mut self.progress;
        let result = pending
            .run(storage, |value| {
                *progress = value;
                on_progress(value);
            })
            .await;
        self.finish(&result);
        result
    }
}

/// An upload that has been started but not yet sent to storage.
///
/// Owns a copy of the selection so the controller is not borrowed while the
/// call is in flight.
#[derive(Debug, Clone)]
pub struct PendingUpload {
    key: String,
    file: SelectedFile,
}

impl PendingUpload {
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn file(&self) -> &SelectedFile {
        &self.file
    }

    /// Send the file to storage.
    ///
    /// `on_progress` receives non-decreasing values up to 90 while the call
    /// is in flight and exactly one 100 once it settles, success or failure.
    pub async fn run<S>(self, storage: &S, mut on_progress: impl FnMut(u8)) -> Result<String>
    where
        S: VideoStorage + ?Sized,
    {
        let Self { key, file } = self;
        tracing::info!(
            "Uploading '{}' as '{}' ({} bytes)",
            file.name,
            key,
            file.size()
        );

        let mut progress = UploadProgress::default();
        let mut ticker = interval_at(Instant::now() + PROGRESS_TICK, PROGRESS_TICK);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let result = {
            let upload = storage.upload(&key, file.bytes, &file.content_type);
            tokio::pin!(upload);

            loop {
                tokio::select! {
                    biased;
                    result = &mut upload => break result,
                    _ = ticker.tick() => {
                        let before = progress.value();
                        let value = progress.advance();
                        if value != before {
                            on_progress(value);
                        }
                    }
                }
            }
        };

        on_progress(progress.complete());

        match result {
            Ok(()) => {
                tracing::info!("Uploaded video '{key}'");
                Ok(key)
            }
            Err(error) => {
                tracing::error!("Error uploading video '{key}': {error}");
                Err(error)
            }
        }
    }
}
