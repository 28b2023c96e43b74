//! Picking a video file from disk.

use rfd::AsyncFileDialog;

use jzer_core::SelectedFile;

/// Extensions offered by the picker's video filter.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "m4v", "webm", "avi", "mkv"];

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Media type for a picked file, guessed from its name.
#[must_use]
pub fn content_type_for(file_name: &str) -> String {
    mime_guess::from_path(file_name)
        .first_raw()
        .unwrap_or(FALLBACK_CONTENT_TYPE)
        .to_string()
}

/// Ask the operator for one file and read it into memory.
///
/// Returns `None` when the dialog is dismissed or the name is empty.
pub async fn pick_video_file() -> Option<SelectedFile> {
    let handle = AsyncFileDialog::new()
        .set_title("Select a video")
        .add_filter("Video", VIDEO_EXTENSIONS)
        .add_filter("All files", &["*"])
        .pick_file()
        .await?;

    let name = handle.file_name();
    if name.trim().is_empty() {
        tracing::warn!("Picked file has an empty filename");
        return None;
    }

    let content_type = content_type_for(&name);
    let bytes = handle.read().await;
    Some(SelectedFile::new(name, content_type, bytes))
}
