//! Data models for the Salon JZER video library

mod file;
mod video;

pub use file::SelectedFile;
pub use video::{video_title, StoredObject, VideoAsset};
