//! User-selected upload file

use bytes::Bytes;

/// A file picked by the operator for upload, held in memory.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Original file name as picked.
    pub name: String,
    /// Declared media type, e.g. `video/mp4`.
    pub content_type: String,
    /// File contents. Clones share the buffer.
    pub bytes: Bytes,
}

impl SelectedFile {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Size in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Whether the declared media type is a video type.
    #[must_use]
    pub fn is_video(&self) -> bool {
        self.content_type
            .trim()
            .to_ascii_lowercase()
            .starts_with("video/")
    }

    /// Lowercased extension of the original file name, if any.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.name.trim().rsplit_once('.')?;
        let ext = ext.trim().to_ascii_lowercase();
        if ext.is_empty() || !ext.chars().all(|ch| ch.is_ascii_alphanumeric()) {
            None
        } else {
            Some(ext)
        }
    }
}

impl std::fmt::Debug for SelectedFile {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_video_checks_media_type_prefix() {
        assert!(SelectedFile::new("a.mp4", "video/mp4", Vec::new()).is_video());
        assert!(SelectedFile::new("a.mov", " Video/QuickTime ", Vec::new()).is_video());
        assert!(!SelectedFile::new("a.png", "image/png", Vec::new()).is_video());
        assert!(!SelectedFile::new("a.mp4", "", Vec::new()).is_video());
    }

    #[test]
    fn extension_is_lowercased_and_optional() {
        assert_eq!(
            SelectedFile::new("Promo Cut.MOV", "video/quicktime", Vec::new()).extension(),
            Some("mov".to_string())
        );
        assert_eq!(
            SelectedFile::new("no-extension", "video/mp4", Vec::new()).extension(),
            None
        );
        assert_eq!(
            SelectedFile::new("weird.m p4", "video/mp4", Vec::new()).extension(),
            None
        );
    }

    #[test]
    fn debug_output_omits_file_bytes() {
        let file = SelectedFile::new("a.mp4", "video/mp4", vec![1, 2, 3]);
        let debug = format!("{file:?}");
        assert!(debug.contains("size: 3"));
        assert!(!debug.contains("[1, 2, 3]"));
    }

    #[test]
    fn clones_share_the_file_buffer() {
        let file = SelectedFile::new("a.mp4", "video/mp4", vec![0_u8; 4096]);
        let copy = file.clone();
        assert_eq!(copy.bytes.as_ptr(), file.bytes.as_ptr());
        assert_eq!(copy.size(), 4096);
    }
}
