//! Object-storage collaborator and its backends.
//!
//! The site never stores anything itself: every video lives in a bucket of an
//! external object-storage service, reached through [`VideoStorage`].

#[cfg(test)]
mod memory;
mod r2;
mod supabase;

use async_trait::async_trait;
use bytes::Bytes;

use crate::models::StoredObject;
use crate::Result;

#[cfg(test)]
pub(crate) use memory::MemoryStorage;
pub use r2::{R2Config, R2Storage};
pub use supabase::{SupabaseConfig, SupabaseStorage, DEFAULT_VIDEO_BUCKET};

/// The four bucket operations the video flows depend on.
///
/// Implementations are bound to one bucket at construction time.
#[async_trait]
pub trait VideoStorage: Send + Sync {
    /// List every object in the bucket, in no particular order.
    async fn list(&self) -> Result<Vec<StoredObject>>;

    /// Store `bytes` under `key`. Fails when the key already exists.
    async fn upload(&self, key: &str, bytes: Bytes, content_type: &str) -> Result<()>;

    /// Remove the objects addressed by `keys`.
    async fn remove(&self, keys: &[String]) -> Result<()>;

    /// Deterministic public URL for `key`.
    fn public_url(&self, key: &str) -> String;
}

pub(crate) fn normalize_object_key(object_key: &str) -> Result<String> {
    let object_key = object_key.trim().trim_matches('/').to_string();
    if object_key.is_empty() {
        return Err(crate::Error::InvalidInput(
            "Video object key cannot be empty".to_string(),
        ));
    }
    if object_key.contains("..") {
        return Err(crate::Error::InvalidInput(
            "Video object key must not contain path traversal segments".to_string(),
        ));
    }
    Ok(object_key)
}

pub(crate) fn storage_error(
    backend: &str,
    operation: &str,
    bucket: &str,
    object_key: Option<&str>,
    error: impl std::fmt::Display,
) -> crate::Error {
    let target = object_key.map_or_else(|| bucket.to_string(), |key| format!("{bucket}/{key}"));
    tracing::error!("{backend} {operation} failed for {target}: {error}");
    crate::Error::Storage(error.to_string().replace('\n', " ").trim().to_string())
}
