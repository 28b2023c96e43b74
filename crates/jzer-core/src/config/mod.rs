//! Storage backend selection.
//!
//! The site talks to exactly one video bucket. Which backend serves it is
//! decided from the environment: a Supabase project when `SUPABASE_URL` and
//! `SUPABASE_ANON_KEY` are set, otherwise a Cloudflare R2 bucket when the
//! `R2_*` variables are set.

use std::sync::Arc;

use crate::storage::{R2Config, R2Storage, SupabaseConfig, SupabaseStorage, VideoStorage};
use crate::Result;

/// Resolved storage backend configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageSettings {
    Supabase(SupabaseConfig),
    R2(R2Config),
}

impl StorageSettings {
    /// Load backend settings from environment variables.
    ///
    /// Returns `Ok(None)` when no backend is configured at all. A partially
    /// configured backend is an error, even when the other one is complete.
    pub fn from_env() -> Result<Option<Self>> {
        select_backend(SupabaseConfig::from_env(), R2Config::from_env())
    }

    /// Short backend name for logs and the admin header.
    #[must_use]
    pub const fn backend_name(&self) -> &'static str {
        match self {
            Self::Supabase(_) => "supabase",
            Self::R2(_) => "r2",
        }
    }

    /// Bucket the videos are stored in.
    #[must_use]
    pub fn bucket(&self) -> &str {
        match self {
            Self::Supabase(config) => &config.bucket,
            Self::R2(config) => &config.bucket,
        }
    }
}

/// Build the storage collaborator for the given settings.
pub fn open_storage(settings: StorageSettings) -> Result<Arc<dyn VideoStorage>> {
    tracing::info!(
        "Opening {} video bucket '{}'",
        settings.backend_name(),
        settings.bucket()
    );
    match settings {
        StorageSettings::Supabase(config) => Ok(Arc::new(SupabaseStorage::new(config)?)),
        StorageSettings::R2(config) => Ok(Arc::new(R2Storage::new(config))),
    }
}

fn select_backend(
    supabase: Result<Option<SupabaseConfig>>,
    r2: Result<Option<R2Config>>,
) -> Result<Option<StorageSettings>> {
    let supabase = supabase?;
    let r2 = r2?;

    if let Some(config) = supabase {
        if r2.is_some() {
            tracing::warn!("Both Supabase and R2 storage are configured; using Supabase");
        }
        return Ok(Some(StorageSettings::Supabase(config)));
    }

    Ok(r2.map(StorageSettings::R2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn supabase() -> SupabaseConfig {
        SupabaseConfig {
            url: "https://project.supabase.co".to_string(),
            anon_key: "anon".to_string(),
            bucket: "videos".to_string(),
        }
    }

    fn r2() -> R2Config {
        R2Config {
            account_id: "account".to_string(),
            bucket: "clips".to_string(),
            access_key_id: "AKID".to_string(),
            secret_access_key: "SECRET".to_string(),
            public_base_url: "https://cdn.example.com".to_string(),
        }
    }

    #[test]
    fn select_backend_prefers_supabase() {
        let selected = select_backend(Ok(Some(supabase())), Ok(Some(r2())))
            .unwrap()
            .unwrap();
        assert_eq!(selected.backend_name(), "supabase");
        assert_eq!(selected.bucket(), "videos");
    }

    #[test]
    fn select_backend_falls_back_to_r2() {
        let selected = select_backend(Ok(None), Ok(Some(r2()))).unwrap().unwrap();
        assert_eq!(selected, StorageSettings::R2(r2()));
    }

    #[test]
    fn select_backend_none_when_unconfigured() {
        assert!(select_backend(Ok(None), Ok(None)).unwrap().is_none());
    }

    #[test]
    fn select_backend_surfaces_partial_configuration() {
        let err = select_backend(
            Ok(Some(supabase())),
            Err(Error::InvalidInput("R2 configuration is incomplete".to_string())),
        )
        .unwrap_err();
        assert!(err.to_string().contains("R2 configuration is incomplete"));
    }
}
