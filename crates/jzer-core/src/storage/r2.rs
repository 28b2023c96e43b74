//! Cloudflare R2 video bucket over the S3-compatible API.

use std::env;

use async_trait::async_trait;
use aws_credential_types::Credentials;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::types::Object;
use aws_sdk_s3::{primitives::ByteStream, Client};
use aws_types::region::Region;
use bytes::Bytes;
use chrono::{DateTime, Utc};

use super::{normalize_object_key, storage_error, VideoStorage};
use crate::models::StoredObject;
use crate::util::is_http_url;
use crate::{Error, Result};

const ENV_ACCOUNT_ID: &str = "R2_ACCOUNT_ID";
const ENV_BUCKET: &str = "R2_BUCKET";
const ENV_ACCESS_KEY_ID: &str = "R2_ACCESS_KEY_ID";
const ENV_SECRET_ACCESS_KEY: &str = "R2_SECRET_ACCESS_KEY";
const ENV_PUBLIC_BASE_URL: &str = "R2_PUBLIC_BASE_URL";

/// Cloudflare R2 configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct R2Config {
    /// Cloudflare account identifier.
    pub account_id: String,
    /// R2 bucket name.
    pub bucket: String,
    /// Access key id for S3-compatible auth.
    pub access_key_id: String,
    /// Secret access key for S3-compatible auth.
    pub secret_access_key: String,
    /// Public URL base the bucket is served from.
    pub public_base_url: String,
}

impl std::fmt::Debug for R2Config {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("R2Config")
            .field("account_id", &self.account_id)
            .field("bucket", &self.bucket)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[REDACTED]")
            .field("public_base_url", &self.public_base_url)
            .finish()
    }
}

impl R2Config {
    /// Load R2 configuration from environment variables.
    ///
    /// Returns `Ok(None)` when no R2 variables are set.
    /// Returns an error when only a partial configuration is provided.
    pub fn from_env() -> Result<Option<Self>> {
        parse_config(|key| env::var(key).ok())
    }

    /// Cloudflare R2 S3-compatible endpoint URL.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        format!("https://{}.r2.cloudflarestorage.com", self.account_id)
    }
}

/// R2-backed video bucket.
#[derive(Clone, Debug)]
pub struct R2Storage {
    config: R2Config,
    client: Client,
}

impl R2Storage {
    #[must_use]
    pub fn new(config: R2Config) -> Self {
        let client = build_s3_client(&config);
        Self { config, client }
    }

    /// Check that the configured bucket is reachable with current credentials.
    pub async fn bucket_is_reachable(&self) -> Result<()> {
        self.client
            .head_bucket()
            .bucket(&self.config.bucket)
            .send()
            .await
            .map_err(|error| {
                storage_error(
                    "R2",
                    "head_bucket",
                    &self.config.bucket,
                    None,
                    DisplayErrorContext(error),
                )
            })?;
        Ok(())
    }
}

#[async_trait]
impl VideoStorage for R2Storage {
    async fn list(&self) -> Result<Vec<StoredObject>> {
        let mut objects = Vec::new();
        let mut continuation_token: Option<String> = None;

        loop {
            let response = self
                .client
                .list_objects_v2()
                .bucket(&self.config.bucket)
                .set_continuation_token(continuation_token.take())
                .send()
                .await
                .map_err(|error| {
                    storage_error(
                        "R2",
                        "list_objects_v2",
                        &self.config.bucket,
                        None,
                        DisplayErrorContext(error),
                    )
                })?;

            objects.extend(response.contents().iter().filter_map(stored_object_from));

            match response.next_continuation_token() {
                Some(token) if response.is_truncated().unwrap_or(false) => {
                    continuation_token = Some(token.to_string());
                }
                _ => break,
            }
        }

        tracing::debug!(
            "R2 listed {} objects in {}",
            objects.len(),
            self.config.bucket
        );
        Ok(objects)
    }

    async fn upload(&self, key: &str, bytes: Bytes, content_type: &str) -> Result<()> {
        let object_key = normalize_object_key(key)?;

        let mut request = self
            .client
            .put_object()
            .bucket(&self.config.bucket)
            .key(&object_key)
            .if_none_match("*")
            .body(ByteStream::from(bytes));

        if let Some(content_type) = normalize_content_type(content_type) {
            request = request.content_type(content_type);
        }

        request.send().await.map_err(|error| {
            storage_error(
                "R2",
                "put_object",
                &self.config.bucket,
                Some(&object_key),
                DisplayErrorContext(error),
            )
        })?;

        Ok(())
    }

    async fn remove(&self, keys: &[String]) -> Result<()> {
        for key in keys {
            let object_key = normalize_object_key(key)?;
            self.client
                .delete_object()
                .bucket(&self.config.bucket)
                .key(&object_key)
                .send()
                .await
                .map_err(|error| {
                    storage_error(
                        "R2",
                        "delete_object",
                        &self.config.bucket,
                        Some(&object_key),
                        DisplayErrorContext(error),
                    )
                })?;
        }
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        let key = key.trim_matches('/');
        format!(
            "{}/{}",
            self.config.public_base_url,
            urlencoding::encode(key)
        )
    }
}

/// Map one listed object. The key doubles as the id: ETags are content
/// hashes and repeat for identical uploads.
fn stored_object_from(object: &Object) -> Option<StoredObject> {
    let name = object.key()?.to_string();
    let created_at = object
        .last_modified()
        .and_then(|ts| DateTime::<Utc>::from_timestamp(ts.secs(), ts.subsec_nanos()));
    Some(StoredObject {
        id: None,
        name,
        created_at,
    })
}

fn parse_config(lookup: impl Fn(&str) -> Option<String>) -> Result<Option<R2Config>> {
    let account_id = lookup(ENV_ACCOUNT_ID).map(|value| value.trim().to_string());
    let bucket = lookup(ENV_BUCKET).map(|value| value.trim().to_string());
    let access_key_id = lookup(ENV_ACCESS_KEY_ID).map(|value| value.trim().to_string());
    let secret_access_key = lookup(ENV_SECRET_ACCESS_KEY).map(|value| value.trim().to_string());
    let public_base_url = lookup(ENV_PUBLIC_BASE_URL).map(|value| value.trim().to_string());

    let any_present = account_id.is_some()
        || bucket.is_some()
        || access_key_id.is_some()
        || secret_access_key.is_some()
        || public_base_url.is_some();

    if !any_present {
        return Ok(None);
    }

    let mut missing = Vec::new();
    let account_id = required(account_id, ENV_ACCOUNT_ID, &mut missing);
    let bucket = required(bucket, ENV_BUCKET, &mut missing);
    let access_key_id = required(access_key_id, ENV_ACCESS_KEY_ID, &mut missing);
    let secret_access_key = required(secret_access_key, ENV_SECRET_ACCESS_KEY, &mut missing);
    let public_base_url = required(public_base_url, ENV_PUBLIC_BASE_URL, &mut missing);

    if !missing.is_empty() {
        return Err(Error::InvalidInput(format!(
            "R2 configuration is incomplete. Missing: {}",
            missing.join(", ")
        )));
    }

    if !is_http_url(&public_base_url) {
        return Err(Error::InvalidInput(
            "R2_PUBLIC_BASE_URL must start with http:// or https://".to_string(),
        ));
    }

    Ok(Some(R2Config {
        account_id,
        bucket,
        access_key_id,
        secret_access_key,
        public_base_url: public_base_url.trim_end_matches('/').to_string(),
    }))
}

fn required(value: Option<String>, name: &'static str, missing: &mut Vec<&'static str>) -> String {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => {
            missing.push(name);
            String::new()
        }
    }
}

fn build_s3_client(config: &R2Config) -> Client {
    let credentials = Credentials::new(
        config.access_key_id.clone(),
        config.secret_access_key.clone(),
        None,
        None,
        "jzer-core-r2-storage",
    );

    let sdk_config = aws_sdk_s3::config::Builder::new()
        .region(Region::new("auto"))
        .credentials_provider(credentials)
        .endpoint_url(config.endpoint_url())
        .force_path_style(true)
        .build();

    Client::from_conf(sdk_config)
}

fn normalize_content_type(content_type: &str) -> Option<String> {
    let trimmed = content_type.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::delete::{DeleteController, DeleteOutcome};
    use crate::library::VideoLibrary;
    use crate::storage::MemoryStorage;

    fn parse_from_map(map: &HashMap<&str, &str>) -> Result<Option<R2Config>> {
        parse_config(|key| map.get(key).map(|value| (*value).to_string()))
    }

    fn full_map() -> HashMap<&'static str, &'static str> {
        let mut map = HashMap::new();
        map.insert(ENV_ACCOUNT_ID, "account-1");
        map.insert(ENV_BUCKET, "videos");
        map.insert(ENV_ACCESS_KEY_ID, "AKID123");
        map.insert(ENV_SECRET_ACCESS_KEY, "SECRET123");
        map.insert(ENV_PUBLIC_BASE_URL, "https://cdn.example.com/videos/");
        map
    }

    #[test]
    fn parse_config_none_returns_none() {
        let map = HashMap::new();
        assert!(parse_from_map(&map).unwrap().is_none());
    }

    #[test]
    fn parse_config_requires_all_values() {
        let mut map = HashMap::new();
        map.insert(ENV_ACCOUNT_ID, "account");
        map.insert(ENV_BUCKET, "bucket");

        let err = parse_from_map(&map).unwrap_err();
        match err {
            Error::InvalidInput(message) => {
                assert!(message.contains(ENV_ACCESS_KEY_ID));
                assert!(message.contains(ENV_SECRET_ACCESS_KEY));
                assert!(message.contains(ENV_PUBLIC_BASE_URL));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_config_accepts_valid_values_and_normalizes_public_url() {
        let config = parse_from_map(&full_map()).unwrap().unwrap();
        assert_eq!(config.public_base_url, "https://cdn.example.com/videos");
        assert_eq!(
            config.endpoint_url(),
            "https://account-1.r2.cloudflarestorage.com"
        );
    }

    #[test]
    fn parse_config_rejects_invalid_public_base_url() {
        let mut map = full_map();
        map.insert(ENV_PUBLIC_BASE_URL, "cdn.example.com/videos");

        let err = parse_from_map(&map).unwrap_err();
        match err {
            Error::InvalidInput(message) => assert!(message.contains(ENV_PUBLIC_BASE_URL)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn debug_output_redacts_secret() {
        let config = parse_from_map(&full_map()).unwrap().unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("SECRET123"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn public_url_joins_encoded_key() {
        let storage = R2Storage::new(parse_from_map(&full_map()).unwrap().unwrap());
        assert_eq!(
            storage.public_url("/1700000000000.mp4"),
            "https://cdn.example.com/videos/1700000000000.mp4"
        );
        assert_eq!(
            storage.public_url("summer promo.mp4"),
            "https://cdn.example.com/videos/summer%20promo.mp4"
        );
    }

    #[test]
    fn normalize_content_type_ignores_empty_values() {
        assert_eq!(normalize_content_type("   "), None);
        assert_eq!(
            normalize_content_type(" video/mp4 "),
            Some("video/mp4".to_string())
        );
    }

    fn listed(key: &str, secs: i64) -> Object {
        Object::builder()
            .key(key)
            .e_tag("\"5d41402abc4b2a76b9719d911017c592\"")
            .last_modified(aws_sdk_s3::primitives::DateTime::from_secs(secs))
            .build()
    }

    #[test]
    fn stored_object_uses_key_as_identity() {
        let object = stored_object_from(&listed("1700000000000.mp4", 1_700_000_000)).unwrap();

        assert_eq!(object.id, None);
        assert_eq!(object.name, "1700000000000.mp4");
        assert_eq!(
            object.created_at,
            DateTime::<Utc>::from_timestamp(1_700_000_000, 0)
        );
        assert!(stored_object_from(&Object::builder().build()).is_none());
    }

    #[tokio::test]
    async fn identical_uploads_delete_the_clicked_object() {
        let objects = [
            listed("1700000000000.mp4", 1_700_000_000),
            listed("1600000000000.mp4", 1_600_000_000),
        ]
        .iter()
        .filter_map(stored_object_from)
        .collect();
        let storage = MemoryStorage::with_objects(objects);
        let mut library = VideoLibrary::new();
        library.load(&storage).await;
        let clicked = library.videos()[1].clone();
        assert_ne!(library.videos()[0].id, clicked.id);

        let mut controller = DeleteController::new();
        assert!(controller.request_delete(&clicked.id, library.videos()));
        let outcome = controller.confirm(&storage).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Deleted(clicked));
        assert_eq!(storage.names(), vec!["1700000000000.mp4".to_string()]);
    }

    #[tokio::test(flavor = "multi_thread")]
    #[ignore = "Requires local R2 env vars plus network access"]
    async fn r2_bucket_exists_and_is_reachable() {
        let _ = dotenvy::dotenv();

        let config = R2Config::from_env()
            .expect("R2 env parsing should not error")
            .expect("R2 config should be present");
        let storage = R2Storage::new(config.clone());

        storage.bucket_is_reachable().await.unwrap_or_else(|error| {
            panic!(
                "R2 bucket health check failed for bucket '{}': {error}",
                config.bucket
            )
        });
    }

    #[tokio::test(flavor = "multi_thread")]
    #[ignore = "Requires local R2 env vars plus network access"]
    async fn r2_video_roundtrip_upload_list_remove() {
        let _ = dotenvy::dotenv();

        let config = R2Config::from_env()
            .expect("R2 env parsing should not error")
            .expect("R2 config should be present");
        let storage = R2Storage::new(config);

        let key = format!("{}.mp4", crate::util::unix_millis_now());
        storage
            .upload(&key, Bytes::from_static(b"not-really-a-video"), "video/mp4")
            .await
            .unwrap_or_else(|error| panic!("R2 upload failed: {error}"));

        let listed = storage.list().await.expect("list should succeed");
        assert!(listed.iter().any(|object| object.name == key));

        storage
            .remove(std::slice::from_ref(&key))
            .await
            .unwrap_or_else(|error| panic!("R2 delete failed for '{key}': {error}"));
    }
}
