//! Supabase Storage video bucket over its REST API.

use std::env;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;

use super::{normalize_object_key, storage_error, VideoStorage};
use crate::models::StoredObject;
use crate::util::{compact_text, is_http_url, normalize_text_option};
use crate::{Error, Result};

const ENV_URL: &str = "SUPABASE_URL";
const ENV_ANON_KEY: &str = "SUPABASE_ANON_KEY";
const ENV_BUCKET: &str = "SUPABASE_VIDEO_BUCKET";

/// Bucket the site's videos live in unless configured otherwise.
pub const DEFAULT_VIDEO_BUCKET: &str = "videos";

const LIST_PAGE_SIZE: usize = 1000;

/// Supabase project configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://abc.supabase.co`.
    pub url: String,
    /// Public anon key sent as `apikey` and bearer token.
    pub anon_key: String,
    /// Storage bucket name.
    pub bucket: String,
}

impl std::fmt::Debug for SupabaseConfig {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("SupabaseConfig")
            .field("url", &self.url)
            .field("anon_key", &"[REDACTED]")
            .field("bucket", &self.bucket)
            .finish()
    }
}

impl SupabaseConfig {
    /// Load Supabase configuration from environment variables.
    ///
    /// Returns `Ok(None)` when neither the URL nor the key is set.
    pub fn from_env() -> Result<Option<Self>> {
        parse_config(|key| env::var(key).ok())
    }

    fn storage_base(&self) -> String {
        format!("{}/storage/v1", self.url)
    }
}

/// Supabase-backed video bucket.
#[derive(Clone, Debug)]
pub struct SupabaseStorage {
    config: SupabaseConfig,
    client: reqwest::Client,
}

impl SupabaseStorage {
    pub fn new(config: SupabaseConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(&config.anon_key)
            .map_err(|error| Error::Config(format!("Invalid SUPABASE_ANON_KEY: {error}")))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.anon_key))
            .map_err(|error| Error::Config(format!("Invalid SUPABASE_ANON_KEY: {error}")))?;
        headers.insert("apikey", api_key);
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|error| Error::Config(format!("Failed to construct HTTP client: {error}")))?;

        Ok(Self { config, client })
    }

    async fn check_response(
        &self,
        operation: &str,
        object_key: Option<&str>,
        response: reqwest::Response,
    ) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = error_message_from_body(&body)
            .unwrap_or_else(|| format!("HTTP {status}: {}", compact_text(&body)));
        Err(storage_error(
            "Supabase",
            operation,
            &self.config.bucket,
            object_key,
            message,
        ))
    }
}

#[async_trait]
impl VideoStorage for SupabaseStorage {
    async fn list(&self) -> Result<Vec<StoredObject>> {
        let url = format!(
            "{}/object/list/{}",
            self.config.storage_base(),
            self.config.bucket
        );
        let mut objects = Vec::new();
        let mut offset = 0;

        loop {
            let response = self
                .client
                .post(&url)
                .json(&serde_json::json!({
                    "prefix": "",
                    "limit": LIST_PAGE_SIZE,
                    "offset": offset,
                    "sortBy": { "column": "name", "order": "asc" },
                }))
                .send()
                .await
                .map_err(|error| storage_error("Supabase", "list", &self.config.bucket, None, error))?;
            let response = self.check_response("list", None, response).await?;

            let page = response.json::<Vec<ListEntry>>().await.map_err(|error| {
                storage_error("Supabase", "list", &self.config.bucket, None, error)
            })?;
            let page_len = page.len();
            objects.extend(page.into_iter().map(ListEntry::into_stored_object));

            if page_len < LIST_PAGE_SIZE {
                break;
            }
            offset += page_len;
        }

        tracing::debug!(
            "Supabase listed {} objects in {}",
            objects.len(),
            self.config.bucket
        );
        Ok(objects)
    }

    async fn upload(&self, key: &str, bytes: Bytes, content_type: &str) -> Result<()> {
        let object_key = normalize_object_key(key)?;
        let url = format!(
            "{}/object/{}/{}",
            self.config.storage_base(),
            self.config.bucket,
            urlencoding::encode(&object_key)
        );

        let content_type = normalize_text_option(Some(content_type.to_string()))
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await
            .map_err(|error| {
                storage_error(
                    "Supabase",
                    "upload",
                    &self.config.bucket,
                    Some(&object_key),
                    error,
                )
            })?;
        self.check_response("upload", Some(&object_key), response)
            .await?;
        Ok(())
    }

    async fn remove(&self, keys: &[String]) -> Result<()> {
        let prefixes = keys
            .iter()
            .map(|key| normalize_object_key(key))
            .collect::<Result<Vec<_>>>()?;
        let url = format!(
            "{}/object/{}",
            self.config.storage_base(),
            self.config.bucket
        );

        let response = self
            .client
            .delete(url)
            .json(&serde_json::json!({ "prefixes": prefixes }))
            .send()
            .await
            .map_err(|error| {
                storage_error("Supabase", "remove", &self.config.bucket, None, error)
            })?;
        self.check_response("remove", None, response).await?;
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!(
            "{}/object/public/{}/{}",
            self.config.storage_base(),
            self.config.bucket,
            urlencoding::encode(key.trim_matches('/'))
        )
    }
}

#[derive(Debug, Deserialize)]
struct ListEntry {
    name: String,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl ListEntry {
    fn into_stored_object(self) -> StoredObject {
        StoredObject {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

fn error_message_from_body(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    normalize_text_option(parsed.message).or_else(|| normalize_text_option(parsed.error))
}

fn parse_config(lookup: impl Fn(&str) -> Option<String>) -> Result<Option<SupabaseConfig>> {
    let url = normalize_text_option(lookup(ENV_URL));
    let anon_key = normalize_text_option(lookup(ENV_ANON_KEY));
    let bucket = normalize_text_option(lookup(ENV_BUCKET));

    let (url, anon_key) = match (url, anon_key) {
        (None, None) => return Ok(None),
        (Some(url), Some(anon_key)) => (url, anon_key),
        (None, Some(_)) => {
            return Err(Error::InvalidInput(format!(
                "Supabase configuration is incomplete. Missing: {ENV_URL}"
            )))
        }
        (Some(_), None) => {
            return Err(Error::InvalidInput(format!(
                "Supabase configuration is incomplete. Missing: {ENV_ANON_KEY}"
            )))
        }
    };

    if !is_http_url(&url) {
        return Err(Error::InvalidInput(format!(
            "{ENV_URL} must start with http:// or https://"
        )));
    }

    Ok(Some(SupabaseConfig {
        url: url.trim_end_matches('/').to_string(),
        anon_key,
        bucket: bucket.unwrap_or_else(|| DEFAULT_VIDEO_BUCKET.to_string()),
    }))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn parse_from_map(map: &HashMap<&str, &str>) -> Result<Option<SupabaseConfig>> {
        parse_config(|key| map.get(key).map(|value| (*value).to_string()))
    }

    fn storage() -> SupabaseStorage {
        SupabaseStorage::new(SupabaseConfig {
            url: "https://project.supabase.co".to_string(),
            anon_key: "anon".to_string(),
            bucket: "videos".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn parse_config_none_returns_none() {
        assert!(parse_from_map(&HashMap::new()).unwrap().is_none());
    }

    #[test]
    fn parse_config_defaults_bucket_and_trims_url() {
        let mut map = HashMap::new();
        map.insert(ENV_URL, "https://project.supabase.co/");
        map.insert(ENV_ANON_KEY, "anon");

        let config = parse_from_map(&map).unwrap().unwrap();
        assert_eq!(config.url, "https://project.supabase.co");
        assert_eq!(config.bucket, DEFAULT_VIDEO_BUCKET);
    }

    #[test]
    fn parse_config_reports_missing_key() {
        let mut map = HashMap::new();
        map.insert(ENV_URL, "https://project.supabase.co");

        let err = parse_from_map(&map).unwrap_err();
        match err {
            Error::InvalidInput(message) => assert!(message.contains(ENV_ANON_KEY)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_config_rejects_non_http_url() {
        let mut map = HashMap::new();
        map.insert(ENV_URL, "project.supabase.co");
        map.insert(ENV_ANON_KEY, "anon");
        assert!(parse_from_map(&map).is_err());
    }

    #[test]
    fn public_url_uses_public_object_route() {
        assert_eq!(
            storage().public_url("1700000000000.mp4"),
            "https://project.supabase.co/storage/v1/object/public/videos/1700000000000.mp4"
        );
    }

    #[test]
    fn debug_output_redacts_anon_key() {
        let debug = format!("{:?}", storage().config);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("\"anon\""));
    }

    #[test]
    fn list_entries_parse_folder_rows_without_ids() {
        let payload = r#"[
            {"name": "clip.mp4", "id": "8c1d", "created_at": "2024-05-01T10:00:00.000Z", "metadata": {"size": 10}},
            {"name": "folder", "id": null, "created_at": null, "metadata": null}
        ]"#;

        let entries: Vec<ListEntry> = serde_json::from_str(payload).unwrap();
        let objects: Vec<StoredObject> = entries
            .into_iter()
            .map(ListEntry::into_stored_object)
            .collect();

        assert_eq!(objects[0].id.as_deref(), Some("8c1d"));
        assert!(objects[0].created_at.is_some());
        assert_eq!(objects[1].id, None);
        assert_eq!(objects[1].created_at, None);
    }

    #[test]
    fn error_message_prefers_message_field() {
        assert_eq!(
            error_message_from_body(r#"{"statusCode":"413","error":"Payload too large","message":"quota exceeded"}"#),
            Some("quota exceeded".to_string())
        );
        assert_eq!(
            error_message_from_body(r#"{"error":"Duplicate"}"#),
            Some("Duplicate".to_string())
        );
        assert_eq!(error_message_from_body("<html>"), None);
    }

    #[tokio::test(flavor = "multi_thread")]
    #[ignore = "Requires Supabase env vars plus network access"]
    async fn supabase_bucket_lists_videos() {
        let _ = dotenvy::dotenv();

        let config = SupabaseConfig::from_env()
            .expect("Supabase env parsing should not error")
            .expect("Supabase config should be present");
        let storage = SupabaseStorage::new(config).expect("client should build");

        storage
            .list()
            .await
            .unwrap_or_else(|error| panic!("Supabase list failed: {error}"));
    }
}
