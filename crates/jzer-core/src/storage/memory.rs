//! In-memory bucket used by unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;

use super::VideoStorage;
use crate::models::StoredObject;
use crate::{Error, Result};

#[derive(Default)]
pub(crate) struct MemoryStorage {
    objects: Mutex<Vec<StoredObject>>,
    list_error: Mutex<Option<String>>,
    upload_error: Mutex<Option<String>>,
    remove_error: Mutex<Option<String>>,
    upload_delay: Mutex<Duration>,
    list_calls: AtomicUsize,
    remove_calls: AtomicUsize,
}

impl MemoryStorage {
    pub(crate) fn with_objects(objects: Vec<StoredObject>) -> Self {
        Self {
            objects: Mutex::new(objects),
            ..Self::default()
        }
    }

    pub(crate) fn fail_list(&self, message: Option<&str>) {
        *self.list_error.lock().unwrap() = message.map(ToOwned::to_owned);
    }

    pub(crate) fn fail_upload(&self, message: Option<&str>) {
        *self.upload_error.lock().unwrap() = message.map(ToOwned::to_owned);
    }

    pub(crate) fn fail_remove(&self, message: Option<&str>) {
        *self.remove_error.lock().unwrap() = message.map(ToOwned::to_owned);
    }

    pub(crate) fn set_upload_delay(&self, delay: Duration) {
        *self.upload_delay.lock().unwrap() = delay;
    }

    pub(crate) fn names(&self) -> Vec<String> {
        self.objects
            .lock()
            .unwrap()
            .iter()
            .map(|object| object.name.clone())
            .collect()
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn remove_calls(&self) -> usize {
        self.remove_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VideoStorage for MemoryStorage {
    async fn list(&self) -> Result<Vec<StoredObject>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self.list_error.lock().unwrap().clone() {
            return Err(Error::Storage(message));
        }
        Ok(self.objects.lock().unwrap().clone())
    }

    async fn upload(&self, key: &str, _bytes: Bytes, _content_type: &str) -> Result<()> {
        let delay = *self.upload_delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if let Some(message) = self.upload_error.lock().unwrap().clone() {
            return Err(Error::Storage(message));
        }

        let mut objects = self.objects.lock().unwrap();
        if objects.iter().any(|object| object.name == key) {
            return Err(Error::Storage("The resource already exists".to_string()));
        }
        objects.push(StoredObject {
            id: Some(format!("id-{key}")),
            name: key.to_string(),
            created_at: Some(Utc::now()),
        });
        Ok(())
    }

    async fn remove(&self, keys: &[String]) -> Result<()> {
        self.remove_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self.remove_error.lock().unwrap().clone() {
            return Err(Error::Storage(message));
        }
        self.objects
            .lock()
            .unwrap()
            .retain(|object| !keys.contains(&object.name));
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("https://cdn.test/videos/{key}")
    }
}
