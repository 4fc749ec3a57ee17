//! In-memory media host
//!
//! Keeps uploaded payloads in a map keyed by public id and hands out URLs
//! under a configured base.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::media::MediaHost;

/// Extension used when the payload does not name an image type.
const DEFAULT_EXTENSION: &str = "jpg";

#[derive(Debug)]
pub struct MemoryMediaHost {
    base_url: String,
    objects: RwLock<HashMap<String, String>>,
}

impl MemoryMediaHost {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Returns true if an object is stored under `public_id`.
    pub async fn contains(&self, public_id: &str) -> bool {
        self.objects.read().await.contains_key(public_id)
    }

    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

/// Picks the file extension from a `data:image/<ext>;...` prefix.
fn extension_for(payload: &str) -> &str {
    payload
        .strip_prefix("data:image/")
        .and_then(|rest| rest.split([';', ',']).next())
        .map(|ext| if ext == "jpeg" { "jpg" } else { ext })
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or(DEFAULT_EXTENSION)
}

#[async_trait]
impl MediaHost for MemoryMediaHost {
    async fn upload(&self, payload: &str, folder: &str) -> Result<String> {
        if payload.is_empty() {
            return Err(StoreError::Media("empty upload payload".to_string()));
        }

        let name = Uuid::new_v4().simple().to_string();
        let public_id = format!("{}/{}", folder, name);
        let url = format!(
            "{}/{}.{}",
            self.base_url,
            public_id,
            extension_for(payload)
        );

        self.objects
            .write()
            .await
            .insert(public_id.clone(), payload.to_string());
        debug!(public_id = %public_id, "Stored media object");
        Ok(url)
    }

    async fn destroy(&self, public_id: &str) -> Result<()> {
        // An absent object is already in the desired state
        if self.objects.write().await.remove(public_id).is_none() {
            debug!(public_id, "Media object already absent");
            return Ok(());
        }
        debug!(public_id, "Destroyed media object");
        Ok(())
    }
}
