//! Media Module
//!
//! Image hosting port, its in-memory backend, and helpers for mapping a
//! hosted URL back to the host's object identifier.

mod memory;

use async_trait::async_trait;

use crate::error::Result;

pub use memory::MemoryMediaHost;

// == Media Host ==
#[async_trait]
pub trait MediaHost: Send + Sync {
    /// Uploads `payload` under `folder` and returns its secure URL.
    async fn upload(&self, payload: &str, folder: &str) -> Result<String>;

    /// Deletes the object identified by `public_id` (`"{folder}/{name}"`).
    ///
    /// Deleting an object that does not exist succeeds; `Err` means the host
    /// itself failed.
    async fn destroy(&self, public_id: &str) -> Result<()>;
}

/// Derives the object name from a hosted URL: the last path segment with its
/// file extension stripped.
///
/// Returns None when the URL has no usable final segment.
pub fn public_id_from_url(url: &str) -> Option<&str> {
    let segment = url.rsplit('/').next()?;
    let name = segment.split('.').next()?;
    (!name.is_empty()).then_some(name)
}
