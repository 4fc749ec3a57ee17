//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_ADMIN_TOKEN: &str = "change-me";
const DEFAULT_MEDIA_BASE_URL: &str = "https://media.local/storefront";
const DEFAULT_MEDIA_FOLDER: &str = "products";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Bearer token that grants the admin role
    pub admin_token: String,
    /// Base URL the media host serves uploaded images from
    pub media_base_url: String,
    /// Media host folder for product images
    pub media_folder: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `ADMIN_TOKEN` - Admin bearer token (default: "change-me")
    /// - `MEDIA_BASE_URL` - Media host base URL (default: "https://media.local/storefront")
    /// - `MEDIA_FOLDER` - Folder for product images (default: "products")
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            admin_token: non_empty_var("ADMIN_TOKEN").unwrap_or_else(|| DEFAULT_ADMIN_TOKEN.into()),
            media_base_url: non_empty_var("MEDIA_BASE_URL")
                .unwrap_or_else(|| DEFAULT_MEDIA_BASE_URL.into()),
            media_folder: non_empty_var("MEDIA_FOLDER")
                .unwrap_or_else(|| DEFAULT_MEDIA_FOLDER.into()),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_PORT,
            admin_token: DEFAULT_ADMIN_TOKEN.to_string(),
            media_base_url: DEFAULT_MEDIA_BASE_URL.to_string(),
            media_folder: DEFAULT_MEDIA_FOLDER.to_string(),
        }
    }
}
