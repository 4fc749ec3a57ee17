//! Admin Guard
//!
//! Extractor for admin-only routes. The caller must present
//! `Authorization: Bearer <token>` matching the configured admin token.

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::warn;

use super::AppState;
use crate::error::StoreError;

/// Proof that the request was made by an admin.
#[derive(Debug, Clone, Copy)]
pub struct AdminGuard;

#[async_trait]
impl FromRequestParts<AppState> for AdminGuard {
    type Rejection = StoreError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| StoreError::Unauthorized("Missing bearer token".to_string()))?;

        if !constant_time_eq(token.as_bytes(), state.admin_token.as_bytes()) {
            warn!(path = %parts.uri.path(), "Rejected non-admin token");
            return Err(StoreError::Forbidden("Admin access required".to_string()));
        }

        Ok(AdminGuard)
    }
}

/// Compares tokens without short-circuiting on the first differing byte.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff = 0u8;
    for (left, right) in a.iter().zip(b.iter()) {
        diff |= left ^ right;
    }
    diff == 0
}
