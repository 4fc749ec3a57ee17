//! Request extractors
//!
//! JSON body and query string extractors whose rejections are reported as
//! `StoreError::InvalidRequest`, so malformed input gets the same
//! `{"error", "code"}` body as every other failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::StoreError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(StoreError))]
pub struct JsonBody<T>(pub T);

/// Deserialized query string.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(StoreError))]
pub struct QueryParams<T>(pub T);
