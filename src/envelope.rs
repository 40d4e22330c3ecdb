//! Uniform `{data, meta, error}` wrapper for successful responses.

use axum::response::{IntoResponse, Response};
use axum::{http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub data: T,
    pub meta: Meta,
    /// Always `null` on the success path.
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Meta {
    pub timestamp: DateTime<Utc>,
}

impl<T: Serialize> Envelope<T> {
    pub fn wrap(data: T) -> Self {
        Self {
            data,
            meta: Meta {
                timestamp: Utc::now(),
            },
            error: None,
        }
    }
}

/// Handler output that is sent enveloped with `200 OK`.
#[derive(Debug)]
pub struct Enveloped<T>(pub T);

impl<T: Serialize> IntoResponse for Enveloped<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(Envelope::wrap(self.0))).into_response()
    }
}
