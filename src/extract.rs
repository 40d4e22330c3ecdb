use axum_macros::{FromRequest, FromRequestParts};

use crate::routes::SubscriptionError;

/// `axum::Json` whose rejections are answered as validation errors.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(SubscriptionError))]
pub struct JsonBody<T>(pub T);

/// `/subscriptions/:id` path parameters.
#[derive(Debug, serde::Deserialize, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(SubscriptionError))]
pub struct SubscriptionPath {
    pub id: i64,
}
