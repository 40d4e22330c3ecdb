use axum::http::StatusCode;

use super::SubscriptionError;

/// Subscriptions are immutable; every PATCH and PUT is refused.
#[tracing::instrument(name = "Refusing subscription update")]
pub async fn update_subscription() -> Result<StatusCode, SubscriptionError> {
    Err(SubscriptionError::MethodNotAllowed)
}
