use axum::{extract::State, http::StatusCode};

use super::{read::parse_id, SubscriptionError};
use crate::database::{self, queries, StorageError};
use crate::extract::SubscriptionPath;
use crate::startup::ApplicationState;

/// Succeeds whether or not a row matched.
#[tracing::instrument(name = "Cancelling a subscription", skip(app_state))]
pub async fn delete_subscription(
    State(app_state): State<ApplicationState>,
    path: SubscriptionPath,
) -> Result<StatusCode, SubscriptionError> {
    let id = parse_id(&path)?;
    database::with_timeout(app_state.storage_timeout, async {
        let mut connection =
            database::get_connection(&app_state.database_pool).await?;
        let deleted =
            queries::delete_subscription(&mut connection, id.into()).await?;
        Ok::<_, StorageError>(deleted)
    })
    .await
    .map_err(SubscriptionError::DeleteFailed)?;
    Ok(StatusCode::NO_CONTENT)
}
