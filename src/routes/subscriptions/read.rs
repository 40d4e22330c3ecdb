use axum::extract::State;

use super::{SubscriptionData, SubscriptionError};
use crate::database::{self, queries, StorageError};
use crate::domain::{SubscriptionId, ValidationErrors};
use crate::envelope::Enveloped;
use crate::extract::SubscriptionPath;
use crate::startup::ApplicationState;

pub(super) fn parse_id(
    path: &SubscriptionPath,
) -> Result<SubscriptionId, SubscriptionError> {
    SubscriptionId::try_from(path.id).map_err(|e| {
        SubscriptionError::InvalidInput(ValidationErrors::single(
            "id",
            e.to_string(),
        ))
    })
}

#[tracing::instrument(name = "Reading a subscription", skip(app_state))]
pub async fn read_subscription(
    State(app_state): State<ApplicationState>,
    path: SubscriptionPath,
) -> Result<Enveloped<SubscriptionData>, SubscriptionError> {
    let id = parse_id(&path)?;
    let found = database::with_timeout(app_state.storage_timeout, async {
        let mut connection =
            database::get_connection(&app_state.database_pool).await?;
        let row = queries::find_subscription(&mut connection, id.into()).await?;
        Ok::<_, StorageError>(row)
    })
    .await?;
    match found {
        Some(row) => Ok(Enveloped(SubscriptionData {
            subscription: row.into(),
        })),
        None => Err(SubscriptionError::NotFound(format!(
            "Subscription {} not found.",
            id
        ))),
    }
}
