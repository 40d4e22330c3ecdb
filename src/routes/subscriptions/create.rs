use axum::extract::State;

use super::{SubscriptionData, SubscriptionError};
use crate::database::{self, queries, StorageError};
use crate::domain::{NewSubscription, RawUserReference};
use crate::envelope::Enveloped;
use crate::extract::JsonBody;
use crate::models::NewSubscriptionRow;
use crate::startup::ApplicationState;

/// Every field is optional on the wire so that absence is reported as a
/// field violation rather than a deserialization failure.
#[derive(Debug, Default, serde::Deserialize)]
pub struct CreateSubscriptionBody {
    pub user_id: Option<RawUserReference>,
    pub service_name: Option<String>,
    pub price: Option<i64>,
}

#[tracing::instrument(
    name = "Adding a new subscription",
    skip(app_state, body),
    fields(user_id = ?body.user_id, service_name = ?body.service_name)
)]
pub async fn create_subscription(
    State(app_state): State<ApplicationState>,
    JsonBody(body): JsonBody<CreateSubscriptionBody>,
) -> Result<Enveloped<SubscriptionData>, SubscriptionError> {
    let new_subscription: NewSubscription = body.try_into()?;
    tracing::info!("Adding a new subscription to the database.");

    let created = database::with_timeout(app_state.storage_timeout, async {
        let mut connection =
            database::get_connection(&app_state.database_pool).await?;
        let Some(owner) =
            queries::find_user(&mut connection, &new_subscription.user).await?
        else {
            return Ok(None);
        };
        let row = NewSubscriptionRow {
            user_id: owner.id,
            service_name: new_subscription.service_name.as_ref(),
            price: new_subscription.price.into(),
            start_date: None,
            end_date: None,
        };
        let subscription =
            queries::insert_subscription(&mut connection, &row).await?;
        Ok::<_, StorageError>(Some((subscription, owner.uuid)))
    })
    .await?;

    match created {
        Some(row) => Ok(Enveloped(SubscriptionData {
            subscription: row.into(),
        })),
        None => Err(SubscriptionError::NotFound(format!(
            "User {} not found.",
            new_subscription.user
        ))),
    }
}
