use axum::extract::State;
use serde::Serialize;

use super::{SubscriptionError, SubscriptionView};
use crate::database::{self, queries, StorageError};
use crate::envelope::Enveloped;
use crate::startup::ApplicationState;

#[derive(Debug, Serialize)]
pub struct SubscriptionsData {
    pub subscriptions: Vec<SubscriptionView>,
}

#[tracing::instrument(name = "Listing subscriptions", skip(app_state))]
pub async fn get_subscriptions(
    State(app_state): State<ApplicationState>,
) -> Result<Enveloped<SubscriptionsData>, SubscriptionError> {
    let rows = database::with_timeout(app_state.storage_timeout, async {
        let mut connection =
            database::get_connection(&app_state.database_pool).await?;
        let rows = queries::list_subscriptions(&mut connection).await?;
        Ok::<_, StorageError>(rows)
    })
    .await?;
    Ok(Enveloped(SubscriptionsData {
        subscriptions: rows.into_iter().map(SubscriptionView::from).collect(),
    }))
}
