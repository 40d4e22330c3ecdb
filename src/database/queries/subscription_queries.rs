use crate::database::DatabaseConnection;
use crate::models::{NewSubscriptionRow, Subscription};
use crate::schema::{subscriptions, users};
use diesel::prelude::*;
use diesel::SelectableHelper;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

/// A subscription together with its owner's external UUID.
pub type OwnedSubscription = (Subscription, Uuid);

#[tracing::instrument(name = "List subscriptions", skip(connection))]
pub async fn list_subscriptions(
    connection: &mut DatabaseConnection,
) -> Result<Vec<OwnedSubscription>, diesel::result::Error> {
    let rows = subscriptions::table
        .inner_join(users::table)
        .select((Subscription::as_select(), users::uuid))
        .order(subscriptions::id.asc())
        .load::<OwnedSubscription>(connection)
        .await?;
    tracing::info!(count = rows.len(), "Subscriptions loaded.");
    Ok(rows)
}

#[tracing::instrument(name = "Find subscription by id", skip(connection))]
pub async fn find_subscription(
    connection: &mut DatabaseConnection,
    id: i32,
) -> Result<Option<OwnedSubscription>, diesel::result::Error> {
    subscriptions::table
        .inner_join(users::table)
        .filter(subscriptions::id.eq(id))
        .select((Subscription::as_select(), users::uuid))
        .first::<OwnedSubscription>(connection)
        .await
        .optional()
}

#[tracing::instrument(
    name = "Inserting subscription into database.",
    skip(row, connection),
    fields(user_id = row.user_id, service_name = %row.service_name)
)]
pub async fn insert_subscription(
    connection: &mut DatabaseConnection,
    row: &NewSubscriptionRow<'_>,
) -> Result<Subscription, diesel::result::Error> {
    match diesel::insert_into(subscriptions::table)
        .values(row)
        .returning(Subscription::as_returning())
        .get_result(connection)
        .await
    {
        Ok(subscription) => {
            tracing::info!(id = subscription.id, "New subscription saved.");
            Ok(subscription)
        }
        Err(e) => {
            tracing::error!("Failed to execute query {:?}", e);
            Err(e)
        }
    }
}

/// Deletes every row with `id`. Returns how many were removed.
#[tracing::instrument(name = "Delete subscription", skip(connection))]
pub async fn delete_subscription(
    connection: &mut DatabaseConnection,
    id: i32,
) -> Result<usize, diesel::result::Error> {
    let deleted =
        diesel::delete(subscriptions::table.filter(subscriptions::id.eq(id)))
            .execute(connection)
            .await?;
    tracing::info!(deleted, "Subscription delete executed.");
    Ok(deleted)
}
