mod create;
mod delete;
mod error;
mod list;
mod read;
mod report;
mod update;

pub use create::*;
pub use delete::*;
pub use error::*;
pub use list::*;
pub use read::*;
pub use report::*;
pub use update::*;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Subscription;

/// Subscription as exposed over HTTP.
#[derive(Debug, Serialize)]
pub struct SubscriptionView {
    pub id: i32,
    pub user_id: i32,
    pub user_uuid: Uuid,
    pub service_name: String,
    pub price: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<(Subscription, Uuid)> for SubscriptionView {
    fn from((subscription, user_uuid): (Subscription, Uuid)) -> Self {
        Self {
            id: subscription.id,
            user_id: subscription.user_id,
            user_uuid,
            service_name: subscription.service_name,
            price: subscription.price,
            start_date: subscription.start_date,
            end_date: subscription.end_date,
            created_at: subscription.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubscriptionData {
    pub subscription: SubscriptionView,
}
