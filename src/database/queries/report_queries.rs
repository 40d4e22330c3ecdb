use crate::database::DatabaseConnection;
use crate::schema::subscriptions;
use chrono::{DateTime, Utc};
use diesel::dsl::{count_star, sum};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

/// Resolved report predicates, combined with AND.
#[derive(Debug, Default, Clone)]
pub struct ReportCriteria {
    pub started_from: Option<DateTime<Utc>>,
    pub started_before: Option<DateTime<Utc>>,
    pub user_id: Option<i32>,
    pub service_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportTotals {
    pub count: i64,
    pub sum: i64,
}

#[tracing::instrument(name = "Aggregate subscriptions report", skip(connection))]
pub async fn aggregate_subscriptions(
    connection: &mut DatabaseConnection,
    criteria: &ReportCriteria,
) -> Result<ReportTotals, diesel::result::Error> {
    let mut query = subscriptions::table
        .select((count_star(), sum(subscriptions::price)))
        .into_boxed();
    if let Some(from) = criteria.started_from {
        query = query.filter(subscriptions::start_date.ge(from));
    }
    if let Some(before) = criteria.started_before {
        query = query.filter(subscriptions::start_date.lt(before));
    }
    if let Some(user_id) = criteria.user_id {
        query = query.filter(subscriptions::user_id.eq(user_id));
    }
    if let Some(service_name) = &criteria.service_name {
        query =
            query.filter(subscriptions::service_name.eq(service_name.clone()));
    }
    let (count, sum) = query
        .get_result::<(i64, Option<i64>)>(connection)
        .await?;
    Ok(ReportTotals {
        count,
        sum: sum.unwrap_or(0),
    })
}
