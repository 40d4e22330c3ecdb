use axum::extract::State;
use serde::Serialize;

use super::SubscriptionError;
use crate::database::queries::{ReportCriteria, ReportTotals};
use crate::database::{self, queries, StorageError};
use crate::domain::{RawUserReference, ReportDate, ReportFilter, UserReference};
use crate::envelope::Enveloped;
use crate::extract::JsonBody;
use crate::startup::ApplicationState;

#[derive(Debug, Default, serde::Deserialize)]
pub struct ReportBody {
    pub user_id: Option<RawUserReference>,
    pub service_name: Option<String>,
    #[serde(alias = "from_date")]
    pub from: Option<String>,
    #[serde(alias = "to_date")]
    pub to: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReportData {
    pub sum: i64,
    pub count: i64,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// `from` and `to` bound the subscription start date, both days inclusive.
fn criteria(filter: &ReportFilter, user_id: Option<i32>) -> ReportCriteria {
    ReportCriteria {
        started_from: filter.from.as_ref().map(ReportDate::starts_at),
        started_before: filter.to.as_ref().map(ReportDate::ends_before),
        user_id,
        service_name: filter
            .service_name
            .as_ref()
            .map(|name| name.as_ref().to_string()),
    }
}

#[tracing::instrument(name = "Building accounting report", skip(app_state))]
pub async fn accounting_report(
    State(app_state): State<ApplicationState>,
    JsonBody(body): JsonBody<ReportBody>,
) -> Result<Enveloped<ReportData>, SubscriptionError> {
    let filter: ReportFilter = body.try_into()?;

    let totals = database::with_timeout(app_state.storage_timeout, async {
        let mut connection =
            database::get_connection(&app_state.database_pool).await?;
        let user_id = match &filter.user {
            None => None,
            Some(UserReference::Id(id)) => Some(*id),
            Some(reference @ UserReference::Uuid(_)) => {
                match queries::find_user(&mut connection, reference).await? {
                    Some(user) => Some(user.id),
                    None => {
                        tracing::info!("Unknown user, reporting nothing.");
                        return Ok(ReportTotals::default());
                    }
                }
            }
        };
        let totals = queries::aggregate_subscriptions(
            &mut connection,
            &criteria(&filter, user_id),
        )
        .await?;
        Ok::<_, StorageError>(totals)
    })
    .await?;

    Ok(Enveloped(ReportData {
        sum: totals.sum,
        count: totals.count,
        from: filter.from.map(|date| date.as_ref().to_string()),
        to: filter.to.map(|date| date.as_ref().to_string()),
    }))
}
