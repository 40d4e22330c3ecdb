use crate::routes::ReportBody;

use super::{ReportDate, ServiceName, UserReference, ValidationErrors};

/// Optional report criteria. Absent criteria do not restrict the report.
#[derive(Debug, Default)]
pub struct ReportFilter {
    pub user: Option<UserReference>,
    pub service_name: Option<ServiceName>,
    pub from: Option<ReportDate>,
    pub to: Option<ReportDate>,
}

impl TryFrom<ReportBody> for ReportFilter {
    type Error = ValidationErrors;

    fn try_from(body: ReportBody) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::new();
        let user = body
            .user_id
            .and_then(|raw| errors.collect("user_id", UserReference::try_from(raw)));
        let service_name = body.service_name.and_then(|raw| {
            errors.collect("service_name", ServiceName::try_from(raw))
        });
        let from = body
            .from
            .and_then(|raw| errors.collect("from", ReportDate::try_from(raw)));
        let to = body
            .to
            .and_then(|raw| errors.collect("to", ReportDate::try_from(raw)));
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Self {
            user,
            service_name,
            from,
            to,
        })
    }
}
