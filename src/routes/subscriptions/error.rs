use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use serde::Serialize;

use crate::database::StorageError;
use crate::domain::{FieldViolation, ValidationErrors};

#[derive(thiserror::Error, Debug)]
pub enum SubscriptionError {
    #[error("{0}")]
    InvalidInput(ValidationErrors),
    #[error("{0}")]
    MalformedRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Subscriptions cannot be modified once created.")]
    MethodNotAllowed,
    #[error("Failed to delete subscription")]
    DeleteFailed(#[source] StorageError),
    #[error(transparent)]
    StorageError(#[from] StorageError),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl SubscriptionError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_)
            | Self::MalformedRequest(_)
            | Self::DeleteFailed(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::StorageError(_) | Self::UnexpectedError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable, machine readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_)
            | Self::MalformedRequest(_)
            | Self::DeleteFailed(_) => "validation",
            Self::NotFound(_) => "not_found",
            Self::MethodNotAllowed => "method_not_allowed",
            Self::StorageError(_) | Self::UnexpectedError(_) => "internal",
        }
    }
}

impl From<JsonRejection> for SubscriptionError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl From<PathRejection> for SubscriptionError {
    fn from(rejection: PathRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl From<ValidationErrors> for SubscriptionError {
    fn from(errors: ValidationErrors) -> Self {
        Self::InvalidInput(errors)
    }
}

fn with_causes(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl IntoResponse for SubscriptionError {
    fn into_response(self) -> axum::response::Response {
        #[derive(Serialize)]
        struct SubscriptionErrorResponse<'a> {
            error: String,
            kind: &'static str,
            #[serde(skip_serializing_if = "Option::is_none")]
            violations: Option<&'a [FieldViolation]>,
        }
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{} Reason: {:?}", self, self);
        } else {
            tracing::warn!("{} Reason: {:?}", self, self);
        }
        let error = match &self {
            Self::DeleteFailed(_) => with_causes(&self),
            Self::StorageError(_) | Self::UnexpectedError(_) => {
                "Something went wrong".to_string()
            }
            _ => self.to_string(),
        };
        let violations = match &self {
            Self::InvalidInput(errors) => Some(errors.violations()),
            _ => None,
        };
        let body = axum::Json(SubscriptionErrorResponse {
            error,
            kind: self.kind(),
            violations,
        });
        if matches!(self, Self::MethodNotAllowed) {
            (status, [(header::ALLOW, "GET, DELETE")], body).into_response()
        } else {
            (status, body).into_response()
        }
    }
}
