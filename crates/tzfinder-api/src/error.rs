use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tzfinder_core::{FailureKind, TzError};

/// Unified API error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub kind: Option<FailureKind>,
    pub details: Option<String>,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into(), kind: None, details: None }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn with_kind(mut self, kind: FailureKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<FailureKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.message, kind: self.kind, details: self.details };
        (self.status, Json(body)).into_response()
    }
}

impl From<TzError> for ApiError {
    fn from(err: TzError) -> Self {
        let status = match &err {
            TzError::Validation { .. } | TzError::Format { .. } => StatusCode::BAD_REQUEST,
            TzError::NotFound { .. } => StatusCode::NOT_FOUND,
            TzError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            TzError::Auth { .. } | TzError::Provider { .. } => StatusCode::BAD_GATEWAY,
            TzError::MissingCredential => StatusCode::SERVICE_UNAVAILABLE,
            TzError::Geolocation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            TzError::ConfigInvalid { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        Self::new(status, err.to_string()).with_kind(err.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tzfinder_core::{GeolocationError, LookupKind};

    #[test]
    fn test_status_mapping() {
        let cases = [
            (TzError::validation("too short"), StatusCode::BAD_REQUEST),
            (TzError::NotFound { lookup: LookupKind::Forward }, StatusCode::NOT_FOUND),
            (TzError::Timeout { after_ms: 10_000 }, StatusCode::GATEWAY_TIMEOUT),
            (TzError::Auth { status: 401 }, StatusCode::BAD_GATEWAY),
            (TzError::MissingCredential, StatusCode::SERVICE_UNAVAILABLE),
            (GeolocationError::PermissionDenied.into(), StatusCode::UNPROCESSABLE_ENTITY),
        ];

        for (err, status) in cases {
            let kind = err.kind();
            let api_error = ApiError::from(err);
            assert_eq!(api_error.status, status);
            assert_eq!(api_error.kind, Some(kind));
        }
    }
}
