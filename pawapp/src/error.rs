use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::status::StatusCode;
use pawac::error::Error as ACError;
use pawcore::error::{
    ValidationError,
    ValueError,
};
use pawctrl::error::{
    CtrlError,
    PlatformError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Serialize, Deserialize)]
pub enum AppError {
    #[error("400 Bad Request")]
    BadRequest,
    /// The submitted form failed validation; the listing is returned
    /// to the client.
    #[error("400 Bad Request")]
    Invalid(ValidationError),
    #[error("401 Unauthorized")]
    Unauthorized,
    #[error("403 Forbidden")]
    Forbidden,
    #[error("404 Not Found")]
    NotFound,
    #[error("500 Internal Server Error")]
    InternalServerError,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest | AppError::Invalid(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StatusCode> for AppError {
    // Only convert into status known to AppError
    fn from(value: StatusCode) -> Self {
        match value {
            StatusCode::BAD_REQUEST => AppError::BadRequest,
            StatusCode::UNAUTHORIZED => AppError::Unauthorized,
            StatusCode::FORBIDDEN => AppError::Forbidden,
            StatusCode::NOT_FOUND => AppError::NotFound,
            _ => AppError::InternalServerError,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(value: ValidationError) -> Self {
        AppError::Invalid(value)
    }
}

impl From<PlatformError> for AppError {
    fn from(e: PlatformError) -> Self {
        if e.is_not_found() {
            return AppError::NotFound;
        }
        match e {
            PlatformError::ValidationError(errors) => AppError::Invalid(errors),
            PlatformError::CtrlError(CtrlError::RoleRequired { .. }) |
            PlatformError::CtrlError(CtrlError::NotAWorker(_)) => AppError::Forbidden,
            PlatformError::CtrlError(CtrlError::KindMismatch(_)) |
            PlatformError::ValueError(ValueError::Unsupported(_)) => AppError::BadRequest,
            PlatformError::AcError(ACError::Authentication(_)) => AppError::Unauthorized,
            e => {
                log::error!("unhandled platform error: {e}");
                AppError::InternalServerError
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<&'a ValidationError>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let fields = match &self {
            AppError::Invalid(errors) => Some(errors),
            _ => None,
        };
        let body = ErrorBody {
            error: self.to_string(),
            fields,
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod test {
    use pawcore::{
        error::BackendError,
        person::WorkerRole,
        task::RequiredRole,
    };
    use super::*;

    #[test]
    fn from_platform_error() {
        assert_eq!(
            AppError::from(PlatformError::from(CtrlError::NotFound("task 1".into()))),
            AppError::NotFound,
        );
        assert_eq!(
            AppError::from(PlatformError::from(CtrlError::RoleRequired {
                required: RequiredRole::Vet,
                actual: WorkerRole::Regular,
            })),
            AppError::Forbidden,
        );
        assert_eq!(
            AppError::from(PlatformError::from(CtrlError::KindMismatch("dog".into()))),
            AppError::BadRequest,
        );
        assert_eq!(
            AppError::from(PlatformError::from(BackendError::AppInvariantViolation(
                "person 1 has no subtype row".into()
            ))),
            AppError::InternalServerError,
        );

        let mut errors = ValidationError::new();
        errors.add("name", "This field is required.");
        assert_eq!(
            AppError::from(PlatformError::from(errors.clone())),
            AppError::Invalid(errors),
        );
    }

    #[test]
    fn status_code() {
        assert_eq!(AppError::Invalid(ValidationError::new()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::from(StatusCode::IM_A_TEAPOT), AppError::InternalServerError);
        assert_eq!(AppError::from(StatusCode::NOT_FOUND).to_string(), "404 Not Found");
    }
}
