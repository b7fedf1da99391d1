use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::auth::errors::AuthError;
use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ProductError::MissingFields
            | ProductError::ImageMissing
            | ProductError::NameEmpty
            | ProductError::DescriptionEmpty
            | ProductError::InvalidPrice
            | ProductError::IdMissing
            | ProductError::InvalidId => (StatusCode::BAD_REQUEST, "ValidationError"),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            ProductError::Auth(AuthError::Unauthenticated) => {
                (StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            ProductError::Auth(AuthError::Forbidden) => (StatusCode::FORBIDDEN, "Forbidden"),
            ProductError::Auth(AuthError::IdentityUnavailable)
            | ProductError::Repository(_)
            | ProductError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = ?self, "Request failed");
        }

        (status, Json(ErrorResponse::new(name, &self.to_string())))
    }
}
