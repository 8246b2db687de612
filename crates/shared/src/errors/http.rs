use crate::errors::{
    error::ErrorResponse, repository::RepositoryError, service::ServiceError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

// Callers only ever see this for 500s; the real cause stays in the server log.
const GENERIC_SERVER_ERROR: &str = "An error occurred on the server.";

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidCredentials => {
                HttpError::Unauthorized("Invalid credentials.".to_string())
            }

            ServiceError::Validation(errors) => HttpError::BadRequest(errors.join("; ")),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => {
                    HttpError::NotFound("Product not found.".to_string())
                }
                RepositoryError::AlreadyExists(_) => HttpError::Conflict(
                    "An account with this email already exists.".to_string(),
                ),
                // Duplicate email is the only store failure a caller may distinguish.
                _ => HttpError::Internal(GENERIC_SERVER_ERROR.to_string()),
            },

            ServiceError::Jwt(_) => HttpError::Forbidden("Invalid token".to_string()),

            ServiceError::TokenExpired => HttpError::Forbidden("Token expired".to_string()),

            ServiceError::Bcrypt(_)
            | ServiceError::Internal(_)
            | ServiceError::Custom(_) => HttpError::Internal(GENERIC_SERVER_ERROR.to_string()),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            HttpError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_generic_500() {
        let err = ServiceError::Repo(RepositoryError::Custom("connection reset".into()));
        match HttpError::from(err) {
            HttpError::Internal(msg) => assert_eq!(msg, GENERIC_SERVER_ERROR),
            other => panic!("expected Internal, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_key_maps_to_conflict() {
        let err = ServiceError::Repo(RepositoryError::AlreadyExists(
            "duplicate key value violates unique constraint".into(),
        ));
        assert!(matches!(HttpError::from(err), HttpError::Conflict(_)));
    }

    #[test]
    fn expired_token_maps_to_forbidden() {
        assert!(matches!(
            HttpError::from(ServiceError::TokenExpired),
            HttpError::Forbidden(_)
        ));
    }

    #[test]
    fn invalid_credentials_map_to_unauthorized() {
        assert!(matches!(
            HttpError::from(ServiceError::InvalidCredentials),
            HttpError::Unauthorized(_)
        ));
    }

    #[test]
    fn into_response_sets_status_code() {
        let response = HttpError::NotFound("Product not found.".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
