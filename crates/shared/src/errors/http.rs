use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Conflict(_) => StatusCode::CONFLICT,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
            RepositoryError::InsufficientStock | RepositoryError::OrderHasItems => {
                HttpError::BadRequest(err.to_string())
            }
            RepositoryError::InvalidInput(msg) => HttpError::BadRequest(msg),
            RepositoryError::AlreadyExists(msg) => HttpError::Conflict(msg),
            RepositoryError::ForeignKey(msg) => {
                HttpError::Conflict(format!("Foreign key violation: {msg}"))
            }
            RepositoryError::Sqlx(_) | RepositoryError::Custom(_) => {
                HttpError::Internal(err.to_string())
            }
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Repo(repo_err) => HttpError::from(repo_err),

            ServiceError::NotFound(msg) => HttpError::NotFound(msg),

            ServiceError::InsufficientStock
            | ServiceError::NoRowsAffected
            | ServiceError::OrderHasItems => {
                HttpError::BadRequest(err.to_string())
            }

            ServiceError::Validation(errors) => HttpError::BadRequest(errors.join("; ")),

            ServiceError::InvalidCredentials => {
                HttpError::Unauthorized("Invalid credentials".to_string())
            }

            ServiceError::Jwt(err) => HttpError::Unauthorized(format!("JWT error: {err}")),

            ServiceError::TokenExpired => HttpError::Unauthorized("Token expired".into()),

            ServiceError::InvalidTokenType => HttpError::Unauthorized("Invalid token type".into()),

            ServiceError::Bcrypt(_) => HttpError::Internal("Internal authentication error".into()),

            ServiceError::Internal(msg) | ServiceError::Custom(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match self {
            HttpError::BadRequest(msg)
            | HttpError::Unauthorized(msg)
            | HttpError::NotFound(msg)
            | HttpError::Conflict(msg)
            | HttpError::Internal(msg) => msg,
        };

        error!("❌ {} {}", status.as_u16(), msg);

        (status, Json(ErrorResponse::error(msg))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn referential_errors_map_to_not_found() {
        let err = HttpError::from(ServiceError::not_found("customer", 1));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert!(matches!(err, HttpError::NotFound(msg) if msg.contains("customer")));
    }

    #[test]
    fn business_rule_errors_map_to_bad_request() {
        assert_eq!(
            HttpError::from(ServiceError::InsufficientStock).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            HttpError::from(ServiceError::Repo(RepositoryError::InsufficientStock)).status(),
            StatusCode::BAD_REQUEST
        );

        let no_rows = HttpError::from(ServiceError::NoRowsAffected);
        assert!(matches!(no_rows, HttpError::BadRequest(msg) if msg == "no rows affected"));
    }

    #[test]
    fn values_refused_by_the_database_map_to_bad_request() {
        let err = HttpError::from(ServiceError::Repo(RepositoryError::InvalidInput(
            "new row for relation \"stocks\" violates check constraint".into(),
        )));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let store_change = HttpError::from(ServiceError::OrderHasItems);
        assert!(
            matches!(store_change, HttpError::BadRequest(msg) if msg.contains("store cannot change"))
        );
    }

    #[test]
    fn storage_errors_map_to_internal() {
        let err = HttpError::from(ServiceError::Repo(RepositoryError::Sqlx(
            sqlx::Error::PoolTimedOut,
        )));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn constraint_violations_map_to_conflict() {
        let err = HttpError::from(RepositoryError::ForeignKey("stocks_store_id_fkey".into()));
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }
}
