//! Error handling - every failure becomes a JSON `{ "message": ... }` body.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError, http::StatusCode};
use posts_core::error::DomainError;
use posts_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to JSON error responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::NotFound(msg) | AppError::BadRequest(msg) | AppError::Internal(msg) => msg,
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse::new(message.as_str()))
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::NotFound { entity_type, id } => {
                tracing::debug!(entity_type, %id, "Entity not found");
                AppError::NotFound(format!("{} not found", entity_type))
            }
            DomainError::Store { operation, source } => {
                // The driver error stays in the logs.
                tracing::error!(error = %source, "{}", operation);
                AppError::Internal(operation.failure_message().to_string())
            }
        }
    }
}

/// Turns JSON extractor failures (malformed JSON, a body that is not an
/// object, wrong content type) into 400 responses with the same body shape.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let detail = match &err {
        JsonPayloadError::Deserialize(e) => e.to_string(),
        other => other.to_string(),
    };
    AppError::BadRequest(detail).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use posts_core::error::{RepoError, StoreOperation};

    async fn body_of(err: AppError) -> (StatusCode, ErrorResponse) {
        let res = err.error_response();
        let status = res.status();
        let bytes = to_bytes(res.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_not_found_message() {
        let err: AppError = DomainError::NotFound {
            entity_type: "Post",
            id: "9".to_string(),
        }
        .into();
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "Post not found");
    }

    #[actix_web::test]
    async fn test_store_error_hides_driver_detail() {
        let err: AppError = DomainError::Store {
            operation: StoreOperation::Fetch,
            source: RepoError::Connection("Access denied for user 'root'".into()),
        }
        .into();
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "Error fetching posts");
    }
}
