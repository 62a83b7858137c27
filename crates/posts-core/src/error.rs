//! Domain-level error types.

use std::fmt;

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Client input was malformed. Carries the message shown to the caller.
    #[error("{0}")]
    Validation(String),

    /// `id` is kept as text so that ids beyond the key range can be reported.
    #[error("{entity_type} with id {id} not found")]
    NotFound { entity_type: &'static str, id: String },

    #[error("{operation}: {source}")]
    Store {
        operation: StoreOperation,
        #[source]
        source: RepoError,
    },
}

impl DomainError {
    pub fn store(operation: StoreOperation) -> impl FnOnce(RepoError) -> Self {
        move |source| DomainError::Store { operation, source }
    }
}

/// The storage operation that failed, used to pick the client-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    Fetch,
    Insert,
    Delete,
}

impl StoreOperation {
    pub fn failure_message(self) -> &'static str {
        match self {
            StoreOperation::Fetch => "Error fetching posts",
            StoreOperation::Insert => "Error inserting post",
            StoreOperation::Delete => "Error deleting post",
        }
    }
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_display_includes_operation_and_cause() {
        let err = DomainError::store(StoreOperation::Insert)(RepoError::Query("timeout".into()));
        assert_eq!(
            err.to_string(),
            "Error inserting post: Query execution failed: timeout"
        );
    }

    #[test]
    fn validation_error_displays_bare_message() {
        let err = DomainError::Validation("\"name\" is required".into());
        assert_eq!(err.to_string(), "\"name\" is required");
    }
}
