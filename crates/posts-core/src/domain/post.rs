use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::error::DomainError;

/// Primary key of a post, generated by the store.
pub type PostId = i32;

/// Message returned when a post id path segment is not a positive integer.
pub const INVALID_POST_ID: &str = "Valid post ID is required";

/// Field order used to pick the first failing field of a draft.
const DRAFT_FIELDS: [&str; 4] = ["name", "surname", "title", "content"];

/// Post entity - a persisted post. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub name: String,
    pub surname: String,
    pub title: String,
    pub content: String,
}

/// A validated post that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub name: String,
    pub surname: String,
    pub title: String,
    pub content: String,
}

/// Unvalidated create-post input, exactly as the client sent it.
///
/// A field that was sent with a non-string value (including `null`) is left
/// as `None` and named in `mistyped`. Keys outside the post schema are kept
/// in `unknown`.
#[derive(Debug, Clone, Default, Validate)]
pub struct PostDraft {
    #[validate(
        required(message = "\"name\" is required"),
        length(min = 2, message = "\"name\" length must be at least 2 characters long")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "\"surname\" is required"),
        length(min = 2, message = "\"surname\" length must be at least 2 characters long")
    )]
    pub surname: Option<String>,

    #[validate(
        required(message = "\"title\" is required"),
        length(min = 3, message = "\"title\" length must be at least 3 characters long")
    )]
    pub title: Option<String>,

    #[validate(
        required(message = "\"content\" is required"),
        length(min = 5, message = "\"content\" length must be at least 5 characters long")
    )]
    pub content: Option<String>,

    pub mistyped: Vec<String>,
    pub unknown: Vec<String>,
}

impl PostDraft {
    /// Validate the draft and turn it into a [`NewPost`].
    ///
    /// Only the first failure is reported. Fields are checked in declaration
    /// order (type, then emptiness, then the schema rules) and unknown keys
    /// come last.
    pub fn validate_into(self) -> Result<NewPost, DomainError> {
        if let Some(message) = self.first_failure() {
            return Err(DomainError::Validation(message));
        }

        match (self.name, self.surname, self.title, self.content) {
            (Some(name), Some(surname), Some(title), Some(content)) => Ok(NewPost {
                name,
                surname,
                title,
                content,
            }),
            _ => Err(DomainError::Validation("Post fields are required".to_string())),
        }
    }

    fn first_failure(&self) -> Option<String> {
        let errors = self.validate().err();
        let schema = errors
            .as_ref()
            .map(ValidationErrors::field_errors)
            .unwrap_or_default();

        let values = [&self.name, &self.surname, &self.title, &self.content];
        for (field, value) in DRAFT_FIELDS.iter().zip(values) {
            if self.mistyped.iter().any(|m| m == field) {
                return Some(format!("\"{field}\" must be a string"));
            }
            if value.as_deref() == Some("") {
                return Some(format!("\"{field}\" is not allowed to be empty"));
            }
            let message = schema
                .get(*field)
                .and_then(|errs| errs.iter().find_map(|e| e.message.as_ref()));
            if let Some(message) = message {
                return Some(message.to_string());
            }
        }

        self.unknown
            .first()
            .map(|key| format!("\"{key}\" is not allowed"))
    }
}

/// Parse a raw path segment into a post id.
///
/// Anything other than a positive integer is a validation error. A positive
/// integer too large for [`PostId`] cannot name a stored post, so it is
/// reported as not found without asking the store.
pub fn parse_post_id(raw: &str) -> Result<PostId, DomainError> {
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    let positive = !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && digits.bytes().any(|b| b != b'0');
    if !positive {
        return Err(DomainError::Validation(INVALID_POST_ID.to_string()));
    }

    digits.parse::<PostId>().map_err(|_| DomainError::NotFound {
        entity_type: "Post",
        id: digits.to_string(),
    })
}
