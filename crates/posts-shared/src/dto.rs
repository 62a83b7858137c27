//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request to create a post.
///
/// Kept as the raw JSON object so that missing, mistyped and unknown fields
/// are all reported by post validation rather than by the JSON decoder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatePostRequest(pub Map<String, Value>);

/// A create-request field after type checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextField {
    Missing,
    Text(String),
    /// Present, but `null` or a non-string value.
    NotText,
}

impl CreatePostRequest {
    /// Remove `key` from the request and classify its value.
    pub fn take_text(&mut self, key: &str) -> TextField {
        match self.0.remove(key) {
            None => TextField::Missing,
            Some(Value::String(text)) => TextField::Text(text),
            Some(_) => TextField::NotText,
        }
    }

    /// Keys still in the request.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Response to a successful create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostResponse {
    pub message: String,
    #[serde(rename = "postId")]
    pub post_id: i32,
}

/// A stored post as returned by `GET /posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub title: String,
    pub content: String,
}

/// Response carrying only a human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
