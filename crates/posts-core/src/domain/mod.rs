//! Domain entities - the core business objects.

mod post;

pub use post::{INVALID_POST_ID, NewPost, Post, PostDraft, PostId, parse_post_id};
