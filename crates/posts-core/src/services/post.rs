use std::sync::Arc;

use crate::domain::{Post, PostDraft, PostId, parse_post_id};
use crate::error::{DomainError, RepoError, StoreOperation};
use crate::ports::PostRepository;

/// Post service - validates input and delegates to the injected repository.
///
/// Cheap to clone; every clone shares the same repository (and pool).
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// All posts in storage order.
    pub async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        self.repo
            .find_all()
            .await
            .map_err(DomainError::store(StoreOperation::Fetch))
    }

    /// Validate and store a post, returning its generated id.
    pub async fn create_post(&self, draft: PostDraft) -> Result<PostId, DomainError> {
        let post = draft.validate_into()?;

        self.repo
            .insert(post)
            .await
            .map_err(DomainError::store(StoreOperation::Insert))
    }

    /// Delete the post identified by the raw path segment `raw_id`.
    pub async fn delete_post(&self, raw_id: &str) -> Result<PostId, DomainError> {
        let id = parse_post_id(raw_id)?;
        let not_found = DomainError::NotFound {
            entity_type: "Post",
            id: id.to_string(),
        };

        let existing = self
            .repo
            .find_by_id(id)
            .await
            .map_err(DomainError::store(StoreOperation::Delete))?;
        if existing.is_none() {
            return Err(not_found);
        }

        match self.repo.delete(id).await {
            Ok(()) => Ok(id),
            // Removed by a concurrent request after the existence check.
            Err(RepoError::NotFound) => Err(not_found),
            Err(e) => Err(DomainError::store(StoreOperation::Delete)(e)),
        }
    }
}
