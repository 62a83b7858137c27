use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId};
use crate::error::RepoError;

/// Generic repository trait defining the read and delete operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Fetch every entity in storage order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID. Returns `RepoError::NotFound` when no row matched.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, PostId> {
    /// Insert a validated post and return the id the store generated for it.
    async fn insert(&self, post: NewPost) -> Result<PostId, RepoError>;
}
