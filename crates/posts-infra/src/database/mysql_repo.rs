//! MySQL repository implementations.

use async_trait::async_trait;
use sea_orm::EntityTrait;

use posts_core::domain::{NewPost, PostId};
use posts_core::error::RepoError;
use posts_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::mysql_base::{MySqlBaseRepository, repo_error};

/// MySQL post repository.
pub type MySqlPostRepository = MySqlBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for MySqlPostRepository {
    async fn insert(&self, new_post: NewPost) -> Result<PostId, RepoError> {
        let active_model: post::ActiveModel = new_post.into();

        // MySQL has no RETURNING; the id comes from LAST_INSERT_ID().
        let result = PostEntity::insert(active_model)
            .exec(self.db.as_ref())
            .await
            .map_err(repo_error)?;

        tracing::debug!(post_id = result.last_insert_id, "Inserted post");

        Ok(result.last_insert_id)
    }
}
