//! In-memory post repository - used when no database is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use posts_core::domain::{NewPost, Post, PostId};
use posts_core::error::RepoError;
use posts_core::ports::{BaseRepository, PostRepository};

struct Store {
    rows: BTreeMap<PostId, Post>,
    next_id: PostId,
}

/// In-memory repository using a BTreeMap behind an async RwLock.
///
/// Ids start at 1 and are never reused, like an auto-increment column.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, PostId> for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.rows.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> Result<PostId, RepoError> {
        let mut store = self.store.write().await;

        let id = store.next_id;
        store.next_id = id
            .checked_add(1)
            .ok_or_else(|| RepoError::Query("post id space exhausted".to_string()))?;

        store.rows.insert(
            id,
            Post {
                id,
                name: post.name,
                surname: post.surname,
                title: post.title,
                content: post.content,
            },
        );

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_post(title: &str) -> NewPost {
        NewPost {
            name: "Alan".into(),
            surname: "Turing".into(),
            title: title.into(),
            content: "Computable numbers".into(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryPostRepository::new();
        let id = repo.insert(new_post("Paper")).await.unwrap();
        assert_eq!(id, 1);

        let post = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(post.title, "Paper");
    }

    #[tokio::test]
    async fn test_find_all_in_id_order() {
        let repo = InMemoryPostRepository::new();
        repo.insert(new_post("First")).await.unwrap();
        repo.insert(new_post("Second")).await.unwrap();

        let titles: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["First", "Second"]);
    }

    #[tokio::test]
    async fn test_delete_does_not_reuse_ids() {
        let repo = InMemoryPostRepository::new();
        let first = repo.insert(new_post("First")).await.unwrap();
        repo.delete(first).await.unwrap();

        let second = repo.insert(new_post("Second")).await.unwrap();
        assert_eq!(second, first + 1);
        assert!(repo.find_by_id(first).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing() {
        let repo = InMemoryPostRepository::new();
        assert!(matches!(repo.delete(3).await, Err(RepoError::NotFound)));
    }
}
