use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use remark_core::domain::Post;
use remark_core::error::RepoError;
use remark_core::ports::PostRepository;

/// Post store backed by a HashMap.
///
/// Posts belong to another service, so the only way in is `insert` (seeding).
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<String, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    /// Build a store pre-populated with the given posts.
    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        let store = posts.into_iter().map(|p| (p.id.clone(), p)).collect();
        Self {
            store: RwLock::new(store),
        }
    }

    pub async fn insert(&self, post: Post) {
        self.store.write().await.insert(post.id.clone(), post);
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
        Ok(self.store.read().await.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_find_seeded_post() {
        let repo = InMemoryPostRepository::with_posts([Post::new("123", Uuid::new_v4(), "hi")]);

        assert!(repo.find_by_id("123").await.unwrap().is_some());
        assert!(repo.find_by_id("999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_makes_post_visible() {
        let repo = InMemoryPostRepository::new();
        repo.insert(Post::new("abc", Uuid::new_v4(), "later")).await;

        let post = repo.find_by_id("abc").await.unwrap().unwrap();
        assert_eq!(post.text, "later");
    }
}
