/// In-memory storage for users and posts
///
/// The store owns both collections and the id counters. It is shared across
/// requests as `Arc<Store>` and every operation takes the lock for its whole
/// read or write step.

mod seed;
mod types;

pub use seed::{seed_posts, seed_users, SEED_CREATED_AT};
pub use types::{Author, Clock, NewAuthor, Post, User};

use crate::error::{BlogqlError, Result};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Collections {
    users: Vec<User>,
    posts: Vec<Post>,
    next_user_id: i32,
    next_post_id: i32,
}

impl Collections {
    fn from_parts(users: Vec<User>, posts: Vec<Post>) -> Self {
        let next_user_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let next_post_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            users,
            posts,
            next_user_id,
            next_post_id,
        }
    }
}

#[derive(Debug)]
pub struct Store {
    inner: RwLock<Collections>,
    clock: Clock,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_clock(Vec::new(), Vec::new(), Clock::System)
    }

    /// Create a store holding the two fixed users and posts
    pub fn seeded() -> Self {
        Self::with_clock(seed_users(), seed_posts(), Clock::System)
    }

    /// Create a store from explicit contents and clock.
    ///
    /// Id counters continue after the highest id present in each collection.
    pub fn with_clock(users: Vec<User>, posts: Vec<Post>, clock: Clock) -> Self {
        Self {
            inner: RwLock::new(Collections::from_parts(users, posts)),
            clock,
        }
    }

    pub async fn users(&self) -> Vec<User> {
        self.inner.read().await.users.clone()
    }

    pub async fn posts(&self) -> Vec<Post> {
        self.inner.read().await.posts.clone()
    }

    /// Return the first post with the given id
    pub async fn find_post(&self, id: i32) -> Result<Post> {
        self.inner
            .read()
            .await
            .posts
            .iter()
            .find(|post| post.id == id)
            .cloned()
            .ok_or_else(|| BlogqlError::not_found(id))
    }

    pub async fn create_user(&self, name: String, email: String) -> User {
        let mut inner = self.inner.write().await;
        let user = User {
            id: inner.next_user_id,
            name: Some(name),
            email: Some(email),
        };
        inner.next_user_id += 1;
        inner.users.push(user.clone());

        tracing::debug!("Created user {}", user.id);
        user
    }

    pub async fn create_post(&self, author: Author, content: String) -> Post {
        let now = self.clock.now();
        let mut inner = self.inner.write().await;
        let post = Post {
            id: inner.next_post_id,
            author,
            content,
            created_at: Some(now),
            updated_at: None,
        };
        inner.next_post_id += 1;
        inner.posts.push(post.clone());

        tracing::debug!("Created post {}", post.id);
        post
    }

    /// Overwrite the content of an existing post in place
    pub async fn update_post(&self, id: i32, content: String) -> Result<Post> {
        let now = self.clock.now();
        let mut inner = self.inner.write().await;
        let post = inner
            .posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or_else(|| BlogqlError::not_found(id))?;

        post.content = content;
        post.updated_at = Some(now);

        tracing::debug!("Updated post {}", id);
        Ok(post.clone())
    }

    /// Remove a post, returning it
    pub async fn delete_post(&self, id: i32) -> Result<Post> {
        let mut inner = self.inner.write().await;
        let index = inner
            .posts
            .iter()
            .position(|post| post.id == id)
            .ok_or_else(|| BlogqlError::not_found(id))?;

        let post = inner.posts.remove(index);

        tracing::debug!("Deleted post {}", id);
        Ok(post)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
