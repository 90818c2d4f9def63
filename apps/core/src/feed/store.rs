use super::seed::{more_posts, seed_posts};
use super::tags::extract_tags;
use crate::error::AppError;
use crate::models::{Author, Post, PostDraft};
use crate::storage::{LocalStore, FEED_KEY};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

/// Ordered post collection (newest first) mirrored to [`FEED_KEY`].
///
/// Every mutation rewrites the whole snapshot.
pub struct FeedStore {
    store: Arc<dyn LocalStore>,
    posts: Vec<Post>,
    author: Author,
    load_latency: Duration,
}

impl FeedStore {
    /// Restores the persisted snapshot verbatim, or installs the seed posts.
    ///
    /// A missing or malformed snapshot is replaced by the persisted seed. When the
    /// store cannot be read the seed is only kept in memory, so whatever is stored
    /// survives for the next load. Storage failures are logged, never fatal.
    #[instrument(skip(store, author))]
    pub async fn load(store: Arc<dyn LocalStore>, author: Author, load_latency: Duration) -> Self {
        let mut feed = Self {
            store,
            posts: Vec::new(),
            author,
            load_latency,
        };

        let persist_seed = match feed.store.get_item(FEED_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Post>>(&raw) {
                Ok(posts) => {
                    info!("Restored {} posts", posts.len());
                    feed.posts = posts;
                    return feed;
                }
                Err(e) => {
                    warn!("Discarding malformed feed snapshot: {}", e);
                    true
                }
            },
            Ok(None) => true,
            Err(e) => {
                warn!("Failed to read feed snapshot, using seed without saving: {}", e);
                false
            }
        };

        feed.posts = seed_posts(&feed.author, Utc::now().timestamp_millis());
        if persist_seed {
            if let Err(e) = feed.persist(&feed.posts).await {
                error!("Failed to persist seed posts: {}", e);
            }
        }
        info!("Installed {} seed posts", feed.posts.len());
        feed
    }

    /// Posts, newest first.
    pub fn list(&self) -> &[Post] {
        &self.posts
    }

    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Publishes a new post at the top of the feed.
    ///
    /// Text is trimmed; empty text is rejected with [`AppError::Validation`].
    #[instrument(skip(self, text, image))]
    pub async fn publish(&mut self, text: &str, image: Option<String>) -> Result<Post, AppError> {
        let draft = PostDraft::new(text, image);
        draft.validate()?;

        let post = Post {
            id: Uuid::new_v4().to_string(),
            author: self.author.clone(),
            created_at: Utc::now().timestamp_millis(),
            tags: extract_tags(&draft.text),
            text: draft.text,
            like_count: 0,
            comment_count: 0,
            liked: false,
            image: draft.image,
        };

        let mut next = Vec::with_capacity(self.posts.len() + 1);
        next.push(post.clone());
        next.extend(self.posts.iter().cloned());
        self.commit(next).await?;
        info!(id = %post.id, tags = post.tags.len(), "Published post");
        Ok(post)
    }

    /// Flips the like state of a post and returns its updated copy.
    #[instrument(skip(self))]
    pub async fn toggle_like(&mut self, id: &str) -> Result<Post, AppError> {
        let index = self
            .posts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("post {}", id)))?;
        let mut next = self.posts.clone();
        next[index].toggle_like();
        let updated = next[index].clone();
        self.commit(next).await?;
        Ok(updated)
    }

    /// Waits the simulated latency, then prepends the two fixed extra posts.
    #[instrument(skip(self))]
    pub async fn load_more(&mut self) -> Result<Vec<Post>, AppError> {
        tokio::time::sleep(self.load_latency).await;

        let more = more_posts(&self.author, Utc::now().timestamp_millis());
        let next: Vec<Post> = more.iter().chain(self.posts.iter()).cloned().collect();
        self.commit(next).await?;
        info!("Loaded {} more posts", more.len());
        Ok(more)
    }

    /// Replaces the list only once `next` is persisted.
    async fn commit(&mut self, next: Vec<Post>) -> Result<(), AppError> {
        self.persist(&next).await?;
        self.posts = next;
        Ok(())
    }

    async fn persist(&self, posts: &[Post]) -> Result<(), AppError> {
        let snapshot = serde_json::to_string(posts)?;
        self.store.set_item(FEED_KEY, &snapshot).await
    }
}
