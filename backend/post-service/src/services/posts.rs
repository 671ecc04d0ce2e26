/// Post service - post creation, retrieval, deletion, and like toggling
use crate::db::{post_repo, user_repo};
use crate::error::{AppError, Result};
use crate::models::Post;
use sqlx::PgPool;
use uuid::Uuid;

pub struct PostService {
    pool: PgPool,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a post owned by the caller, snapshotting the author's current
    /// name/avatar onto the document.
    ///
    /// An authenticated caller without a profile row is an upstream data
    /// fault, not a missing resource: it surfaces as a server error.
    pub async fn create_post(&self, user_id: Uuid, text: &str) -> Result<Post> {
        let profile = user_repo::find_user_by_id(&self.pool, user_id)
            .await?
            .ok_or_else(|| {
                tracing::error!(%user_id, "no profile row for authenticated caller");
                AppError::Internal(format!("profile missing for user {user_id}"))
            })?;

        let post = post_repo::insert_post(
            &self.pool,
            user_id,
            text,
            &profile.name,
            profile.avatar.as_deref(),
        )
        .await?;

        Ok(post)
    }

    /// All posts, newest first.
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        let posts = post_repo::list_posts(&self.pool).await?;
        Ok(posts)
    }

    /// Get a post by ID
    pub async fn get_post(&self, post_id: Uuid) -> Result<Post> {
        post_repo::find_post_by_id(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
    }

    /// Delete a post. Only the owner may delete it.
    pub async fn delete_post(&self, post_id: Uuid, caller: Uuid) -> Result<()> {
        let post = self.get_post(post_id).await?;

        if post.user_id != caller {
            return Err(AppError::Forbidden("User not authorized".to_string()));
        }

        post_repo::delete_post(&self.pool, post_id).await?;
        Ok(())
    }

    /// Toggle the caller's like on a post and return the updated liker list.
    pub async fn toggle_like(&self, post_id: Uuid, caller: Uuid) -> Result<Vec<Uuid>> {
        let mut post = self.get_post(post_id).await?;

        post.toggle_like(caller);
        post_repo::update_likes(&self.pool, post_id, &post.likes.0).await?;

        Ok(post.likes.0)
    }
}
