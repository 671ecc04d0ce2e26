/// Comment service - comment creation and removal on post documents
use crate::db::{post_repo, user_repo};
use crate::error::{AppError, Result};
use crate::models::{Comment, Post};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct CommentService {
    pool: PgPool,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Prepend a comment to a post and return the updated comment list.
    pub async fn add_comment(
        &self,
        post_id: Uuid,
        caller: Uuid,
        text: &str,
    ) -> Result<Vec<Comment>> {
        let mut post = self.find_post(post_id).await?;

        let profile = user_repo::find_user_by_id(&self.pool, caller)
            .await?
            .ok_or_else(|| {
                tracing::error!(%caller, "no profile row for authenticated caller");
                AppError::Internal(format!("profile missing for user {caller}"))
            })?;

        post.prepend_comment(Comment {
            id: Uuid::new_v4(),
            text: text.to_string(),
            name: profile.name,
            avatar: profile.avatar,
            user_id: caller,
            created_at: Utc::now(),
        });
        post_repo::update_comments(&self.pool, post_id, &post.comments.0).await?;

        Ok(post.comments.0)
    }

    /// Remove a comment the caller owns. The document is never mutated on a
    /// failure path.
    pub async fn delete_comment(&self, post_id: Uuid, comment_id: Uuid, caller: Uuid) -> Result<()> {
        let mut post = self.find_post(post_id).await?;

        remove_owned_comment(&mut post, comment_id, caller)?;
        post_repo::update_comments(&self.pool, post_id, &post.comments.0).await?;

        Ok(())
    }

    async fn find_post(&self, post_id: Uuid) -> Result<Post> {
        post_repo::find_post_by_id(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
    }
}

/// Remove `comment_id` from the post if it identifies exactly one comment
/// owned by `caller`. A duplicated comment id is a corruption signal: rather
/// than guess which copy to delete, the whole operation is rejected.
fn remove_owned_comment(post: &mut Post, comment_id: Uuid, caller: Uuid) -> Result<()> {
    let comments = &post.comments.0;
    let occurrences = comments.iter().filter(|c| c.id == comment_id).count();
    let target = comments.iter().find(|c| c.id == comment_id);

    let target = match (occurrences, target) {
        (1, Some(comment)) => comment,
        _ => return Err(AppError::NotFound("Comment not found".to_string())),
    };

    if target.user_id != caller {
        return Err(AppError::Forbidden("User not authorized".to_string()));
    }

    post.comments.0.retain(|c| c.id != comment_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::types::Json;

    fn post_with_comments(comments: Vec<Comment>) -> Post {
        Post {
            id: Uuid::new_v4(),
            text: "hello".to_string(),
            name: "Ada".to_string(),
            avatar: None,
            user_id: Uuid::new_v4(),
            likes: Json(vec![]),
            comments: Json(comments),
            created_at: Utc::now(),
        }
    }

    fn comment(id: Uuid, owner: Uuid) -> Comment {
        Comment {
            id,
            text: "a comment".to_string(),
            name: "Ada".to_string(),
            avatar: None,
            user_id: owner,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn removes_the_callers_comment() {
        let owner = Uuid::new_v4();
        let id = Uuid::new_v4();
        let other = comment(Uuid::new_v4(), Uuid::new_v4());
        let mut post = post_with_comments(vec![comment(id, owner), other.clone()]);

        remove_owned_comment(&mut post, id, owner).unwrap();
        assert_eq!(post.comments.0, vec![other]);
    }

    #[test]
    fn unknown_comment_is_not_found_and_leaves_the_post_untouched() {
        let owner = Uuid::new_v4();
        let existing = comment(Uuid::new_v4(), owner);
        let mut post = post_with_comments(vec![existing.clone()]);

        let err = remove_owned_comment(&mut post, Uuid::new_v4(), owner).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(post.comments.0, vec![existing]);
    }

    #[test]
    fn duplicated_comment_id_is_rejected_as_not_found() {
        let owner = Uuid::new_v4();
        let id = Uuid::new_v4();
        let mut post = post_with_comments(vec![comment(id, owner), comment(id, owner)]);

        let err = remove_owned_comment(&mut post, id, owner).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(post.comments.0.len(), 2);
    }

    #[test]
    fn non_owner_is_forbidden_and_leaves_the_post_untouched() {
        let id = Uuid::new_v4();
        let mut post = post_with_comments(vec![comment(id, Uuid::new_v4())]);

        let err = remove_owned_comment(&mut post, id, Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
        assert_eq!(post.comments.0.len(), 1);
    }
}
