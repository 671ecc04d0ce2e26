use crate::models::{Comment, Post};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

/// Insert a new post with the author snapshot denormalized onto the row.
/// The id, timestamp, and empty likes/comments arrays are assigned by the
/// database. Returns the created post.
pub async fn insert_post(
    pool: &PgPool,
    user_id: Uuid,
    text: &str,
    name: &str,
    avatar: Option<&str>,
) -> Result<Post, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (user_id, text, name, avatar)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, text, name, avatar, likes, comments, created_at
        "#,
    )
    .bind(user_id)
    .bind(text)
    .bind(name)
    .bind(avatar)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Find a post by ID
pub async fn find_post_by_id(pool: &PgPool, post_id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, user_id, text, name, avatar, likes, comments, created_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// List every post, newest first.
pub async fn list_posts(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, user_id, text, name, avatar, likes, comments, created_at
        FROM posts
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Delete a post row. Returns whether a row was removed.
pub async fn delete_post(pool: &PgPool, post_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Persist the whole likes array. The read-modify-write is not guarded
/// against concurrent writers; the last write wins.
pub async fn update_likes(
    pool: &PgPool,
    post_id: Uuid,
    likes: &[Uuid],
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE posts
        SET likes = $1
        WHERE id = $2
        "#,
    )
    .bind(Json(likes))
    .bind(post_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Persist the whole comments array. Same last-write-wins semantics as
/// `update_likes`.
pub async fn update_comments(
    pool: &PgPool,
    post_id: Uuid,
    comments: &[Comment],
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE posts
        SET comments = $1
        WHERE id = $2
        "#,
    )
    .bind(Json(comments))
    .bind(post_id)
    .execute(pool)
    .await?;

    Ok(())
}
