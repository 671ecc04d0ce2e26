use crate::models::UserProfile;
use sqlx::PgPool;
use uuid::Uuid;

/// Find an author profile by ID. Post and comment creation snapshot the
/// returned name/avatar onto the document.
pub async fn find_user_by_id(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<UserProfile>, sqlx::Error> {
    let profile = sqlx::query_as::<_, UserProfile>(
        r#"
        SELECT id, name, avatar
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(profile)
}
