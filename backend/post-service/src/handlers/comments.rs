/// Comment handlers - HTTP endpoints for comment operations
use crate::error::Result;
use crate::handlers::{parse_comment_id, parse_post_id};
use crate::middleware::UserId;
use crate::services::CommentService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use validator::Validate;

/// Request body for adding a comment
#[derive(Debug, Deserialize, Validate)]
pub struct AddCommentRequest {
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

/// Add a comment to a post, returning the updated comment list
pub async fn add_comment(
    pool: web::Data<PgPool>,
    user: UserId,
    path: web::Path<String>,
    req: web::Json<AddCommentRequest>,
) -> Result<HttpResponse> {
    req.validate()?;
    let post_id = parse_post_id(&path)?;

    let service = CommentService::new((**pool).clone());
    let comments = service.add_comment(post_id, user.0, &req.text).await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// Delete a comment the caller owns
pub async fn delete_comment(
    pool: web::Data<PgPool>,
    user: UserId,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    let (raw_post_id, raw_comment_id) = path.into_inner();
    let post_id = parse_post_id(&raw_post_id)?;
    let comment_id = parse_comment_id(&raw_comment_id)?;

    let service = CommentService::new((**pool).clone());
    service.delete_comment(post_id, comment_id, user.0).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "msg": "Comment removed" })))
}
