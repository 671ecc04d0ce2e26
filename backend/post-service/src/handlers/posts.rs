/// Post handlers - HTTP endpoints for post operations
use crate::error::Result;
use crate::handlers::parse_post_id;
use crate::middleware::UserId;
use crate::services::PostService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use validator::Validate;

/// Request body for creating a post
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

/// Create a new post
pub async fn create_post(
    pool: web::Data<PgPool>,
    user: UserId,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let service = PostService::new((**pool).clone());
    let post = service.create_post(user.0, &req.text).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// List all posts, newest first
pub async fn list_posts(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let posts = service.list_posts().await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Get a post by ID
pub async fn get_post(pool: web::Data<PgPool>, path: web::Path<String>) -> Result<HttpResponse> {
    let post_id = parse_post_id(&path)?;

    let service = PostService::new((**pool).clone());
    let post = service.get_post(post_id).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// Delete a post owned by the caller
pub async fn delete_post(
    pool: web::Data<PgPool>,
    user: UserId,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let post_id = parse_post_id(&path)?;

    let service = PostService::new((**pool).clone());
    service.delete_post(post_id, user.0).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "msg": "Post removed" })))
}

/// Toggle the caller's like on a post, returning the updated liker list
pub async fn toggle_like(
    pool: web::Data<PgPool>,
    user: UserId,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let post_id = parse_post_id(&path)?;

    let service = PostService::new((**pool).clone());
    let likes = service.toggle_like(post_id, user.0).await?;

    Ok(HttpResponse::Ok().json(likes))
}
