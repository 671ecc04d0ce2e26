/// HTTP handlers for the post resource
///
/// This module contains handlers for:
/// - Posts: create, list, read, delete, like toggling
/// - Comments: add and remove comments embedded in a post
/// - Health: liveness/readiness probes
///
/// Handlers stay thin: deserialize and validate input, call the service
/// layer, shape the JSON response.
pub mod comments;
pub mod health;
pub mod posts;

// Re-export handler functions at module level
pub use comments::{add_comment, delete_comment};
pub use health::{health_summary, liveness_check, readiness_summary, HealthState};
pub use posts::{create_post, delete_post, get_post, list_posts, toggle_like};

use crate::error::{AppError, Result};
use uuid::Uuid;

/// Parse a post id from a path segment. A malformed id is indistinguishable
/// from a missing post to the caller.
pub(crate) fn parse_post_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound("Post not found".to_string()))
}

/// Parse a comment id from a path segment, with the same malformed-id policy
/// as `parse_post_id`.
pub(crate) fn parse_comment_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound("Comment not found".to_string()))
}
