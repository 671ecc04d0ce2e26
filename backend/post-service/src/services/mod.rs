/// Business logic layer
pub mod comments;
pub mod posts;

pub use comments::CommentService;
pub use posts::PostService;
