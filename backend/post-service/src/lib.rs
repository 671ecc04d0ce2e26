/// Post Service Library
///
/// Handles the social-posting endpoints for the Pulse platform: posts,
/// like toggling, and the comments embedded in each post document.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Post/Comment document structures and mutation helpers
/// - `services`: Business logic layer
/// - `db`: Database access layer and repositories
/// - `middleware`: HTTP middleware for authentication and request metrics
/// - `error`: Error types and handling
/// - `config`: Configuration management
/// - `metrics`: Observability and metrics collection
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
