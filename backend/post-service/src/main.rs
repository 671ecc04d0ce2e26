use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use post_service::handlers;
use post_service::middleware;
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Post Service
///
/// A microservice that handles the social-posting endpoints: posts, like
/// toggling, and embedded comments.
///
/// # Routes
///
/// - `/api/v1/posts` - Create and list posts
/// - `/api/v1/posts/{post_id}` - Read/delete a post, add a comment
/// - `/api/v1/posts/{post_id}/tlike` - Toggle the caller's like
/// - `/api/v1/posts/{post_id}/{comment_id}` - Remove a comment
///
/// # Architecture
///
/// - HTTP handlers with request/response conversion
/// - PostgreSQL for persistent storage; each post is a self-contained
///   document with JSONB likes/comments arrays
/// - JWT bearer authentication middleware in front of every resource route
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug,sqlx=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match post_service::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting post-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    // Initialize database connection pool
    let db_pool = match post_service::db::create_pool(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database pool creation failed: {}", e);
            eprintln!("ERROR: Failed to create database pool: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = post_service::db::run_migrations(&db_pool).await {
        tracing::error!("Database migration failed: {}", e);
        eprintln!("ERROR: Failed to run migrations: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Connected to database, migrations applied");

    let decoding_key = Arc::new(jsonwebtoken::DecodingKey::from_secret(
        config.auth.jwt_secret.as_bytes(),
    ));

    let health_state = web::Data::new(handlers::HealthState::new(db_pool.clone()));

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    let server = HttpServer::new(move || {
        // Build CORS configuration
        let mut cors = Cors::default();
        for origin in config.cors.allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(health_state.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .route(
                "/metrics",
                web::get().to(post_service::metrics::serve_metrics),
            )
            // Health check endpoints
            .route("/api/v1/health", web::get().to(handlers::health_summary))
            .route(
                "/api/v1/health/ready",
                web::get().to(handlers::readiness_summary),
            )
            .route(
                "/api/v1/health/live",
                web::get().to(handlers::liveness_check),
            )
            .service(
                web::scope("/api/v1")
                    .wrap(middleware::JwtAuth::new(decoding_key.clone()))
                    .wrap(middleware::MetricsMiddleware)
                    .service(
                        web::scope("/posts")
                            .service(
                                web::resource("")
                                    .route(web::get().to(handlers::list_posts))
                                    .route(web::post().to(handlers::create_post)),
                            )
                            .service(
                                web::resource("/{post_id}/tlike")
                                    .route(web::put().to(handlers::toggle_like)),
                            )
                            .service(
                                web::resource("/{post_id}/{comment_id}")
                                    .route(web::delete().to(handlers::delete_comment)),
                            )
                            .service(
                                web::resource("/{post_id}")
                                    .route(web::get().to(handlers::get_post))
                                    .route(web::post().to(handlers::add_comment))
                                    .route(web::delete().to(handlers::delete_post)),
                            ),
                    ),
            )
    })
    .bind(&bind_address)?
    .run();

    server.await?;

    tracing::info!("Post-service shutting down");
    Ok(())
}
