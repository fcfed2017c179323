//! HTTP handlers and route configuration.

mod comments;
mod health;

use actix_web::web;

/// Largest request body the routes will buffer.
const BODY_LIMIT: usize = 64 * 1024;

/// Body extractor settings shared by all routes.
pub fn payload_config() -> web::PayloadConfig {
    web::PayloadConfig::new(BODY_LIMIT)
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Comment routes (authenticated)
            .service(
                web::scope("/comments")
                    .route("/{post_id}", web::post().to(comments::create_comment))
                    .route("/{post_id}", web::get().to(comments::list_comments)),
            ),
    );
}
