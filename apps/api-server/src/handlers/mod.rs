//! HTTP handlers and route configuration.

mod auth;
mod feed;
mod health;
mod posts;

#[cfg(test)]
mod tests;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            )
            // Feeds
            .route("/feed", web::get().to(feed::index))
            .route("/groups/{slug}", web::get().to(feed::group_posts))
            .route("/profiles/{username}", web::get().to(feed::profile))
            // Posts; /posts/create is registered ahead of /posts/{id}
            .route("/posts/create", web::get().to(posts::create_form))
            .route("/posts/create", web::post().to(posts::create_submit))
            .route("/posts/{id}", web::get().to(posts::detail))
            .route("/posts/{id}/edit", web::get().to(posts::edit_form))
            .route("/posts/{id}/edit", web::post().to(posts::edit_submit)),
    );
}
