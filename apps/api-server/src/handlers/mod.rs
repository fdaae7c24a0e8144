//! HTTP handlers and route configuration.

mod categories;
mod drafts;
mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Public reading surface
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list))
                    .route("/{slug}", web::get().to(posts::get_by_slug))
                    .route(
                        "/{id}/published-at",
                        web::patch().to(posts::set_publish_date),
                    ),
            )
            // Editor surface (authenticated)
            .service(
                web::scope("/drafts")
                    .route("", web::get().to(drafts::list))
                    .route("", web::post().to(drafts::create))
                    .route("/{id}", web::get().to(drafts::get))
                    .route("/{id}", web::put().to(drafts::update))
                    .route("/{id}/publish", web::post().to(drafts::publish))
                    .route("/{id}/unpublish", web::post().to(drafts::unpublish))
                    .route("/{id}/sync", web::get().to(drafts::sync_status)),
            )
            // Categories: public listing, admin mutation
            .service(
                web::scope("/categories")
                    .route("", web::get().to(categories::list))
                    .route("", web::post().to(categories::create))
                    .route("/{id}", web::put().to(categories::update))
                    .route("/{id}", web::delete().to(categories::delete)),
            ),
    );
}
