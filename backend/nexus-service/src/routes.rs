//! Route configuration
//!
//! Centralized route setup; each domain manages its own routes.

use crate::handlers;
use actix_web::web;

/// Configure all routes for the application
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(handlers::health::health_check))
            .route(
                "/health/ready",
                web::get().to(handlers::health::readiness_check),
            )
            // Modular route configuration
            .configure(routes::auth::configure)
            .configure(routes::users::configure)
            .configure(routes::feed::configure)
            .configure(routes::posts::configure)
            .configure(routes::stories::configure)
            .configure(routes::communities::configure)
            .configure(routes::chat::configure)
            .configure(routes::media::configure),
    );
}

// Sub-modules for each domain
mod routes {
    use super::*;

    pub mod auth {
        use super::*;
        pub fn configure(cfg: &mut web::ServiceConfig) {
            cfg.service(
                web::scope("/auth")
                    .route("/signup", web::post().to(handlers::auth::signup))
                    .route("/login", web::post().to(handlers::auth::login)),
            );
        }
    }

    pub mod users {
        use super::*;
        pub fn configure(cfg: &mut web::ServiceConfig) {
            cfg.service(
                web::scope("/users")
                    .route("/search", web::get().to(handlers::users::search_users))
                    .route("/me", web::put().to(handlers::users::update_me))
                    .route("/{id}", web::get().to(handlers::users::get_user))
                    .route("/{id}/posts", web::get().to(handlers::users::get_user_posts))
                    .route(
                        "/{id}/follow/toggle",
                        web::post().to(handlers::relationships::toggle_follow),
                    )
                    .route(
                        "/{id}/followers",
                        web::get().to(handlers::relationships::get_followers),
                    )
                    .route(
                        "/{id}/following",
                        web::get().to(handlers::relationships::get_following),
                    ),
            );
        }
    }

    pub mod feed {
        use super::*;
        pub fn configure(cfg: &mut web::ServiceConfig) {
            cfg.route("/feed", web::get().to(handlers::feed::get_feed));
        }
    }

    pub mod posts {
        use super::*;
        pub fn configure(cfg: &mut web::ServiceConfig) {
            cfg.service(
                web::scope("/posts")
                    .route("", web::post().to(handlers::posts::create_post))
                    .route("/{id}", web::get().to(handlers::posts::get_post))
                    .route(
                        "/{id}/like/toggle",
                        web::post().to(handlers::posts::toggle_like),
                    )
                    .route(
                        "/{id}/comments",
                        web::post().to(handlers::posts::create_comment),
                    )
                    .route(
                        "/{id}/comments",
                        web::get().to(handlers::posts::get_comments),
                    ),
            );
        }
    }

    pub mod stories {
        use super::*;
        pub fn configure(cfg: &mut web::ServiceConfig) {
            cfg.service(
                web::scope("/stories")
                    .route("", web::post().to(handlers::stories::create_story))
                    .route("", web::get().to(handlers::stories::list_stories)),
            );
        }
    }

    pub mod communities {
        use super::*;
        pub fn configure(cfg: &mut web::ServiceConfig) {
            cfg.service(
                web::scope("/communities")
                    .route("", web::get().to(handlers::communities::list_communities))
                    .route("/{id}", web::get().to(handlers::communities::get_community))
                    .route(
                        "/{id}/join/toggle",
                        web::post().to(handlers::communities::toggle_join),
                    ),
            );
        }
    }

    pub mod chat {
        use super::*;
        pub fn configure(cfg: &mut web::ServiceConfig) {
            cfg.service(
                web::scope("/conversations")
                    .route("", web::get().to(handlers::chat::list_conversations))
                    .route("", web::post().to(handlers::chat::create_conversation))
                    .route(
                        "/{id}/messages",
                        web::get().to(handlers::chat::get_messages),
                    )
                    .route(
                        "/{id}/messages",
                        web::post().to(handlers::chat::send_message),
                    ),
            );
        }
    }

    pub mod media {
        use super::*;
        pub fn configure(cfg: &mut web::ServiceConfig) {
            cfg.service(
                web::scope("/media")
                    .route("/bio", web::post().to(handlers::media::generate_bio))
                    .route("/image", web::post().to(handlers::media::generate_image)),
            );
        }
    }
}
