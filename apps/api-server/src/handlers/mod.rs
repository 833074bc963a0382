//! HTTP handlers and route configuration.

mod health;
mod posts;
mod uploads;


use actix_files::Files;
use actix_web::web;

use crate::config::AppConfig;
use crate::middleware::error::json_error_handler;
use crate::state::AppState;

/// Route table plus the state and limits it needs.
///
/// Everything comes from the arguments; tests build their own `AppConfig`
/// and `AppState` and call this the same way `main` does.
pub fn configure(state: AppState, config: AppConfig) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let json_config = web::JsonConfig::default()
            .limit(config.max_body_bytes)
            .error_handler(json_error_handler);
        let upload_dir = config.upload_dir.clone();

        cfg.app_data(web::Data::new(state))
            .app_data(web::Data::new(config))
            .app_data(json_config)
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Uploads
            .service(
                web::scope("/upload")
                    .route("/user", web::post().to(uploads::upload_user))
                    .route("/post", web::post().to(uploads::upload_post)),
            )
            // Posts
            .service(
                web::resource("/posts")
                    .route(web::get().to(posts::list))
                    .route(web::post().to(posts::create))
                    .route(web::delete().to(posts::delete_all)),
            )
            .service(
                web::resource("/posts/{id}")
                    .route(web::get().to(posts::get))
                    .route(web::put().to(posts::replace))
                    .route(web::patch().to(posts::increment_like))
                    .route(web::delete().to(posts::delete)),
            )
            // Uploaded files, publicly readable
            .service(Files::new("/uploads", upload_dir));
    }
}
