// src/api/routes.rs
use actix_web::web;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(handlers::health_check))
            .route("/example", web::get().to(handlers::get_example))
            .route("/convert", web::post().to(handlers::convert))
            .service(
                web::scope("/sessions")
                    .route("", web::post().to(handlers::create_session))
                    .route("/{id}", web::get().to(handlers::get_session))
                    .route("/{id}", web::delete().to(handlers::delete_session))
                    .route("/{id}/input", web::put().to(handlers::set_input))
                    .route("/{id}/submit", web::post().to(handlers::submit))
                    .route("/{id}/clear", web::post().to(handlers::clear))
                    .route("/{id}/example", web::post().to(handlers::load_example))
            )
    );
}

/// Everything that is not an API route falls through to the embedded page.
pub fn configure_static(cfg: &mut web::ServiceConfig) {
    cfg.route("/{_:.*}", web::get().to(handlers::static_file_handler));
}
