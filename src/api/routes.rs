// src/api/routes.rs
use actix_web::web;

use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // HTML form page
    cfg.service(
        web::resource("/")
            // GET: render the empty form
            .route(web::get().to(handlers::pages::index))
            // POST: generate from the submitted form
            .route(web::post().to(handlers::pages::generate)),
    );

    // JSON passphrase generator
    cfg.service(
        web::scope("/generator")
            .route("/passphrase", web::post().to(handlers::generator::generate_passphrase))
            .route("/analysis/{phrase}", web::get().to(handlers::generator::analyze_strength)),
    );
}
