// src/api/mod.rs
use std::io;

use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

use crate::core::config::Config;
use crate::words::WordClient;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate_passphrase,
        crate::api::handlers::generator::analyze_strength,
    ),
    components(
        schemas(
            crate::api::types::PassphraseGenerationRequest,
            crate::api::types::PassphraseGenerationResponse,
            crate::api::types::StrengthAnalysisResponse,
            crate::models::PassphraseOptions,
            crate::models::StrengthRating,
        )
    ),
    tags(
        (name = "Generator", description = "Passphrase generation and strength analysis endpoints")
    ),
    info(
        title = "Passphrase Generator API",
        version = "0.1.0",
        description = "Generates human-readable passphrases from randomly fetched English words",
        license(name = "GPL-3.0")
    )
)]
struct ApiDoc;

pub async fn start_server(config: Config) -> io::Result<()> {
    log::info!(
        "Starting passphrase generator server on {}:{}",
        config.web_address,
        config.web_port
    );

    let client = WordClient::new(&config)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    let client_data = web::Data::new(client);
    let config_data = web::Data::new(config.clone());

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(client_data.clone())
            .app_data(config_data.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            // Configure the regular routes
            .configure(routes::configure_routes)
    })
    .bind((config.web_address.as_str(), config.web_port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;
