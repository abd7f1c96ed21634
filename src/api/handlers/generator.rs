// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};

use crate::api::types::{
    PassphraseGenerationRequest, PassphraseGenerationResponse,
    StrengthAnalysisResponse,
};
use crate::core::config::Config;
use crate::generators;
use crate::models::{PassphraseOptions, StrengthRating, MIN_LENGTH_CEIL, MIN_LENGTH_FLOOR};
use crate::words::WordClient;

// Error copy shown for every upstream failure
pub const FETCH_FAILED_MSG: &str = "Failed to fetch words. Please try again.";

/// Generate a passphrase
///
/// Generates a passphrase from randomly fetched English words based on the
/// provided options.
#[utoipa::path(
    post,
    path = "/generator/passphrase",
    tag = "Generator",
    request_body = PassphraseGenerationRequest,
    responses(
        (status = 200, description = "Generated passphrase", body = PassphraseGenerationResponse),
        (status = 400, description = "Invalid options", body = PassphraseGenerationResponse),
        (status = 500, description = "Word source failure", body = PassphraseGenerationResponse)
    )
)]
pub async fn generate_passphrase(
    client: web::Data<WordClient>,
    config: web::Data<Config>,
    generation_req: web::Json<PassphraseGenerationRequest>,
) -> Result<HttpResponse, actix_web::Error> {
    // Create options with defaults or provided values
    let options = PassphraseOptions {
        min_length: generation_req.min_length.unwrap_or(config.default_min_length),
        add_number: generation_req.add_number.unwrap_or(true),
        add_special: generation_req.add_special.unwrap_or(false),
    };

    // Validate options
    if options.min_length < MIN_LENGTH_FLOOR {
        return Ok(HttpResponse::BadRequest().json(PassphraseGenerationResponse {
            success: false,
            passphrase: None,
            strength: None,
            error: Some(format!(
                "Minimum length must be at least {} characters",
                MIN_LENGTH_FLOOR
            )),
        }));
    }

    if options.min_length > MIN_LENGTH_CEIL {
        return Ok(HttpResponse::BadRequest().json(PassphraseGenerationResponse {
            success: false,
            passphrase: None,
            strength: None,
            error: Some(format!(
                "Minimum length must be at most {} characters",
                MIN_LENGTH_CEIL
            )),
        }));
    }

    // Fetch words from the provider
    let words = client.fetch_words(options.min_length).await;

    // Compose the passphrase
    let passphrase = match generators::generate_passphrase(&words, &options) {
        Ok(passphrase) => passphrase,
        Err(e) => {
            log::warn!("Passphrase generation failed: {}", e);
            return Ok(HttpResponse::InternalServerError().json(
                PassphraseGenerationResponse {
                    success: false,
                    passphrase: None,
                    strength: None,
                    error: Some(FETCH_FAILED_MSG.to_string()),
                },
            ));
        }
    };

    // Calculate strength
    let strength = generators::rate_strength(&passphrase);

    Ok(HttpResponse::Ok().json(PassphraseGenerationResponse {
        success: true,
        passphrase: Some(passphrase),
        strength: Some(strength),
        error: None,
    }))
}

/// Analyze passphrase strength
///
/// Rates the strength of a passphrase and provides feedback.
#[utoipa::path(
    get,
    path = "/generator/analysis/{phrase}",
    tag = "Generator",
    params(
        ("phrase" = String, Path, description = "Passphrase to analyze")
    ),
    responses(
        (status = 200, description = "Strength analysis result", body = StrengthAnalysisResponse)
    )
)]
pub async fn analyze_strength(path: web::Path<String>) -> impl Responder {
    // The router hands over the path segment already percent-decoded
    HttpResponse::Ok().json(build_analysis(&path.into_inner()))
}

fn build_analysis(phrase: &str) -> StrengthAnalysisResponse {
    let rating = generators::rate_strength(phrase);

    // Generate feedback based on the rating
    let mut feedback = Vec::new();
    match rating {
        StrengthRating::Strong => {
            feedback.push("Strong passphrase".to_string());
        }
        StrengthRating::Medium => {
            feedback.push("Moderate passphrase".to_string());
            if phrase.chars().count() < 12 {
                feedback.push(
                    "Increase the minimum length to at least 12 characters".to_string(),
                );
            }
            if !phrase.chars().any(|c| !c.is_alphanumeric() && c != '-') {
                feedback.push("Add a special character for better security".to_string());
            }
        }
        StrengthRating::Weak => {
            feedback.push("Weak passphrase".to_string());
            if !phrase.chars().any(|c| c.is_ascii_digit()) {
                feedback.push("Add a number suffix for better security".to_string());
            }
            if !phrase.chars().any(|c| !c.is_alphanumeric() && c != '-') {
                feedback.push("Add a special character for better security".to_string());
            }
            if phrase.chars().count() < 8 {
                feedback.push("Increase the minimum length".to_string());
            }
        }
    }

    StrengthAnalysisResponse {
        success: true,
        rating,
        feedback,
        error: None,
    }
}
