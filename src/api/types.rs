// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::models::StrengthRating;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PassphraseGenerationRequest {
    /// Minimum combined word length (defaults to the configured value)
    pub min_length: Option<usize>,
    /// Append a random two-digit number (default: true)
    pub add_number: Option<bool>,
    /// Append a random special character (default: false)
    pub add_special: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PassphraseGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// The generated passphrase (only present on success)
    pub passphrase: Option<String>,
    /// Strength rating of the generated passphrase (only present on success)
    pub strength: Option<StrengthRating>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StrengthAnalysisResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Strength rating of the analyzed passphrase
    pub rating: StrengthRating,
    /// Human-readable suggestions derived from the rating
    pub feedback: Vec<String>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

// HTML form submission; checkboxes arrive as "on" when ticked and are
// absent otherwise
#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    pub min_length: Option<usize>,
    pub add_number: Option<String>,
    pub add_special: Option<String>,
}

impl GenerateForm {
    pub fn add_number(&self) -> bool {
        self.add_number.is_some()
    }

    pub fn add_special(&self) -> bool {
        self.add_special.is_some()
    }
}
