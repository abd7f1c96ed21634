// src/models.rs
use std::fmt;

use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

/// Smallest minimum length the form accepts.
pub const MIN_LENGTH_FLOOR: usize = 8;
/// Largest minimum length the form accepts.
pub const MIN_LENGTH_CEIL: usize = 128;

// Passphrase generation options
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PassphraseOptions {
    /// Minimum combined character count of the words in the passphrase
    /// (hyphens and suffixes do not count towards it)
    pub min_length: usize,
    /// Append a random two-digit number
    pub add_number: bool,
    /// Append a random special character
    pub add_special: bool,
}

impl Default for PassphraseOptions {
    fn default() -> Self {
        Self {
            min_length: 16,
            add_number: true,
            add_special: false,
        }
    }
}

/// Coarse strength classification of a generated passphrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StrengthRating {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for StrengthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthRating::Weak => write!(f, "Weak"),
            StrengthRating::Medium => write!(f, "Medium"),
            StrengthRating::Strong => write!(f, "Strong"),
        }
    }
}
