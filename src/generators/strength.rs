// src/generators/strength.rs
use crate::models::StrengthRating;

/// Rate passphrase strength from character classes and length.
///
/// Four factors are checked: uppercase, lowercase, ASCII digit, and a
/// special character. The hyphen word separator never counts as special.
pub fn rate_strength(passphrase: &str) -> StrengthRating {
    let has_upper = passphrase.chars().any(|c| c.is_uppercase());
    let has_lower = passphrase.chars().any(|c| c.is_lowercase());
    let has_digit = passphrase.chars().any(|c| c.is_ascii_digit());
    let has_special = passphrase
        .chars()
        .any(|c| !c.is_alphanumeric() && c != '-');

    let factors = [has_upper, has_lower, has_digit, has_special]
        .iter()
        .filter(|&&present| present)
        .count();

    let length = passphrase.chars().count();

    if length >= 12 && factors == 4 {
        StrengthRating::Strong
    } else if length >= 8 && factors >= 3 {
        StrengthRating::Medium
    } else {
        StrengthRating::Weak
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_factors_and_length_twelve_is_strong() {
        assert_eq!(rate_strength("Ab3#defghijk"), StrengthRating::Strong);
    }

    #[test]
    fn single_class_is_weak() {
        assert_eq!(rate_strength("abcdefgh"), StrengthRating::Weak);
    }

    #[test]
    fn three_factors_at_length_eight_is_medium() {
        assert_eq!(rate_strength("Abcdef12"), StrengthRating::Medium);
    }

    #[test]
    fn all_factors_below_length_twelve_is_medium() {
        assert_eq!(rate_strength("Ab3#efgh"), StrengthRating::Medium);
    }

    #[test]
    fn hyphen_does_not_count_as_special() {
        // Upper + lower only; the hyphens must not add a factor
        assert_eq!(rate_strength("Grub-Craftsman"), StrengthRating::Weak);
        // With a digit suffix the hyphens still only leave three factors
        assert_eq!(rate_strength("Grub-Craftsman-42"), StrengthRating::Medium);
    }

    #[test]
    fn special_suffix_completes_four_factors() {
        assert_eq!(rate_strength("Grub-Craftsman-42-#"), StrengthRating::Strong);
    }

    #[test]
    fn short_input_is_weak_regardless_of_classes() {
        assert_eq!(rate_strength("Ab3#"), StrengthRating::Weak);
    }

    #[test]
    fn empty_input_is_weak() {
        assert_eq!(rate_strength(""), StrengthRating::Weak);
    }

    #[test]
    fn rating_is_idempotent() {
        let input = "Grub-Craftsman-42-#";
        assert_eq!(rate_strength(input), rate_strength(input));
    }
}
