//! CUI normalization and validation
//!
//! The CUI (cod unic de identificare) is the fiscal registration code used
//! as the lookup key across every endpoint. Callers may pass it with the
//! `RO` prefix, spaces or punctuation; normalization keeps only the digits.

use crate::error::OpenFirmeError;

/// Machine code for a CUI that fails validation.
pub const CODE_INVALID_CUI: &str = "INVALID_CUI_FORMAT";

/// Minimum number of digits in a valid CUI.
pub const CUI_MIN_DIGITS: usize = 2;

/// Maximum number of digits in a valid CUI.
pub const CUI_MAX_DIGITS: usize = 10;

/// Normalize a caller-supplied CUI and validate its shape
///
/// Strips every non-digit character, then requires 2 to 10 digits
/// inclusive. Runs before any network activity; a failure here never
/// touches the transport.
///
/// # Errors
///
/// Returns [`OpenFirmeError::Validation`] with code `INVALID_CUI_FORMAT`
/// when the normalized form is out of range.
pub fn normalize_cui(input: &str) -> Result<String, OpenFirmeError> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() < CUI_MIN_DIGITS || digits.len() > CUI_MAX_DIGITS {
        return Err(OpenFirmeError::Validation {
            message: format!(
                "Invalid CUI '{input}': expected {CUI_MIN_DIGITS}-{CUI_MAX_DIGITS} digits, got {}",
                digits.len()
            ),
            code: CODE_INVALID_CUI.to_string(),
        });
    }

    Ok(digits)
}
