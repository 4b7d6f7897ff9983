//! Input validation: the boundary check run before any wizard mutation.

use crate::models::{WizardError, MAX_ENTRY_LEN};

/// Validate a raw team or player name and return the trimmed slice.
///
/// Rejects, in order: empty after trimming, longer than 30 characters,
/// anything outside letters, digits, and spaces. Callers must validate
/// before mutating the wizard so that rejected input never reaches it.
pub fn validate_entry(raw: &str) -> Result<&str, WizardError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(WizardError::EmptyInput);
    }
    if trimmed.len() > MAX_ENTRY_LEN {
        return Err(WizardError::TooLong { max: MAX_ENTRY_LEN });
    }
    if !trimmed.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ') {
        return Err(WizardError::InvalidCharacters);
    }
    Ok(trimmed)
}
