//! Note constants and validation functions.

use crate::error::CoreError;

/// Maximum length of a note title in characters.
pub const MAX_NOTE_TITLE_LENGTH: usize = 200;

/// Maximum length of a note body in characters.
pub const MAX_NOTE_BODY_LENGTH: usize = 10_000;

/// Validate a new note. All three fields are required.
///
/// Returns the trimmed title and recipient so callers store exactly what was
/// validated.
pub fn validate_new_note<'a>(
    title: &'a str,
    body: &'a str,
    recipient_id: &'a str,
) -> Result<(&'a str, &'a str, &'a str), CoreError> {
    let title = title.trim();
    let recipient_id = recipient_id.trim();

    if title.is_empty() || body.trim().is_empty() || recipient_id.is_empty() {
        return Err(CoreError::Validation(
            "Please fill out the title, content, and select a user.".to_string(),
        ));
    }
    if title.chars().count() > MAX_NOTE_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Note title exceeds maximum length of {MAX_NOTE_TITLE_LENGTH} characters"
        )));
    }
    if body.chars().count() > MAX_NOTE_BODY_LENGTH {
        return Err(CoreError::Validation(format!(
            "Note content exceeds maximum length of {MAX_NOTE_BODY_LENGTH} characters"
        )));
    }
    Ok((title, body, recipient_id))
}
