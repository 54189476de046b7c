//! Input validation for categories and contacts.
//!
//! Functions return `Err(String)` with a human-readable message; callers
//! wrap it in [`CoreError::Validation`](crate::error::CoreError::Validation).

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a category label in characters.
pub const MAX_LABEL_LENGTH: usize = 100;

/// Maximum length of any free-text contact field in characters.
pub const MAX_CONTACT_FIELD_LENGTH: usize = 255;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a category label: non-blank and within the length limit.
pub fn validate_label(label: &str) -> Result<(), String> {
    if label.trim().is_empty() {
        return Err("Category label cannot be empty".to_string());
    }
    if label.chars().count() > MAX_LABEL_LENGTH {
        return Err(format!(
            "Category label exceeds maximum length of {MAX_LABEL_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a contact email: non-blank, contains an `@` with text on both
/// sides, and within the length limit.
pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
        _ => return Err(format!("Invalid email address '{email}'")),
    }
    validate_contact_field("email", email)
}

/// Validate the length of a free-text contact field. Empty values are allowed.
pub fn validate_contact_field(field: &str, value: &str) -> Result<(), String> {
    if value.chars().count() > MAX_CONTACT_FIELD_LENGTH {
        return Err(format!(
            "Field '{field}' exceeds maximum length of {MAX_CONTACT_FIELD_LENGTH} characters"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate_label ------------------------------------------------------

    #[test]
    fn valid_label_accepted() {
        assert!(validate_label("friends").is_ok());
    }

    #[test]
    fn blank_label_rejected() {
        assert!(validate_label("").is_err());
        assert!(validate_label("   ").is_err());
    }

    #[test]
    fn overlong_label_rejected() {
        let label = "x".repeat(MAX_LABEL_LENGTH + 1);
        let err = validate_label(&label).unwrap_err();
        assert!(err.contains("maximum length"));
    }

    #[test]
    fn label_at_limit_accepted() {
        assert!(validate_label(&"x".repeat(MAX_LABEL_LENGTH)).is_ok());
    }

    // -- validate_email ------------------------------------------------------

    #[test]
    fn valid_email_accepted() {
        assert!(validate_email("a@x.com").is_ok());
    }

    #[test]
    fn email_without_at_rejected() {
        assert!(validate_email("alice.example.com").is_err());
    }

    #[test]
    fn email_with_empty_side_rejected() {
        assert!(validate_email("@x.com").is_err());
        assert!(validate_email("alice@").is_err());
    }

    #[test]
    fn empty_email_rejected() {
        assert!(validate_email("").is_err());
    }

    // -- validate_contact_field ----------------------------------------------

    #[test]
    fn empty_field_allowed() {
        assert!(validate_contact_field("phone", "").is_ok());
    }

    #[test]
    fn overlong_field_names_the_field() {
        let value = "9".repeat(MAX_CONTACT_FIELD_LENGTH + 1);
        let err = validate_contact_field("phone", &value).unwrap_err();
        assert!(err.contains("'phone'"));
    }
}
