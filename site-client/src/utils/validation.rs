/// Validation utilities for user input
///
/// Runs entirely client-side, before any network call. Invalid input must
/// produce zero HTTP requests.
use shared::ContactSubmission;

use crate::core::error::ApiError;

/// Longest message body accepted by the contact form.
const MAX_MESSAGE_LEN: usize = 5000;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    if !email.contains('@') {
        return ValidationResult::err("Invalid email format");
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return ValidationResult::err("Invalid email format");
    }

    if parts[0].is_empty() {
        return ValidationResult::err("Email username cannot be empty");
    }

    if parts[1].is_empty() || !parts[1].contains('.') {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}

/// Validate a required free-text field
pub fn validate_required(label: &str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::err(format!("{} is required", label));
    }
    ValidationResult::ok()
}

/// Validate the message body
pub fn validate_message(message: &str) -> ValidationResult {
    if message.trim().is_empty() {
        return ValidationResult::err("Message is required");
    }

    if message.len() > MAX_MESSAGE_LEN {
        return ValidationResult::err(format!(
            "Message must be at most {} characters",
            MAX_MESSAGE_LEN
        ));
    }

    ValidationResult::ok()
}

/// Validate a full contact submission, aggregating per-field failures.
///
/// Returns `ApiError::Validation` listing every failed field so the form
/// can surface them inline at once.
pub fn validate_submission(submission: &ContactSubmission) -> Result<(), ApiError> {
    let checks = [
        ("name", validate_required("Name", &submission.name)),
        ("email", validate_email(&submission.email)),
        ("subject", validate_required("Subject", &submission.subject)),
        ("message", validate_message(&submission.message)),
    ];

    let failures: Vec<String> = checks
        .into_iter()
        .filter_map(|(field, result)| {
            result
                .error
                .map(|message| format!("{}: {}", field, message))
        })
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(failures.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ada Okafor".to_string(),
            email: "ada@example.com".to_string(),
            company: None,
            subject: "Pilot program".to_string(),
            message: "We would like to trial the orchard drones.".to_string(),
            recaptcha_token: None,
        }
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email("test@example.com").is_valid);
        assert!(validate_email("user@domain.co.uk").is_valid);
        assert!(!validate_email("").is_valid);
        assert!(!validate_email("invalid").is_valid);
        assert!(!validate_email("@example.com").is_valid);
        assert!(!validate_email("test@").is_valid);
        assert!(!validate_email("a@b@c.com").is_valid);
        assert!(!validate_email("test@nodot").is_valid);
    }

    #[test]
    fn test_required_fields() {
        assert!(validate_required("Name", "Ada").is_valid);
        assert!(!validate_required("Name", "").is_valid);
        assert!(!validate_required("Subject", "   ").is_valid);
    }

    #[test]
    fn test_message_bounds() {
        assert!(validate_message("Short but real message").is_valid);
        assert!(!validate_message("").is_valid);
        assert!(!validate_message(&"x".repeat(MAX_MESSAGE_LEN + 1)).is_valid);
    }

    #[test]
    fn test_valid_submission_passes() {
        assert!(validate_submission(&submission()).is_ok());
    }

    #[test]
    fn test_invalid_submission_aggregates_fields() {
        let mut bad = submission();
        bad.email = "not-an-email".to_string();
        bad.subject = String::new();

        let err = validate_submission(&bad).unwrap_err();
        match err {
            ApiError::Validation(message) => {
                assert!(message.contains("email"));
                assert!(message.contains("subject"));
                assert!(!message.contains("name:"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_recaptcha_not_required() {
        let mut s = submission();
        s.recaptcha_token = None;
        assert!(validate_submission(&s).is_ok());
    }
}
