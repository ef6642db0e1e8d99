use serde::{Deserialize, Serialize};

/// Contact form submission body.
///
/// The client validates all required fields before any network call is made.
/// `recaptcha_token` is part of the wire contract but optional: it is
/// serialized only when present and never fabricated client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub subject: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recaptcha_token: Option<String>,
}

/// Server acknowledgement of a contact submission.
///
/// `reference_id` is the sole artifact retained client-side for the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactReceipt {
    pub reference_id: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_omitted_when_absent() {
        let submission = ContactSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            company: None,
            subject: "Pilot program".to_string(),
            message: "We would like to trial the orchard drones.".to_string(),
            recaptcha_token: None,
        };
        let json = serde_json::to_value(&submission).unwrap();
        assert!(json.get("company").is_none());
        assert!(json.get("recaptcha_token").is_none());
    }
}
