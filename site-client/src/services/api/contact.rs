//! # Contact Endpoint
//!
//! Contact form submission with mandatory pre-flight validation.

use shared::{ApiResponse, ContactReceipt, ContactSubmission};

use super::client::ApiClient;
use crate::core::error::Result;
use crate::utils::validation::validate_submission;

/// Submit the contact form.
///
/// Validation runs before any network I/O: an invalid submission returns
/// `ApiError::Validation` and produces zero HTTP requests. There is no
/// retry on failure; a re-submission is a fresh call initiated by the user.
#[tracing::instrument(skip(client, submission), fields(email = %submission.email))]
pub async fn submit_contact(
    client: &ApiClient,
    submission: &ContactSubmission,
) -> Result<ApiResponse<ContactReceipt>> {
    validate_submission(submission)?;

    let result = client
        .post_envelope::<ContactReceipt, _>("/contact", submission)
        .await;

    match &result {
        Ok(envelope) => {
            tracing::info!(reference_id = %envelope.data.reference_id, "Contact submission accepted");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Contact submission failed");
        }
    }

    result
}
