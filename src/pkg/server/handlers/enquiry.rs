use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use validator::Validate;

use crate::pkg::internal::email::enquiry::EnquiryTemplate;
use crate::pkg::server::state::AppState;
use crate::prelude::Result;

#[derive(Deserialize, Validate)]
pub struct EnquiryInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub message: String,
}

/// Sends the submission to the enquiry inbox, awaiting the SMTP round
/// trip so transport failure surfaces to the caller.
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<EnquiryInput>,
) -> Result<Json<Value>> {
    input.validate()?;
    EnquiryTemplate {
        name: &input.name,
        email: &input.email,
        phone: &input.phone,
        message: &input.message,
    }
    .send(&state.settings)
    .await?;
    tracing::info!("enquiry forwarded for {}", &input.name);
    Ok(Json(json!({ "success": true })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_email_fails_validation() {
        let input: EnquiryInput = serde_json::from_str(
            r#"{"name": "Asha", "email": "not-an-address", "message": "Hello"}"#,
        )
        .expect("body should deserialize");
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_phone_is_optional() {
        let input: EnquiryInput = serde_json::from_str(
            r#"{"name": "Asha", "email": "asha@example.com", "message": "Hello"}"#,
        )
        .expect("body should deserialize");
        assert!(input.validate().is_ok());
    }
}
