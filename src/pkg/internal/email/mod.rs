use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

pub mod enquiry;

use crate::conf::Settings;
use crate::prelude::{Error, Result};

/// Sends one message through the configured SMTP relay. The blocking
/// transport runs on the blocking pool and is awaited, so callers observe
/// dispatch failures; there is no retry.
pub async fn send_email(
    settings: &Settings,
    to: &str,
    subject: &str,
    body: &str,
    is_html: bool,
) -> Result<()> {
    if settings.smtp_server.is_empty() || settings.from_email.is_empty() {
        return Err(Error::Dependency("mail transport is not configured".into()));
    }
    let from = format!("{} <{}>", &settings.service_name, &settings.from_email);
    let to = to.to_string();
    let subject = subject.to_string();
    let body = body.to_string();
    let server = settings.smtp_server.clone();
    let port = settings.smtp_port;
    let creds = Credentials::new(settings.smtp_user.clone(), settings.smtp_pass.clone());
    tracing::debug!("sending email to {}", &to);
    tokio::task::spawn_blocking(move || {
        let content_type = if is_html {
            ContentType::TEXT_HTML
        } else {
            ContentType::TEXT_PLAIN
        };

        let message = Message::builder()
            .from(from
                .parse()
                .map_err(|e| Error::Dependency(format!("bad sender address: {}", e)))?)
            .to(to
                .parse()
                .map_err(|e| Error::Dependency(format!("bad recipient address: {}", e)))?)
            .subject(subject)
            .header(content_type)
            .body(body)
            .map_err(|e| Error::Dependency(format!("could not build message: {}", e)))?;

        let mailer = SmtpTransport::relay(&server)
            .map_err(|e| Error::Dependency(format!("smtp relay unavailable: {}", e)))?
            .port(port)
            .credentials(creds)
            .build();

        mailer
            .send(&message)
            .map_err(|e| Error::Dependency(format!("email dispatch failed: {}", e)))?;
        Ok(())
    })
    .await
    .map_err(|e| Error::Dependency(format!("mail task failed: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_unconfigured_transport_is_an_error() {
        let settings: Settings = serde_json::from_value(json!({
            "database_url": "postgres://localhost/careers"
        }))
        .expect("settings should deserialize");
        let err = send_email(&settings, "someone@example.com", "hi", "body", false)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Dependency(_)));
    }
}
