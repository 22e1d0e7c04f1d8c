use std::fmt::{self, Display};

use super::send_email;
use crate::conf::Settings;
use crate::prelude::{Error, Result};

/// Contact-form submission rendered as the notification email.
pub struct EnquiryTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub message: &'a str,
}

impl<'a> Display for EnquiryTemplate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let html_template = format!(
            r#"
            <!DOCTYPE html>
            <html>
            <head>
                <meta charset="utf-8">
                <title>Website Enquiry</title>
            </head>
            <body style="font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Arial, sans-serif; color: #333;">
                <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
                    <h2 style="color: #111827;">New enquiry from the website</h2>
                    <table cellpadding="6">
                        <tr><td><strong>Name</strong></td><td>{}</td></tr>
                        <tr><td><strong>Email</strong></td><td>{}</td></tr>
                        <tr><td><strong>Phone</strong></td><td>{}</td></tr>
                    </table>
                    <div style="background-color: #f3f4f6; padding: 15px; border-radius: 6px; margin: 20px 0;">
                        <p>{}</p>
                    </div>
                </div>
            </body>
            </html>
            "#,
            self.name, self.email, self.phone, self.message
        );
        write!(f, "{}", html_template)
    }
}

impl<'a> EnquiryTemplate<'a> {
    pub async fn send(&self, settings: &Settings) -> Result<()> {
        if settings.enquiry_email.is_empty() {
            return Err(Error::Dependency("enquiry inbox is not configured".into()));
        }
        send_email(
            settings,
            &settings.enquiry_email,
            "New website enquiry",
            &format!("{}", &self),
            true,
        )
        .await
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn test_enquiry_template_renders_fields() {
        let rendered = EnquiryTemplate {
            name: "Asha",
            email: "asha@example.com",
            phone: "+91 90000 00000",
            message: "Interested in the open frontend role.",
        }
        .to_string();
        assert!(rendered.contains("Asha"));
        assert!(rendered.contains("asha@example.com"));
        assert!(rendered.contains("Interested in the open frontend role."));
    }
}
