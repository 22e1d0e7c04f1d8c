use config::{Config, ConfigError, Environment};
use serde::Deserialize;

fn default_service_name() -> String {
    "HashOne Careers".into()
}

fn default_listen_port() -> String {
    "3000".into()
}

fn default_pool_connections() -> u32 {
    5
}

// Fallback signing key; every real deployment must override SECRET_KEY.
fn default_secret_key() -> String {
    "hashone-dev-secret".into()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_static_dir() -> String {
    "static".into()
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_listen_port")]
    pub listen_port: String,
    pub database_url: String,
    #[serde(default = "default_pool_connections")]
    pub database_pool_max_connections: u32,
    #[serde(default = "default_secret_key")]
    pub secret_key: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    //email
    #[serde(default)]
    pub from_email: String,
    #[serde(default)]
    pub enquiry_email: String,
    #[serde(default)]
    pub smtp_user: String,
    #[serde(default)]
    pub smtp_pass: String,
    #[serde(default)]
    pub smtp_server: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .add_source(Environment::default())
            .build()?;
        conf.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_applied() {
        let settings: Settings = serde_json::from_value(json!({
            "database_url": "postgres://localhost/careers"
        }))
        .expect("minimal settings should deserialize");
        assert_eq!(settings.listen_port, "3000");
        assert_eq!(settings.database_pool_max_connections, 5);
        assert_eq!(settings.secret_key, "hashone-dev-secret");
        assert!(settings.smtp_server.is_empty());
    }

    #[test]
    fn test_database_url_required() {
        let result = serde_json::from_value::<Settings>(json!({}));
        assert!(result.is_err());
    }
}
