use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::prelude::{Error, Result};

/// Validity window for issued bearer tokens.
pub const TOKEN_TTL_HOURS: i64 = 12;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub id: i32,
    pub exp: i64,
}

pub fn issue(secret: &str, admin_id: i32) -> Result<String> {
    issue_with_ttl(secret, admin_id, Duration::hours(TOKEN_TTL_HOURS))
}

fn issue_with_ttl(secret: &str, admin_id: i32, ttl: Duration) -> Result<String> {
    let exp = Utc::now()
        .checked_add_signed(ttl)
        .ok_or_else(|| Error::Dependency("token expiry out of range".into()))?
        .timestamp();
    let claims = Claims { id: admin_id, exp };
    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}

pub fn verify(secret: &str, token: &str) -> Result<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| Error::Forbidden(format!("invalid token: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_issue_and_verify() {
        let token = issue(SECRET, 1).expect("token should issue");
        let claims = verify(SECRET, &token).expect("token should verify");
        assert_eq!(claims.id, 1);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issue(SECRET, 1).expect("token should issue");
        let err = verify("other-secret", &token).unwrap_err();
        assert!(matches!(err, Error::Forbidden(_)));
    }

    #[test]
    fn test_expired_token_rejected() {
        let token = issue_with_ttl(SECRET, 1, Duration::hours(-1)).expect("token should issue");
        let err = verify(SECRET, &token).unwrap_err();
        assert!(matches!(err, Error::Forbidden(_)));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let token = issue(SECRET, 1).expect("token should issue");
        let tampered = format!("{}x", token);
        assert!(verify(SECRET, &tampered).is_err());
    }
}
