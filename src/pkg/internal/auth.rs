use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use sqlx::prelude::FromRow;
use sqlx::PgConnection;

use crate::prelude::{Error, Result};

#[derive(FromRow, Debug, Clone)]
pub struct Admin {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
}

/// Hashes a password with Argon2id and returns the PHC string, salt and
/// parameters included.
pub fn hash_password(plaintext: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::Dependency(format!("password hashing failed: {}", e)))
}

/// Verifies a plaintext password against a stored PHC string. An
/// unparseable stored hash counts as a mismatch.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

impl Admin {
    pub async fn get(conn: &mut PgConnection) -> Result<Option<Admin>> {
        Ok(sqlx::query_as::<_, Admin>(
            "SELECT id, username, password_hash FROM admins ORDER BY id LIMIT 1",
        )
        .fetch_optional(conn)
        .await?)
    }

    pub async fn get_by_id(conn: &mut PgConnection, id: i32) -> Result<Option<Admin>> {
        Ok(sqlx::query_as::<_, Admin>(
            "SELECT id, username, password_hash FROM admins WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(conn)
        .await?)
    }

    pub async fn get_by_username(conn: &mut PgConnection, username: &str) -> Result<Option<Admin>> {
        Ok(sqlx::query_as::<_, Admin>(
            "SELECT id, username, password_hash FROM admins WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(conn)
        .await?)
    }

    pub async fn create(
        conn: &mut PgConnection,
        username: &str,
        password_hash: &str,
    ) -> Result<Admin> {
        let admin = sqlx::query_as::<_, Admin>(
            r#"
            INSERT INTO admins (username, password_hash)
            VALUES ($1, $2)
            RETURNING id, username, password_hash
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(conn)
        .await?;
        Ok(admin)
    }

    pub async fn delete_all(conn: &mut PgConnection) -> Result<()> {
        sqlx::query("DELETE FROM admins").execute(conn).await?;
        Ok(())
    }

    pub async fn set_password(
        conn: &mut PgConnection,
        id: i32,
        password_hash: &str,
    ) -> Result<()> {
        sqlx::query("UPDATE admins SET password_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(conn)
            .await?;
        Ok(())
    }

    /// Looks up the admin by username and checks the password. Both an
    /// unknown username and a hash mismatch map to the same Unauthorized
    /// error so login probes learn nothing.
    pub async fn verify_login(
        conn: &mut PgConnection,
        username: &str,
        password: &str,
    ) -> Result<Admin> {
        let admin = Self::get_by_username(conn, username)
            .await?
            .ok_or_else(|| Error::Unauthorized("invalid username or password".into()))?;
        if !verify_password(password, &admin.password_hash) {
            tracing::warn!("failed login attempt for {}", username);
            return Err(Error::Unauthorized("invalid username or password".into()));
        }
        Ok(admin)
    }
}

#[cfg(test)]
mod tests {
    use super::{hash_password, verify_password};

    #[test]
    fn test_hash_and_verify_password() {
        let hash = hash_password("admin123").expect("hashing should succeed");
        assert!(verify_password("admin123", &hash));
        assert!(!verify_password("wrong-password", &hash));
    }

    #[test]
    fn test_unparseable_hash_is_mismatch() {
        assert!(!verify_password("admin123", "not-a-phc-string"));
    }
}
