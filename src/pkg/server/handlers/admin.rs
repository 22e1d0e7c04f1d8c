use std::sync::Arc;

use axum::extract::State;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use validator::Validate;

use crate::pkg::internal::auth::{self, Admin};
use crate::pkg::server::state::AppState;
use crate::prelude::{Error, Result};
use crate::token;

#[derive(Deserialize, Validate)]
pub struct LoginInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> Result<Json<Value>> {
    input.validate()?;
    let mut conn = state.db_pool.acquire().await?;
    let admin = Admin::verify_login(&mut conn, &input.username, &input.password).await?;
    let token = token::issue(&state.settings.secret_key, admin.id)?;
    tracing::info!("admin {} logged in", &admin.username);
    Ok(Json(json!({ "token": token })))
}

pub async fn me(Extension(admin): Extension<Arc<Admin>>) -> Result<Json<Value>> {
    Ok(Json(json!({ "ok": true, "id": admin.id })))
}

#[derive(Deserialize, Validate)]
pub struct SetupInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub password: String,
    #[serde(default)]
    pub reset: bool,
}

/// One-time credential bootstrap. A populated store rejects the call
/// unless the explicit reset flag is set, in which case the credential is
/// replaced in a single transaction.
pub async fn setup(
    State(state): State<AppState>,
    Json(input): Json<SetupInput>,
) -> Result<Json<Value>> {
    input.validate()?;
    let mut tx = state.db_pool.begin().await?;
    if Admin::get(&mut *tx).await?.is_some() && !input.reset {
        return Err(Error::Forbidden("Admin already set".into()));
    }
    let hash = auth::hash_password(&input.password)?;
    Admin::delete_all(&mut *tx).await?;
    Admin::create(&mut *tx, &input.username, &hash).await?;
    tx.commit().await?;
    tracing::info!("admin credentials initialized for {}", &input.username);
    Ok(Json(json!({ "success": true })))
}

#[derive(Deserialize, Validate)]
pub struct ChangePasswordInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub current_password: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub new_password: String,
}

/// Replaces the stored hash after confirming the current password against
/// it.
pub async fn change_password(
    State(state): State<AppState>,
    Extension(admin): Extension<Arc<Admin>>,
    Json(input): Json<ChangePasswordInput>,
) -> Result<Json<Value>> {
    input.validate()?;
    if !auth::verify_password(&input.current_password, &admin.password_hash) {
        return Err(Error::Forbidden("current password is incorrect".into()));
    }
    let hash = auth::hash_password(&input.new_password)?;
    let mut conn = state.db_pool.acquire().await?;
    Admin::set_password(&mut conn, admin.id, &hash).await?;
    tracing::info!("admin {} changed password", &admin.username);
    Ok(Json(json!({ "success": true })))
}
