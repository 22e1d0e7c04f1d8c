use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::pkg::internal::auth::Admin;
use crate::pkg::server::state::AppState;
use crate::prelude::{Error, Result};
use crate::token;

/// Gate on mutating routes. An absent header is Unauthorized; a header
/// that fails signature, expiry, or admin lookup is Forbidden. The matched
/// admin row is attached to the request for downstream handlers.
pub async fn authenticate(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            tracing::warn!("token missing, authentication denied");
            Error::Unauthorized("missing bearer token".into())
        })?;
    let raw = header.strip_prefix("Bearer ").unwrap_or(header).trim();
    let claims = token::verify(&state.settings.secret_key, raw)?;
    let mut conn = state.db_pool.acquire().await?;
    let admin = Admin::get_by_id(&mut conn, claims.id)
        .await?
        .ok_or_else(|| Error::Forbidden("token does not match a known admin".into()))?;
    request.extensions_mut().insert(Arc::new(admin));
    Ok(next.run(request).await)
}
