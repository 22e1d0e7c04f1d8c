use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use sqlx::query;

use crate::pkg::server::state::AppState;
use crate::prelude::Result;

pub async fn livez() -> Result<()> {
    tracing::debug!("service is live");
    Ok(())
}

/// Reports store connectivity without failing the route: a broken
/// database shows up as a degraded body, not an error response.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    match query("select 1").execute(&*state.db_pool).await {
        Ok(_) => Json(json!({ "status": "ok", "db": "connected" })),
        Err(e) => {
            tracing::error!("health check could not reach database: {}", e);
            Json(json!({ "status": "degraded", "db": "disconnected" }))
        }
    }
}
