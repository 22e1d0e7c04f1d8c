use std::sync::Arc;

use axum::extract::State;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use validator::Validate;

use crate::pkg::internal::adaptors::site_content::mutators::SiteContentMutator;
use crate::pkg::internal::adaptors::site_content::selectors::SiteContentSelector;
use crate::pkg::internal::auth::Admin;
use crate::pkg::server::state::AppState;
use crate::prelude::{Error, Result};

#[derive(Deserialize, Validate)]
pub struct UpsertSectionInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub section: String,
    #[serde(default)]
    pub data: Value,
}

/// Public read: every section keyed by name in one document.
pub async fn list(State(state): State<AppState>) -> Result<Json<Value>> {
    let mut conn = state.db_pool.acquire().await?;
    let sections = SiteContentSelector::new(&mut conn).get_all().await?;
    let mut map = serde_json::Map::new();
    for entry in sections {
        map.insert(entry.section_key, entry.content);
    }
    Ok(Json(Value::Object(map)))
}

pub async fn upsert(
    State(state): State<AppState>,
    Extension(_admin): Extension<Arc<Admin>>,
    Json(input): Json<UpsertSectionInput>,
) -> Result<Json<Value>> {
    input.validate()?;
    if input.data.is_null() {
        return Err(Error::Validation("data is required".into()));
    }
    let mut conn = state.db_pool.acquire().await?;
    SiteContentMutator::new(&mut conn)
        .upsert(&input.section, &input.data)
        .await?;
    tracing::info!("site content section {} updated", &input.section);
    Ok(Json(json!({ "success": true })))
}
