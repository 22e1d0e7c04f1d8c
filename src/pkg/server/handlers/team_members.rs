use std::sync::Arc;

use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use validator::Validate;

use crate::pkg::internal::adaptors::team_members::mutators::TeamMemberMutator;
use crate::pkg::internal::adaptors::team_members::selectors::TeamMemberSelector;
use crate::pkg::internal::adaptors::team_members::spec::TeamMemberEntry;
use crate::pkg::internal::auth::Admin;
use crate::pkg::server::state::AppState;
use crate::prelude::Result;

/// Full field set for both create and update; updates are wholesale
/// replaces.
#[derive(Deserialize, Validate)]
pub struct TeamMemberInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub role: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub sort_order: i32,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<TeamMemberEntry>>> {
    let mut conn = state.db_pool.acquire().await?;
    let members = TeamMemberSelector::new(&mut conn).get_all().await?;
    Ok(Json(members))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(_admin): Extension<Arc<Admin>>,
    Json(input): Json<TeamMemberInput>,
) -> Result<Json<Value>> {
    input.validate()?;
    let mut conn = state.db_pool.acquire().await?;
    let member = TeamMemberMutator::new(&mut conn).create(&input).await?;
    tracing::info!("team member {} created: {}", member.id, &member.name);
    Ok(Json(json!({ "success": true, "id": member.id })))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(_admin): Extension<Arc<Admin>>,
    Path(id): Path<i32>,
    Json(input): Json<TeamMemberInput>,
) -> Result<Json<Value>> {
    input.validate()?;
    let mut conn = state.db_pool.acquire().await?;
    // unknown ids are a silent no-op
    TeamMemberMutator::new(&mut conn).update(id, &input).await?;
    Ok(Json(json!({ "success": true })))
}

pub async fn remove(
    State(state): State<AppState>,
    Extension(_admin): Extension<Arc<Admin>>,
    Path(id): Path<i32>,
) -> Result<Json<Value>> {
    let mut conn = state.db_pool.acquire().await?;
    // idempotent: deleting an absent id still reports success
    TeamMemberMutator::new(&mut conn).delete(id).await?;
    Ok(Json(json!({ "success": true })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_role_required() {
        let input: TeamMemberInput =
            serde_json::from_str(r#"{"bio": "Founder"}"#).expect("body should deserialize");
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_optional_fields_default() {
        let input: TeamMemberInput =
            serde_json::from_str(r#"{"name": "Priya", "role": "CEO"}"#)
                .expect("body should deserialize");
        assert!(input.validate().is_ok());
        assert_eq!(input.sort_order, 0);
        assert!(input.photo.is_empty());
    }
}
