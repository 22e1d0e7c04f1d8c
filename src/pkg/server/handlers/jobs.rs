use std::sync::Arc;

use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use validator::Validate;

use crate::pkg::internal::adaptors::jobs::mutators::JobMutator;
use crate::pkg::internal::adaptors::jobs::selectors::JobSelector;
use crate::pkg::internal::adaptors::jobs::spec::JobEntry;
use crate::pkg::internal::auth::Admin;
use crate::pkg::server::state::AppState;
use crate::prelude::Result;

/// Full field set for both create and update. Updates replace the row
/// wholesale, so a partial body fails validation instead of silently
/// zeroing columns.
#[derive(Deserialize, Validate)]
pub struct JobInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub location: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub experience: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub job_type: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub description: String,
    #[serde(default)]
    pub form_url: String,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<JobEntry>>> {
    let mut conn = state.db_pool.acquire().await?;
    let jobs = JobSelector::new(&mut conn).get_all().await?;
    Ok(Json(jobs))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(_admin): Extension<Arc<Admin>>,
    Json(input): Json<JobInput>,
) -> Result<Json<Value>> {
    input.validate()?;
    let mut conn = state.db_pool.acquire().await?;
    let job = JobMutator::new(&mut conn).create(&input).await?;
    tracing::info!("job {} created: {}", job.id, &job.title);
    Ok(Json(json!({ "success": true, "id": job.id })))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(_admin): Extension<Arc<Admin>>,
    Path(id): Path<i32>,
    Json(input): Json<JobInput>,
) -> Result<Json<Value>> {
    input.validate()?;
    let mut conn = state.db_pool.acquire().await?;
    // unknown ids are a silent no-op
    JobMutator::new(&mut conn).update(id, &input).await?;
    Ok(Json(json!({ "success": true })))
}

pub async fn remove(
    State(state): State<AppState>,
    Extension(_admin): Extension<Arc<Admin>>,
    Path(id): Path<i32>,
) -> Result<Json<Value>> {
    let mut conn = state.db_pool.acquire().await?;
    // idempotent: deleting an absent id still reports success
    JobMutator::new(&mut conn).delete(id).await?;
    Ok(Json(json!({ "success": true })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_input() -> JobInput {
        JobInput {
            title: "Senior Backend Engineer".into(),
            location: "Kochi".into(),
            experience: "5+ years".into(),
            job_type: "Full-time".into(),
            description: "Own the services behind the careers site.".into(),
            form_url: "https://forms.example.com/apply".into(),
        }
    }

    #[test]
    fn test_full_input_is_valid() {
        assert!(full_input().validate().is_ok());
    }

    #[test]
    fn test_missing_required_field_fails_validation() {
        let mut input = full_input();
        input.location = String::new();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_partial_body_fails_validation() {
        // fields omitted from the JSON body default to empty strings and
        // must be rejected, not written through
        let input: JobInput =
            serde_json::from_str(r#"{"title": "Only a title"}"#).expect("body should deserialize");
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_form_url_is_optional() {
        let mut input = full_input();
        input.form_url = String::new();
        assert!(input.validate().is_ok());
    }
}
