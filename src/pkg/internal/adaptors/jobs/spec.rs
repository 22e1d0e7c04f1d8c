use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, FromRow, Debug)]
pub struct JobEntry {
    pub id: i32,
    pub title: String,
    pub location: String,
    pub experience: String,
    pub job_type: String,
    pub description: String,
    pub form_url: String,
    pub created_at: chrono::NaiveDateTime,
}
