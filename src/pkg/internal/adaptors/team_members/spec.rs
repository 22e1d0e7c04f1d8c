use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, FromRow, Debug)]
pub struct TeamMemberEntry {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub photo: String,
    pub sort_order: i32,
    pub created_at: chrono::NaiveDateTime,
}
