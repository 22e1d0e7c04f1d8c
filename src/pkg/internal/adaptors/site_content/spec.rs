use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One editable block of the public site. The content document is opaque
/// to the backend; the frontend decides what shape each key carries.
#[derive(Serialize, Deserialize, FromRow, Debug)]
pub struct SiteContentEntry {
    pub section_key: String,
    pub content: serde_json::Value,
}
