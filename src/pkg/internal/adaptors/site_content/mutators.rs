use sqlx::PgConnection;

use crate::prelude::Result;

pub struct SiteContentMutator<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> SiteContentMutator<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        SiteContentMutator { conn }
    }

    /// Wholesale upsert keyed by section: an existing document is replaced,
    /// never merged.
    pub async fn upsert(&mut self, section_key: &str, content: &serde_json::Value) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO site_content (section_key, content)
            VALUES ($1, $2)
            ON CONFLICT (section_key) DO UPDATE
            SET content = EXCLUDED.content
            "#,
        )
        .bind(section_key)
        .bind(content)
        .execute(&mut *self.conn)
        .await?;
        Ok(())
    }
}
