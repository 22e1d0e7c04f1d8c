use sqlx::PgConnection;

use crate::pkg::internal::adaptors::site_content::spec::SiteContentEntry;
use crate::prelude::Result;

pub struct SiteContentSelector<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> SiteContentSelector<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        SiteContentSelector { conn }
    }

    pub async fn get_all(&mut self) -> Result<Vec<SiteContentEntry>> {
        let rows = sqlx::query_as::<_, SiteContentEntry>(
            "SELECT section_key, content FROM site_content ORDER BY section_key",
        )
        .fetch_all(&mut *self.conn)
        .await?;
        Ok(rows)
    }
}
