use sqlx::PgConnection;

use crate::pkg::internal::adaptors::team_members::spec::TeamMemberEntry;
use crate::prelude::Result;

pub struct TeamMemberSelector<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> TeamMemberSelector<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        TeamMemberSelector { conn }
    }

    /// Roster order: explicit sort_order first, insertion order as the
    /// tie-break.
    pub async fn get_all(&mut self) -> Result<Vec<TeamMemberEntry>> {
        let rows = sqlx::query_as::<_, TeamMemberEntry>(
            r#"
            SELECT id, name, role, bio, photo, sort_order, created_at
            FROM team_members ORDER BY sort_order ASC, id ASC
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;
        Ok(rows)
    }
}
