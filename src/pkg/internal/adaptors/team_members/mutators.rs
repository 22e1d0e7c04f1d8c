use sqlx::PgConnection;

use crate::pkg::internal::adaptors::team_members::spec::TeamMemberEntry;
use crate::pkg::server::handlers::team_members::TeamMemberInput;
use crate::prelude::Result;

pub struct TeamMemberMutator<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> TeamMemberMutator<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        TeamMemberMutator { conn }
    }

    pub async fn create(&mut self, member: &TeamMemberInput) -> Result<TeamMemberEntry> {
        let row = sqlx::query_as::<_, TeamMemberEntry>(
            r#"
            INSERT INTO team_members (name, role, bio, photo, sort_order)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, role, bio, photo, sort_order, created_at
            "#,
        )
        .bind(&member.name)
        .bind(&member.role)
        .bind(&member.bio)
        .bind(&member.photo)
        .bind(member.sort_order)
        .fetch_one(&mut *self.conn)
        .await?;
        Ok(row)
    }

    /// Full-row replace. Unknown ids leave the table untouched; the caller
    /// reports success either way.
    pub async fn update(&mut self, id: i32, member: &TeamMemberInput) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE team_members
            SET name = $2, role = $3, bio = $4, photo = $5, sort_order = $6
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&member.name)
        .bind(&member.role)
        .bind(&member.bio)
        .bind(&member.photo)
        .bind(member.sort_order)
        .execute(&mut *self.conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&mut self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM team_members WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
