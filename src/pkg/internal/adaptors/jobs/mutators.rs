use sqlx::PgConnection;

use crate::pkg::internal::adaptors::jobs::spec::JobEntry;
use crate::pkg::server::handlers::jobs::JobInput;
use crate::prelude::Result;

pub struct JobMutator<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> JobMutator<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        JobMutator { conn }
    }

    pub async fn create(&mut self, job: &JobInput) -> Result<JobEntry> {
        let row = sqlx::query_as::<_, JobEntry>(
            r#"
            INSERT INTO jobs (title, location, experience, job_type, description, form_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, location, experience, job_type, description, form_url, created_at
            "#,
        )
        .bind(&job.title)
        .bind(&job.location)
        .bind(&job.experience)
        .bind(&job.job_type)
        .bind(&job.description)
        .bind(&job.form_url)
        .fetch_one(&mut *self.conn)
        .await?;
        Ok(row)
    }

    /// Full-row replace. Unknown ids leave the table untouched; the caller
    /// reports success either way.
    pub async fn update(&mut self, id: i32, job: &JobInput) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE jobs
            SET title = $2, location = $3, experience = $4, job_type = $5,
                description = $6, form_url = $7
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&job.title)
        .bind(&job.location)
        .bind(&job.experience)
        .bind(&job.job_type)
        .bind(&job.description)
        .bind(&job.form_url)
        .execute(&mut *self.conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&mut self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
