use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::Result;
use crate::models::job::{Company, Job, JobChanges, NewJob};

/// Persistence port for jobs. Implementations assign identifiers and
/// timestamps; callers hand in already-validated data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Job>>;
    async fn insert(&self, job: NewJob) -> Result<Job>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>>;
    /// Returns `None` when no job has this id; nothing is created in that case.
    async fn update(&self, id: Uuid, changes: JobChanges) -> Result<Option<Job>>;
    /// Returns whether a job was removed.
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

const JOB_COLUMNS: &str = "id, title, job_type, description, company_name, company_contact_email, company_contact_phone, created_at, updated_at";

#[derive(Debug, FromRow)]
struct JobRow {
    id: Uuid,
    title: String,
    job_type: String,
    description: String,
    company_name: String,
    company_contact_email: Option<String>,
    company_contact_phone: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<JobRow> for Job {
    fn from(row: JobRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            job_type: row.job_type,
            description: row.description,
            company: Company {
                name: row.company_name,
                contact_email: row.company_contact_email,
                contact_phone: row.company_contact_phone,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct PgJobRepository {
    pool: PgPool,
}

impl PgJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for PgJobRepository {
    async fn list(&self) -> Result<Vec<Job>> {
        let query = format!("SELECT {} FROM jobs ORDER BY created_at ASC", JOB_COLUMNS);
        let rows = sqlx::query_as::<_, JobRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, job: NewJob) -> Result<Job> {
        let query = format!(
            r#"
            INSERT INTO jobs (
                id, title, job_type, description,
                company_name, company_contact_email, company_contact_phone
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            JOB_COLUMNS
        );
        let row = sqlx::query_as::<_, JobRow>(&query)
            .bind(Uuid::new_v4())
            .bind(job.title)
            .bind(job.job_type)
            .bind(job.description)
            .bind(job.company.name)
            .bind(job.company.contact_email)
            .bind(job.company.contact_phone)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>> {
        let query = format!("SELECT {} FROM jobs WHERE id = $1", JOB_COLUMNS);
        let row = sqlx::query_as::<_, JobRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Into::into))
    }

    async fn update(&self, id: Uuid, changes: JobChanges) -> Result<Option<Job>> {
        let query = format!(
            r#"
            UPDATE jobs
            SET
                title = COALESCE($2, title),
                job_type = COALESCE($3, job_type),
                description = COALESCE($4, description),
                company_name = COALESCE($5, company_name),
                company_contact_email = COALESCE($6, company_contact_email),
                company_contact_phone = COALESCE($7, company_contact_phone),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            JOB_COLUMNS
        );
        let row = sqlx::query_as::<_, JobRow>(&query)
            .bind(id)
            .bind(changes.title)
            .bind(changes.job_type)
            .bind(changes.description)
            .bind(changes.company_name)
            .bind(changes.company_contact_email)
            .bind(changes.company_contact_phone)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let res = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
