use std::sync::Arc;

use tracing::{debug, info};

use crate::database::JobRepository;
use crate::dto::job_dto::{CreateJobPayload, UpdateJobPayload};
use crate::error::{Error, Result};
use crate::models::job::Job;
use crate::utils::validation::parse_job_id;

#[derive(Clone)]
pub struct JobService {
    repo: Arc<dyn JobRepository>,
}

impl JobService {
    pub fn new(repo: Arc<dyn JobRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Job>> {
        let jobs = self.repo.list().await?;
        debug!(count = jobs.len(), "listed jobs");
        Ok(jobs)
    }

    pub async fn create(&self, payload: CreateJobPayload) -> Result<Job> {
        let new_job = payload.into_new_job()?;
        let job = self.repo.insert(new_job).await?;
        info!(job_id = %job.id, title = %job.title, "job created");
        Ok(job)
    }

    pub async fn get_by_id(&self, raw_id: &str) -> Result<Job> {
        let id = parse_job_id(raw_id)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Job {} not found", id)))
    }

    pub async fn update(&self, raw_id: &str, payload: UpdateJobPayload) -> Result<Job> {
        let id = parse_job_id(raw_id)?;
        let changes = payload.into_changes()?;
        if changes.is_empty() {
            return self.get_by_id(raw_id).await;
        }
        let job = self
            .repo
            .update(id, changes)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Job {} not found", id)))?;
        info!(job_id = %job.id, "job updated");
        Ok(job)
    }

    /// Deleting an id that is already gone still succeeds.
    pub async fn delete(&self, raw_id: &str) -> Result<()> {
        let id = parse_job_id(raw_id)?;
        let removed = self.repo.delete(id).await?;
        info!(job_id = %id, removed, "job delete requested");
        Ok(())
    }
}
