//! Process-local repositories for tests and database-less runs.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{JobRepository, UserRepository};
use crate::error::{Error, Result};
use crate::models::job::{Job, JobChanges, NewJob};
use crate::models::user::{NewUser, User};

#[derive(Clone, Default)]
pub struct InMemoryJobRepository {
    jobs: Arc<RwLock<HashMap<Uuid, Job>>>,
}

impl InMemoryJobRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn list(&self) -> Result<Vec<Job>> {
        let guard = self.jobs.read().await;
        let mut jobs: Vec<Job> = guard.values().cloned().collect();
        jobs.sort_by_key(|job| job.created_at);
        Ok(jobs)
    }

    async fn insert(&self, job: NewJob) -> Result<Job> {
        let now = Utc::now();
        let job = Job {
            id: Uuid::new_v4(),
            title: job.title,
            job_type: job.job_type,
            description: job.description,
            company: job.company,
            created_at: now,
            updated_at: now,
        };
        self.jobs.write().await.insert(job.id, job.clone());
        Ok(job)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>> {
        Ok(self.jobs.read().await.get(&id).cloned())
    }

    async fn update(&self, id: Uuid, changes: JobChanges) -> Result<Option<Job>> {
        let mut guard = self.jobs.write().await;
        let Some(job) = guard.get_mut(&id) else {
            return Ok(None);
        };
        changes.apply_to(job);
        job.updated_at = Utc::now();
        Ok(Some(job.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        Ok(self.jobs.write().await.remove(&id).is_some())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User> {
        let mut guard = self.users.write().await;
        if guard.contains_key(&user.email) {
            return Err(Error::BadRequest("Email already in use".to_string()));
        }
        let user = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            phone_number: user.phone_number,
            gender: user.gender,
            date_of_birth: user.date_of_birth,
            membership_status: user.membership_status,
            created_at: Utc::now(),
        };
        guard.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.users.read().await.get(email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::Company;

    fn new_job(title: &str, company: &str) -> NewJob {
        NewJob {
            title: title.into(),
            job_type: "FullTime".into(),
            description: "Do not work here".into(),
            company: Company {
                name: company.into(),
                contact_email: Some("bad@company.com".into()),
                contact_phone: Some("87654321".into()),
            },
        }
    }

    #[tokio::test]
    async fn insert_then_find_returns_same_job() {
        let repo = InMemoryJobRepository::new();
        let created = repo.insert(new_job("AnotherJob", "Bad Company")).await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn update_of_missing_job_creates_nothing() {
        let repo = InMemoryJobRepository::new();
        let changes = JobChanges {
            title: Some("Ghost".into()),
            ..Default::default()
        };

        assert!(repo.update(Uuid::new_v4(), changes).await.unwrap().is_none());
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_reports_whether_a_job_was_removed() {
        let repo = InMemoryJobRepository::new();
        let created = repo.insert(new_job("JobTitle", "Good company")).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let repo = InMemoryUserRepository::new();
        let user = NewUser {
            name: "Bob Doe".into(),
            email: "bob@mail.com".into(),
            password_hash: "hash".into(),
            phone_number: "1234567890".into(),
            gender: "Male".into(),
            date_of_birth: chrono::NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            membership_status: "Inactive".into(),
        };

        repo.insert(user.clone()).await.unwrap();
        let err = repo.insert(user).await.unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
    }
}
