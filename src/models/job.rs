use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub job_type: String,
    pub description: String,
    pub company: Company,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated job that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    pub title: String,
    pub job_type: String,
    pub description: String,
    pub company: Company,
}

/// Fields to overwrite on an existing job. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobChanges {
    pub title: Option<String>,
    pub job_type: Option<String>,
    pub description: Option<String>,
    pub company_name: Option<String>,
    pub company_contact_email: Option<String>,
    pub company_contact_phone: Option<String>,
}

impl JobChanges {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn apply_to(self, job: &mut Job) {
        if let Some(title) = self.title {
            job.title = title;
        }
        if let Some(job_type) = self.job_type {
            job.job_type = job_type;
        }
        if let Some(description) = self.description {
            job.description = description;
        }
        if let Some(name) = self.company_name {
            job.company.name = name;
        }
        if let Some(email) = self.company_contact_email {
            job.company.contact_email = Some(email);
        }
        if let Some(phone) = self.company_contact_phone {
            job.company.contact_phone = Some(phone);
        }
    }
}
