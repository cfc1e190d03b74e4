use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{Error, Result};
use crate::models::job::{Company, Job, JobChanges, NewJob};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPayload {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

/// Body of `POST /api/jobs`. Every field is optional at the serde level so a
/// missing field surfaces as a validation error instead of a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateJobPayload {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    #[serde(rename = "type")]
    #[validate(required, length(min = 1))]
    pub job_type: Option<String>,
    #[validate(required, length(min = 1))]
    pub description: Option<String>,
    #[validate(required, nested)]
    pub company: Option<CompanyPayload>,
}

impl CreateJobPayload {
    pub fn into_new_job(self) -> Result<NewJob> {
        self.validate()?;
        let company = self.company.unwrap_or_default();
        Ok(NewJob {
            title: required(self.title, "title")?,
            job_type: required(self.job_type, "type")?,
            description: required(self.description, "description")?,
            company: Company {
                name: required(company.name, "company.name")?,
                contact_email: company.contact_email,
                contact_phone: company.contact_phone,
            },
        })
    }
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    value.ok_or_else(|| Error::BadRequest(format!("{} is required", field)))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyPayload {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

/// Body of `PUT /api/jobs/:id`. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateJobPayload {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[serde(rename = "type")]
    #[validate(length(min = 1))]
    pub job_type: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(nested)]
    pub company: Option<UpdateCompanyPayload>,
}

impl UpdateJobPayload {
    pub fn into_changes(self) -> Result<JobChanges> {
        self.validate()?;
        let company = self.company.unwrap_or_default();
        Ok(JobChanges {
            title: self.title,
            job_type: self.job_type,
            description: self.description,
            company_name: company.name,
            company_contact_email: company.contact_email,
            company_contact_phone: company.contact_phone,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResponse {
    pub name: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub id: uuid::Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub description: String,
    pub company: CompanyResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Job> for JobResponse {
    fn from(value: Job) -> Self {
        Self {
            id: value.id,
            title: value.title,
            job_type: value.job_type,
            description: value.description,
            company: CompanyResponse {
                name: value.company.name,
                contact_email: value.company.contact_email,
                contact_phone: value.company.contact_phone,
            },
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
