use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::error::{Error, Result};
use crate::models::job::{EmploymentMode, JobFilter, JobType, TargetAudience};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateJobPayload {
    #[validate(length(min = 1, message = "is required"))]
    pub title: String,
    pub job_type: JobType,
    #[validate(length(min = 1, message = "is required"))]
    pub industry: String,
    pub target_audience: TargetAudience,
    pub employment_mode: EmploymentMode,
    #[validate(length(min = 1, message = "is required"))]
    pub start_month: String,
    #[validate(length(min = 1, message = "is required"))]
    pub duration: String,
    pub application_deadline: DateTime<Utc>,
    #[serde(default)]
    pub compensation_range: String,
    #[serde(default)]
    pub is_paid: bool,
    #[validate(length(min = 1, message = "is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "is required"))]
    pub state: String,
    #[validate(length(min = 1, message = "at least one skill is required"))]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub min_experience: String,
    #[serde(default)]
    pub portfolio_required: bool,
    #[serde(default)]
    pub resume_required: bool,
    #[validate(length(min = 1, message = "is required"))]
    pub description: String,
    #[serde(default)]
    pub about_team: String,
    #[validate(email(message = "must be a valid email address"))]
    pub contact_email: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateJobPayload {
    pub title: Option<String>,
    pub job_type: Option<JobType>,
    pub industry: Option<String>,
    pub target_audience: Option<TargetAudience>,
    pub employment_mode: Option<EmploymentMode>,
    pub start_month: Option<String>,
    pub duration: Option<String>,
    pub application_deadline: Option<DateTime<Utc>>,
    pub compensation_range: Option<String>,
    pub is_paid: Option<bool>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub required_skills: Option<Vec<String>>,
    pub min_experience: Option<String>,
    pub portfolio_required: Option<bool>,
    pub resume_required: Option<bool>,
    pub description: Option<String>,
    pub about_team: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub contact_email: Option<String>,
    pub is_active: Option<bool>,
}

/// Raw query string for job listings. Empty parameters are treated as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobListQuery {
    pub industry: Option<String>,
    pub job_type: Option<String>,
    pub city: Option<String>,
    pub target_audience: Option<String>,
    pub employment_mode: Option<String>,
    pub is_paid: Option<String>,
    pub is_active: Option<String>,
    pub order_by: Option<String>,
    pub order_direction: Option<String>,
    pub limit: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_param<T>(name: &str, value: Option<String>) -> Result<Option<T>>
where
    T: FromStr,
{
    match present(value) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| Error::Validation(format!("invalid value '{}' for {}", raw, name))),
        None => Ok(None),
    }
}

/// Categorical values outside the closed set are an equality no row satisfies,
/// so they mark the filter instead of failing the request.
fn parse_category<T>(value: Option<String>, matches_nothing: &mut bool) -> Option<T>
where
    T: FromStr,
{
    let raw = present(value)?;
    match raw.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            *matches_nothing = true;
            None
        }
    }
}

impl JobListQuery {
    pub fn into_filter(self) -> Result<JobFilter> {
        let mut matches_nothing = false;
        let job_type = parse_category(self.job_type, &mut matches_nothing);
        let target_audience = parse_category(self.target_audience, &mut matches_nothing);
        let employment_mode = parse_category(self.employment_mode, &mut matches_nothing);

        Ok(JobFilter {
            employer_id: None,
            industry: present(self.industry),
            job_type,
            city: present(self.city),
            target_audience,
            employment_mode,
            is_paid: parse_param("is_paid", self.is_paid)?,
            is_active: parse_param("is_active", self.is_active)?,
            order_by: present(self.order_by),
            order_direction: present(self.order_direction),
            limit: parse_param("limit", self.limit)?,
            matches_nothing,
        })
    }
}
