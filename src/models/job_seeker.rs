use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::string_list::StringList;
use super::student_profile::StudentProfile;

text_enum! {
    JobSeekerType {
        Student => "student",
        Professional => "professional",
        Freelancer => "freelancer",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobSeeker {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub job_seeker_type: JobSeekerType,
    pub current_city: String,
    pub phone: String,
    pub desired_field: String,
    pub resume_url: String,
    pub portfolio_url: Option<String>,
    pub skills: StringList,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobSeeker {
    pub fn has_resume(&self) -> bool {
        !self.resume_url.trim().is_empty()
    }

    pub fn has_portfolio(&self) -> bool {
        self.portfolio_url
            .as_deref()
            .map(|url| !url.trim().is_empty())
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone)]
pub struct NewJobSeeker {
    pub user_id: Uuid,
    pub full_name: String,
    pub job_seeker_type: JobSeekerType,
    pub current_city: String,
    pub phone: String,
    pub desired_field: String,
    pub resume_url: String,
    pub portfolio_url: Option<String>,
    pub skills: StringList,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSeekerWithExtension {
    #[serde(flatten)]
    pub profile: JobSeeker,
    pub student_profile: Option<StudentProfile>,
}
