use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::job::Job;
use super::job_seeker::JobSeeker;

text_enum! {
    ApplicationStatus {
        Applied => "applied",
        Shortlisted => "shortlisted",
        Rejected => "rejected",
        Selected => "selected",
    }
}

impl ApplicationStatus {
    /// Terminal states block seeker withdrawal. Employers may still overwrite them.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ApplicationStatus::Rejected | ApplicationStatus::Selected)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Application {
    pub id: Uuid,
    pub job_id: Uuid,
    pub job_seeker_id: Uuid,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub job: Option<Job>,
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub job_seeker: Option<JobSeeker>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub total_applications: i64,
    pub applied: i64,
    pub shortlisted: i64,
    pub rejected: i64,
    pub selected: i64,
}

impl StatusCounts {
    pub fn tally(applications: &[Application]) -> Self {
        applications
            .iter()
            .fold(Self::default(), |mut counts, application| {
                counts.total_applications += 1;
                match application.status {
                    ApplicationStatus::Applied => counts.applied += 1,
                    ApplicationStatus::Shortlisted => counts.shortlisted += 1,
                    ApplicationStatus::Rejected => counts.rejected += 1,
                    ApplicationStatus::Selected => counts.selected += 1,
                }
                counts
            })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationStats {
    #[serde(flatten)]
    pub counts: StatusCounts,
    pub recent_applications: Vec<Application>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplicationStats {
    #[serde(flatten)]
    pub counts: StatusCounts,
    pub job_title: String,
    pub application_deadline: DateTime<Utc>,
}
