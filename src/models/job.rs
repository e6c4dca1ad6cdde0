use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::employer::Employer;
use super::string_list::StringList;

text_enum! {
    JobType {
        Internship => "internship",
        FullTime => "full_time",
        Contract => "contract",
    }
}

text_enum! {
    /// Who a posting is aimed at. `Any` postings match every audience filter.
    TargetAudience {
        Students => "students",
        Professionals => "professionals",
        Any => "any",
    }
}

text_enum! {
    EmploymentMode {
        OnSite => "on_site",
        Remote => "remote",
        Hybrid => "hybrid",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: Uuid,
    pub employer_id: Uuid,
    pub title: String,
    pub job_type: JobType,
    pub industry: String,
    pub target_audience: TargetAudience,
    pub employment_mode: EmploymentMode,
    pub start_month: String,
    pub duration: String,
    pub application_deadline: DateTime<Utc>,
    pub compensation_range: String,
    pub is_paid: bool,
    pub city: String,
    pub state: String,
    pub required_skills: StringList,
    pub min_experience: String,
    pub portfolio_required: bool,
    pub resume_required: bool,
    pub description: String,
    pub about_team: String,
    pub contact_email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub employer: Option<Employer>,
}

impl Job {
    /// Deadline check is strict: a deadline equal to `now` is still open.
    pub fn deadline_passed(&self, now: DateTime<Utc>) -> bool {
        self.application_deadline < now
    }
}

#[derive(Debug, Clone)]
pub struct NewJob {
    pub employer_id: Uuid,
    pub title: String,
    pub job_type: JobType,
    pub industry: String,
    pub target_audience: TargetAudience,
    pub employment_mode: EmploymentMode,
    pub start_month: String,
    pub duration: String,
    pub application_deadline: DateTime<Utc>,
    pub compensation_range: String,
    pub is_paid: bool,
    pub city: String,
    pub state: String,
    pub required_skills: StringList,
    pub min_experience: String,
    pub portfolio_required: bool,
    pub resume_required: bool,
    pub description: String,
    pub about_team: String,
    pub contact_email: String,
}

/// Predicate set for job listings. `None` (or a blank string) means "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilter {
    pub employer_id: Option<Uuid>,
    pub industry: Option<String>,
    pub job_type: Option<JobType>,
    pub city: Option<String>,
    pub target_audience: Option<TargetAudience>,
    pub employment_mode: Option<EmploymentMode>,
    pub is_paid: Option<bool>,
    pub is_active: Option<bool>,
    pub order_by: Option<String>,
    pub order_direction: Option<String>,
    pub limit: Option<i64>,
    /// Set when a categorical predicate names a value outside its closed set.
    pub matches_nothing: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployerDashboard {
    pub total_jobs: i64,
    pub active_jobs: i64,
    pub recent_jobs: Vec<Job>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOptions {
    pub industries: Vec<String>,
    pub job_types: Vec<JobType>,
    pub target_audiences: Vec<TargetAudience>,
    pub employment_modes: Vec<EmploymentMode>,
    pub cities: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_text_forms_match_storage_values() {
        assert_eq!(JobType::FullTime.as_str(), "full_time");
        assert_eq!("on_site".parse::<EmploymentMode>(), Ok(EmploymentMode::OnSite));
        assert!("everyone".parse::<TargetAudience>().is_err());
        assert_eq!(
            serde_json::to_string(&TargetAudience::Professionals).unwrap(),
            "\"professionals\""
        );
    }
}
