use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::string_list::StringList;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StudentProfile {
    pub id: Uuid,
    pub job_seeker_id: Uuid,
    pub college_name: String,
    pub degree: String,
    pub year_semester: String,
    pub software_proficiency: StringList,
    pub previous_internships: StringList,
    pub freelance_projects: StringList,
    pub preferred_start_month: String,
    pub preferred_duration: String,
    pub willing_to_relocate: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewStudentProfile {
    pub job_seeker_id: Uuid,
    pub college_name: String,
    pub degree: String,
    pub year_semester: String,
    pub software_proficiency: StringList,
    pub previous_internships: StringList,
    pub freelance_projects: StringList,
    pub preferred_start_month: String,
    pub preferred_duration: String,
    pub willing_to_relocate: bool,
}
