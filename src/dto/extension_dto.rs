use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStudentProfilePayload {
    #[validate(length(min = 1, message = "is required"))]
    pub college_name: String,
    #[validate(length(min = 1, message = "is required"))]
    pub degree: String,
    #[validate(length(min = 1, message = "is required"))]
    pub year_semester: String,
    #[serde(default)]
    pub software_proficiency: Vec<String>,
    #[serde(default)]
    pub previous_internships: Vec<String>,
    #[serde(default)]
    pub freelance_projects: Vec<String>,
    #[serde(default)]
    pub preferred_start_month: String,
    #[serde(default)]
    pub preferred_duration: String,
    #[serde(default)]
    pub willing_to_relocate: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStudentProfilePayload {
    pub college_name: Option<String>,
    pub degree: Option<String>,
    pub year_semester: Option<String>,
    pub software_proficiency: Option<Vec<String>>,
    pub previous_internships: Option<Vec<String>>,
    pub freelance_projects: Option<Vec<String>>,
    pub preferred_start_month: Option<String>,
    pub preferred_duration: Option<String>,
    pub willing_to_relocate: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFirmProfilePayload {
    #[validate(range(min = 1800, max = 2100, message = "must be a plausible year"))]
    pub year_founded: Option<i32>,
    #[serde(default)]
    pub firm_size: String,
    #[serde(default)]
    pub legal_entity_type: String,
    #[validate(length(min = 1, message = "is required"))]
    pub primary_discipline: String,
    #[serde(default)]
    pub secondary_disciplines: Vec<String>,
    #[serde(default)]
    pub instagram_url: String,
    #[serde(default)]
    pub linkedin_url: String,
    #[serde(default)]
    pub preferred_duration: String,
    #[serde(default)]
    pub stipend_range: String,
    #[serde(default)]
    pub project_images: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateFirmProfilePayload {
    #[validate(range(min = 1800, max = 2100, message = "must be a plausible year"))]
    pub year_founded: Option<i32>,
    pub firm_size: Option<String>,
    pub legal_entity_type: Option<String>,
    pub primary_discipline: Option<String>,
    pub secondary_disciplines: Option<Vec<String>>,
    pub instagram_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub preferred_duration: Option<String>,
    pub stipend_range: Option<String>,
    pub project_images: Option<Vec<String>>,
}
