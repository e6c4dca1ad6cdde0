use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::employer::EmployerType;
use crate::models::job_seeker::JobSeekerType;

fn validate_pin_code(pin_code: &str) -> Result<(), ValidationError> {
    if pin_code.len() == 6 && pin_code.chars().all(|c| c.is_ascii_digit()) {
        return Ok(());
    }
    let mut err = ValidationError::new("pin_code");
    err.message = Some("must be exactly 6 digits".into());
    Err(err)
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateJobSeekerPayload {
    #[validate(length(min = 1, message = "is required"))]
    pub full_name: String,
    pub job_seeker_type: JobSeekerType,
    #[validate(length(min = 1, message = "is required"))]
    pub current_city: String,
    #[validate(length(min = 1, message = "is required"))]
    pub phone: String,
    #[validate(length(min = 1, message = "is required"))]
    pub desired_field: String,
    #[validate(length(min = 1, message = "is required"))]
    pub resume_url: String,
    pub portfolio_url: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateJobSeekerPayload {
    pub full_name: Option<String>,
    pub job_seeker_type: Option<JobSeekerType>,
    pub current_city: Option<String>,
    pub phone: Option<String>,
    pub desired_field: Option<String>,
    pub resume_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub skills: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEmployerPayload {
    #[validate(length(min = 1, message = "is required"))]
    pub company_name: String,
    pub employer_type: EmployerType,
    #[validate(length(min = 1, message = "is required"))]
    pub industry: String,
    #[validate(length(min = 1, message = "is required"))]
    pub primary_phone: String,
    #[validate(length(min = 1, message = "is required"))]
    pub contact_person: String,
    #[serde(alias = "contact_person_desig")]
    #[validate(length(min = 1, message = "is required"))]
    pub contact_person_designation: String,
    #[validate(length(min = 1, message = "is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "is required"))]
    pub state: String,
    #[validate(custom(function = "validate_pin_code"))]
    pub pin_code: String,
    #[validate(url(message = "must be a valid URL"))]
    pub website_url: String,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateEmployerPayload {
    pub company_name: Option<String>,
    pub employer_type: Option<EmployerType>,
    pub industry: Option<String>,
    pub primary_phone: Option<String>,
    pub contact_person: Option<String>,
    #[serde(alias = "contact_person_desig")]
    pub contact_person_designation: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    #[validate(custom(function = "validate_pin_code"))]
    pub pin_code: Option<String>,
    #[validate(url(message = "must be a valid URL"))]
    pub website_url: Option<String>,
    pub logo_url: Option<String>,
    pub is_hiring: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn employer_json() -> serde_json::Value {
        json!({
            "company_name": "Studio North",
            "employer_type": "firm",
            "industry": "Architecture",
            "primary_phone": "9800000000",
            "contact_person": "Meera",
            "contact_person_desig": "Partner",
            "city": "Pune",
            "state": "Maharashtra",
            "pin_code": "411001",
            "website_url": "https://studionorth.example"
        })
    }

    #[test]
    fn valid_employer_payload_passes() {
        let payload: CreateEmployerPayload = serde_json::from_value(employer_json()).unwrap();
        assert!(payload.validate().is_ok());
        assert_eq!(payload.contact_person_designation, "Partner");
    }

    #[test]
    fn pin_code_must_be_six_digits() {
        let mut body = employer_json();
        body["pin_code"] = json!("41100A");
        let payload: CreateEmployerPayload = serde_json::from_value(body).unwrap();
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("pin_code"));
    }

    #[test]
    fn unknown_seeker_kind_is_rejected_at_parse_time() {
        let parsed = serde_json::from_value::<CreateJobSeekerPayload>(json!({
            "full_name": "Asha",
            "job_seeker_type": "intern",
            "current_city": "Pune",
            "phone": "1",
            "desired_field": "Architecture",
            "resume_url": "https://files.example/cv.pdf"
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn update_payload_checks_only_supplied_fields() {
        let payload = UpdateEmployerPayload {
            website_url: Some("not a url".into()),
            ..Default::default()
        };
        assert!(payload.validate().is_err());
        assert!(UpdateEmployerPayload::default().validate().is_ok());
    }
}
