use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::firm_profile::FirmProfile;

text_enum! {
    EmployerType {
        Firm => "firm",
        Corporation => "corporation",
        Startup => "startup",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employer {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company_name: String,
    pub employer_type: EmployerType,
    pub industry: String,
    pub primary_phone: String,
    pub contact_person: String,
    pub contact_person_designation: String,
    pub city: String,
    pub state: String,
    pub pin_code: String,
    pub website_url: String,
    pub logo_url: Option<String>,
    pub is_hiring: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewEmployer {
    pub user_id: Uuid,
    pub company_name: String,
    pub employer_type: EmployerType,
    pub industry: String,
    pub primary_phone: String,
    pub contact_person: String,
    pub contact_person_designation: String,
    pub city: String,
    pub state: String,
    pub pin_code: String,
    pub website_url: String,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployerWithExtension {
    #[serde(flatten)]
    pub profile: Employer,
    pub firm_profile: Option<FirmProfile>,
}
