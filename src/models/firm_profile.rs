use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::string_list::StringList;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FirmProfile {
    pub id: Uuid,
    pub employer_id: Uuid,
    pub year_founded: Option<i32>,
    pub firm_size: String,
    pub legal_entity_type: String,
    pub primary_discipline: String,
    pub secondary_disciplines: StringList,
    pub instagram_url: String,
    pub linkedin_url: String,
    pub preferred_duration: String,
    pub stipend_range: String,
    pub project_images: StringList,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewFirmProfile {
    pub employer_id: Uuid,
    pub year_founded: Option<i32>,
    pub firm_size: String,
    pub legal_entity_type: String,
    pub primary_discipline: String,
    pub secondary_disciplines: StringList,
    pub instagram_url: String,
    pub linkedin_url: String,
    pub preferred_duration: String,
    pub stipend_range: String,
    pub project_images: StringList,
}
