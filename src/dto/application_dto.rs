use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::application::ApplicationStatus;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ApplyPayload {
    pub job_id: Uuid,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateApplicationStatusPayload {
    pub status: ApplicationStatus,
}
