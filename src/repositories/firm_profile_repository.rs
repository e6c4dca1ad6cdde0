use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::FirmProfileRepository;
use crate::error::{Error, Result};
use crate::models::firm_profile::{FirmProfile, NewFirmProfile};

const FIRM_PROFILE_COLUMNS: &str = "id, employer_id, year_founded, firm_size, legal_entity_type, primary_discipline, secondary_disciplines, instagram_url, linkedin_url, preferred_duration, stipend_range, project_images, created_at, updated_at";

#[derive(Clone)]
pub struct PgFirmProfileRepository {
    pool: PgPool,
}

impl PgFirmProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FirmProfileRepository for PgFirmProfileRepository {
    async fn create(&self, profile: NewFirmProfile) -> Result<FirmProfile> {
        let created = sqlx::query_as::<_, FirmProfile>(&format!(
            r#"
            INSERT INTO firm_profiles (
                employer_id, year_founded, firm_size, legal_entity_type,
                primary_discipline, secondary_disciplines, instagram_url,
                linkedin_url, preferred_duration, stipend_range, project_images
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {FIRM_PROFILE_COLUMNS}
            "#
        ))
        .bind(profile.employer_id)
        .bind(profile.year_founded)
        .bind(&profile.firm_size)
        .bind(&profile.legal_entity_type)
        .bind(&profile.primary_discipline)
        .bind(&profile.secondary_disciplines)
        .bind(&profile.instagram_url)
        .bind(&profile.linkedin_url)
        .bind(&profile.preferred_duration)
        .bind(&profile.stipend_range)
        .bind(&profile.project_images)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn get_by_employer_id(&self, employer_id: Uuid) -> Result<Option<FirmProfile>> {
        let profile = sqlx::query_as::<_, FirmProfile>(&format!(
            "SELECT {FIRM_PROFILE_COLUMNS} FROM firm_profiles WHERE employer_id = $1"
        ))
        .bind(employer_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(profile)
    }

    async fn update(&self, profile: &FirmProfile) -> Result<FirmProfile> {
        let updated = sqlx::query_as::<_, FirmProfile>(&format!(
            r#"
            UPDATE firm_profiles
            SET
                year_founded = $2,
                firm_size = $3,
                legal_entity_type = $4,
                primary_discipline = $5,
                secondary_disciplines = $6,
                instagram_url = $7,
                linkedin_url = $8,
                preferred_duration = $9,
                stipend_range = $10,
                project_images = $11,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {FIRM_PROFILE_COLUMNS}
            "#
        ))
        .bind(profile.id)
        .bind(profile.year_founded)
        .bind(&profile.firm_size)
        .bind(&profile.legal_entity_type)
        .bind(&profile.primary_discipline)
        .bind(&profile.secondary_disciplines)
        .bind(&profile.instagram_url)
        .bind(&profile.linkedin_url)
        .bind(&profile.preferred_duration)
        .bind(&profile.stipend_range)
        .bind(&profile.project_images)
        .fetch_one(&self.pool)
        .await?;
        Ok(updated)
    }

    async fn delete_by_employer_id(&self, employer_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM firm_profiles WHERE employer_id = $1")
            .bind(employer_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::not_found("firm profile"));
        }
        Ok(())
    }
}
