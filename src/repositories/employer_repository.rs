use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::EmployerRepository;
use crate::error::Result;
use crate::models::employer::{Employer, NewEmployer};

pub(crate) const EMPLOYER_COLUMNS: &str = "id, user_id, company_name, employer_type, industry, primary_phone, contact_person, contact_person_designation, city, state, pin_code, website_url, logo_url, is_hiring, created_at, updated_at";

#[derive(Clone)]
pub struct PgEmployerRepository {
    pool: PgPool,
}

impl PgEmployerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployerRepository for PgEmployerRepository {
    async fn create(&self, profile: NewEmployer) -> Result<Employer> {
        let created = sqlx::query_as::<_, Employer>(&format!(
            r#"
            INSERT INTO employers (
                user_id, company_name, employer_type, industry, primary_phone,
                contact_person, contact_person_designation, city, state,
                pin_code, website_url, logo_url
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {EMPLOYER_COLUMNS}
            "#
        ))
        .bind(profile.user_id)
        .bind(&profile.company_name)
        .bind(profile.employer_type)
        .bind(&profile.industry)
        .bind(&profile.primary_phone)
        .bind(&profile.contact_person)
        .bind(&profile.contact_person_designation)
        .bind(&profile.city)
        .bind(&profile.state)
        .bind(&profile.pin_code)
        .bind(&profile.website_url)
        .bind(&profile.logo_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Employer>> {
        let profile = sqlx::query_as::<_, Employer>(&format!(
            "SELECT {EMPLOYER_COLUMNS} FROM employers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(profile)
    }

    async fn get_by_user_id(&self, user_id: Uuid) -> Result<Option<Employer>> {
        let profile = sqlx::query_as::<_, Employer>(&format!(
            "SELECT {EMPLOYER_COLUMNS} FROM employers WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(profile)
    }

    async fn update(&self, profile: &Employer) -> Result<Employer> {
        let updated = sqlx::query_as::<_, Employer>(&format!(
            r#"
            UPDATE employers
            SET
                company_name = $2,
                employer_type = $3,
                industry = $4,
                primary_phone = $5,
                contact_person = $6,
                contact_person_designation = $7,
                city = $8,
                state = $9,
                pin_code = $10,
                website_url = $11,
                logo_url = $12,
                is_hiring = $13,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {EMPLOYER_COLUMNS}
            "#
        ))
        .bind(profile.id)
        .bind(&profile.company_name)
        .bind(profile.employer_type)
        .bind(&profile.industry)
        .bind(&profile.primary_phone)
        .bind(&profile.contact_person)
        .bind(&profile.contact_person_designation)
        .bind(&profile.city)
        .bind(&profile.state)
        .bind(&profile.pin_code)
        .bind(&profile.website_url)
        .bind(&profile.logo_url)
        .bind(profile.is_hiring)
        .fetch_one(&self.pool)
        .await?;
        Ok(updated)
    }
}
