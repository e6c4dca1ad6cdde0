use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::JobSeekerRepository;
use crate::error::Result;
use crate::models::job_seeker::{JobSeeker, NewJobSeeker};

pub(crate) const JOB_SEEKER_COLUMNS: &str = "id, user_id, full_name, job_seeker_type, current_city, phone, desired_field, resume_url, portfolio_url, skills, created_at, updated_at";

#[derive(Clone)]
pub struct PgJobSeekerRepository {
    pool: PgPool,
}

impl PgJobSeekerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobSeekerRepository for PgJobSeekerRepository {
    async fn create(&self, profile: NewJobSeeker) -> Result<JobSeeker> {
        let created = sqlx::query_as::<_, JobSeeker>(&format!(
            r#"
            INSERT INTO job_seekers (
                user_id, full_name, job_seeker_type, current_city, phone,
                desired_field, resume_url, portfolio_url, skills
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {JOB_SEEKER_COLUMNS}
            "#
        ))
        .bind(profile.user_id)
        .bind(&profile.full_name)
        .bind(profile.job_seeker_type)
        .bind(&profile.current_city)
        .bind(&profile.phone)
        .bind(&profile.desired_field)
        .bind(&profile.resume_url)
        .bind(&profile.portfolio_url)
        .bind(&profile.skills)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<JobSeeker>> {
        let profile = sqlx::query_as::<_, JobSeeker>(&format!(
            "SELECT {JOB_SEEKER_COLUMNS} FROM job_seekers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(profile)
    }

    async fn get_by_user_id(&self, user_id: Uuid) -> Result<Option<JobSeeker>> {
        let profile = sqlx::query_as::<_, JobSeeker>(&format!(
            "SELECT {JOB_SEEKER_COLUMNS} FROM job_seekers WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(profile)
    }

    async fn update(&self, profile: &JobSeeker) -> Result<JobSeeker> {
        let updated = sqlx::query_as::<_, JobSeeker>(&format!(
            r#"
            UPDATE job_seekers
            SET
                full_name = $2,
                job_seeker_type = $3,
                current_city = $4,
                phone = $5,
                desired_field = $6,
                resume_url = $7,
                portfolio_url = $8,
                skills = $9,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {JOB_SEEKER_COLUMNS}
            "#
        ))
        .bind(profile.id)
        .bind(&profile.full_name)
        .bind(profile.job_seeker_type)
        .bind(&profile.current_city)
        .bind(&profile.phone)
        .bind(&profile.desired_field)
        .bind(&profile.resume_url)
        .bind(&profile.portfolio_url)
        .bind(&profile.skills)
        .fetch_one(&self.pool)
        .await?;
        Ok(updated)
    }
}
