use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::StudentProfileRepository;
use crate::error::{Error, Result};
use crate::models::student_profile::{NewStudentProfile, StudentProfile};

const STUDENT_PROFILE_COLUMNS: &str = "id, job_seeker_id, college_name, degree, year_semester, software_proficiency, previous_internships, freelance_projects, preferred_start_month, preferred_duration, willing_to_relocate, created_at, updated_at";

#[derive(Clone)]
pub struct PgStudentProfileRepository {
    pool: PgPool,
}

impl PgStudentProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentProfileRepository for PgStudentProfileRepository {
    async fn create(&self, profile: NewStudentProfile) -> Result<StudentProfile> {
        let created = sqlx::query_as::<_, StudentProfile>(&format!(
            r#"
            INSERT INTO student_profiles (
                job_seeker_id, college_name, degree, year_semester,
                software_proficiency, previous_internships, freelance_projects,
                preferred_start_month, preferred_duration, willing_to_relocate
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {STUDENT_PROFILE_COLUMNS}
            "#
        ))
        .bind(profile.job_seeker_id)
        .bind(&profile.college_name)
        .bind(&profile.degree)
        .bind(&profile.year_semester)
        .bind(&profile.software_proficiency)
        .bind(&profile.previous_internships)
        .bind(&profile.freelance_projects)
        .bind(&profile.preferred_start_month)
        .bind(&profile.preferred_duration)
        .bind(profile.willing_to_relocate)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn get_by_job_seeker_id(&self, job_seeker_id: Uuid) -> Result<Option<StudentProfile>> {
        let profile = sqlx::query_as::<_, StudentProfile>(&format!(
            "SELECT {STUDENT_PROFILE_COLUMNS} FROM student_profiles WHERE job_seeker_id = $1"
        ))
        .bind(job_seeker_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(profile)
    }

    async fn update(&self, profile: &StudentProfile) -> Result<StudentProfile> {
        let updated = sqlx::query_as::<_, StudentProfile>(&format!(
            r#"
            UPDATE student_profiles
            SET
                college_name = $2,
                degree = $3,
                year_semester = $4,
                software_proficiency = $5,
                previous_internships = $6,
                freelance_projects = $7,
                preferred_start_month = $8,
                preferred_duration = $9,
                willing_to_relocate = $10,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {STUDENT_PROFILE_COLUMNS}
            "#
        ))
        .bind(profile.id)
        .bind(&profile.college_name)
        .bind(&profile.degree)
        .bind(&profile.year_semester)
        .bind(&profile.software_proficiency)
        .bind(&profile.previous_internships)
        .bind(&profile.freelance_projects)
        .bind(&profile.preferred_start_month)
        .bind(&profile.preferred_duration)
        .bind(profile.willing_to_relocate)
        .fetch_one(&self.pool)
        .await?;
        Ok(updated)
    }

    async fn delete_by_job_seeker_id(&self, job_seeker_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM student_profiles WHERE job_seeker_id = $1")
            .bind(job_seeker_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::not_found("student profile"));
        }
        Ok(())
    }
}
