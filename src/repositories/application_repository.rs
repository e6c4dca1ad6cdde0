use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::job_repository::{attach_employers, JOB_COLUMNS};
use super::job_seeker_repository::JOB_SEEKER_COLUMNS;
use super::ApplicationRepository;
use crate::error::{Error, Result};
use crate::models::application::{Application, ApplicationStatus};
use crate::models::job::Job;
use crate::models::job_seeker::JobSeeker;

const APPLICATION_COLUMNS: &str = "id, job_id, job_seeker_id, status, applied_at, updated_at";

fn unique_ids(ids: impl Iterator<Item = Uuid>) -> Vec<Uuid> {
    let mut ids: Vec<Uuid> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

#[derive(Clone)]
pub struct PgApplicationRepository {
    pool: PgPool,
}

impl PgApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn attach_jobs(&self, applications: &mut [Application], with_employer: bool) -> Result<()> {
        if applications.is_empty() {
            return Ok(());
        }

        let ids = unique_ids(applications.iter().map(|a| a.job_id));
        let mut jobs = sqlx::query_as::<_, Job>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE id = ANY($1)"
        ))
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        if with_employer {
            attach_employers(&self.pool, &mut jobs).await?;
        }

        let by_id: HashMap<Uuid, Job> = jobs.into_iter().map(|job| (job.id, job)).collect();
        for application in applications.iter_mut() {
            application.job = by_id.get(&application.job_id).cloned();
        }
        Ok(())
    }

    async fn attach_job_seekers(&self, applications: &mut [Application]) -> Result<()> {
        if applications.is_empty() {
            return Ok(());
        }

        let ids = unique_ids(applications.iter().map(|a| a.job_seeker_id));
        let seekers = sqlx::query_as::<_, JobSeeker>(&format!(
            "SELECT {JOB_SEEKER_COLUMNS} FROM job_seekers WHERE id = ANY($1)"
        ))
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let by_id: HashMap<Uuid, JobSeeker> =
            seekers.into_iter().map(|seeker| (seeker.id, seeker)).collect();
        for application in applications.iter_mut() {
            application.job_seeker = by_id.get(&application.job_seeker_id).cloned();
        }
        Ok(())
    }
}

#[async_trait]
impl ApplicationRepository for PgApplicationRepository {
    async fn create(
        &self,
        job_id: Uuid,
        job_seeker_id: Uuid,
        applied_at: DateTime<Utc>,
    ) -> Result<Application> {
        let created = sqlx::query_as::<_, Application>(&format!(
            r#"
            INSERT INTO applications (job_id, job_seeker_id, status, applied_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING {APPLICATION_COLUMNS}
            "#
        ))
        .bind(job_id)
        .bind(job_seeker_id)
        .bind(ApplicationStatus::Applied)
        .bind(applied_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Error::Conflict("you have already applied to this job".to_string())
            }
            other => other.into(),
        })?;
        Ok(created)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Application>> {
        let application = sqlx::query_as::<_, Application>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM applications WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match application {
            Some(application) => {
                let mut applications = [application];
                self.attach_jobs(&mut applications, false).await?;
                let [application] = applications;
                Ok(Some(application))
            }
            None => Ok(None),
        }
    }

    async fn get_by_job_and_job_seeker(
        &self,
        job_id: Uuid,
        job_seeker_id: Uuid,
    ) -> Result<Option<Application>> {
        let application = sqlx::query_as::<_, Application>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM applications WHERE job_id = $1 AND job_seeker_id = $2"
        ))
        .bind(job_id)
        .bind(job_seeker_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(application)
    }

    async fn list_by_job_seeker(&self, job_seeker_id: Uuid) -> Result<Vec<Application>> {
        let mut applications = sqlx::query_as::<_, Application>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM applications WHERE job_seeker_id = $1 ORDER BY applied_at DESC"
        ))
        .bind(job_seeker_id)
        .fetch_all(&self.pool)
        .await?;

        self.attach_jobs(&mut applications, true).await?;
        Ok(applications)
    }

    async fn list_by_job(&self, job_id: Uuid) -> Result<Vec<Application>> {
        let mut applications = sqlx::query_as::<_, Application>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM applications WHERE job_id = $1 ORDER BY applied_at DESC"
        ))
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?;

        self.attach_job_seekers(&mut applications).await?;
        Ok(applications)
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Application> {
        let updated = sqlx::query_as::<_, Application>(&format!(
            r#"
            UPDATE applications
            SET status = $2, updated_at = $3
            WHERE id = $1
            RETURNING {APPLICATION_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status)
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::not_found("application"))?;
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM applications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::not_found("application"));
        }
        Ok(())
    }
}
