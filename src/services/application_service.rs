use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::application::{
    Application, ApplicationStats, ApplicationStatus, JobApplicationStats, StatusCounts,
};
use crate::models::job::Job;
use crate::models::job_seeker::JobSeeker;
use crate::repositories::{ApplicationRepository, JobRepository, JobSeekerRepository};

const RECENT_APPLICATIONS: usize = 5;

#[derive(Clone)]
pub struct ApplicationService {
    applications: Arc<dyn ApplicationRepository>,
    jobs: Arc<dyn JobRepository>,
    job_seekers: Arc<dyn JobSeekerRepository>,
}

impl ApplicationService {
    pub fn new(
        applications: Arc<dyn ApplicationRepository>,
        jobs: Arc<dyn JobRepository>,
        job_seekers: Arc<dyn JobSeekerRepository>,
    ) -> Self {
        Self {
            applications,
            jobs,
            job_seekers,
        }
    }

    async fn job_seeker(&self, job_seeker_id: Uuid) -> Result<JobSeeker> {
        self.job_seekers
            .get_by_id(job_seeker_id)
            .await?
            .ok_or_else(|| Error::not_found("job seeker profile"))
    }

    async fn job(&self, job_id: Uuid) -> Result<Job> {
        self.jobs
            .get_by_id(job_id)
            .await?
            .ok_or_else(|| Error::not_found("job"))
    }

    async fn application(&self, application_id: Uuid) -> Result<Application> {
        self.applications
            .get_by_id(application_id)
            .await?
            .ok_or_else(|| Error::not_found("application"))
    }

    async fn owned_job(&self, job_id: Uuid, employer_id: Uuid, action: &str) -> Result<Job> {
        let job = self.job(job_id).await?;
        if job.employer_id != employer_id {
            return Err(Error::Forbidden(format!("unauthorized to {}", action)));
        }
        Ok(job)
    }

    pub async fn apply(&self, job_seeker_id: Uuid, job_id: Uuid) -> Result<Application> {
        self.apply_at(job_seeker_id, job_id, Utc::now()).await
    }

    pub async fn apply_at(
        &self,
        job_seeker_id: Uuid,
        job_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Application> {
        let job_seeker = self.job_seeker(job_seeker_id).await?;
        let job = self.job(job_id).await?;

        if !job.is_active {
            return Err(Error::InvalidState("job is no longer active".to_string()));
        }
        if job.deadline_passed(now) {
            return Err(Error::DeadlinePassed(
                "application deadline has passed".to_string(),
            ));
        }
        if self
            .applications
            .get_by_job_and_job_seeker(job_id, job_seeker_id)
            .await?
            .is_some()
        {
            return Err(Error::Conflict(
                "you have already applied to this job".to_string(),
            ));
        }
        if job.resume_required && !job_seeker.has_resume() {
            return Err(Error::Validation(
                "resume is required for this job".to_string(),
            ));
        }
        if job.portfolio_required && !job_seeker.has_portfolio() {
            return Err(Error::Validation(
                "portfolio is required for this job".to_string(),
            ));
        }

        let mut application = self
            .applications
            .create(job_id, job_seeker_id, now)
            .await?;
        tracing::info!(%job_id, %job_seeker_id, application_id = %application.id, "application submitted");

        application.job = Some(job);
        application.job_seeker = Some(job_seeker);
        Ok(application)
    }

    pub async fn withdraw(&self, application_id: Uuid, job_seeker_id: Uuid) -> Result<()> {
        let application = self.application(application_id).await?;
        if application.job_seeker_id != job_seeker_id {
            return Err(Error::Forbidden(
                "unauthorized to withdraw this application".to_string(),
            ));
        }
        if application.status.is_terminal() {
            return Err(Error::InvalidState(
                "cannot withdraw application that has been processed".to_string(),
            ));
        }

        self.applications.delete(application_id).await?;
        tracing::info!(%application_id, %job_seeker_id, "application withdrawn");
        Ok(())
    }

    /// Employers may move an application to any status, terminal ones included.
    pub async fn update_status(
        &self,
        application_id: Uuid,
        employer_id: Uuid,
        status: ApplicationStatus,
    ) -> Result<Application> {
        let mut application = self.application(application_id).await?;
        let job = match application.job.take() {
            Some(job) => job,
            None => self.job(application.job_id).await?,
        };
        if job.employer_id != employer_id {
            return Err(Error::Forbidden(
                "unauthorized to update this application".to_string(),
            ));
        }

        let mut updated = self
            .applications
            .update_status(application_id, status, Utc::now())
            .await?;
        tracing::info!(%application_id, from = %application.status, to = %status, "application status changed");
        updated.job = Some(job);
        Ok(updated)
    }

    pub async fn get_application(&self, application_id: Uuid) -> Result<Application> {
        self.application(application_id).await
    }

    pub async fn list_for_seeker(&self, job_seeker_id: Uuid) -> Result<Vec<Application>> {
        self.job_seeker(job_seeker_id).await?;
        self.applications.list_by_job_seeker(job_seeker_id).await
    }

    pub async fn list_for_job(&self, job_id: Uuid, employer_id: Uuid) -> Result<Vec<Application>> {
        self.owned_job(job_id, employer_id, "view applications for this job")
            .await?;
        self.applications.list_by_job(job_id).await
    }

    pub async fn seeker_stats(&self, job_seeker_id: Uuid) -> Result<ApplicationStats> {
        let applications = self.list_for_seeker(job_seeker_id).await?;
        let counts = StatusCounts::tally(&applications);
        let recent_applications = applications
            .into_iter()
            .take(RECENT_APPLICATIONS)
            .collect();

        Ok(ApplicationStats {
            counts,
            recent_applications,
        })
    }

    pub async fn job_stats(&self, job_id: Uuid, employer_id: Uuid) -> Result<JobApplicationStats> {
        let job = self
            .owned_job(job_id, employer_id, "view stats for this job")
            .await?;
        let applications = self.applications.list_by_job(job_id).await?;

        Ok(JobApplicationStats {
            counts: StatusCounts::tally(&applications),
            job_title: job.title,
            application_deadline: job.application_deadline,
        })
    }
}
