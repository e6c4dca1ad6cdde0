use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::dto::job_dto::{CreateJobPayload, UpdateJobPayload};
use crate::error::{Error, Result};
use crate::models::job::{
    EmployerDashboard, EmploymentMode, FilterOptions, Job, JobFilter, JobType, NewJob,
    TargetAudience,
};
use crate::models::string_list::StringList;
use crate::repositories::{EmployerRepository, JobRepository};
use crate::utils::patch::{patch_list, patch_string, patch_value};

const RECENT_JOBS: usize = 5;

/// Offered when no active job has declared an industry yet.
const DEFAULT_INDUSTRIES: &[&str] = &[
    "Architecture",
    "Interior Design",
    "Urban Planning",
    "Construction",
    "Landscape Architecture",
];

#[derive(Clone)]
pub struct JobService {
    jobs: Arc<dyn JobRepository>,
    employers: Arc<dyn EmployerRepository>,
}

impl JobService {
    pub fn new(jobs: Arc<dyn JobRepository>, employers: Arc<dyn EmployerRepository>) -> Self {
        Self { jobs, employers }
    }

    pub async fn create_job(&self, employer_id: Uuid, payload: CreateJobPayload) -> Result<Job> {
        self.create_job_at(employer_id, payload, Utc::now()).await
    }

    pub async fn create_job_at(
        &self,
        employer_id: Uuid,
        payload: CreateJobPayload,
        now: DateTime<Utc>,
    ) -> Result<Job> {
        if self.employers.get_by_id(employer_id).await?.is_none() {
            return Err(Error::not_found("employer"));
        }
        if payload.application_deadline < now {
            return Err(Error::Validation(
                "application deadline cannot be in the past".to_string(),
            ));
        }
        if payload.required_skills.iter().all(|s| s.trim().is_empty()) {
            return Err(Error::Validation(
                "at least one required skill is needed".to_string(),
            ));
        }

        let job = self
            .jobs
            .create(NewJob {
                employer_id,
                title: payload.title,
                job_type: payload.job_type,
                industry: payload.industry,
                target_audience: payload.target_audience,
                employment_mode: payload.employment_mode,
                start_month: payload.start_month,
                duration: payload.duration,
                application_deadline: payload.application_deadline,
                compensation_range: payload.compensation_range,
                is_paid: payload.is_paid,
                city: payload.city,
                state: payload.state,
                required_skills: StringList::from(payload.required_skills),
                min_experience: payload.min_experience,
                portfolio_required: payload.portfolio_required,
                resume_required: payload.resume_required,
                description: payload.description,
                about_team: payload.about_team,
                contact_email: payload.contact_email,
            })
            .await?;
        tracing::info!(%employer_id, job_id = %job.id, "job posted");
        Ok(job)
    }

    pub async fn get_job(&self, job_id: Uuid) -> Result<Job> {
        self.jobs
            .get_by_id(job_id)
            .await?
            .ok_or_else(|| Error::not_found("job"))
    }

    async fn owned_job(&self, employer_id: Uuid, job_id: Uuid, action: &str) -> Result<Job> {
        let job = self.get_job(job_id).await?;
        if job.employer_id != employer_id {
            return Err(Error::Forbidden(format!("unauthorized to {} this job", action)));
        }
        Ok(job)
    }

    pub async fn get_owned_job(&self, employer_id: Uuid, job_id: Uuid) -> Result<Job> {
        self.owned_job(employer_id, job_id, "view").await
    }

    pub async fn update_job(
        &self,
        employer_id: Uuid,
        job_id: Uuid,
        payload: UpdateJobPayload,
    ) -> Result<Job> {
        let mut job = self.owned_job(employer_id, job_id, "update").await?;

        if let Some(deadline) = payload.application_deadline {
            if deadline < Utc::now() {
                return Err(Error::Validation(
                    "application deadline cannot be in the past".to_string(),
                ));
            }
            job.application_deadline = deadline;
        }

        patch_string(&mut job.title, payload.title);
        patch_value(&mut job.job_type, payload.job_type);
        patch_string(&mut job.industry, payload.industry);
        patch_value(&mut job.target_audience, payload.target_audience);
        patch_value(&mut job.employment_mode, payload.employment_mode);
        patch_string(&mut job.start_month, payload.start_month);
        patch_string(&mut job.duration, payload.duration);
        patch_string(&mut job.compensation_range, payload.compensation_range);
        patch_value(&mut job.is_paid, payload.is_paid);
        patch_string(&mut job.city, payload.city);
        patch_string(&mut job.state, payload.state);
        patch_list(&mut job.required_skills, payload.required_skills);
        patch_string(&mut job.min_experience, payload.min_experience);
        patch_value(&mut job.portfolio_required, payload.portfolio_required);
        patch_value(&mut job.resume_required, payload.resume_required);
        patch_string(&mut job.description, payload.description);
        patch_string(&mut job.about_team, payload.about_team);
        patch_string(&mut job.contact_email, payload.contact_email);
        patch_value(&mut job.is_active, payload.is_active);

        self.jobs.update(&job).await
    }

    pub async fn delete_job(&self, employer_id: Uuid, job_id: Uuid) -> Result<()> {
        self.owned_job(employer_id, job_id, "delete").await?;
        self.jobs.delete(job_id).await?;
        tracing::info!(%employer_id, %job_id, "job deleted");
        Ok(())
    }

    pub async fn toggle_job_status(&self, employer_id: Uuid, job_id: Uuid) -> Result<Job> {
        let mut job = self.owned_job(employer_id, job_id, "modify").await?;
        job.is_active = !job.is_active;
        self.jobs.update(&job).await
    }

    /// Public browse: only active postings, across all employers.
    pub async fn get_all_jobs(&self, filter: JobFilter) -> Result<Vec<Job>> {
        if filter.matches_nothing {
            return Ok(Vec::new());
        }
        let filter = JobFilter {
            employer_id: None,
            is_active: Some(true),
            ..filter
        };
        self.jobs.list(&filter).await
    }

    /// Employer listing: scoped to the employer, `is_active` honoured as given.
    pub async fn get_employer_jobs(&self, employer_id: Uuid, filter: JobFilter) -> Result<Vec<Job>> {
        if filter.matches_nothing {
            return Ok(Vec::new());
        }
        let filter = JobFilter {
            employer_id: Some(employer_id),
            ..filter
        };
        self.jobs.list(&filter).await
    }

    pub async fn employer_dashboard(&self, employer_id: Uuid) -> Result<EmployerDashboard> {
        let total_jobs = self.jobs.count_by_employer(employer_id).await?;
        let jobs = self.jobs.list_by_employer(employer_id).await?;
        let active_jobs = jobs.iter().filter(|job| job.is_active).count() as i64;
        let recent_jobs = jobs.into_iter().take(RECENT_JOBS).collect();

        Ok(EmployerDashboard {
            total_jobs,
            active_jobs,
            recent_jobs,
        })
    }

    pub async fn filter_options(&self) -> Result<FilterOptions> {
        let mut industries = self.jobs.distinct_industries().await?;
        if industries.is_empty() {
            industries = DEFAULT_INDUSTRIES.iter().map(|s| s.to_string()).collect();
        }
        let cities = self.jobs.distinct_cities().await?;

        Ok(FilterOptions {
            industries,
            job_types: JobType::ALL.to_vec(),
            target_audiences: TargetAudience::ALL.to_vec(),
            employment_modes: EmploymentMode::ALL.to_vec(),
            cities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    use crate::models::employer::EmployerType;
    use crate::repositories::{MockEmployerRepository, MockJobRepository};
    use crate::services::test_support;

    fn payload(deadline: DateTime<Utc>) -> CreateJobPayload {
        CreateJobPayload {
            title: "Design Intern".into(),
            job_type: JobType::Internship,
            industry: "Architecture".into(),
            target_audience: TargetAudience::Students,
            employment_mode: EmploymentMode::Hybrid,
            start_month: "July".into(),
            duration: "3 months".into(),
            application_deadline: deadline,
            compensation_range: String::new(),
            is_paid: true,
            city: "Pune".into(),
            state: "Maharashtra".into(),
            required_skills: vec!["autocad".into()],
            min_experience: String::new(),
            portfolio_required: false,
            resume_required: true,
            description: "Drafting".into(),
            about_team: String::new(),
            contact_email: "jobs@studio.example".into(),
        }
    }

    fn employers_present() -> MockEmployerRepository {
        let mut employers = MockEmployerRepository::new();
        employers
            .expect_get_by_id()
            .returning(|_| Ok(Some(test_support::employer(EmployerType::Firm))));
        employers
    }

    #[tokio::test]
    async fn public_browse_forces_active_only() {
        let mut jobs = MockJobRepository::new();
        jobs.expect_list()
            .withf(|filter| filter.is_active == Some(true) && filter.employer_id.is_none())
            .times(1)
            .returning(|_| Ok(vec![]));
        let service = JobService::new(Arc::new(jobs), Arc::new(MockEmployerRepository::new()));

        service
            .get_all_jobs(JobFilter {
                is_active: Some(false),
                employer_id: Some(Uuid::new_v4()),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn employer_listing_keeps_requested_active_flag() {
        let employer_id = Uuid::new_v4();
        let mut jobs = MockJobRepository::new();
        jobs.expect_list()
            .withf(move |filter| {
                filter.is_active == Some(false) && filter.employer_id == Some(employer_id)
            })
            .times(1)
            .returning(|_| Ok(vec![]));
        let service = JobService::new(Arc::new(jobs), Arc::new(MockEmployerRepository::new()));

        service
            .get_employer_jobs(
                employer_id,
                JobFilter {
                    is_active: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn unmatchable_filter_returns_no_jobs() {
        let mut jobs = MockJobRepository::new();
        jobs.expect_list().never();
        let service = JobService::new(Arc::new(jobs), Arc::new(MockEmployerRepository::new()));
        let filter = JobFilter {
            matches_nothing: true,
            ..Default::default()
        };

        assert!(service.get_all_jobs(filter.clone()).await.unwrap().is_empty());
        assert!(service
            .get_employer_jobs(Uuid::new_v4(), filter)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn past_deadline_is_rejected_on_create() {
        let mut jobs = MockJobRepository::new();
        jobs.expect_create().never();
        let service = JobService::new(Arc::new(jobs), Arc::new(employers_present()));
        let now = test_support::fixed_now();

        let err = service
            .create_job_at(Uuid::new_v4(), payload(now - Duration::hours(1)), now)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn blank_skills_are_rejected_on_create() {
        let service = JobService::new(Arc::new(MockJobRepository::new()), Arc::new(employers_present()));
        let now = test_support::fixed_now();
        let mut body = payload(now + Duration::days(3));
        body.required_skills = vec!["  ".into()];

        let err = service
            .create_job_at(Uuid::new_v4(), body, now)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn create_for_unknown_employer_is_not_found() {
        let mut employers = MockEmployerRepository::new();
        employers.expect_get_by_id().returning(|_| Ok(None));
        let service = JobService::new(Arc::new(MockJobRepository::new()), Arc::new(employers));
        let now = test_support::fixed_now();

        let err = service
            .create_job_at(Uuid::new_v4(), payload(now + Duration::days(3)), now)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn only_owner_may_toggle() {
        let mut jobs = MockJobRepository::new();
        jobs.expect_get_by_id()
            .returning(|id| {
                let mut job = test_support::job(Uuid::new_v4());
                job.id = id;
                Ok(Some(job))
            });
        jobs.expect_update().never();
        let service = JobService::new(Arc::new(jobs), Arc::new(MockEmployerRepository::new()));

        let err = service
            .toggle_job_status(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Forbidden(_)));
    }

    #[tokio::test]
    async fn toggle_flips_active_flag() {
        let employer_id = Uuid::new_v4();
        let mut jobs = MockJobRepository::new();
        jobs.expect_get_by_id()
            .returning(move |_| Ok(Some(test_support::job(employer_id))));
        jobs.expect_update().returning(|job| Ok(job.clone()));
        let service = JobService::new(Arc::new(jobs), Arc::new(MockEmployerRepository::new()));

        let job = service
            .toggle_job_status(employer_id, Uuid::new_v4())
            .await
            .unwrap();
        assert!(!job.is_active);
    }

    #[tokio::test]
    async fn dashboard_counts_and_caps_recent_jobs() {
        let employer_id = Uuid::new_v4();
        let mut jobs = MockJobRepository::new();
        jobs.expect_count_by_employer().returning(|_| Ok(7));
        jobs.expect_list_by_employer().returning(move |_| {
            Ok((0..7)
                .map(|i| {
                    let mut job = test_support::job(employer_id);
                    job.is_active = i % 2 == 0;
                    job
                })
                .collect())
        });
        let service = JobService::new(Arc::new(jobs), Arc::new(MockEmployerRepository::new()));

        let dashboard = service.employer_dashboard(employer_id).await.unwrap();
        assert_eq!(dashboard.total_jobs, 7);
        assert_eq!(dashboard.active_jobs, 4);
        assert_eq!(dashboard.recent_jobs.len(), 5);
    }

    #[tokio::test]
    async fn filter_options_fall_back_to_default_industries() {
        let mut jobs = MockJobRepository::new();
        jobs.expect_distinct_industries().returning(|| Ok(vec![]));
        jobs.expect_distinct_cities()
            .returning(|| Ok(vec!["Pune".into()]));
        let service = JobService::new(Arc::new(jobs), Arc::new(MockEmployerRepository::new()));

        let options = service.filter_options().await.unwrap();
        assert_eq!(options.industries.len(), DEFAULT_INDUSTRIES.len());
        assert_eq!(options.cities, vec!["Pune".to_string()]);
        assert_eq!(options.target_audiences.len(), 3);
    }
}
