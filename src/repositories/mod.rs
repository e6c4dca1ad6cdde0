//! Storage boundary. Services only see these traits; absence is reported as
//! `Ok(None)` so callers can tell "not there" apart from a storage failure.

pub mod application_repository;
pub mod employer_repository;
pub mod firm_profile_repository;
pub mod job_repository;
pub mod job_seeker_repository;
pub mod student_profile_repository;
pub mod user_repository;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::Result;
use crate::models::{
    application::{Application, ApplicationStatus},
    employer::{Employer, NewEmployer},
    firm_profile::{FirmProfile, NewFirmProfile},
    job::{Job, JobFilter, NewJob},
    job_seeker::{JobSeeker, NewJobSeeker},
    student_profile::{NewStudentProfile, StudentProfile},
    user::{NewUser, User},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: NewUser) -> Result<User>;
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>>;
    async fn get_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn email_exists(&self, email: &str) -> Result<bool>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobSeekerRepository: Send + Sync {
    async fn create(&self, profile: NewJobSeeker) -> Result<JobSeeker>;
    async fn get_by_id(&self, id: Uuid) -> Result<Option<JobSeeker>>;
    async fn get_by_user_id(&self, user_id: Uuid) -> Result<Option<JobSeeker>>;
    async fn update(&self, profile: &JobSeeker) -> Result<JobSeeker>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployerRepository: Send + Sync {
    async fn create(&self, profile: NewEmployer) -> Result<Employer>;
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Employer>>;
    async fn get_by_user_id(&self, user_id: Uuid) -> Result<Option<Employer>>;
    async fn update(&self, profile: &Employer) -> Result<Employer>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentProfileRepository: Send + Sync {
    async fn create(&self, profile: NewStudentProfile) -> Result<StudentProfile>;
    async fn get_by_job_seeker_id(&self, job_seeker_id: Uuid) -> Result<Option<StudentProfile>>;
    async fn update(&self, profile: &StudentProfile) -> Result<StudentProfile>;
    async fn delete_by_job_seeker_id(&self, job_seeker_id: Uuid) -> Result<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FirmProfileRepository: Send + Sync {
    async fn create(&self, profile: NewFirmProfile) -> Result<FirmProfile>;
    async fn get_by_employer_id(&self, employer_id: Uuid) -> Result<Option<FirmProfile>>;
    async fn update(&self, profile: &FirmProfile) -> Result<FirmProfile>;
    async fn delete_by_employer_id(&self, employer_id: Uuid) -> Result<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn create(&self, job: NewJob) -> Result<Job>;
    /// Returns the job with its owning employer attached.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Job>>;
    /// Newest first, no employer attached.
    async fn list_by_employer(&self, employer_id: Uuid) -> Result<Vec<Job>>;
    /// Applies the filter; every returned job carries its employer.
    async fn list(&self, filter: &JobFilter) -> Result<Vec<Job>>;
    async fn update(&self, job: &Job) -> Result<Job>;
    async fn delete(&self, id: Uuid) -> Result<()>;
    async fn count_by_employer(&self, employer_id: Uuid) -> Result<i64>;
    async fn distinct_industries(&self) -> Result<Vec<String>>;
    async fn distinct_cities(&self) -> Result<Vec<String>>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Fails with `Conflict` when the (job, job seeker) pair already exists.
    async fn create(
        &self,
        job_id: Uuid,
        job_seeker_id: Uuid,
        applied_at: DateTime<Utc>,
    ) -> Result<Application>;
    /// Returns the application with its job attached.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Application>>;
    async fn get_by_job_and_job_seeker(
        &self,
        job_id: Uuid,
        job_seeker_id: Uuid,
    ) -> Result<Option<Application>>;
    /// Newest first, each with its job (and the job's employer) attached.
    async fn list_by_job_seeker(&self, job_seeker_id: Uuid) -> Result<Vec<Application>>;
    /// Newest first, each with its job seeker attached.
    async fn list_by_job(&self, job_id: Uuid) -> Result<Vec<Application>>;
    async fn update_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Application>;
    async fn delete(&self, id: Uuid) -> Result<()>;
}
