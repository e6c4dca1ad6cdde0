pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::repositories::{
    application_repository::PgApplicationRepository, employer_repository::PgEmployerRepository,
    firm_profile_repository::PgFirmProfileRepository, job_repository::PgJobRepository,
    job_seeker_repository::PgJobSeekerRepository,
    student_profile_repository::PgStudentProfileRepository, user_repository::PgUserRepository,
    ApplicationRepository, EmployerRepository, FirmProfileRepository, JobRepository,
    JobSeekerRepository, StudentProfileRepository, UserRepository,
};
use crate::services::{
    application_service::ApplicationService, auth_service::AuthService,
    employer_service::EmployerService, file_service::FileService,
    firm_profile_service::FirmProfileService, job_seeker_service::JobSeekerService,
    job_service::JobService, storage_service::LocalDiskStorage,
    student_profile_service::StudentProfileService,
};
use crate::utils::token::TokenIssuer;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub tokens: TokenIssuer,
    pub auth_service: AuthService,
    pub job_seeker_service: JobSeekerService,
    pub employer_service: EmployerService,
    pub student_profile_service: StudentProfileService,
    pub firm_profile_service: FirmProfileService,
    pub job_service: JobService,
    pub application_service: ApplicationService,
    pub file_service: FileService,
}

impl AppState {
    pub fn new(pool: PgPool, config: Config) -> Self {
        let tokens = TokenIssuer::new(&config.jwt_secret, config.jwt_expiry_hours);

        let users: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool.clone()));
        let job_seekers: Arc<dyn JobSeekerRepository> =
            Arc::new(PgJobSeekerRepository::new(pool.clone()));
        let employers: Arc<dyn EmployerRepository> =
            Arc::new(PgEmployerRepository::new(pool.clone()));
        let student_profiles: Arc<dyn StudentProfileRepository> =
            Arc::new(PgStudentProfileRepository::new(pool.clone()));
        let firm_profiles: Arc<dyn FirmProfileRepository> =
            Arc::new(PgFirmProfileRepository::new(pool.clone()));
        let jobs: Arc<dyn JobRepository> = Arc::new(PgJobRepository::new(pool.clone()));
        let applications: Arc<dyn ApplicationRepository> =
            Arc::new(PgApplicationRepository::new(pool.clone()));

        let storage = Arc::new(LocalDiskStorage::new(
            config.uploads_dir.as_str(),
            &config.public_base_url,
        ));

        Self {
            auth_service: AuthService::new(users.clone(), tokens.clone()),
            job_seeker_service: JobSeekerService::new(
                users.clone(),
                job_seekers.clone(),
                student_profiles.clone(),
            ),
            employer_service: EmployerService::new(users, employers.clone(), firm_profiles.clone()),
            student_profile_service: StudentProfileService::new(
                student_profiles,
                job_seekers.clone(),
            ),
            firm_profile_service: FirmProfileService::new(firm_profiles, employers.clone()),
            job_service: JobService::new(jobs.clone(), employers),
            application_service: ApplicationService::new(applications, jobs, job_seekers),
            file_service: FileService::new(storage),
            tokens,
            config: Arc::new(config),
            pool,
        }
    }
}
