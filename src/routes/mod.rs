pub mod application;
pub mod auth;
pub mod employer;
pub mod health;
pub mod job;
pub mod job_seeker;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post, put},
    Json, Router,
};
use tower_http::services::ServeDir;
use utoipa::OpenApi;

use crate::middleware::auth::{require_auth, require_employer, require_job_seeker};
use crate::AppState;

/// Largest accepted request body; leaves headroom over the portfolio limit.
const MAX_BODY_BYTES: usize = 30 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(title = "Job Board API", description = "Jobs, profiles and applications"),
    paths(
        health::health,
        health::ping,
        auth::register,
        auth::login,
        auth::logout,
        auth::me,
        job_seeker::create_profile,
        job_seeker::get_profile,
        job_seeker::get_full_profile,
        job_seeker::update_profile,
        job_seeker::create_student_profile,
        job_seeker::get_student_profile,
        job_seeker::update_student_profile,
        job_seeker::delete_student_profile,
        employer::create_profile,
        employer::get_profile,
        employer::get_full_profile,
        employer::update_profile,
        employer::create_firm_profile,
        employer::get_firm_profile,
        employer::update_firm_profile,
        employer::delete_firm_profile,
        employer::dashboard,
        upload::upload_resume,
        upload::upload_portfolio,
        job::list_jobs,
        job::filter_options,
        job::get_job,
        job::create_job,
        job::list_employer_jobs,
        job::get_employer_job,
        job::update_job,
        job::delete_job,
        job::toggle_job,
        application::apply,
        application::list_my_applications,
        application::my_stats,
        application::withdraw,
        application::update_status,
        application::list_job_applications,
        application::job_application_stats,
    )
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router(state: AppState) -> Router {
    let public = Router::new()
        .route("/health", get(health::health))
        .route("/api/ping", get(health::ping))
        .route("/api/docs/openapi.json", get(openapi))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/jobs", get(job::list_jobs))
        .route("/api/jobs/filters", get(job::filter_options))
        .route("/api/jobs/:id", get(job::get_job));

    let authenticated = Router::new()
        .route("/api/auth/me", get(auth::me))
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    let job_seeker = Router::new()
        .route(
            "/api/job-seekers/profile",
            post(job_seeker::create_profile)
                .get(job_seeker::get_profile)
                .put(job_seeker::update_profile),
        )
        .route(
            "/api/job-seekers/profile/full",
            get(job_seeker::get_full_profile),
        )
        .route(
            "/api/job-seekers/student-profile",
            post(job_seeker::create_student_profile)
                .get(job_seeker::get_student_profile)
                .put(job_seeker::update_student_profile)
                .delete(job_seeker::delete_student_profile),
        )
        .route("/api/upload/resume", post(upload::upload_resume))
        .route("/api/upload/portfolio", post(upload::upload_portfolio))
        .route(
            "/api/applications",
            post(application::apply).get(application::list_my_applications),
        )
        .route("/api/applications/stats", get(application::my_stats))
        .route(
            "/api/applications/:id",
            axum::routing::delete(application::withdraw),
        )
        .route_layer(from_fn(require_job_seeker))
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    let employer = Router::new()
        .route(
            "/api/employers/profile",
            post(employer::create_profile)
                .get(employer::get_profile)
                .put(employer::update_profile),
        )
        .route("/api/employers/profile/full", get(employer::get_full_profile))
        .route(
            "/api/employers/firm-profile",
            post(employer::create_firm_profile)
                .get(employer::get_firm_profile)
                .put(employer::update_firm_profile)
                .delete(employer::delete_firm_profile),
        )
        .route("/api/employers/dashboard", get(employer::dashboard))
        .route(
            "/api/employers/jobs",
            post(job::create_job).get(job::list_employer_jobs),
        )
        .route(
            "/api/employers/jobs/:id",
            get(job::get_employer_job)
                .put(job::update_job)
                .delete(job::delete_job),
        )
        .route("/api/employers/jobs/:id/toggle", put(job::toggle_job))
        .route(
            "/api/employers/jobs/:id/applications",
            get(application::list_job_applications),
        )
        .route(
            "/api/employers/jobs/:id/applications/stats",
            get(application::job_application_stats),
        )
        .route(
            "/api/applications/:id/status",
            put(application::update_status),
        )
        .route_layer(from_fn(require_employer))
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    let uploads_dir = state.config.uploads_dir.clone();

    public
        .merge(authenticated)
        .merge(job_seeker)
        .merge(employer)
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
