use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{
        job_dto::{CreateJobPayload, JobListQuery, UpdateJobPayload},
        response_dto::ApiResponse,
    },
    error::Result,
    middleware::auth::AuthUser,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/jobs",
    params(
        ("industry" = Option<String>, Query, description = "Exact industry"),
        ("job_type" = Option<String>, Query, description = "internship, full_time or contract"),
        ("city" = Option<String>, Query, description = "Case-insensitive substring of the city"),
        ("target_audience" = Option<String>, Query, description = "Also matches jobs open to any audience"),
        ("employment_mode" = Option<String>, Query, description = "on_site, remote or hybrid"),
        ("is_paid" = Option<bool>, Query, description = "Paid positions only"),
        ("order_by" = Option<String>, Query, description = "Sort column"),
        ("order_direction" = Option<String>, Query, description = "asc or desc"),
        ("limit" = Option<i64>, Query, description = "Maximum number of results")
    ),
    responses(
        (status = 200, description = "Active jobs matching the filters"),
        (status = 400, description = "Malformed is_paid, is_active or limit")
    )
)]
#[axum::debug_handler]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> Result<impl IntoResponse> {
    let filter = query.into_filter()?;
    let jobs = state.job_service.get_all_jobs(filter).await?;
    Ok(Json(ApiResponse::data(jobs)))
}

#[utoipa::path(
    get,
    path = "/api/jobs/filters",
    responses((status = 200, description = "Values available for each browse filter"))
)]
#[axum::debug_handler]
pub async fn filter_options(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let options = state.job_service.filter_options().await?;
    Ok(Json(ApiResponse::data(options)))
}

#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job with its employer"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let job = state.job_service.get_job(id).await?;
    Ok(Json(ApiResponse::data(job)))
}

#[utoipa::path(
    post,
    path = "/api/employers/jobs",
    request_body = CreateJobPayload,
    responses(
        (status = 201, description = "Job posted"),
        (status = 400, description = "Invalid payload or deadline in the past"),
        (status = 404, description = "Employer profile not found")
    )
)]
#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateJobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let employer = state.employer_service.get_profile(user.user_id).await?;
    let job = state.job_service.create_job(employer.id, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(job, "job created successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/api/employers/jobs",
    responses(
        (status = 200, description = "The employer's own jobs, active or not"),
        (status = 400, description = "Malformed is_paid, is_active or limit")
    )
)]
#[axum::debug_handler]
pub async fn list_employer_jobs(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<JobListQuery>,
) -> Result<impl IntoResponse> {
    let filter = query.into_filter()?;
    let employer = state.employer_service.get_profile(user.user_id).await?;
    let jobs = state
        .job_service
        .get_employer_jobs(employer.id, filter)
        .await?;
    Ok(Json(ApiResponse::data(jobs)))
}

#[utoipa::path(
    get,
    path = "/api/employers/jobs/{id}",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job"),
        (status = 403, description = "Job belongs to another employer"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn get_employer_job(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let employer = state.employer_service.get_profile(user.user_id).await?;
    let job = state.job_service.get_owned_job(employer.id, id).await?;
    Ok(Json(ApiResponse::data(job)))
}

#[utoipa::path(
    put,
    path = "/api/employers/jobs/{id}",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    request_body = UpdateJobPayload,
    responses(
        (status = 200, description = "Job updated"),
        (status = 400, description = "Invalid payload or deadline in the past"),
        (status = 403, description = "Job belongs to another employer"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn update_job(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateJobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let employer = state.employer_service.get_profile(user.user_id).await?;
    let job = state
        .job_service
        .update_job(employer.id, id, payload)
        .await?;
    Ok(Json(ApiResponse::with_message(job, "job updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/api/employers/jobs/{id}",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job deleted"),
        (status = 403, description = "Job belongs to another employer"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_job(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let employer = state.employer_service.get_profile(user.user_id).await?;
    state.job_service.delete_job(employer.id, id).await?;
    Ok(Json(ApiResponse::message("job deleted successfully")))
}

#[utoipa::path(
    put,
    path = "/api/employers/jobs/{id}/toggle",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job activated or deactivated"),
        (status = 403, description = "Job belongs to another employer"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn toggle_job(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let employer = state.employer_service.get_profile(user.user_id).await?;
    let job = state.job_service.toggle_job_status(employer.id, id).await?;
    let message = if job.is_active {
        "job activated"
    } else {
        "job deactivated"
    };
    Ok(Json(ApiResponse::with_message(job, message)))
}
