use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{
        application_dto::{ApplyPayload, UpdateApplicationStatusPayload},
        response_dto::ApiResponse,
    },
    error::Result,
    middleware::auth::AuthUser,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/applications",
    request_body = ApplyPayload,
    responses(
        (status = 201, description = "Application submitted"),
        (status = 400, description = "Job closed, deadline passed or required documents missing"),
        (status = 404, description = "Job or profile not found"),
        (status = 409, description = "Already applied to this job")
    )
)]
#[axum::debug_handler]
pub async fn apply(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<ApplyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let seeker = state.job_seeker_service.get_profile(user.user_id).await?;
    let application = state
        .application_service
        .apply(seeker.id, payload.job_id)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            application,
            "application submitted successfully",
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/applications",
    responses(
        (status = 200, description = "The job seeker's applications, newest first"),
        (status = 404, description = "Profile not found")
    )
)]
#[axum::debug_handler]
pub async fn list_my_applications(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    let seeker = state.job_seeker_service.get_profile(user.user_id).await?;
    let applications = state.application_service.list_for_seeker(seeker.id).await?;
    Ok(Json(ApiResponse::data(applications)))
}

#[utoipa::path(
    get,
    path = "/api/applications/stats",
    responses(
        (status = 200, description = "Counts per status and the latest applications"),
        (status = 404, description = "Profile not found")
    )
)]
#[axum::debug_handler]
pub async fn my_stats(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    let seeker = state.job_seeker_service.get_profile(user.user_id).await?;
    let stats = state.application_service.seeker_stats(seeker.id).await?;
    Ok(Json(ApiResponse::data(stats)))
}

#[utoipa::path(
    delete,
    path = "/api/applications/{id}",
    params(
        ("id" = Uuid, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "Application withdrawn"),
        (status = 400, description = "Application already processed"),
        (status = 403, description = "Application belongs to someone else"),
        (status = 404, description = "Application not found")
    )
)]
#[axum::debug_handler]
pub async fn withdraw(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let seeker = state.job_seeker_service.get_profile(user.user_id).await?;
    state.application_service.withdraw(id, seeker.id).await?;
    Ok(Json(ApiResponse::message("application withdrawn successfully")))
}

#[utoipa::path(
    put,
    path = "/api/applications/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Application ID")
    ),
    request_body = UpdateApplicationStatusPayload,
    responses(
        (status = 200, description = "Status updated"),
        (status = 403, description = "Application is for another employer's job"),
        (status = 404, description = "Application not found")
    )
)]
#[axum::debug_handler]
pub async fn update_status(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateApplicationStatusPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let employer = state.employer_service.get_profile(user.user_id).await?;
    let application = state
        .application_service
        .update_status(id, employer.id, payload.status)
        .await?;
    Ok(Json(ApiResponse::with_message(
        application,
        "application status updated",
    )))
}

#[utoipa::path(
    get,
    path = "/api/employers/jobs/{id}/applications",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Applications for the job with applicant profiles"),
        (status = 403, description = "Job belongs to another employer"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn list_job_applications(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let employer = state.employer_service.get_profile(user.user_id).await?;
    let applications = state
        .application_service
        .list_for_job(id, employer.id)
        .await?;
    Ok(Json(ApiResponse::data(applications)))
}

#[utoipa::path(
    get,
    path = "/api/employers/jobs/{id}/applications/stats",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Counts per status for the job"),
        (status = 403, description = "Job belongs to another employer"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn job_application_stats(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let employer = state.employer_service.get_profile(user.user_id).await?;
    let stats = state.application_service.job_stats(id, employer.id).await?;
    Ok(Json(ApiResponse::data(stats)))
}
