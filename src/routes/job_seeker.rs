use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::{
        extension_dto::{CreateStudentProfilePayload, UpdateStudentProfilePayload},
        profile_dto::{CreateJobSeekerPayload, UpdateJobSeekerPayload},
        response_dto::ApiResponse,
    },
    error::Result,
    middleware::auth::AuthUser,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/job-seekers/profile",
    request_body = CreateJobSeekerPayload,
    responses(
        (status = 201, description = "Profile created"),
        (status = 400, description = "Invalid payload"),
        (status = 409, description = "Profile already exists")
    )
)]
#[axum::debug_handler]
pub async fn create_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateJobSeekerPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let profile = state
        .job_seeker_service
        .create_profile(user.user_id, payload)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(profile, "profile created successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/api/job-seekers/profile",
    responses(
        (status = 200, description = "Job seeker profile"),
        (status = 404, description = "Profile not found")
    )
)]
#[axum::debug_handler]
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    let profile = state.job_seeker_service.get_profile(user.user_id).await?;
    Ok(Json(ApiResponse::data(profile)))
}

#[utoipa::path(
    get,
    path = "/api/job-seekers/profile/full",
    responses(
        (status = 200, description = "Profile with its student extension, if any"),
        (status = 404, description = "Profile not found")
    )
)]
#[axum::debug_handler]
pub async fn get_full_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    let profile = state
        .job_seeker_service
        .get_profile_with_extension(user.user_id)
        .await?;
    Ok(Json(ApiResponse::data(profile)))
}

#[utoipa::path(
    put,
    path = "/api/job-seekers/profile",
    request_body = UpdateJobSeekerPayload,
    responses(
        (status = 200, description = "Profile updated"),
        (status = 404, description = "Profile not found")
    )
)]
#[axum::debug_handler]
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<UpdateJobSeekerPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let profile = state
        .job_seeker_service
        .update_profile(user.user_id, payload)
        .await?;
    Ok(Json(ApiResponse::with_message(profile, "profile updated successfully")))
}

#[utoipa::path(
    post,
    path = "/api/job-seekers/student-profile",
    request_body = CreateStudentProfilePayload,
    responses(
        (status = 201, description = "Student profile created"),
        (status = 400, description = "Job seeker is not a student"),
        (status = 409, description = "Student profile already exists")
    )
)]
#[axum::debug_handler]
pub async fn create_student_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateStudentProfilePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let seeker = state.job_seeker_service.get_profile(user.user_id).await?;
    let profile = state
        .student_profile_service
        .create_profile(seeker.id, payload)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            profile,
            "student profile created successfully",
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/job-seekers/student-profile",
    responses(
        (status = 200, description = "Student profile"),
        (status = 404, description = "Student profile not found")
    )
)]
#[axum::debug_handler]
pub async fn get_student_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    let seeker = state.job_seeker_service.get_profile(user.user_id).await?;
    let profile = state.student_profile_service.get_profile(seeker.id).await?;
    Ok(Json(ApiResponse::data(profile)))
}

#[utoipa::path(
    put,
    path = "/api/job-seekers/student-profile",
    request_body = UpdateStudentProfilePayload,
    responses(
        (status = 200, description = "Student profile updated"),
        (status = 404, description = "Student profile not found")
    )
)]
#[axum::debug_handler]
pub async fn update_student_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<UpdateStudentProfilePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let seeker = state.job_seeker_service.get_profile(user.user_id).await?;
    let profile = state
        .student_profile_service
        .update_profile(seeker.id, payload)
        .await?;
    Ok(Json(ApiResponse::with_message(
        profile,
        "student profile updated successfully",
    )))
}

#[utoipa::path(
    delete,
    path = "/api/job-seekers/student-profile",
    responses(
        (status = 200, description = "Student profile deleted"),
        (status = 404, description = "Student profile not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_student_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    let seeker = state.job_seeker_service.get_profile(user.user_id).await?;
    state.student_profile_service.delete_profile(seeker.id).await?;
    Ok(Json(ApiResponse::message("student profile deleted successfully")))
}
