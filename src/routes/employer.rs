use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::{
        extension_dto::{CreateFirmProfilePayload, UpdateFirmProfilePayload},
        profile_dto::{CreateEmployerPayload, UpdateEmployerPayload},
        response_dto::ApiResponse,
    },
    error::Result,
    middleware::auth::AuthUser,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/employers/profile",
    request_body = CreateEmployerPayload,
    responses(
        (status = 201, description = "Employer profile created"),
        (status = 400, description = "Invalid payload"),
        (status = 409, description = "Profile already exists")
    )
)]
#[axum::debug_handler]
pub async fn create_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateEmployerPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let profile = state
        .employer_service
        .create_profile(user.user_id, payload)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(profile, "profile created successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/api/employers/profile",
    responses(
        (status = 200, description = "Employer profile"),
        (status = 404, description = "Profile not found")
    )
)]
#[axum::debug_handler]
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    let profile = state.employer_service.get_profile(user.user_id).await?;
    Ok(Json(ApiResponse::data(profile)))
}

#[utoipa::path(
    get,
    path = "/api/employers/profile/full",
    responses(
        (status = 200, description = "Profile with its firm extension, if any"),
        (status = 404, description = "Profile not found")
    )
)]
#[axum::debug_handler]
pub async fn get_full_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    let profile = state
        .employer_service
        .get_profile_with_extension(user.user_id)
        .await?;
    Ok(Json(ApiResponse::data(profile)))
}

#[utoipa::path(
    put,
    path = "/api/employers/profile",
    request_body = UpdateEmployerPayload,
    responses(
        (status = 200, description = "Profile updated"),
        (status = 404, description = "Profile not found")
    )
)]
#[axum::debug_handler]
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<UpdateEmployerPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let profile = state
        .employer_service
        .update_profile(user.user_id, payload)
        .await?;
    Ok(Json(ApiResponse::with_message(profile, "profile updated successfully")))
}

#[utoipa::path(
    post,
    path = "/api/employers/firm-profile",
    request_body = CreateFirmProfilePayload,
    responses(
        (status = 201, description = "Firm profile created"),
        (status = 400, description = "Employer is not a firm"),
        (status = 409, description = "Firm profile already exists")
    )
)]
#[axum::debug_handler]
pub async fn create_firm_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateFirmProfilePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let employer = state.employer_service.get_profile(user.user_id).await?;
    let profile = state
        .firm_profile_service
        .create_profile(employer.id, payload)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            profile,
            "firm profile created successfully",
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/employers/firm-profile",
    responses(
        (status = 200, description = "Firm profile"),
        (status = 404, description = "Firm profile not found")
    )
)]
#[axum::debug_handler]
pub async fn get_firm_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    let employer = state.employer_service.get_profile(user.user_id).await?;
    let profile = state.firm_profile_service.get_profile(employer.id).await?;
    Ok(Json(ApiResponse::data(profile)))
}

#[utoipa::path(
    put,
    path = "/api/employers/firm-profile",
    request_body = UpdateFirmProfilePayload,
    responses(
        (status = 200, description = "Firm profile updated"),
        (status = 404, description = "Firm profile not found")
    )
)]
#[axum::debug_handler]
pub async fn update_firm_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<UpdateFirmProfilePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let employer = state.employer_service.get_profile(user.user_id).await?;
    let profile = state
        .firm_profile_service
        .update_profile(employer.id, payload)
        .await?;
    Ok(Json(ApiResponse::with_message(
        profile,
        "firm profile updated successfully",
    )))
}

#[utoipa::path(
    delete,
    path = "/api/employers/firm-profile",
    responses(
        (status = 200, description = "Firm profile deleted"),
        (status = 404, description = "Firm profile not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_firm_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    let employer = state.employer_service.get_profile(user.user_id).await?;
    state.firm_profile_service.delete_profile(employer.id).await?;
    Ok(Json(ApiResponse::message("firm profile deleted successfully")))
}

#[utoipa::path(
    get,
    path = "/api/employers/dashboard",
    responses(
        (status = 200, description = "Job counts and the most recent postings"),
        (status = 404, description = "Profile not found")
    )
)]
#[axum::debug_handler]
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    let employer = state.employer_service.get_profile(user.user_id).await?;
    let stats = state.job_service.employer_dashboard(employer.id).await?;
    Ok(Json(ApiResponse::data(stats)))
}
