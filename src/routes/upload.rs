use axum::{
    extract::{Multipart, State},
    response::{IntoResponse, Json},
    Extension,
};
use bytes::Bytes;

use crate::{
    dto::response_dto::ApiResponse,
    error::{Error, Result},
    middleware::auth::AuthUser,
    services::file_service::DocumentKind,
    AppState,
};

async fn upload_document(
    state: AppState,
    user: AuthUser,
    kind: DocumentKind,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    // The profile must exist before anything is written to storage.
    state.job_seeker_service.get_profile(user.user_id).await?;

    let mut upload: Option<(String, Bytes)> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(kind.as_str()) {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await?;
            upload = Some((file_name, bytes));
            break;
        }
    }
    let Some((file_name, bytes)) = upload else {
        return Err(Error::BadRequest(format!(
            "no file provided in field '{}'",
            kind.as_str()
        )));
    };

    let stored = state
        .file_service
        .upload(user.user_id, kind, &file_name, &bytes)
        .await?;
    state
        .job_seeker_service
        .attach_document(user.user_id, kind, stored.url.clone())
        .await?;

    Ok(Json(ApiResponse::with_message(
        stored,
        format!("{} uploaded successfully", kind.as_str()),
    )))
}

#[utoipa::path(
    post,
    path = "/api/upload/resume",
    responses(
        (status = 200, description = "Resume stored and linked to the profile"),
        (status = 400, description = "Missing file, too large, not a PDF"),
        (status = 404, description = "Profile not found")
    )
)]
#[axum::debug_handler]
pub async fn upload_resume(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    upload_document(state, user, DocumentKind::Resume, multipart).await
}

#[utoipa::path(
    post,
    path = "/api/upload/portfolio",
    responses(
        (status = 200, description = "Portfolio stored and linked to the profile"),
        (status = 400, description = "Missing file, too large, not a PDF"),
        (status = 404, description = "Profile not found")
    )
)]
#[axum::debug_handler]
pub async fn upload_portfolio(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    upload_document(state, user, DocumentKind::Portfolio, multipart).await
}
