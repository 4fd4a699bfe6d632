//! Cours handlers

use axum::{extract::State, Json};
use campus_service::dto::{
    ApiResponse, CoursDetailResponse, CoursRequest, CoursResponse, QuizResponse, SuccessResponse,
};
use campus_service::CoursService;

use crate::extractors::{IdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /cours
pub async fn list_cours(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<CoursResponse>>>> {
    let cours = CoursService::new(state.service_context()).list().await?;
    Ok(Json(ApiResponse::new(cours)))
}

/// Cours with its quizzes
///
/// GET /cours/:id
pub async fn get_cours(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<CoursDetailResponse>> {
    let response = CoursService::new(state.service_context()).get(id).await?;
    Ok(Json(response))
}

/// POST /cours
pub async fn create_cours(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CoursRequest>,
) -> ApiResult<Created<CoursResponse>> {
    let response = CoursService::new(state.service_context()).create(request).await?;
    Ok(Created(response))
}

/// PUT /cours/:id
pub async fn update_cours(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<CoursRequest>,
) -> ApiResult<Json<CoursResponse>> {
    let response = CoursService::new(state.service_context())
        .update(id, request)
        .await?;
    Ok(Json(response))
}

/// Delete a cours and its quizzes
///
/// DELETE /cours/:id
pub async fn delete_cours(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<SuccessResponse>> {
    CoursService::new(state.service_context()).delete(id).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// GET /cours/:id/quiz
pub async fn list_cours_quizzes(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<ApiResponse<Vec<QuizResponse>>>> {
    let quizzes = CoursService::new(state.service_context()).quizzes(id).await?;
    Ok(Json(ApiResponse::new(quizzes)))
}
