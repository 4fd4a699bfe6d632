//! Quiz handlers

use axum::{extract::State, Json};
use campus_service::dto::{ApiResponse, QuizRequest, QuizResponse, SuccessResponse};
use campus_service::QuizService;

use crate::extractors::{IdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /quiz
pub async fn list_quizzes(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<QuizResponse>>>> {
    let quizzes = QuizService::new(state.service_context()).list().await?;
    Ok(Json(ApiResponse::new(quizzes)))
}

/// GET /quiz/:id
pub async fn get_quiz(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<QuizResponse>> {
    let response = QuizService::new(state.service_context()).get(id).await?;
    Ok(Json(response))
}

/// POST /quiz
pub async fn create_quiz(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<QuizRequest>,
) -> ApiResult<Created<QuizResponse>> {
    let response = QuizService::new(state.service_context()).create(request).await?;
    Ok(Created(response))
}

/// PUT /quiz/:id
pub async fn update_quiz(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<QuizRequest>,
) -> ApiResult<Json<QuizResponse>> {
    let response = QuizService::new(state.service_context())
        .update(id, request)
        .await?;
    Ok(Json(response))
}

/// DELETE /quiz/:id
pub async fn delete_quiz(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<SuccessResponse>> {
    QuizService::new(state.service_context()).delete(id).await?;
    Ok(Json(SuccessResponse::ok()))
}
