//! Tache handlers

use axum::{extract::State, Json};
use campus_service::dto::{
    ApiResponse, SuccessResponse, TacheRequest, TacheResponse, TacheSearchParams,
    TacheSearchResponse,
};
use campus_service::TacheService;

use crate::extractors::{IdPath, QueryParams, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /taches
pub async fn list_taches(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<TacheResponse>>>> {
    let taches = TacheService::new(state.service_context()).list().await?;
    Ok(Json(ApiResponse::new(taches)))
}

/// GET /taches/api/search
pub async fn search_taches(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<TacheSearchParams>,
) -> ApiResult<Json<TacheSearchResponse>> {
    let response = TacheService::new(state.service_context()).search(params).await?;
    Ok(Json(response))
}

/// GET /taches/:id
pub async fn get_tache(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<TacheResponse>> {
    let response = TacheService::new(state.service_context()).get(id).await?;
    Ok(Json(response))
}

/// POST /taches
pub async fn create_tache(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TacheRequest>,
) -> ApiResult<Created<TacheResponse>> {
    let response = TacheService::new(state.service_context()).create(request).await?;
    Ok(Created(response))
}

/// PUT /taches/:id
pub async fn update_tache(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<TacheRequest>,
) -> ApiResult<Json<TacheResponse>> {
    let response = TacheService::new(state.service_context())
        .update(id, request)
        .await?;
    Ok(Json(response))
}

/// DELETE /taches/:id
pub async fn delete_tache(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<SuccessResponse>> {
    TacheService::new(state.service_context()).delete(id).await?;
    Ok(Json(SuccessResponse::ok()))
}
