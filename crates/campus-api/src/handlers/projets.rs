//! Projet handlers
//!
//! CRUD, AJAX search and the admin projects dashboard.

use axum::{extract::State, Json};
use campus_service::dto::{
    ApiResponse, ProjectsDashboardResponse, ProjetDetailResponse, ProjetRequest, ProjetResponse,
    ProjetSearchParams, ProjetSearchResponse, SuccessResponse,
};
use campus_service::ProjetService;

use crate::extractors::{IdPath, QueryParams, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List enabled projets, newest first
///
/// GET /projets
pub async fn list_projets(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<ProjetResponse>>>> {
    let projets = ProjetService::new(state.service_context()).list().await?;
    Ok(Json(ApiResponse::new(projets)))
}

/// GET /projets/api/search
pub async fn search_projets(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ProjetSearchParams>,
) -> ApiResult<Json<ProjetSearchResponse>> {
    let response = ProjetService::new(state.service_context()).search(params).await?;
    Ok(Json(response))
}

/// Projet with its taches
///
/// GET /projets/:id
pub async fn get_projet(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<ProjetDetailResponse>> {
    let response = ProjetService::new(state.service_context()).get(id).await?;
    Ok(Json(response))
}

/// POST /projets
pub async fn create_projet(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ProjetRequest>,
) -> ApiResult<Created<ProjetResponse>> {
    let response = ProjetService::new(state.service_context()).create(request).await?;
    Ok(Created(response))
}

/// PUT /projets/:id
pub async fn update_projet(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<ProjetRequest>,
) -> ApiResult<Json<ProjetResponse>> {
    let response = ProjetService::new(state.service_context())
        .update(id, request)
        .await?;
    Ok(Json(response))
}

/// Delete a projet and its taches
///
/// DELETE /projets/:id
pub async fn delete_projet(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<SuccessResponse>> {
    ProjetService::new(state.service_context()).delete(id).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// GET /admin
pub async fn dashboard(
    State(state): State<AppState>,
) -> ApiResult<Json<ProjectsDashboardResponse>> {
    let response = ProjetService::new(state.service_context()).dashboard().await?;
    Ok(Json(response))
}
