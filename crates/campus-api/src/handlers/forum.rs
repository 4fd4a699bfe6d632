//! Forum handlers
//!
//! Posts, likes and the AJAX search endpoints.

use axum::{extract::State, Json};
use campus_service::dto::{
    ApiResponse, CommentResponse, CommentSearchParams, ForumSearchItem, LikeResponse,
    PostDetailResponse, PostRequest, PostResponse, PostSearchParams, SearchResponse,
    SuccessResponse,
};
use campus_service::ForumService;

use crate::extractors::{IdPath, QueryParams, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List posts, newest first
///
/// GET /forum
pub async fn list_posts(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<PostResponse>>>> {
    let posts = ForumService::new(state.service_context()).list().await?;
    Ok(Json(ApiResponse::new(posts)))
}

/// Filtered post search
///
/// GET /forum/search
pub async fn search_posts(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<PostSearchParams>,
) -> ApiResult<Json<SearchResponse<ForumSearchItem>>> {
    let response = ForumService::new(state.service_context()).search(params).await?;
    Ok(Json(response))
}

/// Show a post with its comments; counts as a view
///
/// GET /forum/:id
pub async fn get_post(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<PostDetailResponse>> {
    let response = ForumService::new(state.service_context()).show(id).await?;
    Ok(Json(response))
}

/// POST /forum
pub async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<PostRequest>,
) -> ApiResult<Created<PostResponse>> {
    let response = ForumService::new(state.service_context()).create(request).await?;
    Ok(Created(response))
}

/// PUT /forum/:id
pub async fn update_post(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<PostRequest>,
) -> ApiResult<Json<PostResponse>> {
    let response = ForumService::new(state.service_context())
        .update(id, request)
        .await?;
    Ok(Json(response))
}

/// DELETE /forum/:id
pub async fn delete_post(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<SuccessResponse>> {
    ForumService::new(state.service_context()).delete(id).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// POST /forum/:id/like
pub async fn like_post(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<LikeResponse>> {
    let response = ForumService::new(state.service_context()).like(id).await?;
    Ok(Json(response))
}

/// Comment search within one post
///
/// GET /forum/:id/comments/search
pub async fn search_comments(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    QueryParams(params): QueryParams<CommentSearchParams>,
) -> ApiResult<Json<SearchResponse<CommentResponse>>> {
    let response = ForumService::new(state.service_context())
        .search_comments(id, params)
        .await?;
    Ok(Json(response))
}
