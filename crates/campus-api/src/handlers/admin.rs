//! Forum admin handlers
//!
//! Moderation of posts and comments. Posts created here carry the admin
//! flag; `/admin/posts/:id` only touches those, `/admin/posts/all/:id`
//! touches any post.

use axum::{extract::State, Json};
use campus_service::dto::{
    AdminForumParams, ApiResponse, CommentEnvelope, EditCommentRequest, ForumDashboardResponse,
    PostRequest, PostResponse, SuccessResponse,
};
use campus_service::AdminForumService;

use crate::extractors::{IdPath, PostCommentPath, QueryParams, ValidatedJson, ValidatedJsonOrForm};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Forum statistics with filtered post and comment lists
///
/// GET /admin/forum
pub async fn forum_dashboard(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<AdminForumParams>,
) -> ApiResult<Json<ForumDashboardResponse>> {
    let response = AdminForumService::new(state.service_context())
        .dashboard(params)
        .await?;
    Ok(Json(response))
}

/// GET /admin/posts
pub async fn list_admin_posts(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<PostResponse>>>> {
    let posts = AdminForumService::new(state.service_context())
        .list_posts()
        .await?;
    Ok(Json(ApiResponse::new(posts)))
}

/// POST /admin/posts
pub async fn create_admin_post(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<PostRequest>,
) -> ApiResult<Created<PostResponse>> {
    let response = AdminForumService::new(state.service_context())
        .create_post(request)
        .await?;
    Ok(Created(response))
}

/// PUT /admin/posts/:id
pub async fn update_admin_post(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<PostRequest>,
) -> ApiResult<Json<PostResponse>> {
    let response = AdminForumService::new(state.service_context())
        .update_post(id, request)
        .await?;
    Ok(Json(response))
}

/// DELETE /admin/posts/:id
pub async fn delete_admin_post(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<SuccessResponse>> {
    AdminForumService::new(state.service_context())
        .delete_post(id)
        .await?;
    Ok(Json(SuccessResponse::ok()))
}

/// PUT /admin/posts/all/:id
pub async fn update_any_post(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<PostRequest>,
) -> ApiResult<Json<PostResponse>> {
    let response = AdminForumService::new(state.service_context())
        .update_any_post(id, request)
        .await?;
    Ok(Json(response))
}

/// DELETE /admin/posts/all/:id
pub async fn delete_any_post(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<SuccessResponse>> {
    AdminForumService::new(state.service_context())
        .delete_any_post(id)
        .await?;
    Ok(Json(SuccessResponse::ok()))
}

/// PUT /admin/posts/:id/comments/:comment_id
pub async fn update_post_comment(
    State(state): State<AppState>,
    path: PostCommentPath,
    ValidatedJsonOrForm(request): ValidatedJsonOrForm<EditCommentRequest>,
) -> ApiResult<Json<CommentEnvelope>> {
    let response = AdminForumService::new(state.service_context())
        .update_post_comment(path.id, path.comment_id, request)
        .await?;
    Ok(Json(response))
}

/// DELETE /admin/posts/:id/comments/:comment_id
pub async fn delete_post_comment(
    State(state): State<AppState>,
    path: PostCommentPath,
) -> ApiResult<Json<SuccessResponse>> {
    AdminForumService::new(state.service_context())
        .delete_post_comment(path.id, path.comment_id)
        .await?;
    Ok(Json(SuccessResponse::ok()))
}

/// PUT /admin/comments/:id
pub async fn update_comment(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJsonOrForm(request): ValidatedJsonOrForm<EditCommentRequest>,
) -> ApiResult<Json<CommentEnvelope>> {
    let response = AdminForumService::new(state.service_context())
        .update_comment(id, request)
        .await?;
    Ok(Json(response))
}

/// DELETE /admin/comments/:id
pub async fn delete_comment(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<SuccessResponse>> {
    AdminForumService::new(state.service_context())
        .delete_comment(id)
        .await?;
    Ok(Json(SuccessResponse::ok()))
}
