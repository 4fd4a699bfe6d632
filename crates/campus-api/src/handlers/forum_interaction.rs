//! Forum interaction handlers
//!
//! Reactions and comments posted by the forum pages, as a form or as JSON.

use axum::{extract::State, Json};
use campus_service::dto::{
    CommentEnvelope, CommentRequest, EditCommentRequest, ReactionRequest, ReactionResponse,
    SuccessResponse,
};
use campus_service::{CommentaireService, ReactionService};

use crate::extractors::{IdPath, JsonOrForm, ValidatedJsonOrForm};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Toggle a reaction on a post
///
/// POST /forum-interaction/react/:id
pub async fn react_to_post(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonOrForm(request): JsonOrForm<ReactionRequest>,
) -> ApiResult<Json<ReactionResponse>> {
    let response = ReactionService::new(state.service_context())
        .react_to_post(id, request)
        .await?;
    Ok(Json(response))
}

/// Toggle a reaction on a comment
///
/// POST /forum-interaction/comment-react/:id
pub async fn react_to_comment(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonOrForm(request): JsonOrForm<ReactionRequest>,
) -> ApiResult<Json<ReactionResponse>> {
    let response = ReactionService::new(state.service_context())
        .react_to_comment(id, request)
        .await?;
    Ok(Json(response))
}

/// Add a comment to a post
///
/// POST /forum-interaction/comment/:id
pub async fn add_comment(
    State(state): State<AppState>,
    IdPath(post_id): IdPath,
    ValidatedJsonOrForm(request): ValidatedJsonOrForm<CommentRequest>,
) -> ApiResult<Created<CommentEnvelope>> {
    let response = CommentaireService::new(state.service_context())
        .add(post_id, request)
        .await?;
    Ok(Created(response))
}

/// POST /forum-interaction/comment-edit/:id
pub async fn edit_comment(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJsonOrForm(request): ValidatedJsonOrForm<EditCommentRequest>,
) -> ApiResult<Json<CommentEnvelope>> {
    let response = CommentaireService::new(state.service_context())
        .edit(id, request)
        .await?;
    Ok(Json(response))
}

/// DELETE (or POST) /forum-interaction/comment-delete/:id
pub async fn delete_comment(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<SuccessResponse>> {
    CommentaireService::new(state.service_context()).delete(id).await?;
    Ok(Json(SuccessResponse::ok()))
}
