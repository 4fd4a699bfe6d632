//! Commentaire service
//!
//! Handles adding, editing and deleting forum comments.

use campus_core::entities::{Commentaire, NewCommentaire};
use campus_core::value_objects::non_empty;
use campus_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{CommentEnvelope, CommentRequest, CommentResponse, EditCommentRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Commentaire service
pub struct CommentaireService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentaireService<'a> {
    /// Create a new CommentaireService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a comment to a post; both content and author are required
    #[instrument(skip(self, request))]
    pub async fn add(&self, post_id: i64, request: CommentRequest) -> ServiceResult<CommentEnvelope> {
        let (Some(content), Some(author)) = (
            non_empty(request.content.as_deref()),
            non_empty(request.author.as_deref()),
        ) else {
            return Err(DomainError::MissingFields.into());
        };

        if self.ctx.post_repo().find_by_id(post_id).await?.is_none() {
            return Err(DomainError::PostNotFound(post_id).into());
        }

        let comment = self
            .ctx
            .commentaire_repo()
            .create(&NewCommentaire::new(post_id, content, author))
            .await?;
        info!(post_id, comment_id = comment.id, "Comment added");

        Ok(CommentEnvelope::new(CommentResponse::from(comment)))
    }

    /// Replace the content of a comment
    #[instrument(skip(self, request))]
    pub async fn edit(&self, id: i64, request: EditCommentRequest) -> ServiceResult<CommentEnvelope> {
        let content = non_empty(request.content.as_deref()).ok_or(DomainError::ContentRequired)?;
        let comment = self.find_comment(id).await?;
        self.apply_edit(comment, content).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.commentaire_repo().delete(id).await?;
        info!(comment_id = id, "Comment deleted");
        Ok(())
    }

    pub(crate) async fn find_comment(&self, id: i64) -> ServiceResult<Commentaire> {
        Ok(self
            .ctx
            .commentaire_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CommentaireNotFound(id))?)
    }

    pub(crate) async fn apply_edit(
        &self,
        mut comment: Commentaire,
        content: String,
    ) -> ServiceResult<CommentEnvelope> {
        comment.edit(content);
        self.ctx.commentaire_repo().update(&comment).await?;
        info!(comment_id = comment.id, "Comment edited");
        Ok(CommentEnvelope::new(CommentResponse::from(comment)))
    }
}
