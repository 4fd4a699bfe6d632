//! Reaction service
//!
//! Toggles reactions on posts and comments.
//!
//! A toggle reads the stored list, changes it in memory and writes the
//! whole list back. Concurrent toggles on the same subject are
//! last-write-wins.

use campus_core::value_objects::{non_empty, ReactionKind, ReactionList};
use campus_core::DomainError;
use chrono::Utc;
use tracing::{info, instrument};

use crate::dto::{ReactionRequest, ReactionResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle `author`'s reaction on a post
    #[instrument(skip(self))]
    pub async fn react_to_post(
        &self,
        post_id: i64,
        request: ReactionRequest,
    ) -> ServiceResult<ReactionResponse> {
        let (kind, author) = parse_request(&request)?;

        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;

        let mut reactions = post.reactions;
        let outcome = reactions.toggle(kind, &author, Utc::now());
        self.ctx.post_repo().update_reactions(post_id, &reactions).await?;

        info!(post_id, author = %author, kind = %kind, ?outcome, "Reaction toggled");
        Ok(summary(&reactions))
    }

    /// Toggle `author`'s reaction on a comment
    #[instrument(skip(self))]
    pub async fn react_to_comment(
        &self,
        comment_id: i64,
        request: ReactionRequest,
    ) -> ServiceResult<ReactionResponse> {
        let (kind, author) = parse_request(&request)?;

        let comment = self
            .ctx
            .commentaire_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentaireNotFound(comment_id))?;

        let mut reactions = comment.reactions;
        let outcome = reactions.toggle(kind, &author, Utc::now());
        self.ctx
            .commentaire_repo()
            .update_reactions(comment_id, &reactions)
            .await?;

        info!(comment_id, author = %author, kind = %kind, ?outcome, "Reaction toggled");
        Ok(summary(&reactions))
    }
}

/// Reaction kind (exact match) and trimmed author, validated before any lookup
fn parse_request(request: &ReactionRequest) -> Result<(ReactionKind, String), DomainError> {
    let raw = request.kind.as_deref().unwrap_or_default();
    let kind = ReactionKind::parse(raw)
        .ok_or_else(|| DomainError::InvalidReactionType(raw.to_string()))?;
    let author = non_empty(request.author.as_deref()).ok_or(DomainError::AuthorRequired)?;
    Ok((kind, author))
}

fn summary(reactions: &ReactionList) -> ReactionResponse {
    ReactionResponse::new(reactions.counts(), reactions.total())
}
