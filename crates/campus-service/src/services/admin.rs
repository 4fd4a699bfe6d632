//! Forum admin service
//!
//! Dashboard figures, admin-authored posts and moderation of any post or
//! comment.

use std::collections::HashSet;

use campus_core::entities::{Commentaire, Post};
use campus_core::value_objects::{
    non_empty, CommentaireFilter, PageRequest, PostFilter, MAX_PAGE_LIMIT,
};
use campus_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{
    AdminForumParams, CommentEnvelope, CommentResponse, EditCommentRequest,
    ForumDashboardResponse, PostRequest, PostResponse,
};

use super::commentaire::CommentaireService;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::forum::{apply_post_request, new_post, ForumService};

/// Average comments per post, rounded to two decimals
fn average_comments(total_commentaires: i64, total_posts: i64) -> f64 {
    if total_posts == 0 {
        return 0.0;
    }
    let avg = total_commentaires as f64 / total_posts as f64;
    (avg * 100.0).round() / 100.0
}

/// Forum admin service
pub struct AdminForumService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminForumService<'a> {
    /// Create a new AdminForumService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Forum totals with filtered post and comment lists
    ///
    /// `q` matches post titles, contents and authors, and comment contents.
    /// `author` narrows posts by partial author and comments by exact author.
    /// Post totals are global; the comment total follows the filters.
    #[instrument(skip(self))]
    pub async fn dashboard(&self, params: AdminForumParams) -> ServiceResult<ForumDashboardResponse> {
        let q = non_empty(params.q.as_deref());
        let author = non_empty(params.author.as_deref());
        let page = PageRequest::first(MAX_PAGE_LIMIT);

        let stats = self.ctx.post_repo().stats().await?;

        let posts = self.filtered_posts(q.as_deref(), author.as_deref(), page).await?;

        let comment_filter = CommentaireFilter {
            author,
            q,
            page,
            ..CommentaireFilter::default()
        };
        let commentaires = self.ctx.commentaire_repo().search(&comment_filter).await?;
        let total_commentaires = self.ctx.commentaire_repo().count_search(&comment_filter).await?;

        Ok(ForumDashboardResponse {
            total_posts: stats.total_posts,
            total_commentaires,
            total_views: stats.total_views,
            avg_comments: average_comments(total_commentaires, stats.total_posts),
            posts: posts.iter().map(PostResponse::from).collect(),
            commentaires: commentaires.iter().map(CommentResponse::from).collect(),
        })
    }

    /// Posts created through the admin area, newest first
    #[instrument(skip(self))]
    pub async fn list_posts(&self) -> ServiceResult<Vec<PostResponse>> {
        let posts = self.ctx.post_repo().list_admin_posts().await?;
        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    #[instrument(skip(self, request))]
    pub async fn create_post(&self, request: PostRequest) -> ServiceResult<PostResponse> {
        let post = self.ctx.post_repo().create(&new_post(request).by_admin()).await?;
        info!(post_id = post.id, "Admin post created");
        Ok(PostResponse::from(post))
    }

    /// Edit a post created by an admin
    #[instrument(skip(self, request))]
    pub async fn update_post(&self, id: i64, request: PostRequest) -> ServiceResult<PostResponse> {
        let mut post = self.find_admin_post(id).await?;
        apply_post_request(&mut post, request);
        self.ctx.post_repo().update(&post).await?;
        info!(post_id = id, "Admin post updated");
        Ok(PostResponse::from(post))
    }

    /// Delete a post created by an admin
    #[instrument(skip(self))]
    pub async fn delete_post(&self, id: i64) -> ServiceResult<()> {
        self.find_admin_post(id).await?;
        self.ctx.post_repo().delete(id).await?;
        info!(post_id = id, "Admin post deleted");
        Ok(())
    }

    /// Edit any post, whoever wrote it
    #[instrument(skip(self, request))]
    pub async fn update_any_post(&self, id: i64, request: PostRequest) -> ServiceResult<PostResponse> {
        ForumService::new(self.ctx).update(id, request).await
    }

    /// Delete any post, whoever wrote it
    #[instrument(skip(self))]
    pub async fn delete_any_post(&self, id: i64) -> ServiceResult<()> {
        ForumService::new(self.ctx).delete(id).await
    }

    /// Edit a comment of an admin post
    #[instrument(skip(self, request))]
    pub async fn update_post_comment(
        &self,
        post_id: i64,
        comment_id: i64,
        request: EditCommentRequest,
    ) -> ServiceResult<CommentEnvelope> {
        let content = non_empty(request.content.as_deref()).ok_or(DomainError::ContentRequired)?;
        self.find_admin_post(post_id).await?;

        let comment = self.find_comment_in_post(post_id, comment_id).await?;
        CommentaireService::new(self.ctx).apply_edit(comment, content).await
    }

    /// Delete a comment of an admin post
    #[instrument(skip(self))]
    pub async fn delete_post_comment(&self, post_id: i64, comment_id: i64) -> ServiceResult<()> {
        self.find_admin_post(post_id).await?;
        self.find_comment_in_post(post_id, comment_id).await?;
        CommentaireService::new(self.ctx).delete(comment_id).await
    }

    /// Edit any comment
    #[instrument(skip(self, request))]
    pub async fn update_comment(
        &self,
        id: i64,
        request: EditCommentRequest,
    ) -> ServiceResult<CommentEnvelope> {
        CommentaireService::new(self.ctx).edit(id, request).await
    }

    /// Delete any comment
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, id: i64) -> ServiceResult<()> {
        CommentaireService::new(self.ctx).delete(id).await
    }

    async fn find_admin_post(&self, id: i64) -> ServiceResult<Post> {
        let post = ForumService::new(self.ctx).find_post(id).await?;
        if !post.is_admin_post() {
            return Err(DomainError::NotAdminPost(id).into());
        }
        Ok(post)
    }

    async fn find_comment_in_post(
        &self,
        post_id: i64,
        comment_id: i64,
    ) -> ServiceResult<Commentaire> {
        let not_in_post = DomainError::CommentaireNotInPost {
            comment_id,
            post_id,
        };
        match self.ctx.commentaire_repo().find_by_id(comment_id).await? {
            Some(comment) if comment.belongs_to(post_id) => Ok(comment),
            _ => Err(not_in_post.into()),
        }
    }

    /// Posts matching `q` on title or content, merged with posts whose
    /// author matches `q`; both narrowed by `author`, newest first
    async fn filtered_posts(
        &self,
        q: Option<&str>,
        author: Option<&str>,
        page: PageRequest,
    ) -> ServiceResult<Vec<Post>> {
        let filter = PostFilter {
            q: q.map(str::to_string),
            author: author.map(str::to_string),
            page,
            ..PostFilter::default()
        };
        let mut posts = self.ctx.post_repo().search(&filter).await?;

        if let Some(q) = q {
            let by_author = PostFilter {
                page,
                ..PostFilter::by_author(q)
            };
            let seen: HashSet<i64> = posts.iter().map(|p| p.id).collect();
            let author_lower = author.map(str::to_lowercase);
            let extra = self
                .ctx
                .post_repo()
                .search(&by_author)
                .await?
                .into_iter()
                .filter(|p| !seen.contains(&p.id))
                .filter(|p| {
                    author_lower
                        .as_deref()
                        .is_none_or(|a| p.author.to_lowercase().contains(a))
                });
            posts.extend(extra);
            posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        }

        Ok(posts)
    }
}
