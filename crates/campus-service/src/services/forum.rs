//! Forum service
//!
//! Handles post listing, display, editing and the forum search endpoints.

use std::collections::{HashMap, HashSet};

use campus_core::entities::{Commentaire, NewPost, Post};
use campus_core::value_objects::non_empty;
use campus_core::DomainError;
use tracing::{debug, info, instrument};

use crate::dto::{
    CommentResponse, CommentSearchParams, ForumSearchItem, LikeResponse, PostDetailResponse,
    PostRequest, PostResponse, PostSearchParams, PostWithComments, SearchResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Copy the editable fields of a post form onto `post`
///
/// A blank author keeps the current one.
pub(crate) fn apply_post_request(post: &mut Post, request: PostRequest) {
    post.title = request.title;
    post.content = request.content;
    if let Some(author) = non_empty(request.author.as_deref()) {
        post.author = author;
    }
    post.image = non_empty(request.image.as_deref());
    post.link = non_empty(request.link.as_deref());
    post.tags = non_empty(request.tags.as_deref());
    post.touch();
}

/// Build the insert values of a post form
pub(crate) fn new_post(request: PostRequest) -> NewPost {
    let mut post = NewPost::new(request.title, request.content, request.author);
    post.image = non_empty(request.image.as_deref());
    post.link = non_empty(request.link.as_deref());
    post.tags = non_empty(request.tags.as_deref());
    post
}

/// Forum service
pub struct ForumService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ForumService<'a> {
    /// Create a new ForumService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Every post, newest first
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<PostResponse>> {
        let posts = self.ctx.post_repo().list_recent().await?;
        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    /// Display a post with its comments; counts one view
    #[instrument(skip(self))]
    pub async fn show(&self, id: i64) -> ServiceResult<PostDetailResponse> {
        let mut post = self.find_post(id).await?;
        self.ctx.post_repo().increment_views(id).await?;
        post.views += 1;

        let comments = self.ctx.commentaire_repo().find_by_post(id).await?;
        Ok(PostDetailResponse::from(PostWithComments { post, comments }))
    }

    #[instrument(skip(self, request))]
    pub async fn create(&self, request: PostRequest) -> ServiceResult<PostResponse> {
        let post = self.ctx.post_repo().create(&new_post(request)).await?;
        info!(post_id = post.id, author = %post.author, "Post created");
        Ok(PostResponse::from(post))
    }

    #[instrument(skip(self, request))]
    pub async fn update(&self, id: i64, request: PostRequest) -> ServiceResult<PostResponse> {
        let mut post = self.find_post(id).await?;
        apply_post_request(&mut post, request);
        self.ctx.post_repo().update(&post).await?;
        info!(post_id = id, "Post updated");
        Ok(PostResponse::from(post))
    }

    /// Delete a post and its comments
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.post_repo().delete(id).await?;
        info!(post_id = id, "Post deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn like(&self, id: i64) -> ServiceResult<LikeResponse> {
        let likes = self.ctx.post_repo().increment_likes(id).await?;
        Ok(LikeResponse {
            success: true,
            likes,
        })
    }

    /// Filtered, sorted and paged post search
    ///
    /// With an `author` criterion, posts that have a comment by a matching
    /// author are appended after the page, fetched with the same sort.
    /// `total` counts the primary matches only.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        params: PostSearchParams,
    ) -> ServiceResult<SearchResponse<ForumSearchItem>> {
        let filter = params.into_filter();

        let mut posts = self.ctx.post_repo().search(&filter).await?;
        let total = self.ctx.post_repo().count_search(&filter).await?;

        if let Some(author) = filter.author.as_deref() {
            let seen: HashSet<i64> = posts.iter().map(|p| p.id).collect();
            let extra: Vec<i64> = self
                .ctx
                .commentaire_repo()
                .find_post_ids_by_author(author)
                .await?
                .into_iter()
                .filter(|id| !seen.contains(id))
                .collect();

            if !extra.is_empty() {
                debug!(count = extra.len(), "Merging posts commented by author");
                let merged = self
                    .ctx
                    .post_repo()
                    .find_by_ids(&extra, filter.sort, filter.direction)
                    .await?;
                posts.extend(merged);
            }
        }

        let items = self.with_comments(posts).await?;
        Ok(SearchResponse::new(
            items.into_iter().map(ForumSearchItem::from).collect(),
            total,
        ))
    }

    /// Filtered comment search within one post
    #[instrument(skip(self))]
    pub async fn search_comments(
        &self,
        post_id: i64,
        params: CommentSearchParams,
    ) -> ServiceResult<SearchResponse<CommentResponse>> {
        self.find_post(post_id).await?;

        let filter = params.into_filter(post_id);
        let comments = self.ctx.commentaire_repo().search(&filter).await?;
        let total = self.ctx.commentaire_repo().count_search(&filter).await?;

        Ok(SearchResponse::new(
            comments.iter().map(CommentResponse::from).collect(),
            total,
        ))
    }

    pub(crate) async fn find_post(&self, id: i64) -> ServiceResult<Post> {
        Ok(self
            .ctx
            .post_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PostNotFound(id))?)
    }

    /// Attach each post's comments, loaded in one query
    async fn with_comments(&self, posts: Vec<Post>) -> ServiceResult<Vec<PostWithComments>> {
        let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
        let mut by_post: HashMap<i64, Vec<Commentaire>> = HashMap::new();
        if !ids.is_empty() {
            for comment in self.ctx.commentaire_repo().find_by_posts(&ids).await? {
                by_post.entry(comment.post_id).or_default().push(comment);
            }
        }

        Ok(posts
            .into_iter()
            .map(|post| {
                let comments = by_post.remove(&post.id).unwrap_or_default();
                PostWithComments { post, comments }
            })
            .collect())
    }
}
