//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use campus_core::entities::{NewPost, Post, PostStats};
use campus_core::traits::{PostRepository, RepoResult};
use campus_core::value_objects::{
    sort_by_comment_count, PostFilter, PostSortField, ReactionList, SortDirection,
};

use crate::models::{PostModel, PostStatsModel, PostWithCountModel};

use super::error::{map_db_error, post_not_found};

const POST_COLUMNS: &str = "id, title, content, author, created_at, updated_at, views, likes, \
                            image, link, tags, reactions, created_by_admin";

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Filtered posts in id order with their comment counts, unpaginated
    async fn search_with_counts(&self, filter: &PostFilter) -> RepoResult<Vec<(Post, i64)>> {
        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {POST_COLUMNS}, \
             (SELECT COUNT(*) FROM commentaire c WHERE c.post_id = post.id) AS comments_count \
             FROM post"
        ));
        push_filters(&mut builder, filter);
        builder.push(" ORDER BY id ASC");

        let results = builder
            .build_query_as::<PostWithCountModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .map(|row| (Post::from(row.post), row.comments_count))
            .collect())
    }
}

/// Column used for ordering; the comment count has no column and falls back to the date
fn order_column(sort: PostSortField) -> &'static str {
    sort.column().unwrap_or("created_at")
}

fn push_order(builder: &mut QueryBuilder<'_, Postgres>, sort: PostSortField, direction: SortDirection) {
    let direction = direction.as_sql();
    builder.push(format!(
        " ORDER BY {} {direction}, id {direction}",
        order_column(sort)
    ));
}

/// Append the WHERE clause shared by the page and the count query
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filter: &PostFilter) {
    builder.push(" WHERE 1 = 1");

    if let Some(q) = &filter.q {
        let pattern = format!("%{q}%");
        builder
            .push(" AND (title ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR content ILIKE ")
            .push_bind(pattern)
            .push(")");
    }

    if !filter.tags.is_empty() {
        builder.push(" AND (");
        {
            let mut separated = builder.separated(" OR ");
            for tag in &filter.tags {
                separated.push("tags ILIKE ");
                separated.push_bind_unseparated(format!("%{tag}%"));
            }
        }
        builder.push(")");
    }

    if let Some(author) = &filter.author {
        builder.push(" AND author ILIKE ").push_bind(format!("%{author}%"));
    }

    if let Some(from) = filter.dates.from {
        builder.push(" AND created_at >= ").push_bind(from);
    }

    if let Some(to) = filter.dates.to {
        builder.push(" AND created_at <= ").push_bind(to);
    }

    if let Some(admin) = filter.created_by_admin {
        builder.push(" AND created_by_admin = ").push_bind(admin);
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(&format!(
            "SELECT {POST_COLUMNS} FROM post WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn list_recent(&self) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(&format!(
            "SELECT {POST_COLUMNS} FROM post ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_admin_posts(&self) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(&format!(
            "SELECT {POST_COLUMNS} FROM post WHERE created_by_admin = TRUE \
             ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn search(&self, filter: &PostFilter) -> RepoResult<Vec<Post>> {
        if filter.sort == PostSortField::CommentsCount {
            let rows = self.search_with_counts(filter).await?;
            let sorted = sort_by_comment_count(rows, filter.direction);
            return Ok(filter.page.slice(sorted));
        }

        let mut builder = QueryBuilder::<Postgres>::new(format!("SELECT {POST_COLUMNS} FROM post"));
        push_filters(&mut builder, filter);
        push_order(&mut builder, filter.sort, filter.direction);
        builder
            .push(" LIMIT ")
            .push_bind(filter.page.limit())
            .push(" OFFSET ")
            .push_bind(filter.page.offset());

        let results = builder
            .build_query_as::<PostModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_search(&self, filter: &PostFilter) -> RepoResult<i64> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM post");
        push_filters(&mut builder, filter);

        let count = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn find_by_ids(
        &self,
        ids: &[i64],
        sort: PostSortField,
        direction: SortDirection,
    ) -> RepoResult<Vec<Post>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {POST_COLUMNS} FROM post WHERE id = ANY("
        ));
        builder.push_bind(ids.to_vec()).push(")");
        push_order(&mut builder, sort, direction);

        let results = builder
            .build_query_as::<PostModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, post: &NewPost) -> RepoResult<Post> {
        let model = sqlx::query_as::<_, PostModel>(&format!(
            "INSERT INTO post (title, content, author, image, link, tags, created_by_admin) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {POST_COLUMNS}"
        ))
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.author)
        .bind(&post.image)
        .bind(&post.link)
        .bind(&post.tags)
        .bind(post.created_by_admin)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Post::from(model))
    }

    #[instrument(skip(self))]
    async fn update(&self, post: &Post) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE post
            SET title = $2, content = $3, author = $4, image = $5, link = $6, tags = $7,
                updated_at = $8
            WHERE id = $1
            ",
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.author)
        .bind(&post.image)
        .bind(&post.link)
        .bind(&post.tags)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(post.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        // Comments go with it through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM post WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn increment_views(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("UPDATE post SET views = views + 1 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn increment_likes(&self, id: i64) -> RepoResult<i32> {
        let likes = sqlx::query_scalar::<_, i32>(
            "UPDATE post SET likes = likes + 1 WHERE id = $1 RETURNING likes",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        likes.ok_or_else(|| post_not_found(id))
    }

    #[instrument(skip(self, reactions))]
    async fn update_reactions(&self, id: i64, reactions: &ReactionList) -> RepoResult<()> {
        let result = sqlx::query("UPDATE post SET reactions = $2 WHERE id = $1")
            .bind(id)
            .bind(Json(reactions))
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn stats(&self) -> RepoResult<PostStats> {
        let model = sqlx::query_as::<_, PostStatsModel>(
            r"
            SELECT COUNT(*) AS total_posts, COALESCE(SUM(views), 0)::BIGINT AS total_views
            FROM post
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(PostStats::from(model))
    }
}
