//! PostgreSQL implementation of CommentaireRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use campus_core::entities::{Commentaire, NewCommentaire};
use campus_core::traits::{CommentaireRepository, RepoResult};
use campus_core::value_objects::{CommentaireFilter, ReactionList};

use crate::models::CommentaireModel;

use super::error::{commentaire_not_found, map_db_error, map_foreign_key_violation, post_not_found};

const COMMENTAIRE_COLUMNS: &str = "id, post_id, content, author, created_at, updated_at, reactions";

/// PostgreSQL implementation of CommentaireRepository
#[derive(Clone)]
pub struct PgCommentaireRepository {
    pool: PgPool,
}

impl PgCommentaireRepository {
    /// Create a new PgCommentaireRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filter: &CommentaireFilter) {
    builder.push(" WHERE 1 = 1");

    if let Some(post_id) = filter.post_id {
        builder.push(" AND post_id = ").push_bind(post_id);
    }

    if let Some(author) = &filter.author {
        builder.push(" AND author = ").push_bind(author.clone());
    }

    if let Some(q) = &filter.q {
        builder.push(" AND content ILIKE ").push_bind(format!("%{q}%"));
    }

    if let Some(from) = filter.dates.from {
        builder.push(" AND created_at >= ").push_bind(from);
    }

    if let Some(to) = filter.dates.to {
        builder.push(" AND created_at <= ").push_bind(to);
    }
}

#[async_trait]
impl CommentaireRepository for PgCommentaireRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Commentaire>> {
        let result = sqlx::query_as::<_, CommentaireModel>(&format!(
            "SELECT {COMMENTAIRE_COLUMNS} FROM commentaire WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Commentaire::from))
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: i64) -> RepoResult<Vec<Commentaire>> {
        let results = sqlx::query_as::<_, CommentaireModel>(&format!(
            "SELECT {COMMENTAIRE_COLUMNS} FROM commentaire WHERE post_id = $1 \
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Commentaire::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_posts(&self, post_ids: &[i64]) -> RepoResult<Vec<Commentaire>> {
        if post_ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, CommentaireModel>(&format!(
            "SELECT {COMMENTAIRE_COLUMNS} FROM commentaire WHERE post_id = ANY($1) \
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(post_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Commentaire::from).collect())
    }

    #[instrument(skip(self))]
    async fn search(&self, filter: &CommentaireFilter) -> RepoResult<Vec<Commentaire>> {
        let mut builder =
            QueryBuilder::<Postgres>::new(format!("SELECT {COMMENTAIRE_COLUMNS} FROM commentaire"));
        push_filters(&mut builder, filter);

        let direction = filter.direction.as_sql();
        builder
            .push(format!(
                " ORDER BY {} {direction}, id {direction}",
                filter.sort.column()
            ))
            .push(" LIMIT ")
            .push_bind(filter.page.limit())
            .push(" OFFSET ")
            .push_bind(filter.page.offset());

        let results = builder
            .build_query_as::<CommentaireModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Commentaire::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_search(&self, filter: &CommentaireFilter) -> RepoResult<i64> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM commentaire");
        push_filters(&mut builder, filter);

        let count = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn find_post_ids_by_author(&self, author: &str) -> RepoResult<Vec<i64>> {
        let ids = sqlx::query_scalar::<_, i64>(
            r"
            SELECT DISTINCT post_id
            FROM commentaire
            WHERE author ILIKE $1
            ORDER BY post_id
            ",
        )
        .bind(format!("%{author}%"))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ids)
    }

    #[instrument(skip(self))]
    async fn create(&self, commentaire: &NewCommentaire) -> RepoResult<Commentaire> {
        let model = sqlx::query_as::<_, CommentaireModel>(&format!(
            "INSERT INTO commentaire (post_id, content, author) VALUES ($1, $2, $3) \
             RETURNING {COMMENTAIRE_COLUMNS}"
        ))
        .bind(commentaire.post_id)
        .bind(&commentaire.content)
        .bind(&commentaire.author)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || post_not_found(commentaire.post_id)))?;

        Ok(Commentaire::from(model))
    }

    #[instrument(skip(self))]
    async fn update(&self, commentaire: &Commentaire) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE commentaire
            SET content = $2, updated_at = $3
            WHERE id = $1
            ",
        )
        .bind(commentaire.id)
        .bind(&commentaire.content)
        .bind(commentaire.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(commentaire_not_found(commentaire.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM commentaire WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(commentaire_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self, reactions))]
    async fn update_reactions(&self, id: i64, reactions: &ReactionList) -> RepoResult<()> {
        let result = sqlx::query("UPDATE commentaire SET reactions = $2 WHERE id = $1")
            .bind(id)
            .bind(Json(reactions))
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(commentaire_not_found(id));
        }

        Ok(())
    }
}
