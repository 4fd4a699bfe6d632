//! PostgreSQL implementation of TacheRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use campus_core::entities::{NewTache, Tache, TacheWithProjet};
use campus_core::traits::{RepoResult, TacheRepository};
use campus_core::value_objects::TacheSearch;

use crate::mappers::TacheValues;
use crate::models::{TacheModel, TacheWithProjetModel};

use super::error::{map_db_error, map_foreign_key_violation, projet_not_found, tache_not_found};

/// PostgreSQL implementation of TacheRepository
#[derive(Clone)]
pub struct PgTacheRepository {
    pool: PgPool,
}

impl PgTacheRepository {
    /// Create a new PgTacheRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn push_search_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &TacheSearch) {
    builder.push(" WHERE 1 = 1");

    if query.enabled_only {
        builder.push(" AND t.enabled = TRUE");
    }

    if let Some(term) = &query.search {
        let pattern = format!("%{term}%");
        builder
            .push(" AND (t.titre ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR t.description ILIKE ")
            .push_bind(pattern)
            .push(")");
    }

    if let Some(projet_id) = query.projet_id {
        builder.push(" AND t.projet_id = ").push_bind(projet_id);
    }

    if let Some(statut) = query.statut {
        builder.push(" AND t.statut = ").push_bind(statut.as_str());
    }

    if let Some(priorite) = query.priorite {
        builder.push(" AND t.priorite = ").push_bind(priorite.value());
    }
}

#[async_trait]
impl TacheRepository for PgTacheRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Tache>> {
        let result = sqlx::query_as::<_, TacheModel>(
            r"
            SELECT id, projet_id, titre, description, statut, priorite, date_creation, enabled
            FROM tache
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Tache::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Tache>> {
        let results = sqlx::query_as::<_, TacheModel>(
            r"
            SELECT id, projet_id, titre, description, statut, priorite, date_creation, enabled
            FROM tache
            ORDER BY date_creation DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Tache::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_projet(&self, projet_id: i64) -> RepoResult<Vec<Tache>> {
        let results = sqlx::query_as::<_, TacheModel>(
            r"
            SELECT id, projet_id, titre, description, statut, priorite, date_creation, enabled
            FROM tache
            WHERE projet_id = $1
            ORDER BY date_creation DESC, id DESC
            ",
        )
        .bind(projet_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Tache::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_projets(&self, projet_ids: &[i64]) -> RepoResult<Vec<Tache>> {
        if projet_ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, TacheModel>(
            r"
            SELECT id, projet_id, titre, description, statut, priorite, date_creation, enabled
            FROM tache
            WHERE projet_id = ANY($1)
            ORDER BY projet_id, id
            ",
        )
        .bind(projet_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Tache::from).collect())
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &TacheSearch) -> RepoResult<Vec<TacheWithProjet>> {
        let mut builder = QueryBuilder::<Postgres>::new(
            r"
            SELECT t.id, t.projet_id, t.titre, t.description, t.statut, t.priorite,
                   t.date_creation, t.enabled, p.nom AS projet_nom
            FROM tache t
            JOIN projet p ON p.id = t.projet_id
            ",
        );
        push_search_filters(&mut builder, query);

        let direction = query.direction.as_sql();
        builder
            .push(format!(
                " ORDER BY t.{} {direction}, t.id {direction}",
                query.sort.column()
            ))
            .push(" LIMIT ")
            .push_bind(query.page.limit())
            .push(" OFFSET ")
            .push_bind(query.page.offset());

        let results = builder
            .build_query_as::<TacheWithProjetModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(TacheWithProjet::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_search(&self, query: &TacheSearch) -> RepoResult<i64> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM tache t");
        push_search_filters(&mut builder, query);

        let count = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn count(&self, enabled_only: bool) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM tache
            WHERE enabled = TRUE OR NOT $1
            ",
        )
        .bind(enabled_only)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn create(&self, tache: &NewTache) -> RepoResult<Tache> {
        let values = TacheValues::from_new(tache);
        let model = sqlx::query_as::<_, TacheModel>(
            r"
            INSERT INTO tache (projet_id, titre, description, statut, priorite, enabled)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, projet_id, titre, description, statut, priorite, date_creation, enabled
            ",
        )
        .bind(values.projet_id)
        .bind(values.titre)
        .bind(values.description)
        .bind(values.statut)
        .bind(values.priorite)
        .bind(values.enabled)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || projet_not_found(tache.projet_id)))?;

        Ok(Tache::from(model))
    }

    #[instrument(skip(self))]
    async fn update(&self, tache: &Tache) -> RepoResult<()> {
        let values = TacheValues::from_entity(tache);
        let result = sqlx::query(
            r"
            UPDATE tache
            SET projet_id = $2, titre = $3, description = $4, statut = $5, priorite = $6, enabled = $7
            WHERE id = $1
            ",
        )
        .bind(tache.id)
        .bind(values.projet_id)
        .bind(values.titre)
        .bind(values.description)
        .bind(values.statut)
        .bind(values.priorite)
        .bind(values.enabled)
        .execute(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || projet_not_found(tache.projet_id)))?;

        if result.rows_affected() == 0 {
            return Err(tache_not_found(tache.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM tache WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(tache_not_found(id));
        }

        Ok(())
    }
}
