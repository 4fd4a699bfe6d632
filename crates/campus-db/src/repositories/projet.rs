//! PostgreSQL implementation of ProjetRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use campus_core::entities::{NewProjet, Projet};
use campus_core::traits::{ProjetRepository, RepoResult};
use campus_core::value_objects::ProjetSearch;

use crate::models::ProjetModel;

use super::error::{map_db_error, projet_not_found};

const PROJET_COLUMNS: &str = "id, nom, description, date_creation, enabled";

/// PostgreSQL implementation of ProjetRepository
#[derive(Clone)]
pub struct PgProjetRepository {
    pool: PgPool,
}

impl PgProjetRepository {
    /// Create a new PgProjetRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Append the WHERE clause shared by the page and the count query
fn push_search_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &ProjetSearch) {
    builder.push(" WHERE 1 = 1");

    if query.enabled_only {
        builder.push(" AND enabled = TRUE");
    }

    if let Some(term) = &query.search {
        let pattern = format!("%{term}%");
        builder
            .push(" AND (nom ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR description ILIKE ")
            .push_bind(pattern)
            .push(")");
    }

    if let Some(from) = query.dates.from {
        builder.push(" AND date_creation >= ").push_bind(from);
    }

    if let Some(to) = query.dates.to {
        builder.push(" AND date_creation <= ").push_bind(to);
    }
}

#[async_trait]
impl ProjetRepository for PgProjetRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Projet>> {
        let result = sqlx::query_as::<_, ProjetModel>(
            r"
            SELECT id, nom, description, date_creation, enabled
            FROM projet
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Projet::from))
    }

    #[instrument(skip(self))]
    async fn list_enabled(&self) -> RepoResult<Vec<Projet>> {
        let results = sqlx::query_as::<_, ProjetModel>(
            r"
            SELECT id, nom, description, date_creation, enabled
            FROM projet
            WHERE enabled = TRUE
            ORDER BY date_creation DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Projet::from).collect())
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &ProjetSearch) -> RepoResult<Vec<Projet>> {
        let mut builder = QueryBuilder::<Postgres>::new(format!("SELECT {PROJET_COLUMNS} FROM projet"));
        push_search_filters(&mut builder, query);

        let direction = query.direction.as_sql();
        builder
            .push(format!(
                " ORDER BY {} {direction}, id {direction}",
                query.sort.column()
            ))
            .push(" LIMIT ")
            .push_bind(query.page.limit())
            .push(" OFFSET ")
            .push_bind(query.page.offset());

        let results = builder
            .build_query_as::<ProjetModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Projet::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_search(&self, query: &ProjetSearch) -> RepoResult<i64> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM projet");
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
            FROM projet
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
    async fn create(&self, projet: &NewProjet) -> RepoResult<Projet> {
        let model = sqlx::query_as::<_, ProjetModel>(
            r"
            INSERT INTO projet (nom, description, enabled)
            VALUES ($1, $2, $3)
            RETURNING id, nom, description, date_creation, enabled
            ",
        )
        .bind(&projet.nom)
        .bind(&projet.description)
        .bind(projet.enabled)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Projet::from(model))
    }

    #[instrument(skip(self))]
    async fn update(&self, projet: &Projet) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE projet
            SET nom = $2, description = $3, enabled = $4
            WHERE id = $1
            ",
        )
        .bind(projet.id)
        .bind(&projet.nom)
        .bind(&projet.description)
        .bind(projet.enabled)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(projet_not_found(projet.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        // Taches go with it through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM projet WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(projet_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::value_objects::{DateRange, PageRequest, ProjetSortField, SortDirection};

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgProjetRepository>();
    }

    #[test]
    fn test_search_sql() {
        let query = ProjetSearch {
            search: Some("web".into()),
            dates: DateRange::parse_dates(Some("2024-01-01"), Some("2024-01-31")),
            sort: ProjetSortField::Nom,
            direction: SortDirection::Asc,
            page: PageRequest::new(2, 50),
            enabled_only: true,
        };
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM projet");
        push_search_filters(&mut builder, &query);
        let sql = builder.sql();

        assert!(sql.contains("enabled = TRUE"));
        assert!(sql.contains("(nom ILIKE $1 OR description ILIKE $2)"));
        assert!(sql.contains("date_creation >= $3"));
        assert!(sql.contains("date_creation <= $4"));
        assert!(!sql.contains("ORDER BY"));
    }
}
