//! PostgreSQL implementations of CoursRepository and QuizRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use campus_core::entities::{Cours, NewCours, NewQuiz, Quiz, TypeContenu};
use campus_core::traits::{CoursRepository, QuizRepository, RepoResult};

use crate::models::{CoursModel, QuizModel};

use super::error::{cours_not_found, map_db_error, map_foreign_key_violation, quiz_not_found};

const COURS_COLUMNS: &str = "id, titre, description, date_publication, date_creation, visibilite, \
                             contenu, type_contenu, url_contenu";

const QUIZ_COLUMNS: &str = "id, cours_id, titre, description, questions, date_creation, \
                            date_echeance, duree, score_max, tentatives";

/// PostgreSQL implementation of CoursRepository
#[derive(Clone)]
pub struct PgCoursRepository {
    pool: PgPool,
}

impl PgCoursRepository {
    /// Create a new PgCoursRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CoursRepository for PgCoursRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Cours>> {
        let result = sqlx::query_as::<_, CoursModel>(&format!(
            "SELECT {COURS_COLUMNS} FROM cours WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Cours::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Cours>> {
        let results = sqlx::query_as::<_, CoursModel>(&format!(
            "SELECT {COURS_COLUMNS} FROM cours ORDER BY date_publication DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Cours::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, cours: &NewCours) -> RepoResult<Cours> {
        let model = sqlx::query_as::<_, CoursModel>(&format!(
            "INSERT INTO cours (titre, description, date_publication, visibilite, contenu, \
             type_contenu, url_contenu) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COURS_COLUMNS}"
        ))
        .bind(&cours.titre)
        .bind(&cours.description)
        .bind(cours.date_publication)
        .bind(cours.visibilite)
        .bind(&cours.contenu)
        .bind(cours.type_contenu.map(TypeContenu::as_str))
        .bind(&cours.url_contenu)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Cours::from(model))
    }

    #[instrument(skip(self))]
    async fn update(&self, cours: &Cours) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE cours
            SET titre = $2, description = $3, date_publication = $4, visibilite = $5,
                contenu = $6, type_contenu = $7, url_contenu = $8
            WHERE id = $1
            ",
        )
        .bind(cours.id)
        .bind(&cours.titre)
        .bind(&cours.description)
        .bind(cours.date_publication)
        .bind(cours.visibilite)
        .bind(&cours.contenu)
        .bind(cours.type_contenu.map(TypeContenu::as_str))
        .bind(&cours.url_contenu)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(cours_not_found(cours.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        // Quizzes go with it through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM cours WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(cours_not_found(id));
        }

        Ok(())
    }
}

/// PostgreSQL implementation of QuizRepository
#[derive(Clone)]
pub struct PgQuizRepository {
    pool: PgPool,
}

impl PgQuizRepository {
    /// Create a new PgQuizRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuizRepository for PgQuizRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Quiz>> {
        let result = sqlx::query_as::<_, QuizModel>(&format!(
            "SELECT {QUIZ_COLUMNS} FROM quiz WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Quiz::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Quiz>> {
        let results = sqlx::query_as::<_, QuizModel>(&format!(
            "SELECT {QUIZ_COLUMNS} FROM quiz ORDER BY date_echeance ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Quiz::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_cours(&self, cours_id: i64) -> RepoResult<Vec<Quiz>> {
        let results = sqlx::query_as::<_, QuizModel>(&format!(
            "SELECT {QUIZ_COLUMNS} FROM quiz WHERE cours_id = $1 ORDER BY date_echeance ASC, id ASC"
        ))
        .bind(cours_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Quiz::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, quiz: &NewQuiz) -> RepoResult<Quiz> {
        let model = sqlx::query_as::<_, QuizModel>(&format!(
            "INSERT INTO quiz (cours_id, titre, description, questions, date_echeance, duree, \
             score_max, tentatives) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {QUIZ_COLUMNS}"
        ))
        .bind(quiz.cours_id)
        .bind(&quiz.titre)
        .bind(&quiz.description)
        .bind(Json(&quiz.questions))
        .bind(quiz.date_echeance)
        .bind(quiz.duree)
        .bind(quiz.score_max)
        .bind(quiz.tentatives)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || cours_not_found(quiz.cours_id)))?;

        Ok(Quiz::from(model))
    }

    #[instrument(skip(self))]
    async fn update(&self, quiz: &Quiz) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE quiz
            SET cours_id = $2, titre = $3, description = $4, questions = $5,
                date_echeance = $6, duree = $7, score_max = $8, tentatives = $9
            WHERE id = $1
            ",
        )
        .bind(quiz.id)
        .bind(quiz.cours_id)
        .bind(&quiz.titre)
        .bind(&quiz.description)
        .bind(Json(&quiz.questions))
        .bind(quiz.date_echeance)
        .bind(quiz.duree)
        .bind(quiz.score_max)
        .bind(quiz.tentatives)
        .execute(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || cours_not_found(quiz.cours_id)))?;

        if result.rows_affected() == 0 {
            return Err(quiz_not_found(quiz.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM quiz WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(quiz_not_found(id));
        }

        Ok(())
    }
}
