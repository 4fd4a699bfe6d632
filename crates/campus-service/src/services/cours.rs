//! Cours service
//!
//! Handles cours CRUD and listing the quizzes of a cours.

use campus_core::entities::{Cours, NewCours};
use campus_core::value_objects::non_empty;
use campus_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{CoursDetailResponse, CoursRequest, CoursResponse, CoursWithQuizzes, QuizResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Cours service
pub struct CoursService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CoursService<'a> {
    /// Create a new CoursService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<CoursResponse>> {
        let cours = self.ctx.cours_repo().list().await?;
        Ok(cours.into_iter().map(CoursResponse::from).collect())
    }

    /// One cours with its quizzes
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<CoursDetailResponse> {
        let cours = self.find(id).await?;
        let quizzes = self.ctx.quiz_repo().find_by_cours(id).await?;
        Ok(CoursDetailResponse::from(CoursWithQuizzes { cours, quizzes }))
    }

    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CoursRequest) -> ServiceResult<CoursResponse> {
        let cours = NewCours {
            type_contenu: request.type_contenu(),
            titre: request.titre.trim().to_string(),
            description: request.description,
            date_publication: request.date_publication,
            visibilite: request.visibilite,
            contenu: non_empty(request.contenu.as_deref()),
            url_contenu: non_empty(request.url_contenu.as_deref()),
        };
        let cours = self.ctx.cours_repo().create(&cours).await?;
        info!(cours_id = cours.id, "Cours created");
        Ok(CoursResponse::from(cours))
    }

    #[instrument(skip(self, request))]
    pub async fn update(&self, id: i64, request: CoursRequest) -> ServiceResult<CoursResponse> {
        let mut cours = self.find(id).await?;

        cours.type_contenu = request.type_contenu();
        cours.titre = request.titre.trim().to_string();
        cours.description = request.description;
        cours.date_publication = request.date_publication;
        cours.visibilite = request.visibilite;
        cours.contenu = non_empty(request.contenu.as_deref());
        cours.url_contenu = non_empty(request.url_contenu.as_deref());

        self.ctx.cours_repo().update(&cours).await?;
        info!(cours_id = id, "Cours updated");
        Ok(CoursResponse::from(cours))
    }

    /// Delete a cours and its quizzes
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.cours_repo().delete(id).await?;
        info!(cours_id = id, "Cours deleted");
        Ok(())
    }

    /// Quizzes of a cours, by due date
    #[instrument(skip(self))]
    pub async fn quizzes(&self, id: i64) -> ServiceResult<Vec<QuizResponse>> {
        self.find(id).await?;
        let quizzes = self.ctx.quiz_repo().find_by_cours(id).await?;
        Ok(quizzes.into_iter().map(QuizResponse::from).collect())
    }

    async fn find(&self, id: i64) -> ServiceResult<Cours> {
        Ok(self
            .ctx
            .cours_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CoursNotFound(id))?)
    }
}
