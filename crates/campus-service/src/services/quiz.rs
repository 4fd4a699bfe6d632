//! Quiz service

use campus_core::entities::{NewQuiz, Quiz};
use campus_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{QuizRequest, QuizResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Quiz service
pub struct QuizService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> QuizService<'a> {
    /// Create a new QuizService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<QuizResponse>> {
        let quizzes = self.ctx.quiz_repo().list().await?;
        Ok(quizzes.into_iter().map(QuizResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<QuizResponse> {
        Ok(QuizResponse::from(self.find(id).await?))
    }

    /// Create a quiz for an existing cours
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: QuizRequest) -> ServiceResult<QuizResponse> {
        self.require_cours(request.cours_id).await?;

        let quiz = NewQuiz {
            questions: request.questions.to_vec(),
            cours_id: request.cours_id,
            titre: request.titre.trim().to_string(),
            description: request.description,
            date_echeance: request.date_echeance,
            duree: request.duree,
            score_max: request.score_max,
            tentatives: request.tentatives,
        };
        let quiz = self.ctx.quiz_repo().create(&quiz).await?;
        info!(quiz_id = quiz.id, cours_id = quiz.cours_id, "Quiz created");
        Ok(QuizResponse::from(quiz))
    }

    #[instrument(skip(self, request))]
    pub async fn update(&self, id: i64, request: QuizRequest) -> ServiceResult<QuizResponse> {
        let mut quiz = self.find(id).await?;
        if quiz.cours_id != request.cours_id {
            self.require_cours(request.cours_id).await?;
        }

        quiz.questions = request.questions.to_vec();
        quiz.cours_id = request.cours_id;
        quiz.titre = request.titre.trim().to_string();
        quiz.description = request.description;
        quiz.date_echeance = request.date_echeance;
        quiz.duree = request.duree;
        quiz.score_max = request.score_max;
        quiz.tentatives = request.tentatives;

        self.ctx.quiz_repo().update(&quiz).await?;
        info!(quiz_id = id, "Quiz updated");
        Ok(QuizResponse::from(quiz))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.quiz_repo().delete(id).await?;
        info!(quiz_id = id, "Quiz deleted");
        Ok(())
    }

    async fn find(&self, id: i64) -> ServiceResult<Quiz> {
        Ok(self
            .ctx
            .quiz_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::QuizNotFound(id))?)
    }

    async fn require_cours(&self, cours_id: i64) -> ServiceResult<()> {
        match self.ctx.cours_repo().find_by_id(cours_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::CoursNotFound(cours_id).into()),
        }
    }
}
