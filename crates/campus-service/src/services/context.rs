//! Service context - dependency container for services
//!
//! Holds all repositories and settings needed by services.

use std::sync::Arc;

use campus_core::traits::{
    CommentaireRepository, CourseRepository, CoursRepository, EventRepository, PostRepository,
    ProjetRepository, QuizRepository, TacheRepository,
};
use campus_core::value_objects::DEFAULT_SEARCH_LIMIT;
use campus_db::{
    PgCommentaireRepository, PgCourseRepository, PgCoursRepository, PgEventRepository, PgPool,
    PgPostRepository, PgProjetRepository, PgQuizRepository, PgTacheRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - The PostgreSQL pool (absent when repositories are in-memory fakes)
/// - One repository per aggregate
/// - The page size of the projet and tache search endpoints
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: Option<PgPool>,

    // Repositories
    projet_repo: Arc<dyn ProjetRepository>,
    tache_repo: Arc<dyn TacheRepository>,
    post_repo: Arc<dyn PostRepository>,
    commentaire_repo: Arc<dyn CommentaireRepository>,
    cours_repo: Arc<dyn CoursRepository>,
    quiz_repo: Arc<dyn QuizRepository>,
    course_repo: Arc<dyn CourseRepository>,
    event_repo: Arc<dyn EventRepository>,

    // Settings
    search_page_size: i64,
}

impl ServiceContext {
    /// Create a context backed by PostgreSQL repositories sharing `pool`
    pub fn from_pool(pool: PgPool, search_page_size: i64) -> Self {
        Self {
            projet_repo: Arc::new(PgProjetRepository::new(pool.clone())),
            tache_repo: Arc::new(PgTacheRepository::new(pool.clone())),
            post_repo: Arc::new(PgPostRepository::new(pool.clone())),
            commentaire_repo: Arc::new(PgCommentaireRepository::new(pool.clone())),
            cours_repo: Arc::new(PgCoursRepository::new(pool.clone())),
            quiz_repo: Arc::new(PgQuizRepository::new(pool.clone())),
            course_repo: Arc::new(PgCourseRepository::new(pool.clone())),
            event_repo: Arc::new(PgEventRepository::new(pool.clone())),
            pool: Some(pool),
            search_page_size,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    pub fn projet_repo(&self) -> &dyn ProjetRepository {
        self.projet_repo.as_ref()
    }

    pub fn tache_repo(&self) -> &dyn TacheRepository {
        self.tache_repo.as_ref()
    }

    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    pub fn commentaire_repo(&self) -> &dyn CommentaireRepository {
        self.commentaire_repo.as_ref()
    }

    pub fn cours_repo(&self) -> &dyn CoursRepository {
        self.cours_repo.as_ref()
    }

    pub fn quiz_repo(&self) -> &dyn QuizRepository {
        self.quiz_repo.as_ref()
    }

    pub fn course_repo(&self) -> &dyn CourseRepository {
        self.course_repo.as_ref()
    }

    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    // === Settings ===

    /// Page size of the projet and tache search endpoints
    pub fn search_page_size(&self) -> i64 {
        self.search_page_size
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("search_page_size", &self.search_page_size)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom repositories
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    projet_repo: Option<Arc<dyn ProjetRepository>>,
    tache_repo: Option<Arc<dyn TacheRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    commentaire_repo: Option<Arc<dyn CommentaireRepository>>,
    cours_repo: Option<Arc<dyn CoursRepository>>,
    quiz_repo: Option<Arc<dyn QuizRepository>>,
    course_repo: Option<Arc<dyn CourseRepository>>,
    event_repo: Option<Arc<dyn EventRepository>>,
    search_page_size: i64,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            projet_repo: None,
            tache_repo: None,
            post_repo: None,
            commentaire_repo: None,
            cours_repo: None,
            quiz_repo: None,
            course_repo: None,
            event_repo: None,
            search_page_size: DEFAULT_SEARCH_LIMIT,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn projet_repo(mut self, repo: Arc<dyn ProjetRepository>) -> Self {
        self.projet_repo = Some(repo);
        self
    }

    pub fn tache_repo(mut self, repo: Arc<dyn TacheRepository>) -> Self {
        self.tache_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn commentaire_repo(mut self, repo: Arc<dyn CommentaireRepository>) -> Self {
        self.commentaire_repo = Some(repo);
        self
    }

    pub fn cours_repo(mut self, repo: Arc<dyn CoursRepository>) -> Self {
        self.cours_repo = Some(repo);
        self
    }

    pub fn quiz_repo(mut self, repo: Arc<dyn QuizRepository>) -> Self {
        self.quiz_repo = Some(repo);
        self
    }

    pub fn course_repo(mut self, repo: Arc<dyn CourseRepository>) -> Self {
        self.course_repo = Some(repo);
        self
    }

    pub fn event_repo(mut self, repo: Arc<dyn EventRepository>) -> Self {
        self.event_repo = Some(repo);
        self
    }

    pub fn search_page_size(mut self, size: i64) -> Self {
        self.search_page_size = size;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let missing = |name: &str| ServiceError::validation(format!("{name} is required"));
        Ok(ServiceContext {
            pool: self.pool,
            projet_repo: self.projet_repo.ok_or_else(|| missing("projet_repo"))?,
            tache_repo: self.tache_repo.ok_or_else(|| missing("tache_repo"))?,
            post_repo: self.post_repo.ok_or_else(|| missing("post_repo"))?,
            commentaire_repo: self.commentaire_repo.ok_or_else(|| missing("commentaire_repo"))?,
            cours_repo: self.cours_repo.ok_or_else(|| missing("cours_repo"))?,
            quiz_repo: self.quiz_repo.ok_or_else(|| missing("quiz_repo"))?,
            course_repo: self.course_repo.ok_or_else(|| missing("course_repo"))?,
            event_repo: self.event_repo.ok_or_else(|| missing("event_repo"))?,
            search_page_size: self.search_page_size,
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
