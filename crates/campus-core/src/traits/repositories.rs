//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.
//!
//! Search methods receive already normalized filters. `search` returns one
//! page; the matching `count_*` method applies the same conditions without
//! paging, so totals never depend on the requested page.

use async_trait::async_trait;

use crate::entities::{
    Commentaire, Course, Cours, Event, NewCommentaire, NewCourse, NewCours, NewEvent, NewPost,
    NewProjet, NewQuiz, NewTache, Post, PostStats, Projet, Quiz, Tache, TacheWithProjet,
};
use crate::error::DomainError;
use crate::value_objects::{
    CommentaireFilter, PostFilter, PostSortField, ProjetSearch, ReactionList, SortDirection,
    TacheSearch,
};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Projet Repository
// ============================================================================

#[async_trait]
pub trait ProjetRepository: Send + Sync {
    /// Find projet by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Projet>>;

    /// Enabled projets, newest first
    async fn list_enabled(&self) -> RepoResult<Vec<Projet>>;

    /// One page of matching projets
    async fn search(&self, query: &ProjetSearch) -> RepoResult<Vec<Projet>>;

    /// Number of projets matching the query, ignoring paging
    async fn count_search(&self, query: &ProjetSearch) -> RepoResult<i64>;

    /// Count projets, optionally only enabled ones
    async fn count(&self, enabled_only: bool) -> RepoResult<i64>;

    /// Insert a projet and return it with its generated id
    async fn create(&self, projet: &NewProjet) -> RepoResult<Projet>;

    /// Update an existing projet
    async fn update(&self, projet: &Projet) -> RepoResult<()>;

    /// Delete a projet and its taches
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Tache Repository
// ============================================================================

#[async_trait]
pub trait TacheRepository: Send + Sync {
    /// Find tache by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Tache>>;

    /// All taches, newest first
    async fn list(&self) -> RepoResult<Vec<Tache>>;

    /// Taches of one projet
    async fn find_by_projet(&self, projet_id: i64) -> RepoResult<Vec<Tache>>;

    /// Taches of several projets, for batch loading search results
    async fn find_by_projets(&self, projet_ids: &[i64]) -> RepoResult<Vec<Tache>>;

    /// One page of matching taches with their projet
    async fn search(&self, query: &TacheSearch) -> RepoResult<Vec<TacheWithProjet>>;

    /// Number of taches matching the query, ignoring paging
    async fn count_search(&self, query: &TacheSearch) -> RepoResult<i64>;

    /// Count taches, optionally only enabled ones
    async fn count(&self, enabled_only: bool) -> RepoResult<i64>;

    /// Insert a tache and return it with its generated id
    async fn create(&self, tache: &NewTache) -> RepoResult<Tache>;

    /// Update an existing tache
    async fn update(&self, tache: &Tache) -> RepoResult<()>;

    /// Delete a tache
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Post>>;

    /// All posts, newest first
    async fn list_recent(&self) -> RepoResult<Vec<Post>>;

    /// Posts flagged as written by an admin, newest first
    async fn list_admin_posts(&self) -> RepoResult<Vec<Post>>;

    /// One page of matching posts
    ///
    /// With [`PostSortField::CommentsCount`] the whole filtered set is loaded
    /// in id order with its comment counts, stably sorted, then paged.
    async fn search(&self, filter: &PostFilter) -> RepoResult<Vec<Post>>;

    /// Number of posts matching the filter, ignoring paging
    async fn count_search(&self, filter: &PostFilter) -> RepoResult<i64>;

    /// Posts with the given ids, in the given order
    ///
    /// [`PostSortField::CommentsCount`] is treated as `createdAt` here.
    async fn find_by_ids(
        &self,
        ids: &[i64],
        sort: PostSortField,
        direction: SortDirection,
    ) -> RepoResult<Vec<Post>>;

    /// Insert a post and return it with its generated id
    async fn create(&self, post: &NewPost) -> RepoResult<Post>;

    /// Update the editable fields of a post
    async fn update(&self, post: &Post) -> RepoResult<()>;

    /// Delete a post and its comments
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Add one view
    async fn increment_views(&self, id: i64) -> RepoResult<()>;

    /// Add one like and return the new count
    async fn increment_likes(&self, id: i64) -> RepoResult<i32>;

    /// Replace the stored reaction array
    async fn update_reactions(&self, id: i64, reactions: &ReactionList) -> RepoResult<()>;

    /// Total number of posts and views
    async fn stats(&self) -> RepoResult<PostStats>;
}

// ============================================================================
// Commentaire Repository
// ============================================================================

#[async_trait]
pub trait CommentaireRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Commentaire>>;

    /// Comments of a post, newest first
    async fn find_by_post(&self, post_id: i64) -> RepoResult<Vec<Commentaire>>;

    /// Comments of several posts, newest first
    async fn find_by_posts(&self, post_ids: &[i64]) -> RepoResult<Vec<Commentaire>>;

    /// One page of matching comments
    async fn search(&self, filter: &CommentaireFilter) -> RepoResult<Vec<Commentaire>>;

    /// Number of comments matching the filter, ignoring paging
    async fn count_search(&self, filter: &CommentaireFilter) -> RepoResult<i64>;

    /// Ids of posts having a comment whose author contains `author`
    async fn find_post_ids_by_author(&self, author: &str) -> RepoResult<Vec<i64>>;

    /// Insert a comment and return it with its generated id
    async fn create(&self, commentaire: &NewCommentaire) -> RepoResult<Commentaire>;

    /// Update content and edit time
    async fn update(&self, commentaire: &Commentaire) -> RepoResult<()>;

    /// Delete a comment
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Replace the stored reaction array
    async fn update_reactions(&self, id: i64, reactions: &ReactionList) -> RepoResult<()>;
}

// ============================================================================
// Cours Repository
// ============================================================================

#[async_trait]
pub trait CoursRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Cours>>;

    /// All cours, by publication date
    async fn list(&self) -> RepoResult<Vec<Cours>>;

    async fn create(&self, cours: &NewCours) -> RepoResult<Cours>;

    async fn update(&self, cours: &Cours) -> RepoResult<()>;

    /// Delete a cours and its quizzes
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Quiz Repository
// ============================================================================

#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Quiz>>;

    /// All quizzes, newest first
    async fn list(&self) -> RepoResult<Vec<Quiz>>;

    /// Quizzes of one cours, by due date
    async fn find_by_cours(&self, cours_id: i64) -> RepoResult<Vec<Quiz>>;

    async fn create(&self, quiz: &NewQuiz) -> RepoResult<Quiz>;

    async fn update(&self, quiz: &Quiz) -> RepoResult<()>;

    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Catalogue Repositories
// ============================================================================

#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Enabled courses, newest first
    async fn list_enabled(&self) -> RepoResult<Vec<Course>>;

    async fn create(&self, course: &NewCourse) -> RepoResult<Course>;
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Enabled events, soonest first
    async fn list_enabled(&self) -> RepoResult<Vec<Event>>;

    async fn create(&self, event: &NewEvent) -> RepoResult<Event>;
}
