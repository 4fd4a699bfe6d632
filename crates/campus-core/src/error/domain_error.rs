//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Projet not found: {0}")]
    ProjetNotFound(i64),

    #[error("Tache not found: {0}")]
    TacheNotFound(i64),

    #[error("Post not found: {0}")]
    PostNotFound(i64),

    #[error("Commentaire not found: {0}")]
    CommentaireNotFound(i64),

    #[error("Commentaire {comment_id} not found in post {post_id}")]
    CommentaireNotInPost { comment_id: i64, post_id: i64 },

    #[error("Cours not found: {0}")]
    CoursNotFound(i64),

    #[error("Quiz not found: {0}")]
    QuizNotFound(i64),

    #[error("Course not found: {0}")]
    CourseNotFound(i64),

    #[error("Event not found: {0}")]
    EventNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid reaction type")]
    InvalidReactionType(String),

    #[error("Author is required")]
    AuthorRequired,

    #[error("Missing fields")]
    MissingFields,

    #[error("Content is required")]
    ContentRequired,

    #[error("Invalid statut: {0}")]
    InvalidStatut(String),

    #[error("Invalid priorite: {0}")]
    InvalidPriorite(i32),

    #[error("Invalid content type: {0}")]
    InvalidContentType(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Post {0} was not created by an admin")]
    NotAdminPost(i64),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::ProjetNotFound(_) => "UNKNOWN_PROJET",
            Self::TacheNotFound(_) => "UNKNOWN_TACHE",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CommentaireNotFound(_) | Self::CommentaireNotInPost { .. } => {
                "UNKNOWN_COMMENTAIRE"
            }
            Self::CoursNotFound(_) => "UNKNOWN_COURS",
            Self::QuizNotFound(_) => "UNKNOWN_QUIZ",
            Self::CourseNotFound(_) => "UNKNOWN_COURSE",
            Self::EventNotFound(_) => "UNKNOWN_EVENT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidReactionType(_) => "INVALID_REACTION_TYPE",
            Self::AuthorRequired => "AUTHOR_REQUIRED",
            Self::MissingFields => "MISSING_FIELDS",
            Self::ContentRequired => "CONTENT_REQUIRED",
            Self::InvalidStatut(_) => "INVALID_STATUT",
            Self::InvalidPriorite(_) => "INVALID_PRIORITE",
            Self::InvalidContentType(_) => "INVALID_CONTENT_TYPE",

            // Authorization
            Self::NotAdminPost(_) => "NOT_ADMIN_POST",

            // Conflict
            Self::DuplicateEntry(_) => "DUPLICATE_ENTRY",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ProjetNotFound(_)
                | Self::TacheNotFound(_)
                | Self::PostNotFound(_)
                | Self::CommentaireNotFound(_)
                | Self::CommentaireNotInPost { .. }
                | Self::CoursNotFound(_)
                | Self::QuizNotFound(_)
                | Self::CourseNotFound(_)
                | Self::EventNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidReactionType(_)
                | Self::AuthorRequired
                | Self::MissingFields
                | Self::ContentRequired
                | Self::InvalidStatut(_)
                | Self::InvalidPriorite(_)
                | Self::InvalidContentType(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotAdminPost(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateEntry(_))
    }
}
