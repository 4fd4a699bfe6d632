//! Error handling utilities for repositories

use campus_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
///
/// Unique violations surface as `DuplicateEntry` naming the constraint.
pub fn map_db_error(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            let constraint = db_err.constraint().unwrap_or("unique").to_string();
            return DomainError::DuplicateEntry(constraint);
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Map a foreign key violation to the missing parent, anything else through `map_db_error`
pub fn map_foreign_key_violation<F>(e: SqlxError, on_missing_parent: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_missing_parent();
        }
    }
    map_db_error(e)
}

pub fn projet_not_found(id: i64) -> DomainError {
    DomainError::ProjetNotFound(id)
}

pub fn tache_not_found(id: i64) -> DomainError {
    DomainError::TacheNotFound(id)
}

pub fn post_not_found(id: i64) -> DomainError {
    DomainError::PostNotFound(id)
}

pub fn commentaire_not_found(id: i64) -> DomainError {
    DomainError::CommentaireNotFound(id)
}

pub fn cours_not_found(id: i64) -> DomainError {
    DomainError::CoursNotFound(id)
}

pub fn quiz_not_found(id: i64) -> DomainError {
    DomainError::QuizNotFound(id)
}
