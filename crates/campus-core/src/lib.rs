//! # campus-core
//!
//! Domain layer containing entities, value objects and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    parse_questions, Commentaire, Course, Cours, Event, NewCommentaire, NewCourse, NewCours,
    NewEvent, NewPost, NewProjet, NewQuiz, NewTache, Post, PostStats, Projet, ProjetRef, Quiz,
    Tache, TacheWithProjet, TypeContenu, ANONYMOUS_AUTHOR,
};
pub use error::DomainError;
pub use traits::{
    CommentaireRepository, CourseRepository, CoursRepository, EventRepository, PostRepository,
    ProjetRepository, QuizRepository, RepoResult, TacheRepository,
};
pub use value_objects::{
    CommentaireFilter, CommentaireSortField, DateRange, PageRequest, PostFilter, PostSortField,
    Priorite, ProjetSearch, ProjetSortField, ReactionCounts, ReactionEntry, ReactionKind,
    ReactionList, SortDirection, Statut, TacheSearch, TacheSortField, ToggleOutcome,
};
