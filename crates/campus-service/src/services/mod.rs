//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod admin;
pub mod catalogue;
pub mod commentaire;
pub mod context;
pub mod cours;
pub mod error;
pub mod forum;
pub mod projet;
pub mod quiz;
pub mod reaction;
pub mod tache;

#[cfg(test)]
mod fakes;

// Re-export all services for convenience
pub use admin::AdminForumService;
pub use catalogue::CatalogueService;
pub use commentaire::CommentaireService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use cours::CoursService;
pub use error::{field_messages, ServiceError, ServiceResult};
pub use forum::ForumService;
pub use projet::ProjetService;
pub use quiz::QuizService;
pub use reaction::ReactionService;
pub use tache::TacheService;
