//! # campus-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{HealthChecks, HealthResponse, ReadinessResponse};
pub use services::{
    AdminForumService, CatalogueService, CommentaireService, CoursService, ForumService,
    ProjetService, QuizService, ReactionService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, TacheService,
};
