//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Query parameter DTOs normalized into repository filters
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    AdminForumParams, CommentRequest, CommentSearchParams, CourseRequest, CoursRequest,
    EditCommentRequest, EventRequest, PostRequest, PostSearchParams, ProjetRequest,
    ProjetSearchParams, QuestionsInput, QuizRequest, ReactionRequest, TacheRequest,
    TacheSearchParams,
};

// Re-export commonly used response types
pub use responses::{
    ApiResponse, CommentEnvelope, CommentResponse, CommentSummary, CourseResponse,
    CoursDetailResponse, CoursResponse, EventResponse, ForumDashboardResponse, ForumSearchItem,
    HealthChecks, HealthResponse, LikeResponse, PostDetailResponse, PostResponse,
    ProjectsDashboardResponse, ProjetDetailResponse, ProjetRefResponse, ProjetResponse,
    ProjetSearchItem, ProjetSearchResponse, QuizResponse, ReactionResponse, ReadinessResponse,
    SearchResponse, SuccessResponse, TacheResponse, TacheSearchItem, TacheSearchResponse,
    TacheSummary,
};

// Re-export mappers and helper structs
pub use mappers::{CoursWithQuizzes, PostWithComments, ProjetWithTaches, SEARCH_DATE_FORMAT};
