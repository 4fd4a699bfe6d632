//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Field names are camelCase, as the AJAX front end expects them.

use campus_core::value_objects::ReactionCounts;
use campus_core::{Statut, TypeContenu};
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Acknowledgement without payload
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Search result with the filter-only total
#[derive(Debug, Serialize)]
pub struct SearchResponse<T> {
    pub success: bool,
    /// Items in this response
    pub count: usize,
    /// Items matching the filters, across all pages
    pub total: i64,
    pub data: Vec<T>,
}

impl<T> SearchResponse<T> {
    pub fn new(data: Vec<T>, total: i64) -> Self {
        Self {
            success: true,
            count: data.len(),
            total,
            data,
        }
    }
}

// ============================================================================
// Projet / Tache Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjetResponse {
    pub id: i64,
    pub nom: String,
    pub description: String,
    pub date_creation: DateTime<Utc>,
    pub enabled: bool,
}

/// Projet with all of its taches
#[derive(Debug, Clone, Serialize)]
pub struct ProjetDetailResponse {
    #[serde(flatten)]
    pub projet: ProjetResponse,
    pub taches: Vec<TacheResponse>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TacheResponse {
    pub id: i64,
    pub projet_id: i64,
    pub titre: String,
    pub description: String,
    pub statut: Statut,
    pub priorite: i32,
    #[serde(rename = "priorite_label")]
    pub priorite_label: &'static str,
    pub date_creation: DateTime<Utc>,
    pub enabled: bool,
}

/// Tache as listed under a projet search result
#[derive(Debug, Clone, Serialize)]
pub struct TacheSummary {
    pub id: i64,
    pub titre: String,
    pub statut: Statut,
    pub priorite: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjetSearchItem {
    pub id: i64,
    pub nom: String,
    /// Shortened description
    pub description: String,
    /// `dd/mm/YYYY`
    pub date_creation: String,
    pub enabled: bool,
    pub taches: Vec<TacheSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjetRefResponse {
    pub id: i64,
    pub nom: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TacheSearchItem {
    pub id: i64,
    pub titre: String,
    /// Shortened description
    pub description: String,
    pub statut: Statut,
    pub priorite: i32,
    pub priorite_label: &'static str,
    pub projet: ProjetRefResponse,
    pub enabled: bool,
}

/// Paged search envelope shared by projets and taches
#[derive(Debug, Serialize)]
pub struct PagedSearchResponse<T: Serialize> {
    pub success: bool,
    pub total: i64,
    pub count: usize,
    pub page: i64,
    pub limit: i64,
    #[serde(flatten)]
    pub items: T,
}

#[derive(Debug, Serialize)]
pub struct ProjetItems {
    pub projets: Vec<ProjetSearchItem>,
}

#[derive(Debug, Serialize)]
pub struct TacheItems {
    pub taches: Vec<TacheSearchItem>,
}

pub type ProjetSearchResponse = PagedSearchResponse<ProjetItems>;
pub type TacheSearchResponse = PagedSearchResponse<TacheItems>;

impl ProjetSearchResponse {
    pub fn new(projets: Vec<ProjetSearchItem>, total: i64, page: i64, limit: i64) -> Self {
        Self {
            success: true,
            total,
            count: projets.len(),
            page,
            limit,
            items: ProjetItems { projets },
        }
    }
}

impl TacheSearchResponse {
    pub fn new(taches: Vec<TacheSearchItem>, total: i64, page: i64, limit: i64) -> Self {
        Self {
            success: true,
            total,
            count: taches.len(),
            page,
            limit,
            items: TacheItems { taches },
        }
    }
}

/// Counters of the projects admin page
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsDashboardResponse {
    pub total_projets: i64,
    pub total_taches: i64,
    pub projets_enabled: i64,
    pub taches_enabled: i64,
}

// ============================================================================
// Forum Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub views: i32,
    pub likes: i32,
    pub image: Option<String>,
    pub link: Option<String>,
    pub tags: Vec<String>,
    pub reactions: ReactionCounts,
    pub reactions_total: usize,
    pub created_by_admin: bool,
}

/// Post page: the post and its comments, newest first
#[derive(Debug, Clone, Serialize)]
pub struct PostDetailResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    pub comments: Vec<CommentResponse>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub post_id: i64,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub reactions: ReactionCounts,
}

/// Reply of the comment add and edit endpoints
#[derive(Debug, Clone, Serialize)]
pub struct CommentEnvelope {
    pub success: bool,
    pub comment: CommentResponse,
}

impl CommentEnvelope {
    pub fn new(comment: CommentResponse) -> Self {
        Self {
            success: true,
            comment,
        }
    }
}

/// Comment as embedded in a forum search result
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSummary {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumSearchItem {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub image: Option<String>,
    pub tags: Option<String>,
    pub views: i32,
    pub comments_count: usize,
    pub created_by_admin: bool,
    pub comments: Vec<CommentSummary>,
}

/// Reply of a reaction toggle
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReactionResponse {
    pub success: bool,
    /// Every kind, zero included
    pub counts: ReactionCounts,
    /// Stored entries, legacy ones included
    pub total: usize,
}

impl ReactionResponse {
    pub fn new(counts: ReactionCounts, total: usize) -> Self {
        Self {
            success: true,
            counts,
            total,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LikeResponse {
    pub success: bool,
    pub likes: i32,
}

/// Forum admin page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumDashboardResponse {
    pub total_posts: i64,
    pub total_commentaires: i64,
    pub total_views: i64,
    /// Rounded to two decimals
    pub avg_comments: f64,
    pub posts: Vec<PostResponse>,
    pub commentaires: Vec<CommentResponse>,
}

// ============================================================================
// Cours / Quiz Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursResponse {
    pub id: i64,
    pub titre: String,
    pub description: String,
    pub date_publication: DateTime<Utc>,
    pub date_creation: DateTime<Utc>,
    pub visibilite: bool,
    pub contenu: Option<String>,
    pub type_contenu: Option<TypeContenu>,
    pub url_contenu: Option<String>,
}

/// Cours with its quizzes
#[derive(Debug, Clone, Serialize)]
pub struct CoursDetailResponse {
    #[serde(flatten)]
    pub cours: CoursResponse,
    pub quizzes: Vec<QuizResponse>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    pub id: i64,
    pub cours_id: i64,
    pub titre: String,
    pub description: String,
    pub questions: Vec<String>,
    pub date_creation: DateTime<Utc>,
    pub date_echeance: DateTime<Utc>,
    pub duree: Option<i32>,
    pub score_max: i32,
    pub tentatives: i32,
}

// ============================================================================
// Catalogue Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub date_creation: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: i64,
    pub titre: String,
    pub description: Option<String>,
    pub lieu: Option<String>,
    pub date_evenement: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
