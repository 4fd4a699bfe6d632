//! Post and commentaire database models

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::FromRow;

/// Database model for post table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub views: i32,
    pub likes: i32,
    pub image: Option<String>,
    pub link: Option<String>,
    pub tags: Option<String>,
    pub reactions: JsonValue,
    pub created_by_admin: bool,
}

impl PostModel {
    /// Check if post has been edited
    #[inline]
    pub fn is_edited(&self) -> bool {
        self.updated_at.is_some()
    }
}

/// A post row with the number of its comments
#[derive(Debug, Clone, FromRow)]
pub struct PostWithCountModel {
    #[sqlx(flatten)]
    pub post: PostModel,
    pub comments_count: i64,
}

/// Aggregates over the post table
#[derive(Debug, Clone, Copy, FromRow)]
pub struct PostStatsModel {
    pub total_posts: i64,
    pub total_views: i64,
}

/// Database model for commentaire table
#[derive(Debug, Clone, FromRow)]
pub struct CommentaireModel {
    pub id: i64,
    pub post_id: i64,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub reactions: JsonValue,
}
