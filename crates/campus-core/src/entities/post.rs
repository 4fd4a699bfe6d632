//! Post entity - a forum topic

use chrono::{DateTime, Utc};

use crate::value_objects::{split_tags, ReactionList};

/// Author name used when a post is submitted without one
pub const ANONYMOUS_AUTHOR: &str = "Anonyme";

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
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
    /// Comma-separated tags as entered
    pub tags: Option<String>,
    pub reactions: ReactionList,
    pub created_by_admin: bool,
}

impl Post {
    /// Individual tags, trimmed
    pub fn tag_list(&self) -> Vec<String> {
        self.tags.as_deref().map(split_tags).unwrap_or_default()
    }

    #[inline]
    pub fn is_admin_post(&self) -> bool {
        self.created_by_admin
    }

    #[inline]
    pub fn is_edited(&self) -> bool {
        self.updated_at.is_some()
    }

    /// Mark the post as modified now
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

/// Values for a post that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
    pub image: Option<String>,
    pub link: Option<String>,
    pub tags: Option<String>,
    pub created_by_admin: bool,
}

impl NewPost {
    /// A member post; a blank author becomes [`ANONYMOUS_AUTHOR`]
    pub fn new(title: String, content: String, author: Option<String>) -> Self {
        let author = author
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string());
        Self {
            title,
            content,
            author,
            image: None,
            link: None,
            tags: None,
            created_by_admin: false,
        }
    }

    /// Same post, flagged as written by an admin
    pub fn by_admin(mut self) -> Self {
        self.created_by_admin = true;
        self
    }
}

/// Aggregate numbers over all posts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostStats {
    pub total_posts: i64,
    pub total_views: i64,
}
