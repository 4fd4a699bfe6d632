//! Commentaire entity - a comment on a forum post

use chrono::{DateTime, Utc};

use crate::value_objects::ReactionList;

/// Commentaire entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commentaire {
    pub id: i64,
    pub post_id: i64,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub reactions: ReactionList,
}

impl Commentaire {
    /// Replace the content and stamp the edit time
    pub fn edit(&mut self, content: String) {
        self.content = content;
        self.updated_at = Some(Utc::now());
    }

    #[inline]
    pub fn belongs_to(&self, post_id: i64) -> bool {
        self.post_id == post_id
    }

    #[inline]
    pub fn is_edited(&self) -> bool {
        self.updated_at.is_some()
    }
}

/// Values for a comment that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCommentaire {
    pub post_id: i64,
    pub content: String,
    pub author: String,
}

impl NewCommentaire {
    pub fn new(post_id: i64, content: String, author: String) -> Self {
        Self {
            post_id,
            content,
            author,
        }
    }
}
