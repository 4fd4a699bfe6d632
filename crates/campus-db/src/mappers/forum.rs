//! Post and Commentaire entity <-> model mapper

use campus_core::entities::{Commentaire, Post, PostStats};
use campus_core::value_objects::{ReactionEntry, ReactionList};
use serde_json::Value as JsonValue;

use crate::models::{CommentaireModel, PostModel, PostStatsModel};

/// Read a stored reaction array
///
/// Anything that is not an array reads as empty. Elements that are not
/// objects are skipped; objects with unknown or missing fields are kept.
pub fn reactions_from_json(value: JsonValue) -> ReactionList {
    match value {
        JsonValue::Array(items) => ReactionList::from_entries(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value::<ReactionEntry>(item).ok())
                .collect(),
        ),
        _ => ReactionList::new(),
    }
}

/// Convert PostModel to Post entity
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: model.id,
            title: model.title,
            content: model.content,
            author: model.author,
            created_at: model.created_at,
            updated_at: model.updated_at,
            views: model.views,
            likes: model.likes,
            image: model.image,
            link: model.link,
            tags: model.tags,
            reactions: reactions_from_json(model.reactions),
            created_by_admin: model.created_by_admin,
        }
    }
}

/// Convert CommentaireModel to Commentaire entity
impl From<CommentaireModel> for Commentaire {
    fn from(model: CommentaireModel) -> Self {
        Commentaire {
            id: model.id,
            post_id: model.post_id,
            content: model.content,
            author: model.author,
            created_at: model.created_at,
            updated_at: model.updated_at,
            reactions: reactions_from_json(model.reactions),
        }
    }
}

impl From<PostStatsModel> for PostStats {
    fn from(model: PostStatsModel) -> Self {
        PostStats {
            total_posts: model.total_posts,
            total_views: model.total_views,
        }
    }
}
