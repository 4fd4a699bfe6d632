//! Normalized list filters handed to the repositories
//!
//! The raw query parameters are parsed into these types before they reach
//! the database layer, so a repository only ever sees allow-listed sort
//! fields, a valid direction, and clamped paging.

use super::query::{
    CommentaireSortField, DateRange, PageRequest, PostSortField, ProjetSortField, SortDirection,
    TacheSortField, DEFAULT_POST_LIMIT, DEFAULT_SEARCH_LIMIT,
};
use super::task_status::{Priorite, Statut};

/// Forum post listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFilter {
    /// Substring of title or content
    pub q: Option<String>,
    /// Any-of tag substrings
    pub tags: Vec<String>,
    /// Substring of the author name
    pub author: Option<String>,
    pub dates: DateRange,
    pub created_by_admin: Option<bool>,
    pub sort: PostSortField,
    pub direction: SortDirection,
    pub page: PageRequest,
}

impl Default for PostFilter {
    fn default() -> Self {
        Self {
            q: None,
            tags: Vec::new(),
            author: None,
            dates: DateRange::default(),
            created_by_admin: None,
            sort: PostSortField::default(),
            direction: SortDirection::default(),
            page: PageRequest::first(DEFAULT_POST_LIMIT),
        }
    }
}

impl PostFilter {
    /// Only the author criterion, everything else default
    pub fn by_author(author: impl Into<String>) -> Self {
        Self {
            author: Some(author.into()),
            ..Self::default()
        }
    }
}

/// Comment listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentaireFilter {
    pub post_id: Option<i64>,
    /// Exact author name
    pub author: Option<String>,
    /// Substring of the content
    pub q: Option<String>,
    pub dates: DateRange,
    pub sort: CommentaireSortField,
    pub direction: SortDirection,
    pub page: PageRequest,
}

impl Default for CommentaireFilter {
    fn default() -> Self {
        Self {
            post_id: None,
            author: None,
            q: None,
            dates: DateRange::default(),
            sort: CommentaireSortField::default(),
            direction: SortDirection::default(),
            page: PageRequest::first(DEFAULT_SEARCH_LIMIT),
        }
    }
}

/// Tache search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TacheSearch {
    /// Substring of titre or description
    pub search: Option<String>,
    pub projet_id: Option<i64>,
    pub statut: Option<Statut>,
    pub priorite: Option<Priorite>,
    pub sort: TacheSortField,
    pub direction: SortDirection,
    pub page: PageRequest,
    pub enabled_only: bool,
}

impl Default for TacheSearch {
    fn default() -> Self {
        Self {
            search: None,
            projet_id: None,
            statut: None,
            priorite: None,
            sort: TacheSortField::default(),
            direction: SortDirection::default(),
            page: PageRequest::first(DEFAULT_SEARCH_LIMIT),
            enabled_only: true,
        }
    }
}

/// Projet search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjetSearch {
    /// Substring of nom or description
    pub search: Option<String>,
    pub dates: DateRange,
    pub sort: ProjetSortField,
    pub direction: SortDirection,
    pub page: PageRequest,
    pub enabled_only: bool,
}

impl Default for ProjetSearch {
    fn default() -> Self {
        Self {
            search: None,
            dates: DateRange::default(),
            sort: ProjetSortField::default(),
            direction: SortDirection::default(),
            page: PageRequest::first(DEFAULT_SEARCH_LIMIT),
            enabled_only: true,
        }
    }
}

/// Order rows by their comment count
///
/// `items` must already be in id order. The sort is stable, so rows with
/// the same count keep that order in both directions.
pub fn sort_by_comment_count<T>(mut items: Vec<(T, i64)>, direction: SortDirection) -> Vec<T> {
    match direction {
        SortDirection::Asc => items.sort_by(|a, b| a.1.cmp(&b.1)),
        SortDirection::Desc => items.sort_by(|a, b| b.1.cmp(&a.1)),
    }
    items.into_iter().map(|(item, _)| item).collect()
}
