//! Value objects - immutable types that represent domain concepts

mod filters;
mod query;
mod reaction;
mod task_status;
mod text;

pub use filters::{
    sort_by_comment_count, CommentaireFilter, PostFilter, ProjetSearch, TacheSearch,
};
pub use query::{
    CommentaireSortField, DateRange, PageRequest, PostSortField, ProjetSortField, SortDirection,
    TacheSortField, DEFAULT_POST_LIMIT, DEFAULT_SEARCH_LIMIT, MAX_PAGE_LIMIT,
};
pub use reaction::{
    ReactionCounts, ReactionEntry, ReactionKind, ReactionList, ToggleOutcome,
    REACTION_TIMESTAMP_FORMAT,
};
pub use task_status::{label_for as priorite_label, Priorite, Statut};
pub use text::{excerpt, non_empty, split_tags, EXCERPT_LENGTH};
