//! Axum extractors for request handling
//!
//! Body, path and query extractors that reject with `ApiError`.

mod body;
mod path;
mod query;

pub use body::{JsonOrForm, ValidatedJson, ValidatedJsonOrForm};
pub use path::{IdPath, PostCommentPath};
pub use query::QueryParams;
