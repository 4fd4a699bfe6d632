//! Path parameter extractors
//!
//! Numeric ids from the URL; anything else is a 400 instead of axum's
//! plain-text rejection.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Single `:id` segment
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::invalid_path("id must be an integer"))?;

        Ok(IdPath(id))
    }
}

/// `/admin/posts/:id/comments/:comment_id`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PostCommentPath {
    pub id: i64,
    pub comment_id: i64,
}

#[async_trait]
impl<S> FromRequestParts<S> for PostCommentPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(path) = Path::<PostCommentPath>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::invalid_path("id and comment_id must be integers"))?;

        Ok(path)
    }
}
