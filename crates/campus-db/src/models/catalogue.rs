//! Course and event database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for course table
#[derive(Debug, Clone, FromRow)]
pub struct CourseModel {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub date_creation: DateTime<Utc>,
    pub enabled: bool,
}

/// Database model for event table
#[derive(Debug, Clone, FromRow)]
pub struct EventModel {
    pub id: i64,
    pub titre: String,
    pub description: Option<String>,
    pub lieu: Option<String>,
    pub date_evenement: DateTime<Utc>,
    pub enabled: bool,
}
