//! Cours and quiz database models

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for cours table
#[derive(Debug, Clone, FromRow)]
pub struct CoursModel {
    pub id: i64,
    pub titre: String,
    pub description: String,
    pub date_publication: DateTime<Utc>,
    pub date_creation: DateTime<Utc>,
    pub visibilite: bool,
    pub contenu: Option<String>,
    pub type_contenu: Option<String>,
    pub url_contenu: Option<String>,
}

/// Database model for quiz table
#[derive(Debug, Clone, FromRow)]
pub struct QuizModel {
    pub id: i64,
    pub cours_id: i64,
    pub titre: String,
    pub description: String,
    pub questions: Json<Vec<String>>,
    pub date_creation: DateTime<Utc>,
    pub date_echeance: DateTime<Utc>,
    pub duree: Option<i32>,
    pub score_max: i32,
    pub tentatives: i32,
}
