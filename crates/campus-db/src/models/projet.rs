//! Projet and tache database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for projet table
#[derive(Debug, Clone, FromRow)]
pub struct ProjetModel {
    pub id: i64,
    pub nom: String,
    pub description: String,
    pub date_creation: DateTime<Utc>,
    pub enabled: bool,
}

/// Database model for tache table
#[derive(Debug, Clone, FromRow)]
pub struct TacheModel {
    pub id: i64,
    pub projet_id: i64,
    pub titre: String,
    pub description: String,
    pub statut: String,
    pub priorite: i32,
    pub date_creation: DateTime<Utc>,
    pub enabled: bool,
}

impl TacheModel {
    /// Check if the tache is finished
    #[inline]
    pub fn is_done(&self) -> bool {
        self.statut == "Terminée"
    }
}

/// A tache row joined with the name of its projet
#[derive(Debug, Clone, FromRow)]
pub struct TacheWithProjetModel {
    #[sqlx(flatten)]
    pub tache: TacheModel,
    pub projet_nom: String,
}
