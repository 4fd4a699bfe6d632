//! Tache entity - a task inside a projet

use chrono::{DateTime, Utc};

use super::projet::ProjetRef;
use crate::value_objects::{excerpt, Priorite, Statut, EXCERPT_LENGTH};

/// Tache entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tache {
    pub id: i64,
    pub projet_id: i64,
    pub titre: String,
    pub description: String,
    pub statut: Statut,
    pub priorite: Priorite,
    pub date_creation: DateTime<Utc>,
    pub enabled: bool,
}

impl Tache {
    #[inline]
    pub fn is_done(&self) -> bool {
        self.statut.is_done()
    }

    pub fn description_excerpt(&self) -> String {
        excerpt(&self.description, EXCERPT_LENGTH)
    }
}

/// Values for a tache that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTache {
    pub projet_id: i64,
    pub titre: String,
    pub description: String,
    pub statut: Statut,
    pub priorite: Priorite,
    pub enabled: bool,
}

impl NewTache {
    pub fn new(projet_id: i64, titre: String, description: String) -> Self {
        Self {
            projet_id,
            titre,
            description,
            statut: Statut::default(),
            priorite: Priorite::default(),
            enabled: true,
        }
    }
}

/// A tache together with its projet, as returned by searches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TacheWithProjet {
    pub tache: Tache,
    pub projet: ProjetRef,
}
