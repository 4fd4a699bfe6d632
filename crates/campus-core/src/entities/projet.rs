//! Projet entity - a project grouping taches

use chrono::{DateTime, Utc};

use crate::value_objects::{excerpt, EXCERPT_LENGTH};

/// Projet entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projet {
    pub id: i64,
    pub nom: String,
    pub description: String,
    pub date_creation: DateTime<Utc>,
    pub enabled: bool,
}

impl Projet {
    /// Apply edited fields
    pub fn update(&mut self, nom: String, description: String, enabled: bool) {
        self.nom = nom;
        self.description = description;
        self.enabled = enabled;
    }

    /// Description preview for listings
    pub fn description_excerpt(&self) -> String {
        excerpt(&self.description, EXCERPT_LENGTH)
    }
}

/// Values for a projet that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProjet {
    pub nom: String,
    pub description: String,
    pub enabled: bool,
}

impl NewProjet {
    pub fn new(nom: String, description: String) -> Self {
        Self {
            nom,
            description,
            enabled: true,
        }
    }
}

/// Id and name of a projet, carried along with its taches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjetRef {
    pub id: i64,
    pub nom: String,
}

impl From<&Projet> for ProjetRef {
    fn from(projet: &Projet) -> Self {
        Self {
            id: projet.id,
            nom: projet.nom.clone(),
        }
    }
}
