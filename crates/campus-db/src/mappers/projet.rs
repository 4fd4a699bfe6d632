//! Projet and Tache entity <-> model mapper

use campus_core::entities::{NewTache, Projet, ProjetRef, Tache, TacheWithProjet};
use campus_core::value_objects::{Priorite, Statut};

use crate::models::{ProjetModel, TacheModel, TacheWithProjetModel};

/// Convert database statut string to Statut enum
fn parse_statut(value: &str) -> Statut {
    Statut::parse(value).unwrap_or_default()
}

/// Convert database priority to Priorite enum
fn parse_priorite(value: i32) -> Priorite {
    Priorite::from_value(value).unwrap_or_default()
}

/// Convert ProjetModel to Projet entity
impl From<ProjetModel> for Projet {
    fn from(model: ProjetModel) -> Self {
        Projet {
            id: model.id,
            nom: model.nom,
            description: model.description,
            date_creation: model.date_creation,
            enabled: model.enabled,
        }
    }
}

/// Convert TacheModel to Tache entity
impl From<TacheModel> for Tache {
    fn from(model: TacheModel) -> Self {
        Tache {
            id: model.id,
            projet_id: model.projet_id,
            titre: model.titre,
            description: model.description,
            statut: parse_statut(&model.statut),
            priorite: parse_priorite(model.priorite),
            date_creation: model.date_creation,
            enabled: model.enabled,
        }
    }
}

impl From<TacheWithProjetModel> for TacheWithProjet {
    fn from(model: TacheWithProjetModel) -> Self {
        let projet = ProjetRef {
            id: model.tache.projet_id,
            nom: model.projet_nom,
        };
        TacheWithProjet {
            tache: Tache::from(model.tache),
            projet,
        }
    }
}

/// Tache values in their column representation
pub struct TacheValues<'a> {
    pub projet_id: i64,
    pub titre: &'a str,
    pub description: &'a str,
    pub statut: &'static str,
    pub priorite: i32,
    pub enabled: bool,
}

impl<'a> TacheValues<'a> {
    pub fn from_new(tache: &'a NewTache) -> Self {
        Self {
            projet_id: tache.projet_id,
            titre: &tache.titre,
            description: &tache.description,
            statut: tache.statut.as_str(),
            priorite: tache.priorite.value(),
            enabled: tache.enabled,
        }
    }

    pub fn from_entity(tache: &'a Tache) -> Self {
        Self {
            projet_id: tache.projet_id,
            titre: &tache.titre,
            description: &tache.description,
            statut: tache.statut.as_str(),
            priorite: tache.priorite.value(),
            enabled: tache.enabled,
        }
    }
}
