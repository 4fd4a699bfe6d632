//! Test fixtures and data generators
//!
//! Request bodies accepted by the API, made unique per call so tests can
//! share one database.

use chrono::{Duration, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
///
/// Mixes in the process id so parallel test binaries do not collide.
pub fn unique_suffix() -> u64 {
    u64::from(std::process::id()) * 100_000 + COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Letters-only marker for fields that reject digits
pub fn unique_letters() -> String {
    let mut n = unique_suffix();
    let mut out = String::new();
    while n > 0 {
        out.push(char::from(b'a' + (n % 26) as u8));
        n /= 26;
    }
    out
}

pub fn projet_request() -> Value {
    json!({
        "nom": format!("Projet {} campus", unique_suffix()),
        "description": "Refonte du portail étudiant du campus",
    })
}

pub fn tache_request(projet_id: i64) -> Value {
    json!({
        "projet_id": projet_id,
        "titre": format!("Tache {}", unique_suffix()),
        "description": "Préparer la maquette",
        "statut": "En cours",
        "priorite": 3,
    })
}

/// Forum post body
#[derive(Debug, Clone, Serialize)]
pub struct PostRequest {
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub tags: Option<String>,
}

impl PostRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Sujet {suffix}"),
            content: "Quelqu'un a les notes du cours de mardi ?".to_string(),
            author: Some(format!("auteur{suffix}")),
            tags: Some("rust, examens".to_string()),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

pub fn cours_request() -> Value {
    json!({
        "titre": format!("Introduction {}", unique_letters()),
        "description": "Les bases de la programmation systeme, pas a pas.",
        "date_publication": (Utc::now() + Duration::days(1)).to_rfc3339(),
        "visibilite": true,
        "contenu": "Chapitre un",
        "type_contenu": "pdf",
        "url_contenu": "https://campus.test/cours.pdf",
    })
}

pub fn quiz_request(cours_id: i64) -> Value {
    json!({
        "cours_id": cours_id,
        "titre": format!("Quiz {}", unique_letters()),
        "description": "Verifier les acquis du premier chapitre.",
        "questions": "Qu'est-ce qu'un pointeur ?\n\nQu'est-ce qu'un thread ?\nQu'est-ce qu'une closure ?",
        "date_echeance": (Utc::now() + Duration::days(7)).to_rfc3339(),
        "duree": 30,
        "score_max": 20,
        "tentatives": 2,
    })
}

pub fn course_request() -> Value {
    json!({
        "title": format!("Course {}", unique_suffix()),
        "description": "Weekly workshop",
    })
}

pub fn event_request(days_ahead: i64) -> Value {
    json!({
        "titre": format!("Evenement {}", unique_suffix()),
        "lieu": "Amphi A",
        "date_evenement": (Utc::now() + Duration::days(days_ahead)).to_rfc3339(),
    })
}
