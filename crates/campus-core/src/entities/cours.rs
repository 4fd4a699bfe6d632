//! Cours entity - a published course with optional content

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Kind of attached course content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeContenu {
    Pdf,
    Video,
    Texte,
}

impl TypeContenu {
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Video => "video",
            Self::Texte => "texte",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pdf" => Some(Self::Pdf),
            "video" => Some(Self::Video),
            "texte" => Some(Self::Texte),
            _ => None,
        }
    }
}

impl fmt::Display for TypeContenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeContenu {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::InvalidContentType(s.to_string()))
    }
}

/// Cours entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cours {
    pub id: i64,
    pub titre: String,
    pub description: String,
    pub date_publication: DateTime<Utc>,
    pub date_creation: DateTime<Utc>,
    pub visibilite: bool,
    pub contenu: Option<String>,
    pub type_contenu: Option<TypeContenu>,
    pub url_contenu: Option<String>,
}

impl Cours {
    /// Visible and already published at `now`
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        self.visibilite && self.date_publication <= now
    }
}

/// Values for a cours that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCours {
    pub titre: String,
    pub description: String,
    pub date_publication: DateTime<Utc>,
    pub visibilite: bool,
    pub contenu: Option<String>,
    pub type_contenu: Option<TypeContenu>,
    pub url_contenu: Option<String>,
}
