//! Task status and priority

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Workflow status of a tache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Statut {
    #[default]
    #[serde(rename = "À faire")]
    AFaire,
    #[serde(rename = "En cours")]
    EnCours,
    #[serde(rename = "Terminée")]
    Terminee,
}

impl Statut {
    pub const ALL: [Statut; 3] = [Self::AFaire, Self::EnCours, Self::Terminee];

    /// Stored and displayed label
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AFaire => "À faire",
            Self::EnCours => "En cours",
            Self::Terminee => "Terminée",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    #[inline]
    pub fn is_done(self) -> bool {
        self == Self::Terminee
    }
}

impl fmt::Display for Statut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Statut {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::InvalidStatut(s.to_string()))
    }
}

/// Priority of a tache, stored as 1..=3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(i32)]
pub enum Priorite {
    Basse = 1,
    #[default]
    Normale = 2,
    Haute = 3,
}

impl Priorite {
    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            1 => Some(Self::Basse),
            2 => Some(Self::Normale),
            3 => Some(Self::Haute),
            _ => None,
        }
    }

    #[inline]
    pub fn value(self) -> i32 {
        self as i32
    }

    #[inline]
    pub fn label(self) -> &'static str {
        label_for(self.value())
    }
}

impl TryFrom<i32> for Priorite {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or(DomainError::InvalidPriorite(value))
    }
}

impl Serialize for Priorite {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.value())
    }
}

impl<'de> Deserialize<'de> for Priorite {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i32::deserialize(deserializer)?;
        Self::from_value(value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid priorite: {value}")))
    }
}

/// Display label for a raw priority value
pub fn label_for(value: i32) -> &'static str {
    match value {
        1 => "Basse",
        2 => "Normale",
        3 => "Haute",
        _ => "Inconnue",
    }
}
