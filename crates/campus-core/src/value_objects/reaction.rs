//! Reactions - per-author emoji reactions stored as a JSON array on posts and comments
//!
//! A subject (post or comment) holds at most one reaction per author. The
//! toggle operation is the only way the list is mutated:
//!
//! - no entry for the author: a new entry is appended
//! - entry with the same kind: the entry is removed
//! - entry with another kind: the kind is replaced, `createdAt` is kept

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Timestamp format used inside stored reaction entries
pub const REACTION_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The fixed set of reaction kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Love,
    Haha,
    Wow,
    Sad,
    Angry,
}

impl ReactionKind {
    /// All kinds, in display order
    pub const ALL: [ReactionKind; 6] = [
        Self::Like,
        Self::Love,
        Self::Haha,
        Self::Wow,
        Self::Sad,
        Self::Angry,
    ];

    /// Wire name of the kind
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Love => "love",
            Self::Haha => "haha",
            Self::Wow => "wow",
            Self::Sad => "sad",
            Self::Angry => "angry",
        }
    }

    /// Parse a wire name; exact match only
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::InvalidReactionType(s.to_string()))
    }
}

/// One stored reaction
///
/// The kind is kept as a raw string so entries written by older versions
/// (or by hand) survive a read-modify-write cycle untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionEntry {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub author: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl ReactionEntry {
    /// Create a new entry stamped with `now`
    pub fn new(kind: ReactionKind, author: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            kind: kind.as_str().to_string(),
            author: author.into(),
            created_at: Some(now.format(REACTION_TIMESTAMP_FORMAT).to_string()),
        }
    }

    /// Parsed kind, `None` for unknown legacy values
    #[inline]
    pub fn reaction_kind(&self) -> Option<ReactionKind> {
        ReactionKind::parse(&self.kind)
    }
}

/// What a toggle did to the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    Switched { from: Option<ReactionKind> },
}

/// Ordered list of reactions attached to a subject
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReactionList(Vec<ReactionEntry>);

impl ReactionList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_entries(entries: Vec<ReactionEntry>) -> Self {
        Self(entries)
    }

    #[inline]
    pub fn entries(&self) -> &[ReactionEntry] {
        &self.0
    }

    pub fn into_entries(self) -> Vec<ReactionEntry> {
        self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of stored entries, legacy ones included
    #[inline]
    pub fn total(&self) -> usize {
        self.0.len()
    }

    /// The entry left by `author`, if any
    pub fn find_by_author(&self, author: &str) -> Option<&ReactionEntry> {
        self.0.iter().find(|entry| entry.author == author)
    }

    /// Apply a reaction from `author`
    ///
    /// The first entry whose author matches exactly is the one considered.
    pub fn toggle(&mut self, kind: ReactionKind, author: &str, now: DateTime<Utc>) -> ToggleOutcome {
        match self.0.iter().position(|entry| entry.author == author) {
            None => {
                self.0.push(ReactionEntry::new(kind, author, now));
                ToggleOutcome::Added
            }
            Some(index) if self.0[index].kind == kind.as_str() => {
                self.0.remove(index);
                ToggleOutcome::Removed
            }
            Some(index) => {
                let entry = &mut self.0[index];
                let from = entry.reaction_kind();
                entry.kind = kind.as_str().to_string();
                ToggleOutcome::Switched { from }
            }
        }
    }

    /// Per-kind counts; entries with an unknown kind are not counted
    pub fn counts(&self) -> ReactionCounts {
        let mut counts = ReactionCounts::default();
        for kind in self.0.iter().filter_map(ReactionEntry::reaction_kind) {
            counts.increment(kind);
        }
        counts
    }
}

/// Count per reaction kind; every kind is always present when serialized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionCounts {
    pub like: u32,
    pub love: u32,
    pub haha: u32,
    pub wow: u32,
    pub sad: u32,
    pub angry: u32,
}

impl ReactionCounts {
    pub fn get(&self, kind: ReactionKind) -> u32 {
        match kind {
            ReactionKind::Like => self.like,
            ReactionKind::Love => self.love,
            ReactionKind::Haha => self.haha,
            ReactionKind::Wow => self.wow,
            ReactionKind::Sad => self.sad,
            ReactionKind::Angry => self.angry,
        }
    }

    fn increment(&mut self, kind: ReactionKind) {
        let slot = match kind {
            ReactionKind::Like => &mut self.like,
            ReactionKind::Love => &mut self.love,
            ReactionKind::Haha => &mut self.haha,
            ReactionKind::Wow => &mut self.wow,
            ReactionKind::Sad => &mut self.sad,
            ReactionKind::Angry => &mut self.angry,
        };
        *slot += 1;
    }

    /// Sum over the known kinds
    pub fn sum(&self) -> u32 {
        ReactionKind::ALL.iter().map(|kind| self.get(*kind)).sum()
    }
}
