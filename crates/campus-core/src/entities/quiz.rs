//! Quiz entity - a graded quiz attached to a cours

use chrono::{DateTime, Utc};

/// Quiz entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    pub id: i64,
    pub cours_id: i64,
    pub titre: String,
    pub description: String,
    pub questions: Vec<String>,
    pub date_creation: DateTime<Utc>,
    pub date_echeance: DateTime<Utc>,
    /// Duration in minutes
    pub duree: Option<i32>,
    pub score_max: i32,
    pub tentatives: i32,
}

impl Quiz {
    #[inline]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        now <= self.date_echeance
    }
}

/// Values for a quiz that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuiz {
    pub cours_id: i64,
    pub titre: String,
    pub description: String,
    pub questions: Vec<String>,
    pub date_echeance: DateTime<Utc>,
    pub duree: Option<i32>,
    pub score_max: i32,
    pub tentatives: i32,
}

/// Split questions entered one per line
pub fn parse_questions(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
