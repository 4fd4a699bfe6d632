//! Catalogue entities - public courses and events

use chrono::{DateTime, Utc};

/// Course entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub date_creation: DateTime<Utc>,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub title: String,
    pub description: Option<String>,
    pub enabled: bool,
}

impl NewCourse {
    pub fn new(title: String, description: Option<String>) -> Self {
        Self {
            title,
            description,
            enabled: true,
        }
    }
}

/// Event entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: i64,
    pub titre: String,
    pub description: Option<String>,
    pub lieu: Option<String>,
    pub date_evenement: DateTime<Utc>,
    pub enabled: bool,
}

impl Event {
    #[inline]
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.date_evenement >= now
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub titre: String,
    pub description: Option<String>,
    pub lieu: Option<String>,
    pub date_evenement: DateTime<Utc>,
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_course_enabled() {
        assert!(NewCourse::new("Rust".into(), None).enabled);
    }

    #[test]
    fn test_event_upcoming() {
        let now = Utc::now();
        let event = Event {
            id: 1,
            titre: "Hackathon".into(),
            description: None,
            lieu: Some("Amphi A".into()),
            date_evenement: now + Duration::hours(2),
            enabled: true,
        };
        assert!(event.is_upcoming(now));
        assert!(!event.is_upcoming(now + Duration::hours(3)));
    }
}
