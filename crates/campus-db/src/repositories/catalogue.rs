//! PostgreSQL implementations of the public catalogue repositories

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use campus_core::entities::{Course, Event, NewCourse, NewEvent};
use campus_core::traits::{CourseRepository, EventRepository, RepoResult};

use crate::models::{CourseModel, EventModel};

use super::error::map_db_error;

/// PostgreSQL implementation of CourseRepository
#[derive(Clone)]
pub struct PgCourseRepository {
    pool: PgPool,
}

impl PgCourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    #[instrument(skip(self))]
    async fn list_enabled(&self) -> RepoResult<Vec<Course>> {
        let results = sqlx::query_as::<_, CourseModel>(
            r"
            SELECT id, title, description, date_creation, enabled
            FROM course
            WHERE enabled = TRUE
            ORDER BY date_creation DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Course::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, course: &NewCourse) -> RepoResult<Course> {
        let model = sqlx::query_as::<_, CourseModel>(
            r"
            INSERT INTO course (title, description, enabled)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, date_creation, enabled
            ",
        )
        .bind(&course.title)
        .bind(&course.description)
        .bind(course.enabled)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Course::from(model))
    }
}

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn list_enabled(&self) -> RepoResult<Vec<Event>> {
        let results = sqlx::query_as::<_, EventModel>(
            r"
            SELECT id, titre, description, lieu, date_evenement, enabled
            FROM event
            WHERE enabled = TRUE
            ORDER BY date_evenement ASC, id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Event::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, event: &NewEvent) -> RepoResult<Event> {
        let model = sqlx::query_as::<_, EventModel>(
            r"
            INSERT INTO event (titre, description, lieu, date_evenement, enabled)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, titre, description, lieu, date_evenement, enabled
            ",
        )
        .bind(&event.titre)
        .bind(&event.description)
        .bind(&event.lieu)
        .bind(event.date_evenement)
        .bind(event.enabled)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Event::from(model))
    }
}
