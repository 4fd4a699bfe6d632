//! Catalogue service
//!
//! Public course and event listings.

use campus_core::entities::{NewCourse, NewEvent};
use campus_core::value_objects::non_empty;
use tracing::{info, instrument};

use crate::dto::{CourseRequest, CourseResponse, EventRequest, EventResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Catalogue service
pub struct CatalogueService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CatalogueService<'a> {
    /// Create a new CatalogueService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Enabled courses, newest first
    #[instrument(skip(self))]
    pub async fn courses(&self) -> ServiceResult<Vec<CourseResponse>> {
        let courses = self.ctx.course_repo().list_enabled().await?;
        Ok(courses.into_iter().map(CourseResponse::from).collect())
    }

    #[instrument(skip(self, request))]
    pub async fn create_course(&self, request: CourseRequest) -> ServiceResult<CourseResponse> {
        let course = NewCourse::new(
            request.title.trim().to_string(),
            non_empty(request.description.as_deref()),
        );
        let course = self.ctx.course_repo().create(&course).await?;
        info!(course_id = course.id, "Course created");
        Ok(CourseResponse::from(course))
    }

    /// Enabled events, soonest first
    #[instrument(skip(self))]
    pub async fn events(&self) -> ServiceResult<Vec<EventResponse>> {
        let events = self.ctx.event_repo().list_enabled().await?;
        Ok(events.into_iter().map(EventResponse::from).collect())
    }

    #[instrument(skip(self, request))]
    pub async fn create_event(&self, request: EventRequest) -> ServiceResult<EventResponse> {
        let event = NewEvent {
            titre: request.titre.trim().to_string(),
            description: non_empty(request.description.as_deref()),
            lieu: non_empty(request.lieu.as_deref()),
            date_evenement: request.date_evenement,
            enabled: true,
        };
        let event = self.ctx.event_repo().create(&event).await?;
        info!(event_id = event.id, "Event created");
        Ok(EventResponse::from(event))
    }
}
