//! Course and event catalogue handlers

use axum::{extract::State, Json};
use campus_service::dto::{ApiResponse, CourseRequest, CourseResponse, EventRequest, EventResponse};
use campus_service::CatalogueService;

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /courses
pub async fn list_courses(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<CourseResponse>>>> {
    let courses = CatalogueService::new(state.service_context()).courses().await?;
    Ok(Json(ApiResponse::new(courses)))
}

/// POST /courses
pub async fn create_course(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CourseRequest>,
) -> ApiResult<Created<CourseResponse>> {
    let response = CatalogueService::new(state.service_context())
        .create_course(request)
        .await?;
    Ok(Created(response))
}

/// Upcoming events in date order
///
/// GET /events
pub async fn list_events(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<EventResponse>>>> {
    let events = CatalogueService::new(state.service_context()).events().await?;
    Ok(Json(ApiResponse::new(events)))
}

/// POST /events
pub async fn create_event(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<EventRequest>,
) -> ApiResult<Created<EventResponse>> {
    let response = CatalogueService::new(state.service_context())
        .create_event(request)
        .await?;
    Ok(Created(response))
}
