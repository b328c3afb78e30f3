/// Event endpoints
///
/// Reads are public; writes require a bearer token. The authenticated
/// caller's name fills in the organizer field when the payload omits it.
///
/// # Endpoints
///
/// - `POST /events` - Create event (bearer token)
/// - `GET /events` - Browse events, optionally filtered by category/status
/// - `GET /events/:id` - Fetch one event
/// - `PATCH /events/:id` - Partial update (bearer token)

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use eventboard_shared::{
    auth::middleware::AuthContext,
    models::event::{CreateEvent, Event, EventCategory, EventFilter, EventStatus, UpdateEvent},
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Create event request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventRequest {
    /// Event title
    #[validate(length(min = 1, max = 255, message = "Title must not be empty"))]
    pub title: String,

    /// Longer description
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,

    /// When the event takes place (ISO-8601)
    pub date: DateTime<Utc>,

    /// Where the event takes place
    #[validate(length(min = 1, max = 255, message = "Location must not be empty"))]
    pub location: String,

    /// Event category
    pub category: EventCategory,

    /// Organizer display name; defaults to the authenticated user's name
    #[validate(length(max = 255, message = "Organizer must be at most 255 characters"))]
    pub organizer: Option<String>,

    /// Publication status; defaults to draft
    pub status: Option<EventStatus>,
}

/// Partial update request
///
/// Only provided fields are merged into the stored event; last writer wins.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateEventRequest {
    /// New title
    #[validate(length(min = 1, max = 255, message = "Title must not be empty"))]
    pub title: Option<String>,

    /// New description
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: Option<String>,

    /// New date (ISO-8601)
    pub date: Option<DateTime<Utc>>,

    /// New location
    #[validate(length(min = 1, max = 255, message = "Location must not be empty"))]
    pub location: Option<String>,

    /// New category
    pub category: Option<EventCategory>,

    /// New organizer label
    #[validate(length(min = 1, max = 255, message = "Organizer must not be empty"))]
    pub organizer: Option<String>,

    /// New status
    pub status: Option<EventStatus>,
}

/// Listing filters, both optional, combined with AND semantics
#[derive(Debug, Default, Deserialize)]
pub struct ListEventsQuery {
    /// Restrict to this category
    pub category: Option<EventCategory>,

    /// Restrict to this status
    pub status: Option<EventStatus>,
}

/// Create event endpoint
///
/// Persists a new event. `status` defaults to `draft`; `organizer` defaults
/// to the authenticated caller's name.
///
/// # Endpoint
///
/// ```text
/// POST /events
/// Authorization: Bearer <token>
/// Content-Type: application/json
///
/// {
///   "title": "Rust Meetup",
///   "description": "Monthly get-together",
///   "date": "2026-04-10T18:00:00Z",
///   "location": "Madrid",
///   "category": "meetup"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed
/// - `401 Unauthorized`: Missing or invalid token
/// - `500 Internal Server Error`: Server error
pub async fn create_event(
    State(state): State<AppState>,
    auth: AuthContext,
    Json(req): Json<CreateEventRequest>,
) -> ApiResult<(StatusCode, Json<Event>)> {
    req.validate()?;

    let organizer = req
        .organizer
        .filter(|o| !o.is_empty())
        .unwrap_or_else(|| auth.name.clone());

    let event = Event::create(
        &state.db,
        CreateEvent {
            title: req.title,
            description: req.description,
            date: req.date,
            location: req.location,
            category: req.category,
            organizer,
            status: req.status.unwrap_or_default(),
        },
    )
    .await?;

    tracing::info!(
        event_id = %event.id,
        user_id = %auth.user_id,
        category = %event.category.as_str(),
        "Event created"
    );

    Ok((StatusCode::CREATED, Json(event)))
}

/// List events endpoint
///
/// Returns all events matching the optional `category` and `status` query
/// filters, sorted ascending by date.
///
/// # Endpoint
///
/// ```text
/// GET /events?category=talk&status=confirmed
/// ```
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> ApiResult<Json<Vec<Event>>> {
    let events = Event::find_filtered(
        &state.db,
        EventFilter {
            category: query.category,
            status: query.status,
        },
    )
    .await?;

    Ok(Json(events))
}

/// Fetch one event endpoint
///
/// # Endpoint
///
/// ```text
/// GET /events/:id
/// ```
///
/// # Errors
///
/// - `404 Not Found`: No event with that id; the message contains the id
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Event>> {
    let event = Event::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Event {} not found", id)))?;

    Ok(Json(event))
}

/// Partial update endpoint
///
/// Merges the provided fields into the stored event. There is no
/// optimistic-concurrency check; the last writer wins.
///
/// # Endpoint
///
/// ```text
/// PATCH /events/:id
/// Authorization: Bearer <token>
/// Content-Type: application/json
///
/// { "status": "confirmed" }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: No event with that id
pub async fn update_event(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEventRequest>,
) -> ApiResult<Json<Event>> {
    req.validate()?;

    let event = Event::update(
        &state.db,
        id,
        UpdateEvent {
            title: req.title,
            description: req.description,
            date: req.date,
            location: req.location,
            category: req.category,
            organizer: req.organizer,
            status: req.status,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("Event {} not found", id)))?;

    tracing::info!(event_id = %event.id, user_id = %auth.user_id, "Event updated");

    Ok(Json(event))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_create() -> CreateEventRequest {
        CreateEventRequest {
            title: "Rust Meetup".to_string(),
            description: "Monthly get-together".to_string(),
            date: "2026-04-10T18:00:00Z".parse().unwrap(),
            location: "Madrid".to_string(),
            category: EventCategory::Meetup,
            organizer: None,
            status: None,
        }
    }

    #[test]
    fn test_create_event_request_validation() {
        assert!(sample_create().validate().is_ok());

        let empty_title = CreateEventRequest {
            title: "".to_string(),
            ..sample_create()
        };
        assert!(empty_title.validate().is_err());

        let empty_location = CreateEventRequest {
            location: "".to_string(),
            ..sample_create()
        };
        assert!(empty_location.validate().is_err());
    }

    #[test]
    fn test_create_request_parses_iso_dates() {
        let req: CreateEventRequest = serde_json::from_value(serde_json::json!({
            "title": "Talk",
            "description": "A talk",
            "date": "2026-04-15T10:00:00Z",
            "location": "Online",
            "category": "talk"
        }))
        .unwrap();

        assert_eq!(req.category, EventCategory::Talk);
        assert!(req.status.is_none());
        assert!(req.organizer.is_none());

        // Malformed dates are rejected at deserialization time
        let bad: Result<CreateEventRequest, _> = serde_json::from_value(serde_json::json!({
            "title": "Talk",
            "description": "A talk",
            "date": "next tuesday",
            "location": "Online",
            "category": "talk"
        }));
        assert!(bad.is_err());
    }

    #[test]
    fn test_update_request_all_fields_optional() {
        let req: UpdateEventRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(req.validate().is_ok());
        assert!(req.title.is_none());

        let req: UpdateEventRequest =
            serde_json::from_value(serde_json::json!({"status": "confirmed"})).unwrap();
        assert_eq!(req.status, Some(EventStatus::Confirmed));
    }

    #[test]
    fn test_list_query_parses_filters() {
        let q: ListEventsQuery = serde_json::from_value(serde_json::json!({
            "category": "workshop",
            "status": "draft"
        }))
        .unwrap();

        assert_eq!(q.category, Some(EventCategory::Workshop));
        assert_eq!(q.status, Some(EventStatus::Draft));
    }
}
