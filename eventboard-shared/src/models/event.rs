/// Event model and database operations
///
/// Events are the core entity of EventBoard: created by authenticated users,
/// browsed and filtered by anyone. Status is a plain label — no state
/// machine restricts transitions, any status may be set at creation or
/// update time.
///
/// # Schema
///
/// ```sql
/// CREATE TYPE event_category AS ENUM ('workshop', 'meetup', 'talk', 'social');
/// CREATE TYPE event_status AS ENUM ('draft', 'confirmed', 'cancelled');
///
/// CREATE TABLE events (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     title VARCHAR(255) NOT NULL,
///     description TEXT NOT NULL,
///     date TIMESTAMPTZ NOT NULL,
///     location VARCHAR(255) NOT NULL,
///     category event_category NOT NULL,
///     organizer VARCHAR(255) NOT NULL,
///     status event_status NOT NULL DEFAULT 'draft',
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use eventboard_shared::models::event::{CreateEvent, Event, EventCategory, EventFilter, EventStatus};
/// use eventboard_shared::db::pool::{create_pool, DatabaseConfig};
/// use chrono::Utc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let event = Event::create(&pool, CreateEvent {
///     title: "Rust Meetup".to_string(),
///     description: "Monthly get-together".to_string(),
///     date: Utc::now(),
///     location: "Madrid".to_string(),
///     category: EventCategory::Meetup,
///     organizer: "Luis".to_string(),
///     status: EventStatus::Draft,
/// }).await?;
///
/// // Browse confirmed talks
/// let talks = Event::find_filtered(&pool, EventFilter {
///     category: Some(EventCategory::Talk),
///     status: Some(EventStatus::Confirmed),
/// }).await?;
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Event category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "event_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    /// Hands-on workshop
    Workshop,

    /// Community meetup
    Meetup,

    /// Single-speaker talk
    Talk,

    /// Social gathering
    Social,
}

impl EventCategory {
    /// Category as its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Workshop => "workshop",
            EventCategory::Meetup => "meetup",
            EventCategory::Talk => "talk",
            EventCategory::Social => "social",
        }
    }
}

/// Event publication status
///
/// Defaults to `Draft` when unspecified at creation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "event_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Not yet published
    #[default]
    Draft,

    /// Confirmed and public
    Confirmed,

    /// Cancelled
    Cancelled,
}

impl EventStatus {
    /// Status as its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Draft => "draft",
            EventStatus::Confirmed => "confirmed",
            EventStatus::Cancelled => "cancelled",
        }
    }
}

/// Event model representing a listed event
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    /// Unique event ID
    pub id: Uuid,

    /// Event title
    pub title: String,

    /// Longer description
    pub description: String,

    /// When the event takes place
    pub date: DateTime<Utc>,

    /// Where the event takes place
    pub location: String,

    /// Event category
    pub category: EventCategory,

    /// Organizer display name
    ///
    /// A plain label — there is no ownership link back to the creating user.
    pub organizer: String,

    /// Publication status
    pub status: EventStatus,

    /// When the event was created
    pub created_at: DateTime<Utc>,

    /// When the event was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEvent {
    /// Event title
    pub title: String,

    /// Longer description
    pub description: String,

    /// When the event takes place
    pub date: DateTime<Utc>,

    /// Where the event takes place
    pub location: String,

    /// Event category
    pub category: EventCategory,

    /// Organizer display name
    pub organizer: String,

    /// Publication status
    #[serde(default)]
    pub status: EventStatus,
}

/// Input for partially updating an event
///
/// Only non-None fields are written; the merge is last-writer-wins with no
/// optimistic-concurrency check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEvent {
    /// New title
    pub title: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New date
    pub date: Option<DateTime<Utc>>,

    /// New location
    pub location: Option<String>,

    /// New category
    pub category: Option<EventCategory>,

    /// New organizer label
    pub organizer: Option<String>,

    /// New status
    pub status: Option<EventStatus>,
}

impl UpdateEvent {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.location.is_none()
            && self.category.is_none()
            && self.organizer.is_none()
            && self.status.is_none()
    }
}

/// Listing filter: optional category and status, combined with AND
/// semantics when both are present
#[derive(Debug, Clone, Copy, Default)]
pub struct EventFilter {
    /// Restrict to this category
    pub category: Option<EventCategory>,

    /// Restrict to this status
    pub status: Option<EventStatus>,
}

impl Event {
    /// Creates a new event
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn create(pool: &PgPool, data: CreateEvent) -> Result<Self, sqlx::Error> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (title, description, date, location, category, organizer, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, description, date, location, category, organizer, status,
                      created_at, updated_at
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.date)
        .bind(data.location)
        .bind(data.category)
        .bind(data.organizer)
        .bind(data.status)
        .fetch_one(pool)
        .await?;

        Ok(event)
    }

    /// Finds an event by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, title, description, date, location, category, organizer, status,
                   created_at, updated_at
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(event)
    }

    /// Lists events matching the filter, sorted ascending by date
    ///
    /// Absent filter fields match everything; when both are present they
    /// must both match.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn find_filtered(pool: &PgPool, filter: EventFilter) -> Result<Vec<Self>, sqlx::Error> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, title, description, date, location, category, organizer, status,
                   created_at, updated_at
            FROM events
            WHERE ($1::event_category IS NULL OR category = $1)
              AND ($2::event_status IS NULL OR status = $2)
            ORDER BY date ASC
            "#,
        )
        .bind(filter.category)
        .bind(filter.status)
        .fetch_all(pool)
        .await?;

        Ok(events)
    }

    /// Merges the provided fields into an existing event
    ///
    /// The `updated_at` timestamp is always refreshed, even for an update
    /// that sets no fields.
    ///
    /// # Returns
    ///
    /// The updated event, or None if no event with `id` exists
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        data: UpdateEvent,
    ) -> Result<Option<Self>, sqlx::Error> {
        // Build the update statement from whichever fields are present
        let mut query = String::from("UPDATE events SET updated_at = NOW()");
        let mut bind_count = 1;

        if data.title.is_some() {
            bind_count += 1;
            query.push_str(&format!(", title = ${}", bind_count));
        }
        if data.description.is_some() {
            bind_count += 1;
            query.push_str(&format!(", description = ${}", bind_count));
        }
        if data.date.is_some() {
            bind_count += 1;
            query.push_str(&format!(", date = ${}", bind_count));
        }
        if data.location.is_some() {
            bind_count += 1;
            query.push_str(&format!(", location = ${}", bind_count));
        }
        if data.category.is_some() {
            bind_count += 1;
            query.push_str(&format!(", category = ${}", bind_count));
        }
        if data.organizer.is_some() {
            bind_count += 1;
            query.push_str(&format!(", organizer = ${}", bind_count));
        }
        if data.status.is_some() {
            bind_count += 1;
            query.push_str(&format!(", status = ${}", bind_count));
        }

        query.push_str(
            " WHERE id = $1 RETURNING id, title, description, date, location, category, \
             organizer, status, created_at, updated_at",
        );

        let mut q = sqlx::query_as::<_, Event>(&query).bind(id);

        if let Some(title) = data.title {
            q = q.bind(title);
        }
        if let Some(description) = data.description {
            q = q.bind(description);
        }
        if let Some(date) = data.date {
            q = q.bind(date);
        }
        if let Some(location) = data.location {
            q = q.bind(location);
        }
        if let Some(category) = data.category {
            q = q.bind(category);
        }
        if let Some(organizer) = data.organizer {
            q = q.bind(organizer);
        }
        if let Some(status) = data.status {
            q = q.bind(status);
        }

        let event = q.fetch_optional(pool).await?;

        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults_to_draft() {
        assert_eq!(EventStatus::default(), EventStatus::Draft);

        // A create payload without an explicit status deserializes as draft
        let create: CreateEvent = serde_json::from_value(serde_json::json!({
            "title": "Rust Meetup",
            "description": "Monthly get-together",
            "date": "2026-04-10T18:00:00Z",
            "location": "Madrid",
            "category": "meetup",
            "organizer": "Luis"
        }))
        .unwrap();

        assert_eq!(create.status, EventStatus::Draft);
    }

    #[test]
    fn test_category_wire_format() {
        assert_eq!(
            serde_json::to_string(&EventCategory::Workshop).unwrap(),
            "\"workshop\""
        );
        assert_eq!(
            serde_json::from_str::<EventCategory>("\"talk\"").unwrap(),
            EventCategory::Talk
        );
        assert_eq!(EventCategory::Social.as_str(), "social");
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&EventStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
        assert_eq!(
            serde_json::from_str::<EventStatus>("\"confirmed\"").unwrap(),
            EventStatus::Confirmed
        );
        assert_eq!(EventStatus::Draft.as_str(), "draft");
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!(serde_json::from_str::<EventCategory>("\"concert\"").is_err());
    }

    #[test]
    fn test_update_event_is_empty() {
        assert!(UpdateEvent::default().is_empty());

        let update = UpdateEvent {
            status: Some(EventStatus::Confirmed),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    // Integration tests for database operations are in eventboard-api/tests/
}
