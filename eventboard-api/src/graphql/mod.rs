/// GraphQL read surface
///
/// Mirrors the REST read paths as GraphQL queries, mounted at
/// `POST /graphql`:
///
/// - `events(category, status)` — browse with optional filters, sorted
///   ascending by date
/// - `event(id)` — fetch one event, erroring with the id when unknown
///
/// The schema is query-only; writes go through the REST surface. The
/// connection pool travels as schema context data, so resolvers hit the
/// same store the REST handlers do.
///
/// # Example query
///
/// ```text
/// {
///   events(category: TALK, status: CONFIRMED) {
///     id
///     title
///     date
///     organizer
///   }
/// }
/// ```

use crate::app::AppState;
use async_graphql::{Context, EmptyMutation, EmptySubscription, Enum, Object, Result, Schema, SimpleObject, ID};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use chrono::{DateTime, Utc};
use eventboard_shared::models::event as model;
use sqlx::PgPool;
use uuid::Uuid;

/// The executable schema type
pub type EventBoardSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Event category, exposed with GraphQL-conventional constant-case values
#[derive(Enum, Debug, Copy, Clone, Eq, PartialEq)]
pub enum EventCategory {
    Workshop,
    Meetup,
    Talk,
    Social,
}

impl From<EventCategory> for model::EventCategory {
    fn from(value: EventCategory) -> Self {
        match value {
            EventCategory::Workshop => model::EventCategory::Workshop,
            EventCategory::Meetup => model::EventCategory::Meetup,
            EventCategory::Talk => model::EventCategory::Talk,
            EventCategory::Social => model::EventCategory::Social,
        }
    }
}

impl From<model::EventCategory> for EventCategory {
    fn from(value: model::EventCategory) -> Self {
        match value {
            model::EventCategory::Workshop => EventCategory::Workshop,
            model::EventCategory::Meetup => EventCategory::Meetup,
            model::EventCategory::Talk => EventCategory::Talk,
            model::EventCategory::Social => EventCategory::Social,
        }
    }
}

/// Event status
#[derive(Enum, Debug, Copy, Clone, Eq, PartialEq)]
pub enum EventStatus {
    Draft,
    Confirmed,
    Cancelled,
}

impl From<EventStatus> for model::EventStatus {
    fn from(value: EventStatus) -> Self {
        match value {
            EventStatus::Draft => model::EventStatus::Draft,
            EventStatus::Confirmed => model::EventStatus::Confirmed,
            EventStatus::Cancelled => model::EventStatus::Cancelled,
        }
    }
}

impl From<model::EventStatus> for EventStatus {
    fn from(value: model::EventStatus) -> Self {
        match value {
            model::EventStatus::Draft => EventStatus::Draft,
            model::EventStatus::Confirmed => EventStatus::Confirmed,
            model::EventStatus::Cancelled => EventStatus::Cancelled,
        }
    }
}

/// An event as exposed through GraphQL
#[derive(SimpleObject, Debug, Clone)]
pub struct EventObject {
    /// Event ID
    pub id: ID,

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
    pub status: EventStatus,

    /// When the event was created
    pub created_at: DateTime<Utc>,

    /// When the event was last updated
    pub updated_at: DateTime<Utc>,
}

impl From<model::Event> for EventObject {
    fn from(event: model::Event) -> Self {
        Self {
            id: ID(event.id.to_string()),
            title: event.title,
            description: event.description,
            date: event.date,
            location: event.location,
            category: event.category.into(),
            organizer: event.organizer,
            status: event.status.into(),
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

/// Root of the query schema
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Events matching the optional filters, sorted ascending by date
    async fn events(
        &self,
        ctx: &Context<'_>,
        category: Option<EventCategory>,
        status: Option<EventStatus>,
    ) -> Result<Vec<EventObject>> {
        let pool = ctx.data::<PgPool>()?;

        let events = model::Event::find_filtered(
            pool,
            model::EventFilter {
                category: category.map(Into::into),
                status: status.map(Into::into),
            },
        )
        .await?;

        Ok(events.into_iter().map(Into::into).collect())
    }

    /// One event by id
    async fn event(&self, ctx: &Context<'_>, id: ID) -> Result<EventObject> {
        let pool = ctx.data::<PgPool>()?;

        let event_id = Uuid::parse_str(&id)
            .map_err(|_| async_graphql::Error::new(format!("Invalid event id: {}", id.as_str())))?;

        let event = model::Event::find_by_id(pool, event_id)
            .await?
            .ok_or_else(|| async_graphql::Error::new(format!("Event {} not found", event_id)))?;

        Ok(event.into())
    }
}

/// Builds the schema with the connection pool attached as context data
pub fn build_schema(db: PgPool) -> EventBoardSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(db)
        .finish()
}

/// Axum handler bridging HTTP requests into the schema
pub async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_conversion_roundtrip() {
        for category in [
            model::EventCategory::Workshop,
            model::EventCategory::Meetup,
            model::EventCategory::Talk,
            model::EventCategory::Social,
        ] {
            let gql: EventCategory = category.into();
            let back: model::EventCategory = gql.into();
            assert_eq!(back, category);
        }
    }

    #[test]
    fn test_status_conversion_roundtrip() {
        for status in [
            model::EventStatus::Draft,
            model::EventStatus::Confirmed,
            model::EventStatus::Cancelled,
        ] {
            let gql: EventStatus = status.into();
            let back: model::EventStatus = gql.into();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn test_event_object_from_model() {
        let id = Uuid::new_v4();
        let event = model::Event {
            id,
            title: "Rust Meetup".to_string(),
            description: "Monthly get-together".to_string(),
            date: Utc::now(),
            location: "Madrid".to_string(),
            category: model::EventCategory::Meetup,
            organizer: "Luis".to_string(),
            status: model::EventStatus::Draft,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let object: EventObject = event.into();
        assert_eq!(object.id.as_str(), id.to_string());
        assert_eq!(object.category, EventCategory::Meetup);
        assert_eq!(object.status, EventStatus::Draft);
    }
}
