/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use eventboard_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = eventboard_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{config::Config, graphql, middleware::security::SecurityHeadersLayer, routes};
use axum::{
    extract::FromRef,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use eventboard_shared::auth::middleware::JwtSecret;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,

    /// GraphQL schema with the pool attached as context data
    pub schema: graphql::EventBoardSchema,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        let schema = graphql::build_schema(db.clone());
        Self {
            db,
            config: Arc::new(config),
            schema,
        }
    }

    /// Gets the token signing secret
    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt.secret
    }
}

/// Lets the bearer-token guard pull the signing secret out of the state
impl FromRef<AppState> for JwtSecret {
    fn from_ref(state: &AppState) -> Self {
        JwtSecret(state.config.jwt.secret.clone())
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health              # Health check (public)
/// ├── /auth/
/// │   ├── POST /register   # Create account, returns token + user
/// │   └── POST /login      # Authenticate, returns token + user
/// ├── /events/
/// │   ├── GET  /           # Browse/filter (public)
/// │   ├── POST /           # Create (bearer token)
/// │   ├── GET  /:id        # Fetch one (public)
/// │   └── PATCH /:id       # Partial update (bearer token)
/// └── /graphql             # GraphQL read surface (public)
/// ```
///
/// Protection is per-handler: protected handlers declare an `AuthContext`
/// argument and the guard extractor rejects unauthenticated requests with
/// 401 before the handler body runs.
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Security headers
/// 2. CORS (tower-http CorsLayer)
/// 3. Logging (tower-http TraceLayer)
pub fn build_router(state: AppState) -> Router {
    // Auth routes (public, no auth required)
    let auth_routes = Router::new()
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login));

    // Event routes; reads are public, writes take the guard extractor
    let event_routes = Router::new()
        .route(
            "/",
            get(routes::events::list_events).post(routes::events::create_event),
        )
        .route(
            "/:id",
            get(routes::events::get_event).patch(routes::events::update_event),
        );

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        // Development mode: permissive CORS
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true)
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/graphql", post(graphql::graphql_handler))
        .nest("/auth", auth_routes)
        .nest("/events", event_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .layer(SecurityHeadersLayer::new())
        .with_state(state)
}
