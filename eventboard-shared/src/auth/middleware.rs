/// Bearer-token guard for protected routes
///
/// The guard is an Axum extractor: a protected handler declares an
/// [`AuthContext`] argument and the extractor validates the
/// `Authorization: Bearer <token>` header before the handler body runs.
/// Public handlers simply omit the argument. On success the decoded
/// identity is available to the handler — for example, to auto-fill the
/// organizer of a newly created event with the caller's name.
///
/// Missing, malformed, invalid, and expired credentials all surface as 401;
/// the response does not reveal which check failed.
///
/// # Example
///
/// ```no_run
/// use axum::{routing::post, Router};
/// use eventboard_shared::auth::middleware::{AuthContext, JwtSecret};
///
/// async fn protected_handler(auth: AuthContext) -> String {
///     format!("Hello, {}!", auth.name)
/// }
///
/// // Any state that can hand out a JwtSecret works
/// let app: Router<JwtSecret> = Router::new().route("/protected", post(protected_handler));
/// ```

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::jwt::{validate_token, Claims};

/// Token-signing secret, extractable from application state
///
/// The API server's state implements `FromRef<AppState> for JwtSecret` so
/// the guard can validate tokens without knowing the full state type.
#[derive(Debug, Clone)]
pub struct JwtSecret(pub String);

/// Authenticated identity attached to a request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthContext {
    /// Authenticated user ID
    pub user_id: Uuid,

    /// User email address
    pub email: String,

    /// User display name
    pub name: String,
}

impl AuthContext {
    /// Creates an auth context from validated token claims
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email.clone(),
            name: claims.name.clone(),
        }
    }
}

/// Error type for the bearer-token guard
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Authorization header absent
    #[error("Missing credentials")]
    MissingCredentials,

    /// Header present but not a Bearer token
    #[error("Expected Bearer token")]
    InvalidFormat,

    /// Token failed signature, expiry, or issuer checks
    #[error("Invalid or expired token")]
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, self.to_string()).into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthContext
where
    JwtSecret: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let JwtSecret(secret) = JwtSecret::from_ref(state);

        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AuthError::MissingCredentials)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidFormat)?;

        let claims = validate_token(token, &secret).map_err(|_| AuthError::InvalidToken)?;

        Ok(AuthContext::from_claims(&claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::{create_token, Claims};
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt as _;

    async fn protected(auth: AuthContext) -> String {
        auth.name
    }

    fn test_app(secret: &str) -> Router {
        Router::new()
            .route("/protected", get(protected))
            .with_state(JwtSecret(secret.to_string()))
    }

    #[test]
    fn test_auth_context_from_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, "luis@test.com", "Luis");

        let ctx = AuthContext::from_claims(&claims);
        assert_eq!(ctx.user_id, user_id);
        assert_eq!(ctx.email, "luis@test.com");
        assert_eq!(ctx.name, "Luis");
    }

    #[tokio::test]
    async fn test_guard_rejects_missing_header() {
        let response = test_app("secret")
            .oneshot(Request::builder().uri("/protected").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_guard_rejects_non_bearer_header() {
        let response = test_app("secret")
            .oneshot(
                Request::builder()
                    .uri("/protected")
                    .header("authorization", "Basic abc123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_guard_rejects_wrong_secret() {
        let claims = Claims::new(Uuid::new_v4(), "a@b.com", "A");
        let token = create_token(&claims, "other-secret").unwrap();

        let response = test_app("secret")
            .oneshot(
                Request::builder()
                    .uri("/protected")
                    .header("authorization", format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_guard_accepts_valid_token() {
        let claims = Claims::new(Uuid::new_v4(), "luis@test.com", "Luis");
        let token = create_token(&claims, "secret").unwrap();

        let response = test_app("secret")
            .oneshot(
                Request::builder()
                    .uri("/protected")
                    .header("authorization", format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Luis");
    }
}
