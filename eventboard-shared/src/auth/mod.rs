/// Authentication utilities
///
/// This module provides the authentication primitives for EventBoard:
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`jwt`]: Signed bearer token issuance and validation
/// - [`middleware`]: Request identity (`AuthContext`) and auth errors
///
/// # Example
///
/// ```no_run
/// use eventboard_shared::auth::password::{hash_password, verify_password};
/// use eventboard_shared::auth::jwt::{create_token, validate_token, Claims};
/// use uuid::Uuid;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("user_password")?;
/// assert!(verify_password("user_password", &hash)?);
///
/// let claims = Claims::new(Uuid::new_v4(), "luis@test.com", "Luis");
/// let token = create_token(&claims, "secret-key-at-least-32-bytes-long!!")?;
/// let validated = validate_token(&token, "secret-key-at-least-32-bytes-long!!")?;
/// assert_eq!(validated.email, "luis@test.com");
/// # Ok(())
/// # }
/// ```

pub mod jwt;
pub mod middleware;
pub mod password;
