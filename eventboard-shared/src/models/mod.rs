/// Database models for EventBoard
///
/// This module contains all database models and their CRUD operations.
/// Each model exposes the narrow operation set the services need — nothing
/// more: lookups by id/email, inserts, a filtered listing, and a partial
/// update.
///
/// # Models
///
/// - `user`: User accounts and credentials
/// - `event`: Listed events with category and status
///
/// # Example
///
/// ```no_run
/// use eventboard_shared::models::user::{User, CreateUser};
/// use eventboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let new_user = CreateUser {
///     name: "Luis".to_string(),
///     email: "luis@test.com".to_string(),
///     password_hash: "$argon2id$...".to_string(),
/// };
///
/// let user = User::create(&pool, new_user).await?;
/// # Ok(())
/// # }
/// ```

pub mod event;
pub mod user;
