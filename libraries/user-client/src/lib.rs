//! User Service Client
//!
//! HTTP client library for the user service API.
//!
//! # Features
//!
//! - **CRUD**: create, read, update, delete and page through users
//! - **Probes**: liveness (`/health`) and readiness (`/status`)
//! - **Environments**: development, staging and production base URLs,
//!   or an explicit `APP_URL`
//!
//! Failures carry the HTTP status and body so callers can tell not-found,
//! validation and infrastructure errors apart.
//!
//! # Example
//!
//! ```ignore
//! use user_client::{ClientConfig, UserServiceClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = UserServiceClient::new(ClientConfig::from_env()?)?;
//!
//!     let user = client
//!         .users()
//!         .create_user(&serde_json::json!({
//!             "email": "a@b.com",
//!             "first_name": "A",
//!             "last_name": "B",
//!         }))
//!         .await?;
//!
//!     match client.users().get_user(user.id + 1000).await {
//!         Err(e) if e.is_not_found() => println!("no such user"),
//!         other => println!("{other:?}"),
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;
mod users;

// Re-export main types
pub use client::UserServiceClient;
pub use error::{ClientError, Result};
pub use types::{ClientConfig, Environment, ErrorBody, HealthStatus};
pub use users::UsersClient;

// Re-export the wire shapes shared with the server
pub use user_core::{FieldError, Page, PageParams, User};
