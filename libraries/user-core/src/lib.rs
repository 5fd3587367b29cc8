//! User Service Core
//!
//! Platform-agnostic types, validation rules and traits shared by the
//! storage layer, the HTTP server and the client library.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `NewUser`, `UserChanges`
//! - **Validation**: typed field checks producing a structured error list
//! - **Pagination**: the `Page` envelope returned by the list endpoint
//! - **Core Traits**: `UserStore`, implemented by the persistence layer
//! - **Error Handling**: unified `UserError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use user_core::validation::validate_create;
//!
//! let payload = json!({
//!     "email": "a@b.com",
//!     "first_name": "A",
//!     "last_name": "B",
//! });
//!
//! let new_user = validate_create(payload.as_object().unwrap()).unwrap();
//! assert_eq!(new_user.email, "a@b.com");
//! assert!(new_user.avatar.is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod pagination;
pub mod storage;
pub mod types;
pub mod validation;

pub use error::{FieldError, Result, UserError, ValidationErrors};
pub use pagination::{paginate, Page, PageParams};
pub use storage::UserStore;
pub use types::{NewUser, User, UserChanges, UserId};
