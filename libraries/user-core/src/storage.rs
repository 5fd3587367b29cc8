//! Storage trait for the user resource

use crate::error::Result;
use crate::types::{NewUser, User, UserChanges, UserId};
use async_trait::async_trait;

/// Durable store owning every user record
///
/// Absence is reported through `Option`/`bool`, never as an error, so
/// callers can tell a missing user apart from an infrastructure failure.
/// Implementations must apply each `update` atomically with respect to
/// concurrent readers and writers of the same record.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user and return it with its assigned id
    async fn create(&self, user: NewUser) -> Result<User>;

    /// Get user by ID
    async fn get(&self, id: UserId) -> Result<Option<User>>;

    /// Get all users in insertion order
    async fn list(&self) -> Result<Vec<User>>;

    /// Apply the supplied fields and return the refreshed record
    ///
    /// Returns `None` when no user has this id. An empty change set
    /// returns the current record unchanged.
    async fn update(&self, id: UserId, changes: UserChanges) -> Result<Option<User>>;

    /// Delete a user; `false` when it did not exist
    async fn delete(&self, id: UserId) -> Result<bool>;

    /// Check that the backing store is reachable
    async fn ping(&self) -> Result<()>;
}
