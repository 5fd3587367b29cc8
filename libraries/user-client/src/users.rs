//! User CRUD operations.

use crate::client::{expect_json, expect_status, send};
use crate::error::Result;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::debug;
use user_core::{Page, PageParams, User, UserId};

/// Users client for the user service.
///
/// Payloads are anything serializable to a JSON object, so callers can send
/// exactly the fields they mean to (including deliberately invalid ones).
pub struct UsersClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> UsersClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/users/", self.base_url)
    }

    fn user_url(&self, id: UserId) -> String {
        format!("{}/api/users/{}", self.base_url, id)
    }

    /// Create a user; expects `201 Created`.
    pub async fn create_user<P: Serialize + ?Sized>(&self, payload: &P) -> Result<User> {
        let url = self.collection_url();
        debug!(url = %url, "Creating user");

        let response = send(self.http.post(&url).json(payload)).await?;
        let user: User = expect_json(response, StatusCode::CREATED).await?;

        debug!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Get one page of users; expects `200 OK`.
    pub async fn list_users(&self, params: PageParams) -> Result<Page<User>> {
        let url = self.collection_url();
        debug!(url = %url, page = params.page, per_page = params.per_page, "Listing users");

        let response = send(self.http.get(&url).query(&params)).await?;
        let page: Page<User> = expect_json(response, StatusCode::OK).await?;

        debug!(total = page.total, returned = page.data.len(), "Fetched users");
        Ok(page)
    }

    /// Get a user by ID; expects `200 OK`.
    pub async fn get_user(&self, id: UserId) -> Result<User> {
        let url = self.user_url(id);
        debug!(url = %url, user_id = id, "Fetching user");

        let response = send(self.http.get(&url)).await?;
        expect_json(response, StatusCode::OK).await
    }

    /// Partially update a user; expects `200 OK`.
    pub async fn update_user<P: Serialize + ?Sized>(&self, id: UserId, payload: &P) -> Result<User> {
        let url = self.user_url(id);
        debug!(url = %url, user_id = id, "Updating user");

        let response = send(self.http.patch(&url).json(payload)).await?;
        expect_json(response, StatusCode::OK).await
    }

    /// Delete a user; expects `204 No Content`.
    pub async fn delete_user(&self, id: UserId) -> Result<()> {
        let url = self.user_url(id);
        debug!(url = %url, user_id = id, "Deleting user");

        let response = send(self.http.delete(&url)).await?;
        expect_status(response, StatusCode::NO_CONTENT).await?;
        Ok(())
    }
}
