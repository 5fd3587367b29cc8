/// Users API routes
///
/// Each handler validates its input, goes through the injected store once,
/// and maps absence to 404, bad input to 422 and store failures to 500.
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use user_core::{
    paginate,
    validation::{validate_create, validate_update},
    Page, PageParams, User, UserId,
};

type Payload = std::result::Result<Json<Map<String, Value>>, JsonRejection>;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

fn not_found(id: UserId) -> ServerError {
    ServerError::NotFound(format!("User {id} not found"))
}

/// GET /api/users/
pub async fn list_users(
    State(app_state): State<AppState>,
    query: std::result::Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Page<User>>> {
    let Query(query) = query?;

    let params = PageParams::new(
        query.page.unwrap_or(1),
        query
            .per_page
            .unwrap_or(app_state.pagination.default_per_page),
    )
    .validate(app_state.pagination.max_per_page)?;

    let users = app_state.store.list().await?;
    Ok(Json(paginate(users, params)))
}

/// GET /api/users/:id
pub async fn get_user(
    Path(id): Path<UserId>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let user = app_state
        .store
        .get(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(user))
}

/// POST /api/users/
/// Create a new user; any `id` in the body is ignored
pub async fn create_user(
    State(app_state): State<AppState>,
    payload: Payload,
) -> Result<(StatusCode, Json<User>)> {
    let Json(payload) = payload?;
    let new_user = validate_create(&payload)?;

    let user = app_state.store.create(new_user).await?;
    tracing::info!(user_id = user.id, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// PATCH /api/users/:id
/// Apply the supplied fields; an empty body returns the record unchanged
pub async fn update_user(
    Path(id): Path<UserId>,
    State(app_state): State<AppState>,
    payload: Payload,
) -> Result<Json<User>> {
    let Json(payload) = payload?;
    let changes = validate_update(&payload)?;

    let user = app_state
        .store
        .update(id, changes)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(user_id = id, "User updated");
    Ok(Json(user))
}

/// DELETE /api/users/:id
/// 204 on removal, 404 if the user was already absent
pub async fn delete_user(
    Path(id): Path<UserId>,
    State(app_state): State<AppState>,
) -> Result<StatusCode> {
    if !app_state.store.delete(id).await? {
        return Err(not_found(id));
    }

    tracing::info!(user_id = id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}
