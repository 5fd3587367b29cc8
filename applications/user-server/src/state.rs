/// Shared application state
use crate::config::PaginationSettings;
use std::sync::Arc;
use user_core::UserStore;

/// Application state shared across all handlers
///
/// Holds no user data itself; every request goes through `store`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub pagination: PaginationSettings,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            pagination: PaginationSettings::default(),
        }
    }

    #[must_use]
    pub fn with_pagination(mut self, pagination: PaginationSettings) -> Self {
        self.pagination = pagination;
        self
    }
}
