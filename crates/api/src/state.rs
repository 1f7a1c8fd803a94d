use std::sync::Arc;

use tasktracker_db::store::TaskStore;

use crate::service::TaskService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone; the store sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Task operations over the injected store.
    pub tasks: TaskService,
}

impl AppState {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self {
            tasks: TaskService::new(store),
        }
    }
}
