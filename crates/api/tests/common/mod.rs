#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use tasktracker_api::config::{LogFormat, ServerConfig};
use tasktracker_api::router::build_app_router;
use tasktracker_api::state::AppState;
use tasktracker_core::lookup::{normalize_name, LookupKind};
use tasktracker_core::types::DbId;
use tasktracker_db::models::task::{TaskDraft, TaskWithNames};
use tasktracker_db::store::TaskStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as the only CORS origin and a 30-second
/// request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        db_max_connections: 1,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router around `store`, with the same
/// middleware stack production uses.
pub fn build_test_app(store: Arc<dyn TaskStore>) -> Router {
    let config = test_config();
    let state = AppState::new(store);
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct StoredTask {
    user_id: DbId,
    category_id: DbId,
    status_id: DbId,
    title: String,
    description: String,
    deadline: Option<tasktracker_core::types::Deadline>,
}

#[derive(Debug, Default)]
struct MemoryState {
    users: Vec<String>,
    categories: Vec<String>,
    statuses: Vec<String>,
    tasks: BTreeMap<DbId, StoredTask>,
    next_task_id: DbId,
    failing: bool,
}

impl MemoryState {
    fn table(&mut self, kind: LookupKind) -> &mut Vec<String> {
        match kind {
            LookupKind::User => &mut self.users,
            LookupKind::Category => &mut self.categories,
            LookupKind::Status => &mut self.statuses,
        }
    }

    /// Get-or-create with the same normalization as the Postgres store.
    /// Ids are 1-based positions in the table.
    fn resolve(&mut self, kind: LookupKind, name: Option<&str>) -> DbId {
        let name = normalize_name(kind, name).to_string();
        let table = self.table(kind);
        let pos = match table.iter().position(|n| *n == name) {
            Some(pos) => pos,
            None => {
                table.push(name);
                table.len() - 1
            }
        };
        pos as DbId + 1
    }

    fn name(&self, kind: LookupKind, id: DbId) -> Option<String> {
        let table = match kind {
            LookupKind::User => &self.users,
            LookupKind::Category => &self.categories,
            LookupKind::Status => &self.statuses,
        };
        table.get((id - 1) as usize).cloned()
    }

    fn stored(&mut self, draft: &TaskDraft) -> StoredTask {
        StoredTask {
            user_id: self.resolve(LookupKind::User, draft.user_name.as_deref()),
            category_id: self.resolve(LookupKind::Category, draft.category.as_deref()),
            status_id: self.resolve(LookupKind::Status, draft.status.as_deref()),
            title: draft.title.clone(),
            description: draft.description.clone(),
            deadline: draft.deadline,
        }
    }
}

/// [`TaskStore`] over in-process collections.
///
/// Mirrors the Postgres store's observable behavior, including committing
/// lookup rows when an update matches no task. `set_failing(true)` makes
/// every call fail with a pool timeout.
#[derive(Default)]
pub struct MemoryTaskStore {
    state: Mutex<MemoryState>,
}

impl MemoryTaskStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_failing(&self, failing: bool) {
        self.state.lock().unwrap().failing = failing;
    }

    /// Number of rows in the given lookup table named exactly `name`.
    pub fn lookup_count(&self, kind: LookupKind, name: &str) -> usize {
        let mut state = self.state.lock().unwrap();
        state.table(kind).iter().filter(|n| *n == name).count()
    }

    pub fn lookup_len(&self, kind: LookupKind) -> usize {
        self.state.lock().unwrap().table(kind).len()
    }

    pub fn task_count(&self) -> usize {
        self.state.lock().unwrap().tasks.len()
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        if self.state.lock().unwrap().failing {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        self.check()
    }

    async fn list_tasks(&self) -> Result<Vec<TaskWithNames>, sqlx::Error> {
        self.check()?;
        let state = self.state.lock().unwrap();
        Ok(state
            .tasks
            .iter()
            .map(|(id, task)| TaskWithNames {
                task_id: *id,
                title: task.title.clone(),
                description: task.description.clone(),
                deadline: task.deadline,
                user_name: state.name(LookupKind::User, task.user_id),
                category: state.name(LookupKind::Category, task.category_id),
                status: state.name(LookupKind::Status, task.status_id),
            })
            .collect())
    }

    async fn create_task(&self, draft: &TaskDraft) -> Result<DbId, sqlx::Error> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        let stored = state.stored(draft);
        state.next_task_id += 1;
        let id = state.next_task_id;
        state.tasks.insert(id, stored);
        Ok(id)
    }

    async fn update_task(&self, id: DbId, draft: &TaskDraft) -> Result<bool, sqlx::Error> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        let stored = state.stored(draft);
        match state.tasks.get_mut(&id) {
            Some(task) => {
                *task = stored;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_task(&self, id: DbId) -> Result<bool, sqlx::Error> {
        self.check()?;
        Ok(self.state.lock().unwrap().tasks.remove(&id).is_some())
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Option<String>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(b) => {
            builder = builder.header("content-type", "application/json");
            Body::from(b)
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(json.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(json.to_string())).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
