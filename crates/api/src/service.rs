//! Task operations behind the HTTP handlers.
//!
//! [`TaskService`] validates input, calls the injected [`TaskStore`] and
//! translates store outcomes into [`AppError`]s. Storage errors never cross
//! this boundary untranslated.

use std::sync::Arc;

use tasktracker_core::error::CoreError;
use tasktracker_core::types::DbId;
use tasktracker_db::models::task::{TaskDraft, TaskInput, TaskWithNames};
use tasktracker_db::store::TaskStore;

use crate::error::{AppError, AppResult};

/// Task operations over a shared store handle.
#[derive(Clone)]
pub struct TaskService {
    store: Arc<dyn TaskStore>,
}

impl TaskService {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    /// Whether the store answered a ping.
    pub async fn is_healthy(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Store health check failed");
                false
            }
        }
    }

    /// Every task with its user, category and status names, by id.
    pub async fn list(&self) -> AppResult<Vec<TaskWithNames>> {
        self.store
            .list_tasks()
            .await
            .map_err(AppError::persistence("Failed to fetch tasks"))
    }

    /// Create a task, returning its new id.
    pub async fn create(&self, input: TaskInput) -> AppResult<DbId> {
        let draft = input.into_draft()?;

        let task_id = self
            .store
            .create_task(&draft)
            .await
            .map_err(AppError::persistence("Failed to create task"))?;

        tracing::info!(task_id, title = %draft.title, "Task created");
        Ok(task_id)
    }

    /// Replace every mutable field of task `id` with an already validated draft.
    pub async fn update(&self, id: DbId, draft: TaskDraft) -> AppResult<()> {
        let updated = self
            .store
            .update_task(id, &draft)
            .await
            .map_err(AppError::persistence("Failed to update task"))?;

        if !updated {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Task",
                id,
            }));
        }

        tracing::info!(task_id = id, "Task updated");
        Ok(())
    }

    /// Delete task `id`.
    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        let deleted = self
            .store
            .delete_task(id)
            .await
            .map_err(AppError::persistence("Failed to delete task"))?;

        if !deleted {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Task",
                id,
            }));
        }

        tracing::info!(task_id = id, "Task deleted");
        Ok(())
    }
}
