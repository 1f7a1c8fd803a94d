//! Storage seam between the HTTP layer and Postgres.
//!
//! [`TaskStore`] is the only persistence interface the API crate sees, so a
//! substitute store can be injected in tests. [`PgTaskStore`] is the real
//! implementation; it owns the pool handle it was constructed with.

use async_trait::async_trait;
use sqlx::{PgConnection, Postgres, Transaction};
use tasktracker_core::lookup::LookupKind;
use tasktracker_core::types::DbId;

use crate::models::task::{TaskDraft, TaskRecord, TaskWithNames};
use crate::repositories::{LookupRepo, TaskRepo};
use crate::DbPool;

/// Task persistence operations.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), sqlx::Error>;

    /// All tasks with resolved names, ordered by id.
    async fn list_tasks(&self) -> Result<Vec<TaskWithNames>, sqlx::Error>;

    /// Resolve the draft's lookups and insert it atomically. Returns the new id.
    async fn create_task(&self, draft: &TaskDraft) -> Result<DbId, sqlx::Error>;

    /// Resolve the draft's lookups and overwrite task `id`.
    ///
    /// Returns `Ok(false)` when no task matched. Lookup rows created while
    /// resolving are committed even in that case.
    async fn update_task(&self, id: DbId, draft: &TaskDraft) -> Result<bool, sqlx::Error>;

    /// Delete task `id`. Returns `Ok(false)` when no task matched.
    async fn delete_task(&self, id: DbId) -> Result<bool, sqlx::Error>;
}

/// Postgres-backed [`TaskStore`].
#[derive(Clone)]
pub struct PgTaskStore {
    pool: DbPool,
}

impl PgTaskStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Lookup ids resolved for one draft.
struct ResolvedIds {
    user_id: DbId,
    category_id: DbId,
    status_id: DbId,
}

impl ResolvedIds {
    /// Resolve user, category and status in that order on `conn`.
    async fn resolve(conn: &mut PgConnection, draft: &TaskDraft) -> Result<Self, sqlx::Error> {
        let user_id = LookupRepo::resolve(conn, LookupKind::User, draft.user_name.as_deref()).await?;
        let category_id =
            LookupRepo::resolve(conn, LookupKind::Category, draft.category.as_deref()).await?;
        let status_id =
            LookupRepo::resolve(conn, LookupKind::Status, draft.status.as_deref()).await?;

        Ok(Self {
            user_id,
            category_id,
            status_id,
        })
    }

    fn record<'a>(&self, draft: &'a TaskDraft) -> TaskRecord<'a> {
        TaskRecord {
            user_id: self.user_id,
            category_id: self.category_id,
            status_id: self.status_id,
            title: &draft.title,
            description: &draft.description,
            deadline: draft.deadline,
        }
    }
}

async fn insert_task(conn: &mut PgConnection, draft: &TaskDraft) -> Result<DbId, sqlx::Error> {
    let ids = ResolvedIds::resolve(&mut *conn, draft).await?;
    TaskRepo::insert(conn, &ids.record(draft)).await
}

async fn overwrite_task(
    conn: &mut PgConnection,
    id: DbId,
    draft: &TaskDraft,
) -> Result<bool, sqlx::Error> {
    let ids = ResolvedIds::resolve(&mut *conn, draft).await?;
    TaskRepo::update(conn, id, &ids.record(draft)).await
}

/// Roll back a failed transaction, logging the outcome.
///
/// Dropping the transaction would also roll back; doing it explicitly keeps
/// the rollback ordered before the error is reported.
async fn roll_back(tx: Transaction<'static, Postgres>, operation: &'static str) {
    match tx.rollback().await {
        Ok(()) => tracing::warn!(operation, "Transaction rolled back"),
        Err(e) => tracing::error!(operation, error = %e, "Transaction rollback failed"),
    }
}

#[async_trait]
impl TaskStore for PgTaskStore {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }

    async fn list_tasks(&self) -> Result<Vec<TaskWithNames>, sqlx::Error> {
        TaskRepo::list_with_names(&self.pool).await
    }

    async fn create_task(&self, draft: &TaskDraft) -> Result<DbId, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        match insert_task(&mut *tx, draft).await {
            Ok(id) => {
                tx.commit().await?;
                Ok(id)
            }
            Err(e) => {
                roll_back(tx, "create_task").await;
                Err(e)
            }
        }
    }

    async fn update_task(&self, id: DbId, draft: &TaskDraft) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        match overwrite_task(&mut *tx, id, draft).await {
            Ok(updated) => {
                tx.commit().await?;
                Ok(updated)
            }
            Err(e) => {
                roll_back(tx, "update_task").await;
                Err(e)
            }
        }
    }

    async fn delete_task(&self, id: DbId) -> Result<bool, sqlx::Error> {
        TaskRepo::delete(&self.pool, id).await
    }
}
