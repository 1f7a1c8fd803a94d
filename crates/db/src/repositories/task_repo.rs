//! Repository for the `tasks` table.

use sqlx::{PgConnection, PgPool};
use tasktracker_core::types::DbId;

use crate::models::task::{TaskRecord, TaskWithNames};

/// Provides list/insert/update/delete for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// List every task with its user, category and status names, by id.
    ///
    /// Left joins keep tasks whose referenced rows are missing.
    pub async fn list_with_names(pool: &PgPool) -> Result<Vec<TaskWithNames>, sqlx::Error> {
        sqlx::query_as::<_, TaskWithNames>(
            "SELECT \
                 t.id AS task_id, \
                 t.title, \
                 t.description, \
                 t.deadline, \
                 u.name AS user_name, \
                 c.name AS category, \
                 s.name AS status \
             FROM tasks t \
             LEFT JOIN users u ON t.user_id = u.id \
             LEFT JOIN categories c ON t.category_id = c.id \
             LEFT JOIN statuses s ON t.status_id = s.id \
             ORDER BY t.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Insert a task and return its new id.
    pub async fn insert(conn: &mut PgConnection, record: &TaskRecord<'_>) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO tasks (user_id, category_id, status_id, title, description, deadline) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id",
        )
        .bind(record.user_id)
        .bind(record.category_id)
        .bind(record.status_id)
        .bind(record.title)
        .bind(record.description)
        .bind(record.deadline)
        .fetch_one(conn)
        .await
    }

    /// Overwrite every mutable column of task `id`.
    ///
    /// Returns `false` if no task with that id exists.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        record: &TaskRecord<'_>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE tasks SET \
                 user_id = $2, \
                 category_id = $3, \
                 status_id = $4, \
                 title = $5, \
                 description = $6, \
                 deadline = $7 \
             WHERE id = $1",
        )
        .bind(id)
        .bind(record.user_id)
        .bind(record.category_id)
        .bind(record.status_id)
        .bind(record.title)
        .bind(record.description)
        .bind(record.deadline)
        .execute(conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a task by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
