//! Repository for the `users`, `categories` and `statuses` lookup tables.
//!
//! The three tables share one shape (`id`, unique `name`), so a single
//! repository serves all of them keyed by [`LookupKind`].

use sqlx::PgConnection;
use tasktracker_core::lookup::{normalize_name, LookupKind};
use tasktracker_core::types::DbId;

/// Get-or-create access to the lookup tables.
pub struct LookupRepo;

impl LookupRepo {
    /// Find the id of the row named exactly `name`.
    pub async fn find(
        conn: &mut PgConnection,
        kind: LookupKind,
        name: &str,
    ) -> Result<Option<DbId>, sqlx::Error> {
        let query = format!("SELECT id FROM {} WHERE name = $1", table_for(kind));
        sqlx::query_scalar::<_, DbId>(&query)
            .bind(name)
            .fetch_optional(conn)
            .await
    }

    /// Insert a row named `name` and return its id.
    ///
    /// If another transaction committed the same name first, the insert is a
    /// no-op and the existing row's id is returned instead.
    pub async fn create_if_absent(
        conn: &mut PgConnection,
        kind: LookupKind,
        name: &str,
    ) -> Result<DbId, sqlx::Error> {
        let query = format!(
            "INSERT INTO {} (name) VALUES ($1) \
             ON CONFLICT (name) DO NOTHING \
             RETURNING id",
            table_for(kind)
        );
        let inserted = sqlx::query_scalar::<_, DbId>(&query)
            .bind(name)
            .fetch_optional(&mut *conn)
            .await?;

        if let Some(id) = inserted {
            tracing::debug!(kind = %kind, name, id, "Lookup row created");
            return Ok(id);
        }

        // Lost an insert race; the winner's row is visible to the next statement.
        Self::find(conn, kind, name)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Resolve a requested name to an id, creating the row when missing.
    ///
    /// Blank or absent names resolve to the kind's default name.
    pub async fn resolve(
        conn: &mut PgConnection,
        kind: LookupKind,
        name: Option<&str>,
    ) -> Result<DbId, sqlx::Error> {
        let name = normalize_name(kind, name);

        match Self::find(&mut *conn, kind, name).await? {
            Some(id) => Ok(id),
            None => Self::create_if_absent(conn, kind, name).await,
        }
    }
}

fn table_for(kind: LookupKind) -> &'static str {
    match kind {
        LookupKind::User => "users",
        LookupKind::Category => "categories",
        LookupKind::Status => "statuses",
    }
}
