//! Name-keyed lookup dimensions attached to every task.
//!
//! Users, categories and statuses are referenced by free-form names. A name
//! that is missing or blank resolves to a fixed per-kind default so every task
//! always points at a real row.

use std::fmt;

/// The three get-or-create dimensions of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    User,
    Category,
    Status,
}

impl LookupKind {
    pub const ALL: [LookupKind; 3] = [LookupKind::User, LookupKind::Category, LookupKind::Status];

    /// Name substituted when the caller supplies nothing usable.
    pub fn default_name(self) -> &'static str {
        match self {
            LookupKind::User => "Unknown",
            LookupKind::Category => "Default",
            LookupKind::Status => "Pending",
        }
    }

    /// Human-readable entity label used in logs and errors.
    pub fn entity(self) -> &'static str {
        match self {
            LookupKind::User => "User",
            LookupKind::Category => "Category",
            LookupKind::Status => "Status",
        }
    }
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.entity())
    }
}

/// Normalize a requested lookup name.
///
/// Absent, empty and whitespace-only names become [`LookupKind::default_name`].
/// Anything else is returned unchanged; surrounding whitespace is significant.
pub fn normalize_name(kind: LookupKind, name: Option<&str>) -> &str {
    match name {
        Some(n) if !n.trim().is_empty() => n,
        _ => kind.default_name(),
    }
}
