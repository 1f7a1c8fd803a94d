//! Task tracker domain layer.
//!
//! Pure logic shared by the database and HTTP crates: identifier types, the
//! domain error taxonomy, lookup-name normalization and deadline parsing.
//! Nothing in here touches the database.

pub mod deadline;
pub mod error;
pub mod lookup;
pub mod types;
