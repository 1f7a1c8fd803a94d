//! Row structs and request DTOs.
//!
//! - `FromRow` + `Serialize` structs mirror query results.
//! - `Deserialize` DTOs carry client input before validation.

pub mod task;
