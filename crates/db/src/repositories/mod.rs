//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods.
//! Methods that must join a caller's transaction take `&mut PgConnection`
//! (pass `&mut *tx`); standalone reads and single-statement writes take
//! `&PgPool`.

pub mod lookup_repo;
pub mod task_repo;

pub use lookup_repo::LookupRepo;
pub use task_repo::TaskRepo;
