/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Task deadlines are wall-clock values without a zone, stored as `TIMESTAMP`.
pub type Deadline = chrono::NaiveDateTime;
