/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Minutes since local midnight, always in `0..=1439`.
pub type MinuteOfDay = i16;
