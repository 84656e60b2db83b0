/// All database primary keys are SQLite INTEGER (rowid) columns.
pub type DbId = i64;

/// Timestamps are stored by SQLite as UTC text without an offset.
pub type Timestamp = chrono::NaiveDateTime;
