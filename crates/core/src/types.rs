/// Store-assigned primary keys (slots, notes) are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Principal identifiers are opaque strings issued by the identity provider.
pub type UserId = String;
