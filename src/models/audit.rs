use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Creation/last-update timestamps carried by persisted records.
/// `created_at` is set once at first write, `updated_at` on every later
/// write; the write path replaces values, it never mutates them in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditFields {
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
