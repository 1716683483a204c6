// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the current instant: publish stamps, visibility checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
