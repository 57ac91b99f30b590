// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Time source for article timestamps. `created_at`/`updated_at` always come
/// from here rather than from the store, so tests can pin the clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
