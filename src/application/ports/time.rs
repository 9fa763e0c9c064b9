// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for timestamps on articles, reviews and deliveries.
/// Tests swap in a clock that advances deterministically.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
