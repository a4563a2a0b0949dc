// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for publish gating, slug fallbacks and timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
