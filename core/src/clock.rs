//! Clock abstraction for date stamping.
//!
//! The domain only ever stores calendar dates (`dateCreated`,
//! `dateCompleted`), so the trait is narrowed to `today()`. Injecting it
//! keeps the factory and store deterministic under test.

use chrono::{NaiveDate, Utc};

/// Abstracts the current date for testability.
pub trait Clock: Send + Sync {
    /// The current calendar date.
    fn today(&self) -> NaiveDate;
}

/// Production clock backed by the system time (UTC).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Fixed-date clock for deterministic tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
