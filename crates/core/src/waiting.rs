//! Pure functions deciding when a polled table has reached a target state.

use std::time::Duration;

use crate::request::{IndexStatus, TableDescription, TableStatus};

/// How often and how many times to poll while waiting on a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            max_attempts: 60,
        }
    }
}

impl WaitPolicy {
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }

    /// Upper bound on time spent sleeping between polls.
    pub fn max_wait(&self) -> Duration {
        self.interval * self.max_attempts
    }
}

/// True once the table exists, is `ACTIVE`, and all of its GSIs are `ACTIVE`.
pub fn is_active(description: Option<&TableDescription>) -> bool {
    match description {
        Some(table) => {
            table.table_status == TableStatus::Active
                && table
                    .global_secondary_indexes
                    .iter()
                    .all(|gsi| gsi.index_status == IndexStatus::Active)
        }
        None => false,
    }
}

/// True when the table sits in a status it will not leave on its own.
pub fn is_unrecoverable(description: Option<&TableDescription>) -> bool {
    matches!(
        description.map(|table| table.table_status),
        Some(TableStatus::Archived | TableStatus::InaccessibleEncryptionCredentials)
    )
}

/// True once the service no longer knows the table.
pub fn is_gone(description: Option<&TableDescription>) -> bool {
    description.is_none()
}
