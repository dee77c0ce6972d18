use std::{env, time::Duration};

use dynotable_core::{TableNaming, WaitPolicy, DEFAULT_DELIMITER};

/// Connection configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prefix prepended to every table name (default: none)
    pub prefix: Option<String>,
    /// Separator between prefix and table name (default: ".")
    pub delimiter: String,
    /// AWS region (default: "us-east-1")
    pub region: String,
    /// Custom endpoint URL, e.g. a local DynamoDB (default: none)
    pub endpoint_url: Option<String>,
    /// Delay between describe polls in milliseconds (default: 1,000)
    pub poll_interval_ms: u64,
    /// Maximum number of describe polls when waiting (default: 60)
    pub max_wait_attempts: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNOTABLE_PREFIX` - Table name prefix (default: none)
    /// - `DYNOTABLE_DELIMITER` - Prefix delimiter (default: ".")
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `AWS_ENDPOINT_URL` - Use local DynamoDB (e.g., http://localhost:8000)
    /// - `DYNOTABLE_POLL_INTERVAL_MS` - Poll interval in milliseconds (default: 1,000)
    /// - `DYNOTABLE_MAX_WAIT_ATTEMPTS` - Maximum polls while waiting (default: 60)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = WaitPolicy::default();

        Self {
            prefix: lookup("DYNOTABLE_PREFIX").filter(|p| !p.is_empty()),
            delimiter: lookup("DYNOTABLE_DELIMITER")
                .unwrap_or_else(|| DEFAULT_DELIMITER.to_string()),
            region: lookup("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
            endpoint_url: lookup("AWS_ENDPOINT_URL"),
            poll_interval_ms: lookup("DYNOTABLE_POLL_INTERVAL_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.interval.as_millis() as u64),
            max_wait_attempts: lookup("DYNOTABLE_MAX_WAIT_ATTEMPTS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_attempts),
        }
    }

    /// Sets the table prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into()).filter(|p| !p.is_empty());
        self
    }

    /// Naming scheme derived from prefix and delimiter.
    pub fn naming(&self) -> TableNaming {
        TableNaming::new(self.prefix.clone()).with_delimiter(&self.delimiter)
    }

    /// Wait policy derived from the poll settings.
    pub fn wait_policy(&self) -> WaitPolicy {
        WaitPolicy::new(
            Duration::from_millis(self.poll_interval_ms),
            self.max_wait_attempts,
        )
    }

    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
