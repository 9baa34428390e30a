//! HTTP configuration from TOML (`[http]` section)

use relief_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHttpConfig {
    /// Per-request timeout. Requests are unbounded when unset.
    pub timeout_seconds: Option<u64>,
}

impl FileHttpConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds
            .filter(|s| *s > 0)
            .map(Duration::from_secs)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        match self.timeout_seconds {
            Some(0) => vec![ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "http.timeout_seconds".to_string(),
                    value: "0".to_string(),
                },
                "http.timeout_seconds: 0 disables the timeout",
            )],
            _ => Vec::new(),
        }
    }
}
