//! Shared HTTP client construction

use std::time::Duration;

const USER_AGENT: &str = concat!("stress-relief/", env!("CARGO_PKG_VERSION"));

/// Build the client shared by the OpenAI and Giphy adapters.
///
/// `timeout` of `None` leaves requests unbounded.
pub fn build_http_client(timeout: Option<Duration>) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_and_without_timeout() {
        assert!(build_http_client(None).is_ok());
        assert!(build_http_client(Some(Duration::from_secs(30))).is_ok());
    }
}
