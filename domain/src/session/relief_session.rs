//! Session state for one user

use super::credentials::Credentials;
use crate::report::Report;

/// State scoped to one user session.
///
/// Created when the session starts and dropped when it ends. The last
/// report is cleared as soon as a new submission begins and replaced
/// only when that submission completes, so a failed run never leaves a
/// partial or stale report behind.
#[derive(Debug, Default)]
pub struct ReliefSession {
    credentials: Credentials,
    last_report: Option<Report>,
}

impl ReliefSession {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            last_report: None,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn credentials_mut(&mut self) -> &mut Credentials {
        &mut self.credentials
    }

    /// Start a new submission: forget the previous report.
    pub fn begin_submission(&mut self) {
        self.last_report = None;
    }

    pub fn store_report(&mut self, report: Report) {
        self.last_report = Some(report);
    }

    pub fn last_report(&self) -> Option<&Report> {
        self.last_report.as_ref()
    }

    /// Drop keys and report.
    pub fn clear(&mut self) {
        self.credentials.clear();
        self.last_report = None;
    }
}
