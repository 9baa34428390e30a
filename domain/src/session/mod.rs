//! Session domain
//!
//! One interactive session holds the two API keys and the last report.
//! Nothing here is written to disk.

pub mod credentials;
mod relief_session;

pub use credentials::{ApiKey, CredentialKind, Credentials, MissingCredential, ResolvedCredentials};
pub use relief_session::ReliefSession;
