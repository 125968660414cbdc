//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to tell the failing step apart.
//!
//! Does NOT handle:
//! - Error message formatting (the failing step prints its own message).
//!
//! Invariants:
//! - A token failure always exits 2 and an alerts failure always exits 3,
//!   whatever the HTTP status.

use trellix_client::ClientError;

/// Structured exit codes for trellix-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Alerts were fetched and printed.
    Success = 0,

    /// Configuration, client construction or output failure. No alerts request was made
    /// unless output failed.
    GeneralError = 1,

    /// The token request failed. The alerts endpoint was not called.
    AuthenticationFailed = 2,

    /// The alerts request failed after a token was obtained.
    FetchFailed = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Auth(_) => ExitCode::AuthenticationFailed,
            ClientError::Fetch(_) => ExitCode::FetchFailed,
            ClientError::MissingCredentials
            | ClientError::InvalidUrl(_)
            | ClientError::HttpClient(_) => ExitCode::GeneralError,
        }
    }
}
