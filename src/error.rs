//! error types
//!
//! structured errors for config, http, json, transport, and mutation failures.

use crate::graphql::{GraphQlError, MutationErrorEntry};
use std::fmt;
use std::path::PathBuf;

/// library result type
pub type Result<T> = std::result::Result<T, Error>;

/// error type for the client and loader
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("invalid input: {0}")]
    Input(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to open {}: {source}", .path.display())]
    Io {
        /// file that could not be read
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// non-200 http status
    #[error("transport error ({status}): {message}")]
    Transport {
        /// http status code
        status: u16,
        /// message from the first error entry, or a synthesized one
        message: String,
        /// extensions of the first error entry, if any
        extensions: Option<serde_json::Value>,
        /// raw response body
        body: String,
    },

    /// operation-scoped errors reported by a successful response
    #[error("{operation} failed:\n{message}")]
    Mutation {
        /// root field of the mutation
        operation: String,
        /// reported error entries, in response order
        errors: Vec<MutationErrorEntry>,
        /// newline-joined `field : message` pairs
        message: String,
    },

    #[error("graphql error: {message}")]
    GraphQl {
        /// http status if available
        status: Option<u16>,
        /// graphql error list
        errors: Vec<GraphQlError>,
        /// response body re-encoded from the parsed response
        body: String,
        /// top-level message
        message: String,
    },

    #[error("unexpected response: {0}")]
    Response(String),
}

impl Error {
    /// true if the error looks like an auth failure
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Transport { status: 401 | 403, .. })
            || matches!(self, Error::GraphQl { status: Some(401 | 403), .. })
            || matches!(
                self,
                Error::Http(err) if err.status() == Some(reqwest::StatusCode::UNAUTHORIZED)
            )
    }
}

/// fail with [`Error::Mutation`] when `errors` is non-empty
///
/// the message holds one `field : message` line per entry, in input order.
pub fn check_errors(operation: &str, errors: &[MutationErrorEntry]) -> Result<()> {
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");

    Err(Error::Mutation {
        operation: operation.to_string(),
        errors: errors.to_vec(),
        message,
    })
}

impl fmt::Display for GraphQlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for MutationErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} : {}",
            self.field.as_deref().unwrap_or("null"),
            self.message.as_deref().unwrap_or("null")
        )
    }
}
