//! Error handling types and utilities.

use reqwest::StatusCode;
use std::path::PathBuf;

/// A specialized Result type for udf-docs operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while fetching UDF metadata or rewriting pages.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be sent or its body could not be decoded.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("{url} responded with {status}")]
    Status { url: String, status: StatusCode },

    /// The page has no element with class `body` to append the section to.
    #[error("page has no `.body` container")]
    MissingBody,

    /// The HTML rewriter rejected the page.
    #[error("failed to rewrite page: {0}")]
    Rewrite(#[from] lol_html::errors::RewritingError),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
