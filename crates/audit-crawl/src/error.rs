//! Error types for crawl preparation and status handling.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised before a crawl is launched or while handling its records.
///
/// Failures of the crawler process itself are not errors here; they are
/// recorded in the status file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CrawlError {
    /// No mapping row names the issue.
    #[error("no mapping row for issue '{issue}'")]
    MappingRowNotFound { issue: String },

    /// The mapping row has no crawl configuration reference.
    #[error("no crawl configuration mapped for issue '{issue}'")]
    MissingCrawlConfig { issue: String },

    /// The referenced crawl configuration file does not exist.
    #[error("crawl configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// No URL to crawl.
    #[error("no affected URLs to crawl for issue '{issue}'")]
    NoUrls { issue: String },

    /// I/O error on a crawl file or directory.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Status record could not be encoded or decoded.
    #[error("invalid status record {path}: {source}")]
    StatusJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Background worker could not be started.
    #[error("failed to start crawl worker: {0}")]
    Worker(#[source] std::io::Error),

    /// Report archive could not be written.
    #[error("archive error: {0}")]
    Archive(String),
}

impl CrawlError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns an operator-facing message.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::MappingRowNotFound { .. } | Self::MissingCrawlConfig { .. } => {
                "This issue has no crawl configuration in the mapping table."
            }
            Self::ConfigNotFound { .. } => {
                "The crawl configuration file is missing. Check the crawler config folder."
            }
            Self::NoUrls { .. } => "There are no affected URLs to crawl for this issue.",
            Self::StatusJson { .. } => "The crawl status file is unreadable. Reset it and retry.",
            Self::Io { .. } | Self::Worker(_) | Self::Archive(_) => {
                "An unexpected error occurred. Please try again."
            }
        }
    }
}

impl From<zip::result::ZipError> for CrawlError {
    fn from(err: zip::result::ZipError) -> Self {
        Self::Archive(err.to_string())
    }
}

/// Result type alias for crawl operations.
pub type Result<T> = std::result::Result<T, CrawlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let err = CrawlError::ConfigNotFound {
            path: PathBuf::from("configs/links.seospiderconfig"),
        };
        assert!(err.user_message().contains("config folder"));
        assert_eq!(
            err.to_string(),
            "crawl configuration not found: configs/links.seospiderconfig"
        );

        let err = CrawlError::MissingCrawlConfig {
            issue: "Broken Links".to_string(),
        };
        assert!(err.user_message().contains("mapping table"));
    }
}
