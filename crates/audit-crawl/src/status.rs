//! The crawl status record shared between the crawl worker and observers.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CrawlError, Result};

/// Lifecycle of a crawl as written to its status file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CrawlStatus {
    Running {
        start_time: String,
    },
    Completed {
        end_time: String,
        output_folder: PathBuf,
    },
    /// The crawler exited with a non-zero code.
    Failed {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
    /// The crawler could not be run at all.
    Error {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
}

impl CrawlStatus {
    pub fn running_now() -> Self {
        Self::Running {
            start_time: clock_time(),
        }
    }

    pub fn completed_now(output_folder: &Path) -> Self {
        Self::Completed {
            end_time: clock_time(),
            output_folder: output_folder.to_path_buf(),
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Running { .. } => "running",
            Self::Completed { .. } => "completed",
            Self::Failed { .. } => "failed",
            Self::Error { .. } => "error",
        }
    }

    /// True once the record can no longer change without a reset.
    pub const fn is_finished(&self) -> bool {
        !matches!(self, Self::Running { .. })
    }

    /// Failure detail, if any was recorded.
    pub fn error_detail(&self) -> Option<&str> {
        match self {
            Self::Failed { error } | Self::Error { error } => error.as_deref(),
            Self::Running { .. } | Self::Completed { .. } => None,
        }
    }
}

impl fmt::Display for CrawlStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn clock_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// A status file on disk.
///
/// Writes replace the whole record atomically, so a reader sees either the
/// previous record or the new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFile {
    path: PathBuf,
}

impl StatusFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the record; `None` when no crawl has written one yet.
    pub fn read(&self) -> Result<Option<CrawlStatus>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(CrawlError::io(&self.path, err)),
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| CrawlError::StatusJson {
                path: self.path.clone(),
                source,
            })
    }

    pub fn write(&self, status: &CrawlStatus) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| CrawlError::io(parent, err))?;
        }
        let bytes = serde_json::to_vec(status).map_err(|source| CrawlError::StatusJson {
            path: self.path.clone(),
            source,
        })?;
        let temp = self.path.with_extension("json.tmp");
        fs::write(&temp, bytes).map_err(|err| CrawlError::io(&temp, err))?;
        fs::rename(&temp, &self.path).map_err(|err| CrawlError::io(&self.path, err))?;
        tracing::debug!(path = %self.path.display(), status = %status, "wrote crawl status");
        Ok(())
    }

    /// Deletes the record so a fresh crawl may start. Returns whether a
    /// record existed.
    pub fn reset(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), "reset crawl status");
                Ok(true)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(CrawlError::io(&self.path, err)),
        }
    }
}
