//! Crawl launcher: validates a crawl request and runs the crawler in the
//! background, reporting progress only through the status file.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use audit_model::MappingTable;

use crate::command::{CrawlCommand, DEFAULT_EXPORT_TABS};
use crate::error::{CrawlError, Result};
use crate::job::CrawlJob;
use crate::status::{CrawlStatus, StatusFile};

/// Where the crawler lives and where crawls are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlerSettings {
    /// Crawler executable.
    pub binary: PathBuf,
    /// Folder holding the crawl configuration files named by the mapping table.
    pub config_folder: PathBuf,
    /// Parent folder of every crawl output folder.
    pub crawls_dir: PathBuf,
    pub default_export_tabs: String,
}

impl CrawlerSettings {
    pub fn new(binary: impl Into<PathBuf>, config_folder: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            config_folder: config_folder.into(),
            crawls_dir: PathBuf::from("crawls"),
            default_export_tabs: DEFAULT_EXPORT_TABS.to_string(),
        }
    }

    #[must_use]
    pub fn with_crawls_dir(mut self, crawls_dir: impl Into<PathBuf>) -> Self {
        self.crawls_dir = crawls_dir.into();
        self
    }
}

/// A validated crawl whose URL list is on disk, ready to launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedCrawl {
    pub job: CrawlJob,
    pub command: CrawlCommand,
    pub url_count: usize,
}

impl PreparedCrawl {
    pub fn status_file(&self) -> StatusFile {
        StatusFile::new(self.job.status_path())
    }
}

/// Launches crawls. Holds no per-crawl state, so one instance can serve
/// every request.
#[derive(Debug, Clone)]
pub struct CrawlLauncher {
    settings: CrawlerSettings,
}

impl CrawlLauncher {
    pub fn new(settings: CrawlerSettings) -> Self {
        tracing::debug!(
            binary = %settings.binary.display(),
            config_folder = %settings.config_folder.display(),
            "crawl launcher ready"
        );
        Self { settings }
    }

    pub fn job(&self, category: &str, issue: &str, ordinal: usize) -> CrawlJob {
        CrawlJob::new(&self.settings.crawls_dir, category, issue, ordinal)
    }

    /// Resolves the crawl configuration for the job's issue and writes the
    /// URL list, one URL per line.
    ///
    /// Nothing is written when the mapping row or its configuration file is
    /// missing.
    pub fn prepare(
        &self,
        job: CrawlJob,
        urls: &[String],
        mapping: &MappingTable,
    ) -> Result<PreparedCrawl> {
        if urls.is_empty() {
            return Err(CrawlError::NoUrls { issue: job.issue });
        }
        let entry = mapping
            .find_by_source_name(&job.issue)
            .ok_or_else(|| CrawlError::MappingRowNotFound {
                issue: job.issue.clone(),
            })?;
        let config_ref = entry.crawl_config_ref.as_deref().ok_or_else(|| {
            CrawlError::MissingCrawlConfig {
                issue: job.issue.clone(),
            }
        })?;
        let config = self.settings.config_folder.join(config_ref);
        if !config.is_file() {
            return Err(CrawlError::ConfigNotFound { path: config });
        }
        let export_tabs = entry
            .crawl_export_tabs
            .as_deref()
            .unwrap_or(&self.settings.default_export_tabs);

        fs::create_dir_all(&job.output_folder)
            .map_err(|err| CrawlError::io(&job.output_folder, err))?;
        let url_list = job.url_list_path();
        fs::write(&url_list, urls.join("\n")).map_err(|err| CrawlError::io(&url_list, err))?;

        let command = CrawlCommand::headless(
            &self.settings.binary,
            &url_list,
            &job.output_folder,
            &config,
            export_tabs,
        );
        tracing::info!(
            crawl_id = %job.id,
            url_count = urls.len(),
            config = %config.display(),
            "prepared crawl"
        );
        Ok(PreparedCrawl {
            job,
            command,
            url_count: urls.len(),
        })
    }

    /// Marks the crawl as running and runs it on a background thread.
    ///
    /// Returns as soon as the worker has started. The final outcome is
    /// written to the status file; the handle only repeats it. If the
    /// worker cannot be started the record becomes `error`.
    pub fn launch(&self, prepared: PreparedCrawl) -> Result<JoinHandle<CrawlStatus>> {
        self.launch_with(prepared, |builder, work| builder.spawn(work))
    }

    pub(crate) fn launch_with<S>(
        &self,
        prepared: PreparedCrawl,
        spawn: S,
    ) -> Result<JoinHandle<CrawlStatus>>
    where
        S: FnOnce(thread::Builder, Worker) -> io::Result<JoinHandle<CrawlStatus>>,
    {
        let status_file = prepared.status_file();
        status_file.write(&CrawlStatus::running_now())?;
        tracing::info!(crawl_id = %prepared.job.id, command = %prepared.command, "launching crawl");

        let crawl_id = prepared.job.id.clone();
        let builder = thread::Builder::new().name(format!("crawl-{crawl_id}"));
        let worker_status = status_file.clone();
        let work: Worker = Box::new(move || {
            let status = run_to_completion(&prepared.job, &prepared.command);
            if let Err(err) = worker_status.write(&status) {
                tracing::error!(crawl_id = %prepared.job.id, error = %err, "failed to record crawl status");
            }
            status
        });

        spawn(builder, work).map_err(|err| {
            tracing::error!(crawl_id = %crawl_id, error = %err, "crawl worker could not be started");
            let failed = CrawlStatus::Error {
                error: Some(err.to_string()),
            };
            if let Err(write_err) = status_file.write(&failed) {
                tracing::error!(crawl_id = %crawl_id, error = %write_err, "failed to record crawl status");
            }
            CrawlError::Worker(err)
        })
    }
}

/// Body of a crawl worker thread.
pub(crate) type Worker = Box<dyn FnOnce() -> CrawlStatus + Send + 'static>;

/// Runs the crawler to completion and returns the final status.
///
/// Never fails: a non-zero exit becomes `failed`, a process that cannot be
/// started becomes `error`.
pub fn run_to_completion(job: &CrawlJob, command: &CrawlCommand) -> CrawlStatus {
    let started = Instant::now();
    let output = match command.to_command().output() {
        Ok(output) => output,
        Err(err) => {
            tracing::error!(crawl_id = %job.id, error = %err, "crawler could not be started");
            return CrawlStatus::Error {
                error: Some(err.to_string()),
            };
        }
    };

    for line in String::from_utf8_lossy(&output.stdout).lines() {
        tracing::debug!(crawl_id = %job.id, "crawler: {line}");
    }
    for line in String::from_utf8_lossy(&output.stderr).lines() {
        tracing::warn!(crawl_id = %job.id, "crawler stderr: {line}");
    }

    let duration_ms = started.elapsed().as_millis() as u64;
    if output.status.success() {
        tracing::info!(crawl_id = %job.id, duration_ms, "crawl completed");
        CrawlStatus::completed_now(&job.output_folder)
    } else {
        let detail = match output.status.code() {
            Some(code) => format!("crawler exited with code {code}"),
            None => "crawler was terminated by a signal".to_string(),
        };
        tracing::warn!(crawl_id = %job.id, duration_ms, error = %detail, "crawl failed");
        CrawlStatus::Failed {
            error: Some(detail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn missing_program_records_error() {
        let job = CrawlJob::new(Path::new("crawls"), "Links", "Broken Links", 0);
        let command = CrawlCommand {
            program: PathBuf::from("/nonexistent/crawler-binary"),
            args: Vec::new(),
        };
        let status = run_to_completion(&job, &command);
        assert_eq!(status.label(), "error");
        assert!(status.error_detail().is_some());
    }

    #[cfg(unix)]
    #[test]
    fn exit_code_decides_outcome() {
        let job = CrawlJob::new(Path::new("crawls"), "Links", "Broken Links", 0);
        let ok = CrawlCommand {
            program: PathBuf::from("sh"),
            args: vec!["-c".to_string(), "echo crawled".to_string()],
        };
        assert!(matches!(
            run_to_completion(&job, &ok),
            CrawlStatus::Completed { .. }
        ));

        let failing = CrawlCommand {
            program: PathBuf::from("sh"),
            args: vec!["-c".to_string(), "exit 3".to_string()],
        };
        assert_eq!(
            run_to_completion(&job, &failing),
            CrawlStatus::Failed {
                error: Some("crawler exited with code 3".to_string())
            }
        );
    }

    #[test]
    fn worker_start_failure_records_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let job = CrawlJob::new(dir.path(), "Links", "Broken Links", 0);
        fs::create_dir_all(&job.output_folder).unwrap();
        let prepared = PreparedCrawl {
            command: CrawlCommand {
                program: PathBuf::from("crawler"),
                args: Vec::new(),
            },
            job,
            url_count: 1,
        };
        let status_file = prepared.status_file();
        let launcher = CrawlLauncher::new(CrawlerSettings::new("crawler", dir.path()));

        let result =
            launcher.launch_with(prepared, |_, _| Err(io::Error::other("thread limit reached")));
        assert!(matches!(result, Err(CrawlError::Worker(_))));

        let recorded = status_file.read().unwrap().unwrap();
        assert_eq!(recorded.label(), "error");
        assert_eq!(recorded.error_detail(), Some("thread limit reached"));
    }
}
