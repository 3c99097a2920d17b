//! Background re-crawl of affected URLs.
//!
//! A crawl hands the affected URLs of one issue to an external headless
//! crawler. The crawler runs on its own thread; the only channel back to
//! the caller is a JSON status file that observers re-read on a timer.
//!
//! ```ignore
//! let launcher = CrawlLauncher::new(CrawlerSettings::new(binary, configs));
//! let job = launcher.job("Links", "Broken Links", 0);
//! let prepared = launcher.prepare(job, &urls, &mapping)?;
//! let status = prepared.status_file();
//! launcher.launch(prepared)?;
//! ```

pub mod command;
pub mod error;
pub mod job;
pub mod launcher;
pub mod reports;
pub mod status;

pub use command::{CrawlCommand, DEFAULT_EXPORT_TABS};
pub use error::{CrawlError, Result};
pub use job::{CrawlJob, sanitize};
pub use launcher::{CrawlLauncher, CrawlerSettings, PreparedCrawl, run_to_completion};
pub use reports::{bundle_reports, list_reports};
pub use status::{CrawlStatus, StatusFile};
