//! Crawl job identity and on-disk layout.

use std::path::{Path, PathBuf};

/// Identifies one crawl of one displayed issue.
///
/// The ordinal keeps two crawls of the same category and issue apart; the
/// caller must hand out distinct ordinals for concurrent crawls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlJob {
    pub id: String,
    pub category: String,
    pub issue: String,
    pub ordinal: usize,
    pub output_folder: PathBuf,
}

impl CrawlJob {
    pub fn new(crawls_dir: &Path, category: &str, issue: &str, ordinal: usize) -> Self {
        let id = format!("{}_{}_{ordinal}", sanitize(category), sanitize(issue));
        let output_folder = crawls_dir.join(format!("crawl_{id}"));
        Self {
            id,
            category: category.to_string(),
            issue: issue.to_string(),
            ordinal,
            output_folder,
        }
    }

    /// `<output>/<id>_status.json`
    pub fn status_path(&self) -> PathBuf {
        self.output_folder.join(format!("{}_status.json", self.id))
    }

    /// URL list handed to the crawler.
    pub fn url_list_path(&self) -> PathBuf {
        self.output_folder.join("urls.txt")
    }

    /// File name for a ZIP bundle of this job's reports.
    pub fn bundle_name(&self) -> String {
        format!("crawl_{}.zip", self.id)
    }
}

/// Spaces become underscores, letters are lowercased.
pub fn sanitize(value: &str) -> String {
    value.replace(' ', "_").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_and_paths_follow_layout() {
        let job = CrawlJob::new(Path::new("crawls"), "Internal Links", "Broken Links", 3);
        assert_eq!(job.id, "internal_links_broken_links_3");
        assert_eq!(
            job.output_folder,
            Path::new("crawls/crawl_internal_links_broken_links_3")
        );
        assert_eq!(
            job.status_path(),
            Path::new("crawls/crawl_internal_links_broken_links_3/internal_links_broken_links_3_status.json")
        );
        assert_eq!(job.bundle_name(), "crawl_internal_links_broken_links_3.zip");
    }

    #[test]
    fn ordinal_separates_jobs() {
        let first = CrawlJob::new(Path::new("crawls"), "Links", "Broken Links", 0);
        let second = CrawlJob::new(Path::new("crawls"), "Links", "Broken Links", 1);
        assert_ne!(first.status_path(), second.status_path());
    }
}
