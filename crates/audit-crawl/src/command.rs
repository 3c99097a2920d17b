//! Crawler command line.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Export tabs used when the mapping row does not name any.
pub const DEFAULT_EXPORT_TABS: &str = "Internal:All";

/// Program and arguments of one headless crawler run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl CrawlCommand {
    /// Builds the headless list-crawl invocation writing CSV exports.
    pub fn headless(
        program: &Path,
        url_list: &Path,
        output_folder: &Path,
        config: &Path,
        export_tabs: &str,
    ) -> Self {
        let args = vec![
            "--crawl-list".to_string(),
            url_list.display().to_string(),
            "--headless".to_string(),
            "--output-folder".to_string(),
            output_folder.display().to_string(),
            "--config".to_string(),
            config.display().to_string(),
            "--export-format".to_string(),
            "csv".to_string(),
            "--export-tabs".to_string(),
            export_tabs.to_string(),
            "--overwrite".to_string(),
            "--save-crawl".to_string(),
        ];
        Self {
            program: program.to_path_buf(),
            args,
        }
    }

    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

impl fmt::Display for CrawlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
