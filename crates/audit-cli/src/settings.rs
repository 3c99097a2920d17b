//! Runtime settings.
//!
//! Values resolve as: command-line flag, then environment variable, then
//! `seo-audit.toml`, then the built-in default.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use audit_crawl::{CrawlerSettings, DEFAULT_EXPORT_TABS};
use serde::Deserialize;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "seo-audit.toml";
pub const MAPPING_ENV: &str = "SEO_AUDIT_MAPPING";
pub const CRAWLER_ENV: &str = "SEO_AUDIT_CRAWLER";

pub const DEFAULT_MAPPING_FILE: &str = "data/mapping/mapping.csv";
pub const DEFAULT_CRAWLER_BINARY: &str = "screamingfrogseospider";
pub const DEFAULT_CONFIG_FOLDER: &str = "config/crawl";
pub const DEFAULT_CRAWLS_DIR: &str = "crawls";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// Contents of `seo-audit.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub mapping_file: Option<PathBuf>,
    pub crawler: CrawlerSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CrawlerSection {
    pub binary: Option<PathBuf>,
    pub config_folder: Option<PathBuf>,
    pub crawls_dir: Option<PathBuf>,
    pub default_export_tabs: Option<String>,
    pub poll_interval_secs: Option<u64>,
}

impl SettingsFile {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid settings file")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read settings file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parse {}", path.display()))
    }
}

/// Values that can be overridden from outside the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub mapping_file: Option<PathBuf>,
    pub crawler_binary: Option<PathBuf>,
}

impl Overrides {
    /// Reads `SEO_AUDIT_MAPPING` and `SEO_AUDIT_CRAWLER`; empty values are ignored.
    pub fn from_env() -> Self {
        let var = |name: &str| {
            std::env::var_os(name)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        };
        Self {
            mapping_file: var(MAPPING_ENV),
            crawler_binary: var(CRAWLER_ENV),
        }
    }
}

/// Fully resolved settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub mapping_file: PathBuf,
    pub crawler: CrawlerSettings,
    pub poll_interval: Duration,
}

impl Settings {
    /// Merges the three layers; `flags` win over `env`, `env` over `file`.
    pub fn resolve(file: SettingsFile, env: Overrides, flags: Overrides) -> Self {
        let crawler = file.crawler;
        let mapping_file = flags
            .mapping_file
            .or(env.mapping_file)
            .or(file.mapping_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MAPPING_FILE));
        let binary = flags
            .crawler_binary
            .or(env.crawler_binary)
            .or(crawler.binary)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CRAWLER_BINARY));
        let poll_secs = crawler
            .poll_interval_secs
            .unwrap_or(DEFAULT_POLL_INTERVAL_SECS)
            .max(1);

        Self {
            mapping_file,
            crawler: CrawlerSettings {
                binary,
                config_folder: crawler
                    .config_folder
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FOLDER)),
                crawls_dir: crawler
                    .crawls_dir
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_CRAWLS_DIR)),
                default_export_tabs: crawler
                    .default_export_tabs
                    .unwrap_or_else(|| DEFAULT_EXPORT_TABS.to_string()),
            },
            poll_interval: Duration::from_secs(poll_secs),
        }
    }

    /// Loads settings for this run.
    ///
    /// An explicit `config` path must exist; otherwise `seo-audit.toml` in
    /// the working directory is used when present.
    pub fn load(config: Option<&Path>, flags: Overrides) -> Result<Self> {
        let file = match config {
            Some(path) => SettingsFile::load(path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    SettingsFile::load(default)?
                } else {
                    SettingsFile::default()
                }
            }
        };
        let settings = Self::resolve(file, Overrides::from_env(), flags);
        tracing::debug!(
            mapping = %settings.mapping_file.display(),
            crawler = %settings.crawler.binary.display(),
            crawls_dir = %settings.crawler.crawls_dir.display(),
            "settings resolved"
        );
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_any_layer() {
        let settings = Settings::resolve(
            SettingsFile::default(),
            Overrides::default(),
            Overrides::default(),
        );
        assert_eq!(settings.mapping_file, PathBuf::from(DEFAULT_MAPPING_FILE));
        assert_eq!(settings.crawler.crawls_dir, PathBuf::from("crawls"));
        assert_eq!(settings.crawler.default_export_tabs, "Internal:All");
        assert_eq!(settings.poll_interval, Duration::from_secs(5));
    }

    #[test]
    fn zero_poll_interval_is_raised_to_one_second() {
        let file = SettingsFile::parse("[crawler]\npoll_interval_secs = 0\n").unwrap();
        let settings = Settings::resolve(file, Overrides::default(), Overrides::default());
        assert_eq!(settings.poll_interval, Duration::from_secs(1));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(SettingsFile::parse("mapping = \"x.csv\"\n").is_err());
    }
}
