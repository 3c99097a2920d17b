//! Settings layering: flag, environment, file, default.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use audit_cli::settings::{Overrides, Settings, SettingsFile};
use tempfile::TempDir;

const FILE: &str = r#"
mapping_file = "from-file/mapping.csv"

[crawler]
binary = "/opt/crawler/bin/crawl"
config_folder = "configs"
crawls_dir = "out/crawls"
default_export_tabs = "Response Codes:All"
poll_interval_secs = 2
"#;

fn overrides(mapping: Option<&str>, binary: Option<&str>) -> Overrides {
    Overrides {
        mapping_file: mapping.map(PathBuf::from),
        crawler_binary: binary.map(PathBuf::from),
    }
}

#[test]
fn file_values_fill_every_setting() {
    let file = SettingsFile::parse(FILE).unwrap();
    let settings = Settings::resolve(file, Overrides::default(), Overrides::default());
    assert_eq!(settings.mapping_file, PathBuf::from("from-file/mapping.csv"));
    assert_eq!(settings.crawler.binary, PathBuf::from("/opt/crawler/bin/crawl"));
    assert_eq!(settings.crawler.config_folder, PathBuf::from("configs"));
    assert_eq!(settings.crawler.crawls_dir, PathBuf::from("out/crawls"));
    assert_eq!(settings.crawler.default_export_tabs, "Response Codes:All");
    assert_eq!(settings.poll_interval, Duration::from_secs(2));
}

#[test]
fn environment_beats_file_and_flag_beats_environment() {
    let file = SettingsFile::parse(FILE).unwrap();
    let env = overrides(Some("from-env.csv"), Some("env-crawler"));

    let settings = Settings::resolve(file.clone(), env.clone(), Overrides::default());
    assert_eq!(settings.mapping_file, PathBuf::from("from-env.csv"));
    assert_eq!(settings.crawler.binary, PathBuf::from("env-crawler"));

    let settings = Settings::resolve(file, env, overrides(Some("from-flag.csv"), None));
    assert_eq!(settings.mapping_file, PathBuf::from("from-flag.csv"));
    assert_eq!(settings.crawler.binary, PathBuf::from("env-crawler"));
}

#[test]
fn explicit_config_path_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[crawler]\ncrawls_dir = \"elsewhere\"\n").unwrap();

    let settings = Settings::load(Some(&path), overrides(Some("m.csv"), Some("c"))).unwrap();
    assert_eq!(settings.crawler.crawls_dir, PathBuf::from("elsewhere"));
    assert_eq!(settings.mapping_file, PathBuf::from("m.csv"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let error = Settings::load(Some(&dir.path().join("absent.toml")), Overrides::default())
        .unwrap_err();
    assert!(format!("{error:#}").contains("absent.toml"));
}
