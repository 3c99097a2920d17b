//! Subscriber set-up writes through the configured writer.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use audit_cli::logging::{LogConfig, LogFormat, init_logging_with_writer};
use tracing::level_filters::LevelFilter;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn json_logs_reach_the_writer_at_the_configured_level() {
    let capture = Capture::default();
    let writer = capture.clone();
    let mut config = LogConfig::default()
        .with_level(LevelFilter::INFO)
        .with_format(LogFormat::Json)
        .with_ansi(false);
    config.use_env_filter = false;
    init_logging_with_writer(&config, move || writer.clone());

    tracing::info!(target: "audit_crawl", crawl_id = "links_broken_links_0", "prepared crawl");
    tracing::debug!(target: "audit_crawl", "hidden at info");

    let output = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("prepared crawl"));
    assert!(output.contains("links_broken_links_0"));
    assert!(!output.contains("hidden at info"));
}
