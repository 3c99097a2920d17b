//! Crawl report discovery and bundling.

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::{CrawlError, Result};

/// CSV reports in `output_folder`, sorted by file name.
pub fn list_reports(output_folder: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(output_folder).map_err(|err| CrawlError::io(output_folder, err))?;
    let mut reports = Vec::new();
    for entry in entries {
        let path = entry.map_err(|err| CrawlError::io(output_folder, err))?.path();
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv && path.is_file() {
            reports.push(path);
        }
    }
    reports.sort();
    Ok(reports)
}

/// Writes every report of `output_folder` into a deflated ZIP at `zip_path`,
/// stored under its bare file name. Returns the number of reports bundled.
pub fn bundle_reports(output_folder: &Path, zip_path: &Path) -> Result<usize> {
    let reports = list_reports(output_folder)?;
    let file = File::create(zip_path).map_err(|err| CrawlError::io(zip_path, err))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for report in &reports {
        let Some(name) = report.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        zip.start_file(name, options)?;
        let mut source = File::open(report).map_err(|err| CrawlError::io(report, err))?;
        io::copy(&mut source, &mut zip).map_err(|err| CrawlError::io(report, err))?;
    }
    zip.finish()?;
    tracing::info!(
        zip = %zip_path.display(),
        reports = reports.len(),
        "bundled crawl reports"
    );
    Ok(reports.len())
}
