use std::path::Path;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{info, info_span};

use audit_cli::settings::Settings;
use audit_crawl::{CrawlLauncher, CrawlStatus, StatusFile, bundle_reports, list_reports};
use audit_export::{ExportTable, write_xlsx};
use audit_ingest::{SourceAudit, TargetAudit, load_mapping_table, load_source_audit, load_target_audit};
use audit_model::{
    ExpandedMappingRow, IssueFilter, MappingTable, NOT_AVAILABLE, Priority, TargetFilter,
};
use audit_recon::{
    AffectedUrlRow, IssueGroup, affected_urls, build_issue_groups, category_options,
    compare_tools, default_type_selection, expand_categories, filter_expanded, filter_target_issues,
    find_displayed_issue, issue_url_counts, issues_by_priority, priority_totals,
    target_type_options, type_options,
};

use crate::cli::{
    AuditArgs, CategoriesArgs, ChartArgs, CompareArgs, CrawlArgs, FilterArgs, StatusArgs,
    TargetArgs, UrlsArgs,
};
use crate::summary::{
    print_chart, print_comparison, print_filter_options, print_issue_groups, print_priority_buckets, print_reports,
    print_status,
};

/// Mapping table plus both uploaded audits, all loaded up front.
struct Inputs {
    mapping: MappingTable,
    source: SourceAudit,
    target: TargetAudit,
}

fn load_inputs(settings: &Settings, audits: &AuditArgs) -> Result<Inputs> {
    let mapping = load_mapping_table(&settings.mapping_file)
        .with_context(|| format!("load mapping table {}", settings.mapping_file.display()))?;
    let source = load_source_audit(&audits.source)
        .with_context(|| format!("load source audit {}", audits.source.display()))?;
    let target = load_target_audit(&audits.target)
        .with_context(|| format!("load target audit {}", audits.target.display()))?;
    Ok(Inputs {
        mapping,
        source,
        target,
    })
}

/// Builds the operator's selection; without `--type` the Error and Warning
/// types are preselected unless `--all-types` is given.
fn issue_filter(expanded: &[ExpandedMappingRow], args: &FilterArgs) -> IssueFilter {
    let types = if !args.types.is_empty() {
        args.types.clone()
    } else if args.all_types {
        Vec::new()
    } else {
        default_type_selection(expanded)
    };
    IssueFilter::new()
        .with_categories(args.categories.iter().cloned())
        .with_types(types)
}

/// The category view under `filter`, as the operator sees it.
fn displayed_groups(inputs: &Inputs, args: &FilterArgs) -> Vec<IssueGroup> {
    let expanded = expand_categories(&inputs.mapping);
    let filter = issue_filter(&expanded, args);
    let selected: Vec<ExpandedMappingRow> = filter_expanded(&expanded, &filter)
        .into_iter()
        .cloned()
        .collect();
    build_issue_groups(&selected, &inputs.source)
}

fn export(table: &ExportTable, path: Option<&Path>) -> Result<()> {
    if let Some(path) = path {
        write_xlsx(table, path).with_context(|| format!("export {}", path.display()))?;
        println!("Exported {} rows to {}", table.rows.len(), path.display());
    }
    Ok(())
}

pub fn run_categories(settings: &Settings, args: &CategoriesArgs) -> Result<()> {
    let inputs = load_inputs(settings, &args.audits)?;
    if args.list_options {
        let expanded = expand_categories(&inputs.mapping);
        print_filter_options(&[
            ("--category", category_options(&expanded)),
            ("--type", type_options(&expanded)),
        ]);
        return Ok(());
    }
    let groups = displayed_groups(&inputs, &args.filter);
    print_issue_groups(&groups);
    Ok(())
}

pub fn run_chart(settings: &Settings, args: &ChartArgs) -> Result<()> {
    let inputs = load_inputs(settings, &args.audits)?;
    let expanded = expand_categories(&inputs.mapping);
    let filter = issue_filter(&expanded, &args.filter);
    let Some(counts) = issue_url_counts(&inputs.mapping, &inputs.source, &filter) else {
        println!("No data available for the selected filters.");
        return Ok(());
    };
    print_chart(&counts);
    export(&ExportTable::from_chart(&counts), args.export.as_deref())
}

pub fn run_urls(settings: &Settings, args: &UrlsArgs) -> Result<()> {
    let inputs = load_inputs(settings, &args.audits)?;
    let urls = affected_urls(&inputs.source, &args.issue);
    if urls.is_empty() {
        println!("No affected URLs found for '{}'.", args.issue);
        return Ok(());
    }
    for url in &urls {
        println!("{url}");
    }
    let issue_type = inputs
        .mapping
        .find_by_source_name(&args.issue)
        .map_or_else(|| NOT_AVAILABLE.to_string(), |entry| entry.source_issue_type.clone());
    let rows: Vec<AffectedUrlRow> = urls
        .into_iter()
        .map(|url| AffectedUrlRow {
            url,
            issue_type: issue_type.clone(),
            issue: args.issue.clone(),
        })
        .collect();
    export(&ExportTable::from_url_rows(&rows), args.export.as_deref())
}

pub fn run_target(settings: &Settings, args: &TargetArgs) -> Result<()> {
    let inputs = load_inputs(settings, &args.audits)?;
    if args.list_options {
        let priorities: Vec<String> = Priority::ORDERED.iter().map(ToString::to_string).collect();
        print_filter_options(&[
            ("--priority", priorities),
            ("--type", target_type_options(&inputs.target.issues)),
        ]);
        return Ok(());
    }
    let filter = TargetFilter::new()
        .with_priorities(args.priorities.iter().cloned())
        .with_types(args.types.iter().cloned());
    let filtered = filter_target_issues(&inputs.target.issues, &filter);
    let buckets = issues_by_priority(&filtered);
    let totals = priority_totals(&filtered);
    print_priority_buckets(&buckets, &totals);
    export(
        &ExportTable::from_target_issues(&filtered),
        args.export.as_deref(),
    )
}

pub fn run_compare(settings: &Settings, args: &CompareArgs) -> Result<()> {
    let inputs = load_inputs(settings, &args.audits)?;
    let comparison = compare_tools(&inputs.mapping);
    print_comparison(&comparison);
    export(&ExportTable::from_matched(&comparison), args.export.as_deref())
}

/// Launches the crawl and waits for it. Returns whether it completed.
pub fn run_crawl(settings: &Settings, args: &CrawlArgs) -> Result<bool> {
    let inputs = load_inputs(settings, &args.audits)?;
    let groups = displayed_groups(&inputs, &args.filter);
    let displayed = find_displayed_issue(&groups, &args.category, &args.issue).ok_or_else(|| {
        anyhow!(
            "'{}' has no affected URLs under category '{}' with the current filters",
            args.issue,
            args.category
        )
    })?;

    let launcher = CrawlLauncher::new(settings.crawler.clone());
    let job = launcher.job(&displayed.category, &displayed.name, displayed.ordinal);
    let span = info_span!("crawl", crawl_id = %job.id);
    let _guard = span.enter();

    let status_file = StatusFile::new(job.status_path());
    if let Some(existing) = status_file.read()? {
        bail!(
            "crawl {} already has status '{}'; run `seo-audit status \"{}\" \"{}\" {} --reset` to start over",
            job.id,
            existing.label(),
            displayed.category,
            displayed.name,
            displayed.ordinal
        );
    }

    let prepared = launcher.prepare(job, &displayed.urls, &inputs.mapping)?;
    let job = prepared.job.clone();
    println!(
        "Crawling {} URLs for '{}' ({})",
        prepared.url_count, job.issue, job.id
    );
    let handle = launcher.launch(prepared)?;
    let status = wait_for_crawl(&status_file, handle, settings.poll_interval)?;
    print_status(&job.id, Some(&status));

    if !matches!(status, CrawlStatus::Completed { .. }) {
        return Ok(false);
    }
    let reports = list_reports(&job.output_folder)?;
    print_reports(&reports);
    if args.zip && !reports.is_empty() {
        let bundle = settings.crawler.crawls_dir.join(job.bundle_name());
        let count = bundle_reports(&job.output_folder, &bundle)?;
        println!("Bundled {count} reports into {}", bundle.display());
    }
    Ok(true)
}

/// Re-reads the status file every `interval` until it leaves `running`.
fn wait_for_crawl(
    status_file: &StatusFile,
    handle: JoinHandle<CrawlStatus>,
    interval: Duration,
) -> Result<CrawlStatus> {
    loop {
        if let Some(status) = status_file.read()?
            && status.is_finished()
        {
            handle
                .join()
                .map_err(|_| anyhow!("crawl worker panicked"))?;
            return Ok(status);
        }
        // The worker could not record its outcome; take it from the thread.
        if handle.is_finished() {
            return handle
                .join()
                .map_err(|_| anyhow!("crawl worker panicked"));
        }
        info!(interval_secs = interval.as_secs(), "crawl still running");
        thread::sleep(interval);
    }
}

pub fn run_status(settings: &Settings, args: &StatusArgs) -> Result<()> {
    let launcher = CrawlLauncher::new(settings.crawler.clone());
    let job = launcher.job(&args.category, &args.issue, args.ordinal);
    let status_file = StatusFile::new(job.status_path());
    if args.reset {
        if status_file.reset()? {
            println!("Status of {} reset.", job.id);
        } else {
            println!("No status recorded for {}.", job.id);
        }
        return Ok(());
    }
    print_status(&job.id, status_file.read()?.as_ref());
    Ok(())
}
