//! CLI argument definitions for `seo-audit`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "seo-audit",
    version,
    about = "Reconcile two SEO audit exports and re-crawl affected URLs",
    long_about = "Reconcile a per-page site-audit export with a crawler's issue overview.\n\n\
                  A mapping table joins the two issue taxonomies. Issues can be browsed by\n\
                  category, charted by affected-URL count, compared across tools, exported\n\
                  to XLSX, and their affected URLs re-crawled with a headless crawler."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Mapping table CSV (overrides SEO_AUDIT_MAPPING and the config file).
    #[arg(long = "mapping", value_name = "CSV", global = true)]
    pub mapping: Option<PathBuf>,

    /// Headless crawler executable (overrides SEO_AUDIT_CRAWLER and the config file).
    #[arg(long = "crawler", value_name = "PATH", global = true)]
    pub crawler: Option<PathBuf>,

    /// Settings file (default: ./seo-audit.toml when present).
    #[arg(long = "config", value_name = "TOML", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Source-tool issues grouped by category, with per-severity URL counts.
    Categories(CategoriesArgs),

    /// Affected-URL count per issue, largest first.
    Chart(ChartArgs),

    /// Page URLs affected by one source-tool issue.
    Urls(UrlsArgs),

    /// Target-tool issues grouped by priority.
    Target(TargetArgs),

    /// Issues mapped in both tools.
    Compare(CompareArgs),

    /// Re-crawl the affected URLs of one displayed issue.
    Crawl(CrawlArgs),

    /// Show or reset the status of a crawl.
    Status(StatusArgs),
}

/// The two uploaded audit exports.
#[derive(Args)]
pub struct AuditArgs {
    /// Source-tool site-audit export (one row per page).
    #[arg(long = "source", value_name = "CSV")]
    pub source: PathBuf,

    /// Target-tool issues overview export.
    #[arg(long = "target", value_name = "CSV")]
    pub target: PathBuf,
}

/// Category and issue-type selection.
#[derive(Args)]
pub struct FilterArgs {
    /// Only these categories (repeatable; any match counts).
    #[arg(long = "category", value_name = "NAME")]
    pub categories: Vec<String>,

    /// Only these issue types (repeatable; default: Error and Warning types).
    #[arg(long = "type", value_name = "TYPE")]
    pub types: Vec<String>,

    /// Include every issue type instead of the Error/Warning default.
    #[arg(long = "all-types", conflicts_with = "types")]
    pub all_types: bool,
}

#[derive(Args)]
pub struct CategoriesArgs {
    #[command(flatten)]
    pub audits: AuditArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// List the categories and issue types the filters accept, then exit.
    #[arg(long = "list-options")]
    pub list_options: bool,
}

#[derive(Args)]
pub struct ChartArgs {
    #[command(flatten)]
    pub audits: AuditArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Also write the chart data to this XLSX file.
    #[arg(long = "export", value_name = "XLSX")]
    pub export: Option<PathBuf>,
}

#[derive(Args)]
pub struct UrlsArgs {
    #[command(flatten)]
    pub audits: AuditArgs,

    /// Source-tool issue name.
    #[arg(value_name = "ISSUE")]
    pub issue: String,

    /// Also write `URL | Issue Type | Issue` rows to this XLSX file.
    #[arg(long = "export", value_name = "XLSX")]
    pub export: Option<PathBuf>,
}

#[derive(Args)]
pub struct TargetArgs {
    #[command(flatten)]
    pub audits: AuditArgs,

    /// Only these priorities (repeatable).
    #[arg(long = "priority", value_name = "PRIORITY")]
    pub priorities: Vec<String>,

    /// Only these issue types (repeatable).
    #[arg(long = "type", value_name = "TYPE")]
    pub types: Vec<String>,

    /// Also write the filtered issues to this XLSX file.
    #[arg(long = "export", value_name = "XLSX")]
    pub export: Option<PathBuf>,

    /// List the priorities and issue types the filters accept, then exit.
    #[arg(long = "list-options")]
    pub list_options: bool,
}

#[derive(Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub audits: AuditArgs,

    /// Also write the matched mapping rows to this XLSX file.
    #[arg(long = "export", value_name = "XLSX")]
    pub export: Option<PathBuf>,
}

#[derive(Args)]
pub struct CrawlArgs {
    #[command(flatten)]
    pub audits: AuditArgs,

    /// Filters the issue was displayed under; they determine its ordinal.
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Category the issue is displayed under.
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    /// Source-tool issue name.
    #[arg(value_name = "ISSUE")]
    pub issue: String,

    /// Bundle the crawl's CSV reports into a ZIP next to the output folder.
    #[arg(long = "zip")]
    pub zip: bool,
}

#[derive(Args)]
pub struct StatusArgs {
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    #[arg(value_name = "ISSUE")]
    pub issue: String,

    /// Display ordinal printed by `categories`.
    #[arg(value_name = "ORDINAL")]
    pub ordinal: usize,

    /// Delete the status record so the crawl can be launched again.
    #[arg(long = "reset")]
    pub reset: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
