//! SEO audit reconciliation CLI.

use clap::{ColorChoice, Parser};
use audit_cli::logging::{LogConfig, LogFormat, init_logging};
use audit_cli::settings::{Overrides, Settings};
use audit_crawl::CrawlError;
use audit_export::ExportError;
use audit_ingest::IngestError;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    run_categories, run_chart, run_compare, run_crawl, run_status, run_target, run_urls,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let flags = Overrides {
        mapping_file: cli.mapping.clone(),
        crawler_binary: cli.crawler.clone(),
    };
    let settings = match Settings::load(cli.config.as_deref(), flags) {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    };
    let outcome = match &cli.command {
        Command::Categories(args) => run_categories(&settings, args).map(|()| true),
        Command::Chart(args) => run_chart(&settings, args).map(|()| true),
        Command::Urls(args) => run_urls(&settings, args).map(|()| true),
        Command::Target(args) => run_target(&settings, args).map(|()| true),
        Command::Compare(args) => run_compare(&settings, args).map(|()| true),
        Command::Crawl(args) => run_crawl(&settings, args),
        Command::Status(args) => run_status(&settings, args).map(|()| true),
    };
    let exit_code = match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(error) => {
            eprintln!("error: {error:#}");
            if let Some(hint) = user_hint(&error) {
                eprintln!("{hint}");
            }
            1
        }
    };
    std::process::exit(exit_code);
}

/// Recovery hint of the first library error in the chain.
fn user_hint(error: &anyhow::Error) -> Option<&str> {
    error.chain().find_map(|cause| {
        if let Some(err) = cause.downcast_ref::<IngestError>() {
            Some(err.user_message())
        } else if let Some(err) = cause.downcast_ref::<CrawlError>() {
            Some(err.user_message())
        } else {
            cause
                .downcast_ref::<ExportError>()
                .map(ExportError::user_message)
        }
    })
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
