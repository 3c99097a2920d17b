use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use audit_crawl::CrawlStatus;
use audit_model::{ChartColor, IssueSeverity, Priority};
use audit_recon::{IssueGroup, IssueUrlCount, MatchedComparison, PriorityBucket, PriorityTotal};

pub fn print_issue_groups(groups: &[IssueGroup]) {
    if groups.is_empty() {
        println!("No categories with affected URLs for the current filters.");
        return;
    }
    let mut overview = Table::new();
    let mut header = vec![header_cell("Category")];
    header.extend(
        IssueSeverity::ALL
            .into_iter()
            .map(|severity| header_cell(severity.bucket_label())),
    );
    overview.set_header(header);
    apply_table_style(&mut overview);
    for index in 1..=IssueSeverity::ALL.len() {
        align_column(&mut overview, index, CellAlignment::Right);
    }
    for group in groups {
        let counts = group.stats.counts;
        let mut row = vec![
            Cell::new(&group.category)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
        ];
        row.extend(
            IssueSeverity::ALL
                .into_iter()
                .map(|severity| count_cell(counts.get(severity), severity_color(severity))),
        );
        overview.add_row(row);
    }
    println!("{overview}");

    for group in groups.iter().filter(|group| !group.issues.is_empty()) {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("#"),
            header_cell("Issue"),
            header_cell("Type"),
            header_cell("URLs"),
            header_cell("How to fix"),
        ]);
        apply_detail_table_style(&mut table);
        align_column(&mut table, 0, CellAlignment::Right);
        align_column(&mut table, 3, CellAlignment::Right);
        for issue in &group.issues {
            let severity = IssueSeverity::classify(&issue.issue_type);
            table.add_row(vec![
                dim_cell(issue.ordinal),
                Cell::new(&issue.name),
                Cell::new(&issue.issue_type).fg(severity_color(severity)),
                Cell::new(issue.urls.len()),
                Cell::new(&issue.fix_text),
            ]);
        }
        println!();
        println!("{}:", group.category);
        println!("{table}");
    }
}

/// One row per filter flag with the values it accepts.
pub fn print_filter_options(filters: &[(&str, Vec<String>)]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Filter"), header_cell("Options")]);
    apply_table_style(&mut table);
    for (flag, options) in filters {
        table.add_row(vec![Cell::new(flag), option_list_cell(options)]);
    }
    println!("{table}");
}

fn option_list_cell(options: &[String]) -> Cell {
    if options.is_empty() {
        dim_cell("none")
    } else {
        Cell::new(options.join(", "))
    }
}

pub fn print_chart(counts: &[IssueUrlCount]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Issue"),
        header_cell("Type"),
        header_cell("Affected URLs"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for count in counts {
        table.add_row(vec![
            Cell::new(&count.issue),
            Cell::new(&count.issue_type).fg(chart_color(count.color)),
            Cell::new(count.url_count).add_attribute(Attribute::Bold),
        ]);
    }
    println!("{table}");
}

pub fn print_priority_buckets(buckets: &[PriorityBucket<'_>], totals: &[PriorityTotal]) {
    if buckets.is_empty() {
        println!("No target-tool issues match the current filters.");
        return;
    }
    let mut overview = Table::new();
    overview.set_header(vec![header_cell("Priority"), header_cell("URLs")]);
    apply_table_style(&mut overview);
    align_column(&mut overview, 1, CellAlignment::Right);
    for total in totals {
        overview.add_row(vec![
            priority_cell(&total.priority),
            Cell::new(total.urls).fg(chart_color(total.color)),
        ]);
    }
    println!("{overview}");

    for bucket in buckets {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Issue"),
            header_cell("Type"),
            header_cell("URLs"),
            header_cell("% of Total"),
        ]);
        apply_detail_table_style(&mut table);
        align_column(&mut table, 2, CellAlignment::Right);
        align_column(&mut table, 3, CellAlignment::Right);
        for issue in &bucket.issues {
            let percent = match issue.percent_of_total {
                Some(value) => Cell::new(value),
                None => dim_cell("-"),
            };
            table.add_row(vec![
                Cell::new(&issue.name),
                Cell::new(&issue.issue_type),
                Cell::new(issue.urls),
                percent,
            ]);
        }
        println!();
        println!("{} priority:", bucket.priority);
        println!("{table}");
    }
}

pub fn print_comparison(comparison: &MatchedComparison<'_>) {
    let summary = comparison.summary;
    let mut counts = Table::new();
    counts.set_header(vec![header_cell("Measure"), header_cell("Count")]);
    apply_table_style(&mut counts);
    align_column(&mut counts, 1, CellAlignment::Right);
    counts.add_row(vec![Cell::new("Total matched issues"), Cell::new(summary.total_matched)]);
    counts.add_row(vec![Cell::new("Source-tool issues"), Cell::new(summary.source_issues)]);
    counts.add_row(vec![Cell::new("Found in both"), Cell::new(summary.found_in_both)]);
    counts.add_row(vec![Cell::new("Target-tool issues"), Cell::new(summary.target_issues)]);
    println!("{counts}");

    if comparison.rows.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source issue"),
        header_cell("Source type"),
        header_cell("Target issue"),
        header_cell("Target type"),
        header_cell("Priority"),
    ]);
    apply_detail_table_style(&mut table);
    for entry in &comparison.rows {
        table.add_row(vec![
            Cell::new(&entry.source_issue_name),
            Cell::new(&entry.source_issue_type),
            Cell::new(&entry.target_issue_name),
            Cell::new(&entry.target_issue_type),
            priority_cell(&Priority::parse(&entry.target_priority)),
        ]);
    }
    println!();
    println!("{table}");
}

pub fn print_status(id: &str, status: Option<&CrawlStatus>) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Crawl"),
        header_cell("Status"),
        header_cell("Detail"),
    ]);
    apply_table_style(&mut table);
    let (label, detail) = match status {
        None => (dim_cell("not started"), dim_cell("-")),
        Some(status) => (status_cell(status), Cell::new(status_detail(status))),
    };
    table.add_row(vec![Cell::new(id), label, detail]);
    println!("{table}");
}

pub fn print_reports(reports: &[impl AsRef<Path>]) {
    if reports.is_empty() {
        println!("No report files found in the crawl output.");
        return;
    }
    println!("Reports:");
    for report in reports {
        println!("- {}", report.as_ref().display());
    }
}

fn status_detail(status: &CrawlStatus) -> String {
    match status {
        CrawlStatus::Running { start_time } => format!("started at {start_time}"),
        CrawlStatus::Completed {
            end_time,
            output_folder,
        } => format!("finished at {end_time}, output in {}", output_folder.display()),
        CrawlStatus::Failed { .. } | CrawlStatus::Error { .. } => status
            .error_detail()
            .unwrap_or("no detail recorded")
            .to_string(),
    }
}

fn status_cell(status: &CrawlStatus) -> Cell {
    let color = match status {
        CrawlStatus::Running { .. } => Color::Yellow,
        CrawlStatus::Completed { .. } => Color::Green,
        CrawlStatus::Failed { .. } | CrawlStatus::Error { .. } => Color::Red,
    };
    Cell::new(status.label())
        .fg(color)
        .add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_detail_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_color(severity: IssueSeverity) -> Color {
    chart_color(severity.color())
}

fn chart_color(color: ChartColor) -> Color {
    match color {
        ChartColor::Red => Color::Red,
        ChartColor::Yellow => Color::Yellow,
        ChartColor::Green => Color::Green,
    }
}

fn priority_cell(priority: &Priority) -> Cell {
    match priority.color() {
        Some(color) => Cell::new(priority.as_str()).fg(chart_color(color)),
        None => dim_cell(priority.as_str()),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
