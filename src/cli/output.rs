/// Output formatting: JSON and table modes, TTY detection, error output.
use std::io::{IsTerminal, Write};

use comfy_table::{Cell, Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::types::{ErrorOutput, RunReport};

/// Resolve the effective output format, handling `--json` flag and TTY auto-detection.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    if fmt == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        fmt
    }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub fields: Option<Vec<String>>,
    pub no_header: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, fields: Option<&str>, no_header: bool) -> Self {
        let format = resolve_format(fmt, json_flag);
        let fields = fields.map(|f| f.split(',').map(str::trim).map(str::to_owned).collect());
        Self {
            format,
            fields,
            no_header,
        }
    }

    /// Whether a field should be included in table output.
    fn include_field(&self, name: &str) -> bool {
        self.fields
            .as_ref()
            .is_none_or(|f| f.iter().any(|n| n == name))
    }
}

/// Write the end-of-run report to stdout.
pub fn write_report(report: &RunReport, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Compact => print_compact_json(report),
        OutputFormat::Table | OutputFormat::Auto => write_report_human(report, ctx),
    }
}

fn write_report_human(report: &RunReport, ctx: &OutputCtx) {
    if report.obsolete_versions.is_empty() {
        println!("No obsolete flow versions found. Deploy skipped.");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);

    let mut headers: Vec<Cell> = Vec::new();
    if ctx.include_field("developer_name") {
        headers.push(Cell::new("DEVELOPER NAME"));
    }
    if ctx.include_field("version") {
        headers.push(Cell::new("VERSION"));
    }
    if ctx.include_field("status") {
        headers.push(Cell::new("STATUS"));
    }
    if ctx.include_field("member") {
        headers.push(Cell::new("MEMBER"));
    }
    if ctx.include_field("id") {
        headers.push(Cell::new("ID"));
    }

    if !ctx.no_header {
        table.set_header(headers);
    }

    for flow in &report.obsolete_versions {
        let mut row: Vec<Cell> = Vec::new();
        if ctx.include_field("developer_name") {
            row.push(Cell::new(&flow.developer_name));
        }
        if ctx.include_field("version") {
            row.push(Cell::new(flow.version));
        }
        if ctx.include_field("status") {
            row.push(Cell::new(&flow.status));
        }
        if ctx.include_field("member") {
            row.push(Cell::new(&flow.member));
        }
        if ctx.include_field("id") {
            row.push(Cell::new(&flow.id));
        }
        table.add_row(row);
    }

    println!("{table}");

    let count = report.obsolete_versions.len();
    let noun = if count == 1 { "version" } else { "versions" };
    println!(
        "{count} obsolete flow {noun} listed in {}destructiveChanges.xml",
        report.output_directory
    );
    if report.deployed {
        if report.check_only {
            println!("Validation-only deploy submitted (no deletions applied).");
        } else {
            println!("Destructive deploy submitted.");
        }
    }
}

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match fmt {
        OutputFormat::Json | OutputFormat::Compact => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        OutputFormat::Table | OutputFormat::Auto => {
            let _ = writeln!(out, "Error: {}", err.error.message);
        }
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_compact_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}
