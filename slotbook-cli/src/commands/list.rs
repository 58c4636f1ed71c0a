//! List command implementation.
//!
//! This module implements the `list` command, which displays every
//! reservation in various formats (table, JSON, CSV, TSV).

use crate::error::CliError;
use crate::utils::{format_timestamp, open_engine, CallerArgs, GlobalOptions};
use clap::Args;
use slotbook::config::OutputFormat;
use slotbook::{ReservationView, Status};
use std::io::Write;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 11] = [
    "id",
    "name",
    "email",
    "phone",
    "date",
    "time",
    "service",
    "notes",
    "status",
    "created_at",
    "is_guest",
];

/// List all reservations (admin).
#[derive(Args)]
pub struct ListCommand {
    /// Output format (table, json, csv, tsv)
    #[arg(long, value_name = "FORMAT", value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Only show reservations with this status
    #[arg(long, value_name = "STATUS")]
    pub status: Option<String>,

    #[command(flatten)]
    pub caller: CallerArgs,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse()
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Resolve caller and filter
        let caller = self.caller.to_caller()?;
        let status_filter = self
            .status
            .as_deref()
            .map(str::parse::<Status>)
            .transpose()?;

        // 2. Open engine and query
        let (config, engine) = open_engine(global)?;
        let mut views = engine.list_all(&caller)?;

        // 3. Apply filters
        if let Some(status) = status_filter {
            views.retain(|v| v.status == status);
        }

        // 4. Format and output to stdout
        let format = self
            .format
            .or(config.output_format)
            .unwrap_or(OutputFormat::Table);
        match format {
            OutputFormat::Table => format_as_table(&views)?,
            OutputFormat::Json => format_as_json(&views)?,
            OutputFormat::Csv => format_as_delimited(&views, b',')?,
            OutputFormat::Tsv => format_as_delimited(&views, b'\t')?,
        }

        Ok(())
    }
}

/// Format reservations as a human-readable table.
fn format_as_table(views: &[ReservationView]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle, "ID\tDATE\tTIME\tSERVICE\tSTATUS\tNAME\tEMAIL\tPHONE\tGUEST")?;

    for v in views {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            v.id,
            v.date,
            v.time,
            v.service,
            v.status,
            v.name,
            v.email,
            v.phone,
            if v.is_guest { "yes" } else { "no" },
        )?;
    }

    Ok(())
}

/// Format reservations as JSON.
fn format_as_json(views: &[ReservationView]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, views)?;
    writeln!(handle)?;

    Ok(())
}

/// Format reservations as delimited output (CSV or TSV).
fn format_as_delimited(views: &[ReservationView], delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    writer.write_record(COLUMN_HEADERS)?;

    for v in views {
        writer.write_record(&[
            v.id.to_string(),
            v.name.clone(),
            v.email.clone(),
            v.phone.clone(),
            v.date.to_string(),
            v.time.to_string(),
            v.service.clone(),
            v.notes.clone().unwrap_or_default(),
            v.status.to_string(),
            format_timestamp(v.created_at),
            v.is_guest.to_string(),
        ])?;
    }

    writer.flush()?;

    Ok(())
}
