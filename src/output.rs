//! Output formatting for fetched data.
//!
//! Data goes to the given writer (stdout from the CLI); logging stays on
//! stderr.

use anyhow::Result;
use clap::ValueEnum;
use serde_json::Value;
use std::io::Write;
use tracing::debug;

use crate::stops::{Stop, render_stops};

/// How the `stops` command prints its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// All stops on one line, `[Stop ID: ..., ...]`
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
}

/// Writes the stops list in a single write.
pub fn write_stops<W: Write>(out: &mut W, stops: &[Stop], format: OutputFormat) -> Result<()> {
    debug!(count = stops.len(), ?format, "Writing stops");
    let rendered = match format {
        OutputFormat::Text => render_stops(stops),
        OutputFormat::Json => serde_json::to_string_pretty(stops)?,
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}

/// Writes the raw routes payload, compact unless `pretty`.
pub fn write_routes<W: Write>(out: &mut W, data: &Value, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(data)?
    } else {
        serde_json::to_string(data)?
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}
