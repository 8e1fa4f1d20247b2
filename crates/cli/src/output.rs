// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// One drained piece of a report
#[derive(Debug, Serialize)]
pub struct Chunk<'a> {
    pub seq: usize,
    pub text: &'a str,
}

impl fmt::Display for Chunk<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// Totals printed after a report is fully drained
#[derive(Debug, Serialize)]
pub struct Summary {
    pub entries: usize,
    pub chunks: usize,
    pub contains_link_sets: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopped: Option<&'static str>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} entries in {} chunks", self.entries, self.chunks)?;
        if let Some(stopped) = self.stopped {
            write!(f, " (stopped: {})", stopped)?;
        }
        if self.contains_link_sets {
            write!(f, "; broken links reported")?;
        }
        Ok(())
    }
}

/// Write a chunk: raw text as-is, or one JSON object per line
pub fn write_chunk<W: Write>(
    out: &mut W,
    chunk: &Chunk<'_>,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write!(out, "{}", chunk)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, chunk)?;
            writeln!(out)?;
        }
    }
    out.flush()
}

/// Write the summary line
pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &Summary,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", summary)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, summary)?;
            writeln!(out)?;
        }
    }
    out.flush()
}

/// Print a chunk to stdout
pub fn print_chunk(chunk: &Chunk<'_>, format: OutputFormat) -> io::Result<()> {
    write_chunk(&mut io::stdout().lock(), chunk, format)
}

/// Print the summary: stderr for text so stdout stays the bare report
pub fn print_summary(summary: &Summary, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_summary(&mut io::stderr().lock(), summary, format),
        OutputFormat::Json => write_summary(&mut io::stdout().lock(), summary, format),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
