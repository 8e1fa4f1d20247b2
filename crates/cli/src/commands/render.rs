// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tally render <script>` - Replay a script and print the report in one drain

use crate::output::{self, Chunk, OutputFormat, Summary};
use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};
use tally_core::Report;

#[derive(Args)]
pub struct RenderArgs {
    /// Job script to replay (pauses are skipped)
    pub script: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn handle(args: RenderArgs, separators: Option<&Path>) -> Result<()> {
    let (script, separators) = super::load_script(&args.script, separators)?;

    let report = Report::with_separators(separators);
    script.replay_now(&report);

    let text = report.drain_since_last();
    let chunks = usize::from(!text.is_empty());
    if chunks > 0 {
        output::print_chunk(&Chunk { seq: 0, text: &text }, args.format)?;
    }
    output::print_summary(
        &Summary {
            entries: report.cursor(),
            chunks,
            contains_link_sets: report.contains_link_sets(),
            stopped: None,
        },
        args.format,
    )?;
    Ok(())
}
