// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tally run <script>` - Replay a script while polling its report

use crate::output::{self, Chunk, OutputFormat, Summary};
use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tally_core::Report;
use tally_engine::{run_script, PollerConfig, StopReason};
use tokio::sync::mpsc;

#[derive(Args)]
pub struct RunArgs {
    /// Job script to replay
    pub script: PathBuf,

    /// Delay between report drains (milliseconds)
    #[arg(long, default_value = "100")]
    pub poll_interval_ms: u64,

    /// Empty drains in a row before giving up (0 = wait for the job)
    #[arg(long, default_value = "0")]
    pub max_idle_polls: u32,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub async fn handle(args: RunArgs, separators: Option<&Path>) -> Result<()> {
    let (script, separators) = super::load_script(&args.script, separators)?;
    let report = Arc::new(Report::with_separators(separators));
    let config = PollerConfig {
        interval: Duration::from_millis(args.poll_interval_ms),
        max_idle_polls: args.max_idle_polls,
    };

    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    let format = args.format;
    let printer = tokio::spawn(async move {
        let mut seq = 0;
        while let Some(text) = rx.recv().await {
            output::print_chunk(&Chunk { seq, text: &text }, format)?;
            seq += 1;
        }
        Ok::<_, std::io::Error>(())
    });

    let polled = run_script(&script, Arc::clone(&report), config, tx).await;
    // A failed write closes the channel, so report the write error first
    printer.await??;
    let summary = polled?;

    output::print_summary(
        &Summary {
            entries: summary.entries,
            chunks: summary.chunks,
            contains_link_sets: summary.contains_link_sets,
            stopped: match summary.stop {
                StopReason::Finished => None,
                StopReason::Idle => Some("idle"),
            },
        },
        format,
    )?;
    Ok(())
}
