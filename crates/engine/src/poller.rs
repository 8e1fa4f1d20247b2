// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interval-driven consumer that drains a report while its job runs.

use crate::script::Script;
use std::sync::Arc;
use std::time::Duration;
use tally_core::Report;
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::time::{interval, MissedTickBehavior};

const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Channel the poller delivers rendered chunks into
pub type ChunkSender = mpsc::UnboundedSender<String>;
/// Receiving half of [`ChunkSender`]
pub type ChunkReceiver = mpsc::UnboundedReceiver<String>;

/// Errors that can occur while polling
#[derive(Debug, Error)]
pub enum PollError {
    #[error("chunk receiver dropped after {delivered} chunks")]
    SinkClosed { delivered: usize },
}

/// Poller timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollerConfig {
    /// Delay between drains
    pub interval: Duration,
    /// Consecutive empty drains before giving up on an unfinished job (0 = never)
    pub max_idle_polls: u32,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(500),
            max_idle_polls: 120,
        }
    }
}

/// Why the poller stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The producer signalled completion and the final drain ran
    Finished,
    /// `max_idle_polls` empty drains in a row while the producer was still running;
    /// [`run_script`] cancels the producer in this case
    Idle,
}

/// Outcome of a poller run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSummary {
    /// Non-empty chunks delivered
    pub chunks: usize,
    /// Report cursor when the poller stopped
    pub entries: usize,
    pub contains_link_sets: bool,
    pub stop: StopReason,
}

/// Handle a producer uses to tell the poller it's done
#[derive(Debug)]
pub struct Completion {
    tx: watch::Sender<bool>,
}

impl Completion {
    /// Mark the producer as finished
    pub fn finish(&self) {
        let _ = self.tx.send(true);
    }
}

/// Drains a shared report on a fixed interval
pub struct Poller {
    report: Arc<Report>,
    config: PollerConfig,
    done: watch::Receiver<bool>,
}

impl Poller {
    /// Create a poller and the completion handle for its producer
    pub fn new(report: Arc<Report>, config: PollerConfig) -> (Self, Completion) {
        let (tx, done) = watch::channel(false);
        (
            Self {
                report,
                config,
                done,
            },
            Completion { tx },
        )
    }

    fn producer_finished(&self) -> bool {
        let finished = *self.done.borrow();
        // A dropped completion handle counts as finished
        finished || self.done.has_changed().is_err()
    }

    /// Drain until the producer finishes or the idle budget runs out
    pub async fn run(self, sink: ChunkSender) -> Result<PollSummary, PollError> {
        let mut ticker = interval(self.config.interval.max(MIN_INTERVAL));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut chunks = 0;
        let mut idle = 0u32;

        tracing::info!(
            interval_ms = self.config.interval.as_millis() as u64,
            max_idle_polls = self.config.max_idle_polls,
            "poller started"
        );

        let stop = loop {
            ticker.tick().await;

            // Read the flag before draining so the last drain sees every append
            let finished = self.producer_finished();
            let chunk = self.report.drain_since_last();

            if chunk.is_empty() {
                idle += 1;
            } else {
                idle = 0;
                if sink.send(chunk).is_err() {
                    tracing::warn!(delivered = chunks, "chunk receiver dropped");
                    return Err(PollError::SinkClosed { delivered: chunks });
                }
                chunks += 1;
            }

            if finished {
                break StopReason::Finished;
            }
            if self.config.max_idle_polls > 0 && idle >= self.config.max_idle_polls {
                tracing::warn!(idle, "producer went quiet, giving up");
                break StopReason::Idle;
            }
        };

        let summary = PollSummary {
            chunks,
            entries: self.report.cursor(),
            contains_link_sets: self.report.contains_link_sets(),
            stop,
        };
        tracing::info!(
            chunks = summary.chunks,
            entries = summary.entries,
            stop = ?summary.stop,
            "poller stopped"
        );
        Ok(summary)
    }
}

/// Replay `script` into `report` while a poller drains it into `sink`.
///
/// If the poller gives up on an idle producer, the producer is cancelled, so
/// nothing is appended after the last drain.
pub async fn run_script(
    script: &Script,
    report: Arc<Report>,
    config: PollerConfig,
    sink: ChunkSender,
) -> Result<PollSummary, PollError> {
    let (poller, completion) = Poller::new(Arc::clone(&report), config);

    let producer = async {
        script.replay(&report).await;
        completion.finish();
    };
    let poll = poller.run(sink);
    tokio::pin!(poll);

    tokio::select! {
        summary = &mut poll => {
            if let Ok(PollSummary { stop: StopReason::Idle, .. }) = &summary {
                tracing::warn!(entries = report.len(), "cancelling stalled producer");
            }
            summary
        }
        () = producer => poll.await,
    }
}

#[cfg(test)]
#[path = "poller_tests.rs"]
mod tests;
