// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tally engine: drives scripted jobs and polls their reports

mod poller;
mod script;

pub use poller::{
    run_script, ChunkReceiver, ChunkSender, Completion, PollError, PollSummary, Poller,
    PollerConfig, StopReason,
};
pub use script::{DefaultKeyword, LinksStep, Script, ScriptError, SeparatorStep, Step};
