// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job scripts: a TOML list of steps replayed into a report.
//!
//! ```toml
//! [separators]
//! indent = "--"
//!
//! [[step]]
//! text = "Publishing project"
//!
//! [[step]]
//! links = { resource = "/index.html", targets = ["/missing.html"] }
//!
//! [[step]]
//! separator = "default"
//!
//! [[step]]
//! pause_ms = 10
//! ```

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tally_core::{ConfigError, Report, Reporter, Separators, SeparatorsFile};
use thiserror::Error;

/// Errors that can occur while loading a job script
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid job script: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// The literal `"default"` in a separator step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultKeyword {
    Default,
}

/// Which separator a step asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SeparatorStep {
    Slot(usize),
    Keyword(DefaultKeyword),
}

/// Link-check result inside a step
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinksStep {
    pub resource: String,
    #[serde(default)]
    pub targets: Vec<String>,
}

/// One scripted action
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Text { text: String },
    Links { links: LinksStep },
    Separator { separator: SeparatorStep },
    Pause { pause_ms: u64 },
}

impl Step {
    /// Apply a non-pause step to `reporter`; returns the pause duration otherwise
    fn apply<R: Reporter + ?Sized>(&self, reporter: &R) -> Option<Duration> {
        match self {
            Step::Text { text } => reporter.text(text),
            Step::Links { links } => reporter.links(&links.resource, &links.targets),
            Step::Separator {
                separator: SeparatorStep::Slot(index),
            } => reporter.separator_at(*index),
            Step::Separator {
                separator: SeparatorStep::Keyword(DefaultKeyword::Default),
            } => reporter.separator(),
            Step::Pause { pause_ms } => return Some(Duration::from_millis(*pause_ms)),
        }
        None
    }
}

/// A parsed job script
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    #[serde(default)]
    pub separators: Option<SeparatorsFile>,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_toml_str(source: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Separators declared by the script, or the defaults
    pub fn separators(&self) -> Separators {
        self.separators.clone().map(Separators::from).unwrap_or_default()
    }

    /// Create an empty report configured with this script's separators
    pub fn new_report(&self) -> Report {
        Report::with_separators(self.separators())
    }

    /// Replay every step immediately, skipping pauses
    pub fn replay_now<R: Reporter + ?Sized>(&self, reporter: &R) {
        for step in &self.steps {
            step.apply(reporter);
        }
    }

    /// Replay every step, sleeping through pauses
    pub async fn replay<R: Reporter + ?Sized>(&self, reporter: &R) {
        for (index, step) in self.steps.iter().enumerate() {
            if let Some(pause) = step.apply(reporter) {
                tracing::trace!(step = index, pause_ms = pause.as_millis() as u64, "pausing");
                tokio::time::sleep(pause).await;
            }
        }
        tracing::debug!(steps = self.steps.len(), "script replayed");
    }
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
