// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod render;
pub mod run;

use anyhow::{Context, Result};
use std::path::Path;
use tally_core::Separators;
use tally_engine::Script;

/// Load a job script and apply a `--separators` override if given
pub fn load_script(path: &Path, separators: Option<&Path>) -> Result<(Script, Separators)> {
    let script = Script::load(path)
        .with_context(|| format!("failed to load job script {}", path.display()))?;

    let separators = match separators {
        Some(config) => Separators::load(config)
            .with_context(|| format!("failed to load separators {}", config.display()))?,
        None => script.separators(),
    };

    tracing::debug!(
        script = %path.display(),
        steps = script.steps.len(),
        "job script loaded"
    );
    Ok((script, separators))
}
