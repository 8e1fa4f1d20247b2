// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Separator configuration used when rendering a report

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Number of configurable separator slots
pub const SLOT_COUNT: usize = 4;

/// Rendered by separator entries that don't pick a slot
pub const DEFAULT_SEPARATOR: &str = "\n\n\n";

const LINE_END: usize = 0;
const INDENT: usize = 1;
const HEADER_PREFIX: usize = 2;
const HEADER_SUFFIX: usize = 3;

/// Errors that can occur while building a separator configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("separator config needs exactly {expected} slots, got {actual}")]
    SlotCount { expected: usize, actual: usize },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid separator config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// The four delimiter strings a report renders with.
///
/// Slot `0` terminates lines, slot `1` indents link targets, and slots `2`
/// and `3` wrap a link set's resource name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separators {
    slots: [String; SLOT_COUNT],
}

impl Separators {
    pub fn new(slots: [String; SLOT_COUNT]) -> Self {
        Self { slots }
    }

    /// Build from borrowed slots, rejecting anything but exactly four
    pub fn from_slots(slots: &[&str]) -> Result<Self, ConfigError> {
        Self::try_from(slots.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    /// Parse the named TOML form; missing keys keep their defaults
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let file: SeparatorsFile = toml::from_str(source)?;
        Ok(file.into())
    }

    /// Load the named TOML form from disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Get a slot by index
    pub fn slot(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(String::as_str)
    }

    pub fn line_end(&self) -> &str {
        &self.slots[LINE_END]
    }

    pub fn indent(&self) -> &str {
        &self.slots[INDENT]
    }

    pub fn header_prefix(&self) -> &str {
        &self.slots[HEADER_PREFIX]
    }

    pub fn header_suffix(&self) -> &str {
        &self.slots[HEADER_SUFFIX]
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self::new([
            "\n".to_string(),
            "  ".to_string(),
            "\n".to_string(),
            "\n".to_string(),
        ])
    }
}

impl TryFrom<Vec<String>> for Separators {
    type Error = ConfigError;

    fn try_from(slots: Vec<String>) -> Result<Self, Self::Error> {
        let actual = slots.len();
        let slots: [String; SLOT_COUNT] =
            slots.try_into().map_err(|_| ConfigError::SlotCount {
                expected: SLOT_COUNT,
                actual,
            })?;
        Ok(Self::new(slots))
    }
}

/// Named on-disk form of [`Separators`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeparatorsFile {
    pub line_end: String,
    pub indent: String,
    pub header_prefix: String,
    pub header_suffix: String,
}

impl Default for SeparatorsFile {
    fn default() -> Self {
        Separators::default().into()
    }
}

impl From<SeparatorsFile> for Separators {
    fn from(file: SeparatorsFile) -> Self {
        Self::new([
            file.line_end,
            file.indent,
            file.header_prefix,
            file.header_suffix,
        ])
    }
}

impl From<Separators> for SeparatorsFile {
    fn from(separators: Separators) -> Self {
        let [line_end, indent, header_prefix, header_suffix] = separators.slots;
        Self {
            line_end,
            indent,
            header_prefix,
            header_suffix,
        }
    }
}

#[cfg(test)]
#[path = "separators_tests.rs"]
mod tests;
