// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Report entries and their rendering

use crate::separators::{Separators, DEFAULT_SEPARATOR, SLOT_COUNT};
use serde::{Deserialize, Serialize};

/// Marker that replaces line breaks in text entries
pub const LINE_BREAK_MARKER: &str = "<br>";

/// Which separator a `Separator` entry renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparatorChoice {
    /// The three-newline default separator
    Default,
    /// One of the configured separator slots (always `< SLOT_COUNT`)
    Slot(usize),
}

impl SeparatorChoice {
    /// Resolve a requested slot index, falling back to `Default` when out of range
    pub fn for_index(index: usize) -> Self {
        if index < SLOT_COUNT {
            SeparatorChoice::Slot(index)
        } else {
            tracing::debug!(index, "separator index out of range, using default");
            SeparatorChoice::Default
        }
    }
}

/// A status line that has been through [`normalize_text`].
///
/// Every constructor normalizes, including deserialization, so a text entry
/// never carries double quotes or raw line breaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct StatusLine(String);

impl StatusLine {
    pub fn new(raw: &str) -> Self {
        Self(normalize_text(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StatusLine {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for StatusLine {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<StatusLine> for String {
    fn from(line: StatusLine) -> Self {
        line.0
    }
}

/// One unit of reported progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entry {
    /// A normalized status line
    Text { value: StatusLine },
    /// Link-check result for one resource
    LinkSet {
        resource_name: String,
        targets: Vec<String>,
    },
    /// Visual break between report sections
    Separator { choice: SeparatorChoice },
}

impl Entry {
    /// Build a text entry, normalizing quotes and line breaks
    pub fn text(value: &str) -> Self {
        Entry::Text {
            value: StatusLine::new(value),
        }
    }

    pub fn link_set<I, S>(resource_name: impl Into<String>, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Entry::LinkSet {
            resource_name: resource_name.into(),
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }

    pub fn separator(choice: SeparatorChoice) -> Self {
        Entry::Separator { choice }
    }

    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Entry::Text { .. } => "text",
            Entry::LinkSet { .. } => "link_set",
            Entry::Separator { .. } => "separator",
        }
    }

    pub fn is_link_set(&self) -> bool {
        matches!(self, Entry::LinkSet { .. })
    }

    /// Append this entry's rendering to `out`
    pub fn render_into(&self, separators: &Separators, out: &mut String) {
        match self {
            Entry::Text { value } => out.push_str(value.as_str()),
            Entry::LinkSet {
                resource_name,
                targets,
            } => {
                out.push_str(separators.header_prefix());
                out.push_str(resource_name);
                out.push_str(separators.header_suffix());
                out.push_str(separators.line_end());
                for target in targets {
                    out.push_str(separators.indent());
                    out.push_str(target);
                    out.push_str(separators.line_end());
                }
                out.push_str(separators.line_end());
            }
            Entry::Separator { choice } => match choice {
                SeparatorChoice::Slot(index) => {
                    out.push_str(separators.slot(*index).unwrap_or(DEFAULT_SEPARATOR))
                }
                SeparatorChoice::Default => out.push_str(DEFAULT_SEPARATOR),
            },
        }
    }

    pub fn render(&self, separators: &Separators) -> String {
        let mut out = String::new();
        self.render_into(separators, &mut out);
        out
    }
}

/// Make a status line safe to embed in generated script or markup.
///
/// Double quotes become single quotes. The value is split on `\r` and `\n`,
/// empty pieces are dropped, and the rest are joined with `<br>`.
pub fn normalize_text(value: &str) -> String {
    let quoted = value.replace('"', "'");
    quoted
        .split(['\r', '\n'])
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(LINE_BREAK_MARKER)
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
