// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Incremental report log.
//!
//! Producers append entries while a long-running operation works; a poller
//! calls [`Report::drain_since_last`] to get everything appended since its
//! previous call, already rendered.

use crate::entry::{Entry, SeparatorChoice};
use crate::reporter::Reporter;
use crate::separators::Separators;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct ReportState {
    entries: Vec<Arc<Entry>>,
    /// Index of the next entry to render; never exceeds `entries.len()`
    cursor: usize,
    has_link_sets: bool,
}

/// Append-only report with a single read cursor.
///
/// All state sits behind one mutex. A drain holds it only long enough to
/// snapshot the pending entries and move the cursor; rendering happens
/// afterwards, so producers are never blocked by it.
#[derive(Debug, Default)]
pub struct Report {
    separators: Separators,
    state: Mutex<ReportState>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separators(separators: Separators) -> Self {
        Self {
            separators,
            state: Mutex::new(ReportState::default()),
        }
    }

    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    fn state(&self) -> MutexGuard<'_, ReportState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Append an already-built entry
    pub fn push(&self, entry: Entry) {
        let kind = entry.kind();
        let mut state = self.state();
        state.has_link_sets |= entry.is_link_set();
        state.entries.push(Arc::new(entry));
        tracing::trace!(kind, len = state.entries.len(), "report entry appended");
    }

    /// Append a status line (quotes and line breaks are normalized)
    pub fn add_text(&self, value: &str) {
        self.push(Entry::text(value));
    }

    /// Append a link-check result verbatim
    pub fn add_link_set<I, S>(&self, resource_name: impl Into<String>, targets: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(Entry::link_set(resource_name, targets));
    }

    /// Append the default three-newline separator
    pub fn add_separator(&self) {
        self.push(Entry::separator(SeparatorChoice::Default));
    }

    /// Append a configured separator slot, or the default one if `index` is out of range
    pub fn add_separator_at(&self, index: usize) {
        self.push(Entry::separator(SeparatorChoice::for_index(index)));
    }

    /// Whether any link set was ever appended, drained or not
    pub fn contains_link_sets(&self) -> bool {
        self.state().has_link_sets
    }

    /// Render everything appended since the previous drain and advance the cursor.
    ///
    /// Returns an empty string when nothing is pending. Entries appended
    /// while this runs stay pending for the next call.
    pub fn drain_since_last(&self) -> String {
        let (pending, cursor) = {
            let mut state = self.state();
            let end = state.entries.len();
            let pending: Vec<Arc<Entry>> = state.entries[state.cursor..end].to_vec();
            state.cursor = end;
            (pending, end)
        };

        if pending.is_empty() {
            return String::new();
        }

        let mut out = String::new();
        for entry in &pending {
            entry.render_into(&self.separators, &mut out);
        }
        tracing::debug!(
            rendered = pending.len(),
            cursor,
            bytes = out.len(),
            "report drained"
        );
        out
    }

    /// Total number of entries appended
    pub fn len(&self) -> usize {
        self.state().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of entries already drained
    pub fn cursor(&self) -> usize {
        self.state().cursor
    }

    /// Number of entries waiting for the next drain
    pub fn pending(&self) -> usize {
        let state = self.state();
        state.entries.len() - state.cursor
    }

    /// Clone of every entry appended so far, in order
    pub fn entries(&self) -> Vec<Entry> {
        self.state()
            .entries
            .iter()
            .map(|entry| Entry::clone(entry))
            .collect()
    }
}

impl Reporter for Report {
    fn report(&self, entry: Entry) {
        self.push(entry);
    }
}

impl<R: Reporter + ?Sized> Reporter for Arc<R> {
    fn report(&self, entry: Entry) {
        (**self).report(entry);
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
