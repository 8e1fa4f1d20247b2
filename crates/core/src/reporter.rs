// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Producer-side trait for anything that accepts report entries

use crate::entry::{Entry, SeparatorChoice};

/// Sink that long-running jobs write progress into.
///
/// Jobs depend on this trait rather than on [`crate::Report`] so tests can
/// hand them a recording fake.
pub trait Reporter: Send + Sync {
    /// Append one entry
    fn report(&self, entry: Entry);

    fn text(&self, value: &str) {
        self.report(Entry::text(value));
    }

    fn links(&self, resource_name: &str, targets: &[String]) {
        self.report(Entry::link_set(resource_name, targets.iter().cloned()));
    }

    fn separator(&self) {
        self.report(Entry::separator(SeparatorChoice::Default));
    }

    fn separator_at(&self, index: usize) {
        self.report(Entry::separator(SeparatorChoice::for_index(index)));
    }
}
