// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for CLI integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Job script exercising every step kind
pub const PUBLISH_SCRIPT: &str = r#"
[[step]]
text = "Publishing \"site\"\nstarted"

[[step]]
pause_ms = 5

[[step]]
links = { resource = "/index.html", targets = ["/a.html", "/b.html"] }

[[step]]
separator = 99
"#;

/// Rendered form of [`PUBLISH_SCRIPT`] with default separators
pub const PUBLISH_RENDERED: &str =
    "Publishing 'site'<br>started\n/index.html\n\n  /a.html\n  /b.html\n\n\n\n\n";

/// Write `contents` to `name` inside a fresh temp dir
pub fn write_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}
