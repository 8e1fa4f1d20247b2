// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::thread;
use tracing_subscriber::fmt::MakeWriter;

/// A writer that captures log output for testing
#[derive(Clone, Default)]
struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn contents(&self) -> String {
        let logs = self.logs.lock().unwrap();
        String::from_utf8_lossy(&logs).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with debug-level tracing captured
fn with_tracing<T>(f: impl FnOnce() -> T) -> (String, T) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (logs.contents(), result)
}

#[test]
fn empty_report_drains_to_nothing() {
    let report = Report::new();
    assert!(report.is_empty());
    assert_eq!(report.drain_since_last(), "");
    assert_eq!(report.cursor(), 0);
}

#[test]
fn text_is_normalized_on_append() {
    let report = Report::new();
    report.add_text("he said \"hi\"\nbye");
    assert_eq!(report.drain_since_last(), "he said 'hi'<br>bye");
}

#[test]
fn link_set_uses_default_separators() {
    let report = Report::new();
    report.add_link_set("pageA", ["/b", "/c"]);
    assert_eq!(
        report.drain_since_last(),
        "\npageA\n\n".to_string() + "  /b\n" + "  /c\n" + "\n"
    );
}

#[test]
fn second_drain_is_empty() {
    let report = Report::new();
    report.add_text("one");
    report.add_separator();

    assert_eq!(report.drain_since_last(), "one\n\n\n");
    assert_eq!(report.drain_since_last(), "");
    assert_eq!(report.cursor(), 2);
}

#[test]
fn drain_only_returns_new_entries() {
    let report = Report::new();
    report.add_text("first");
    assert_eq!(report.drain_since_last(), "first");

    report.add_text("second");
    report.add_text("third");
    assert_eq!(report.pending(), 2);
    assert_eq!(report.drain_since_last(), "secondthird");
    assert_eq!(report.pending(), 0);
}

#[test]
fn out_of_range_separator_falls_back_to_default() {
    let report = Report::new();
    report.add_separator_at(99);
    assert_eq!(report.drain_since_last(), "\n\n\n");
}

#[test]
fn raw_text_entry_is_normalized_on_push() {
    let report = Report::new();
    report.push(Entry::Text {
        value: "x\"y\nz".into(),
    });
    assert_eq!(report.drain_since_last(), "x'y<br>z");
}

#[test]
fn separator_fallback_is_logged_for_both_producer_paths() {
    let report = Report::new();

    let (direct_logs, ()) = with_tracing(|| report.add_separator_at(7));
    assert!(
        direct_logs.contains("separator index out of range"),
        "missing fallback log: {}",
        direct_logs
    );

    let reporter: &dyn Reporter = &report;
    let (trait_logs, ()) = with_tracing(|| reporter.separator_at(9));
    assert!(
        trait_logs.contains("separator index out of range"),
        "missing fallback log: {}",
        trait_logs
    );
    assert!(trait_logs.contains("index=9"));

    assert_eq!(report.drain_since_last(), "\n\n\n\n\n\n");
}

#[test]
fn in_range_separator_is_not_logged_as_fallback() {
    let report = Report::new();
    let (logs, ()) = with_tracing(|| report.add_separator_at(3));
    assert!(!logs.contains("out of range"));
}

#[test]
fn separator_slot_uses_configured_value() {
    let separators = Separators::from_slots(&["<br>", "  ", "<hr>", "\n"]).unwrap();
    let report = Report::with_separators(separators);
    report.add_separator_at(2);
    report.add_separator_at(0);
    assert_eq!(report.drain_since_last(), "<hr><br>");
}

#[test]
fn contains_link_sets_tracks_full_history() {
    let report = Report::new();
    assert!(!report.contains_link_sets());

    report.add_text("checking links");
    assert!(!report.contains_link_sets());

    report.add_link_set("page", ["/gone"]);
    assert!(report.contains_link_sets());

    report.drain_since_last();
    assert!(report.contains_link_sets());
}

#[test]
fn entries_keep_append_order() {
    let report = Report::new();
    report.add_text("a");
    report.add_link_set("r", ["t"]);
    report.add_separator_at(1);

    let entries = report.entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0], Entry::text("a"));
    assert!(entries[1].is_link_set());
    assert_eq!(entries[2], Entry::separator(SeparatorChoice::Slot(1)));
}

#[test]
fn reporter_trait_appends_through_arc() {
    let report = Arc::new(Report::new());
    let reporter: Arc<dyn Reporter> = report.clone();

    reporter.text("step 1");
    reporter.links("page", &["/a".to_string()]);
    reporter.separator_at(42);

    assert_eq!(report.len(), 3);
    assert!(report.contains_link_sets());
    assert_eq!(
        report.drain_since_last(),
        "step 1\npage\n\n  /a\n\n\n\n\n"
    );
}

#[test]
fn concurrent_producer_and_drainer_lose_nothing() {
    let report = Arc::new(Report::new());
    let producer = {
        let report = report.clone();
        thread::spawn(move || {
            for i in 0..500 {
                report.add_text(&format!("line {i};"));
            }
        })
    };

    let mut drained = String::new();
    let mut last_cursor = 0;
    while !producer.is_finished() {
        drained.push_str(&report.drain_since_last());
        let cursor = report.cursor();
        assert!(cursor >= last_cursor);
        last_cursor = cursor;
    }
    producer.join().unwrap();
    drained.push_str(&report.drain_since_last());

    let expected: String = (0..500).map(|i| format!("line {i};")).collect();
    assert_eq!(drained, expected);
    assert_eq!(report.cursor(), 500);
}

// Property-based tests
use proptest::prelude::*;

fn arb_entry() -> impl Strategy<Value = Entry> {
    prop_oneof![
        "[a-z\"\n ]{0,12}".prop_map(|s| Entry::text(&s)),
        ("[a-z/]{1,8}", proptest::collection::vec("[a-z/]{1,8}", 0..4))
            .prop_map(|(name, targets)| Entry::link_set(name, targets)),
        (0usize..8).prop_map(|i| Entry::separator(SeparatorChoice::for_index(i))),
    ]
}

proptest! {
    #[test]
    fn drain_equals_concatenated_renderings(entries in proptest::collection::vec(arb_entry(), 0..20)) {
        let report = Report::new();
        for entry in &entries {
            report.push(entry.clone());
        }

        let expected: String = entries
            .iter()
            .map(|e| e.render(report.separators()))
            .collect();
        prop_assert_eq!(report.drain_since_last(), expected);
        prop_assert_eq!(report.drain_since_last(), "");
    }

    #[test]
    fn split_drains_match_single_drain(
        entries in proptest::collection::vec(arb_entry(), 0..20),
        splits in proptest::collection::vec(any::<bool>(), 20),
    ) {
        let single = Report::new();
        let split = Report::new();
        let mut pieces = String::new();

        for (entry, drain_now) in entries.iter().zip(splits.iter()) {
            single.push(entry.clone());
            split.push(entry.clone());
            if *drain_now {
                let before = split.cursor();
                pieces.push_str(&split.drain_since_last());
                prop_assert!(split.cursor() >= before);
                prop_assert_eq!(split.cursor(), split.len());
            }
        }
        pieces.push_str(&split.drain_since_last());

        prop_assert_eq!(pieces, single.drain_since_last());
    }
}
