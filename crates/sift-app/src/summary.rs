//! Run summary: status counts per test and per package, timing and outcome

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Local};
use sift_core::{TestRecord, TestStatus};

use crate::store::TestStore;

/// Number of tests (or packages) in each status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub running: usize,
    pub build_errors: usize,
}

impl StatusCounts {
    pub fn add(&mut self, status: TestStatus) {
        match status {
            TestStatus::Running => self.running += 1,
            TestStatus::Passed => self.passed += 1,
            TestStatus::Failed => self.failed += 1,
            TestStatus::Skipped => self.skipped += 1,
            TestStatus::BuildError => self.build_errors += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped + self.running + self.build_errors
    }
}

/// Final verdict once the stream has ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Passed => "PASSED",
            Outcome::Failed => "FAILED",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub tests: StatusCounts,
    /// Each package counted once, by the worst status among its tests
    pub packages: StatusCounts,
    pub started_at: Option<DateTime<Local>>,
    /// Elapsed wall-clock time, up to now while the run is live
    pub duration: Option<Duration>,
    pub finished: bool,
}

impl Summary {
    /// Summarize every test in the store, ignoring any search filter
    pub fn from_store(store: &TestStore, now: DateTime<Local>) -> Self {
        let tests = store.tests();
        let started_at = store.started_at();
        let finished_at = store.finished_at();

        let duration = started_at.map(|start| {
            let end = finished_at.unwrap_or(now);
            (end - start).to_std().unwrap_or_default()
        });

        Self {
            tests: count_tests(&tests),
            packages: count_packages(&tests),
            started_at,
            duration,
            finished: finished_at.is_some(),
        }
    }

    pub fn is_failing(&self) -> bool {
        self.tests.failed > 0 || self.tests.build_errors > 0
    }

    /// `None` while tests are still streaming in
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.finished {
            return None;
        }
        Some(if self.is_failing() {
            Outcome::Failed
        } else {
            Outcome::Passed
        })
    }
}

fn count_tests(tests: &[TestRecord]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for test in tests {
        counts.add(test.status);
    }
    counts
}

fn count_packages(tests: &[TestRecord]) -> StatusCounts {
    let mut worst: HashMap<&str, TestStatus> = HashMap::new();
    for test in tests {
        worst
            .entry(test.reference.package.as_str())
            .and_modify(|status| *status = worse(*status, test.status))
            .or_insert(test.status);
    }

    let mut counts = StatusCounts::default();
    for status in worst.into_values() {
        counts.add(status);
    }
    counts
}

fn severity(status: TestStatus) -> u8 {
    match status {
        TestStatus::Skipped => 0,
        TestStatus::Passed => 1,
        TestStatus::Running => 2,
        TestStatus::Failed => 3,
        TestStatus::BuildError => 4,
    }
}

fn worse(a: TestStatus, b: TestStatus) -> TestStatus {
    if severity(b) > severity(a) {
        b
    } else {
        a
    }
}

/// Format a duration the way Go prints `time.Duration`, truncated to
/// milliseconds: `0s`, `350ms`, `1.5s`, `2m3.04s`, `1h0m0s`
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis == 0 {
        return "0s".to_string();
    }
    if millis < 1000 {
        return format!("{millis}ms");
    }

    let hours = millis / 3_600_000;
    let minutes = (millis / 60_000) % 60;
    let seconds = (millis / 1000) % 60;
    let fraction = millis % 1000;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    out.push_str(&seconds.to_string());
    if fraction > 0 {
        let digits = format!("{fraction:03}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out.push('s');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_core::TestEvent;

    fn store_with(events: &[&str]) -> TestStore {
        let store = TestStore::default();
        for line in events {
            store.add_event(&TestEvent::parse(line).unwrap());
        }
        store
    }

    #[test]
    fn test_counts_for_end_to_end_scenario() {
        let store = store_with(&[
            r#"{"Action":"run","Package":"p","Test":"A"}"#,
            r#"{"Action":"output","Package":"p","Test":"A","Output":"line1\n"}"#,
            r#"{"Action":"pass","Package":"p","Test":"A","Elapsed":1.5}"#,
            r#"{"Action":"run","Package":"p","Test":"B"}"#,
            r#"{"Action":"fail","Package":"p","Test":"B","Elapsed":0.2}"#,
        ]);
        let summary = Summary::from_store(&store, Local::now());
        assert_eq!(summary.tests.passed, 1);
        assert_eq!(summary.tests.failed, 1);
        assert_eq!(summary.tests.total(), 2);
        assert_eq!(summary.packages.failed, 1);
        assert_eq!(summary.packages.total(), 1);
        assert!(summary.outcome().is_none());

        store.mark_finished();
        let summary = Summary::from_store(&store, Local::now());
        assert_eq!(summary.outcome(), Some(Outcome::Failed));
    }

    #[test]
    fn test_packages_counted_once_by_worst_status() {
        let store = store_with(&[
            r#"{"Action":"run","Package":"a","Test":"T1"}"#,
            r#"{"Action":"pass","Package":"a","Test":"T1"}"#,
            r#"{"Action":"run","Package":"a","Test":"T2"}"#,
            r#"{"Action":"skip","Package":"a","Test":"T2"}"#,
            r#"{"Action":"run","Package":"b","Test":"T1"}"#,
            r#"{"ImportPath":"c","Action":"build-fail"}"#,
        ]);
        let summary = Summary::from_store(&store, Local::now());
        assert_eq!(
            summary.packages,
            StatusCounts {
                passed: 1,
                running: 1,
                build_errors: 1,
                ..StatusCounts::default()
            }
        );
        assert!(summary.is_failing());
    }

    #[test]
    fn test_all_passing_run() {
        let store = store_with(&[
            r#"{"Action":"run","Package":"a","Test":"T1"}"#,
            r#"{"Action":"pass","Package":"a","Test":"T1"}"#,
        ]);
        store.mark_finished();
        let summary = Summary::from_store(&store, Local::now());
        assert_eq!(summary.outcome(), Some(Outcome::Passed));
        assert_eq!(Outcome::Passed.label(), "PASSED");
    }

    #[test]
    fn test_empty_store_has_no_timing() {
        let summary = Summary::from_store(&TestStore::default(), Local::now());
        assert!(summary.started_at.is_none());
        assert!(summary.duration.is_none());
        assert_eq!(summary.tests.total(), 0);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::ZERO), "0s");
        assert_eq!(format_duration(Duration::from_micros(900)), "0s");
        assert_eq!(format_duration(Duration::from_millis(350)), "350ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
        assert_eq!(format_duration(Duration::from_secs(2)), "2s");
        assert_eq!(format_duration(Duration::from_millis(123_040)), "2m3.04s");
        assert_eq!(format_duration(Duration::from_secs(3600)), "1h0m0s");
    }
}
