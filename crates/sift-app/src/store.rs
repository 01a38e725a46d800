//! Test Store - the ordered test list and per-test log buffers.
//!
//! One ingestion thread writes while the render loop reads. The test list
//! and the log map sit behind independent `RwLock`s so appending output for
//! one test never blocks a status read of another.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Local};
use sift_core::logparse::{self, LogEntry};
use sift_core::{is_runner_marker, Action, TestEvent, TestRecord, TestReference, TestStatus};
use tracing::trace;

const TAB_EXPANSION: &str = "    ";

/// Wall-clock bounds of the run
#[derive(Debug, Clone, Copy, Default)]
struct RunClock {
    started_at: Option<DateTime<Local>>,
    finished_at: Option<DateTime<Local>>,
}

#[derive(Debug)]
pub struct TestStore {
    tests: RwLock<Vec<TestRecord>>,
    logs: RwLock<HashMap<TestReference, Vec<LogEntry>>>,
    clock: RwLock<RunClock>,
    /// Run output lines through the log parser; otherwise keep them verbatim
    parse_logs: bool,
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new(true)
    }
}

impl TestStore {
    pub fn new(parse_logs: bool) -> Self {
        Self {
            tests: RwLock::new(Vec::new()),
            logs: RwLock::new(HashMap::new()),
            clock: RwLock::new(RunClock::default()),
            parse_logs,
        }
    }

    /// Apply one event from the stream
    pub fn add_event(&self, event: &TestEvent) {
        match event.action {
            Action::Output | Action::BuildOutput => self.append_output(event),
            Action::Run => self.start_test(event.reference()),
            Action::BuildFail => self.fail_build(event),
            Action::Pass => self.finish_test(event, TestStatus::Passed),
            Action::Fail => self.finish_test(event, TestStatus::Failed),
            Action::Skip => self.finish_test(event, TestStatus::Skipped),
            Action::Start | Action::Pause | Action::Cont | Action::Bench | Action::Unknown => {}
        }
    }

    fn append_output(&self, event: &TestEvent) {
        let line = event.output_line();
        if is_runner_marker(line) {
            return;
        }
        // Terminal cells have no tab stops
        let line = line.replace('\t', TAB_EXPANSION);

        let entry = if self.parse_logs {
            logparse::parse(&line)
        } else {
            LogEntry::raw(line.as_str())
        };
        let entry = entry.or_time(event.time);

        write(&self.logs)
            .entry(event.reference())
            .or_default()
            .push(entry);
    }

    fn start_test(&self, reference: TestReference) {
        trace!("run {}", reference);
        self.mark_started();
        write(&self.tests).push(TestRecord::running(reference));
    }

    /// A compile error creates (or updates) the package-level pseudo-test
    fn fail_build(&self, event: &TestEvent) {
        let reference = TestReference::package_level(event.package());
        self.mark_started();

        let mut tests = write(&self.tests);
        match tests.iter_mut().find(|t| t.reference == reference) {
            Some(record) => {
                record.status = TestStatus::BuildError;
                record.elapsed = event.elapsed();
            }
            None => tests.push(TestRecord {
                reference,
                status: TestStatus::BuildError,
                elapsed: event.elapsed(),
            }),
        }
    }

    /// Terminal status for a known test. Unknown references are dropped, and
    /// a build error is never overwritten by the package's own `fail`.
    fn finish_test(&self, event: &TestEvent, status: TestStatus) {
        let reference = event.reference();
        let mut tests = write(&self.tests);
        let Some(record) = tests.iter_mut().rev().find(|t| t.reference == reference) else {
            trace!("{:?} for unknown test {}", event.action, reference);
            return;
        };
        if record.status == TestStatus::BuildError {
            return;
        }
        record.status = status;
        record.elapsed = event.elapsed();
    }

    fn mark_started(&self) {
        let mut clock = write(&self.clock);
        if clock.started_at.is_none() {
            clock.started_at = Some(Local::now());
        }
    }

    // ─────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────

    pub fn get_test(&self, index: usize) -> Option<TestRecord> {
        read(&self.tests).get(index).cloned()
    }

    pub fn get_test_count(&self) -> usize {
        read(&self.tests).len()
    }

    /// Snapshot of the whole test list
    pub fn tests(&self) -> Vec<TestRecord> {
        read(&self.tests).clone()
    }

    /// Copy of a test's log lines
    pub fn get_logs(&self, reference: &TestReference) -> Vec<LogEntry> {
        self.with_logs(reference, <[LogEntry]>::to_vec)
    }

    pub fn get_log_count(&self, reference: &TestReference) -> usize {
        self.with_logs(reference, <[LogEntry]>::len)
    }

    /// Borrow a test's log lines under the read lock
    pub fn with_logs<R>(&self, reference: &TestReference, f: impl FnOnce(&[LogEntry]) -> R) -> R {
        let logs = read(&self.logs);
        f(logs.get(reference).map(Vec::as_slice).unwrap_or_default())
    }

    /// When the first test arrived
    pub fn started_at(&self) -> Option<DateTime<Local>> {
        read(&self.clock).started_at
    }

    /// Record the end of the input stream
    pub fn mark_finished(&self) {
        let mut clock = write(&self.clock);
        if clock.finished_at.is_none() {
            clock.finished_at = Some(Local::now());
        }
    }

    pub fn finished_at(&self) -> Option<DateTime<Local>> {
        read(&self.clock).finished_at
    }

    pub fn is_finished(&self) -> bool {
        self.finished_at().is_some()
    }
}

/// The store is append-only, so a writer that panicked never leaves a
/// half-applied mutation behind and the poisoned data is still usable.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
