//! Status glyphs.

use sift_core::TestStatus;

pub const PASSED: &str = "\u{2713}"; // ✓
pub const FAILED: &str = "\u{00d7}"; // ×
pub const SKIPPED: &str = "\u{23ed}"; // ⏭
pub const BUILD_ERROR: &str = "!";
/// Running marker where nothing animates (inline output)
pub const RUNNING: &str = "\u{2022}"; // •

/// Braille spinner frames
pub const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner(frame: usize) -> &'static str {
    SPINNER[frame % SPINNER.len()]
}

/// Icon for a test row. `frame` animates running tests; `None` shows the
/// static running marker.
pub fn status_icon(status: TestStatus, frame: Option<usize>) -> &'static str {
    match status {
        TestStatus::Running => frame.map(spinner).unwrap_or(RUNNING),
        TestStatus::Passed => PASSED,
        TestStatus::Failed => FAILED,
        TestStatus::Skipped => SKIPPED,
        TestStatus::BuildError => BUILD_ERROR,
    }
}
