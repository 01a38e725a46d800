//! `go test -json` event envelope

use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::TestReference;

/// Action reported by the test runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Start,
    Run,
    Pause,
    Cont,
    Output,
    BuildOutput,
    Pass,
    Fail,
    Skip,
    BuildFail,
    Bench,
    /// Any action this version does not know about
    #[serde(other)]
    Unknown,
}

/// One line of `go test -json` (or `go build -json`) output
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TestEvent {
    #[serde(default)]
    pub time: Option<DateTime<FixedOffset>>,
    pub action: Action,
    #[serde(default)]
    pub package: String,
    /// Set instead of `Package` on build events
    #[serde(default)]
    pub import_path: String,
    #[serde(default)]
    pub test: String,
    /// Fractional seconds, present on terminal actions
    #[serde(default)]
    pub elapsed: Option<f64>,
    #[serde(default)]
    pub output: Option<String>,
}

impl TestEvent {
    /// Parse a single newline-delimited record
    pub fn parse(line: &str) -> Result<Self> {
        Ok(serde_json::from_str(line)?)
    }

    /// Package, falling back to the import path of build events
    pub fn package(&self) -> &str {
        if self.package.is_empty() {
            &self.import_path
        } else {
            &self.package
        }
    }

    pub fn reference(&self) -> TestReference {
        TestReference::new(self.package(), self.test.clone())
    }

    /// Elapsed time as a duration; negative or non-finite values become zero
    pub fn elapsed(&self) -> Duration {
        self.elapsed
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
            .unwrap_or_default()
    }

    /// Output with trailing newlines removed
    pub fn output_line(&self) -> &str {
        self.output
            .as_deref()
            .unwrap_or_default()
            .trim_end_matches('\n')
    }
}
