//! Core domain types for the test tree

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Identity of a test: package plus slash-delimited hierarchical path.
///
/// An empty `path` denotes the package-level pseudo-test synthesized for a
/// build failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TestReference {
    pub package: String,
    pub path: String,
}

impl TestReference {
    pub fn new(package: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            path: path.into(),
        }
    }

    /// Reference for a package-level pseudo-test
    pub fn package_level(package: impl Into<String>) -> Self {
        Self::new(package, "")
    }

    pub fn is_package_level(&self) -> bool {
        self.path.is_empty()
    }

    /// Nesting depth (`"A/b/c"` is depth 2)
    pub fn depth(&self) -> usize {
        self.path.matches('/').count()
    }

    /// Last path segment, or the package for a package-level pseudo-test
    pub fn display_name(&self) -> &str {
        if self.path.is_empty() {
            return &self.package;
        }
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// True if `self` sits below `parent` in the same package.
    ///
    /// Every named test of a package descends from its package-level
    /// pseudo-test.
    pub fn is_descendant_of(&self, parent: &TestReference) -> bool {
        if self.package != parent.package || self == parent {
            return false;
        }
        if parent.path.is_empty() {
            return true;
        }
        self.path
            .strip_prefix(parent.path.as_str())
            .is_some_and(|rest| rest.starts_with('/'))
    }
}

impl fmt::Display for TestReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.package)
        } else {
            write!(f, "{}.{}", self.package, self.path)
        }
    }
}

/// Status of a test row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestStatus {
    #[default]
    Running,
    Passed,
    Failed,
    Skipped,
    /// Package failed to compile
    BuildError,
}

impl TestStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, TestStatus::Running)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TestStatus::Failed)
    }

    /// Failed tests and build errors both fail the run
    pub fn fails_run(&self) -> bool {
        matches!(self, TestStatus::Failed | TestStatus::BuildError)
    }
}

/// One entry in the ordered test list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRecord {
    pub reference: TestReference,
    pub status: TestStatus,
    pub elapsed: Duration,
}

impl TestRecord {
    /// A freshly started test
    pub fn running(reference: TestReference) -> Self {
        Self {
            reference,
            status: TestStatus::Running,
            elapsed: Duration::ZERO,
        }
    }
}
