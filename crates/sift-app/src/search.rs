//! Test visibility filter

use sift_core::TestReference;

use crate::fuzzy::fuzzy_match;

/// Fuzzy pattern over test paths. An empty pattern shows every test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pattern: String,
}

impl SearchFilter {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_active(&self) -> bool {
        !self.pattern.is_empty()
    }

    /// Build-failure pseudo-tests are matched by package name
    pub fn is_visible(&self, reference: &TestReference) -> bool {
        if self.pattern.is_empty() {
            return true;
        }
        let haystack = if reference.is_package_level() {
            reference.package.as_str()
        } else {
            reference.path.as_str()
        };
        fuzzy_match(&self.pattern, haystack)
    }
}
