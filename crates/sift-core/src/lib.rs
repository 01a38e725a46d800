//! # sift-core - Core Domain Types
//!
//! Foundation crate for sift. Provides domain types, the `go test -json`
//! event envelope, log line parsing, error handling and logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`TestReference`] - Package plus slash-delimited test path
//! - [`TestStatus`] - Running, passed, failed, skipped or build error
//! - [`TestRecord`] - One row of the ordered test list
//!
//! ### Events (`events`)
//! - [`TestEvent`] - One decoded line of `go test -json` output
//! - [`Action`] - The runner action carried by an event
//!
//! ### Log Parsing (`logparse`)
//! - [`LogEntry`], [`LogField`] - A parsed output line
//! - [`logparse::parse()`] - Total parser with format auto-detection
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum grouped by layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use sift_core::prelude::*;
//! ```

pub mod error;
pub mod events;
pub mod logging;
pub mod logparse;
pub mod types;

/// Prelude for common imports used throughout all sift crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use events::{Action, TestEvent};
pub use logparse::{is_runner_marker, LogEntry, LogField};
pub use types::{TestRecord, TestReference, TestStatus};
