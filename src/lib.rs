//! sift - Interactive terminal console for `go test -json` output
//!
//! The binary entry point lives in `main.rs`; this library holds the
//! command-line surface so it can be tested. Everything else is in the
//! workspace crates.

pub mod cli;

pub use cli::Args;
