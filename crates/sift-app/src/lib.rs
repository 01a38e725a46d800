//! sift-app - Test store, navigation and application state for sift
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the shared [`TestStore`] filled by ingestion, the layout cache
//! and viewport window used by the renderer, and the navigation state
//! machine driven by key messages.

pub mod config;
pub mod fuzzy;
pub mod handler;
pub mod ingest;
pub mod input_key;
pub mod key_sequence;
pub mod layout_cache;
pub mod log_line;
pub mod message;
mod navigation;
pub mod scroll_state;
pub mod search;
pub mod signals;
pub mod state;
pub mod store;
pub mod summary;
pub mod window;

// Re-export primary types
pub use handler::{update, UpdateResult};
pub use ingest::{ingest, spawn_ingest, IngestReport};
pub use input_key::InputKey;
pub use layout_cache::LayoutCache;
pub use message::Message;
pub use state::{AppState, Options, UiMode};
pub use store::TestStore;
pub use summary::{Outcome, Summary};
pub use window::VirtualWindow;
