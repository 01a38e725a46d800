//! Configuration file parsing for sift
//!
//! Settings live in `$SIFT_CONFIG` or `<config dir>/sift/config.toml`.

pub mod settings;
pub mod types;

pub use settings::{config_path, load_settings, load_settings_from, read_settings, CONFIG_ENV};
pub use types::*;
