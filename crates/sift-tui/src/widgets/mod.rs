//! Custom widget components

mod header;
pub mod help;
mod search_input;
pub mod summary;
pub mod test_tree;

pub use header::Header;
pub use search_input::SearchInput;
pub use test_tree::TestTree;
