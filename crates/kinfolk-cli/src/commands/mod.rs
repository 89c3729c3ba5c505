//! Command implementations.

pub mod catalog;
pub mod config;
pub mod label;
pub mod list;
pub mod tree;

pub use self::catalog::execute_catalog;
pub use self::config::execute_config;
pub use self::label::execute_label;
pub use self::list::execute_list;
pub use self::tree::execute_tree;
