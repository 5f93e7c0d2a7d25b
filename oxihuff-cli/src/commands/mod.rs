//! Command implementations for the OxiHuff CLI.

pub mod decode;
pub mod encode;
pub mod table;
pub mod tree;

pub use decode::cmd_decode;
pub use encode::cmd_encode;
pub use table::cmd_table;
pub use tree::cmd_tree;
