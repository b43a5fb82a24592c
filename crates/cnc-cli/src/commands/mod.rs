//! Command implementations for cnc-cli

pub mod list;
pub mod tool;
pub mod transfer;

pub use list::{run_list, run_types};
pub use tool::{run_add, run_edit, run_remove, run_show};
pub use transfer::{run_export, run_import};
