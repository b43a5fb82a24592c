//! Filesystem primitives for the CNC tool inventory
//!
//! Provides normalized path handling and crash-safe file I/O used by the
//! file-backed persistence adapter and the configuration loader.

pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use path::NormalizedPath;
