//! Filesystem adapters.

mod local;
mod memory;

pub use local::{LocalFilesystem, write_atomic};
pub(crate) use local::map_io_error;
pub use memory::MemoryFilesystem;
