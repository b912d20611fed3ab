//! Infrastructure adapters for erc20gen.
//!
//! This crate implements the ports defined in `erc20gen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::TeraRenderer;
