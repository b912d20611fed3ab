//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `erc20gen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ArtifactKind, TokenConfig};
use crate::error::Erc20genResult;

/// Port for artifact rendering.
///
/// Implemented by:
/// - `erc20gen_adapters::renderer::TeraRenderer` (embedded Tera templates)
///
/// ## Contract
///
/// - Input is a configuration that already passed validation.
/// - Output is deterministic: identical input yields byte-identical text.
/// - A binding failure is a `RenderingFailed` error, never a panic.
#[cfg_attr(test, mockall::automock)]
pub trait ArtifactRenderer: Send + Sync {
    /// Render one artifact for the given configuration.
    fn render(&self, kind: ArtifactKind, config: &TokenConfig) -> Erc20genResult<String>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `erc20gen_adapters::filesystem::LocalFilesystem` (production)
/// - `erc20gen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Restricting generated files to owner and group is the adapter's job
/// - Writes overwrite existing files
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> Erc20genResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> Erc20genResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
