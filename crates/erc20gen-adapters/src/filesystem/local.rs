//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use erc20gen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{Erc20genError, Erc20genResult},
};

/// Generated files are readable by owner and group only.
pub const FILE_MODE: u32 = 0o640;
/// Directories created for generated files.
pub const DIR_MODE: u32 = 0o750;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> Erc20genResult<()> {
        let mut builder = std::fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(DIR_MODE);
        }
        builder
            .create(path)
            .map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> Erc20genResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))?;

        // `write` only applies the mode on creation; reset it for overwrites too.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(FILE_MODE))
                .map_err(|e| map_io_error(path, e, "set permissions"))?;
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> Erc20genError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_file_and_creates_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("contracts");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&dir).unwrap();
        let file = dir.join("MyToken.sol");
        fs.write_file(&file, "contract MyToken {}").unwrap();

        assert!(fs.exists(&file));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "contract MyToken {}");
    }

    #[test]
    fn overwrites_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("a.sol");
        let fs = LocalFilesystem::new();

        fs.write_file(&file, "old").unwrap();
        fs.write_file(&file, "new").unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "new");
    }

    #[cfg(unix)]
    #[test]
    fn applies_restricted_modes() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("out");
        let file = dir.join("T.sol");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&dir).unwrap();
        fs.write_file(&file, "x").unwrap();

        let file_mode = std::fs::metadata(&file).unwrap().permissions().mode() & 0o777;
        assert_eq!(file_mode, FILE_MODE);
        // umask can only remove bits
        let dir_mode = std::fs::metadata(&dir).unwrap().permissions().mode() & 0o777;
        assert_eq!(dir_mode & !DIR_MODE, 0);
    }

    #[test]
    fn missing_parent_is_a_filesystem_error() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("missing").join("T.sol");

        let err = LocalFilesystem::new().write_file(&file, "x").unwrap_err();
        assert!(err.to_string().contains("Failed to write file"));
        assert!(!err.is_validation());
    }
}
