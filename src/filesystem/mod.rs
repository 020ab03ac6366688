//! Filesystem boundary for the file commands
//!
//! The interpreter never touches `std::fs` directly. Every file command goes
//! through the [`FileSystem`] trait so that the command dispatcher only deals
//! with paths in and `Result`s out:
//! - [`HostFileSystem`]: the real platform filesystem
//! - [`FsError`]: why an operation did nothing
//!
//! Paths are used exactly as the script spelled them; relative paths resolve
//! against the process working directory.

use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Failure of a single filesystem operation.
///
/// These are operational errors: the dispatcher reports them and the script
/// keeps running.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    fn io(path: &str) -> impl FnOnce(io::Error) -> FsError + '_ {
        move |source| FsError::Io {
            path: path.to_string(),
            source,
        }
    }
}

/// Operations backing the eight file commands (`Wait` needs no filesystem)
pub trait FileSystem {
    /// Move `src` to `dst`, replacing `dst` if it exists
    fn move_file(&mut self, src: &str, dst: &str) -> Result<(), FsError>;

    /// Copy `src` to `dst`, replacing `dst` if it exists. Returns bytes copied.
    fn copy_file(&mut self, src: &str, dst: &str) -> Result<u64, FsError>;

    /// Rename `old` to `new`, replacing `new` if it exists
    fn rename_file(&mut self, old: &str, new: &str) -> Result<(), FsError>;

    /// Remove a file or an empty directory
    fn delete_file(&mut self, path: &str) -> Result<(), FsError>;

    /// Names of the immediate children of `dir`, sorted
    fn list_files(&mut self, dir: &str) -> Result<Vec<String>, FsError>;

    /// Number of immediate children of `dir`
    fn count_files(&mut self, dir: &str) -> Result<u64, FsError>;

    /// Total size in bytes of every regular file under `path`, recursively
    fn check_space(&mut self, path: &str) -> Result<u64, FsError>;
}

/// [`FileSystem`] backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFileSystem;

impl HostFileSystem {
    pub fn new() -> Self {
        HostFileSystem
    }

    fn require_exists(path: &str) -> Result<(), FsError> {
        if Path::new(path).exists() {
            Ok(())
        } else {
            Err(FsError::NotFound(path.to_string()))
        }
    }

    fn require_dir(path: &str) -> Result<(), FsError> {
        if Path::new(path).is_dir() {
            Ok(())
        } else {
            Err(FsError::DirectoryNotFound(path.to_string()))
        }
    }

    /// Rename, falling back to copy + delete when the rename itself fails
    /// (typically because `src` and `dst` are on different devices)
    fn relocate(src: &str, dst: &str) -> Result<(), FsError> {
        match fs::rename(src, dst) {
            Ok(()) => Ok(()),
            Err(rename_err) if Path::new(src).is_file() => {
                tracing::debug!(%src, %dst, error = %rename_err, "rename failed, copying instead");
                fs::copy(src, dst).map_err(FsError::io(src))?;
                fs::remove_file(src).map_err(FsError::io(src))
            }
            Err(rename_err) => Err(FsError::Io {
                path: src.to_string(),
                source: rename_err,
            }),
        }
    }

    fn tree_size(path: &Path) -> io::Result<u64> {
        let meta = fs::symlink_metadata(path)?;
        if meta.is_file() {
            return Ok(meta.len());
        }
        if !meta.is_dir() {
            return Ok(0);
        }

        let mut total = 0;
        for entry in fs::read_dir(path)? {
            total += Self::tree_size(&entry?.path())?;
        }
        Ok(total)
    }
}

impl FileSystem for HostFileSystem {
    fn move_file(&mut self, src: &str, dst: &str) -> Result<(), FsError> {
        Self::require_exists(src)?;
        Self::relocate(src, dst)
    }

    fn copy_file(&mut self, src: &str, dst: &str) -> Result<u64, FsError> {
        Self::require_exists(src)?;
        fs::copy(src, dst).map_err(FsError::io(src))
    }

    fn rename_file(&mut self, old: &str, new: &str) -> Result<(), FsError> {
        Self::require_exists(old)?;
        Self::relocate(old, new)
    }

    fn delete_file(&mut self, path: &str) -> Result<(), FsError> {
        Self::require_exists(path)?;
        if Path::new(path).is_dir() {
            fs::remove_dir(path).map_err(FsError::io(path))
        } else {
            fs::remove_file(path).map_err(FsError::io(path))
        }
    }

    fn list_files(&mut self, dir: &str) -> Result<Vec<String>, FsError> {
        Self::require_dir(dir)?;
        let mut names = Vec::new();
        for entry in fs::read_dir(dir).map_err(FsError::io(dir))? {
            let entry = entry.map_err(FsError::io(dir))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn count_files(&mut self, dir: &str) -> Result<u64, FsError> {
        Self::require_dir(dir)?;
        let mut count = 0;
        for entry in fs::read_dir(dir).map_err(FsError::io(dir))? {
            entry.map_err(FsError::io(dir))?;
            count += 1;
        }
        Ok(count)
    }

    fn check_space(&mut self, path: &str) -> Result<u64, FsError> {
        if !Path::new(path).exists() {
            return Err(FsError::DirectoryNotFound(path.to_string()));
        }
        Self::tree_size(Path::new(path)).map_err(FsError::io(path))
    }
}
