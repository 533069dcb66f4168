//! Storage access gate and atomic persistence of finished documents.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{ReportError, Result};

/// Decides whether a document may be written to `path`.
///
/// The gate is consulted before any generation work starts.
pub trait StorageAccess {
    fn check(&self, path: &Path) -> Result<()>;
}

/// Grants every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl StorageAccess for AllowAll {
    fn check(&self, _path: &Path) -> Result<()> {
        Ok(())
    }
}

/// Checks the filesystem: the target directory must exist and be writable,
/// and an existing target file must not be read-only.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsAccess;

impl StorageAccess for FsAccess {
    fn check(&self, path: &Path) -> Result<()> {
        let dir = parent_dir(path);
        let meta = fs::metadata(&dir).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("output directory {} is not accessible: {e}", dir.display()),
            )
        })?;
        if !meta.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("{} is not a directory", dir.display()),
            )
            .into());
        }
        if meta.permissions().readonly() {
            return Err(ReportError::PermissionDenied { path: dir });
        }
        match fs::metadata(path) {
            Ok(existing) if existing.permissions().readonly() => {
                Err(ReportError::PermissionDenied {
                    path: path.to_path_buf(),
                })
            }
            _ => Ok(()),
        }
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Maps an io failure while writing `path`, so that a refused write is
/// reported the same way whether the gate or the filesystem caught it.
fn write_error(path: &Path, err: io::Error) -> ReportError {
    if err.kind() == io::ErrorKind::PermissionDenied {
        ReportError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        ReportError::Io(err)
    }
}

/// Creates the temporary file with the mode a plain `File::create` would
/// give, after the umask.
#[cfg(unix)]
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;
    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}

/// Writes `bytes` to `path` through a temporary file in the same directory,
/// so a failed write never leaves a truncated document behind.
///
/// A replaced file keeps its permissions.
pub fn persist(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut tmp = temp_file_in(&parent_dir(path)).map_err(|e| write_error(path, e))?;
    tmp.write_all(bytes).map_err(|e| write_error(path, e))?;
    if let Ok(existing) = fs::metadata(path) {
        fs::set_permissions(tmp.path(), existing.permissions())
            .map_err(|e| write_error(path, e))?;
    }
    tmp.as_file().sync_all().map_err(|e| write_error(path, e))?;
    tmp.persist(path).map_err(|e| write_error(path, e.error))?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote document");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refused_writes_map_to_permission_denied() {
        let path = Path::new("out/table.pdf");
        let err = write_error(path, io::Error::from(io::ErrorKind::PermissionDenied));
        match err {
            ReportError::PermissionDenied { path: denied } => assert_eq!(denied, path),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn other_write_failures_stay_io() {
        let err = write_error(
            Path::new("table.pdf"),
            io::Error::from(io::ErrorKind::StorageFull),
        );
        assert!(matches!(err, ReportError::Io(e) if e.kind() == io::ErrorKind::StorageFull));
    }

    #[test]
    fn parent_dir_defaults_to_current() {
        assert_eq!(parent_dir(Path::new("table.pdf")), PathBuf::from("."));
        assert_eq!(parent_dir(Path::new("out/table.pdf")), PathBuf::from("out"));
    }
}
