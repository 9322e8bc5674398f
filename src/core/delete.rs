//! Single-file removal used by the confirm-delete flow.
//!
//! [Deleter] is the seam between the app state and the filesystem, so the
//! confirmation state machine can be driven in tests without touching real files.

use crate::error::DeleteError;

use std::fs;
use std::path::Path;

/// Removes exactly one file from the filesystem.
pub trait Deleter {
    fn delete(&self, path: &Path) -> Result<(), DeleteError>;

    /// Verb shown in the confirmation dialog, e.g. "delete".
    fn verb(&self) -> &'static str;
}

/// Permanently removes the file with [fs::remove_file].
#[derive(Debug, Default, Clone, Copy)]
pub struct RemoveFile;

/// Moves the file to the platform trash bin.
#[derive(Debug, Default, Clone, Copy)]
pub struct MoveToTrash;

/// Refuses directories. Only a single file is ever removed per confirmation.
fn ensure_not_dir(path: &Path) -> Result<(), DeleteError> {
    let meta = fs::symlink_metadata(path).map_err(|source| DeleteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if meta.is_dir() {
        return Err(DeleteError::IsDirectory(path.to_path_buf()));
    }
    Ok(())
}

impl Deleter for RemoveFile {
    fn delete(&self, path: &Path) -> Result<(), DeleteError> {
        ensure_not_dir(path)?;
        fs::remove_file(path).map_err(|source| DeleteError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn verb(&self) -> &'static str {
        "delete"
    }
}

impl Deleter for MoveToTrash {
    fn delete(&self, path: &Path) -> Result<(), DeleteError> {
        ensure_not_dir(path)?;
        trash::delete(path).map_err(|e| DeleteError::Trash {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn verb(&self) -> &'static str {
        "move to trash"
    }
}

/// Picks the deleter matching the `move_to_trash` setting.
pub fn deleter_for(move_to_trash: bool) -> Box<dyn Deleter> {
    if move_to_trash {
        Box::new(MoveToTrash)
    } else {
        Box::new(RemoveFile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn remove_file_deletes() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let path = tmp.path().join("gone.txt");
        File::create(&path)?;

        RemoveFile.delete(&path)?;
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn remove_file_refuses_directory() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let dir = tmp.path().join("keep");
        fs::create_dir(&dir)?;

        let err = RemoveFile.delete(&dir).err();
        assert!(matches!(err, Some(DeleteError::IsDirectory(_))));
        assert!(dir.is_dir());
        Ok(())
    }

    #[test]
    fn remove_missing_file_is_io_error() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let err = RemoveFile.delete(&tmp.path().join("never_existed")).err();
        match err {
            Some(DeleteError::Io { source, .. }) => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("expected io error, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn deleter_for_picks_mode() {
        assert_eq!(deleter_for(false).verb(), "delete");
        assert_eq!(deleter_for(true).verb(), "move to trash");
    }
}
