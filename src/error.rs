//! Error types for heft.
//!
//! Scan errors are fatal at startup, delete errors are shown on the status line,
//! and config errors fall back to defaults.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure while walking the directory tree.
///
/// The walk stops at the first failure; partial results are discarded.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot read '{}': {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl From<walkdir::Error> for ScanError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(Path::to_path_buf).unwrap_or_default();
        let message = err.to_string();

        // Loop reports carry no io error; links are never followed, so they do not occur.
        let source = err
            .into_io_error()
            .unwrap_or_else(|| io::Error::other(message));
        ScanError::Walk { path, source }
    }
}

/// Failure while removing a single file.
#[derive(Error, Debug)]
pub enum DeleteError {
    #[error("'{}' is a directory", .0.display())]
    IsDirectory(PathBuf),

    #[error("cannot delete '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot move '{}' to trash: {message}", path.display())]
    Trash { path: PathBuf, message: String },
}

impl DeleteError {
    pub fn path(&self) -> &Path {
        match self {
            DeleteError::IsDirectory(path) => path,
            DeleteError::Io { path, .. } => path,
            DeleteError::Trash { path, .. } => path,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot open log file '{}': {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid log level '{0}'")]
    LogLevel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_error_reports_path() {
        let err = DeleteError::IsDirectory(PathBuf::from("/tmp/some_dir"));
        assert_eq!(err.path(), Path::new("/tmp/some_dir"));
        assert_eq!(err.to_string(), "'/tmp/some_dir' is a directory");
    }

    #[test]
    fn missing_root_maps_to_walk_error() {
        let err = walkdir::WalkDir::new("/path/does/not/exist")
            .into_iter()
            .find_map(Result::err)
            .map(ScanError::from);

        match err {
            Some(ScanError::Walk { path, source }) => {
                assert_eq!(path, PathBuf::from("/path/does/not/exist"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected walk error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn loop_report_maps_to_walk_error() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempfile::TempDir::new()?;
        std::os::unix::fs::symlink(tmp.path(), tmp.path().join("back"))?;

        let err = walkdir::WalkDir::new(tmp.path())
            .follow_links(true)
            .into_iter()
            .find_map(Result::err)
            .map(ScanError::from);

        assert!(matches!(err, Some(ScanError::Walk { .. })));
        Ok(())
    }
}
