use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal I/O failures at the file boundary.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Source document missing or unreadable.
    #[error("cannot read source document {}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Destination could not be created or written.
    #[error("cannot write destination document {}", path.display())]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenerateError {
    pub fn source_unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::SourceUnreadable {
            path: path.into(),
            source,
        }
    }

    pub fn destination_unwritable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::DestinationUnwritable {
            path: path.into(),
            source,
        }
    }

    /// Path of the file that failed
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::SourceUnreadable { path, .. } | Self::DestinationUnwritable { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_path() {
        let err = GenerateError::source_unreadable(
            "src/lib.md",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.to_string(), "cannot read source document src/lib.md");
        assert_eq!(err.path(), std::path::Path::new("src/lib.md"));
    }

    #[test]
    fn test_io_error_kept_as_source() {
        use std::error::Error as _;

        let err = GenerateError::destination_unwritable(
            "README.md",
            io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        );
        let source = err.source().expect("io error source");
        assert_eq!(source.to_string(), "read-only");
    }
}
