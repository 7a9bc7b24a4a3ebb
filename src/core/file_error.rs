//! File system errors that remember what the generator was doing.
//!
//! Component files are read, created, rewritten and deleted from several
//! stages of a pass. A bare `io::Error` says none of that, so every such call
//! goes through [`FileResultExt::with_file_context`] or one of the [`FileOps`]
//! helpers, which record the operation, the path, the purpose and the stage.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// What was being done to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    /// Reading a file's text
    Read,
    /// Creating an empty file that must not exist yet
    Create,
    /// Moving a fully written temp file over its target
    Rename,
    /// Deleting a file
    Delete,
    /// Reading modification time or file type
    Metadata,
}

impl fmt::Display for FileOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::Read => "reading",
            Self::Create => "creating",
            Self::Rename => "replacing",
            Self::Delete => "deleting",
            Self::Metadata => "inspecting",
        };
        f.write_str(verb)
    }
}

/// A failed file operation.
#[derive(Error, Debug)]
#[error("Failed {operation} {}", .path.display())]
pub struct FileOperationError {
    /// Operation that failed
    pub operation: FileOperation,
    /// File it was applied to
    pub path: PathBuf,
    /// Why the file was touched, e.g. "reading template"
    pub purpose: String,
    /// Pipeline stage that touched it, e.g. "injector"
    pub stage: String,
    /// Underlying error
    #[source]
    pub source: io::Error,
}

impl FileOperationError {
    /// Multi-line explanation for the error report.
    pub fn user_message(&self) -> String {
        let headline = format!(
            "Failed {} '{}' while {} ({})",
            self.operation,
            self.path.display(),
            self.purpose,
            self.stage
        );

        let hint = match self.source.kind() {
            io::ErrorKind::NotFound => {
                "The file disappeared during the run. Run the generator again once the tree is stable."
                    .to_string()
            }
            io::ErrorKind::AlreadyExists => {
                "A file already exists at this path and is never overwritten by file creation."
                    .to_string()
            }
            io::ErrorKind::PermissionDenied => {
                format!("Permission denied. Check the permissions of {}", self.path.display())
            }
            io::ErrorKind::InvalidData => {
                "The file is not valid UTF-8 text. Component files must be UTF-8.".to_string()
            }
            _ => format!("Error details: {}", self.source),
        };

        format!("{headline}\n\n{hint}")
    }
}

/// Attach file context to I/O results.
pub trait FileResultExt<T> {
    /// Convert the error into a [`FileOperationError`].
    fn with_file_context(
        self,
        operation: FileOperation,
        path: impl Into<PathBuf>,
        purpose: impl Into<String>,
        stage: impl Into<String>,
    ) -> Result<T, FileOperationError>;
}

impl<T> FileResultExt<T> for io::Result<T> {
    fn with_file_context(
        self,
        operation: FileOperation,
        path: impl Into<PathBuf>,
        purpose: impl Into<String>,
        stage: impl Into<String>,
    ) -> Result<T, FileOperationError> {
        self.map_err(|source| FileOperationError {
            operation,
            path: path.into(),
            purpose: purpose.into(),
            stage: stage.into(),
            source,
        })
    }
}

/// File operations used by the pipeline stages.
pub struct FileOps;

impl FileOps {
    /// Read a file as UTF-8 text.
    pub fn read_with_context(
        path: &Path,
        purpose: &str,
        stage: &str,
    ) -> Result<String, FileOperationError> {
        std::fs::read_to_string(path).with_file_context(FileOperation::Read, path, purpose, stage)
    }

    /// Read a file's metadata.
    pub fn metadata_with_context(
        path: &Path,
        purpose: &str,
        stage: &str,
    ) -> Result<std::fs::Metadata, FileOperationError> {
        std::fs::metadata(path).with_file_context(FileOperation::Metadata, path, purpose, stage)
    }

    /// Delete a file.
    pub fn remove_with_context(
        path: &Path,
        purpose: &str,
        stage: &str,
    ) -> Result<(), FileOperationError> {
        std::fs::remove_file(path).with_file_context(FileOperation::Delete, path, purpose, stage)
    }
}
