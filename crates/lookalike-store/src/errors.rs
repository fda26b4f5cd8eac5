//! Error helpers for lookalike-store
//!
//! Wraps lookalike-core LkError with store-specific constructors

use lookalike_core::errors::{LkError, LkErrorKind};
use std::path::Path;

/// Result type alias using LkError
pub type Result<T> = std::result::Result<T, LkError>;

/// Create an IO error, keeping the OS message verbatim
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> LkError {
    LkError::new(LkErrorKind::Io)
        .with_op(operation.to_string())
        .with_path(path)
        .with_message(err.to_string())
}

/// Create an error for a screenshot that vanished between checks
pub fn screenshot_missing(path: &Path) -> LkError {
    lookalike_core::SnapshotError::ScreenshotMissing {
        path: path.to_path_buf(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_keeps_os_message() {
        let os = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only fs");
        let err = io_error("move_file", Path::new("a.png"), os);

        assert_eq!(err.kind(), LkErrorKind::Io);
        assert_eq!(err.op(), Some("move_file"));
        assert_eq!(err.message(), "read-only fs");
        assert_eq!(err.path(), Some(Path::new("a.png")));
    }
}
