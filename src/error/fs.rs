//! File system errors

use std::path::Path;

use super::AgrError;

/// Creates a read error for `path`
pub fn read_failed(path: &Path, reason: impl ToString) -> AgrError {
    AgrError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a write error for `path`
pub fn write_failed(path: &Path, reason: impl ToString) -> AgrError {
    AgrError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> AgrError {
    AgrError::IoError {
        message: message.into(),
    }
}
