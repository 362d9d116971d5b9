//! Download and extraction errors

use super::AgrError;

/// Creates a fetch error for a non-success HTTP status or unreadable body
pub fn fetch_failed(message: impl Into<String>) -> AgrError {
    AgrError::FetchFailed {
        message: message.into(),
    }
}

/// Creates a network error (DNS, connection, timeout)
pub fn network_error(message: impl Into<String>) -> AgrError {
    AgrError::Network {
        message: message.into(),
    }
}

/// Creates an extraction error for an unreadable gzip-tar stream
pub fn extraction_failed(message: impl Into<String>) -> AgrError {
    AgrError::ExtractionFailed {
        message: message.into(),
    }
}
