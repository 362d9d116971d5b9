//! Reference parsing errors

use super::AgrError;

/// Creates an invalid-reference error naming the expected format
pub fn invalid_reference(reference: impl Into<String>, expected: impl Into<String>) -> AgrError {
    AgrError::InvalidReference {
        reference: reference.into(),
        expected: expected.into(),
    }
}
