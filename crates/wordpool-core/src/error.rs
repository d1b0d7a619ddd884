//! Error types for hole descriptor encoding and decoding.

use std::error::Error;
use std::fmt;

/// Errors from converting a [`HoleList`](crate::HoleList) to or from its
/// flat integer form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DescriptorError {
    /// A value does not fit in the 16-bit signed descriptor field.
    FieldOverflow {
        /// The value that overflowed.
        value: u32,
        /// Position of the value in the flat descriptor.
        index: usize,
    },
    /// The flat descriptor length does not match its declared hole count.
    Truncated {
        /// Length implied by the count in element 0 (`2 * count + 1`).
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
}

impl fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldOverflow { value, index } => {
                write!(
                    f,
                    "descriptor value {value} at index {index} exceeds the 16-bit signed range"
                )
            }
            Self::Truncated { expected, actual } => {
                write!(
                    f,
                    "descriptor length mismatch: expected {expected} elements, got {actual}"
                )
            }
        }
    }
}

impl Error for DescriptorError {}
