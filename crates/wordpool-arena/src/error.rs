//! Pool-specific error types.

use std::error::Error;
use std::fmt;
use std::io;

use wordpool_core::DescriptorError;

/// Errors that can occur while configuring or exporting a pool.
///
/// Allocation exhaustion and unmatched frees are not errors: they are
/// reported through `Option` return values and leave the pool unchanged.
#[derive(Debug)]
pub enum PoolError {
    /// The pool configuration is invalid.
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
    /// The hole descriptor could not be encoded.
    Descriptor(DescriptorError),
    /// Writing an export file failed.
    Io(io::Error),
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => write!(f, "invalid pool config: {reason}"),
            Self::Descriptor(e) => write!(f, "hole descriptor error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl Error for PoolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Descriptor(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::InvalidConfig { .. } => None,
        }
    }
}

impl From<io::Error> for PoolError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<DescriptorError> for PoolError {
    fn from(e: DescriptorError) -> Self {
        Self::Descriptor(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_is_sourced() {
        let err = PoolError::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert!(err.to_string().contains("missing"));
        assert!(err.source().is_some());
    }

    #[test]
    fn config_error_has_no_source() {
        let err = PoolError::InvalidConfig {
            reason: "bad".into(),
        };
        assert_eq!(err.to_string(), "invalid pool config: bad");
        assert!(err.source().is_none());
    }
}
