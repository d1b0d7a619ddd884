//! Integer status codes for callers that expect `0` / non-zero results.
//!
//! [`PoolStatus`] is a `repr(i32)` enum. `Ok` is zero; every failure is a
//! distinct positive value. Conversions from [`PoolError`] are provided.

use crate::error::PoolError;

/// Status code for a pool operation.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolStatus {
    /// Success.
    Ok = 0,
    /// The pool configuration was rejected.
    InvalidConfig = 1,
    /// A hole descriptor value did not fit its field.
    DescriptorOverflow = 2,
    /// An export file could not be opened or fully written.
    IoFailed = 3,
}

impl PoolStatus {
    /// Collapse a result into its status code.
    pub fn from_result<T>(result: &Result<T, PoolError>) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(e) => Self::from(e),
        }
    }

    /// The raw integer code.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Whether this is [`PoolStatus::Ok`].
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

impl From<&PoolError> for PoolStatus {
    fn from(e: &PoolError) -> Self {
        match e {
            PoolError::InvalidConfig { .. } => Self::InvalidConfig,
            PoolError::Descriptor(_) => Self::DescriptorOverflow,
            PoolError::Io(_) => Self::IoFailed,
        }
    }
}
