use thiserror::Error;

/// The divisor of a division-like call was zero.
///
/// Produced by [`nonzero_divisor`](crate::nonzero_divisor) and absorbed by the
/// [`Guard`](crate::Guard) that runs the check; it never reaches the caller of
/// the guarded callable.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Can't divide by 0")]
pub struct InvalidDivisor;
