//! Error taxonomy shared by every algebra operation.
//!
//! All errors are raised at the call that violates a precondition, before any
//! cached state is touched.

use thiserror::Error;

use crate::coeff::CoeffKind;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PolyError>;

/// Failure reported by a representation converter (H→V or V→H).
///
/// Converters are external collaborators; this crate propagates their errors
/// verbatim through [`PolyError::Conversion`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ConversionError {
    pub message: String,
}

impl ConversionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum PolyError {
    /// Ambient dimensions (or a matrix shape) disagree.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    /// No common coefficient type covers both operands.
    #[error("no common coefficient type for {left} and {right}")]
    TypeIncompatibility { left: CoeffKind, right: CoeffKind },
    /// An in-place operator was called on something without a mutable cache.
    #[error("in-place update is not supported on {kind}")]
    UnsupportedMutation { kind: &'static str },
    /// Exact (`Int` or `Rational`) arithmetic left the range of `i64`.
    #[error("{kind} overflow in {op}")]
    Overflow { kind: CoeffKind, op: &'static str },
    #[error("representation conversion failed: {0}")]
    Conversion(#[from] ConversionError),
}

impl PolyError {
    #[inline]
    pub(crate) fn dims(expected: usize, found: usize) -> Self {
        Self::DimensionMismatch { expected, found }
    }
}

/// Fail with `DimensionMismatch` unless `found == expected`.
#[inline]
pub(crate) fn check_dim(expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(PolyError::dims(expected, found))
    }
}
