//! Hard domain errors.
//!
//! Speculative operations report absence through `Option`; the variants
//! here signal programmer error (mixing structures in arithmetic) or an
//! arithmetic impossibility (division by a non-unit).

use crate::element::Element;
use crate::module::Module;

/// Errors raised by element arithmetic, ring construction and morphism
/// application.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AlgebraError {
    /// An operation received an element of a structure other than the one
    /// it operates in.
    #[error("domain mismatch: expected an element of {expected}, received an element of {received}")]
    DomainMismatch {
        /// The structure the operation works in.
        expected: Module,
        /// The structure of the offending operand.
        received: Module,
    },

    /// The divisor has no multiplicative inverse in its ring.
    #[error("no inverse exists: cannot divide {dividend} by {divisor}")]
    NoInverse {
        /// The element being divided.
        dividend: Element,
        /// The non-invertible divisor.
        divisor: Element,
    },

    /// A modular integer ring was requested with a modulus of 1 or less.
    #[error("invalid modulus {0}: modular integer rings require a modulus greater than 1")]
    InvalidModulus(i64),

    /// A matrix or vector had the wrong number of components.
    #[error("dimension mismatch: expected {expected} components, received {received}")]
    DimensionMismatch {
        /// Number of components required.
        expected: usize,
        /// Number of components supplied.
        received: usize,
    },
}

impl AlgebraError {
    pub(crate) fn mismatch(expected: impl Into<Module>, received: impl Into<Module>) -> Self {
        Self::DomainMismatch {
            expected: expected.into(),
            received: received.into(),
        }
    }
}

/// Result alias for fallible algebra operations.
pub type Result<T> = core::result::Result<T, AlgebraError>;
