//! Composer Algebra - the coercible ring and module lattice
//!
//! This crate is the numeric substrate of a mathematical composition
//! framework. Every value a composition manipulates (pitches, onsets,
//! durations, formal word sums) is an element of some algebraic structure,
//! and structures are arranged in a lattice that lets an element of one be
//! reinterpreted in another.
//!
//! # Structures
//!
//! | Structure | Dimension | Elements |
//! |-----------|-----------|----------|
//! | [`Ring`] | 1 | [`Scalar`] |
//! | null module `R^0` | 0 | the empty tuple |
//! | free module `R^n` | n ≥ 2 | n-tuples of scalars |
//! | direct sum `M ⊕ N` | dim M + dim N | per-block tuples |
//!
//! Rings are built from the closed set of scalar kinds: integers `Z`,
//! modular integers `Z_n`, rationals `Q`, reals `R`, complex numbers `C`,
//! formal word sums `F<String>` and polynomial quotients `F[X]/(m)`.
//!
//! # Canonical free modules
//!
//! ```
//! use composer_algebra::prelude::*;
//!
//! let z = Ring::integers();
//! assert!(z.free_module(0).unwrap().is_null_module());
//! assert_eq!(z.free_module(1), Some(Module::from(z.clone())));
//! assert_eq!(z.free_module(3).unwrap().dimension(), 3);
//! ```
//!
//! # Coercion
//!
//! ```
//! use composer_algebra::prelude::*;
//!
//! let z3 = Ring::integers().free_module(3).unwrap();
//! let c3 = Ring::complexes().free_module(3).unwrap();
//!
//! let v = z3.parse("(1,2,3)").unwrap();
//! let w = c3.cast(&v).unwrap();
//! assert_eq!(w.to_string(), "(1+0i,2+0i,3+0i)");
//!
//! let p = c3.projection(1);
//! assert_eq!(p.apply(&w).unwrap(), Element::from(Scalar::complex(2.0, 0.0)));
//! ```
//!
//! # Failure styles
//!
//! - Speculative operations (`cast`, `create_element`, `parse`,
//!   `free_module`) return `None` when no value exists.
//! - Arithmetic between elements of different structures returns
//!   [`AlgebraError::DomainMismatch`]; division by a non-unit returns
//!   [`AlgebraError::NoInverse`].

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![warn(missing_docs)]

// Capability traits (has-zero, has-one, is-field, is-vector-space, factory)
pub mod capability;

// Closed sum of scalar kinds and their element-level arithmetic
pub mod scalar;

// Ring handles, the number-ring registry and the ring order
pub mod ring;

// Modules: null, ring, free and direct-sum structures
pub mod module;

// Module elements with pure and in-place arithmetic
pub mod element;

// Cross-structure coercion engine
pub mod cast;

// Textual element syntax
pub mod parse;

// Matrix storage backing affine maps
pub mod linalg;

// Elementary affine morphisms
pub mod morphism;

mod error;

pub use capability::{FieldCapable, FreeModuleFactory, HasOne, HasZero, Structure, VectorSpace};
pub use element::{Blocks, Element, Vector};
pub use error::{AlgebraError, Result};
pub use linalg::Matrix;
pub use module::{DirectSum, FreeModule, Module, ModuleDescriptor};
pub use morphism::Morphism;
pub use ring::{QuotientSpec, Ring, RingKind};
pub use scalar::{Complex, FormalSum, Modular, Rational, Residue, Scalar};

/// Prelude module for convenient imports.
///
/// ```
/// use composer_algebra::prelude::*;
///
/// assert!(Ring::rationals().is_field());
/// ```
pub mod prelude {
    pub use crate::capability::{
        FieldCapable, FreeModuleFactory, HasOne, HasZero, Structure, VectorSpace,
    };
    pub use crate::element::{Blocks, Element, Vector};
    pub use crate::error::{AlgebraError, Result};
    pub use crate::linalg::Matrix;
    pub use crate::module::{Module, ModuleDescriptor};
    pub use crate::morphism::Morphism;
    pub use crate::ring::{Ring, RingKind};
    pub use crate::scalar::{Complex, FormalSum, Modular, Rational, Residue, Scalar};
}
