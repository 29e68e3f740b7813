//! Elementary affine morphisms.
//!
//! A [`Morphism`] is an immutable map `x ↦ A·x + b` between two modules over
//! one ring. It acts on the flattened coordinates of its argument, so the
//! same machinery covers rings, free modules, null modules and direct sums.
//!
//! The factory methods live on [`Module`]:
//!
//! | Method | Matrix | Offset |
//! |--------|--------|--------|
//! | `projection(i)` | `1 × N` row, 1 at `i` | 0 |
//! | `injection(i)` | `N × 1` column, 1 at `i` | 0 |
//! | `identity()` | `N × N` identity | 0 |
//! | `translation(v)` | `N × N` identity | `v` |
//!
//! Indices are clamped to `N − 1`.
//!
//! ```
//! use composer_algebra::prelude::*;
//!
//! let z3 = Ring::integers().free_module(3).unwrap();
//! let e1 = z3.parse("(0,1,0)").unwrap();
//! let p = z3.projection(1);
//! let i = z3.injection(1);
//! assert_eq!(i.apply(&p.apply(&e1).unwrap()).unwrap(), e1);
//! assert!(z3.projection(0).apply(&e1).unwrap().is_zero());
//! ```

use crate::error::{AlgebraError, Result};
use crate::element::Element;
use crate::linalg::Matrix;
use crate::module::Module;
use crate::scalar::Scalar;
use core::fmt;

/// An affine map between modules over a shared ring.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Morphism {
    domain: Module,
    codomain: Module,
    matrix: Matrix,
    offset: Vec<Scalar>,
}

impl Morphism {
    /// The affine map `x ↦ matrix·x + offset`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DomainMismatch`] if the modules or the
    /// matrix use different rings, and [`AlgebraError::DimensionMismatch`]
    /// if the matrix shape or offset length disagrees with the modules.
    pub fn affine(domain: Module, codomain: Module, matrix: Matrix, offset: Vec<Scalar>) -> Result<Self> {
        let ring = domain.ring();
        if codomain.ring() != ring {
            return Err(AlgebraError::mismatch(domain, codomain));
        }
        if *matrix.ring() != ring {
            return Err(AlgebraError::mismatch(ring, matrix.ring().clone()));
        }
        for (expected, received) in [
            (domain.dimension(), matrix.cols()),
            (codomain.dimension(), matrix.rows()),
            (codomain.dimension(), offset.len()),
        ] {
            if expected != received {
                return Err(AlgebraError::DimensionMismatch { expected, received });
            }
        }
        if let Some(bad) = offset.iter().find(|s| s.ring() != ring) {
            return Err(AlgebraError::mismatch(ring, bad.ring()));
        }
        Ok(Self {
            domain,
            codomain,
            matrix,
            offset,
        })
    }

    /// The linear map `x ↦ matrix·x`.
    ///
    /// # Errors
    ///
    /// As for [`Morphism::affine`].
    pub fn linear(domain: Module, codomain: Module, matrix: Matrix) -> Result<Self> {
        let offset = vec![codomain.ring().zero(); codomain.dimension()];
        Self::affine(domain, codomain, matrix, offset)
    }

    /// The source module.
    #[inline]
    #[must_use]
    pub fn domain(&self) -> &Module {
        &self.domain
    }

    /// The target module.
    #[inline]
    #[must_use]
    pub fn codomain(&self) -> &Module {
        &self.codomain
    }

    /// The linear part `A`.
    #[inline]
    #[must_use]
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// The translation part `b`, in codomain coordinates.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> &[Scalar] {
        &self.offset
    }

    /// Returns true if the offset is zero.
    #[must_use]
    pub fn is_linear(&self) -> bool {
        self.offset.iter().all(Scalar::is_zero)
    }

    /// Applies the map.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DomainMismatch`] if `x` is not an element of
    /// the domain.
    pub fn apply(&self, x: &Element) -> Result<Element> {
        if !self.domain.has_element(x) {
            return Err(AlgebraError::mismatch(self.domain.clone(), x.module()));
        }
        let mut y = self.matrix.apply(&x.flatten())?;
        for (yi, bi) in y.iter_mut().zip(&self.offset) {
            yi.add_assign(bi)?;
        }
        let received = y.len();
        self.codomain
            .assemble(y)
            .ok_or(AlgebraError::DimensionMismatch {
                expected: self.codomain.dimension(),
                received,
            })
    }
}

impl fmt::Display for Morphism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.domain, self.codomain)
    }
}

impl Module {
    /// Projection onto coordinate `index`, as a map into the ring.
    #[must_use]
    pub fn projection(&self, index: usize) -> Morphism {
        let ring = self.ring();
        let n = self.dimension();
        let mut matrix = Matrix::zero(&ring, 1, n);
        matrix.set(0, clamp(index, n), ring.one());
        Morphism {
            domain: self.clone(),
            codomain: Module::Ring(ring.clone()),
            matrix,
            offset: vec![ring.zero()],
        }
    }

    /// Embedding of the ring at coordinate `index`.
    #[must_use]
    pub fn injection(&self, index: usize) -> Morphism {
        let ring = self.ring();
        let n = self.dimension();
        let mut matrix = Matrix::zero(&ring, n, 1);
        matrix.set(clamp(index, n), 0, ring.one());
        Morphism {
            domain: Module::Ring(ring.clone()),
            codomain: self.clone(),
            matrix,
            offset: vec![ring.zero(); n],
        }
    }

    /// The identity map.
    #[must_use]
    pub fn identity(&self) -> Morphism {
        let ring = self.ring();
        let n = self.dimension();
        Morphism {
            domain: self.clone(),
            codomain: self.clone(),
            matrix: Matrix::identity(&ring, n),
            offset: vec![ring.zero(); n],
        }
    }

    /// Translation by `vector`, which is first cast into this module.
    ///
    /// Returns `None` if the cast fails.
    #[must_use]
    pub fn translation(&self, vector: &Element) -> Option<Morphism> {
        let offset = self.cast(vector)?.flatten();
        let ring = self.ring();
        Some(Morphism {
            domain: self.clone(),
            codomain: self.clone(),
            matrix: Matrix::identity(&ring, self.dimension()),
            offset,
        })
    }
}

fn clamp(index: usize, dimension: usize) -> usize {
    index.min(dimension.saturating_sub(1))
}
