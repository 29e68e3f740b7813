//! Residues of polynomials modulo a fixed polynomial.

use super::polynomial;
use super::Scalar;
use crate::cast::cast_scalar;
use crate::error::{AlgebraError, Result};
use crate::ring::Ring;
use core::fmt;

/// An element of a quotient ring `F[X]/(m)`, stored as its reduced
/// remainder in ascending degree order.
///
/// ```
/// use composer_algebra::{Residue, Ring, Scalar};
///
/// let q = Ring::rationals();
/// // Q[X]/(X² + 1), a copy of the Gaussian rationals.
/// let gauss = q.quotient(&[Scalar::integer(1), Scalar::integer(0), Scalar::integer(1)], "X").unwrap();
/// let x = Residue::new(&gauss, &[Scalar::integer(0), Scalar::integer(1)]).unwrap();
/// let x2 = Scalar::from(x.clone()).product(&Scalar::from(x)).unwrap();
/// assert_eq!(x2.to_string(), "-1/1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Residue {
    ring: Ring,
    coefficients: Vec<Scalar>,
}

impl Residue {
    /// Reduces the polynomial with the given ascending coefficients in the
    /// quotient ring `ring`, casting each coefficient into the ring's
    /// coefficient ring.
    ///
    /// Returns `None` if `ring` is not a quotient ring or a coefficient does
    /// not cast.
    #[must_use]
    pub fn new(ring: &Ring, coefficients: &[Scalar]) -> Option<Self> {
        let spec = ring.quotient_spec()?;
        let base = spec.coefficients();
        let cast: Option<Vec<Scalar>> = coefficients.iter().map(|c| cast_scalar(c, base)).collect();
        Self::reduced(ring.clone(), cast?).ok()
    }

    /// Reduces `coefficients` (already in the coefficient ring) modulo the
    /// ring's modulus.
    pub(crate) fn reduced(ring: Ring, coefficients: Vec<Scalar>) -> Result<Self> {
        let coefficients = match ring.quotient_spec() {
            Some(spec) => polynomial::rem(&coefficients, spec.modulus(), spec.coefficients())?,
            None => coefficients,
        };
        Ok(Self { ring, coefficients })
    }

    /// Wraps coefficients that are already reduced and trimmed.
    pub(crate) fn from_reduced(ring: Ring, coefficients: Vec<Scalar>) -> Self {
        Self { ring, coefficients }
    }

    /// The quotient ring this residue belongs to.
    #[inline]
    #[must_use]
    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    /// Reduced coefficients in ascending degree order.
    #[inline]
    #[must_use]
    pub fn coefficients(&self) -> &[Scalar] {
        &self.coefficients
    }

    /// Degree of the reduced remainder; `None` for zero.
    #[inline]
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        polynomial::degree(&self.coefficients)
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    pub(crate) fn is_one(&self) -> bool {
        matches!(self.coefficients.as_slice(), [c] if c.is_one())
    }

    pub(crate) fn sum(&self, rhs: &Self) -> Result<Self> {
        self.check_ring(rhs)?;
        Ok(Self {
            ring: self.ring.clone(),
            coefficients: polynomial::add(&self.coefficients, &rhs.coefficients)?,
        })
    }

    pub(crate) fn negated(&self) -> Self {
        Self {
            ring: self.ring.clone(),
            coefficients: polynomial::neg(&self.coefficients),
        }
    }

    pub(crate) fn product(&self, rhs: &Self) -> Result<Self> {
        self.check_ring(rhs)?;
        let Some(spec) = self.ring.quotient_spec() else {
            return Err(AlgebraError::mismatch(self.ring.clone(), rhs.ring.clone()));
        };
        let p = polynomial::mul(&self.coefficients, &rhs.coefficients, spec.coefficients())?;
        Self::reduced(self.ring.clone(), p)
    }

    pub(crate) fn inverse(&self) -> Option<Self> {
        let spec = self.ring.quotient_spec()?;
        let inv =
            polynomial::inverse_mod(&self.coefficients, spec.modulus(), spec.coefficients())
                .ok()??;
        Some(Self {
            ring: self.ring.clone(),
            coefficients: inv,
        })
    }

    fn check_ring(&self, rhs: &Self) -> Result<()> {
        if self.ring == rhs.ring {
            Ok(())
        } else {
            Err(AlgebraError::mismatch(self.ring.clone(), rhs.ring.clone()))
        }
    }
}

/// Writes `coefficients` as an ascending sum in `indeterminate`.
pub(crate) fn write_polynomial(
    f: &mut fmt::Formatter<'_>,
    coefficients: &[Scalar],
    indeterminate: &str,
) -> fmt::Result {
    let mut first = true;
    for (k, c) in coefficients.iter().enumerate() {
        if c.is_zero() {
            continue;
        }
        if !first {
            write!(f, "+")?;
        }
        first = false;
        let power = match k {
            0 => String::new(),
            1 => indeterminate.to_string(),
            _ => format!("{indeterminate}^{k}"),
        };
        match (k, c.is_one()) {
            (0, _) => write!(f, "{}", c.coefficient_text())?,
            (_, true) => write!(f, "{power}")?,
            (_, false) => write!(f, "{}*{power}", c.coefficient_text())?,
        }
    }
    if first {
        write!(f, "0")?;
    }
    Ok(())
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self
            .ring
            .quotient_spec()
            .map_or("X", |spec| spec.indeterminate());
        write_polynomial(f, &self.coefficients, x)
    }
}
