//! Rings: the dimension-1 structures every module is built over.
//!
//! A [`Ring`] is a cheap, shareable handle onto a [`RingKind`]. The number
//! rings `Z`, `Q`, `R` and `C` come from a once-initialized registry and are
//! handle-identical across calls, as is every `Z_n` for a given modulus.
//! Formal-sum and polynomial-quotient rings are value objects compared by
//! their parameters.
//!
//! # Example
//!
//! ```
//! use composer_algebra::prelude::*;
//!
//! let z7 = Ring::modular(7).unwrap();
//! assert!(z7.is_field());
//! assert!(!Ring::modular(8).unwrap().is_field());
//! assert!(Ring::modular(1).is_err());
//!
//! // Z_n < Z < Q < R < C
//! assert!(z7 < Ring::integers());
//! assert!(Ring::integers() < Ring::complexes());
//! ```

mod order;
mod registry;

pub use order::{COMPLEX_RANK, INTEGER_RANK, RATIONAL_RANK, REAL_RANK};

use crate::capability::{FieldCapable, FreeModuleFactory, HasOne, HasZero, Structure, VectorSpace};
use crate::cast::cast_scalar;
use crate::error::{AlgebraError, Result};
use crate::module::{FreeModule, Module};
use crate::scalar::{
    is_prime, polynomial, write_polynomial, Complex, FormalSum, Modular, Rational, Residue, Scalar,
};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use std::sync::Arc;

use order::compare_rings;
use registry::registry;

/// The family and parameters of a ring.
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum RingKind {
    /// The integers `Z`.
    Integers,
    /// The integers modulo `n`, `n > 1`.
    Modular(i64),
    /// The rationals `Q`.
    Rationals,
    /// The reals `R`.
    Reals,
    /// The complex numbers `C`.
    Complexes,
    /// Formal sums of words with coefficients in a number ring.
    FormalSums(Ring),
    /// Polynomials over a number ring modulo a monic polynomial.
    Quotient(QuotientSpec),
}

impl RingKind {
    /// Returns true for `Z`, `Z_n`, `Q`, `R` and `C`.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(
            self,
            Self::Integers | Self::Modular(_) | Self::Rationals | Self::Reals | Self::Complexes
        )
    }

    /// Canonical name of the ring family.
    #[must_use]
    pub const fn family_name(&self) -> &'static str {
        match self {
            Self::Integers => "Integers",
            Self::Modular(_) => "Modular",
            Self::Rationals => "Rationals",
            Self::Reals => "Reals",
            Self::Complexes => "Complexes",
            Self::FormalSums(_) => "FormalSums",
            Self::Quotient(_) => "Quotient",
        }
    }
}

/// Parameters of a polynomial quotient ring `F[X]/(m)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuotientSpec {
    coefficients: Ring,
    modulus: Vec<Scalar>,
    indeterminate: String,
}

impl QuotientSpec {
    /// The coefficient ring `F`.
    #[inline]
    #[must_use]
    pub fn coefficients(&self) -> &Ring {
        &self.coefficients
    }

    /// The monic modulus, ascending coefficients.
    #[inline]
    #[must_use]
    pub fn modulus(&self) -> &[Scalar] {
        &self.modulus
    }

    /// Name of the indeterminate.
    #[inline]
    #[must_use]
    pub fn indeterminate(&self) -> &str {
        &self.indeterminate
    }

    /// Degree of the modulus.
    #[inline]
    #[must_use]
    pub fn degree(&self) -> usize {
        self.modulus.len().saturating_sub(1)
    }
}

/// A handle onto a ring.
///
/// Cloning is an `Arc` clone. Equality and hashing are structural, so two
/// independently built formal-sum rings over `Z` are equal;
/// [`Ring::ptr_eq`] tells whether two handles share one instance.
#[derive(Clone)]
pub struct Ring(Arc<RingKind>);

impl Ring {
    pub(crate) fn from_kind(kind: RingKind) -> Self {
        Self(Arc::new(kind))
    }

    /// The integers `Z`.
    #[must_use]
    pub fn integers() -> Self {
        registry().integers.clone()
    }

    /// The rationals `Q`.
    #[must_use]
    pub fn rationals() -> Self {
        registry().rationals.clone()
    }

    /// The reals `R`.
    #[must_use]
    pub fn reals() -> Self {
        registry().reals.clone()
    }

    /// The complex numbers `C`.
    #[must_use]
    pub fn complexes() -> Self {
        registry().complexes.clone()
    }

    /// `Z`, `Q`, `R` and `C` in rank order.
    #[must_use]
    pub fn number_rings() -> Vec<Self> {
        registry().iter().cloned().collect()
    }

    /// The integers modulo `modulus`.
    ///
    /// Repeated calls with one modulus return the same shared instance, so
    /// [`Ring::ptr_eq`] holds between them and their null modules are
    /// identical.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidModulus`] if `modulus ≤ 1`.
    pub fn modular(modulus: i64) -> Result<Self> {
        if modulus <= 1 {
            tracing::debug!(modulus, "rejected modular ring");
            return Err(AlgebraError::InvalidModulus(modulus));
        }
        Ok(Self::modular_unchecked(modulus))
    }

    /// `Z_modulus` for a modulus already known to exceed 1.
    pub(crate) fn modular_unchecked(modulus: i64) -> Self {
        registry::modular(modulus)
    }

    /// The ring of formal word sums with coefficients in this ring.
    ///
    /// Returns `None` unless this is a number ring.
    #[must_use]
    pub fn formal_sums(&self) -> Option<Self> {
        if !self.kind().is_number() {
            tracing::debug!(ring = %self, "formal sums need a number coefficient ring");
            return None;
        }
        Some(Self::from_kind(RingKind::FormalSums(self.clone())))
    }

    /// The quotient `self[indeterminate]/(modulus)`.
    ///
    /// `modulus` lists ascending coefficients, each cast into this ring. It
    /// is normalized to be monic. Returns `None` unless this is a number
    /// ring, the modulus has degree at least 1 with an invertible leading
    /// coefficient, and the indeterminate is a nonempty alphabetic name.
    ///
    /// ```
    /// use composer_algebra::{Ring, Scalar};
    ///
    /// let q = Ring::rationals();
    /// let m = [Scalar::integer(2), Scalar::integer(0), Scalar::integer(2)];
    /// let r = q.quotient(&m, "X").unwrap();
    /// assert_eq!(r.to_string(), "Q[X]/(1/1+X^2)");
    /// assert!(r.is_field());
    /// ```
    #[must_use]
    pub fn quotient(&self, modulus: &[Scalar], indeterminate: &str) -> Option<Self> {
        if !self.kind().is_number()
            || indeterminate.is_empty()
            || !indeterminate.chars().all(char::is_alphabetic)
        {
            tracing::debug!(ring = %self, indeterminate, "rejected quotient ring");
            return None;
        }
        let mut m: Vec<Scalar> = modulus
            .iter()
            .map(|c| cast_scalar(c, self))
            .collect::<Option<_>>()?;
        polynomial::trim(&mut m);
        let Some(d) = polynomial::degree(&m).filter(|&d| d >= 1) else {
            tracing::debug!(ring = %self, "quotient modulus must have positive degree");
            return None;
        };
        let lead_inv = m[d].inverse().ok()?;
        let mut monic: Vec<Scalar> = m
            .iter()
            .map(|c| c.product(&lead_inv))
            .collect::<Result<_>>()
            .ok()?;
        monic[d] = self.one();
        Some(Self::from_kind(RingKind::Quotient(QuotientSpec {
            coefficients: self.clone(),
            modulus: monic,
            indeterminate: indeterminate.to_string(),
        })))
    }

    /// The ring's family and parameters.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &RingKind {
        &self.0
    }

    /// Returns true if both handles point at the same ring instance.
    #[inline]
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Modulus of `Z_n` and of formal sums over `Z_n`.
    #[must_use]
    pub fn modulus(&self) -> Option<i64> {
        match self.kind() {
            RingKind::Modular(n) => Some(*n),
            RingKind::FormalSums(f) => f.modulus(),
            _ => None,
        }
    }

    /// Returns true for formal-sum rings.
    #[must_use]
    pub fn is_formal_sum(&self) -> bool {
        matches!(self.kind(), RingKind::FormalSums(_))
    }

    /// Coefficient ring of a formal-sum ring.
    pub(crate) fn factor_ring(&self) -> Option<Self> {
        match self.kind() {
            RingKind::FormalSums(f) => Some(f.clone()),
            _ => None,
        }
    }

    /// Parameters of a quotient ring.
    #[must_use]
    pub fn quotient_spec(&self) -> Option<&QuotientSpec> {
        match self.kind() {
            RingKind::Quotient(spec) => Some(spec),
            _ => None,
        }
    }

    /// The additive identity.
    #[must_use]
    pub fn zero(&self) -> Scalar {
        match self.kind() {
            RingKind::Integers => Scalar::Integer(0),
            RingKind::Modular(n) => Scalar::Modular(Modular::reduce(0, *n)),
            RingKind::Rationals => Scalar::Rational(num_traits::Zero::zero()),
            RingKind::Reals => Scalar::Real(0.0),
            RingKind::Complexes => Scalar::Complex(<Complex as num_traits::Zero>::zero()),
            RingKind::FormalSums(_) => Scalar::FormalSum(FormalSum::empty(self.clone())),
            RingKind::Quotient(_) => Scalar::Residue(Residue::from_reduced(self.clone(), Vec::new())),
        }
    }

    /// The multiplicative identity.
    #[must_use]
    pub fn one(&self) -> Scalar {
        match self.kind() {
            RingKind::Integers => Scalar::Integer(1),
            RingKind::Modular(n) => Scalar::Modular(Modular::reduce(1, *n)),
            RingKind::Rationals => Scalar::Rational(Rational::from_integer(1)),
            RingKind::Reals => Scalar::Real(1.0),
            RingKind::Complexes => Scalar::Complex(<Complex as num_traits::One>::one()),
            RingKind::FormalSums(f) => {
                Scalar::FormalSum(FormalSum::monomial(self.clone(), String::new(), f.one()))
            }
            RingKind::Quotient(spec) => Scalar::Residue(Residue::from_reduced(
                self.clone(),
                vec![spec.coefficients().one()],
            )),
        }
    }

    /// Returns true if every nonzero element is invertible.
    #[must_use]
    pub fn is_field(&self) -> bool {
        match self.kind() {
            RingKind::Integers | RingKind::FormalSums(_) => false,
            RingKind::Modular(n) => is_prime(*n),
            RingKind::Rationals | RingKind::Reals | RingKind::Complexes => true,
            RingKind::Quotient(spec) => {
                polynomial::is_irreducible(spec.modulus(), spec.coefficients())
            }
        }
    }

    /// Returns true if free modules over this ring are vector spaces.
    ///
    /// A quotient ring `F[X]/(m)` qualifies when `F` is a field.
    #[must_use]
    pub fn is_vector_space(&self) -> bool {
        match self.kind() {
            RingKind::Quotient(spec) => spec.coefficients().is_field(),
            _ => self.is_field(),
        }
    }

    /// The canonical free module of the given dimension.
    ///
    /// Dimension 0 is [`Ring::null_module`], dimension 1 is the ring itself.
    /// Returns `None` for a dimension of 2 or more over a quotient ring whose
    /// coefficient ring is not a field.
    #[must_use]
    pub fn free_module(&self, dimension: usize) -> Option<Module> {
        match dimension {
            0 => Some(self.null_module()),
            1 => Some(Module::Ring(self.clone())),
            n => {
                if self.quotient_spec().is_some() && !self.is_vector_space() {
                    tracing::debug!(ring = %self, dimension = n, "rejected free module over non-field coefficients");
                    return None;
                }
                Some(Module::Free(FreeModule::new(self.clone(), n)))
            }
        }
    }

    /// The dimension-0 free module over this ring.
    #[must_use]
    pub fn null_module(&self) -> Module {
        Module::Null(self.clone())
    }

    /// Casts a scalar of any ring into this ring.
    #[must_use]
    pub fn coerce(&self, scalar: &Scalar) -> Option<Scalar> {
        cast_scalar(scalar, self)
    }

    /// Parses the textual form of a scalar of this ring.
    #[must_use]
    pub fn parse_scalar(&self, text: &str) -> Option<Scalar> {
        crate::parse::parse_scalar(text, self)
    }

    /// Persistence name of the ring family, without the structure suffix.
    pub(crate) fn type_prefix(&self) -> String {
        match self.kind() {
            RingKind::Integers => "Z".into(),
            RingKind::Modular(_) => "Zn".into(),
            RingKind::Rationals => "Q".into(),
            RingKind::Reals => "R".into(),
            RingKind::Complexes => "C".into(),
            RingKind::FormalSums(f) => format!("{}String", f.type_prefix()),
            RingKind::Quotient(_) => "Quotient".into(),
        }
    }
}

impl PartialEq for Ring {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other) || self.0 == other.0
    }
}

impl Eq for Ring {}

impl Hash for Ring {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl PartialOrd for Ring {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ring {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_rings(self, other)
    }
}

impl fmt::Debug for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ring({self})")
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            RingKind::Integers => write!(f, "Z"),
            RingKind::Modular(n) => write!(f, "Z_{n}"),
            RingKind::Rationals => write!(f, "Q"),
            RingKind::Reals => write!(f, "R"),
            RingKind::Complexes => write!(f, "C"),
            RingKind::FormalSums(r) => write!(f, "{r}<String>"),
            RingKind::Quotient(spec) => {
                write!(f, "{}[{}]/(", spec.coefficients, spec.indeterminate)?;
                write_polynomial(f, &spec.modulus, &spec.indeterminate)?;
                write!(f, ")")
            }
        }
    }
}

impl HasZero for Ring {
    type Value = Scalar;

    fn zero(&self) -> Scalar {
        Ring::zero(self)
    }
}

impl HasOne for Ring {
    fn one(&self) -> Scalar {
        Ring::one(self)
    }
}

impl FieldCapable for Ring {
    fn is_field(&self) -> bool {
        Ring::is_field(self)
    }
}

impl VectorSpace for Ring {
    fn is_vector_space(&self) -> bool {
        Ring::is_vector_space(self)
    }
}

impl FreeModuleFactory for Ring {
    fn free_module(&self, dimension: usize) -> Option<Module> {
        Ring::free_module(self, dimension)
    }

    fn null_module(&self) -> Module {
        Ring::null_module(self)
    }
}

impl Structure for Ring {
    fn as_module(&self) -> Module {
        Module::Ring(self.clone())
    }

    fn dimension(&self) -> usize {
        1
    }

    fn ring(&self) -> Ring {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<Scalar> {
        values.iter().copied().map(Scalar::integer).collect()
    }

    #[test]
    fn test_number_rings_are_shared_handles() {
        assert!(Ring::ptr_eq(&Ring::reals(), &Ring::reals()));
        assert_eq!(Ring::number_rings().len(), 4);
    }

    #[test]
    fn test_modular_rings_are_singletons_per_modulus() {
        let a = Ring::modular(12).unwrap();
        let b = Ring::modular(12).unwrap();
        assert!(Ring::ptr_eq(&a, &b));
        assert_ne!(a, Ring::modular(13).unwrap());
        assert!(Ring::ptr_eq(&Scalar::modular(5, 12).unwrap().ring(), &a));

        let z7 = Ring::modular(7).unwrap();
        assert!(z7.null_module().is_identical(&Ring::modular(7).unwrap().free_module(0).unwrap()));
    }

    #[test]
    fn test_formal_sums_compare_by_value() {
        let a = Ring::integers().formal_sums().unwrap();
        let b = Ring::integers().formal_sums().unwrap();
        assert!(!Ring::ptr_eq(&a, &b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_modulus_at_most_one_is_rejected() {
        assert_eq!(Ring::modular(1), Err(AlgebraError::InvalidModulus(1)));
        assert_eq!(Ring::modular(-5), Err(AlgebraError::InvalidModulus(-5)));
        assert_eq!(Ring::modular(2).unwrap().modulus(), Some(2));
    }

    #[test]
    fn test_field_predicate() {
        assert!(!Ring::integers().is_field());
        assert!(Ring::rationals().is_field());
        assert!(Ring::modular(13).unwrap().is_field());
        assert!(!Ring::modular(15).unwrap().is_field());
        assert!(Ring::modular(1_000_000_007).unwrap().is_field());
        assert!(!Ring::modular(1_000_000_007 * 998_244_353).unwrap().is_field());
        assert!(!Ring::reals().formal_sums().unwrap().is_field());
    }

    #[test]
    fn test_zero_and_one() {
        for r in Ring::number_rings() {
            assert!(r.zero().is_zero(), "{r}");
            assert!(r.one().is_one(), "{r}");
            assert_eq!(r.zero().ring(), r);
        }
        let zs = Ring::modular(5).unwrap().formal_sums().unwrap();
        assert!(zs.one().is_one());
        assert_eq!(zs.modulus(), Some(5));
    }

    #[test]
    fn test_quotient_is_normalized_to_monic() {
        let q = Ring::rationals();
        let a = q.quotient(&ints(&[2, 0, 2]), "X").unwrap();
        let b = q.quotient(&ints(&[1, 0, 1]), "X").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.quotient_spec().unwrap().degree(), 2);
    }

    #[test]
    fn test_quotient_rejections() {
        let z = Ring::integers();
        assert!(z.quotient(&ints(&[5]), "X").is_none());
        assert!(z.quotient(&ints(&[1, 2]), "X").is_none());
        assert!(z.quotient(&ints(&[1, 1]), "").is_none());
        assert!(z.quotient(&ints(&[1, 1]), "X1").is_none());
        let zs = z.formal_sums().unwrap();
        assert!(zs.quotient(&ints(&[1, 1]), "X").is_none());
        assert!(zs.formal_sums().is_none());
    }

    #[test]
    fn test_quotient_free_modules_need_field_coefficients() {
        let over_z = Ring::integers().quotient(&ints(&[1, 0, 1]), "X").unwrap();
        assert!(!over_z.is_vector_space());
        assert!(over_z.free_module(2).is_none());
        assert!(over_z.free_module(1).is_some());
        assert!(over_z.free_module(0).is_some());

        let over_q = Ring::rationals().quotient(&ints(&[1, 0, 1]), "X").unwrap();
        assert!(over_q.is_vector_space());
        assert_eq!(over_q.free_module(3).unwrap().dimension(), 3);
    }

    #[test]
    fn test_display_and_type_prefix() {
        assert_eq!(Ring::modular(7).unwrap().to_string(), "Z_7");
        let cs = Ring::complexes().formal_sums().unwrap();
        assert_eq!(cs.to_string(), "C<String>");
        assert_eq!(cs.type_prefix(), "CString");
        let zn = Ring::modular(3).unwrap().formal_sums().unwrap();
        assert_eq!(zn.type_prefix(), "ZnString");
    }
}
