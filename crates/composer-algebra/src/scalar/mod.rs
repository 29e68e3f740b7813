//! Scalars: the closed set of ring element kinds.
//!
//! Every element of a [`Ring`] is a [`Scalar`]. The kinds form a closed sum
//! type so that the coercion table in [`crate::cast`] is an exhaustive
//! `match`; adding a kind is a compile-time-checked change.
//!
//! | Kind | Ring | Representation |
//! |------|------|----------------|
//! | `Integer` | `Z` | `i64`, wrapping |
//! | `Modular` | `Z_n` | [`Modular`] |
//! | `Rational` | `Q` | [`Rational`], arbitrary precision |
//! | `Real` | `R` | `f64` |
//! | `Complex` | `C` | [`Complex`] over `Complex64` |
//! | `FormalSum` | `F<String>` | [`FormalSum`] |
//! | `Residue` | `F[X]/(m)` | [`Residue`] |
//!
//! Arithmetic comes in two families. The pure family (`sum`, `difference`,
//! `product`, `negated`, `quotient`) returns a new value; the in-place
//! family (`add_assign`, `sub_assign`, `mul_assign`, `negate`) mutates the
//! receiver. In-place operations change the value's hash: take a scalar out
//! of any hashed collection before mutating it.

mod complex;
mod formal;
mod modular;
pub(crate) mod polynomial;
mod rational;
mod residue;

pub use complex::Complex;
pub use formal::FormalSum;
pub use modular::Modular;
pub use rational::{Rational, MAX_APPROXIMATION_DENOMINATOR};
pub use residue::Residue;

pub(crate) use complex::{canonical, cmp_real, hash_real};
pub(crate) use modular::is_prime;
pub(crate) use residue::write_polynomial;

use crate::error::{AlgebraError, Result};
use crate::ring::Ring;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use num_traits::{One, Zero};

/// An element of a ring.
///
/// ```
/// use composer_algebra::{Ring, Scalar};
///
/// let a = Scalar::integer(6);
/// let b = Scalar::integer(7);
/// assert_eq!(a.product(&b).unwrap(), Scalar::integer(42));
/// assert_eq!(a.ring(), Ring::integers());
///
/// // Mixing rings is a programmer error.
/// assert!(a.sum(&Scalar::real(1.0)).is_err());
/// ```
#[derive(Clone, Debug)]
pub enum Scalar {
    /// An integer in `Z`.
    Integer(i64),
    /// A residue in `Z_n`.
    Modular(Modular),
    /// A fraction in `Q`.
    Rational(Rational),
    /// A real number in `R`.
    Real(f64),
    /// A complex number in `C`.
    Complex(Complex),
    /// A formal sum of words.
    FormalSum(FormalSum),
    /// A polynomial residue in a quotient ring.
    Residue(Residue),
}

impl Scalar {
    /// An integer scalar.
    #[inline]
    #[must_use]
    pub const fn integer(n: i64) -> Self {
        Self::Integer(n)
    }

    /// A residue `value mod modulus`. Returns `None` if `modulus ≤ 1`.
    #[must_use]
    pub fn modular(value: i64, modulus: i64) -> Option<Self> {
        Modular::new(value, modulus).map(Self::Modular)
    }

    /// A fraction. Returns `None` for a zero denominator.
    #[must_use]
    pub fn rational(num: i64, den: i64) -> Option<Self> {
        Rational::new(num, den).map(Self::Rational)
    }

    /// A real scalar.
    #[inline]
    #[must_use]
    pub const fn real(x: f64) -> Self {
        Self::Real(x)
    }

    /// A complex scalar.
    #[inline]
    #[must_use]
    pub const fn complex(re: f64, im: f64) -> Self {
        Self::Complex(Complex::new(re, im))
    }

    /// The ring this scalar belongs to.
    #[must_use]
    pub fn ring(&self) -> Ring {
        match self {
            Self::Integer(_) => Ring::integers(),
            Self::Modular(m) => Ring::modular_unchecked(m.modulus()),
            Self::Rational(_) => Ring::rationals(),
            Self::Real(_) => Ring::reals(),
            Self::Complex(_) => Ring::complexes(),
            Self::FormalSum(s) => s.ring().clone(),
            Self::Residue(r) => r.ring().clone(),
        }
    }

    /// Returns true for the additive identity.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(n) => *n == 0,
            Self::Modular(m) => m.value() == 0,
            Self::Rational(q) => q.is_zero(),
            Self::Real(x) => *x == 0.0,
            Self::Complex(z) => z.is_zero(),
            Self::FormalSum(s) => s.is_zero(),
            Self::Residue(r) => r.is_zero(),
        }
    }

    /// Returns true for the multiplicative identity.
    #[must_use]
    pub fn is_one(&self) -> bool {
        match self {
            Self::Integer(n) => *n == 1,
            Self::Modular(m) => m.value() == 1,
            Self::Rational(q) => q.is_one(),
            Self::Real(x) => *x == 1.0,
            Self::Complex(z) => z.re() == 1.0 && z.im() == 0.0,
            Self::FormalSum(s) => s.is_one(),
            Self::Residue(r) => r.is_one(),
        }
    }

    /// Returns true if this scalar has a multiplicative inverse.
    #[must_use]
    pub fn is_invertible(&self) -> bool {
        self.try_inverse().is_some()
    }

    /// Sum of two scalars of the same ring.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DomainMismatch`] if the rings differ.
    pub fn sum(&self, rhs: &Self) -> Result<Self> {
        Ok(match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => Self::Integer(a.wrapping_add(*b)),
            (Self::Modular(a), Self::Modular(b)) if a.modulus() == b.modulus() => {
                Self::Modular(a.add(b))
            }
            (Self::Rational(a), Self::Rational(b)) => Self::Rational(a + b),
            (Self::Real(a), Self::Real(b)) => Self::Real(a + b),
            (Self::Complex(a), Self::Complex(b)) => Self::Complex(*a + *b),
            (Self::FormalSum(a), Self::FormalSum(b)) => Self::FormalSum(a.sum(b)?),
            (Self::Residue(a), Self::Residue(b)) => Self::Residue(a.sum(b)?),
            _ => return Err(self.mismatch(rhs)),
        })
    }

    /// Difference of two scalars of the same ring.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DomainMismatch`] if the rings differ.
    pub fn difference(&self, rhs: &Self) -> Result<Self> {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => Ok(Self::Integer(a.wrapping_sub(*b))),
            (Self::Modular(a), Self::Modular(b)) if a.modulus() == b.modulus() => {
                Ok(Self::Modular(a.sub(b)))
            }
            _ => self.sum(&rhs.negated()),
        }
    }

    /// Product of two scalars of the same ring.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DomainMismatch`] if the rings differ.
    pub fn product(&self, rhs: &Self) -> Result<Self> {
        Ok(match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => Self::Integer(a.wrapping_mul(*b)),
            (Self::Modular(a), Self::Modular(b)) if a.modulus() == b.modulus() => {
                Self::Modular(a.mul(b))
            }
            (Self::Rational(a), Self::Rational(b)) => Self::Rational(a * b),
            (Self::Real(a), Self::Real(b)) => Self::Real(a * b),
            (Self::Complex(a), Self::Complex(b)) => Self::Complex(*a * *b),
            (Self::FormalSum(a), Self::FormalSum(b)) => Self::FormalSum(a.product(b)?),
            (Self::Residue(a), Self::Residue(b)) => Self::Residue(a.product(b)?),
            _ => return Err(self.mismatch(rhs)),
        })
    }

    /// Additive inverse.
    #[must_use]
    pub fn negated(&self) -> Self {
        match self {
            Self::Integer(n) => Self::Integer(n.wrapping_neg()),
            Self::Modular(m) => Self::Modular(m.neg()),
            Self::Rational(q) => Self::Rational(-q),
            Self::Real(x) => Self::Real(-x),
            Self::Complex(z) => Self::Complex(-*z),
            Self::FormalSum(s) => Self::FormalSum(s.negated()),
            Self::Residue(r) => Self::Residue(r.negated()),
        }
    }

    /// Multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::NoInverse`] if this scalar is not a unit.
    pub fn inverse(&self) -> Result<Self> {
        self.try_inverse().ok_or_else(|| AlgebraError::NoInverse {
            dividend: self.ring().one().into(),
            divisor: self.clone().into(),
        })
    }

    /// Divides `self` by `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DomainMismatch`] if the rings differ and
    /// [`AlgebraError::NoInverse`] if `rhs` is not a unit.
    pub fn quotient(&self, rhs: &Self) -> Result<Self> {
        if self.ring() != rhs.ring() {
            return Err(self.mismatch(rhs));
        }
        let inv = rhs.try_inverse().ok_or_else(|| AlgebraError::NoInverse {
            dividend: self.clone().into(),
            divisor: rhs.clone().into(),
        })?;
        self.product(&inv)
    }

    /// In-place sum. Invalidates any hash-based lookup keyed on `self`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DomainMismatch`] if the rings differ; `self`
    /// is left unchanged.
    pub fn add_assign(&mut self, rhs: &Self) -> Result<()> {
        *self = self.sum(rhs)?;
        Ok(())
    }

    /// In-place difference. Invalidates any hash-based lookup keyed on `self`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DomainMismatch`] if the rings differ; `self`
    /// is left unchanged.
    pub fn sub_assign(&mut self, rhs: &Self) -> Result<()> {
        *self = self.difference(rhs)?;
        Ok(())
    }

    /// In-place product. Invalidates any hash-based lookup keyed on `self`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DomainMismatch`] if the rings differ; `self`
    /// is left unchanged.
    pub fn mul_assign(&mut self, rhs: &Self) -> Result<()> {
        *self = self.product(rhs)?;
        Ok(())
    }

    /// In-place negation. Invalidates any hash-based lookup keyed on `self`.
    pub fn negate(&mut self) {
        *self = self.negated();
    }

    fn try_inverse(&self) -> Option<Self> {
        match self {
            Self::Integer(n) if *n == 1 || *n == -1 => Some(Self::Integer(*n)),
            Self::Integer(_) => None,
            Self::Modular(m) => m.inverse().map(Self::Modular),
            Self::Rational(q) => q.recip().map(Self::Rational),
            Self::Real(x) if *x != 0.0 => Some(Self::Real(1.0 / x)),
            Self::Real(_) => None,
            Self::Complex(z) => z.recip().map(Self::Complex),
            Self::FormalSum(s) => s.inverse().map(Self::FormalSum),
            Self::Residue(r) => r.inverse().map(Self::Residue),
        }
    }

    fn mismatch(&self, rhs: &Self) -> AlgebraError {
        AlgebraError::mismatch(self.ring(), rhs.ring())
    }

    const fn kind_index(&self) -> u8 {
        match self {
            Self::Integer(_) => 0,
            Self::Modular(_) => 1,
            Self::Rational(_) => 2,
            Self::Real(_) => 3,
            Self::Complex(_) => 4,
            Self::FormalSum(_) => 5,
            Self::Residue(_) => 6,
        }
    }

    /// Text form that can stand as a coefficient in front of `*`: signs
    /// inside the text force parentheses.
    pub(crate) fn coefficient_text(&self) -> String {
        let text = self.to_string();
        if text.chars().skip(1).any(|c| c == '+' || c == '-') {
            format!("({text})")
        } else {
            text
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scalar {}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind_index().hash(state);
        match self {
            Self::Integer(n) => n.hash(state),
            Self::Modular(m) => m.hash(state),
            Self::Rational(q) => q.hash(state),
            Self::Real(x) => hash_real(*x, state),
            Self::Complex(z) => z.hash(state),
            Self::FormalSum(s) => s.hash(state),
            Self::Residue(r) => r.hash(state),
        }
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scalar {
    /// Orders by ring first, then by value within the ring.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Modular(a), Self::Modular(b)) => a
                .modulus()
                .cmp(&b.modulus())
                .then_with(|| a.value().cmp(&b.value())),
            (Self::Rational(a), Self::Rational(b)) => a.cmp(b),
            (Self::Real(a), Self::Real(b)) => cmp_real(*a, *b),
            (Self::Complex(a), Self::Complex(b)) => a.cmp(b),
            (Self::FormalSum(a), Self::FormalSum(b)) => a.cmp(b),
            (Self::Residue(a), Self::Residue(b)) => a.cmp(b),
            _ => self.ring().cmp(&other.ring()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Modular(m) => write!(f, "{m}"),
            Self::Rational(q) => write!(f, "{q}"),
            Self::Real(x) => write!(f, "{}", canonical(*x)),
            Self::Complex(z) => write!(f, "{z}"),
            Self::FormalSum(s) => write!(f, "{s}"),
            Self::Residue(r) => write!(f, "{r}"),
        }
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Self::Real(x)
    }
}

impl From<Modular> for Scalar {
    fn from(m: Modular) -> Self {
        Self::Modular(m)
    }
}

impl From<Rational> for Scalar {
    fn from(q: Rational) -> Self {
        Self::Rational(q)
    }
}

impl From<Complex> for Scalar {
    fn from(z: Complex) -> Self {
        Self::Complex(z)
    }
}

impl From<FormalSum> for Scalar {
    fn from(s: FormalSum) -> Self {
        Self::FormalSum(s)
    }
}

impl From<Residue> for Scalar {
    fn from(r: Residue) -> Self {
        Self::Residue(r)
    }
}
