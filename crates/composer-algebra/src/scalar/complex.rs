//! Complex numbers over `f64`.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Mul, Neg, Sub};
use num_complex::Complex64;
use num_traits::{One, Zero};

/// Canonical form of a real used for equality, hashing and ordering:
/// `-0.0` collapses to `0.0`.
#[inline]
pub(crate) fn canonical(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x
    }
}

/// Total order on reals consistent with [`canonical`] equality.
#[inline]
pub(crate) fn cmp_real(a: f64, b: f64) -> Ordering {
    canonical(a).total_cmp(&canonical(b))
}

#[inline]
pub(crate) fn hash_real<H: Hasher>(x: f64, state: &mut H) {
    canonical(x).to_bits().hash(state);
}

/// A complex number `re + im·i`.
///
/// Wraps [`Complex64`] with structural equality and ordering
/// (lexicographic on `(re, im)` with a total order on `f64`), so complex
/// numbers can key ordered and hashed collections.
///
/// ```
/// use composer_algebra::Complex;
///
/// let z = Complex::new(1.0, -2.0);
/// assert_eq!(z.to_string(), "1-2i");
/// assert_eq!(z * z.conj(), Complex::new(5.0, 0.0));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Complex(Complex64);

impl Complex {
    /// The imaginary unit.
    pub const I: Self = Self(Complex64::new(0.0, 1.0));

    /// Creates `re + im·i`.
    #[inline]
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self(Complex64::new(re, im))
    }

    /// Real part.
    #[inline]
    #[must_use]
    pub const fn re(&self) -> f64 {
        self.0.re
    }

    /// Imaginary part.
    #[inline]
    #[must_use]
    pub const fn im(&self) -> f64 {
        self.0.im
    }

    /// Complex conjugate.
    #[inline]
    #[must_use]
    pub fn conj(&self) -> Self {
        Self(self.0.conj())
    }

    /// Squared modulus `re² + im²`.
    #[inline]
    #[must_use]
    pub fn norm_sqr(&self) -> f64 {
        self.0.norm_sqr()
    }

    /// Multiplicative inverse. Returns `None` for zero.
    #[must_use]
    pub fn recip(&self) -> Option<Self> {
        if self.0.is_zero() {
            return None;
        }
        Some(Self(self.0.inv()))
    }
}

impl From<Complex64> for Complex {
    fn from(z: Complex64) -> Self {
        Self(z)
    }
}

impl From<Complex> for Complex64 {
    fn from(z: Complex) -> Self {
        z.0
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Self(Complex64::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Complex {
    fn one() -> Self {
        Self(Complex64::one())
    }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Complex {}

impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_real(self.re(), state);
        hash_real(self.im(), state);
    }
}

impl PartialOrd for Complex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Complex {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_real(self.re(), other.re()).then_with(|| cmp_real(self.im(), other.im()))
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (re, im) = (canonical(self.re()), canonical(self.im()));
        if im < 0.0 {
            write!(f, "{re}-{}i", -im)
        } else {
            write!(f, "{re}+{im}i")
        }
    }
}
