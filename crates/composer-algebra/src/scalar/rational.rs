//! Exact fractions over arbitrary-precision integers.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// Largest denominator produced when approximating a real number.
pub const MAX_APPROXIMATION_DENOMINATOR: i128 = 1_000_000_000;

/// A reduced fraction with a positive denominator.
///
/// Backed by [`BigRational`], so sums and products never overflow.
///
/// # Example
///
/// ```
/// use composer_algebra::Rational;
///
/// let r = Rational::new(6, -4).unwrap();
/// assert_eq!(r.to_string(), "-3/2");
/// assert_eq!(r.round().to_string(), "-1");
///
/// let tiny = Rational::new(1, 1 << 32).unwrap();
/// assert_eq!((&tiny * &tiny).to_string(), "1/18446744073709551616");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Rational(BigRational);

impl Rational {
    /// Creates a reduced fraction. Returns `None` for a zero denominator.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Option<Self> {
        Self::from_parts(BigInt::from(num), BigInt::from(den))
    }

    /// Creates a reduced fraction from big integers. Returns `None` for a
    /// zero denominator.
    #[must_use]
    pub fn from_parts(num: BigInt, den: BigInt) -> Option<Self> {
        if den.is_zero() {
            return None;
        }
        Some(Self(BigRational::new(num, den)))
    }

    /// The fraction `n/1`.
    #[inline]
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(BigRational::from_integer(BigInt::from(n)))
    }

    /// Numerator (carries the sign).
    #[inline]
    #[must_use]
    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    /// Denominator (always positive).
    #[inline]
    #[must_use]
    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    /// The underlying ratio.
    #[inline]
    #[must_use]
    pub fn as_ratio(&self) -> &BigRational {
        &self.0
    }

    /// Nearest `f64`, or `None` when the value is beyond the `f64` range.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        self.0.to_f64().filter(|x| x.is_finite())
    }

    /// Rounds to the nearest integer, halves rounding up.
    #[must_use]
    pub fn round(&self) -> BigInt {
        let half = BigRational::new(BigInt::one(), BigInt::from(2));
        (&self.0 + half).floor().to_integer()
    }

    /// Multiplicative inverse. Returns `None` for zero.
    #[must_use]
    pub fn recip(&self) -> Option<Self> {
        if self.0.is_zero() {
            return None;
        }
        Some(Self(self.0.recip()))
    }

    /// Rational approximation of a finite real number.
    ///
    /// Values below `2^63` in magnitude go through a continued-fraction
    /// expansion whose denominator is bounded by
    /// [`MAX_APPROXIMATION_DENOMINATOR`]; larger values are integral in
    /// `f64` and convert exactly.
    ///
    /// ```
    /// use composer_algebra::Rational;
    ///
    /// assert_eq!(Rational::approximate(0.75), Rational::new(3, 4));
    /// assert_eq!(Rational::approximate(f64::NAN), None);
    /// ```
    #[must_use]
    pub fn approximate(x: f64) -> Option<Self> {
        if !x.is_finite() {
            return None;
        }
        if x.abs() >= i64::MAX as f64 {
            return BigRational::from_float(x).map(Self);
        }
        // Convergents h/k, seeded with h₋₂/k₋₂ = 0/1 and h₋₁/k₋₁ = 1/0.
        let (mut h0, mut h1) = (0i128, 1i128);
        let (mut k0, mut k1) = (1i128, 0i128);
        let mut y = x;
        for _ in 0..64 {
            let a = y.floor();
            let ai = a as i128;
            let h2 = ai * h1 + h0;
            let k2 = ai * k1 + k0;
            if k2 > MAX_APPROXIMATION_DENOMINATOR || h2.abs() > i64::MAX as i128 {
                break;
            }
            (h0, h1, k0, k1) = (h1, h2, k1, k2);
            let frac = y - a;
            if frac.abs() < 1e-12 || (h1 as f64 / k1 as f64 - x).abs() <= f64::EPSILON * x.abs()
            {
                break;
            }
            y = 1.0 / frac;
        }
        Self::from_parts(BigInt::from(h1), BigInt::from(k1))
    }

    /// Returns true for values below zero.
    #[inline]
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }
}

impl From<BigRational> for Rational {
    fn from(q: BigRational) -> Self {
        Self(q)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Rational {
        Rational(&self.0 + &rhs.0)
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Rational {
        Rational(&self.0 - &rhs.0)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Rational {
        Rational(&self.0 * &rhs.0)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational(-&self.0)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(BigRational::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(BigRational::one())
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0.numer(), self.0.denom())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cmp::Ordering;

    fn q(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn test_reduction_and_sign() {
        assert_eq!(q(2, 4), q(1, 2));
        assert_eq!(q(3, -9), q(-1, 3));
        assert_eq!(*q(0, -5).denom(), BigInt::one());
        assert!(Rational::new(1, 0).is_none());
    }

    #[test]
    fn test_extreme_denominator_keeps_sign() {
        let r = q(1, i64::MIN);
        assert!(r.is_negative());
        assert!(r.denom().is_positive());
        assert_eq!(r.to_string(), "-1/9223372036854775808");
        assert!(r < Rational::zero());

        let min = Rational::from_integer(i64::MIN);
        assert!((-&min).numer().is_positive());
        assert!((&min + &-&min).is_zero());
    }

    #[test]
    fn test_products_beyond_i64_stay_exact() {
        let tiny = q(1, 1 << 32);
        let square = &tiny * &tiny;
        assert!(!square.denom().is_zero());
        assert_eq!(*square.denom(), BigInt::one() << 64);
        assert_eq!(square.round(), BigInt::zero());

        let huge = Rational::from_integer(i64::MAX) * Rational::from_integer(i64::MAX);
        assert_eq!(huge.round().to_i64(), None);
        assert!(huge.to_f64().is_some());
    }

    #[test]
    fn test_field_operations() {
        assert_eq!(q(1, 2) + q(1, 3), q(5, 6));
        assert_eq!(q(1, 2) - q(1, 3), q(1, 6));
        assert_eq!(q(2, 3) * q(3, 4), q(1, 2));
        assert_eq!(q(-2, 3).recip(), Some(q(-3, 2)));
        assert_eq!(Rational::zero().recip(), None);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(q(5, 2).round(), BigInt::from(3));
        assert_eq!(q(-5, 2).round(), BigInt::from(-2));
        assert_eq!(q(7, 3).round(), BigInt::from(2));
        assert_eq!(q(-7, 3).round(), BigInt::from(-2));
    }

    #[test]
    fn test_ordering() {
        assert!(q(1, 3) < q(1, 2));
        assert!(q(-1, 2) < q(-1, 3));
        assert_eq!(q(2, 4).cmp(&q(1, 2)), Ordering::Equal);
    }

    #[test]
    fn test_approximate() {
        assert_eq!(Rational::approximate(2.0), Some(q(2, 1)));
        assert_eq!(Rational::approximate(-0.125), Some(q(-1, 8)));
        assert_eq!(Rational::approximate(1.0 / 3.0), Some(q(1, 3)));
        assert_eq!(Rational::approximate(f64::INFINITY), None);

        let big = Rational::approximate(1e30).unwrap();
        assert_eq!(*big.denom(), BigInt::one());
        assert_eq!(big.to_f64(), Some(1e30));
    }

    #[test]
    fn test_display_always_shows_denominator() {
        assert_eq!(Rational::from_integer(3).to_string(), "3/1");
        assert_eq!(Rational::zero().to_string(), "0/1");
    }
}
