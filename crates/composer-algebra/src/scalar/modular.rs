//! Residues modulo an integer `n > 1`.

use core::fmt;

/// A residue class `value mod modulus` with `0 ≤ value < modulus`.
///
/// ```
/// use composer_algebra::Modular;
///
/// let a = Modular::new(-3, 7).unwrap();
/// assert_eq!(a.value(), 4);
/// assert_eq!(a.inverse(), Modular::new(2, 7)); // 4 · 2 ≡ 1 (mod 7)
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Modular {
    value: i64,
    modulus: i64,
}

impl Modular {
    /// Reduces `value` modulo `modulus`. Returns `None` if `modulus ≤ 1`.
    #[must_use]
    pub fn new(value: i64, modulus: i64) -> Option<Self> {
        if modulus <= 1 {
            return None;
        }
        Some(Self::reduce(value as i128, modulus))
    }

    /// `value mod modulus`; the caller guarantees `modulus > 1`.
    #[inline]
    pub(crate) fn reduce(value: i128, modulus: i64) -> Self {
        Self {
            value: value.rem_euclid(modulus as i128) as i64,
            modulus,
        }
    }

    /// Representative in `[0, modulus)`.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// The modulus.
    #[inline]
    #[must_use]
    pub const fn modulus(&self) -> i64 {
        self.modulus
    }

    /// Multiplicative inverse, if `value` is coprime to the modulus.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        inverse_mod(self.value, self.modulus).map(|v| Self {
            value: v,
            modulus: self.modulus,
        })
    }

    pub(crate) fn add(&self, rhs: &Self) -> Self {
        Self::reduce(self.value as i128 + rhs.value as i128, self.modulus)
    }

    pub(crate) fn sub(&self, rhs: &Self) -> Self {
        Self::reduce(self.value as i128 - rhs.value as i128, self.modulus)
    }

    pub(crate) fn mul(&self, rhs: &Self) -> Self {
        Self::reduce(self.value as i128 * rhs.value as i128, self.modulus)
    }

    pub(crate) fn neg(&self) -> Self {
        Self::reduce(-(self.value as i128), self.modulus)
    }
}

/// Inverse of `a` modulo `m` by the extended Euclidean algorithm.
pub(crate) fn inverse_mod(a: i64, m: i64) -> Option<i64> {
    let (mut r0, mut r1) = (m as i128, (a as i128).rem_euclid(m as i128));
    let (mut t0, mut t1) = (0i128, 1i128);
    while r1 != 0 {
        let q = r0 / r1;
        (r0, r1) = (r1, r0 - q * r1);
        (t0, t1) = (t1, t0 - q * t1);
    }
    if r0 != 1 {
        return None;
    }
    Some(t0.rem_euclid(m as i128) as i64)
}

/// Witnesses that make Miller-Rabin exact for every `n < 3.3·10^24`.
const WITNESSES: [i64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Deterministic Miller-Rabin primality test over the whole `i64` range.
pub(crate) fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    for p in WITNESSES {
        if n % p == 0 {
            return n == p;
        }
    }
    // n - 1 = d · 2^s with d odd.
    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;
    'witness: for a in WITNESSES {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

#[inline]
fn mul_mod(a: i64, b: i64, m: i64) -> i64 {
    (a as i128 * b as i128).rem_euclid(m as i128) as i64
}

fn pow_mod(base: i64, mut exp: i64, m: i64) -> i64 {
    let mut result = 1;
    let mut base = base.rem_euclid(m);
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

impl fmt::Display for Modular {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
