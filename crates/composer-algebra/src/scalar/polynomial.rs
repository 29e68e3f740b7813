//! Dense polynomial helpers over a coefficient ring.
//!
//! Coefficients are stored in ascending degree order and kept trimmed (no
//! trailing zeros), so the zero polynomial is the empty vector. Only the
//! operations quotient rings need are provided.

use super::{Modular, Rational, Scalar};
use crate::error::Result;
use crate::ring::{Ring, RingKind};
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// Largest coefficient field size searched exhaustively for roots.
const ROOT_SEARCH_LIMIT: i64 = 1 << 20;

/// Largest constant/leading term whose divisors are enumerated by the
/// rational root test.
const RATIONAL_ROOT_LIMIT: i128 = 1 << 20;

pub(crate) fn trim(p: &mut Vec<Scalar>) {
    while p.last().is_some_and(Scalar::is_zero) {
        p.pop();
    }
}

#[inline]
pub(crate) fn degree(p: &[Scalar]) -> Option<usize> {
    p.len().checked_sub(1)
}

pub(crate) fn add(a: &[Scalar], b: &[Scalar]) -> Result<Vec<Scalar>> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = long.to_vec();
    for (slot, c) in out.iter_mut().zip(short) {
        slot.add_assign(c)?;
    }
    trim(&mut out);
    Ok(out)
}

pub(crate) fn neg(a: &[Scalar]) -> Vec<Scalar> {
    a.iter().map(Scalar::negated).collect()
}

pub(crate) fn sub(a: &[Scalar], b: &[Scalar]) -> Result<Vec<Scalar>> {
    add(a, &neg(b))
}

pub(crate) fn mul(a: &[Scalar], b: &[Scalar], ring: &Ring) -> Result<Vec<Scalar>> {
    if a.is_empty() || b.is_empty() {
        return Ok(Vec::new());
    }
    let mut out = vec![ring.zero(); a.len() + b.len() - 1];
    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            out[i + j].add_assign(&x.product(y)?)?;
        }
    }
    trim(&mut out);
    Ok(out)
}

/// Euclidean division `a = q·m + r`. Returns `None` if the leading
/// coefficient of `m` is not a unit or `m` is zero.
pub(crate) fn div_rem(
    a: &[Scalar],
    m: &[Scalar],
    ring: &Ring,
) -> Result<Option<(Vec<Scalar>, Vec<Scalar>)>> {
    let Some(dm) = degree(m) else {
        return Ok(None);
    };
    let Ok(lead_inv) = m[dm].inverse() else {
        return Ok(None);
    };
    let mut r = a.to_vec();
    trim(&mut r);
    let mut q = vec![ring.zero(); r.len().saturating_sub(dm).max(1)];
    while let Some(dr) = degree(&r) {
        if dr < dm {
            break;
        }
        let factor = r[dr].product(&lead_inv)?;
        let shift = dr - dm;
        q[shift] = factor.clone();
        for (i, c) in m.iter().enumerate() {
            r[i + shift].sub_assign(&factor.product(c)?)?;
        }
        // The leading term cancels exactly; drop it even under float rounding.
        r.truncate(dr);
        trim(&mut r);
    }
    trim(&mut q);
    Ok(Some((q, r)))
}

/// Remainder of `a` modulo a polynomial with a unit leading coefficient.
pub(crate) fn rem(a: &[Scalar], m: &[Scalar], ring: &Ring) -> Result<Vec<Scalar>> {
    match div_rem(a, m, ring)? {
        Some((_, r)) => Ok(r),
        None => {
            let mut r = a.to_vec();
            trim(&mut r);
            Ok(r)
        }
    }
}

/// Inverse of `a` modulo `m` by the extended Euclidean algorithm.
pub(crate) fn inverse_mod(a: &[Scalar], m: &[Scalar], ring: &Ring) -> Result<Option<Vec<Scalar>>> {
    let mut r0 = m.to_vec();
    let mut r1 = rem(a, m, ring)?;
    let mut s0: Vec<Scalar> = Vec::new();
    let mut s1 = vec![ring.one()];
    while !r1.is_empty() {
        let Some((q, r)) = div_rem(&r0, &r1, ring)? else {
            return Ok(None);
        };
        let s = sub(&s0, &mul(&q, &s1, ring)?)?;
        (r0, r1) = (r1, r);
        (s0, s1) = (s1, s);
    }
    if degree(&r0) != Some(0) {
        return Ok(None);
    }
    let Ok(c) = r0[0].inverse() else {
        return Ok(None);
    };
    Ok(Some(rem(&mul(&s0, &[c], ring)?, m, ring)?))
}

pub(crate) fn evaluate(p: &[Scalar], x: &Scalar, ring: &Ring) -> Result<Scalar> {
    let mut acc = ring.zero();
    for c in p.iter().rev() {
        acc = acc.product(x)?.sum(c)?;
    }
    Ok(acc)
}

/// Decides whether `F[X]/(m)` is a field for a trimmed modulus of degree
/// at least 1 over the number ring `ring`.
///
/// Degree 1 over a field is always a field. Degrees 2 and 3 are decided by
/// the absence of a root in `F` where that is computable (`Z_p`, `Q`, and
/// the real discriminant). Higher degrees are reported as non-fields.
pub(crate) fn is_irreducible(m: &[Scalar], ring: &Ring) -> bool {
    if !ring.is_field() {
        return false;
    }
    match degree(m) {
        Some(1) => true,
        Some(2) | Some(3) => match ring.kind() {
            RingKind::Modular(p) => !has_modular_root(m, *p),
            RingKind::Rationals => !has_rational_root(m),
            RingKind::Reals => degree(m) == Some(2) && negative_discriminant(m),
            _ => false,
        },
        _ => false,
    }
}

fn has_modular_root(m: &[Scalar], p: i64) -> bool {
    if p > ROOT_SEARCH_LIMIT {
        return true;
    }
    let ring = Ring::modular_unchecked(p);
    (0..p).any(|x| {
        let x = Scalar::Modular(Modular::reduce(x as i128, p));
        evaluate(m, &x, &ring).map_or(true, |v| v.is_zero())
    })
}

fn has_rational_root(m: &[Scalar]) -> bool {
    let coeffs: Vec<&Rational> = m
        .iter()
        .filter_map(|c| match c {
            Scalar::Rational(q) => Some(q),
            _ => None,
        })
        .collect();
    if coeffs.len() != m.len() {
        return true;
    }
    // Clear denominators to get integer coefficients.
    let lcm = coeffs.iter().fold(BigInt::one(), |acc, q| lcm(&acc, q.denom()));
    let ends = [coeffs[0], coeffs[coeffs.len() - 1]]
        .map(|q| (q.numer() * (&lcm / q.denom())).abs().to_i128());
    let [Some(a0), Some(an)] = ends else {
        return true;
    };
    if a0 == 0 {
        return true;
    }
    if a0 > RATIONAL_ROOT_LIMIT || an > RATIONAL_ROOT_LIMIT {
        return true;
    }
    let numerators: Vec<i128> = divisors(a0).collect();
    let denominators: Vec<i128> = divisors(an).collect();
    let ring = Ring::rationals();
    for p in &numerators {
        for q in &denominators {
            for sign in [1i128, -1] {
                let Some(x) = Rational::from_parts(BigInt::from(sign * p), BigInt::from(*q)) else {
                    continue;
                };
                if evaluate(m, &Scalar::Rational(x), &ring).map_or(true, |v| v.is_zero()) {
                    return true;
                }
            }
        }
    }
    false
}

fn negative_discriminant(m: &[Scalar]) -> bool {
    match m {
        [Scalar::Real(c), Scalar::Real(b), Scalar::Real(a)] => b * b - 4.0 * a * c < 0.0,
        _ => false,
    }
}

fn divisors(n: i128) -> impl Iterator<Item = i128> {
    (1..=n).filter(move |d| n % d == 0)
}

fn lcm(a: &BigInt, b: &BigInt) -> BigInt {
    let (mut x, mut y) = (a.clone(), b.clone());
    while !y.is_zero() {
        let r = &x % &y;
        x = y;
        y = r;
    }
    a / x * b
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64) -> Scalar {
        Scalar::rational(n, 1).unwrap()
    }

    #[test]
    fn test_mul_and_rem() {
        let ring = Ring::rationals();
        // (X + 1)(X - 1) = X² - 1
        let p = mul(&[q(1), q(1)], &[q(-1), q(1)], &ring).unwrap();
        assert_eq!(p, vec![q(-1), q(0), q(1)]);
        // X² - 1 ≡ 0 mod X² + X - 2 ... remainder is -X + 1
        let r = rem(&p, &[q(-2), q(1), q(1)], &ring).unwrap();
        assert_eq!(r, vec![q(1), q(-1)]);
    }

    #[test]
    fn test_inverse_mod() {
        let ring = Ring::rationals();
        let m = [q(1), q(0), q(1)]; // X² + 1
        let x = [q(0), q(1)];
        let inv = inverse_mod(&x, &m, &ring).unwrap().unwrap();
        assert_eq!(inv, vec![q(0), q(-1)]);
        let prod = rem(&mul(&x, &inv, &ring).unwrap(), &m, &ring).unwrap();
        assert_eq!(prod, vec![q(1)]);
    }

    #[test]
    fn test_non_unit_has_no_inverse() {
        let ring = Ring::rationals();
        let m = [q(-1), q(0), q(1)]; // X² - 1 = (X - 1)(X + 1)
        assert_eq!(inverse_mod(&[q(1), q(1)], &m, &ring).unwrap(), None);
    }

    #[test]
    fn test_irreducibility() {
        let qr = Ring::rationals();
        assert!(is_irreducible(&[q(1), q(0), q(1)], &qr));
        assert!(is_irreducible(&[q(-2), q(0), q(1)], &qr));
        assert!(!is_irreducible(&[q(-4), q(0), q(1)], &qr));
        // X² - 1/4 clears to 4X² - 1 with root 1/2.
        let quarter = Scalar::rational(-1, 4).unwrap();
        assert!(!is_irreducible(&[quarter, q(0), q(1)], &qr));

        let r = Ring::reals();
        let re = |x: f64| Scalar::real(x);
        assert!(is_irreducible(&[re(1.0), re(0.0), re(1.0)], &r));
        assert!(!is_irreducible(&[re(-1.0), re(0.0), re(1.0)], &r));

        let z5 = Ring::modular(5).unwrap();
        let m = |v: i64| Scalar::modular(v, 5).unwrap();
        // X² + 2 has no root mod 5; X² + 1 has roots 2 and 3.
        assert!(is_irreducible(&[m(2), m(0), m(1)], &z5));
        assert!(!is_irreducible(&[m(1), m(0), m(1)], &z5));

        assert!(!is_irreducible(&[Scalar::integer(1), Scalar::integer(1)], &Ring::integers()));
    }
}
