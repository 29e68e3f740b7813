//! The coercion engine.
//!
//! [`cast`] reinterprets an element of one module in another. It never
//! fails loudly: when no embedding exists the result is `None`, and no
//! partial result is ever produced.
//!
//! # Scalar table
//!
//! | From \ To | `Z` | `Z_n` | `Q` | `R` | `C` |
//! |-----------|-----|-------|-----|-----|-----|
//! | `Z` | = | reduce | `n/1` | exact | `n+0i` |
//! | `Z_n` | representative | reduce | `v/1` | `v` | `v+0i` |
//! | `Q` | round | round, reduce | = | nearest | `q+0i` |
//! | `R` | round | round, reduce | continued fraction | = | `x+0i` |
//! | `C` | round real part | round, reduce | real part | real part | = |
//!
//! Rounding is half-up. Formal sums cast into a number ring never succeed;
//! a number casts into a formal-sum ring as a multiple of the empty word. A
//! residue casts into a number ring only when it is constant.
//!
//! # Structural rule
//!
//! An element with `L` coordinates casts into a module of dimension `L`,
//! one coordinate at a time. A formal-sum target of smaller dimension
//! keeps the first coordinates and drops the rest; any other dimension
//! change fails. Direct sums cast block by block into a direct sum with
//! the same number of blocks and are flattened for any other target.
//!
//! ```
//! use composer_algebra::prelude::*;
//!
//! let r2 = Ring::reals().free_module(2).unwrap();
//! let z2 = Ring::integers().free_module(2).unwrap();
//! let v = r2.parse("(2.5,-0.5)").unwrap();
//! assert_eq!(z2.cast(&v).unwrap().to_string(), "(3,0)");
//! assert!(Ring::integers().free_module(3).unwrap().cast(&v).is_none());
//! ```

use crate::element::{Blocks, Element};
use crate::module::Module;
use crate::ring::{QuotientSpec, Ring, RingKind};
use crate::scalar::{Complex, FormalSum, Modular, Rational, Residue, Scalar};
use num_bigint::BigInt;
use num_traits::ToPrimitive;

/// Casts `element` into `target`.
///
/// Returns the element unchanged when it already belongs to `target`.
#[must_use]
pub fn cast(element: &Element, target: &Module) -> Option<Element> {
    if element.module() == *target {
        return Some(element.clone());
    }
    let result = match (element, target) {
        (Element::DirectSum(blocks), Module::DirectSum(sum))
            if blocks.parts().len() == sum.blocks().len() =>
        {
            blocks
                .parts()
                .iter()
                .zip(sum.blocks())
                .map(|(part, block)| cast(part, block))
                .collect::<Option<Vec<_>>>()
                .map(|parts| Element::DirectSum(Blocks::from_parts(sum.ring().clone(), parts)))
        }
        _ => cast_coordinates(element.flatten(), target),
    };
    if result.is_none() {
        tracing::debug!(source = %element.module(), target = %target, "cast failed");
    }
    result
}

fn cast_coordinates(mut coordinates: Vec<Scalar>, target: &Module) -> Option<Element> {
    let ring = target.ring();
    let dimension = target.dimension();
    if coordinates.len() > dimension && ring.is_formal_sum() {
        tracing::trace!(target = %target, from = coordinates.len(), to = dimension, "truncating formal-sum coordinates");
        coordinates.truncate(dimension);
    }
    if coordinates.len() != dimension {
        return None;
    }
    let cast: Vec<Scalar> = coordinates
        .iter()
        .map(|c| cast_scalar(c, &ring))
        .collect::<Option<_>>()?;
    target.assemble(cast)
}

/// Casts a scalar into `target`.
pub(crate) fn cast_scalar(scalar: &Scalar, target: &Ring) -> Option<Scalar> {
    if scalar.ring() == *target {
        return Some(scalar.clone());
    }
    match target.kind() {
        RingKind::Integers => to_integer(scalar).map(Scalar::Integer),
        RingKind::Modular(n) => to_modular(scalar, *n).map(Scalar::Modular),
        RingKind::Rationals => to_rational(scalar).map(Scalar::Rational),
        RingKind::Reals => to_real(scalar).map(Scalar::Real),
        RingKind::Complexes => to_complex(scalar).map(Scalar::Complex),
        RingKind::FormalSums(factor) => to_formal_sum(scalar, target, factor).map(Scalar::FormalSum),
        RingKind::Quotient(spec) => to_residue(scalar, target, spec).map(Scalar::Residue),
    }
}

/// Rounds half-up; `None` for non-finite or out-of-range values.
fn round_real(x: f64) -> Option<i64> {
    let r = (x + 0.5).floor();
    (r.is_finite() && r >= i64::MIN as f64 && r < i64::MAX as f64).then_some(r as i64)
}

/// The constant coefficient of a residue of degree at most 0.
fn constant_term(r: &Residue) -> Option<Scalar> {
    match r.coefficients() {
        [] => r.ring().quotient_spec().map(|spec| spec.coefficients().zero()),
        [c] => Some(c.clone()),
        _ => None,
    }
}

fn to_integer(s: &Scalar) -> Option<i64> {
    match s {
        Scalar::Integer(n) => Some(*n),
        Scalar::Modular(m) => Some(m.value()),
        Scalar::Rational(q) => q.round().to_i64(),
        Scalar::Real(x) => round_real(*x),
        Scalar::Complex(z) => round_real(z.re()),
        Scalar::FormalSum(_) => None,
        Scalar::Residue(r) => to_integer(&constant_term(r)?),
    }
}

fn to_modular(s: &Scalar, modulus: i64) -> Option<Modular> {
    match s {
        Scalar::Rational(q) => {
            let n = BigInt::from(modulus);
            let residue = ((q.round() % &n) + &n) % &n;
            residue.to_i64().map(|v| Modular::reduce(i128::from(v), modulus))
        }
        Scalar::Residue(r) => to_modular(&constant_term(r)?, modulus),
        other => to_integer(other).map(|v| Modular::reduce(i128::from(v), modulus)),
    }
}

fn to_rational(s: &Scalar) -> Option<Rational> {
    match s {
        Scalar::Integer(n) => Some(Rational::from_integer(*n)),
        Scalar::Modular(m) => Some(Rational::from_integer(m.value())),
        Scalar::Rational(q) => Some(q.clone()),
        Scalar::Real(x) => Rational::approximate(*x),
        Scalar::Complex(z) => Rational::approximate(z.re()),
        Scalar::FormalSum(_) => None,
        Scalar::Residue(r) => to_rational(&constant_term(r)?),
    }
}

fn to_real(s: &Scalar) -> Option<f64> {
    match s {
        Scalar::Integer(n) => Some(*n as f64),
        Scalar::Modular(m) => Some(m.value() as f64),
        Scalar::Rational(q) => q.to_f64(),
        Scalar::Real(x) => Some(*x),
        Scalar::Complex(z) => Some(z.re()),
        Scalar::FormalSum(_) => None,
        Scalar::Residue(r) => to_real(&constant_term(r)?),
    }
}

fn to_complex(s: &Scalar) -> Option<Complex> {
    match s {
        Scalar::Complex(z) => Some(*z),
        Scalar::Residue(r) => to_complex(&constant_term(r)?),
        other => to_real(other).map(|re| Complex::new(re, 0.0)),
    }
}

fn to_formal_sum(s: &Scalar, target: &Ring, factor: &Ring) -> Option<FormalSum> {
    match s {
        Scalar::FormalSum(sum) => sum.map_coefficients(target, |c| cast_scalar(c, factor)),
        other => {
            let c = cast_scalar(other, factor)?;
            Some(FormalSum::monomial(target.clone(), String::new(), c))
        }
    }
}

fn to_residue(s: &Scalar, target: &Ring, spec: &QuotientSpec) -> Option<Residue> {
    let base = spec.coefficients();
    let coefficients: Vec<Scalar> = match s {
        Scalar::FormalSum(_) => return None,
        Scalar::Residue(r) => {
            let source = r.ring().quotient_spec()?;
            if source.indeterminate() != spec.indeterminate() {
                return None;
            }
            r.coefficients()
                .iter()
                .map(|c| cast_scalar(c, base))
                .collect::<Option<_>>()?
        }
        other => vec![cast_scalar(other, base)?],
    };
    Residue::reduced(target.clone(), coefficients).ok()
}
