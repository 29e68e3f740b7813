//! The strict total order on rings.
//!
//! Number rings rank by a fixed table:
//!
//! | Ring | Rank |
//! |------|------|
//! | `Z` | 100 |
//! | `Q` | 200 |
//! | `R` | 300 |
//! | `C` | 400 |
//!
//! Modular rings carry no rank. A modular ring always sorts before a ranked
//! number ring, and a ranked number ring always sorts after a modular ring;
//! modular rings compare among themselves by modulus. The rule is kept as
//! written because sorted collections of mixed rings depend on it.
//!
//! Every other family sorts after the number rings. Two rings of different
//! such families compare by family name; rings of one family compare
//! structurally.

use super::{QuotientSpec, Ring, RingKind};
use core::cmp::Ordering;

/// Rank of `Z`.
pub const INTEGER_RANK: u32 = 100;
/// Rank of `Q`.
pub const RATIONAL_RANK: u32 = 200;
/// Rank of `R`.
pub const REAL_RANK: u32 = 300;
/// Rank of `C`.
pub const COMPLEX_RANK: u32 = 400;

/// Rank of a ranked number ring.
pub(crate) const fn number_rank(kind: &RingKind) -> Option<u32> {
    match kind {
        RingKind::Integers => Some(INTEGER_RANK),
        RingKind::Rationals => Some(RATIONAL_RANK),
        RingKind::Reals => Some(REAL_RANK),
        RingKind::Complexes => Some(COMPLEX_RANK),
        _ => None,
    }
}

pub(crate) fn compare_rings(a: &Ring, b: &Ring) -> Ordering {
    if Ring::ptr_eq(a, b) {
        return Ordering::Equal;
    }
    compare_kinds(a.kind(), b.kind())
}

fn compare_kinds(a: &RingKind, b: &RingKind) -> Ordering {
    match (a, b) {
        (RingKind::Modular(m), RingKind::Modular(n)) => m.cmp(n),
        (RingKind::Modular(_), other) if number_rank(other).is_some() => Ordering::Less,
        (other, RingKind::Modular(_)) if number_rank(other).is_some() => Ordering::Greater,
        (RingKind::FormalSums(f), RingKind::FormalSums(g)) => compare_rings(f, g),
        (RingKind::Quotient(p), RingKind::Quotient(q)) => compare_quotients(p, q),
        _ => match (number_rank(a), number_rank(b)) {
            (Some(ra), Some(rb)) => ra.cmp(&rb),
            _ => match (a.is_number(), b.is_number()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => a.family_name().cmp(b.family_name()),
            },
        },
    }
}

fn compare_quotients(p: &QuotientSpec, q: &QuotientSpec) -> Ordering {
    compare_rings(p.coefficients(), q.coefficients())
        .then_with(|| p.modulus().len().cmp(&q.modulus().len()))
        .then_with(|| p.modulus().iter().rev().cmp(q.modulus().iter().rev()))
        .then_with(|| p.indeterminate().cmp(q.indeterminate()))
}
