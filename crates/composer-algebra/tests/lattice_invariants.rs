//! Canonicalization and ordering invariants of the structure lattice.
//!
//! Checks the free-module factory rules for every number ring and the strict
//! total order over a sample spanning every ring family and dimensions 0..4.

use composer_algebra::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;

// =============================================================================
// Helpers
// =============================================================================

fn sample_rings() -> Vec<Ring> {
    let one = Scalar::integer(1);
    let zero = Scalar::integer(0);
    let gauss = [one.clone(), zero, one.clone()];
    vec![
        Ring::integers(),
        Ring::rationals(),
        Ring::reals(),
        Ring::complexes(),
        Ring::modular(2).unwrap(),
        Ring::modular(7).unwrap(),
        Ring::integers().formal_sums().unwrap(),
        Ring::modular(7).unwrap().formal_sums().unwrap(),
        Ring::complexes().formal_sums().unwrap(),
        Ring::rationals().quotient(&gauss, "X").unwrap(),
        Ring::reals().quotient(&gauss, "X").unwrap(),
        Ring::integers().quotient(&[one.clone(), one], "T").unwrap(),
    ]
}

fn sample_modules() -> Vec<Module> {
    let mut out = Vec::new();
    for ring in sample_rings() {
        for dim in 0..=4 {
            if let Some(m) = ring.free_module(dim) {
                out.push(m);
            }
        }
    }
    let z = Ring::integers();
    out.push(Module::direct_sum(vec![z.clone().into(), z.free_module(2).unwrap()]).unwrap());
    out.push(Module::direct_sum(vec![z.free_module(2).unwrap(), z.into()]).unwrap());
    out
}

// =============================================================================
// Canonical free modules
// =============================================================================

#[test]
fn null_module_is_a_singleton_for_number_and_modular_rings() {
    let modular = [2, 7, 1_000_000_007].map(|n| Ring::modular(n).unwrap());
    for ring in Ring::number_rings().into_iter().chain(modular) {
        let a = ring.free_module(0).unwrap();
        let b = ring.free_module(0).unwrap();
        assert!(a.is_identical(&b), "{ring}");
        assert!(a.is_null_module());
        assert_eq!(a.dimension(), 0);
    }
}

#[test]
fn dimension_one_is_the_ring_itself() {
    for ring in sample_rings() {
        let m = ring.free_module(1).unwrap();
        assert_eq!(m, Module::from(ring.clone()));
        assert!(m.is_ring());
        assert_eq!(m.ring(), ring);
    }
}

#[test]
fn higher_dimensions_are_value_equal() {
    for ring in Ring::number_rings() {
        for dim in 2..6 {
            let a = ring.free_module(dim).unwrap();
            let b = ring.free_module(dim).unwrap();
            assert_eq!(a, b);
            assert_eq!(a.dimension(), dim);
            let set: HashSet<Module> = [a, b].into_iter().collect();
            assert_eq!(set.len(), 1);
        }
    }
}

#[test]
fn modular_structures_hash_by_modulus() {
    let a = Ring::modular(6).unwrap().free_module(3).unwrap();
    let b = Ring::modular(6).unwrap().free_module(3).unwrap();
    let c = Ring::modular(9).unwrap().free_module(3).unwrap();
    let set: HashSet<Module> = [a, b, c].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn invalid_modulus_is_rejected() {
    for n in [i64::MIN, -1, 0, 1] {
        assert_eq!(Ring::modular(n), Err(AlgebraError::InvalidModulus(n)));
    }
}

#[test]
fn structure_trait_is_uniform() {
    fn check<S: Structure>(s: &S, dim: usize) {
        assert_eq!(s.dimension(), dim);
        assert_eq!(s.is_null_module(), dim == 0);
    }
    let q = Ring::rationals();
    check(&q, 1);
    check(&q.null_module(), 0);
    check(&q.free_module(3).unwrap(), 3);
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn module_order_is_a_strict_total_order() {
    let mods = sample_modules();
    for a in &mods {
        assert_eq!(a.cmp(a), Ordering::Equal);
        for b in &mods {
            let ab = a.cmp(b);
            assert_eq!(ab, b.cmp(a).reverse(), "antisymmetry: {a} vs {b}");
            assert_eq!(ab == Ordering::Equal, a == b, "consistency: {a} vs {b}");
            for c in &mods {
                if ab == Ordering::Less && b.cmp(c) == Ordering::Less {
                    assert_eq!(a.cmp(c), Ordering::Less, "transitivity: {a} < {b} < {c}");
                }
            }
        }
    }
}

#[test]
fn modular_rings_sort_before_every_number_ring() {
    let mut rings = vec![
        Ring::complexes(),
        Ring::modular(11).unwrap(),
        Ring::reals(),
        Ring::integers(),
        Ring::modular(3).unwrap(),
        Ring::rationals(),
    ];
    rings.sort();
    let names: Vec<String> = rings.iter().map(ToString::to_string).collect();
    assert_eq!(names, ["Z_3", "Z_11", "Z", "Q", "R", "C"]);
}

#[test]
fn rank_table_is_fixed() {
    use composer_algebra::ring::{COMPLEX_RANK, INTEGER_RANK, RATIONAL_RANK, REAL_RANK};
    assert_eq!(
        [INTEGER_RANK, RATIONAL_RANK, REAL_RANK, COMPLEX_RANK],
        [100, 200, 300, 400]
    );
}
