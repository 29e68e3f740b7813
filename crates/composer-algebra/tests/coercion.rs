//! Coercion engine and textual syntax.
//!
//! Property tests check idempotence, transitivity along the rank chain and
//! the print/parse round trip; example tests pin the formal-sum truncation
//! rule and the all-or-nothing failure mode.

use composer_algebra::prelude::*;
use proptest::prelude::*;

fn free(ring: Ring, dim: usize) -> Module {
    ring.free_module(dim).unwrap()
}

fn int_vector(values: &[i64]) -> Element {
    let parts: Vec<Element> = values.iter().map(|&n| Scalar::integer(n).into()).collect();
    free(Ring::integers(), values.len()).create_element(&parts).unwrap()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Casting into the element's own module returns it unchanged.
    #[test]
    fn prop_cast_is_idempotent(values in prop::collection::vec(-1000i64..1000, 0..5)) {
        let v = int_vector(&values);
        let m = v.module();
        prop_assert_eq!(m.cast(&v), Some(v.clone()));
    }

    /// Z → C directly equals Z → Q → R → C stepwise.
    #[test]
    fn prop_cast_is_transitive_along_ranks(values in prop::collection::vec(-1_000_000i64..1_000_000, 0..5)) {
        let v = int_vector(&values);
        let n = values.len();
        let direct = free(Ring::complexes(), n).cast(&v).unwrap();
        let stepwise = [Ring::rationals(), Ring::reals(), Ring::complexes()]
            .into_iter()
            .try_fold(v, |e, ring| free(ring, n).cast(&e))
            .unwrap();
        prop_assert_eq!(direct, stepwise);
    }

    /// Integer vectors survive printing and parsing.
    #[test]
    fn prop_parse_round_trip(values in prop::collection::vec(any::<i64>(), 0..6)) {
        let v = int_vector(&values);
        let text = v.to_string();
        prop_assert_eq!(v.module().parse(&text), Some(v));
    }

    /// Rational vectors survive printing and parsing.
    #[test]
    fn prop_rational_round_trip(pairs in prop::collection::vec((-500i64..500, 1i64..500), 2..5)) {
        let scalars: Vec<Element> = pairs
            .iter()
            .map(|&(n, d)| Scalar::rational(n, d).unwrap().into())
            .collect();
        let m = free(Ring::rationals(), pairs.len());
        let v = m.create_element(&scalars).unwrap();
        prop_assert_eq!(m.parse(&v.to_string()), Some(v));
    }

    /// Z_n arithmetic agrees with integer arithmetic reduced afterwards.
    #[test]
    fn prop_modular_reduction_commutes(a in -10_000i64..10_000, b in -10_000i64..10_000, n in 2i64..500) {
        let zn = Module::from(Ring::modular(n).unwrap());
        let z = Module::from(Ring::integers());
        let a_int: Element = Scalar::integer(a).into();
        let b_int: Element = Scalar::integer(b).into();
        let sum_then_cast = zn.cast(&a_int.sum(&b_int).unwrap()).unwrap();
        let cast_then_sum = zn.cast(&a_int).unwrap().sum(&zn.cast(&b_int).unwrap()).unwrap();
        prop_assert_eq!(sum_then_cast, cast_then_sum);
        let prod = zn.cast(&a_int.product(&b_int).unwrap()).unwrap();
        let prod2 = zn.cast(&a_int).unwrap().product(&zn.cast(&b_int).unwrap()).unwrap();
        prop_assert_eq!(prod, prod2);
        prop_assert!(z.has_element(&a_int));
    }

    /// Addition and negation cancel in every number ring.
    #[test]
    fn prop_negation_cancels(values in prop::collection::vec(-1000i64..1000, 2..5)) {
        for ring in Ring::number_rings() {
            let m = free(ring, values.len());
            let v = m.cast(&int_vector(&values)).unwrap();
            prop_assert!(v.sum(&v.negated()).unwrap().is_zero());
        }
    }
}

// =============================================================================
// Examples
// =============================================================================

#[test]
fn formal_sum_truncation_rule() {
    let zs = Ring::integers().formal_sums().unwrap();
    let v = free(zs.clone(), 3).parse(r#"("a",2*"b",3)"#).unwrap();

    let truncated = free(zs.clone(), 2).cast(&v).unwrap();
    assert_eq!(truncated.to_string(), r#"("a",2*"b")"#);
    assert_eq!(free(zs.clone(), 4).cast(&v), None);

    let one = Module::from(zs).cast(&v).unwrap();
    assert_eq!(one.to_string(), r#""a""#);
}

#[test]
fn no_partial_results() {
    let qs = Ring::rationals().formal_sums().unwrap();
    let v = free(qs, 3).parse(r#"(1,2,"x")"#).unwrap();
    assert_eq!(free(Ring::rationals(), 3).cast(&v), None);
}

#[test]
fn lossy_downcasts() {
    let c2 = free(Ring::complexes(), 2);
    let v = c2.parse("(1.5+2i,-0.5-1i)").unwrap();
    assert_eq!(free(Ring::reals(), 2).cast(&v).unwrap().to_string(), "(1.5,-0.5)");
    assert_eq!(free(Ring::integers(), 2).cast(&v).unwrap().to_string(), "(2,0)");
    let z6 = free(Ring::modular(6).unwrap(), 2);
    assert_eq!(z6.cast(&v).unwrap().to_string(), "(2,0)");
}

#[test]
fn malformed_text_is_absent() {
    let z3 = free(Ring::integers(), 3);
    for text in ["", "(", "(1,2", "1,2,3)", "(1,,3)", "(a,b,c)", "(1,(2,3))", "((1,2,3))"] {
        assert_eq!(z3.parse(text), None, "{text:?}");
    }
}

#[test]
fn nested_parentheses_do_not_split() {
    let cs = Ring::complexes().formal_sums().unwrap();
    let m = free(cs, 2);
    let v = m.parse(r#"((1+1i)*"a,b","c")"#).unwrap();
    assert_eq!(v.component(0).unwrap().to_string(), r#"(1+1i)*"a,b""#);
    assert_eq!(m.parse(&v.to_string()), Some(v));
}

#[test]
fn quotient_ring_round_trip() {
    let one = Scalar::integer(1);
    let ring = Ring::complexes()
        .quotient(&[one.clone(), Scalar::integer(0), Scalar::integer(0), one], "T")
        .unwrap();
    let m = free(ring, 2);
    let v = m.parse("((1+2i)*T^2,T+1)").unwrap();
    assert_eq!(v.to_string(), "((1+2i)*T^2,(1+0i)+T)");
    assert_eq!(m.parse(&v.to_string()), Some(v));
}
