//! Elementary morphisms and the end-to-end coercion scenario.

use composer_algebra::prelude::*;

fn unit_vector(module: &Module, i: usize) -> Element {
    module.injection(i).apply(&module.ring().one().into()).unwrap()
}

// =============================================================================
// Projection and injection
// =============================================================================

#[test]
fn projection_after_injection_recovers_unit_vectors() {
    for ring in Ring::number_rings() {
        for n in 2..=4 {
            let m = ring.free_module(n).unwrap();
            for i in 0..n {
                let e = unit_vector(&m, i);
                let through = m.injection(i).apply(&m.projection(i).apply(&e).unwrap()).unwrap();
                assert_eq!(through, e, "{m} e{i}");
                for j in (0..n).filter(|&j| j != i) {
                    let p = m.projection(j).apply(&e).unwrap();
                    assert_eq!(p, Element::from(ring.zero()), "{m} p{j}(e{i})");
                }
            }
        }
    }
}

#[test]
fn identity_fixes_every_element() {
    let m = Ring::modular(7).unwrap().free_module(3).unwrap();
    let v = m.parse("(10,-1,3)").unwrap();
    assert_eq!(v.to_string(), "(3,6,3)");
    assert_eq!(m.identity().apply(&v).unwrap(), v);
    assert!(m.identity().is_linear());
}

#[test]
fn translation_casts_its_offset() {
    let q2 = Ring::rationals().free_module(2).unwrap();
    let shift = Ring::reals().free_module(2).unwrap().parse("(0.5,-0.25)").unwrap();
    let t = q2.translation(&shift).unwrap();
    assert_eq!(t.offset(), &[Scalar::rational(1, 2).unwrap(), Scalar::rational(-1, 4).unwrap()]);
    let v = q2.parse("(1/2,1/4)").unwrap();
    assert_eq!(t.apply(&v).unwrap().to_string(), "(1/1,0/1)");
}

#[test]
fn morphisms_reject_foreign_elements() {
    let z3 = Ring::integers().free_module(3).unwrap();
    let q3 = Ring::rationals().free_module(3).unwrap();
    let err = z3.projection(0).apply(&q3.zero()).unwrap_err();
    assert_eq!(
        err,
        AlgebraError::DomainMismatch {
            expected: z3.clone(),
            received: q3,
        }
    );
    assert!(z3.injection(0).apply(&z3.zero()).is_err());
}

// =============================================================================
// End-to-end
// =============================================================================

#[test]
fn integer_vector_through_the_lattice() {
    let z3 = Ring::integers().free_module(3).unwrap();
    let q3 = Ring::rationals().free_module(3).unwrap();
    let c3 = Ring::complexes().free_module(3).unwrap();

    let parts: Vec<Element> = [1, 2, 3]
        .into_iter()
        .map(|n| Element::from(Scalar::integer(n)))
        .collect();
    let v = z3.create_element(&parts).unwrap();
    assert_eq!(v.to_string(), "(1,2,3)");

    let q = q3.cast(&v).unwrap();
    assert_eq!(q.to_string(), "(1/1,2/1,3/1)");

    let c = c3.cast(&q).unwrap();
    assert_eq!(c.to_string(), "(1+0i,2+0i,3+0i)");

    let p = c3.projection(1).apply(&c).unwrap();
    assert_eq!(p, Element::from(Scalar::complex(2.0, 0.0)));
    assert_eq!(p.module(), Module::from(Ring::complexes()));
}
