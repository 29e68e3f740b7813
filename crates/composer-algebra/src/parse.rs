//! Textual element syntax.
//!
//! The grammar mirrors [`core::fmt::Display`] on elements, so printing an
//! element and parsing the text back yields the same element for every
//! exactly representable value.
//!
//! | Structure | Syntax |
//! |-----------|--------|
//! | `Z`, `Z_n` | `-12` |
//! | `Q` | `3/4`, `5`, `0.25` |
//! | `R` | `2.5` |
//! | `C` | `1+2i`, `-i`, `3` |
//! | `F<String>` | `2*"ab"+-1*"c"`, `"w"`, `0` |
//! | `F[X]/(m)` | `1/1+(2+1i)*X+X^2` |
//! | null module | `()` |
//! | `R^n` | `(a,b,c)` |
//! | `M ⊕ N` | `(m,n)` |
//!
//! Malformed input yields `None`.

use crate::element::{Blocks, Element};
use crate::module::Module;
use crate::ring::{QuotientSpec, Ring, RingKind};
use crate::scalar::{Complex, FormalSum, Modular, Rational, Residue, Scalar};
use num_bigint::BigInt;

/// Parses `text` as an element of `module`.
#[must_use]
pub fn parse_element(text: &str, module: &Module) -> Option<Element> {
    let text = text.trim();
    let parsed = match module {
        Module::Ring(ring) => parse_scalar(text, ring).map(Element::Scalar),
        Module::Null(_) => strip_parens(text).trim().is_empty().then(|| module.zero()),
        Module::Free(free) => {
            let fields = split_top_level(strip_parens(text), ',')?;
            if fields.len() != free.dimension() {
                tracing::debug!(module = %module, fields = fields.len(), "arity mismatch");
                return None;
            }
            let scalars = fields
                .iter()
                .map(|f| parse_scalar(f, free.ring()))
                .collect::<Option<Vec<_>>>()?;
            module.assemble(scalars)
        }
        Module::DirectSum(sum) => {
            let fields = split_top_level(strip_parens(text), ',')?;
            if fields.len() != sum.blocks().len() {
                tracing::debug!(module = %module, fields = fields.len(), "block count mismatch");
                return None;
            }
            fields
                .iter()
                .zip(sum.blocks())
                .map(|(f, block)| parse_element(f, block))
                .collect::<Option<Vec<_>>>()
                .map(|parts| Element::DirectSum(Blocks::from_parts(sum.ring().clone(), parts)))
        }
    };
    if parsed.is_none() {
        tracing::debug!(module = %module, text, "parse failed");
    }
    parsed
}

/// Parses `text` as a scalar of `ring`, accepting one level of enclosing
/// parentheses.
#[must_use]
pub fn parse_scalar(text: &str, ring: &Ring) -> Option<Scalar> {
    let text = text.trim();
    parse_bare_scalar(text, ring).or_else(|| {
        let inner = strip_parens(text);
        (inner.len() < text.len())
            .then(|| parse_bare_scalar(inner.trim(), ring))
            .flatten()
    })
}

fn parse_bare_scalar(text: &str, ring: &Ring) -> Option<Scalar> {
    match ring.kind() {
        RingKind::Integers => text.parse().ok().map(Scalar::Integer),
        RingKind::Modular(n) => text
            .parse::<i64>()
            .ok()
            .map(|v| Scalar::Modular(Modular::reduce(i128::from(v), *n))),
        RingKind::Rationals => parse_rational(text).map(Scalar::Rational),
        RingKind::Reals => text.parse().ok().map(Scalar::Real),
        RingKind::Complexes => parse_complex(text).map(Scalar::Complex),
        RingKind::FormalSums(factor) => parse_formal_sum(text, ring, factor).map(Scalar::FormalSum),
        RingKind::Quotient(spec) => parse_residue(text, ring, spec).map(Scalar::Residue),
    }
}

/// Removes one level of parentheses enclosing the whole of `text`.
///
/// `"(1,2)"` becomes `"1,2"`, while `"(1)+(2)"` is returned unchanged
/// because its first parenthesis closes before the end.
pub(crate) fn strip_parens(text: &str) -> &str {
    let t = text.trim();
    let Some(inner) = t.strip_prefix('(').and_then(|s| s.strip_suffix(')')) else {
        return t;
    };
    let mut depth = 0usize;
    let mut quoted = false;
    for c in inner.chars() {
        match c {
            '"' => quoted = !quoted,
            '(' if !quoted => depth += 1,
            ')' if !quoted => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return t,
            },
            _ => {}
        }
    }
    inner
}

/// Splits `text` on `separator` outside parentheses and quotes.
///
/// Returns `None` for unbalanced parentheses or an unterminated quote.
pub(crate) fn split_top_level(text: &str, separator: char) -> Option<Vec<&str>> {
    let mut fields = Vec::new();
    let mut depth = 0usize;
    let mut quoted = false;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '"' => quoted = !quoted,
            '(' if !quoted => depth += 1,
            ')' if !quoted => depth = depth.checked_sub(1)?,
            c if c == separator && !quoted && depth == 0 => {
                fields.push(text[start..i].trim());
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    if depth != 0 || quoted {
        return None;
    }
    fields.push(text[start..].trim());
    Some(fields)
}

fn parse_rational(text: &str) -> Option<Rational> {
    if let Some((num, den)) = text.split_once('/') {
        return Rational::from_parts(num.trim().parse().ok()?, den.trim().parse().ok()?);
    }
    if let Ok(n) = text.parse::<BigInt>() {
        return Rational::from_parts(n, BigInt::from(1));
    }
    Rational::approximate(text.parse().ok()?)
}

/// Parses `a`, `bi`, `a+bi` or `a-bi`; a bare `i` stands for `1i`.
fn parse_complex(text: &str) -> Option<Complex> {
    let Some(body) = text.strip_suffix('i') else {
        return text.parse().ok().map(|re| Complex::new(re, 0.0));
    };
    // The sign that starts the imaginary part: the last one that is neither
    // leading nor part of an exponent.
    let split = body
        .char_indices()
        .filter(|&(i, c)| {
            i > 0 && (c == '+' || c == '-') && !matches!(body[..i].chars().last(), Some('e' | 'E'))
        })
        .map(|(i, _)| i)
        .last();
    let (re, im) = match split {
        Some(i) => (body[..i].trim().parse().ok()?, &body[i..]),
        None => (0.0, body),
    };
    let im = match im.trim() {
        "" | "+" => 1.0,
        "-" => -1.0,
        s => s.parse().ok()?,
    };
    Some(Complex::new(re, im))
}

/// Parses `c*"w"`, `"w"` and bare `c` terms joined by `+`.
fn parse_formal_sum(text: &str, ring: &Ring, factor: &Ring) -> Option<FormalSum> {
    if text == "0" {
        return FormalSum::new(ring, Vec::<(String, Scalar)>::new());
    }
    let mut terms = Vec::new();
    for term in split_top_level(text, '+')? {
        let (coefficient, word) = match term.strip_suffix('"') {
            Some(head) => {
                let (c, w) = head.rsplit_once('"')?;
                let coefficient = match c.strip_suffix('*') {
                    Some(c) => parse_scalar(c, factor)?,
                    None if c.is_empty() => factor.one(),
                    None => return None,
                };
                (coefficient, w.to_string())
            }
            None => (parse_scalar(term, factor)?, String::new()),
        };
        terms.push((word, coefficient));
    }
    FormalSum::new(ring, terms)
}

/// Parses ascending or unordered terms `c*X^k`, `X^k`, `c*X`, `X` and `c`.
fn parse_residue(text: &str, ring: &Ring, spec: &QuotientSpec) -> Option<Residue> {
    let base = spec.coefficients();
    let x = spec.indeterminate();
    let mut coefficients: Vec<Scalar> = Vec::new();
    for term in split_top_level(text, '+')? {
        let (head, monomial) = match term.rsplit_once('*') {
            Some((c, m)) => (Some(c), m.trim()),
            None => (None, term),
        };
        let power = if monomial == x {
            Some(1)
        } else {
            monomial
                .strip_prefix(x)
                .and_then(|rest| rest.strip_prefix('^'))
                .map(|k| k.parse::<usize>())
                .transpose()
                .ok()?
        };
        let (coefficient, k) = match (head, power) {
            (Some(c), Some(k)) => (parse_scalar(c, base)?, k),
            (None, Some(k)) => (base.one(), k),
            (None, None) => (parse_scalar(monomial, base)?, 0),
            (Some(_), None) => return None,
        };
        if coefficients.len() <= k {
            coefficients.resize(k + 1, base.zero());
        }
        coefficients[k].add_assign(&coefficient).ok()?;
    }
    Residue::reduced(ring.clone(), coefficients).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_parens() {
        assert_eq!(strip_parens("(1,2)"), "1,2");
        assert_eq!(strip_parens(" ((1,2),3) "), "(1,2),3");
        assert_eq!(strip_parens("(1)+(2)"), "(1)+(2)");
        assert_eq!(strip_parens("3"), "3");
        assert_eq!(strip_parens("()"), "");
    }

    #[test]
    fn test_split_top_level() {
        assert_eq!(split_top_level("1,(2,3),4", ','), Some(vec!["1", "(2,3)", "4"]));
        assert_eq!(split_top_level(r#""a,b",1"#, ','), Some(vec![r#""a,b""#, "1"]));
        assert_eq!(split_top_level("(1,2", ','), None);
        assert_eq!(split_top_level("1),(2", ','), None);
        assert_eq!(split_top_level(r#""open"#, ','), None);
    }

    #[test]
    fn test_number_scalars() {
        let p = |text: &str, ring: Ring| parse_scalar(text, &ring);
        assert_eq!(p("-12", Ring::integers()), Some(Scalar::integer(-12)));
        assert_eq!(p("1.5", Ring::integers()), None);
        assert_eq!(p("-1", Ring::modular(7).unwrap()), Scalar::modular(6, 7));
        assert_eq!(p("6/8", Ring::rationals()), Scalar::rational(3, 4));
        assert_eq!(p("0.5", Ring::rationals()), Scalar::rational(1, 2));
        assert_eq!(p("1/0", Ring::rationals()), None);
        assert_eq!(p("(2.5)", Ring::reals()), Some(Scalar::real(2.5)));

        let wide = p("1/18446744073709551616", Ring::rationals()).unwrap();
        assert_eq!(wide.to_string(), "1/18446744073709551616");
        let tiny = Scalar::rational(1, 1 << 32).unwrap();
        assert_eq!(tiny.product(&tiny).unwrap(), wide);
    }

    #[test]
    fn test_complex_forms() {
        let c = |text: &str| parse_complex(text);
        assert_eq!(c("1+2i"), Some(Complex::new(1.0, 2.0)));
        assert_eq!(c("1-2i"), Some(Complex::new(1.0, -2.0)));
        assert_eq!(c("-3i"), Some(Complex::new(0.0, -3.0)));
        assert_eq!(c("i"), Some(Complex::new(0.0, 1.0)));
        assert_eq!(c("2-i"), Some(Complex::new(2.0, -1.0)));
        assert_eq!(c("4"), Some(Complex::new(4.0, 0.0)));
        assert_eq!(c("1e-3+1e+2i"), Some(Complex::new(0.001, 100.0)));
        assert_eq!(c("1+2j"), None);
    }

    #[test]
    fn test_formal_sums() {
        let zs = Ring::integers().formal_sums().unwrap();
        let s = parse_scalar(r#"2*"ab"+-1*"c"+"ab"+4"#, &zs).unwrap();
        assert_eq!(s.to_string(), r#"4+3*"ab"+-1*"c""#);
        assert!(parse_scalar("0", &zs).unwrap().is_zero());
        assert_eq!(parse_scalar(r#"2*"a"+"#, &zs), None);
        assert_eq!(parse_scalar(r#"2"a""#, &zs), None);

        let cs = Ring::complexes().formal_sums().unwrap();
        let t = parse_scalar(r#"(1+1i)*"w+v""#, &cs).unwrap();
        assert_eq!(t.to_string(), r#"(1+1i)*"w+v""#);
    }

    #[test]
    fn test_residues() {
        let one = Scalar::integer(1);
        let gauss = Ring::rationals()
            .quotient(&[one.clone(), Scalar::integer(0), one], "X")
            .unwrap();
        let r = parse_scalar("1/2+3*X+X^2", &gauss).unwrap();
        assert_eq!(r.to_string(), "-1/2+3/1*X");
        assert_eq!(parse_scalar("2*Y", &gauss), None);
        assert_eq!(parse_scalar("X^", &gauss), None);
    }

    #[test]
    fn test_elements() {
        let z3 = Ring::integers().free_module(3).unwrap();
        assert_eq!(z3.parse(" ( 1, 2 ,3 ) ").unwrap().to_string(), "(1,2,3)");
        assert_eq!(z3.parse("(1,2)"), None);
        assert_eq!(z3.parse("(1,2,3,4)"), None);
        assert_eq!(z3.parse("(1,x,3)"), None);
        assert_eq!(z3.parse("((1,2,3)"), None);

        let null = Ring::reals().null_module();
        assert_eq!(null.parse("()"), Some(null.zero()));
        assert_eq!(null.parse("(1)"), None);

        let c2 = Ring::complexes().free_module(2).unwrap();
        let v = c2.parse("(1+0i,2-1i)").unwrap();
        assert_eq!(c2.parse(&v.to_string()), Some(v));
    }
}
