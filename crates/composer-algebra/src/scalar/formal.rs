//! Formal sums of words with coefficients in a number ring.
//!
//! The ring `F<String>` is the monoid ring of the free monoid on strings:
//! elements are finite sums `Σ cᵢ·"wᵢ"`, addition merges coefficients word
//! by word, and multiplication concatenates words. The empty word is the
//! multiplicative unit, so `1` is `1·""`.

use super::Scalar;
use crate::cast::cast_scalar;
use crate::error::{AlgebraError, Result};
use crate::ring::Ring;
use core::fmt;
use std::collections::BTreeMap;

/// An element of a formal-sum ring.
///
/// ```
/// use composer_algebra::{FormalSum, Ring, Scalar};
///
/// let zs = Ring::integers().formal_sums().unwrap();
/// let s = FormalSum::new(&zs, [("ab", Scalar::integer(2)), ("c", Scalar::integer(-1))]).unwrap();
/// assert_eq!(s.to_string(), r#"2*"ab"+-1*"c""#);
/// assert_eq!(s.coefficient("ab"), Some(&Scalar::integer(2)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FormalSum {
    ring: Ring,
    terms: BTreeMap<String, Scalar>,
}

impl FormalSum {
    /// Builds a formal sum in `ring`, casting every coefficient into the
    /// ring's factor ring and merging repeated words.
    ///
    /// Returns `None` if `ring` is not a formal-sum ring or a coefficient
    /// does not cast.
    pub fn new<W: Into<String>>(
        ring: &Ring,
        terms: impl IntoIterator<Item = (W, Scalar)>,
    ) -> Option<Self> {
        let factor = ring.factor_ring()?;
        let mut sum = Self::empty(ring.clone());
        for (word, coefficient) in terms {
            let c = cast_scalar(&coefficient, &factor)?;
            sum.accumulate(word.into(), c).ok()?;
        }
        Some(sum)
    }

    /// The zero of `ring`; the caller guarantees a formal-sum ring.
    pub(crate) fn empty(ring: Ring) -> Self {
        Self {
            ring,
            terms: BTreeMap::new(),
        }
    }

    /// `coefficient · word` in `ring`; the coefficient must already lie in
    /// the factor ring.
    pub(crate) fn monomial(ring: Ring, word: String, coefficient: Scalar) -> Self {
        let mut sum = Self::empty(ring);
        if !coefficient.is_zero() {
            sum.terms.insert(word, coefficient);
        }
        sum
    }

    /// The formal-sum ring this element belongs to.
    #[inline]
    #[must_use]
    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    /// Coefficient of `word`, if it occurs.
    #[must_use]
    pub fn coefficient(&self, word: &str) -> Option<&Scalar> {
        self.terms.get(word)
    }

    /// Iterates over `(word, coefficient)` pairs in word order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.terms.iter().map(|(w, c)| (w.as_str(), c))
    }

    /// Number of words with a nonzero coefficient.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true for the zero sum.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub(crate) fn is_one(&self) -> bool {
        self.terms.len() == 1 && self.terms.get("").is_some_and(Scalar::is_one)
    }

    /// Rebuilds this sum in `target`, casting each coefficient with `f`.
    pub(crate) fn map_coefficients(
        &self,
        target: &Ring,
        f: impl Fn(&Scalar) -> Option<Scalar>,
    ) -> Option<Self> {
        let mut out = Self::empty(target.clone());
        for (word, c) in &self.terms {
            out.accumulate(word.clone(), f(c)?).ok()?;
        }
        Some(out)
    }

    pub(crate) fn sum(&self, rhs: &Self) -> Result<Self> {
        self.check_ring(rhs)?;
        let mut out = self.clone();
        for (word, c) in &rhs.terms {
            out.accumulate(word.clone(), c.clone())?;
        }
        Ok(out)
    }

    pub(crate) fn negated(&self) -> Self {
        Self {
            ring: self.ring.clone(),
            terms: self
                .terms
                .iter()
                .map(|(w, c)| (w.clone(), c.negated()))
                .collect(),
        }
    }

    pub(crate) fn product(&self, rhs: &Self) -> Result<Self> {
        self.check_ring(rhs)?;
        let mut out = Self::empty(self.ring.clone());
        for (u, a) in &self.terms {
            for (v, b) in &rhs.terms {
                out.accumulate(format!("{u}{v}"), a.product(b)?)?;
            }
        }
        Ok(out)
    }

    /// Only `c·""` with a unit `c` is invertible.
    pub(crate) fn inverse(&self) -> Option<Self> {
        if self.terms.len() != 1 {
            return None;
        }
        let c = self.terms.get("")?;
        c.inverse()
            .ok()
            .map(|inv| Self::monomial(self.ring.clone(), String::new(), inv))
    }

    fn accumulate(&mut self, word: String, coefficient: Scalar) -> Result<()> {
        let merged = match self.terms.remove(&word) {
            Some(existing) => existing.sum(&coefficient)?,
            None => coefficient,
        };
        if !merged.is_zero() {
            self.terms.insert(word, merged);
        }
        Ok(())
    }

    fn check_ring(&self, rhs: &Self) -> Result<()> {
        if self.ring == rhs.ring {
            Ok(())
        } else {
            Err(AlgebraError::mismatch(self.ring.clone(), rhs.ring.clone()))
        }
    }
}

impl fmt::Display for FormalSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (i, (word, c)) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, "+")?;
            }
            if word.is_empty() {
                write!(f, "{}", c.coefficient_text())?;
            } else if c.is_one() {
                write!(f, "\"{word}\"")?;
            } else {
                write!(f, "{}*\"{word}\"", c.coefficient_text())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zs() -> Ring {
        Ring::integers().formal_sums().unwrap()
    }

    fn sum(terms: &[(&str, i64)]) -> FormalSum {
        FormalSum::new(&zs(), terms.iter().map(|&(w, c)| (w, Scalar::integer(c)))).unwrap()
    }

    #[test]
    fn test_repeated_words_merge() {
        let s = sum(&[("a", 2), ("b", 1), ("a", 3)]);
        assert_eq!(s.coefficient("a"), Some(&Scalar::integer(5)));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_cancellation_removes_word() {
        let s = sum(&[("a", 2)]).sum(&sum(&[("a", -2), ("b", 1)])).unwrap();
        assert_eq!(s, sum(&[("b", 1)]));
    }

    #[test]
    fn test_product_concatenates_words() {
        let p = sum(&[("a", 2), ("", 1)]).product(&sum(&[("b", 3)])).unwrap();
        assert_eq!(p, sum(&[("ab", 6), ("b", 3)]));
    }

    #[test]
    fn test_one_and_units() {
        let one = sum(&[("", 1)]);
        assert!(one.is_one());
        assert_eq!(sum(&[("", -1)]).inverse(), Some(sum(&[("", -1)])));
        assert!(sum(&[("", 2)]).inverse().is_none());
        assert!(sum(&[("a", 1)]).inverse().is_none());
    }

    #[test]
    fn test_coefficients_are_cast_into_factor_ring() {
        let qs = Ring::rationals().formal_sums().unwrap();
        let s = FormalSum::new(&qs, [("x", Scalar::integer(2))]).unwrap();
        assert_eq!(s.coefficient("x"), Scalar::rational(2, 1).as_ref());
        assert!(FormalSum::new(&Ring::integers(), [("x", Scalar::integer(1))]).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(sum(&[]).to_string(), "0");
        assert_eq!(sum(&[("", 3), ("a", 1), ("b", -2)]).to_string(), r#"3+"a"+-2*"b""#);
        let cs = Ring::complexes().formal_sums().unwrap();
        let s = FormalSum::new(&cs, [("w", Scalar::complex(1.0, 1.0))]).unwrap();
        assert_eq!(s.to_string(), r#"(1+1i)*"w""#);
    }
}
