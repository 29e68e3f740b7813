//! Module elements.
//!
//! An [`Element`] belongs to exactly one [`Module`], recovered on demand by
//! [`Element::module`]: a scalar lives in its ring, a [`Vector`] of length
//! 0 in the null module, a longer vector in the free module of its length,
//! and a block tuple in the direct sum of its blocks' modules.
//!
//! Arithmetic comes in the same two families as on [`Scalar`]. The pure
//! family (`sum`, `difference`, `product`, `scaled`, `negated`) returns a
//! new element. The in-place family (`add_assign`, `sub_assign`,
//! `mul_assign`, `scale_assign`, `negate`) mutates the receiver and changes
//! its hash, so remove an element from any hashed collection before
//! mutating it.
//!
//! ```
//! use composer_algebra::prelude::*;
//!
//! let z3 = Ring::integers().free_module(3).unwrap();
//! let mut v = z3.parse("(1,2,3)").unwrap();
//! let w = z3.parse("(10,20,30)").unwrap();
//! v.add_assign(&w).unwrap();
//! assert_eq!(v.to_string(), "(11,22,33)");
//!
//! let z2 = Ring::integers().free_module(2).unwrap();
//! assert!(v.sum(&z2.zero()).is_err());
//! ```

use crate::error::{AlgebraError, Result};
use crate::module::{FreeModule, Module};
use crate::ring::Ring;
use crate::scalar::Scalar;
use core::cmp::Ordering;
use core::fmt;

/// An element of some module.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    /// An element of a ring.
    Scalar(Scalar),
    /// A tuple of scalars in a null or free module.
    Vector(Vector),
    /// One element per block of a direct sum.
    DirectSum(Blocks),
}

/// A tuple of scalars over one ring, of length 0 or at least 2.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector {
    ring: Ring,
    components: Vec<Scalar>,
}

impl Vector {
    /// A vector over `ring`.
    ///
    /// Returns `None` if a component lies in another ring or the length is
    /// exactly 1 (a single component is a [`Scalar`]).
    #[must_use]
    pub fn new(ring: &Ring, components: Vec<Scalar>) -> Option<Self> {
        if components.len() == 1 || components.iter().any(|c| c.ring() != *ring) {
            return None;
        }
        Some(Self::from_parts(ring.clone(), components))
    }

    pub(crate) fn from_parts(ring: Ring, components: Vec<Scalar>) -> Self {
        Self { ring, components }
    }

    /// The coefficient ring.
    #[inline]
    #[must_use]
    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    /// The components in order.
    #[inline]
    #[must_use]
    pub fn components(&self) -> &[Scalar] {
        &self.components
    }

    /// Number of components.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true for the null-module element.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    fn module(&self) -> Module {
        match self.components.len() {
            0 => Module::Null(self.ring.clone()),
            n => Module::Free(FreeModule::new(self.ring.clone(), n)),
        }
    }

    fn zip_with(
        &self,
        rhs: &Self,
        f: impl Fn(&Scalar, &Scalar) -> Result<Scalar>,
    ) -> Result<Self> {
        let components = self
            .components
            .iter()
            .zip(&rhs.components)
            .map(|(a, b)| f(a, b))
            .collect::<Result<_>>()?;
        Ok(Self::from_parts(self.ring.clone(), components))
    }
}

/// The block elements of a direct-sum element: at least two, all over one
/// ring.
///
/// ```
/// use composer_algebra::prelude::*;
///
/// let z2 = Ring::integers().free_module(2).unwrap();
/// let v = z2.parse("(1,2)").unwrap();
/// let blocks = Blocks::new(vec![v.clone(), Scalar::integer(3).into()]).unwrap();
/// assert_eq!(Element::from(blocks).to_string(), "((1,2),3)");
///
/// assert!(Blocks::new(vec![v.clone()]).is_none());
/// assert!(Blocks::new(vec![v, Scalar::real(3.0).into()]).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Blocks {
    ring: Ring,
    parts: Vec<Element>,
}

impl Blocks {
    /// Blocks of a direct-sum element.
    ///
    /// Returns `None` for fewer than two blocks or blocks over different
    /// rings.
    #[must_use]
    pub fn new(parts: Vec<Element>) -> Option<Self> {
        if parts.len() < 2 {
            return None;
        }
        let ring = parts[0].ring();
        if parts.iter().any(|p| p.ring() != ring) {
            return None;
        }
        Some(Self::from_parts(ring, parts))
    }

    pub(crate) fn from_parts(ring: Ring, parts: Vec<Element>) -> Self {
        Self { ring, parts }
    }

    /// The shared ring.
    #[inline]
    #[must_use]
    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    /// The block elements in order.
    #[inline]
    #[must_use]
    pub fn parts(&self) -> &[Element] {
        &self.parts
    }

    fn with_parts(&self, parts: Vec<Element>) -> Self {
        Self::from_parts(self.ring.clone(), parts)
    }
}

impl Element {
    /// The module this element belongs to.
    #[must_use]
    pub fn module(&self) -> Module {
        match self {
            Self::Scalar(s) => Module::Ring(s.ring()),
            Self::Vector(v) => v.module(),
            Self::DirectSum(b) => Module::DirectSum(crate::module::DirectSum::from_blocks(
                b.ring.clone(),
                b.parts.iter().map(Self::module).collect(),
            )),
        }
    }

    /// The underlying ring.
    #[must_use]
    pub fn ring(&self) -> Ring {
        match self {
            Self::Scalar(s) => s.ring(),
            Self::Vector(v) => v.ring.clone(),
            Self::DirectSum(b) => b.ring.clone(),
        }
    }

    /// Number of ring components.
    #[must_use]
    pub fn dimension(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Vector(v) => v.len(),
            Self::DirectSum(b) => b.parts.iter().map(Self::dimension).sum(),
        }
    }

    /// The `i`-th component: a scalar for rings and vectors, a block for
    /// direct sums.
    #[must_use]
    pub fn component(&self, i: usize) -> Option<Self> {
        match self {
            Self::Scalar(_) => (i == 0).then(|| self.clone()),
            Self::Vector(v) => v.components.get(i).cloned().map(Self::Scalar),
            Self::DirectSum(b) => b.parts.get(i).cloned(),
        }
    }

    /// All ring coordinates in order, direct-sum blocks concatenated.
    #[must_use]
    pub fn flatten(&self) -> Vec<Scalar> {
        let mut out = Vec::with_capacity(self.dimension());
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(&self, out: &mut Vec<Scalar>) {
        match self {
            Self::Scalar(s) => out.push(s.clone()),
            Self::Vector(v) => out.extend(v.components.iter().cloned()),
            Self::DirectSum(b) => b.parts.iter().for_each(|p| p.flatten_into(out)),
        }
    }

    /// Returns true for the additive identity.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Scalar(s) => s.is_zero(),
            Self::Vector(v) => v.components.iter().all(Scalar::is_zero),
            Self::DirectSum(b) => b.parts.iter().all(Self::is_zero),
        }
    }

    /// Reinterprets this element in `target`. See [`crate::cast`].
    #[must_use]
    pub fn cast(&self, target: &Module) -> Option<Self> {
        crate::cast::cast(self, target)
    }

    /// Sum of two elements of the same module.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DomainMismatch`] if the modules differ.
    pub fn sum(&self, rhs: &Self) -> Result<Self> {
        self.combine(rhs, Scalar::sum)
    }

    /// Difference of two elements of the same module.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DomainMismatch`] if the modules differ.
    pub fn difference(&self, rhs: &Self) -> Result<Self> {
        self.combine(rhs, Scalar::difference)
    }

    /// Componentwise product of two elements of the same module.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DomainMismatch`] if the modules differ.
    pub fn product(&self, rhs: &Self) -> Result<Self> {
        self.combine(rhs, Scalar::product)
    }

    /// Multiplies every component by `factor`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DomainMismatch`] if `factor` is not in this
    /// element's ring.
    pub fn scaled(&self, factor: &Scalar) -> Result<Self> {
        let ring = self.ring();
        if factor.ring() != ring {
            return Err(AlgebraError::mismatch(ring, factor.ring()));
        }
        self.map(&|c| c.product(factor))
    }

    /// Additive inverse.
    #[must_use]
    pub fn negated(&self) -> Self {
        match self {
            Self::Scalar(s) => Self::Scalar(s.negated()),
            Self::Vector(v) => Self::Vector(Vector::from_parts(
                v.ring.clone(),
                v.components.iter().map(Scalar::negated).collect(),
            )),
            Self::DirectSum(b) => Self::DirectSum(b.with_parts(b.parts.iter().map(Self::negated).collect())),
        }
    }

    /// In-place sum. Invalidates any hash-based lookup keyed on `self`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DomainMismatch`] if the modules differ;
    /// `self` is left unchanged.
    pub fn add_assign(&mut self, rhs: &Self) -> Result<()> {
        *self = self.sum(rhs)?;
        Ok(())
    }

    /// In-place difference. Invalidates any hash-based lookup keyed on
    /// `self`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DomainMismatch`] if the modules differ;
    /// `self` is left unchanged.
    pub fn sub_assign(&mut self, rhs: &Self) -> Result<()> {
        *self = self.difference(rhs)?;
        Ok(())
    }

    /// In-place componentwise product. Invalidates any hash-based lookup
    /// keyed on `self`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DomainMismatch`] if the modules differ;
    /// `self` is left unchanged.
    pub fn mul_assign(&mut self, rhs: &Self) -> Result<()> {
        *self = self.product(rhs)?;
        Ok(())
    }

    /// In-place scaling. Invalidates any hash-based lookup keyed on `self`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DomainMismatch`] if `factor` is not in this
    /// element's ring; `self` is left unchanged.
    pub fn scale_assign(&mut self, factor: &Scalar) -> Result<()> {
        *self = self.scaled(factor)?;
        Ok(())
    }

    /// In-place negation. Invalidates any hash-based lookup keyed on `self`.
    pub fn negate(&mut self) {
        *self = self.negated();
    }

    fn combine(
        &self,
        rhs: &Self,
        f: impl Fn(&Scalar, &Scalar) -> Result<Scalar> + Copy,
    ) -> Result<Self> {
        let mismatch = || AlgebraError::mismatch(self.module(), rhs.module());
        match (self, rhs) {
            (Self::Scalar(a), Self::Scalar(b)) if a.ring() == b.ring() => Ok(Self::Scalar(f(a, b)?)),
            (Self::Vector(a), Self::Vector(b)) if a.ring == b.ring && a.len() == b.len() => {
                Ok(Self::Vector(a.zip_with(b, f)?))
            }
            (Self::DirectSum(a), Self::DirectSum(b)) if self.module() == rhs.module() => a
                .parts
                .iter()
                .zip(&b.parts)
                .map(|(x, y)| x.combine(y, f))
                .collect::<Result<_>>()
                .map(|parts| Self::DirectSum(a.with_parts(parts))),
            _ => Err(mismatch()),
        }
    }

    fn map(&self, f: &impl Fn(&Scalar) -> Result<Scalar>) -> Result<Self> {
        Ok(match self {
            Self::Scalar(s) => Self::Scalar(f(s)?),
            Self::Vector(v) => Self::Vector(Vector::from_parts(
                v.ring.clone(),
                v.components.iter().map(f).collect::<Result<_>>()?,
            )),
            Self::DirectSum(b) => Self::DirectSum(
                b.with_parts(b.parts.iter().map(|p| p.map(f)).collect::<Result<_>>()?),
            ),
        })
    }

    const fn shape_index(&self) -> u8 {
        match self {
            Self::Scalar(_) => 0,
            Self::Vector(_) => 1,
            Self::DirectSum(_) => 2,
        }
    }
}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Element {
    /// Orders by module first, then componentwise.
    fn cmp(&self, other: &Self) -> Ordering {
        self.module()
            .cmp(&other.module())
            .then_with(|| match (self, other) {
                (Self::Scalar(a), Self::Scalar(b)) => a.cmp(b),
                (Self::Vector(a), Self::Vector(b)) => a.components.cmp(&b.components),
                (Self::DirectSum(a), Self::DirectSum(b)) => a.parts.cmp(&b.parts),
                _ => self.shape_index().cmp(&other.shape_index()),
            })
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => write!(f, "{s}"),
            Self::Vector(v) => write_tuple(f, &v.components),
            Self::DirectSum(b) => write_tuple(f, &b.parts),
        }
    }
}

fn write_tuple<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    write!(f, "(")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, ")")
}

impl From<Scalar> for Element {
    fn from(s: Scalar) -> Self {
        Self::Scalar(s)
    }
}

impl From<Vector> for Element {
    fn from(v: Vector) -> Self {
        Self::Vector(v)
    }
}

impl From<Blocks> for Element {
    fn from(b: Blocks) -> Self {
        Self::DirectSum(b)
    }
}
