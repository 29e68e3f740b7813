//! Modules over a ring: null modules, rings, free modules and direct sums.
//!
//! [`Module`] is canonical by construction. The only way to get a free
//! module is [`Ring::free_module`], which maps dimension 0 to
//! [`Module::Null`] and dimension 1 to [`Module::Ring`], so a
//! [`FreeModule`] always has dimension 2 or more. Likewise a direct sum of
//! one block is that block.

mod descriptor;

pub use descriptor::ModuleDescriptor;

use crate::capability::{HasZero, Structure};
use crate::element::{Blocks, Element, Vector};
use crate::ring::Ring;
use crate::scalar::Scalar;
use core::cmp::Ordering;
use core::fmt;

/// An algebraic carrier over a ring.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Module {
    /// The dimension-0 free module over a ring.
    Null(Ring),
    /// A ring viewed as a module of dimension 1 over itself.
    Ring(Ring),
    /// A free module of dimension at least 2.
    Free(FreeModule),
    /// A direct sum of at least two modules over one ring.
    DirectSum(DirectSum),
}

/// Free module `R^n` with `n ≥ 2`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FreeModule {
    ring: Ring,
    dimension: usize,
}

impl FreeModule {
    pub(crate) fn new(ring: Ring, dimension: usize) -> Self {
        Self { ring, dimension }
    }

    /// The coefficient ring.
    #[inline]
    #[must_use]
    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    /// Number of components.
    #[inline]
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }
}

/// Direct sum `M₀ ⊕ M₁ ⊕ …` over a shared ring.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DirectSum {
    ring: Ring,
    blocks: Vec<Module>,
}

impl DirectSum {
    pub(crate) fn from_blocks(ring: Ring, blocks: Vec<Module>) -> Self {
        Self { ring, blocks }
    }

    /// The shared ring.
    #[inline]
    #[must_use]
    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    /// The summands, in order.
    #[inline]
    #[must_use]
    pub fn blocks(&self) -> &[Module] {
        &self.blocks
    }

    /// Sum of the block dimensions.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.blocks.iter().map(Module::dimension).sum()
    }
}

impl Module {
    /// Direct sum of `blocks`.
    ///
    /// Returns `None` for an empty list or blocks over different rings. A
    /// single block is returned unchanged.
    ///
    /// ```
    /// use composer_algebra::prelude::*;
    ///
    /// let z = Ring::integers();
    /// let m = Module::direct_sum(vec![z.clone().into(), z.free_module(2).unwrap()]).unwrap();
    /// assert_eq!(m.dimension(), 3);
    /// assert_eq!(m.to_string(), "Z ⊕ Z^2");
    /// assert_eq!(m.parse("(1,(2,3))").unwrap().to_string(), "(1,(2,3))");
    /// ```
    #[must_use]
    pub fn direct_sum(blocks: Vec<Module>) -> Option<Self> {
        let ring = blocks.first()?.ring();
        if blocks.iter().any(|b| b.ring() != ring) {
            tracing::debug!(%ring, "rejected direct sum over mixed rings");
            return None;
        }
        let mut blocks = blocks;
        if blocks.len() == 1 {
            return blocks.pop();
        }
        Some(Self::DirectSum(DirectSum { ring, blocks }))
    }

    /// The additive identity.
    #[must_use]
    pub fn zero(&self) -> Element {
        match self {
            Self::Null(r) => Element::Vector(Vector::from_parts(r.clone(), Vec::new())),
            Self::Ring(r) => Element::Scalar(r.zero()),
            Self::Free(m) => Element::Vector(Vector::from_parts(
                m.ring.clone(),
                vec![m.ring.zero(); m.dimension],
            )),
            Self::DirectSum(s) => Element::DirectSum(Blocks::from_parts(
                s.ring.clone(),
                s.blocks.iter().map(Self::zero).collect(),
            )),
        }
    }

    /// Number of ring components of an element.
    #[must_use]
    pub fn dimension(&self) -> usize {
        match self {
            Self::Null(_) => 0,
            Self::Ring(_) => 1,
            Self::Free(m) => m.dimension,
            Self::DirectSum(s) => s.dimension(),
        }
    }

    /// The underlying ring.
    #[must_use]
    pub fn ring(&self) -> Ring {
        match self {
            Self::Null(r) | Self::Ring(r) => r.clone(),
            Self::Free(m) => m.ring.clone(),
            Self::DirectSum(s) => s.ring.clone(),
        }
    }

    /// The dimension-0 free module over the same ring.
    #[must_use]
    pub fn null_module(&self) -> Self {
        Self::Null(self.ring())
    }

    /// Returns true for the null module.
    #[must_use]
    pub fn is_null_module(&self) -> bool {
        matches!(self, Self::Null(_))
    }

    /// Returns true if this module is a ring.
    #[must_use]
    pub fn is_ring(&self) -> bool {
        matches!(self, Self::Ring(_))
    }

    /// The `i`-th component module.
    ///
    /// For a free module every component is the ring; for a direct sum the
    /// components are the blocks; a ring is its own single component.
    #[must_use]
    pub fn component_module(&self, i: usize) -> Option<Self> {
        match self {
            Self::Null(_) => None,
            Self::Ring(_) => (i == 0).then(|| self.clone()),
            Self::Free(m) => (i < m.dimension).then(|| Self::Ring(m.ring.clone())),
            Self::DirectSum(s) => s.blocks.get(i).cloned(),
        }
    }

    /// Returns true if `element` belongs to this module.
    #[must_use]
    pub fn has_element(&self, element: &Element) -> bool {
        element.module() == *self
    }

    /// Reinterprets `element` in this module. See [`crate::cast`].
    #[must_use]
    pub fn cast(&self, element: &Element) -> Option<Element> {
        crate::cast::cast(element, self)
    }

    /// Builds an element from a list of candidate components.
    ///
    /// Each candidate is cast into the corresponding component module. The
    /// list length must equal the number of components, except that a
    /// formal-sum free module drops surplus trailing candidates. The null
    /// module ignores the list and yields its zero.
    #[must_use]
    pub fn create_element(&self, components: &[Element]) -> Option<Element> {
        let arity = match self {
            Self::Null(_) => return Some(self.zero()),
            Self::Ring(_) | Self::Free(_) => self.dimension(),
            Self::DirectSum(s) => s.blocks.len(),
        };
        let components = if components.len() > arity && self.ring().is_formal_sum() {
            tracing::trace!(module = %self, supplied = components.len(), "truncating surplus components");
            &components[..arity]
        } else {
            components
        };
        if components.len() != arity {
            tracing::debug!(module = %self, expected = arity, received = components.len(), "create_element arity mismatch");
            return None;
        }
        match self {
            Self::DirectSum(s) => s
                .blocks
                .iter()
                .zip(components)
                .map(|(block, c)| block.cast(c))
                .collect::<Option<Vec<_>>>()
                .map(|parts| Element::DirectSum(Blocks::from_parts(s.ring.clone(), parts))),
            _ => {
                let ring = Self::Ring(self.ring());
                let scalars = components
                    .iter()
                    .map(|c| match ring.cast(c)? {
                        Element::Scalar(s) => Some(s),
                        _ => None,
                    })
                    .collect::<Option<Vec<_>>>()?;
                self.assemble(scalars)
            }
        }
    }

    /// Parses the textual form of an element. See [`crate::parse`].
    #[must_use]
    pub fn parse(&self, text: &str) -> Option<Element> {
        crate::parse::parse_element(text, self)
    }

    /// Builds an element of this module from flat coordinates that already
    /// lie in the ring.
    pub(crate) fn assemble(&self, coordinates: Vec<Scalar>) -> Option<Element> {
        if coordinates.len() != self.dimension() {
            return None;
        }
        match self {
            Self::Null(r) => Some(Element::Vector(Vector::from_parts(r.clone(), coordinates))),
            Self::Ring(_) => coordinates.into_iter().next().map(Element::Scalar),
            Self::Free(m) => Some(Element::Vector(Vector::from_parts(m.ring.clone(), coordinates))),
            Self::DirectSum(s) => {
                let mut rest = coordinates.into_iter();
                let mut parts = Vec::with_capacity(s.blocks.len());
                for block in &s.blocks {
                    let chunk: Vec<Scalar> = rest.by_ref().take(block.dimension()).collect();
                    parts.push(block.assemble(chunk)?);
                }
                Some(Element::DirectSum(Blocks::from_parts(s.ring.clone(), parts)))
            }
        }
    }

    /// Stable persistence token for this structure.
    ///
    /// ```
    /// use composer_algebra::Ring;
    ///
    /// assert_eq!(Ring::integers().free_module(1).unwrap().type_name(), "ZRing");
    /// assert_eq!(Ring::modular(5).unwrap().free_module(4).unwrap().type_name(), "ZnFreeModule");
    /// assert_eq!(Ring::rationals().null_module().type_name(), "QFreeModule");
    /// ```
    #[must_use]
    pub fn type_name(&self) -> String {
        match self {
            Self::Ring(r) => format!("{}Ring", r.type_prefix()),
            Self::Null(r) => format!("{}FreeModule", r.type_prefix()),
            Self::Free(m) => format!("{}FreeModule", m.ring.type_prefix()),
            Self::DirectSum(_) => "DirectSumModule".to_string(),
        }
    }

    /// Reconstruction attributes for number-ring modules.
    ///
    /// Returns `None` for formal-sum, quotient and direct-sum modules, whose
    /// parameters do not fit the descriptor.
    #[must_use]
    pub fn descriptor(&self) -> Option<ModuleDescriptor> {
        if matches!(self, Self::DirectSum(_)) || !self.ring().kind().is_number() {
            return None;
        }
        Some(ModuleDescriptor::new(
            self.type_name(),
            self.dimension(),
            self.ring().modulus(),
        ))
    }

    /// Returns true if both modules are built on the same ring instance and
    /// have the same shape.
    ///
    /// For the registered number rings and the interned `Z_n` this makes
    /// `null_module()` identical across calls.
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null(a), Self::Null(b)) | (Self::Ring(a), Self::Ring(b)) => Ring::ptr_eq(a, b),
            (Self::Free(a), Self::Free(b)) => {
                Ring::ptr_eq(&a.ring, &b.ring) && a.dimension == b.dimension
            }
            (Self::DirectSum(a), Self::DirectSum(b)) => {
                a.blocks.len() == b.blocks.len()
                    && a.blocks.iter().zip(&b.blocks).all(|(x, y)| x.is_identical(y))
            }
            _ => false,
        }
    }

    const fn shape_index(&self) -> u8 {
        match self {
            Self::Null(_) => 0,
            Self::Ring(_) => 1,
            Self::Free(_) => 2,
            Self::DirectSum(_) => 3,
        }
    }
}

impl From<Ring> for Module {
    fn from(ring: Ring) -> Self {
        Self::Ring(ring)
    }
}

impl PartialOrd for Module {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Module {
    /// Orders by ring, then dimension, then shape.
    fn cmp(&self, other: &Self) -> Ordering {
        self.ring()
            .cmp(&other.ring())
            .then_with(|| self.dimension().cmp(&other.dimension()))
            .then_with(|| self.shape_index().cmp(&other.shape_index()))
            .then_with(|| match (self, other) {
                (Self::DirectSum(a), Self::DirectSum(b)) => a.blocks.cmp(&b.blocks),
                _ => Ordering::Equal,
            })
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null(r) => write!(f, "{r}^0"),
            Self::Ring(r) => write!(f, "{r}"),
            Self::Free(m) => write!(f, "{}^{}", m.ring, m.dimension),
            Self::DirectSum(s) => {
                for (i, block) in s.blocks.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ⊕ ")?;
                    }
                    write!(f, "{block}")?;
                }
                Ok(())
            }
        }
    }
}

impl HasZero for Module {
    type Value = Element;

    fn zero(&self) -> Element {
        Module::zero(self)
    }
}

impl Structure for Module {
    fn as_module(&self) -> Module {
        self.clone()
    }

    fn dimension(&self) -> usize {
        Module::dimension(self)
    }

    fn ring(&self) -> Ring {
        Module::ring(self)
    }

    fn is_null_module(&self) -> bool {
        Module::is_null_module(self)
    }

    fn component_module(&self, i: usize) -> Option<Module> {
        Module::component_module(self, i)
    }

    fn has_element(&self, element: &Element) -> bool {
        Module::has_element(self, element)
    }

    fn cast(&self, element: &Element) -> Option<Element> {
        Module::cast(self, element)
    }

    fn create_element(&self, components: &[Element]) -> Option<Element> {
        Module::create_element(self, components)
    }

    fn parse(&self, text: &str) -> Option<Element> {
        Module::parse(self, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn z(n: usize) -> Module {
        Ring::integers().free_module(n).unwrap()
    }

    #[test]
    fn test_canonical_dimensions() {
        let r = Ring::reals();
        assert!(r.free_module(0).unwrap().is_null_module());
        assert_eq!(r.free_module(1).unwrap(), Module::Ring(r.clone()));
        assert!(matches!(r.free_module(2).unwrap(), Module::Free(_)));
        assert_eq!(r.free_module(5), r.free_module(5));
    }

    #[test]
    fn test_null_module_identity() {
        for r in Ring::number_rings() {
            let a = r.free_module(0).unwrap();
            let b = r.free_module(0).unwrap();
            assert!(a.is_identical(&b));
            assert!(a.is_identical(&r.null_module()));
        }
        assert!(!z(0).is_identical(&Ring::rationals().null_module()));
    }

    #[test]
    fn test_component_modules() {
        let m = z(3);
        assert_eq!(m.component_module(2), Some(Module::Ring(Ring::integers())));
        assert_eq!(m.component_module(3), None);
        assert_eq!(z(0).component_module(0), None);
        assert_eq!(z(1).component_module(0), Some(z(1)));
    }

    #[test]
    fn test_zero_elements() {
        assert_eq!(z(0).zero().to_string(), "()");
        assert_eq!(z(1).zero().to_string(), "0");
        assert_eq!(z(3).zero().to_string(), "(0,0,0)");
        assert!(z(3).has_element(&z(3).zero()));
        assert!(!z(2).has_element(&z(3).zero()));
    }

    #[test]
    fn test_create_element_casts_and_checks_arity() {
        let q2 = Ring::rationals().free_module(2).unwrap();
        let parts = [Element::from(Scalar::integer(1)), Element::from(Scalar::integer(2))];
        let e = q2.create_element(&parts).unwrap();
        assert_eq!(e.to_string(), "(1/1,2/1)");
        assert!(q2.create_element(&parts[..1]).is_none());
        assert!(z(3).create_element(&parts).is_none());
        assert_eq!(z(0).create_element(&parts), Some(z(0).zero()));
    }

    #[test]
    fn test_create_element_truncates_for_formal_sums() {
        let zs = Ring::integers().formal_sums().unwrap();
        let m = zs.free_module(2).unwrap();
        let parts: Vec<Element> = (1..=3).map(|n| Scalar::integer(n).into()).collect();
        let e = m.create_element(&parts).unwrap();
        assert_eq!(e.to_string(), "(1,2)");
        assert!(m.create_element(&parts[..1]).is_none());
    }

    #[test]
    fn test_direct_sum_rules() {
        let q = Ring::rationals();
        assert!(Module::direct_sum(Vec::new()).is_none());
        assert_eq!(Module::direct_sum(vec![z(2)]), Some(z(2)));
        assert!(Module::direct_sum(vec![z(2), q.free_module(2).unwrap()]).is_none());

        let m = Module::direct_sum(vec![z(2), z(1)]).unwrap();
        assert_eq!(m.dimension(), 3);
        assert_eq!(m.component_module(0), Some(z(2)));
        assert_eq!(m.type_name(), "DirectSumModule");
        assert_ne!(m, z(3));
        assert_eq!(m.zero().to_string(), "((0,0),0)");
    }

    #[test]
    fn test_module_order() {
        let mut mods = vec![
            z(3),
            Ring::modular(5).unwrap().free_module(2).unwrap(),
            Ring::rationals().null_module(),
            z(0),
            Module::direct_sum(vec![z(1), z(2)]).unwrap(),
            z(1),
        ];
        mods.sort();
        let names: Vec<String> = mods.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["Z_5^2", "Z^0", "Z", "Z^3", "Z ⊕ Z^2", "Q^0"]);
    }

    #[test]
    fn test_structure_trait_matches_inherent_methods() {
        fn dims<S: Structure>(s: &S) -> usize {
            s.dimension()
        }
        assert_eq!(dims(&z(4)), 4);
        assert_eq!(dims(&Ring::complexes()), 1);
    }
}
