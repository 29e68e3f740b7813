//! Capability traits composed onto the algebraic structures.
//!
//! A structure is not a node in an inheritance chain. It is a single type
//! that picks up small orthogonal capabilities: [`Ring`] has a zero, a one,
//! a field predicate, a vector-space predicate and a free-module factory,
//! while [`Module`] has a zero and the [`Structure`] contract. A ring is a
//! module of dimension 1 because it implements [`Structure`] directly, not
//! because it wraps itself in a free-module type.
//!
//! ```
//! use composer_algebra::prelude::*;
//!
//! fn describe<S: Structure>(s: &S) -> (usize, bool) {
//!     (s.dimension(), s.is_null_module())
//! }
//!
//! assert_eq!(describe(&Ring::reals()), (1, false));
//! assert_eq!(describe(&Ring::reals().null_module()), (0, true));
//! ```

use crate::element::Element;
use crate::module::Module;
use crate::ring::Ring;

/// Structures with a distinguished additive identity.
pub trait HasZero {
    /// The value type the zero belongs to.
    type Value;

    /// The additive identity.
    fn zero(&self) -> Self::Value;
}

/// Structures with a distinguished multiplicative identity.
pub trait HasOne: HasZero {
    /// The multiplicative identity.
    fn one(&self) -> Self::Value;
}

/// Structures that can report whether every nonzero element is invertible.
pub trait FieldCapable {
    /// Returns true if this structure is a field.
    fn is_field(&self) -> bool;
}

/// Structures whose free modules carry vector-space semantics.
pub trait VectorSpace {
    /// Returns true if free modules over this structure are vector spaces.
    fn is_vector_space(&self) -> bool;
}

/// Structures that produce canonical free modules over themselves.
pub trait FreeModuleFactory {
    /// The canonical free module of the given dimension.
    ///
    /// Dimension 0 is the null module, dimension 1 is the structure itself.
    /// Returns `None` when the structure cannot carry a free module of that
    /// dimension.
    fn free_module(&self, dimension: usize) -> Option<Module>;

    /// The unique dimension-0 free module.
    fn null_module(&self) -> Module;
}

/// The contract every algebraic structure exposes.
pub trait Structure: HasZero {
    /// This structure viewed as a [`Module`].
    fn as_module(&self) -> Module;

    /// Number of ring components of an element.
    fn dimension(&self) -> usize {
        self.as_module().dimension()
    }

    /// The underlying ring.
    fn ring(&self) -> Ring {
        self.as_module().ring()
    }

    /// Returns true if this is a null module.
    fn is_null_module(&self) -> bool {
        self.dimension() == 0
    }

    /// The `i`-th component structure, if it exists.
    fn component_module(&self, i: usize) -> Option<Module> {
        self.as_module().component_module(i)
    }

    /// Returns true if `element` belongs to this structure.
    fn has_element(&self, element: &Element) -> bool {
        self.as_module().has_element(element)
    }

    /// Reinterprets `element` in this structure.
    fn cast(&self, element: &Element) -> Option<Element> {
        self.as_module().cast(element)
    }

    /// Builds an element from a list of candidate components.
    fn create_element(&self, components: &[Element]) -> Option<Element> {
        self.as_module().create_element(components)
    }

    /// Parses the textual form of an element.
    fn parse(&self, text: &str) -> Option<Element> {
        self.as_module().parse(text)
    }
}
